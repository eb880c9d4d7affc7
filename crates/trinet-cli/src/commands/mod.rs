//! CLI command implementations.

use std::path::Path;

use anyhow::{Context, Result};
use trinet::{NetConfig, TriangleNet};

use crate::OutputFormat;

pub mod info;
pub mod polygon;
pub mod render;
pub mod snap;
pub mod validate;

/// Settings shared by every command invocation.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: NetConfig,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Session {
    /// Load a triangle file into a net using the configured precision.
    pub fn load_net(&self, input: &Path) -> Result<TriangleNet> {
        trinet::load_net(input, self.config.precision)
            .with_context(|| format!("failed to load {}", input.display()))
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    /// A JSON file holding a unit square split along its diagonal.
    pub fn split_square_file() -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".json").unwrap();
        write!(file, "[[0, 0], [1, 0], [1, 1], [0, 0], [1, 1], [0, 1]]").unwrap();
        file
    }

    pub fn quiet_session() -> Session {
        Session {
            config: NetConfig::default(),
            format: OutputFormat::Json,
            quiet: true,
        }
    }
}
