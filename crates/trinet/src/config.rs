//! Serializable settings for nets, picking and display.
//!
//! Settings can be written as TOML or JSON:
//!
//! ```
//! use trinet::NetConfig;
//!
//! let config = NetConfig::from_toml(r#"
//!     precision = 2
//!     snap_distance = 0.5
//!
//!     [view]
//!     origin = [400.0, 400.0]
//!     scale = 80.0
//! "#).unwrap();
//!
//! assert_eq!(config.precision, 2);
//! assert_eq!(config.trace_interval, 0.3);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{NetError, NetResult};
use crate::picker::{TrianglePicker, DEFAULT_SNAP_DISTANCE};
use crate::trace::{TraceAnimator, DEFAULT_TRACE_INTERVAL};
use crate::types::{DEFAULT_KEY_PRECISION, MAX_KEY_PRECISION};
use crate::view::ViewTransform;
use crate::TriangleNet;

/// Settings shared by the library entry points and the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetConfig {
    /// Decimal places used to merge coincident vertices.
    pub precision: u32,

    /// Snap radius for picking and nearest-vertex queries.
    pub snap_distance: f64,

    /// Seconds between polygon trace steps.
    pub trace_interval: f64,

    /// Text size for index labels; edge counts use half of it.
    pub label_size: f64,

    /// Canvas size for rendering, in pixels.
    pub canvas_size: [f64; 2],

    pub view: ViewTransform,
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_KEY_PRECISION,
            snap_distance: DEFAULT_SNAP_DISTANCE,
            trace_interval: DEFAULT_TRACE_INTERVAL,
            label_size: 20.0,
            canvas_size: [800.0, 800.0],
            view: ViewTransform {
                origin: [400.0, 400.0],
                ..ViewTransform::default()
            },
        }
    }
}

impl NetConfig {
    /// Parse from a TOML string.
    pub fn from_toml(s: &str) -> NetResult<Self> {
        let config: Self = toml::from_str(s).map_err(|e| NetError::Config {
            details: e.to_string(),
        })?;
        config.validate()
    }

    /// Parse from a JSON string.
    pub fn from_json(s: &str) -> NetResult<Self> {
        let config: Self = serde_json::from_str(s).map_err(|e| NetError::Config {
            details: e.to_string(),
        })?;
        config.validate()
    }

    pub fn to_toml(&self) -> NetResult<String> {
        toml::to_string_pretty(self).map_err(|e| NetError::Config {
            details: e.to_string(),
        })
    }

    pub fn to_json(&self) -> NetResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| NetError::Config {
            details: e.to_string(),
        })
    }

    /// Load from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> NetResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| NetError::IoRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        debug!("Loading config from {:?}", path);

        match ext.as_deref() {
            Some("toml") => Self::from_toml(&text),
            Some("json") => Self::from_json(&text),
            _ => Err(NetError::UnsupportedFormat { extension: ext }),
        }
    }

    fn validate(self) -> NetResult<Self> {
        if self.precision > MAX_KEY_PRECISION {
            return Err(NetError::Config {
                details: format!(
                    "precision {} exceeds maximum of {}",
                    self.precision, MAX_KEY_PRECISION
                ),
            });
        }
        if self.snap_distance.is_nan() || self.snap_distance < 0.0 {
            return Err(NetError::Config {
                details: format!("snap_distance must be non-negative, got {}", self.snap_distance),
            });
        }
        if !self.view.scale.is_finite() || self.view.scale <= 0.0 {
            return Err(NetError::Config {
                details: format!("view scale must be positive, got {}", self.view.scale),
            });
        }
        Ok(self)
    }

    /// An empty net using this merge precision.
    pub fn net(&self) -> TriangleNet {
        TriangleNet::with_precision(self.precision)
    }

    pub fn picker(&self) -> TrianglePicker {
        TrianglePicker::new(self.snap_distance)
    }

    pub fn animator(&self) -> TraceAnimator {
        TraceAnimator::new(self.trace_interval)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = NetConfig::default();
        assert_eq!(config.precision, 3);
        assert_eq!(config.snap_distance, 0.3);
        assert_eq!(config.view.scale, 100.0);
        assert_eq!(config.net().precision(), 3);
        assert_eq!(config.picker().snap_distance(), 0.3);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = NetConfig::default();
        config.precision = 4;
        config.view.scale = 50.0;

        let text = config.to_toml().unwrap();
        assert_eq!(NetConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = NetConfig::from_json(r#"{ "snap_distance": 0.1 }"#).unwrap();
        assert_eq!(config.snap_distance, 0.1);
        assert_eq!(config.precision, DEFAULT_KEY_PRECISION);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            NetConfig::from_toml("precision = 12"),
            Err(NetError::Config { .. })
        ));
        assert!(NetConfig::from_json(r#"{ "snap_distance": -1.0 }"#).is_err());
        assert!(NetConfig::from_toml("[view]\norigin = [0.0, 0.0]\nscale = 0.0").is_err());
        assert!(NetConfig::from_toml("precision = \"three\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::with_suffix(".toml").unwrap();
        writeln!(file, "precision = 1").unwrap();
        let config = NetConfig::load(file.path()).unwrap();
        assert_eq!(config.precision, 1);

        let file = NamedTempFile::with_suffix(".yaml").unwrap();
        assert!(matches!(
            NetConfig::load(file.path()),
            Err(NetError::UnsupportedFormat { .. })
        ));
    }
}
