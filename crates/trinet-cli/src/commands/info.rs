//! `info` command: basic counts and bounds.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use super::Session;
use crate::output;

#[derive(Debug, Serialize)]
pub struct InfoResult {
    pub vertices: usize,
    pub triangles: usize,
    pub bounds: Option<[[f64; 2]; 2]>,
}

pub fn run(session: &Session, input: &Path) -> Result<()> {
    let result = collect(session, input)?;

    session.info(&format!(
        "{}: {} vertices, {} triangles",
        input.display(),
        result.vertices,
        result.triangles
    ));
    if let Some([min, max]) = result.bounds {
        session.info(&format!(
            "Bounds: {} to {}",
            output::point(min[0], min[1]),
            output::point(max[0], max[1])
        ));
    }
    session.print(&result);

    Ok(())
}

pub fn collect(session: &Session, input: &Path) -> Result<InfoResult> {
    let net = session.load_net(input)?;
    Ok(InfoResult {
        vertices: net.vertex_count(),
        triangles: net.triangle_count(),
        bounds: net
            .bounds()
            .map(|(min, max)| [[min.x, min.y], [max.x, max.y]]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{quiet_session, split_square_file};

    #[test]
    fn test_info_counts() {
        let file = split_square_file();
        let result = collect(&quiet_session(), file.path()).unwrap();
        assert_eq!(result.vertices, 4);
        assert_eq!(result.triangles, 2);
        assert_eq!(result.bounds, Some([[0.0, 0.0], [1.0, 1.0]]));
    }

    #[test]
    fn test_info_missing_file() {
        let err = collect(&quiet_session(), Path::new("/nonexistent/net.json")).unwrap_err();
        assert!(err.to_string().contains("failed to load"));
    }
}
