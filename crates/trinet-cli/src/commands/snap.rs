//! `snap` command: nearest-vertex lookup.

use std::path::Path;

use anyhow::Result;
use nalgebra::Point2;
use serde::Serialize;

use super::Session;
use crate::output;

#[derive(Debug, Serialize)]
pub struct SnapResult {
    pub query: [f64; 2],
    pub snapped: [f64; 2],
    pub vertex: Option<u32>,
}

pub fn run(
    session: &Session,
    input: &Path,
    x: f64,
    y: f64,
    max_distance: Option<f64>,
) -> Result<()> {
    let result = collect(session, input, x, y, max_distance)?;

    let msg = match result.vertex {
        Some(i) => format!(
            "Snapped {} to vertex {} at {}",
            output::point(x, y),
            i,
            output::point(result.snapped[0], result.snapped[1])
        ),
        None => format!("No vertex near {}", output::point(x, y)),
    };
    session.info(&msg);
    session.print(&result);

    Ok(())
}

pub fn collect(
    session: &Session,
    input: &Path,
    x: f64,
    y: f64,
    max_distance: Option<f64>,
) -> Result<SnapResult> {
    let net = session.load_net(input)?;
    let query = Point2::new(x, y);
    let max_distance = max_distance.unwrap_or(session.config.snap_distance);

    let vertex = net.nearest_vertex_index(query, max_distance);
    let snapped = net.nearest_vertex(query, max_distance);

    Ok(SnapResult {
        query: [x, y],
        snapped: [snapped.x, snapped.y],
        vertex,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{quiet_session, split_square_file};

    #[test]
    fn test_snap_within_default_distance() {
        let file = split_square_file();
        let result = collect(&quiet_session(), file.path(), 0.9, 1.1, None).unwrap();
        assert_eq!(result.vertex, Some(2));
        assert_eq!(result.snapped, [1.0, 1.0]);
    }

    #[test]
    fn test_snap_out_of_range() {
        let file = split_square_file();
        let result = collect(&quiet_session(), file.path(), 0.5, 0.5, Some(0.1)).unwrap();
        assert_eq!(result.vertex, None);
        assert_eq!(result.snapped, [0.5, 0.5]);
    }
}
