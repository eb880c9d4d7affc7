//! `validate` command: boundary/internal statistics.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;
use trinet::{log_validation, validate_net, NetReport};

use super::Session;

#[derive(Debug, Serialize)]
pub struct ValidateResult {
    pub vertices: usize,
    pub triangles: usize,
    pub boundary_edges: usize,
    pub internal_edges: usize,
    pub non_manifold_edges: usize,
    pub boundary_vertices: usize,
    pub internal_vertices: usize,
    pub degenerate_triangles: usize,
    pub polygon_len: usize,
    pub polygon_closed: bool,
    pub simple_boundary: bool,
}

impl From<&NetReport> for ValidateResult {
    fn from(report: &NetReport) -> Self {
        Self {
            vertices: report.vertex_count,
            triangles: report.triangle_count,
            boundary_edges: report.boundary_edge_count,
            internal_edges: report.internal_edge_count,
            non_manifold_edges: report.non_manifold_edge_count,
            boundary_vertices: report.boundary_vertex_count,
            internal_vertices: report.internal_vertex_count,
            degenerate_triangles: report.degenerate_triangle_count,
            polygon_len: report.polygon_len,
            polygon_closed: report.polygon_closed,
            simple_boundary: report.has_simple_boundary(),
        }
    }
}

pub fn run(session: &Session, input: &Path) -> Result<()> {
    let net = session.load_net(input)?;
    let report = validate_net(&net);
    log_validation(&report);

    session.block(&report);

    if report.has_simple_boundary() {
        session.success("Boundary is a single closed polygon");
    } else {
        session.warning(&format!(
            "Boundary walk covered {} of {} boundary vertices",
            report.polygon_len, report.boundary_vertex_count
        ));
    }

    session.print(&ValidateResult::from(&report));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{quiet_session, split_square_file};

    #[test]
    fn test_validate_result_from_report() {
        let file = split_square_file();
        let session = quiet_session();
        let net = session.load_net(file.path()).unwrap();
        let result = ValidateResult::from(&validate_net(&net));

        assert_eq!(result.boundary_edges, 4);
        assert_eq!(result.internal_edges, 1);
        assert!(result.simple_boundary);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["polygon_len"], 4);
    }

    #[test]
    fn test_run_quiet() {
        let file = split_square_file();
        run(&quiet_session(), file.path()).unwrap();
    }
}
