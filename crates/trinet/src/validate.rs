//! Net validation and reporting.

use nalgebra::Point2;
use tracing::{debug, info, warn};

use crate::TriangleNet;

/// Area below which a triangle counts as degenerate.
const DEGENERATE_AREA: f64 = 1e-12;

/// Validation report for a triangle net.
#[derive(Debug, Clone)]
pub struct NetReport {
    /// Total merged vertex count.
    pub vertex_count: usize,

    /// Total triangle count.
    pub triangle_count: usize,

    /// Undirected edges used by exactly one triangle.
    pub boundary_edge_count: usize,

    /// Undirected edges shared by two or more triangles.
    pub internal_edge_count: usize,

    /// Undirected edges shared by more than two triangles.
    pub non_manifold_edge_count: usize,

    /// Vertices touching at least one boundary edge.
    pub boundary_vertex_count: usize,

    /// Vertices whose edges are all shared.
    pub internal_vertex_count: usize,

    /// Triangles with repeated vertices or zero area.
    pub degenerate_triangle_count: usize,

    /// Number of vertices visited by the boundary walk.
    pub polygon_len: usize,

    /// Whether the boundary walk wraps back to its start.
    pub polygon_closed: bool,

    /// Bounding box as (min_corner, max_corner).
    pub bounds: Option<(Point2<f64>, Point2<f64>)>,
}

impl NetReport {
    /// Check if the net has anything in it.
    pub fn is_valid(&self) -> bool {
        self.vertex_count > 0 && self.triangle_count > 0
    }

    /// Check if the boundary walk traced one closed loop through every boundary vertex.
    pub fn has_simple_boundary(&self) -> bool {
        self.polygon_closed && self.polygon_len == self.boundary_vertex_count
    }
}

impl std::fmt::Display for NetReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Net Report:")?;
        writeln!(f, "  Vertices: {}", self.vertex_count)?;
        writeln!(f, "  Triangles: {}", self.triangle_count)?;

        if let Some((min, max)) = &self.bounds {
            writeln!(
                f,
                "  Bounds: [{:.3}, {:.3}] to [{:.3}, {:.3}]",
                min.x, min.y, max.x, max.y
            )?;
        }

        writeln!(
            f,
            "  Edges: {} boundary, {} internal (non-manifold: {})",
            self.boundary_edge_count, self.internal_edge_count, self.non_manifold_edge_count
        )?;

        writeln!(
            f,
            "  Vertices on boundary: {} (internal: {})",
            self.boundary_vertex_count, self.internal_vertex_count
        )?;

        if self.degenerate_triangle_count > 0 {
            writeln!(f, "  Degenerate triangles: {}", self.degenerate_triangle_count)?;
        }

        writeln!(
            f,
            "  Polygon: {} vertices, {}",
            self.polygon_len,
            if self.polygon_closed { "closed" } else { "OPEN" }
        )?;

        Ok(())
    }
}

/// Validate a net and return a report.
pub fn validate_net(net: &TriangleNet) -> NetReport {
    let adjacency = net.adjacency();

    let boundary_edge_count = adjacency.boundary_edge_count();
    let internal_edge_count = adjacency.edges().count() - boundary_edge_count;
    let non_manifold_edge_count = adjacency.non_manifold_edge_count();

    let internal_vertex_count = (0..net.vertex_count() as u32)
        .filter(|&u| adjacency.is_vertex_internal(u))
        .count();

    let degenerate_triangle_count = net
        .triangles()
        .iter()
        .zip(net.triangle_shapes())
        .filter(|(&[a, b, c], shape)| {
            a == b || b == c || a == c || shape.is_degenerate(DEGENERATE_AREA)
        })
        .count();

    let walk = net.boundary_loop();

    let report = NetReport {
        vertex_count: net.vertex_count(),
        triangle_count: net.triangle_count(),
        boundary_edge_count,
        internal_edge_count,
        non_manifold_edge_count,
        boundary_vertex_count: net.vertex_count() - internal_vertex_count,
        internal_vertex_count,
        degenerate_triangle_count,
        polygon_len: walk.len(),
        polygon_closed: walk.is_closed(),
        bounds: net.bounds(),
    };

    if report.non_manifold_edge_count > 0 {
        warn!(
            "Net has {} edges shared by more than two triangles",
            report.non_manifold_edge_count
        );
    }

    if report.degenerate_triangle_count > 0 {
        warn!(
            "Net has {} degenerate triangles",
            report.degenerate_triangle_count
        );
    }

    if report.is_valid() && !report.has_simple_boundary() {
        warn!(
            "Boundary walk covered {} of {} boundary vertices (closed: {})",
            report.polygon_len, report.boundary_vertex_count, report.polygon_closed
        );
    }

    debug!("{}", report);

    report
}

/// Log a summary of net validation.
pub fn log_validation(report: &NetReport) {
    info!(
        "Net: {} verts, {} triangles, {} boundary edges",
        report.vertex_count, report.triangle_count, report.boundary_edge_count
    );

    if report.has_simple_boundary() {
        info!("Boundary is a single closed polygon of {} vertices", report.polygon_len);
    } else if report.boundary_vertex_count == 0 {
        warn!("Net has no boundary vertices");
    } else {
        warn!(
            "Boundary is not a single closed loop: traced {} of {} boundary vertices",
            report.polygon_len, report.boundary_vertex_count
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point2<f64> {
        Point2::new(x, y)
    }

    fn split_square() -> TriangleNet {
        let mut net = TriangleNet::new();
        net.add_triangles(&[
            p(0.0, 0.0),
            p(1.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 0.0),
            p(1.0, 1.0),
            p(0.0, 1.0),
        ])
        .unwrap();
        net
    }

    #[test]
    fn test_validate_split_square() {
        let report = validate_net(&split_square());

        assert!(report.is_valid());
        assert_eq!(report.vertex_count, 4);
        assert_eq!(report.triangle_count, 2);
        assert_eq!(report.boundary_edge_count, 4);
        assert_eq!(report.internal_edge_count, 1);
        assert_eq!(report.non_manifold_edge_count, 0);
        assert_eq!(report.boundary_vertex_count, 4);
        assert_eq!(report.internal_vertex_count, 0);
        assert_eq!(report.polygon_len, 4);
        assert!(report.polygon_closed);
        assert!(report.has_simple_boundary());
    }

    #[test]
    fn test_validate_fan_with_interior_vertex() {
        // Four triangles around the centre of a square.
        let c = p(0.5, 0.5);
        let corners = [p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        let mut net = TriangleNet::new();
        for i in 0..4 {
            net.add_triangle([c, corners[i], corners[(i + 1) % 4]]).unwrap();
        }

        let report = validate_net(&net);
        assert_eq!(report.vertex_count, 5);
        assert_eq!(report.internal_vertex_count, 1);
        assert_eq!(report.boundary_vertex_count, 4);
        assert_eq!(report.boundary_edge_count, 4);
        assert_eq!(report.internal_edge_count, 4);
        assert!(report.has_simple_boundary());
    }

    #[test]
    fn test_validate_edge_shared_by_three_triangles() {
        let mut net = TriangleNet::new();
        for apex in [p(0.5, 1.0), p(0.5, -1.0), p(0.5, 2.0)] {
            net.add_triangle([p(0.0, 0.0), p(1.0, 0.0), apex]).unwrap();
        }

        let report = validate_net(&net);
        assert_eq!(report.non_manifold_edge_count, 1);
        assert_eq!(report.internal_edge_count, 1);
        assert_eq!(report.boundary_edge_count, 6);
    }

    #[test]
    fn test_validate_degenerate_triangle() {
        let mut net = TriangleNet::new();
        net.add_triangles(&[p(0.0, 0.0), p(1.0, 0.0), p(2.0, 0.0)])
            .unwrap();
        net.add_triangles(&[p(5.0, 5.0), p(5.0, 5.0), p(6.0, 6.0)])
            .unwrap();

        let report = validate_net(&net);
        assert_eq!(report.degenerate_triangle_count, 2);
    }

    #[test]
    fn test_validate_empty_net() {
        let report = validate_net(&TriangleNet::new());
        assert!(!report.is_valid());
        assert_eq!(report.polygon_len, 0);
        assert!(report.bounds.is_none());
    }

    #[test]
    fn test_report_display() {
        let report = validate_net(&split_square());
        let output = format!("{}", report);

        assert!(output.contains("Vertices: 4"));
        assert!(output.contains("Triangles: 2"));
        assert!(output.contains("4 boundary, 1 internal"));
        assert!(output.contains("closed"));
    }
}
