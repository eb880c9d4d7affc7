//! Traced boundary polygons.

use nalgebra::Point2;

/// An ordered walk along boundary edges of a net.
///
/// `indices()[i]` is the net vertex whose position is `points()[i]`. The walk
/// may be open or partial when the boundary is not a single simple cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryLoop {
    indices: Vec<u32>,
    points: Vec<Point2<f64>>,
    closed: bool,
}

impl BoundaryLoop {
    /// `closed` marks a walk whose last vertex shares a boundary edge with
    /// the first; it only holds for three or more vertices.
    pub(crate) fn new(indices: Vec<u32>, points: Vec<Point2<f64>>, closed: bool) -> Self {
        debug_assert_eq!(indices.len(), points.len());
        let closed = closed && indices.len() >= 3;
        Self {
            indices,
            points,
            closed,
        }
    }

    /// Vertex indices in traversal order.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Vertex positions in traversal order.
    #[inline]
    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    /// Number of vertices in the walk.
    #[inline]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// A closed loop has at least three vertices and wraps back to its start.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Total edge length, including the closing edge when closed.
    pub fn perimeter(&self) -> f64 {
        let open: f64 = self
            .points
            .windows(2)
            .map(|w| (w[1] - w[0]).norm())
            .sum();

        match (self.is_closed(), self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) => open + (first - last).norm(),
            _ => open,
        }
    }

    /// Shoelace area of the loop; positive for counter-clockwise order.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - b.x * a.y
            })
            .sum();
        twice * 0.5
    }

    /// Consume the loop, keeping only positions.
    pub fn into_points(self) -> Vec<Point2<f64>> {
        self.points
    }

    /// Consume the loop into its indices and positions.
    pub fn into_parts(self) -> (Vec<u32>, Vec<Point2<f64>>) {
        (self.indices, self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_square(closed: bool) -> BoundaryLoop {
        BoundaryLoop::new(
            vec![0, 1, 2, 3],
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            closed,
        )
    }

    #[test]
    fn test_closed_square() {
        let square = unit_square(true);
        assert!(square.is_closed());
        assert_relative_eq!(square.perimeter(), 4.0, epsilon = 1e-12);
        assert_relative_eq!(square.signed_area(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_open_walk_has_no_closing_edge() {
        let walk = unit_square(false);
        assert!(!walk.is_closed());
        assert_relative_eq!(walk.perimeter(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_clockwise_area_is_negative() {
        let mut square = unit_square(true);
        square.points.reverse();
        assert_relative_eq!(square.signed_area(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_two_vertices_never_closed() {
        let walk = BoundaryLoop::new(
            vec![0, 1],
            vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)],
            true,
        );
        assert!(!walk.is_closed());
        assert_eq!(walk.signed_area(), 0.0);
    }
}
