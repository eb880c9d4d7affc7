//! Core geometric types: vertex keys and concrete triangles.

use nalgebra::Point2;

/// Number of decimal places used when merging coincident vertices.
pub const DEFAULT_KEY_PRECISION: u32 = 3;

/// Largest supported merge precision; finer grids overflow `i64` keys quickly.
pub const MAX_KEY_PRECISION: u32 = 9;

// 2^63: the first float outside `i64`.
const KEY_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Canonical key of a vertex position.
///
/// Coordinates are rounded onto a fixed decimal grid and stored as integers,
/// so two points that agree to `precision` decimals hash identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexKey {
    pub x: i64,
    pub y: i64,
}

impl VertexKey {
    /// Compute the key of `point` on a grid of `precision` decimal places.
    ///
    /// Returns None if either coordinate is NaN or infinite, or lands outside
    /// the `i64` range once scaled onto the grid.
    pub fn new(point: &Point2<f64>, precision: u32) -> Option<Self> {
        let grid = 10f64.powi(precision.min(MAX_KEY_PRECISION) as i32);
        Some(Self {
            x: scale_to_grid(point.x, grid)?,
            y: scale_to_grid(point.y, grid)?,
        })
    }
}

fn scale_to_grid(coord: f64, grid: f64) -> Option<i64> {
    let scaled = (coord * grid).round();
    (scaled.is_finite() && scaled >= -KEY_LIMIT && scaled < KEY_LIMIT).then_some(scaled as i64)
}

/// A triangle with concrete vertex positions.
///
/// Utility type for geometric checks on the net's triangles.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Point2<f64>,
    pub v1: Point2<f64>,
    pub v2: Point2<f64>,
}

impl Triangle {
    /// Create a new triangle from three points.
    #[inline]
    pub fn new(v0: Point2<f64>, v1: Point2<f64>, v2: Point2<f64>) -> Self {
        Self { v0, v1, v2 }
    }

    /// Signed area; positive when the winding is counter-clockwise.
    #[inline]
    pub fn signed_area(&self) -> f64 {
        let e1 = self.v1 - self.v0;
        let e2 = self.v2 - self.v0;
        e1.perp(&e2) * 0.5
    }

    /// Unsigned area.
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Compute the centroid.
    #[inline]
    pub fn centroid(&self) -> Point2<f64> {
        Point2::new(
            (self.v0.x + self.v1.x + self.v2.x) / 3.0,
            (self.v0.y + self.v1.y + self.v2.y) / 3.0,
        )
    }

    /// Check if the triangle is degenerate (zero or near-zero area).
    pub fn is_degenerate(&self, epsilon: f64) -> bool {
        self.area() < epsilon
    }
}

/// Axis-aligned bounds of a point set as (min_corner, max_corner).
pub fn bounds_of(points: &[Point2<f64>]) -> Option<(Point2<f64>, Point2<f64>)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;

    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    Some((min, max))
}
