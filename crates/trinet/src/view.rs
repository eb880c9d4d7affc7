//! Mapping between net coordinates and screen coordinates.

use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Default pixels per net unit.
pub const DEFAULT_VIEW_SCALE: f64 = 100.0;

/// Uniform scale plus translation with the Y axis flipped.
///
/// Net coordinates grow upward; screen coordinates grow downward from
/// `origin`, which is where the net's (0, 0) lands on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewTransform {
    pub origin: [f64; 2],
    pub scale: f64,
}

impl ViewTransform {
    pub fn new(origin: Vector2<f64>, scale: f64) -> Self {
        Self {
            origin: [origin.x, origin.y],
            scale,
        }
    }

    #[inline]
    fn origin(&self) -> Vector2<f64> {
        Vector2::new(self.origin[0], self.origin[1])
    }

    /// Net point to screen point.
    #[inline]
    pub fn to_screen(&self, p: Point2<f64>) -> Point2<f64> {
        Point2::new(p.x, -p.y) * self.scale + self.origin()
    }

    /// Screen point back to net coordinates.
    #[inline]
    pub fn to_world(&self, p: Point2<f64>) -> Point2<f64> {
        let v = (p - self.origin()) / self.scale;
        Point2::new(v.x, -v.y)
    }

    /// Net distance to screen distance.
    #[inline]
    pub fn scale_length(&self, len: f64) -> f64 {
        len * self.scale
    }
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0],
            scale: DEFAULT_VIEW_SCALE,
        }
    }
}
