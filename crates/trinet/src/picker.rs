//! Building a net one picked point at a time.

use nalgebra::Point2;
use tracing::debug;

use crate::error::{NetError, NetResult};
use crate::TriangleNet;

/// Default snap radius in net units.
pub const DEFAULT_SNAP_DISTANCE: f64 = 0.3;

/// Result of picking a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickOutcome {
    /// Point recorded; `pending` points wait for the triangle to complete.
    Pending { point: Point2<f64>, pending: usize },
    /// Third point recorded and the triangle was added to the net.
    TriangleAdded([Point2<f64>; 3]),
}

/// Collects snapped points and turns every third one into a triangle.
#[derive(Debug, Clone)]
pub struct TrianglePicker {
    snap_distance: f64,
    selected: Vec<Point2<f64>>,
}

impl TrianglePicker {
    pub fn new(snap_distance: f64) -> Self {
        Self {
            snap_distance,
            selected: Vec::with_capacity(3),
        }
    }

    #[inline]
    pub fn snap_distance(&self) -> f64 {
        self.snap_distance
    }

    /// Points picked so far for the next triangle.
    #[inline]
    pub fn selected(&self) -> &[Point2<f64>] {
        &self.selected
    }

    /// Where a pick at `cursor` would land.
    pub fn snap(&self, net: &TriangleNet, cursor: Point2<f64>) -> Point2<f64> {
        net.nearest_vertex(cursor, self.snap_distance)
    }

    /// Record the snapped cursor; the third point adds a triangle to `net`.
    ///
    /// A non-finite cursor is rejected without touching the selection. If
    /// adding the triangle fails the first two points are kept.
    pub fn pick(&mut self, net: &mut TriangleNet, cursor: Point2<f64>) -> NetResult<PickOutcome> {
        if !cursor.x.is_finite() || !cursor.y.is_finite() {
            return Err(NetError::NonFiniteCoordinate {
                position: self.selected.len(),
            });
        }

        let point = self.snap(net, cursor);
        self.selected.push(point);

        if self.selected.len() < 3 {
            return Ok(PickOutcome::Pending {
                point,
                pending: self.selected.len(),
            });
        }

        let triangle = [self.selected[0], self.selected[1], self.selected[2]];
        if let Err(e) = net.add_triangle(triangle) {
            self.selected.pop();
            return Err(e);
        }
        self.selected.clear();

        debug!("Picked triangle {:?}", triangle);
        Ok(PickOutcome::TriangleAdded(triangle))
    }

    /// Drop the selected point closest to `cursor`.
    pub fn unpick(&mut self, cursor: Point2<f64>) -> Option<Point2<f64>> {
        let nearest = self
            .selected
            .iter()
            .enumerate()
            .map(|(i, p)| (i, (p - cursor).norm()))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)?;
        Some(self.selected.remove(nearest))
    }

    /// Forget every pending point.
    pub fn reset(&mut self) {
        self.selected.clear();
    }
}

impl Default for TrianglePicker {
    fn default() -> Self {
        Self::new(DEFAULT_SNAP_DISTANCE)
    }
}
