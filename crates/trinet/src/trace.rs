//! Timed reveal of a traced polygon.

/// Default seconds between reveal steps.
pub const DEFAULT_TRACE_INTERVAL: f64 = 0.3;

/// Steps through a polygon one edge at a time, then starts over.
///
/// The current [`step`](Self::step) is the `until` argument for
/// [`draw_polygon`](crate::draw::draw_polygon).
#[derive(Debug, Clone)]
pub struct TraceAnimator {
    interval: f64,
    timer: f64,
    step: usize,
}

impl TraceAnimator {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            timer: 0.0,
            step: 0,
        }
    }

    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }

    /// Advance by `dt` seconds for a polygon of `polygon_len` vertices.
    ///
    /// Once the accumulated time exceeds the interval, the step moves on,
    /// cycling through `0..=polygon_len`.
    pub fn advance(&mut self, dt: f64, polygon_len: usize) -> usize {
        if self.timer > self.interval {
            self.step = (self.step + 1) % (polygon_len + 1);
            self.timer = 0.0;
        }
        self.timer += dt;
        self.step
    }

    /// Start again from the first vertex.
    pub fn restart(&mut self) {
        self.timer = 0.0;
        self.step = 0;
    }
}

impl Default for TraceAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_TRACE_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_after_interval() {
        let mut trace = TraceAnimator::new(0.3);
        assert_eq!(trace.advance(0.2, 4), 0);
        assert_eq!(trace.advance(0.2, 4), 0);
        // 0.4 accumulated, over the interval.
        assert_eq!(trace.advance(0.2, 4), 1);
        assert_eq!(trace.advance(0.2, 4), 1);
    }

    #[test]
    fn test_wraps_after_full_outline() {
        let mut trace = TraceAnimator::new(0.0);
        let steps: Vec<_> = (0..8).map(|_| trace.advance(0.1, 3)).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_polygon_stays_at_zero() {
        let mut trace = TraceAnimator::new(0.0);
        for _ in 0..5 {
            assert_eq!(trace.advance(1.0, 0), 0);
        }
    }

    #[test]
    fn test_restart() {
        let mut trace = TraceAnimator::new(0.0);
        trace.advance(1.0, 3);
        trace.advance(1.0, 3);
        assert_eq!(trace.step(), 1);
        trace.restart();
        assert_eq!(trace.step(), 0);
    }
}
