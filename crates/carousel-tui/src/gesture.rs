use std::time::Instant;

use carousel_core::Velocity;

use crate::velocity::VelocityTracker1D;

/// One pointer drag, from press to release.
///
/// Positions are terminal columns; velocity is reported in pixel-equivalent
/// units per second (`column_width_px` per column) so the configured threshold
/// reads the same as on a pixel display.
#[derive(Debug, Clone)]
pub struct DragTracker {
    origin_column: u16,
    last_column: u16,
    started_at: Instant,
    column_width_px: f64,
    tracker: VelocityTracker1D,
}

impl DragTracker {
    pub fn begin(column: u16, now: Instant, column_width_px: f64) -> Self {
        let mut drag = Self {
            origin_column: column,
            last_column: column,
            started_at: now,
            column_width_px,
            tracker: VelocityTracker1D::new(),
        };
        drag.record(column, now);
        drag
    }

    fn record(&mut self, column: u16, now: Instant) {
        let time_ms = now.saturating_duration_since(self.started_at).as_millis() as i64;
        self.tracker
            .add_position(time_ms, column as f64 * self.column_width_px);
        self.last_column = column;
    }

    /// Record a pointer move and return the offset from the press, in columns
    pub fn move_to(&mut self, column: u16, now: Instant) -> f64 {
        self.record(column, now);
        self.offset()
    }

    pub fn offset(&self) -> f64 {
        self.last_column as f64 - self.origin_column as f64
    }

    /// Finish the drag and report the release velocity
    pub fn release(mut self, column: u16, now: Instant) -> Velocity {
        // A release long after the last move reads as a stopped pointer
        self.record(column, now);
        Velocity::new(self.tracker.velocity())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_offset_tracks_columns() {
        let start = Instant::now();
        let mut drag = DragTracker::begin(40, start, 8.0);
        assert_eq!(drag.offset(), 0.0);
        assert_eq!(drag.move_to(35, start + Duration::from_millis(10)), -5.0);
        assert_eq!(drag.move_to(47, start + Duration::from_millis(20)), 7.0);
    }

    #[test]
    fn test_fast_flick_exceeds_threshold() {
        let start = Instant::now();
        let mut drag = DragTracker::begin(60, start, 8.0);
        for step in 1..=4u16 {
            drag.move_to(60 - step * 2, start + Duration::from_millis(step as u64 * 16));
        }
        let velocity = drag.release(52, start + Duration::from_millis(64));
        // 2 columns * 8px every 16ms = 1000 px/s leftward
        assert!(velocity.x < -500.0, "got {}", velocity.x);
    }

    #[test]
    fn test_slow_drag_stays_under_threshold() {
        let start = Instant::now();
        let mut drag = DragTracker::begin(60, start, 8.0);
        for step in 1..=10u16 {
            drag.move_to(60 - step, start + Duration::from_millis(step as u64 * 30));
        }
        let velocity = drag.release(50, start + Duration::from_millis(300));
        assert!(velocity.x.abs() <= 500.0, "got {}", velocity.x);
    }

    #[test]
    fn test_release_after_pause_is_slow() {
        let start = Instant::now();
        let mut drag = DragTracker::begin(60, start, 8.0);
        drag.move_to(40, start + Duration::from_millis(10));
        let velocity = drag.release(40, start + Duration::from_millis(500));
        assert_eq!(velocity.x, 0.0);
    }
}
