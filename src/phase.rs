//! Animation phase with rollback protection.

use embassy_time::Duration;

use crate::math::wrap180;

/// The one piece of state the renderer keeps between frames.
///
/// Time-varying modes derive their position in the animation cycle from the
/// wall clock. If the clock jitters or wraps, a naively recomputed phase can
/// move backward and visibly reverse the animation; this tracker commits a
/// new phase only when it does not step back relative to the last committed
/// one. Each independently configured output owns its own tracker.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhaseTracker {
    previous: f32,
}

impl PhaseTracker {
    pub const fn new() -> Self {
        Self { previous: 0.0 }
    }

    /// Advance the phase to `now` at the given rate and return it.
    ///
    /// `speed` is the scaled speed channel value; the phase advances by
    /// `speed * 360` degrees per second. A candidate phase that would step
    /// backward (its wrapped delta to the committed phase is negative) is
    /// discarded and the committed phase is returned unchanged.
    #[allow(clippy::cast_precision_loss)]
    pub fn advance(&mut self, speed: f32, now: Duration) -> f32 {
        let raw = (speed * now.as_millis() as f32) * 360.0 / 1000.0;
        if wrap180(raw - self.previous) < 0.0 {
            self.previous
        } else {
            self.previous = raw;
            raw
        }
    }

    /// The last committed phase, in degrees, unwrapped.
    pub const fn current(&self) -> f32 {
        self.previous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_with_time() {
        let mut tracker = PhaseTracker::new();
        // 1.0 speed = one full turn per second
        let p1 = tracker.advance(1.0, Duration::from_millis(100));
        let p2 = tracker.advance(1.0, Duration::from_millis(200));
        assert!((p1 - 36.0).abs() < 1e-3);
        assert!((p2 - 72.0).abs() < 1e-3);
    }

    #[test]
    fn monotone_under_increasing_timestamps() {
        let mut tracker = PhaseTracker::new();
        let mut last = 0.0f32;
        for ms in (0..2000).step_by(37) {
            let phase = tracker.advance(0.5, Duration::from_millis(ms));
            assert!(phase >= last);
            last = phase;
        }
    }

    #[test]
    fn out_of_order_timestamp_reuses_committed_phase() {
        let mut tracker = PhaseTracker::new();
        tracker.advance(1.0, Duration::from_millis(100));
        let committed = tracker.advance(1.0, Duration::from_millis(200));
        // clock briefly regresses
        let held = tracker.advance(1.0, Duration::from_millis(150));
        assert_eq!(held, committed);
        assert_eq!(tracker.current(), committed);
        // and recovers
        let next = tracker.advance(1.0, Duration::from_millis(250));
        assert!(next > committed);
    }

    #[test]
    fn zero_speed_stays_at_zero() {
        let mut tracker = PhaseTracker::new();
        assert_eq!(tracker.advance(0.0, Duration::from_millis(123_456)), 0.0);
    }
}
