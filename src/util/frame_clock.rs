//! Wall-clock frame stepping for hosts without their own clock.

use web_time::{Duration, Instant};

/// Longest step handed to the springs in one tick.
///
/// A host that stalls (backgrounded tab, debugger pause) would otherwise
/// feed one huge `dt` and make every spring jump straight to rest.
pub const MAX_FRAME_STEP: Duration = Duration::from_millis(64);

/// Wall-clock source for
/// [`FeedFrame::advance`](crate::engine::FeedFrame::advance).
#[derive(Debug, Clone, Copy)]
pub struct FrameClock {
    /// Last tick timestamp
    last_tick: Instant,
}

impl FrameClock {
    /// Clock starting now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            last_tick: Instant::now(),
        }
    }

    /// Time since the previous tick, clamped to [`MAX_FRAME_STEP`].
    pub fn tick(&mut self) -> Duration {
        self.tick_at(Instant::now())
    }

    /// Like [`tick`](Self::tick) with an explicit timestamp. A timestamp
    /// earlier than the previous one yields zero.
    pub fn tick_at(&mut self, now: Instant) -> Duration {
        let elapsed = now.saturating_duration_since(self.last_tick);
        if now > self.last_tick {
            self.last_tick = now;
        }
        elapsed.min(MAX_FRAME_STEP)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_reports_elapsed_time() {
        let start = Instant::now();
        let mut clock = FrameClock { last_tick: start };
        assert_eq!(
            clock.tick_at(start + Duration::from_millis(16)),
            Duration::from_millis(16)
        );
        assert_eq!(
            clock.tick_at(start + Duration::from_millis(20)),
            Duration::from_millis(4)
        );
    }

    #[test]
    fn long_stalls_are_clamped() {
        let start = Instant::now();
        let mut clock = FrameClock { last_tick: start };
        assert_eq!(
            clock.tick_at(start + Duration::from_secs(3)),
            MAX_FRAME_STEP
        );
    }

    #[test]
    fn time_going_backwards_yields_zero() {
        let start = Instant::now() + Duration::from_secs(1);
        let mut clock = FrameClock { last_tick: start };
        assert_eq!(
            clock.tick_at(start - Duration::from_millis(5)),
            Duration::ZERO
        );
    }
}
