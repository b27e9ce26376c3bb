//! Spring clock methods for [`FeedFrame`].

use std::time::Duration;

use super::FeedFrame;
use crate::camera::CameraResource;

/// Step used by [`FeedFrame::settle`].
const SETTLE_STEP: Duration = Duration::from_micros(16_667);

/// Upper bound on [`FeedFrame::settle`] steps before the running group is
/// forced onto its targets.
pub(crate) const MAX_SETTLE_FRAMES: usize = 600;

impl<C: CameraResource> FeedFrame<C> {
    /// Advance running springs by `dt`.
    ///
    /// Returns `true` on the tick that completed a transition. A feed
    /// refresh held during the transition is applied on that tick.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let settled = self.orchestrator.tick(dt.as_secs_f32(), &self.feed);
        if settled {
            self.apply_pending_feed();
        }
        settled
    }

    /// Advance running springs by the wall-clock time since the previous
    /// call.
    pub fn advance(&mut self) -> bool {
        let dt = self.clock.tick();
        self.tick(dt)
    }

    /// Run the current animation to completion at 60 steps per second.
    ///
    /// A drag that is still being tracked is left alone.
    pub fn settle(&mut self) {
        let mut frames = 0;
        while self.orchestrator.is_animating() {
            if frames == MAX_SETTLE_FRAMES {
                log::warn!(
                    "animation still running after {frames} frames, \
                     forcing it to rest"
                );
                if self.orchestrator.finish_now(&self.feed) {
                    self.apply_pending_feed();
                }
                break;
            }
            let _ = self.tick(SETTLE_STEP);
            frames += 1;
        }
    }
}
