//! Drag handling for [`FeedFrame`].

use super::command::FrameCommand;
use super::FeedFrame;
use crate::camera::CameraResource;
use crate::input::{DragEvent, FrameState};

impl<C: CameraResource> FeedFrame<C> {
    /// Process a platform-agnostic drag event.
    ///
    /// This is the gesture entry point. Moves and releases are ignored
    /// while springs are settling or outside activity blocks interaction;
    /// otherwise the recognizer's command (if any) is executed and
    /// returned.
    ///
    /// # Example
    ///
    /// ```ignore
    /// frame.handle_drag(DragEvent::Start);
    /// frame.handle_drag(DragEvent::Move(DragSample::vertical(-40.0, -0.2)));
    /// frame.handle_drag(DragEvent::End(DragSample::vertical(-40.0, -0.2)));
    /// ```
    pub fn handle_drag(&mut self, event: DragEvent) -> Option<FrameCommand> {
        if event != DragEvent::Start
            && (self.interaction_blocked() || self.orchestrator.is_animating())
        {
            if matches!(event, DragEvent::End(_)) {
                self.recognizer.reset();
                self.release_blocked_gesture();
            }
            log::trace!("ignoring {event:?} while busy");
            return None;
        }

        let state = FrameState::capture(&self.orchestrator, &self.feed);
        let command = self.recognizer.handle_event(event, &state)?;
        if !self.execute(command) {
            log::trace!("{command:?} had no effect");
        }
        Some(command)
    }

    /// A release that arrives while drags are blocked still has to let go
    /// of the transition the drag set up, or it would stay on screen and
    /// hold back feed refreshes.
    fn release_blocked_gesture(&mut self) {
        if self.orchestrator.is_animating()
            || self.orchestrator.descriptor().is_none()
        {
            return;
        }
        log::debug!("drag released while blocked, cancelling");
        let _ = self.orchestrator.cancel_active();
    }
}
