//! The frame's complete interactive vocabulary.
//!
//! Every transition request, whether it comes from a drag release, a
//! button, or a programmatic call, is represented as a `FrameCommand`.
//! The gesture recognizer produces them; consumers can also construct
//! them directly and pass them to
//! [`FeedFrame::execute`](super::FeedFrame::execute).

use serde::Serialize;

use crate::transition::StepDirection;

/// Transition a drag sets up lazily before following the finger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GestureTransition {
    /// Camera into the first feed photo.
    EnterFeed,
    /// Current feed photo back to the camera.
    ExitToCamera,
    /// One step through the feed to `to`.
    Step {
        /// Which way the step moves.
        direction: StepDirection,
        /// Destination index.
        to: usize,
    },
}

/// A request to the transition orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum FrameCommand {
    /// Set up `transition` if it is not already live, then place the top
    /// layer at `offset` (1:1 with the finger).
    Drag {
        /// Transition the drag drives.
        transition: GestureTransition,
        /// Top layer offset in pixels, already clamped to the frame.
        offset: f32,
    },
    /// Animate from the camera into the feed.
    EnterFeed,
    /// Animate from the feed back to the camera.
    ExitToCamera,
    /// Animate one step through the feed.
    StepFeed {
        /// Which way the step moves.
        direction: StepDirection,
        /// Destination index.
        target: usize,
    },
    /// Step to the next (older) item if there is one.
    NextFeed,
    /// Step to the previous item, or back to the camera from the first.
    PreviousFeed,
    /// Animate the live transition back to where it started.
    CancelActive,
}
