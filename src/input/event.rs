use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Cumulative drag displacement and current velocity.
///
/// Mirrors what touch systems report for a pan: `delta` is the total
/// travel since the drag began (pixels, +y downward) and `velocity` is in
/// pixels per millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DragSample {
    /// Travel since the drag began, in pixels.
    pub delta: Vec2,
    /// Current velocity, in pixels per millisecond.
    pub velocity: Vec2,
}

impl DragSample {
    /// Purely vertical sample.
    #[must_use]
    pub fn vertical(dy: f32, vy: f32) -> Self {
        Self {
            delta: Vec2::new(0.0, dy),
            velocity: Vec2::new(0.0, vy),
        }
    }
}

/// Platform-agnostic drag events.
///
/// These are fed into a [`GestureRecognizer`](super::GestureRecognizer)
/// which converts them into
/// [`FrameCommand`](crate::engine::FrameCommand) values.
///
/// # Example
///
/// ```ignore
/// frame.handle_drag(DragEvent::Start);
/// frame.handle_drag(DragEvent::Move(DragSample::vertical(-40.0, -0.2)));
/// frame.handle_drag(DragEvent::End(DragSample::vertical(-60.0, -0.3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "sample", rename_all = "snake_case")]
pub enum DragEvent {
    /// Finger went down.
    Start,
    /// Finger moved.
    Move(DragSample),
    /// Finger lifted.
    End(DragSample),
}
