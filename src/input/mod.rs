//! Input handling: drag events and the gesture recognizer that converts
//! them into frame commands.

/// Platform-agnostic drag events.
pub mod event;
/// Converts drag events into frame commands.
pub mod processor;

pub use event::{DragEvent, DragSample};
pub use processor::{FrameState, GestureRecognizer, ReleaseDecision};
