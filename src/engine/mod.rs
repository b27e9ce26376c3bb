//! The per-surface frame context.
//!
//! [`FeedFrame`] is instantiated once per screen that shows the square
//! frame. It owns the feed, the transition orchestrator, the gesture
//! recognizer, and the camera collaborator, so gesture callbacks and
//! animation ticks all read and write one consistent state.

mod accessors;
mod animation;
pub mod command;
mod input;
pub mod orchestrator;

pub use accessors::FrameView;
pub use command::{FrameCommand, GestureTransition};
pub use orchestrator::{Mode, TransitionOrchestrator};

use crate::camera::{CameraResource, CameraSignal};
use crate::error::FeedFrameError;
use crate::feed::{Feed, FeedItem};
use crate::input::GestureRecognizer;
use crate::options::Options;
use crate::util::frame_clock::FrameClock;

/// Gesture-driven camera/feed frame.
///
/// Starts idle in camera mode with an empty feed. The host forwards drag
/// events to [`handle_drag`](Self::handle_drag), advances springs with
/// [`tick`](Self::tick) (or [`advance`](Self::advance) on wall-clock
/// time), and binds its renderer to [`view`](Self::view).
pub struct FeedFrame<C: CameraResource = CameraSignal> {
    options: Options,
    feed: Feed,
    /// Refresh that arrived while a transition was live.
    pending_feed: Option<Feed>,
    orchestrator: TransitionOrchestrator,
    recognizer: GestureRecognizer,
    camera: C,
    clock: FrameClock,
    action_busy: bool,
    captured_uri: Option<String>,
}

fn validate_frame_size(frame_size: f32) -> Result<(), FeedFrameError> {
    if frame_size.is_finite() && frame_size > 0.0 {
        Ok(())
    } else {
        Err(FeedFrameError::InvalidFrameSize(frame_size))
    }
}

impl<C: CameraResource> FeedFrame<C> {
    /// Create a frame of side `frame_size` pixels.
    pub fn new(
        options: Options,
        frame_size: f32,
        camera: C,
    ) -> Result<Self, FeedFrameError> {
        options.validate()?;
        validate_frame_size(frame_size)?;
        let orchestrator =
            TransitionOrchestrator::new(frame_size, options.spring.params());
        let recognizer = GestureRecognizer::new(options.gesture.clone());
        Ok(Self {
            options,
            feed: Feed::default(),
            pending_feed: None,
            orchestrator,
            recognizer,
            camera,
            clock: FrameClock::new(),
            action_busy: false,
            captured_uri: None,
        })
    }

    /// Carry out a command. Returns `true` if it started or continued a
    /// transition; a command whose precondition fails changes nothing.
    pub fn execute(&mut self, command: FrameCommand) -> bool {
        let feed = &self.feed;
        let orchestrator = &mut self.orchestrator;
        match command {
            FrameCommand::Drag { transition, offset } => {
                if !orchestrator.begin_gesture(transition, feed) {
                    return false;
                }
                orchestrator.track(offset);
                true
            }
            FrameCommand::EnterFeed => orchestrator.enter_feed(feed),
            FrameCommand::ExitToCamera => {
                orchestrator.exit_to_camera(feed, &mut self.camera)
            }
            FrameCommand::StepFeed { direction, target } => {
                orchestrator.step_feed(direction, target, feed)
            }
            FrameCommand::NextFeed => orchestrator.next_feed(feed),
            FrameCommand::PreviousFeed => {
                orchestrator.previous_feed(feed, &mut self.camera)
            }
            FrameCommand::CancelActive => orchestrator.cancel_active(),
        }
    }

    /// Animate from the camera into the feed.
    pub fn enter_feed(&mut self) -> bool {
        self.execute(FrameCommand::EnterFeed)
    }

    /// Animate from the feed back to the camera.
    pub fn exit_to_camera(&mut self) -> bool {
        self.execute(FrameCommand::ExitToCamera)
    }

    /// Step to the next (older) item.
    pub fn next_feed(&mut self) -> bool {
        self.execute(FrameCommand::NextFeed)
    }

    /// Step to the previous item, or back to the camera from the first.
    pub fn previous_feed(&mut self) -> bool {
        self.execute(FrameCommand::PreviousFeed)
    }

    /// Replace the feed with a refreshed one.
    ///
    /// While idle the new feed applies at once: the active index is
    /// clamped and the base layer re-synced, without animating. While a
    /// transition is live the refresh is held until it settles.
    pub fn set_feed(&mut self, items: Vec<FeedItem>) {
        let feed = Feed::new(items);
        if self.orchestrator.is_idle() {
            self.apply_feed(feed);
        } else {
            log::debug!("deferring feed refresh of {} items", feed.len());
            self.pending_feed = Some(feed);
        }
    }

    fn apply_feed(&mut self, feed: Feed) {
        self.feed = feed;
        let _ = self.orchestrator.sync_feed(&self.feed);
    }

    /// Apply a held refresh once nothing is live.
    fn apply_pending_feed(&mut self) {
        if !self.orchestrator.is_idle() {
            return;
        }
        if let Some(feed) = self.pending_feed.take() {
            log::debug!("applying deferred feed refresh");
            self.apply_feed(feed);
        }
    }

    /// Resize the frame. A running animation finishes on the spot and a
    /// drag in progress is dropped.
    pub fn set_frame_size(
        &mut self,
        frame_size: f32,
    ) -> Result<(), FeedFrameError> {
        validate_frame_size(frame_size)?;
        self.orchestrator.set_frame_size(frame_size, &self.feed);
        self.apply_pending_feed();
        Ok(())
    }

    /// Mark an external action (upload, invite, ...) as running. Drags are
    /// ignored while it is.
    pub fn set_action_busy(&mut self, busy: bool) {
        self.action_busy = busy;
    }

    /// Show or clear a captured photo preview. Drags are ignored while one
    /// is shown.
    pub fn set_captured_uri(&mut self, uri: Option<String>) {
        self.captured_uri = uri;
    }

    /// Whether drags are currently ignored because of outside activity.
    #[must_use]
    pub fn interaction_blocked(&self) -> bool {
        self.action_busy || self.captured_uri.is_some()
    }
}

impl FeedFrame<CameraSignal> {
    /// Frame with default options and a ready [`CameraSignal`].
    pub fn with_frame_size(frame_size: f32) -> Result<Self, FeedFrameError> {
        Self::new(Options::default(), frame_size, CameraSignal::ready())
    }
}
