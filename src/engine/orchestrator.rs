//! Transition state machine behind the square frame.
//!
//! The orchestrator owns the mode (camera or feed), the active feed index,
//! the single live [`TransitionDescriptor`], the layer compositor, and the
//! running spring group. Every operation follows the same shape: check
//! preconditions, set up descriptor and layers, start springs, and on the
//! group's completion apply the terminal state and clear transient state.
//!
//! While a spring group runs the orchestrator is locked: new requests are
//! dropped, not queued. A request whose precondition fails returns `false`
//! and changes nothing.

use serde::Serialize;

use super::command::GestureTransition;
use crate::animation::{AnimationGroup, Channel, SpringParams};
use crate::camera::CameraResource;
use crate::compositor::LayerCompositor;
use crate::feed::Feed;
use crate::transition::{StepDirection, TransitionDescriptor};

/// What the frame shows when no transition is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Live camera viewfinder.
    #[default]
    Camera,
    /// A photo from the feed.
    Feed,
}

/// Terminal state applied when a spring group completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Settle {
    EnteredFeed,
    ExitedToCamera,
    Stepped { to: usize },
    Cancelled,
}

#[derive(Debug, Clone)]
struct ActiveAnimation {
    group: AnimationGroup,
    settle: Settle,
}

/// Serializes frame transitions and drives their springs.
#[derive(Debug, Clone)]
pub struct TransitionOrchestrator {
    mode: Mode,
    index: usize,
    descriptor: Option<TransitionDescriptor>,
    progress: f32,
    layers: LayerCompositor,
    active: Option<ActiveAnimation>,
    frame_size: f32,
    spring: SpringParams,
}

impl TransitionOrchestrator {
    /// Idle in camera mode at index 0.
    ///
    /// `frame_size` must be positive; [`FeedFrame`](super::FeedFrame)
    /// validates it before constructing the orchestrator.
    #[must_use]
    pub fn new(frame_size: f32, spring: SpringParams) -> Self {
        Self {
            mode: Mode::Camera,
            index: 0,
            descriptor: None,
            progress: 0.0,
            layers: LayerCompositor::new(),
            active: None,
            frame_size,
            spring,
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Index of the feed item on screen (or last on screen, in camera mode).
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.index
    }

    /// The live transition, if any.
    #[must_use]
    pub fn descriptor(&self) -> Option<&TransitionDescriptor> {
        self.descriptor.as_ref()
    }

    /// Camera-to-feed morph progress: 0 shows the camera, 1 the feed.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Frame side length in pixels.
    #[must_use]
    pub fn frame_size(&self) -> f32 {
        self.frame_size
    }

    /// Layer state.
    #[must_use]
    pub fn layers(&self) -> &LayerCompositor {
        &self.layers
    }

    /// Mutable layer state, for draining change events.
    pub fn layers_mut(&mut self) -> &mut LayerCompositor {
        &mut self.layers
    }

    /// Whether a spring group is running. While it is, every request is
    /// dropped.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Whether nothing is live: no descriptor and no running springs.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.descriptor.is_none()
    }

    // ── Setup ────────────────────────────────────────────────────────────

    /// Set up `transition` for a drag without starting its springs.
    ///
    /// Returns `true` when the transition is live afterwards, either
    /// because it was just set up or because the same drag already set it
    /// up.
    pub fn begin_gesture(
        &mut self,
        transition: GestureTransition,
        feed: &Feed,
    ) -> bool {
        if self.is_animating() {
            return false;
        }
        let wanted = self.descriptor_for(transition);
        self.ensure(wanted, feed)
    }

    /// Follow the finger: place the top layer at `offset` (clamped to the
    /// frame) and, for camera transitions, derive the morph progress.
    pub fn track(&mut self, offset: f32) {
        let Some(descriptor) = self.descriptor else {
            return;
        };
        if self.is_animating() || !offset.is_finite() {
            return;
        }
        let offset = offset.clamp(0.0, self.frame_size);
        self.layers.set_top_offset(offset);
        if descriptor.kind().involves_camera() {
            self.progress = 1.0 - offset / self.frame_size;
        }
    }

    fn descriptor_for(
        &self,
        transition: GestureTransition,
    ) -> TransitionDescriptor {
        match transition {
            GestureTransition::EnterFeed => {
                TransitionDescriptor::CameraEnter { to: 0 }
            }
            GestureTransition::ExitToCamera => {
                TransitionDescriptor::CameraExit { from: self.index }
            }
            GestureTransition::Step { direction, to } => {
                TransitionDescriptor::FeedStep {
                    from: self.index,
                    to,
                    direction,
                }
            }
        }
    }

    /// Make `wanted` the live descriptor. A live descriptor is only
    /// accepted if it is the same transition (kind and destination).
    fn ensure(&mut self, wanted: TransitionDescriptor, feed: &Feed) -> bool {
        if let Some(live) = self.descriptor {
            let continues = live.continues(wanted.kind(), wanted.to_index());
            if !continues {
                log::trace!("ignoring {wanted:?}: {live:?} is live");
            }
            return continues;
        }
        if !self.setup_allowed(wanted, feed) {
            log::trace!("ignoring {wanted:?}: precondition failed");
            return false;
        }
        self.apply_setup(wanted, feed);
        true
    }

    fn setup_allowed(&self, wanted: TransitionDescriptor, feed: &Feed) -> bool {
        match wanted {
            TransitionDescriptor::CameraEnter { to } => {
                self.mode == Mode::Camera && feed.contains_index(to)
            }
            TransitionDescriptor::CameraExit { from } => {
                self.mode == Mode::Feed && feed.contains_index(from)
            }
            TransitionDescriptor::FeedStep { from, to, .. } => {
                self.mode == Mode::Feed
                    && from != to
                    && feed.contains_index(from)
                    && feed.contains_index(to)
            }
        }
    }

    fn apply_setup(&mut self, descriptor: TransitionDescriptor, feed: &Feed) {
        log::debug!("transition set up: {descriptor:?}");
        let frame = self.frame_size;
        match descriptor {
            TransitionDescriptor::CameraEnter { to } => {
                self.layers.set_base(None);
                self.layers.set_top(feed.image_url(to));
                self.layers.set_top_visible(true);
                self.layers.set_top_offset(frame);
                self.progress = 0.0;
            }
            TransitionDescriptor::CameraExit { from } => {
                self.layers.set_base(None);
                self.layers.set_top(feed.image_url(from));
                self.layers.set_top_visible(true);
                self.layers.set_top_offset(0.0);
                self.progress = 1.0;
            }
            TransitionDescriptor::FeedStep {
                from,
                to,
                direction: StepDirection::Up,
            } => {
                self.layers.set_base(feed.image_url(from));
                self.layers.set_top(feed.image_url(to));
                self.layers.set_top_visible(true);
                self.layers.set_top_offset(frame);
            }
            TransitionDescriptor::FeedStep {
                from,
                to,
                direction: StepDirection::Down,
            } => {
                self.layers.set_base(feed.image_url(to));
                self.layers.set_top(feed.image_url(from));
                self.layers.set_top_visible(true);
                self.layers.set_top_offset(0.0);
            }
        }
        self.descriptor = Some(descriptor);
    }

    // ── Animated operations ──────────────────────────────────────────────

    /// Morph from the camera into the first feed photo.
    ///
    /// Finishes a drag-seeded camera-enter from wherever the finger left
    /// it; otherwise sets the transition up first.
    pub fn enter_feed(&mut self, feed: &Feed) -> bool {
        if self.is_animating()
            || !self.ensure(TransitionDescriptor::CameraEnter { to: 0 }, feed)
        {
            return false;
        }
        let offset = self.layers.top_offset();
        let group = AnimationGroup::new()
            .with(Channel::Progress, self.progress, 1.0, self.spring)
            .with(Channel::TopOffset, offset, 0.0, self.spring);
        self.start(group, Settle::EnteredFeed)
    }

    /// Morph from the photo on screen back to the camera, asking the
    /// camera to warm up again so the viewfinder is blank during the morph.
    pub fn exit_to_camera(
        &mut self,
        feed: &Feed,
        camera: &mut dyn CameraResource,
    ) -> bool {
        let wanted = TransitionDescriptor::CameraExit { from: self.index };
        if self.is_animating() || !self.ensure(wanted, feed) {
            return false;
        }
        camera.request_warmup_reset();
        let frame = self.frame_size;
        let offset = self.layers.top_offset();
        let group = AnimationGroup::new()
            .with(Channel::Progress, self.progress, 0.0, self.spring)
            .with(Channel::TopOffset, offset, frame, self.spring);
        self.start(group, Settle::ExitedToCamera)
    }

    /// Step from the active index to `target`.
    pub fn step_feed(
        &mut self,
        direction: StepDirection,
        target: usize,
        feed: &Feed,
    ) -> bool {
        let wanted = TransitionDescriptor::FeedStep {
            from: self.index,
            to: target,
            direction,
        };
        if self.is_animating() || !self.ensure(wanted, feed) {
            return false;
        }
        let end = match direction {
            StepDirection::Up => 0.0,
            StepDirection::Down => self.frame_size,
        };
        let group = AnimationGroup::new().with(
            Channel::TopOffset,
            self.layers.top_offset(),
            end,
            self.spring,
        );
        self.start(group, Settle::Stepped { to: target })
    }

    /// Step to the next (older) item, if there is one.
    pub fn next_feed(&mut self, feed: &Feed) -> bool {
        match StepDirection::Up.target(self.index, feed.len()) {
            Some(target) => self.step_feed(StepDirection::Up, target, feed),
            None => false,
        }
    }

    /// Step to the previous item, or back to the camera from the first.
    pub fn previous_feed(
        &mut self,
        feed: &Feed,
        camera: &mut dyn CameraResource,
    ) -> bool {
        match StepDirection::Down.target(self.index, feed.len()) {
            Some(target) => self.step_feed(StepDirection::Down, target, feed),
            None => self.exit_to_camera(feed, camera),
        }
    }

    /// Animate the live transition back to where its drag started.
    pub fn cancel_active(&mut self) -> bool {
        if self.is_animating() {
            return false;
        }
        let Some(descriptor) = self.descriptor else {
            return false;
        };
        let frame = self.frame_size;
        let offset = self.layers.top_offset();
        let group = match descriptor {
            TransitionDescriptor::CameraEnter { .. } => AnimationGroup::new()
                .with(Channel::Progress, self.progress, 0.0, self.spring)
                .with(Channel::TopOffset, offset, frame, self.spring),
            TransitionDescriptor::CameraExit { .. } => AnimationGroup::new()
                .with(Channel::Progress, self.progress, 1.0, self.spring)
                .with(Channel::TopOffset, offset, 0.0, self.spring),
            TransitionDescriptor::FeedStep {
                direction: StepDirection::Up,
                ..
            } => AnimationGroup::new()
                .with(Channel::TopOffset, offset, frame, self.spring),
            TransitionDescriptor::FeedStep {
                direction: StepDirection::Down,
                ..
            } => AnimationGroup::new()
                .with(Channel::TopOffset, offset, 0.0, self.spring),
        };
        self.start(group, Settle::Cancelled)
    }

    fn start(&mut self, group: AnimationGroup, settle: Settle) -> bool {
        log::debug!("animating {:?} toward {settle:?}", self.descriptor);
        self.active = Some(ActiveAnimation { group, settle });
        true
    }

    // ── Clock ────────────────────────────────────────────────────────────

    /// Advance the running springs by `dt` seconds. Returns `true` on the
    /// tick whose completion applied a terminal state.
    pub fn tick(&mut self, dt: f32, feed: &Feed) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        let complete = active.group.step(dt);
        let progress = active.group.value(Channel::Progress);
        let offset = active.group.value(Channel::TopOffset);

        if let Some(progress) = progress {
            self.progress = progress;
        }
        if let Some(offset) = offset {
            self.layers.set_top_offset(offset);
        }
        if !complete {
            return false;
        }
        match self.active.take() {
            Some(finished) => {
                self.settle(finished.settle, feed);
                true
            }
            None => false,
        }
    }

    /// Jump the running springs to their targets and apply the terminal
    /// state now.
    pub fn finish_now(&mut self, feed: &Feed) -> bool {
        match self.active.as_mut() {
            Some(active) => active.group.finish(),
            None => return false,
        }
        self.tick(0.0, feed)
    }

    fn settle(&mut self, settle: Settle, feed: &Feed) {
        match settle {
            Settle::EnteredFeed => {
                self.mode = Mode::Feed;
                self.index = 0;
            }
            Settle::ExitedToCamera => self.mode = Mode::Camera,
            Settle::Stepped { to } => self.index = to,
            Settle::Cancelled => {}
        }
        log::debug!(
            "settled {settle:?}: mode {:?}, index {}",
            self.mode,
            self.index
        );
        self.descriptor = None;
        self.rest_layers(feed);
    }

    /// Put the layers into the settled invariant: top hidden and parked at
    /// 0, base on the active item.
    fn rest_layers(&mut self, feed: &Feed) {
        self.index = feed.clamp_index(self.index);
        match self.mode {
            Mode::Feed => self.layers.set_base(feed.image_url(self.index)),
            Mode::Camera => {
                if self.layers.base().is_none() && !feed.is_empty() {
                    self.layers.set_base(feed.image_url(self.index));
                }
            }
        }
        self.layers.clear_top();
        self.layers.set_top_offset(0.0);
        self.progress = match self.mode {
            Mode::Feed => 1.0,
            Mode::Camera => 0.0,
        };
    }

    // ── External changes ─────────────────────────────────────────────────

    /// Drop a drag-seeded transition without animating, restoring the
    /// pre-gesture state.
    pub fn abort_gesture(&mut self, feed: &Feed) -> bool {
        if self.is_animating() || self.descriptor.is_none() {
            return false;
        }
        log::debug!("aborting {:?}", self.descriptor);
        self.descriptor = None;
        self.rest_layers(feed);
        true
    }

    /// Re-align index and layers with a refreshed feed. Only acts while
    /// idle, and never starts a transition.
    pub fn sync_feed(&mut self, feed: &Feed) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.rest_layers(feed);
        true
    }

    /// Change the frame size. A running animation is finished on the
    /// spot; a drag in progress is abandoned.
    pub fn set_frame_size(&mut self, frame_size: f32, feed: &Feed) {
        if self.frame_size == frame_size {
            return;
        }
        if !self.finish_now(feed) {
            let _ = self.abort_gesture(feed);
        }
        self.frame_size = frame_size;
    }
}
