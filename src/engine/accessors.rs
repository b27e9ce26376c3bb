//! Read-only queries and the presentation snapshot for [`FeedFrame`].

use serde::Serialize;

use super::orchestrator::{Mode, TransitionOrchestrator};
use super::FeedFrame;
use crate::camera::CameraResource;
use crate::compositor::LayerChange;
use crate::feed::{Feed, FeedItem};
use crate::options::Options;
use crate::transition::TransitionDescriptor;

/// Everything a renderer binds to, captured at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct FrameView {
    /// Current mode.
    pub mode: Mode,
    /// Active feed index.
    pub active_index: usize,
    /// Live transition, if any.
    pub descriptor: Option<TransitionDescriptor>,
    /// Base image to render (`None` lets the camera show through).
    pub resolved_base_uri: Option<String>,
    /// Top image to render.
    pub resolved_top_uri: Option<String>,
    /// Whether the top layer is shown.
    pub top_visible: bool,
    /// Top layer offset in pixels.
    pub top_offset: f32,
    /// Camera-to-feed morph progress in `[0, 1]`.
    pub progress: f32,
    /// Whether springs are settling.
    pub animating: bool,
    /// Whether to cover the viewfinder while the camera warms up.
    pub camera_mask: bool,
    /// Photo id leaving the frame in the live transition.
    pub from_photo_id: Option<String>,
    /// Photo id entering the frame in the live transition.
    pub to_photo_id: Option<String>,
    /// Captured photo preview, when one is shown.
    pub captured_uri: Option<String>,
}

impl<C: CameraResource> FeedFrame<C> {
    /// Snapshot for the renderer.
    #[must_use]
    pub fn view(&self) -> FrameView {
        let orch = &self.orchestrator;
        let layers = orch.layers();
        let index = orch.active_index();
        let descriptor = orch.descriptor().copied();
        let photo_id = |i: Option<usize>| {
            i.and_then(|i| self.feed.get(i))
                .map(|item| item.photo_id.clone())
        };

        FrameView {
            mode: orch.mode(),
            active_index: index,
            descriptor,
            resolved_base_uri: layers
                .resolved_base(&self.feed, index, descriptor.as_ref())
                .map(str::to_owned),
            resolved_top_uri: layers
                .resolved_top(&self.feed, index)
                .map(str::to_owned),
            top_visible: layers.top_visible(),
            top_offset: layers.top_offset(),
            progress: orch.progress(),
            animating: orch.is_animating(),
            camera_mask: !self.camera.is_ready(),
            from_photo_id: photo_id(descriptor.and_then(|d| d.from_index())),
            to_photo_id: photo_id(descriptor.and_then(|d| d.to_index())),
            captured_uri: self.captured_uri.clone(),
        }
    }

    /// Current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.orchestrator.mode()
    }

    /// Active feed index.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.orchestrator.active_index()
    }

    /// Live transition, if any.
    #[must_use]
    pub fn descriptor(&self) -> Option<&TransitionDescriptor> {
        self.orchestrator.descriptor()
    }

    /// Whether springs are settling.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.orchestrator.is_animating()
    }

    /// Feed item on screen, if the frame is showing the feed.
    #[must_use]
    pub fn current_item(&self) -> Option<&FeedItem> {
        match self.mode() {
            Mode::Feed => self.feed.get(self.active_index()),
            Mode::Camera => None,
        }
    }

    /// Feed currently in use.
    #[must_use]
    pub fn feed(&self) -> &Feed {
        &self.feed
    }

    /// Whether a feed refresh is waiting for the live transition to end.
    #[must_use]
    pub fn has_pending_feed(&self) -> bool {
        self.pending_feed.is_some()
    }

    /// Options the frame was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Transition state machine.
    #[must_use]
    pub fn orchestrator(&self) -> &TransitionOrchestrator {
        &self.orchestrator
    }

    /// Camera collaborator.
    #[must_use]
    pub fn camera(&self) -> &C {
        &self.camera
    }

    /// Mutable camera collaborator, e.g. to report readiness.
    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    /// Drain layer changes since the last call, for renderers that redraw
    /// only on change. Changes are only recorded once this has been called.
    pub fn take_layer_changes(&mut self) -> Vec<LayerChange> {
        self.orchestrator.layers_mut().take_changes()
    }
}
