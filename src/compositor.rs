//! Two-layer image compositor behind the frame.
//!
//! A base layer and a top layer are stacked inside the square frame; the
//! top layer slides vertically to give the illusion of one photo moving
//! over another. Setters only record a change when the value actually
//! differs, so a frame-accurate renderer bound to [`LayerChange`] events
//! never redraws for a no-op. Nothing is recorded until the first
//! [`take_changes`](LayerCompositor::take_changes), so hosts that only
//! poll snapshots never accumulate a log.

use serde::Serialize;

use crate::feed::Feed;
use crate::transition::TransitionDescriptor;

/// One effective mutation of the layer state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "layer", content = "value", rename_all = "snake_case")]
pub enum LayerChange {
    /// Base layer image replaced.
    Base(Option<String>),
    /// Top layer image replaced.
    Top(Option<String>),
    /// Top layer shown or hidden.
    TopVisible(bool),
    /// Top layer moved.
    TopOffset(f32),
}

/// Base/top layer state.
///
/// `top_offset` ranges over `[0, frame_size]`: 0 means the top layer fully
/// covers the frame, `frame_size` means it sits just below it.
#[derive(Debug, Clone, Default)]
pub struct LayerCompositor {
    base: Option<String>,
    top: Option<String>,
    top_visible: bool,
    top_offset: f32,
    recording: bool,
    changes: Vec<LayerChange>,
}

impl LayerCompositor {
    /// Empty compositor: no images, top hidden at offset 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit base layer image.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Explicit top layer image.
    #[must_use]
    pub fn top(&self) -> Option<&str> {
        self.top.as_deref()
    }

    /// Whether the top layer is shown.
    #[must_use]
    pub fn top_visible(&self) -> bool {
        self.top_visible
    }

    /// Current top layer offset in pixels.
    #[must_use]
    pub fn top_offset(&self) -> f32 {
        self.top_offset
    }

    /// Replace the base image.
    pub fn set_base(&mut self, uri: Option<&str>) {
        if self.base.as_deref() == uri {
            return;
        }
        self.base = uri.map(str::to_owned);
        self.record(LayerChange::Base(self.base.clone()));
    }

    /// Replace the top image.
    pub fn set_top(&mut self, uri: Option<&str>) {
        if self.top.as_deref() == uri {
            return;
        }
        self.top = uri.map(str::to_owned);
        self.record(LayerChange::Top(self.top.clone()));
    }

    /// Show or hide the top layer.
    pub fn set_top_visible(&mut self, visible: bool) {
        if self.top_visible == visible {
            return;
        }
        self.top_visible = visible;
        self.record(LayerChange::TopVisible(visible));
    }

    /// Move the top layer.
    pub fn set_top_offset(&mut self, offset: f32) {
        if self.top_offset == offset {
            return;
        }
        self.top_offset = offset;
        self.record(LayerChange::TopOffset(offset));
    }

    /// Hide the top layer and drop its image.
    pub fn clear_top(&mut self) {
        self.set_top_visible(false);
        self.set_top(None);
    }

    /// Drain the changes recorded since the last call. The first call
    /// turns recording on.
    pub fn take_changes(&mut self) -> Vec<LayerChange> {
        self.recording = true;
        std::mem::take(&mut self.changes)
    }

    /// Number of changes waiting to be drained.
    #[must_use]
    pub fn pending_changes(&self) -> usize {
        self.changes.len()
    }

    fn record(&mut self, change: LayerChange) {
        if self.recording {
            self.changes.push(change);
        }
    }

    /// Base image to render.
    ///
    /// Nothing while the camera is part of the live transition, so the
    /// viewfinder shows through; otherwise the explicit base, falling back
    /// to the active item and then to the first item.
    #[must_use]
    pub fn resolved_base<'a>(
        &'a self,
        feed: &'a Feed,
        active_index: usize,
        descriptor: Option<&TransitionDescriptor>,
    ) -> Option<&'a str> {
        if descriptor.is_some_and(|d| d.kind().involves_camera()) {
            return None;
        }
        self.fallback_chain(feed, active_index)
    }

    /// Top image to render: the explicit top, or while the top is shown the
    /// same fallback chain as the base.
    #[must_use]
    pub fn resolved_top<'a>(
        &'a self,
        feed: &'a Feed,
        active_index: usize,
    ) -> Option<&'a str> {
        if let Some(top) = self.top.as_deref() {
            return Some(top);
        }
        if self.top_visible {
            return self.fallback_chain(feed, active_index);
        }
        None
    }

    fn fallback_chain<'a>(
        &'a self,
        feed: &'a Feed,
        active_index: usize,
    ) -> Option<&'a str> {
        self.base
            .as_deref()
            .or_else(|| feed.image_url(active_index))
            .or_else(|| feed.image_url(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::test_item;
    use crate::transition::StepDirection;

    fn feed() -> Feed {
        Feed::new(vec![test_item("p0", 3), test_item("p1", 2)])
    }

    #[test]
    fn equal_values_record_no_change() {
        let mut layers = LayerCompositor::new();
        assert!(layers.take_changes().is_empty());
        layers.set_base(Some("a"));
        layers.set_top(Some("b"));
        layers.set_top_visible(true);
        layers.set_top_offset(12.0);
        assert_eq!(layers.take_changes().len(), 4);

        layers.set_base(Some("a"));
        layers.set_top(Some("b"));
        layers.set_top_visible(true);
        layers.set_top_offset(12.0);
        assert!(layers.take_changes().is_empty());
    }

    #[test]
    fn changes_are_recorded_in_order() {
        let mut layers = LayerCompositor::new();
        let _ = layers.take_changes();
        layers.set_top(Some("t"));
        layers.set_top_visible(true);
        layers.clear_top();
        assert_eq!(
            layers.take_changes(),
            vec![
                LayerChange::Top(Some("t".to_owned())),
                LayerChange::TopVisible(true),
                LayerChange::TopVisible(false),
                LayerChange::Top(None),
            ]
        );
        assert!(layers.take_changes().is_empty());
    }

    #[test]
    fn nothing_is_recorded_before_the_first_drain() {
        let mut layers = LayerCompositor::new();
        for i in 0..100 {
            layers.set_top_offset(i as f32);
        }
        assert_eq!(layers.pending_changes(), 0);
        assert_eq!(layers.top_offset(), 99.0);

        assert!(layers.take_changes().is_empty());
        layers.set_top_offset(1.0);
        assert_eq!(layers.pending_changes(), 1);
    }

    #[test]
    fn resolved_base_hides_during_camera_transitions() {
        let feed = feed();
        let mut layers = LayerCompositor::new();
        layers.set_base(Some("explicit"));

        let enter = TransitionDescriptor::CameraEnter { to: 0 };
        assert_eq!(layers.resolved_base(&feed, 0, Some(&enter)), None);

        let exit = TransitionDescriptor::CameraExit { from: 1 };
        assert_eq!(layers.resolved_base(&feed, 1, Some(&exit)), None);

        let step = TransitionDescriptor::FeedStep {
            from: 0,
            to: 1,
            direction: StepDirection::Up,
        };
        assert_eq!(
            layers.resolved_base(&feed, 0, Some(&step)),
            Some("explicit")
        );
    }

    #[test]
    fn resolved_base_falls_back_to_feed() {
        let feed = feed();
        let layers = LayerCompositor::new();
        assert_eq!(
            layers.resolved_base(&feed, 1, None),
            Some("https://img.test/p1.jpg")
        );
        // Pruned index falls back to the first item.
        assert_eq!(
            layers.resolved_base(&feed, 9, None),
            Some("https://img.test/p0.jpg")
        );
        assert_eq!(layers.resolved_base(&Feed::default(), 0, None), None);
    }

    #[test]
    fn resolved_top_only_falls_back_when_visible() {
        let feed = feed();
        let mut layers = LayerCompositor::new();
        assert_eq!(layers.resolved_top(&feed, 0), None);

        layers.set_top_visible(true);
        assert_eq!(
            layers.resolved_top(&feed, 1),
            Some("https://img.test/p1.jpg")
        );

        layers.set_top(Some("top"));
        assert_eq!(layers.resolved_top(&feed, 1), Some("top"));
    }
}
