//! Converts drag events into frame commands.
//!
//! The `GestureRecognizer` owns the per-drag claim state and the gesture
//! thresholds. It never mutates the frame itself: given a snapshot of the
//! frame it returns the [`FrameCommand`] the drag asks for, and the
//! engine's [`execute`](crate::engine::FeedFrame::execute) method carries
//! it out.

use super::event::{DragEvent, DragSample};
use crate::engine::command::{FrameCommand, GestureTransition};
use crate::engine::orchestrator::{Mode, TransitionOrchestrator};
use crate::feed::Feed;
use crate::options::GestureOptions;
use crate::transition::{StepDirection, TransitionDescriptor, TransitionKind};

/// Snapshot of the frame the recognizer decides against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Current mode.
    pub mode: Mode,
    /// Active feed index.
    pub active_index: usize,
    /// Number of feed items.
    pub feed_len: usize,
    /// Live transition, if any.
    pub descriptor: Option<TransitionDescriptor>,
    /// Current top layer offset in pixels.
    pub top_offset: f32,
    /// Frame side length in pixels.
    pub frame_size: f32,
}

impl FrameState {
    /// Capture the state of `orchestrator` over `feed`.
    #[must_use]
    pub fn capture(orchestrator: &TransitionOrchestrator, feed: &Feed) -> Self {
        Self {
            mode: orchestrator.mode(),
            active_index: orchestrator.active_index(),
            feed_len: feed.len(),
            descriptor: orchestrator.descriptor().copied(),
            top_offset: orchestrator.layers().top_offset(),
            frame_size: orchestrator.frame_size(),
        }
    }
}

/// Whether a release commits in either direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseDecision {
    /// Far or fast enough upward.
    pub commit_up: bool,
    /// Far or fast enough downward.
    pub commit_down: bool,
}

/// Converts drag events into [`FrameCommand`]s.
///
/// A drag is only claimed once it travels past the dead zone vertically
/// and more vertically than horizontally; horizontal drags belong to
/// other scrollers. Once claimed, each move either follows the live
/// transition or asks for a new one to be set up, and the release either
/// commits or cancels it.
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    options: GestureOptions,
    claimed: bool,
}

impl GestureRecognizer {
    /// Recognizer with the given thresholds.
    #[must_use]
    pub fn new(options: GestureOptions) -> Self {
        Self {
            options,
            claimed: false,
        }
    }

    /// Thresholds in use.
    #[must_use]
    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// Whether the current drag has been claimed.
    #[must_use]
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Forget the current drag without producing a command.
    pub fn reset(&mut self) {
        self.claimed = false;
    }

    /// Whether `sample` is a vertical drag past the dead zone.
    #[must_use]
    pub fn should_claim(&self, sample: &DragSample) -> bool {
        let dy = sample.delta.y.abs();
        dy > self.options.claim_dead_zone && dy > sample.delta.x.abs()
    }

    /// Process a drag event and return zero or one commands.
    pub fn handle_event(
        &mut self,
        event: DragEvent,
        state: &FrameState,
    ) -> Option<FrameCommand> {
        match event {
            DragEvent::Start => {
                self.claimed = false;
                None
            }
            DragEvent::Move(sample) => self.handle_move(&sample, state),
            DragEvent::End(sample) => {
                self.claimed = false;
                self.handle_release(&sample, state)
            }
        }
    }

    /// Finger moved: follow the live transition, or ask for one.
    fn handle_move(
        &mut self,
        sample: &DragSample,
        state: &FrameState,
    ) -> Option<FrameCommand> {
        if !self.claimed {
            if !self.should_claim(sample) {
                return None;
            }
            self.claimed = true;
        }

        let dy = sample.delta.y;
        let transition = match state.descriptor {
            Some(live) => gesture_for(&live),
            None => Self::requested_transition(dy, state)?,
        };
        let kind = transition_kind(transition);
        let offset = tracked_offset(kind, dy, state.frame_size);
        Some(FrameCommand::Drag { transition, offset })
    }

    /// Transition a fresh drag asks for, if the frame has one in that
    /// direction.
    fn requested_transition(
        dy: f32,
        state: &FrameState,
    ) -> Option<GestureTransition> {
        let index = state.active_index;
        match state.mode {
            Mode::Camera => (dy < 0.0 && state.feed_len > 0)
                .then_some(GestureTransition::EnterFeed),
            Mode::Feed if dy < 0.0 => StepDirection::Up
                .target(index, state.feed_len)
                .map(|to| GestureTransition::Step {
                    direction: StepDirection::Up,
                    to,
                }),
            Mode::Feed if dy > 0.0 => Some(
                StepDirection::Down
                    .target(index, state.feed_len)
                    .map_or(GestureTransition::ExitToCamera, |to| {
                        GestureTransition::Step {
                            direction: StepDirection::Down,
                            to,
                        }
                    }),
            ),
            Mode::Feed => None,
        }
    }

    /// Commit thresholds for a release at `sample` with the top layer at
    /// `state.top_offset`.
    #[must_use]
    pub fn release_decision(
        &self,
        sample: &DragSample,
        state: &FrameState,
    ) -> ReleaseDecision {
        let moved_up = state.frame_size - state.top_offset;
        let moved_down = state.top_offset;
        let distance = state.frame_size * self.options.commit_fraction;
        let vy = sample.velocity.y;
        ReleaseDecision {
            commit_up: moved_up > distance
                || vy < -self.options.commit_velocity,
            commit_down: moved_down > distance
                || vy > self.options.commit_velocity,
        }
    }

    /// Finger lifted: commit or cancel the live transition, or treat an
    /// unclaimed swipe as a request to move one step.
    fn handle_release(
        &self,
        sample: &DragSample,
        state: &FrameState,
    ) -> Option<FrameCommand> {
        if let Some(live) = state.descriptor {
            let decision = self.release_decision(sample, state);
            let kind = live.kind();
            let commit = if kind.commits_upward() {
                decision.commit_up
            } else {
                decision.commit_down
            };
            if !commit {
                return Some(FrameCommand::CancelActive);
            }
            return Some(match live {
                TransitionDescriptor::CameraEnter { .. } => {
                    FrameCommand::EnterFeed
                }
                TransitionDescriptor::CameraExit { .. } => {
                    FrameCommand::ExitToCamera
                }
                TransitionDescriptor::FeedStep { to, direction, .. } => {
                    FrameCommand::StepFeed {
                        direction,
                        target: to,
                    }
                }
            });
        }

        let dy = sample.delta.y;
        let vy = sample.velocity.y;
        let swipe_up = dy < -self.options.tap_distance
            || vy < -self.options.commit_velocity;
        let swipe_down = dy > self.options.tap_distance
            || vy > self.options.commit_velocity;
        match state.mode {
            Mode::Camera => swipe_up.then_some(FrameCommand::EnterFeed),
            Mode::Feed if swipe_up => Some(FrameCommand::NextFeed),
            Mode::Feed if swipe_down => Some(FrameCommand::PreviousFeed),
            Mode::Feed => None,
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureOptions::default())
    }
}

fn gesture_for(descriptor: &TransitionDescriptor) -> GestureTransition {
    match *descriptor {
        TransitionDescriptor::CameraEnter { .. } => {
            GestureTransition::EnterFeed
        }
        TransitionDescriptor::CameraExit { .. } => {
            GestureTransition::ExitToCamera
        }
        TransitionDescriptor::FeedStep { to, direction, .. } => {
            GestureTransition::Step { direction, to }
        }
    }
}

fn transition_kind(transition: GestureTransition) -> TransitionKind {
    match transition {
        GestureTransition::EnterFeed => TransitionKind::CameraEnter,
        GestureTransition::ExitToCamera => TransitionKind::CameraExit,
        GestureTransition::Step {
            direction: StepDirection::Up,
            ..
        } => TransitionKind::FeedStepUp,
        GestureTransition::Step {
            direction: StepDirection::Down,
            ..
        } => TransitionKind::FeedStepDown,
    }
}

/// Top layer offset that keeps the photo under the finger.
///
/// Upward transitions start with the top layer parked below the frame and
/// pull it up; downward ones start with it covering the frame and push it
/// down.
fn tracked_offset(kind: TransitionKind, dy: f32, frame_size: f32) -> f32 {
    let raw = if kind.commits_upward() {
        frame_size + dy
    } else {
        dy
    };
    raw.clamp(0.0, frame_size)
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    const FRAME: f32 = 300.0;

    fn camera(feed_len: usize) -> FrameState {
        FrameState {
            mode: Mode::Camera,
            active_index: 0,
            feed_len,
            descriptor: None,
            top_offset: 0.0,
            frame_size: FRAME,
        }
    }

    fn feed_at(index: usize, feed_len: usize) -> FrameState {
        FrameState {
            mode: Mode::Feed,
            active_index: index,
            ..camera(feed_len)
        }
    }

    fn with_live(
        state: FrameState,
        descriptor: TransitionDescriptor,
        top_offset: f32,
    ) -> FrameState {
        FrameState {
            descriptor: Some(descriptor),
            top_offset,
            ..state
        }
    }

    fn moved(
        recognizer: &mut GestureRecognizer,
        dy: f32,
        state: &FrameState,
    ) -> Option<FrameCommand> {
        let sample = DragSample::vertical(dy, 0.0);
        recognizer.handle_event(DragEvent::Move(sample), state)
    }

    #[test]
    fn claims_only_vertical_drags_past_dead_zone() {
        let recognizer = GestureRecognizer::default();
        assert!(!recognizer.should_claim(&DragSample::vertical(-8.0, 0.0)));
        assert!(recognizer.should_claim(&DragSample::vertical(-9.0, 0.0)));
        let diagonal = DragSample {
            delta: Vec2::new(30.0, -20.0),
            velocity: Vec2::ZERO,
        };
        assert!(!recognizer.should_claim(&diagonal));
    }

    #[test]
    fn small_moves_produce_nothing() {
        let mut recognizer = GestureRecognizer::default();
        assert_eq!(moved(&mut recognizer, -5.0, &camera(3)), None);
        assert!(!recognizer.is_claimed());
    }

    #[test]
    fn claim_persists_for_the_rest_of_the_drag() {
        let mut recognizer = GestureRecognizer::default();
        let state = camera(3);
        assert!(moved(&mut recognizer, -20.0, &state).is_some());
        assert!(recognizer.is_claimed());
        // Back inside the dead zone, still tracking.
        assert_eq!(
            moved(&mut recognizer, -2.0, &state),
            Some(FrameCommand::Drag {
                transition: GestureTransition::EnterFeed,
                offset: FRAME - 2.0,
            })
        );
        let release = DragEvent::End(DragSample::default());
        let _ = recognizer.handle_event(release, &state);
        assert!(!recognizer.is_claimed());
    }

    #[test]
    fn camera_up_drag_enters_feed() {
        let mut recognizer = GestureRecognizer::default();
        assert_eq!(
            moved(&mut recognizer, -60.0, &camera(2)),
            Some(FrameCommand::Drag {
                transition: GestureTransition::EnterFeed,
                offset: FRAME - 60.0,
            })
        );
    }

    #[test]
    fn camera_drag_needs_feed_and_upward_motion() {
        let mut recognizer = GestureRecognizer::default();
        assert_eq!(moved(&mut recognizer, -60.0, &camera(0)), None);
        let mut recognizer = GestureRecognizer::default();
        assert_eq!(moved(&mut recognizer, 60.0, &camera(2)), None);
    }

    #[test]
    fn feed_drags_pick_step_or_exit() {
        let mut recognizer = GestureRecognizer::default();
        assert_eq!(
            moved(&mut recognizer, -30.0, &feed_at(0, 3)),
            Some(FrameCommand::Drag {
                transition: GestureTransition::Step {
                    direction: StepDirection::Up,
                    to: 1,
                },
                offset: FRAME - 30.0,
            })
        );

        let mut recognizer = GestureRecognizer::default();
        assert_eq!(
            moved(&mut recognizer, 30.0, &feed_at(2, 3)),
            Some(FrameCommand::Drag {
                transition: GestureTransition::Step {
                    direction: StepDirection::Down,
                    to: 1,
                },
                offset: 30.0,
            })
        );

        let mut recognizer = GestureRecognizer::default();
        assert_eq!(
            moved(&mut recognizer, 30.0, &feed_at(0, 3)),
            Some(FrameCommand::Drag {
                transition: GestureTransition::ExitToCamera,
                offset: 30.0,
            })
        );

        let mut recognizer = GestureRecognizer::default();
        assert_eq!(moved(&mut recognizer, -30.0, &feed_at(2, 3)), None);
    }

    #[test]
    fn live_transition_keeps_its_own_formula() {
        let mut recognizer = GestureRecognizer::default();
        let live = with_live(
            feed_at(0, 3),
            TransitionDescriptor::FeedStep {
                from: 0,
                to: 1,
                direction: StepDirection::Up,
            },
            FRAME,
        );
        // Dragging back below the start clamps instead of switching.
        assert_eq!(
            moved(&mut recognizer, 40.0, &live),
            Some(FrameCommand::Drag {
                transition: GestureTransition::Step {
                    direction: StepDirection::Up,
                    to: 1,
                },
                offset: FRAME,
            })
        );
    }

    #[test]
    fn release_commits_past_distance_threshold() {
        let recognizer = GestureRecognizer::default();
        let enter = TransitionDescriptor::CameraEnter { to: 0 };

        let far = with_live(camera(3), enter, FRAME - 0.09 * FRAME);
        let mut r = recognizer.clone();
        assert_eq!(
            r.handle_event(DragEvent::End(DragSample::default()), &far),
            Some(FrameCommand::EnterFeed)
        );

        let near = with_live(camera(3), enter, FRAME - 0.05 * FRAME);
        let mut r = recognizer;
        assert_eq!(
            r.handle_event(DragEvent::End(DragSample::default()), &near),
            Some(FrameCommand::CancelActive)
        );
    }

    #[test]
    fn release_velocity_overrides_distance() {
        let mut recognizer = GestureRecognizer::default();
        let enter = TransitionDescriptor::CameraEnter { to: 0 };
        let barely = with_live(camera(3), enter, FRAME - 0.01 * FRAME);
        assert_eq!(
            recognizer.handle_event(
                DragEvent::End(DragSample::vertical(-3.0, -0.08)),
                &barely
            ),
            Some(FrameCommand::EnterFeed)
        );
    }

    #[test]
    fn release_dispatch_for_downward_transitions() {
        let mut recognizer = GestureRecognizer::default();
        let exit = with_live(
            feed_at(0, 3),
            TransitionDescriptor::CameraExit { from: 0 },
            0.10 * FRAME,
        );
        assert_eq!(
            recognizer
                .handle_event(DragEvent::End(DragSample::default()), &exit),
            Some(FrameCommand::ExitToCamera)
        );

        let down = with_live(
            feed_at(2, 3),
            TransitionDescriptor::FeedStep {
                from: 2,
                to: 1,
                direction: StepDirection::Down,
            },
            0.02 * FRAME,
        );
        assert_eq!(
            recognizer
                .handle_event(DragEvent::End(DragSample::default()), &down),
            Some(FrameCommand::CancelActive)
        );
        assert_eq!(
            recognizer.handle_event(
                DragEvent::End(DragSample::vertical(4.0, 0.07)),
                &down
            ),
            Some(FrameCommand::StepFeed {
                direction: StepDirection::Down,
                target: 1,
            })
        );
    }

    #[test]
    fn unclaimed_swipes_fall_back_to_single_steps() {
        let mut recognizer = GestureRecognizer::default();
        let end = |dy, vy| DragEvent::End(DragSample::vertical(dy, vy));

        assert_eq!(
            recognizer.handle_event(end(-19.0, 0.0), &camera(2)),
            Some(FrameCommand::EnterFeed)
        );
        assert_eq!(recognizer.handle_event(end(-10.0, 0.0), &camera(2)), None);
        assert_eq!(
            recognizer.handle_event(end(0.0, -0.07), &feed_at(0, 2)),
            Some(FrameCommand::NextFeed)
        );
        assert_eq!(
            recognizer.handle_event(end(19.0, 0.0), &feed_at(1, 2)),
            Some(FrameCommand::PreviousFeed)
        );
        assert_eq!(
            recognizer.handle_event(end(2.0, 0.01), &feed_at(1, 2)),
            None
        );
    }
}
