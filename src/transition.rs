//! The in-flight frame transition: what is currently being dragged between.

use serde::Serialize;

/// Direction of a step through the feed sequence.
///
/// `Up` moves to the next (larger) index, `Down` to the previous one.
/// Index 0 is the newest item, so `Up` walks toward older photos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    /// Toward index `N-1`.
    Up,
    /// Toward index 0.
    Down,
}

impl StepDirection {
    /// Index reached by stepping once from `index`, if it stays in range.
    #[must_use]
    pub fn target(self, index: usize, len: usize) -> Option<usize> {
        match self {
            Self::Up => index.checked_add(1).filter(|&next| next < len),
            Self::Down => index.checked_sub(1).filter(|&prev| prev < len),
        }
    }
}

/// Tag of a [`TransitionDescriptor`], without its indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// Live camera morphing into the first feed photo.
    CameraEnter,
    /// Feed photo morphing back into the live camera.
    CameraExit,
    /// Next photo sliding up over the current one.
    FeedStepUp,
    /// Current photo sliding down to reveal the previous one.
    FeedStepDown,
}

impl TransitionKind {
    /// Whether the camera viewfinder shows through during this kind.
    #[must_use]
    pub fn involves_camera(self) -> bool {
        matches!(self, Self::CameraEnter | Self::CameraExit)
    }

    /// Whether committing requires an upward gesture.
    #[must_use]
    pub fn commits_upward(self) -> bool {
        matches!(self, Self::CameraEnter | Self::FeedStepUp)
    }
}

/// The single live transition, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TransitionDescriptor {
    /// Camera into the feed, landing on `to`.
    CameraEnter {
        /// Feed index revealed.
        to: usize,
    },
    /// Feed back to the camera, leaving `from`.
    CameraExit {
        /// Feed index being dismissed.
        from: usize,
    },
    /// One step through the feed.
    FeedStep {
        /// Index on screen when the step began.
        from: usize,
        /// Index on screen once the step commits.
        to: usize,
        /// Which way the step moves through the sequence.
        direction: StepDirection,
    },
}

impl TransitionDescriptor {
    /// Tag of this descriptor.
    #[must_use]
    pub fn kind(&self) -> TransitionKind {
        match self {
            Self::CameraEnter { .. } => TransitionKind::CameraEnter,
            Self::CameraExit { .. } => TransitionKind::CameraExit,
            Self::FeedStep {
                direction: StepDirection::Up,
                ..
            } => TransitionKind::FeedStepUp,
            Self::FeedStep {
                direction: StepDirection::Down,
                ..
            } => TransitionKind::FeedStepDown,
        }
    }

    /// Feed index shown before the transition, `None` for the camera.
    #[must_use]
    pub fn from_index(&self) -> Option<usize> {
        match *self {
            Self::CameraEnter { .. } => None,
            Self::CameraExit { from } | Self::FeedStep { from, .. } => {
                Some(from)
            }
        }
    }

    /// Feed index shown after the transition, `None` for the camera.
    #[must_use]
    pub fn to_index(&self) -> Option<usize> {
        match *self {
            Self::CameraExit { .. } => None,
            Self::CameraEnter { to } | Self::FeedStep { to, .. } => Some(to),
        }
    }

    /// Whether this descriptor is the one a gesture of `kind` heading for
    /// `to` would set up. Used to continue a drag without re-issuing setup.
    #[must_use]
    pub fn continues(&self, kind: TransitionKind, to: Option<usize>) -> bool {
        self.kind() == kind && self.to_index() == to
    }
}
