//! Boundary to the camera hardware owned by the host.
//!
//! The engine never holds the capture session; it only reads readiness
//! and asks for a warm-up reset when the frame morphs back to the
//! viewfinder, so a stale frame is never shown mid-transition.

/// The camera collaborator.
pub trait CameraResource {
    /// Whether the viewfinder is producing frames. Used only to decide
    /// whether a placeholder mask covers the viewfinder.
    fn is_ready(&self) -> bool;

    /// Ask the camera to blank and warm up again.
    fn request_warmup_reset(&mut self);
}

/// Camera stand-in that tracks readiness as a flag.
///
/// A warm-up reset clears readiness until the host calls
/// [`mark_ready`](Self::mark_ready), mirroring a viewfinder that comes
/// back a few frames after being asked to restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraSignal {
    ready: bool,
    warmup_requests: usize,
}

impl CameraSignal {
    /// Camera that is already producing frames.
    #[must_use]
    pub fn ready() -> Self {
        Self {
            ready: true,
            warmup_requests: 0,
        }
    }

    /// Record that the viewfinder is producing frames again.
    pub fn mark_ready(&mut self) {
        self.ready = true;
    }

    /// Number of warm-up resets requested so far.
    #[must_use]
    pub fn warmup_requests(&self) -> usize {
        self.warmup_requests
    }
}

impl CameraResource for CameraSignal {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn request_warmup_reset(&mut self) {
        self.ready = false;
        self.warmup_requests += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warmup_reset_clears_readiness() {
        let mut camera = CameraSignal::ready();
        assert!(camera.is_ready());
        camera.request_warmup_reset();
        assert!(!camera.is_ready());
        assert_eq!(camera.warmup_requests(), 1);
        camera.mark_ready();
        assert!(camera.is_ready());
    }
}
