use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Gestures", inline)]
#[serde(default)]
/// Drag thresholds for claiming and committing frame transitions.
///
/// Velocities are in pixels per millisecond, as touch systems report them.
pub struct GestureOptions {
    /// Vertical travel in pixels before a drag is claimed.
    #[schemars(
        title = "Claim Dead Zone",
        range(min = 0.0, max = 40.0),
        extend("step" = 1.0)
    )]
    pub claim_dead_zone: f32,
    /// Fraction of the frame a drag must cover to commit.
    #[schemars(
        title = "Commit Distance",
        range(min = 0.01, max = 0.5),
        extend("step" = 0.01)
    )]
    pub commit_fraction: f32,
    /// Release speed that commits regardless of distance.
    #[schemars(
        title = "Commit Velocity",
        range(min = 0.01, max = 1.0),
        extend("step" = 0.01)
    )]
    pub commit_velocity: f32,
    /// Travel in pixels that counts as a swipe when no transition was
    /// claimed during the drag.
    #[schemars(
        title = "Swipe Distance",
        range(min = 1.0, max = 80.0),
        extend("step" = 1.0)
    )]
    pub tap_distance: f32,
}

impl Default for GestureOptions {
    fn default() -> Self {
        Self {
            claim_dead_zone: 8.0,
            commit_fraction: 0.08,
            commit_velocity: 0.06,
            tap_distance: 18.0,
        }
    }
}
