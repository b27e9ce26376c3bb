use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::SpringParams;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Spring", inline)]
#[serde(default)]
/// Spring used for every settle, commit, and cancel animation.
pub struct SpringOptions {
    /// Damping coefficient.
    #[schemars(
        title = "Damping",
        range(min = 1.0, max = 100.0),
        extend("step" = 1.0)
    )]
    pub damping: f32,
    /// Stiffness coefficient.
    #[schemars(
        title = "Stiffness",
        range(min = 10.0, max = 1000.0),
        extend("step" = 10.0)
    )]
    pub stiffness: f32,
    /// Attached mass.
    #[schemars(
        title = "Mass",
        range(min = 0.1, max = 5.0),
        extend("step" = 0.1)
    )]
    pub mass: f32,
    /// Snap to the target instead of crossing it.
    #[schemars(skip)]
    pub overshoot_clamping: bool,
    /// Distance from target at which the spring may rest.
    #[schemars(skip)]
    pub rest_displacement: f32,
    /// Speed at which the spring may rest.
    #[schemars(skip)]
    pub rest_speed: f32,
}

impl Default for SpringOptions {
    fn default() -> Self {
        let params = SpringParams::DEFAULT;
        Self {
            damping: params.damping,
            stiffness: params.stiffness,
            mass: params.mass,
            overshoot_clamping: params.overshoot_clamping,
            rest_displacement: params.rest_displacement,
            rest_speed: params.rest_speed,
        }
    }
}

impl SpringOptions {
    /// Solver parameters for these options.
    #[must_use]
    pub fn params(&self) -> SpringParams {
        SpringParams {
            damping: self.damping,
            stiffness: self.stiffness,
            mass: self.mass,
            overshoot_clamping: self.overshoot_clamping,
            rest_displacement: self.rest_displacement,
            rest_speed: self.rest_speed,
        }
    }
}
