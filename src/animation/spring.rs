//! Damped spring solver used for every settle, commit, and cancel animation.
//!
//! The solver is analytic: the value at elapsed time `t` is evaluated from
//! the closed-form solution of `m·x'' + c·x' + k·(x - target) = 0`, so a
//! long frame never destabilizes the motion the way an explicit
//! integrator would.

/// Physical parameters of a spring.
///
/// The defaults (damping 28, stiffness 280, mass 0.7) give a damping ratio
/// of exactly 1.0: the fastest settle that never oscillates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Damping coefficient `c`.
    pub damping: f32,
    /// Stiffness coefficient `k`.
    pub stiffness: f32,
    /// Attached mass `m`.
    pub mass: f32,
    /// Snap to the target instead of crossing it.
    pub overshoot_clamping: bool,
    /// Distance from the target below which the spring may rest.
    pub rest_displacement: f32,
    /// Speed (units per second) below which the spring may rest.
    pub rest_speed: f32,
}

impl SpringParams {
    /// Parameters shared by every frame transition.
    pub const DEFAULT: Self = Self {
        damping: 28.0,
        stiffness: 280.0,
        mass: 0.7,
        overshoot_clamping: true,
        rest_displacement: 0.001,
        rest_speed: 0.001,
    };

    /// Undamped angular frequency `ω0 = √(k/m)`.
    #[must_use]
    pub fn natural_frequency(&self) -> f32 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio `ζ = c / (2·√(k·m))`.
    #[must_use]
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A single spring motion from a start value toward a target.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    params: SpringParams,
    from: f32,
    target: f32,
    initial_velocity: f32,
    elapsed: f32,
    value: f32,
    velocity: f32,
    at_rest: bool,
}

impl Spring {
    /// Start a spring at `from` with zero initial velocity.
    #[must_use]
    pub fn new(from: f32, target: f32, params: SpringParams) -> Self {
        Self::with_velocity(from, target, 0.0, params)
    }

    /// Start a spring at `from` moving at `velocity` units per second.
    #[must_use]
    pub fn with_velocity(
        from: f32,
        target: f32,
        velocity: f32,
        params: SpringParams,
    ) -> Self {
        Self {
            params,
            from,
            target,
            initial_velocity: velocity,
            elapsed: 0.0,
            value: from,
            velocity,
            at_rest: false,
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity in units per second.
    #[must_use]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Value the spring is settling toward.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the spring has reached its target and stopped.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Advance by `dt` seconds. Returns `true` once the spring is at rest.
    ///
    /// A spring that starts on its target with no velocity comes to rest
    /// on its first step, whatever `dt` is.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.at_rest {
            return true;
        }
        self.elapsed += dt.max(0.0);
        let (displacement, velocity) = self.solve(self.elapsed);
        self.value = self.target + displacement;
        self.velocity = velocity;

        let overshot = self.params.overshoot_clamping && self.has_overshot();
        let settled = displacement.abs() <= self.params.rest_displacement
            && velocity.abs() <= self.params.rest_speed;
        if overshot || settled || !self.value.is_finite() {
            self.finish();
        }
        self.at_rest
    }

    /// Jump straight to the target and stop.
    pub fn finish(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    fn has_overshot(&self) -> bool {
        if self.from < self.target {
            self.value > self.target
        } else if self.from > self.target {
            self.value < self.target
        } else {
            false
        }
    }

    /// Displacement from target and velocity at time `t`.
    fn solve(&self, t: f32) -> (f32, f32) {
        let x0 = self.from - self.target;
        let v0 = self.initial_velocity;
        let omega = self.params.natural_frequency();
        let zeta = self.params.damping_ratio();

        if (zeta - 1.0).abs() < 1e-4 {
            // Critically damped
            let b = v0 + omega * x0;
            let envelope = (-omega * t).exp();
            let x = envelope * (x0 + b * t);
            let v = envelope * (v0 - omega * b * t);
            (x, v)
        } else if zeta < 1.0 {
            let alpha = zeta * omega;
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let b = (v0 + alpha * x0) / omega_d;
            let envelope = (-alpha * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = envelope * (x0 * cos + b * sin);
            let v = envelope
                * ((b * omega_d - alpha * x0) * cos
                    - (x0 * omega_d + alpha * b) * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let c1 = (v0 - r2 * x0) / (r1 - r2);
            let c2 = x0 - c1;
            let e1 = (r1 * t).exp();
            let e2 = (r2 * t).exp();
            (c1 * e1 + c2 * e2, r1 * c1 * e1 + r2 * c2 * e2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn run_to_rest(spring: &mut Spring) -> usize {
        let mut frames = 0;
        while !spring.step(FRAME) {
            frames += 1;
            assert!(frames < 10_000, "spring never settled");
        }
        frames
    }

    #[test]
    fn default_params_are_critically_damped() {
        let params = SpringParams::default();
        assert!((params.damping_ratio() - 1.0).abs() < 1e-6);
        assert!((params.natural_frequency() - 20.0).abs() < 1e-4);
    }

    #[test]
    fn ends_exactly_on_target() {
        let mut spring = Spring::new(0.0, 400.0, SpringParams::default());
        let _ = run_to_rest(&mut spring);
        assert_eq!(spring.value(), 400.0);
        assert_eq!(spring.velocity(), 0.0);
    }

    #[test]
    fn critically_damped_never_passes_target() {
        let mut spring = Spring::new(400.0, 0.0, SpringParams::default());
        let mut previous = spring.value();
        while !spring.step(FRAME) {
            assert!(spring.value() >= 0.0);
            assert!(spring.value() <= previous);
            previous = spring.value();
        }
    }

    #[test]
    fn zero_distance_rests_on_first_step() {
        let mut spring = Spring::new(1.0, 1.0, SpringParams::default());
        assert!(!spring.is_at_rest());
        assert!(spring.step(0.0));
        assert_eq!(spring.value(), 1.0);
    }

    #[test]
    fn underdamped_spring_clamps_overshoot() {
        let params = SpringParams {
            damping: 2.0,
            ..SpringParams::default()
        };
        assert!(params.damping_ratio() < 1.0);
        let mut spring = Spring::new(0.0, 100.0, params);
        let _ = run_to_rest(&mut spring);
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn underdamped_spring_without_clamping_oscillates_then_rests() {
        let params = SpringParams {
            damping: 4.0,
            overshoot_clamping: false,
            ..SpringParams::default()
        };
        let mut spring = Spring::new(0.0, 100.0, params);
        let mut max_seen = 0.0_f32;
        while !spring.step(FRAME) {
            max_seen = max_seen.max(spring.value());
        }
        assert!(max_seen > 100.0);
        assert_eq!(spring.value(), 100.0);
    }

    #[test]
    fn overdamped_spring_settles() {
        let params = SpringParams {
            damping: 80.0,
            ..SpringParams::default()
        };
        assert!(params.damping_ratio() > 1.0);
        let mut spring = Spring::new(10.0, 0.0, params);
        let _ = run_to_rest(&mut spring);
        assert_eq!(spring.value(), 0.0);
    }

    #[test]
    fn initial_velocity_is_honored() {
        let params = SpringParams::default();
        let mut spring = Spring::with_velocity(0.0, 0.0, 50.0, params);
        let _ = spring.step(FRAME);
        assert!(spring.value() > 0.0);
    }

    #[test]
    fn finish_jumps_to_target() {
        let mut spring = Spring::new(0.0, 1.0, SpringParams::default());
        let _ = spring.step(FRAME);
        spring.finish();
        assert!(spring.is_at_rest());
        assert_eq!(spring.value(), 1.0);
    }
}
