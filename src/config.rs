//! Tuning parameters for the spring model and its integrator.

use crate::float::Float;

/// Physical constants and thresholds for a wobbly surface.
///
/// # Builder Pattern
/// ```
/// use wobbly::config::WobblyConfig;
///
/// let config: WobblyConfig<f32> = WobblyConfig::new()
///     .with_friction(3.0)
///     .with_spring_k(8.0)
///     .with_sub_step_ms(15.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WobblyConfig<F: Float> {
    /// Velocity-proportional damping. Default: 3.
    pub friction: F,
    /// Hooke constant shared by every spring. Default: 8.
    pub spring_k: F,
    /// Mass of every point in the grid. Default: 50.
    pub mass: F,
    /// Fixed simulated duration of one sub-step, in milliseconds. Default: 15.
    pub sub_step_ms: F,
    /// Summed velocity above which the surface keeps animating. Default: 0.5.
    pub velocity_threshold: F,
    /// Summed force above which the surface keeps animating. Default: 20.
    pub force_threshold: F,
    /// Fraction of a spring's rest offset given as velocity to the
    /// neighbours of a freshly grabbed anchor. Default: 0.05.
    pub grab_impulse: F,
    /// Phase advance per sub-step for every mass. Default: 0.05.
    pub phase_step: F,
    /// Longest elapsed time fed to the integrator while the only reason to
    /// animate is a fresh input seed. Default: 16.
    pub nominal_frame_ms: F,
    /// Most sub-steps a single call to `Model::step` may run. Default: 64.
    pub max_sub_steps: usize,
}

impl<F: Float> WobblyConfig<F> {
    /// Create a config with default values.
    pub fn new() -> Self {
        WobblyConfig {
            friction: F::from_f32(3.0),
            spring_k: F::from_f32(8.0),
            mass: F::from_f32(50.0),
            sub_step_ms: F::from_f32(15.0),
            velocity_threshold: F::half(),
            force_threshold: F::from_f32(20.0),
            grab_impulse: F::from_f32(0.05),
            phase_step: F::from_f32(0.05),
            nominal_frame_ms: F::from_f32(16.0),
            max_sub_steps: 64,
        }
    }

    /// Set the damping coefficient.
    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    /// Set the spring constant.
    pub fn with_spring_k(mut self, spring_k: F) -> Self {
        self.spring_k = spring_k;
        self
    }

    /// Set the per-point mass. Non-positive values keep the current mass.
    pub fn with_mass(mut self, mass: F) -> Self {
        if mass > F::zero() {
            self.mass = mass;
        }
        self
    }

    /// Set the sub-step duration. Non-positive or non-finite values keep
    /// the current one.
    pub fn with_sub_step_ms(mut self, sub_step_ms: F) -> Self {
        if sub_step_ms > F::zero() && sub_step_ms.is_finite() {
            self.sub_step_ms = sub_step_ms;
        }
        self
    }

    /// Set both settle thresholds.
    pub fn with_thresholds(mut self, velocity: F, force: F) -> Self {
        self.velocity_threshold = velocity;
        self.force_threshold = force;
        self
    }

    /// Set the grab kick factor.
    pub fn with_grab_impulse(mut self, grab_impulse: F) -> Self {
        self.grab_impulse = grab_impulse;
        self
    }

    /// Set the per-call sub-step cap (at least one).
    pub fn with_max_sub_steps(mut self, max_sub_steps: usize) -> Self {
        self.max_sub_steps = max_sub_steps.max(1);
        self
    }

    /// Set the nominal frame duration used for seeded-only ticks.
    pub fn with_nominal_frame_ms(mut self, nominal_frame_ms: F) -> Self {
        self.nominal_frame_ms = nominal_frame_ms;
        self
    }
}

impl<F: Float> Default for WobblyConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_tuning() {
        let config: WobblyConfig<f32> = WobblyConfig::default();
        assert_eq!(config.friction, 3.0);
        assert_eq!(config.spring_k, 8.0);
        assert_eq!(config.mass, 50.0);
        assert_eq!(config.sub_step_ms, 15.0);
    }

    #[test]
    fn non_positive_sub_step_is_ignored() {
        let config: WobblyConfig<f32> = WobblyConfig::new().with_sub_step_ms(0.0).with_mass(-1.0);
        assert_eq!(config.sub_step_ms, 15.0);
        assert_eq!(config.mass, 50.0);
    }

    #[test]
    fn sub_step_cap_is_at_least_one() {
        let config: WobblyConfig<f32> = WobblyConfig::new().with_max_sub_steps(0);
        assert_eq!(config.max_sub_steps, 1);
        let config: WobblyConfig<f32> = WobblyConfig::new().with_sub_step_ms(f32::INFINITY);
        assert_eq!(config.sub_step_ms, 15.0);
    }
}
