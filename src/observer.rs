//! Step observers for monitoring the integrator.

use crate::float::Float;
use crate::vec::Vec2;

/// Trait for observing integration steps.
///
/// Implement this to trace convergence (debug overlays, profiling,
/// tuning the thresholds). All methods default to no-ops.
pub trait StepObserver<F: Float> {
    /// Called after each fixed sub-step has been integrated.
    fn on_sub_step(&mut self, _index: usize) {}

    /// Called once all sub-steps of a call are done, with the summed
    /// force and velocity magnitudes used for the settle test.
    fn on_step_complete(&mut self, _force_sum: F, _velocity_sum: F) {}

    /// Called when the model falls below both settle thresholds.
    fn on_settled(&mut self, _top_left: Vec2<F>) {}
}

/// A no-op observer. Use as default when no observation is needed.
pub struct NoOpStepObserver;

impl<F: Float> StepObserver<F> for NoOpStepObserver {}

/// Forwards step events to the `log` facade.
///
/// Sub-steps go to `trace`, step summaries and settling to `debug`.
pub struct LogObserver;

impl<F: Float> StepObserver<F> for LogObserver {
    fn on_sub_step(&mut self, index: usize) {
        log::trace!("wobbly sub-step {}", index);
    }

    fn on_step_complete(&mut self, force_sum: F, velocity_sum: F) {
        log::debug!("wobbly step: force_sum={:?} velocity_sum={:?}", force_sum, velocity_sum);
    }

    fn on_settled(&mut self, top_left: Vec2<F>) {
        log::debug!("wobbly settled at ({:?}, {:?})", top_left.x, top_left.y);
    }
}
