//! Fixed-rate force accumulation and integration for the grid model.

use crate::animation::Animation;
use crate::config::WobblyConfig;
use crate::float::Float;
use crate::model::Model;
use crate::observer::StepObserver;

/// Result of advancing a model by some elapsed time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepOutcome<F: Float> {
    /// Not enough time has accumulated for a whole sub-step. Nothing moved;
    /// the caller must keep treating the surface as animating.
    Pending,
    /// At least one sub-step ran.
    Stepped {
        sub_steps: usize,
        /// L1 force magnitude summed over every mass and sub-step.
        force_sum: F,
        /// L1 velocity magnitude summed over every mass and sub-step.
        velocity_sum: F,
        /// Residual causes; idle means the model has settled.
        animation: Animation,
    },
}

impl<F: Float> StepOutcome<F> {
    pub fn is_animating(&self) -> bool {
        match self {
            StepOutcome::Pending => true,
            StepOutcome::Stepped { animation, .. } => animation.is_animating(),
        }
    }
}

impl<F: Float> Model<F> {
    /// Advance the model by `elapsed_ms` of wall-clock time.
    ///
    /// Time is converted into whole sub-steps of `config.sub_step_ms`; the
    /// fraction left over carries into the next call. Bounds are recomputed
    /// once all sub-steps are done.
    ///
    /// At most `config.max_sub_steps` run per call; whole sub-steps beyond
    /// that are dropped. Negative or non-finite elapsed time counts as zero.
    pub fn step<O: StepObserver<F>>(
        &mut self,
        elapsed_ms: F,
        config: &WobblyConfig<F>,
        observer: &mut O,
    ) -> StepOutcome<F> {
        let elapsed_ms = if elapsed_ms.is_finite() { elapsed_ms.max(F::zero()) } else { F::zero() };
        let accumulated = self.accumulator + elapsed_ms / config.sub_step_ms;

        // Overflow of the quotient (tiny sub-step) saturates to the cap.
        let sub_steps = if accumulated.is_finite() {
            let whole = accumulated.floor();
            self.accumulator = accumulated - whole;
            whole.to_usize().min(config.max_sub_steps)
        } else {
            self.accumulator = F::zero();
            config.max_sub_steps
        };
        if sub_steps == 0 {
            return StepOutcome::Pending;
        }

        let mut force_sum = F::zero();
        let mut velocity_sum = F::zero();

        for sub in 0..sub_steps {
            self.exert_springs(config.spring_k);

            for mass in self.masses_mut() {
                let (force, velocity) = mass.integrate(config.friction, config.mass, config.phase_step);
                force_sum += force;
                velocity_sum += velocity;
            }
            observer.on_sub_step(sub);
        }

        self.recompute_bounds();
        observer.on_step_complete(force_sum, velocity_sum);

        let animation = Animation::from_residuals(
            force_sum > config.force_threshold,
            velocity_sum > config.velocity_threshold,
        );
        if !animation.is_animating() {
            observer.on_settled(self.top_left());
        }

        StepOutcome::Stepped { sub_steps, force_sum, velocity_sum, animation }
    }
}
