//! Point masses: the nodes of the wobbly grid.

use crate::float::Float;
use crate::vec::Vec2;

/// A point mass integrated with semi-implicit Euler.
///
/// Forces accumulate between sub-steps and are cleared after each
/// integration. An immobile mass ignores forces entirely and only moves
/// when translated directly (the drag anchor).
#[derive(Clone, Debug, PartialEq)]
pub struct PointMass<F: Float> {
    pub position: Vec2<F>,
    pub velocity: Vec2<F>,
    pub force: Vec2<F>,
    pub immobile: bool,
    /// Per-axis phase, advanced every sub-step. Not used by the force law.
    pub phase: Vec2<F>,
}

impl<F: Float> PointMass<F> {
    pub fn new(position: Vec2<F>) -> Self {
        PointMass {
            position,
            velocity: Vec2::zero(),
            force: Vec2::zero(),
            immobile: false,
            phase: Vec2::zero(),
        }
    }

    /// Reset to rest at `position`, keeping nothing from the previous state.
    pub fn reset(&mut self, position: Vec2<F>) {
        *self = PointMass::new(position);
    }

    pub fn apply_force(&mut self, force: Vec2<F>) {
        self.force += force;
    }

    /// Integrate one sub-step.
    ///
    /// Returns `(force, velocity)` magnitudes as L1 norms, with the force
    /// measured before it is cleared. Immobile masses report zero for both.
    pub fn integrate(&mut self, friction: F, mass: F, phase_step: F) -> (F, F) {
        self.phase += Vec2::new(phase_step, phase_step);

        if self.immobile {
            self.velocity = Vec2::zero();
            self.force = Vec2::zero();
            return (F::zero(), F::zero());
        }

        self.force -= self.velocity.scale(friction);
        self.velocity += Vec2::new(self.force.x / mass, self.force.y / mass);
        self.position += self.velocity;

        let force = self.force.manhattan();
        self.force = Vec2::zero();
        (force, self.velocity.manhattan())
    }

    pub fn pin(&mut self) {
        self.immobile = true;
    }

    pub fn release(&mut self) {
        self.immobile = false;
    }

    /// Move directly by `delta`, bypassing physics.
    pub fn translate(&mut self, delta: Vec2<F>) {
        self.position += delta;
    }
}
