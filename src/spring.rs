//! Structural springs between neighbouring point masses.

use crate::float::Float;
use crate::mass::PointMass;
use crate::vec::Vec2;

/// Which neighbour a spring connects.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SpringAxis {
    Horizontal,
    Vertical,
}

/// A Hookean spring that wants `b - a == offset`.
///
/// Endpoints are indices into the owning model's mass arena.
#[derive(Clone, Debug, PartialEq)]
pub struct Spring<F: Float> {
    pub a: usize,
    pub b: usize,
    pub offset: Vec2<F>,
    pub axis: SpringAxis,
}

impl<F: Float> Spring<F> {
    pub fn new(a: usize, b: usize, offset: Vec2<F>, axis: SpringAxis) -> Self {
        Spring { a, b, offset, axis }
    }

    /// Accumulate equal and opposite forces on both endpoints.
    ///
    /// Each endpoint receives `k * 0.5 * (displacement - offset)` pulling it
    /// toward the rest configuration.
    pub fn exert(&self, masses: &mut [PointMass<F>], k: F) {
        let a = masses[self.a].position;
        let b = masses[self.b].position;

        let da = (b - a - self.offset).scale(F::half() * k);
        masses[self.a].apply_force(da);
        masses[self.b].apply_force(-da);
    }

    /// Index of the other endpoint, if `index` is one of them.
    pub fn other(&self, index: usize) -> Option<usize> {
        if self.a == index {
            Some(self.b)
        } else if self.b == index {
            Some(self.a)
        } else {
            None
        }
    }
}
