//! Why a surface is still animating.

/// One reason for the surface to keep animating.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AnimationCause {
    /// A grab, drag or release disturbed the model since the last step.
    SeededByGrab,
    /// Summed spring force is still above the settle threshold.
    ResidualForce,
    /// Summed velocity is still above the settle threshold.
    ResidualVelocity,
}

impl AnimationCause {
    pub const ALL: [AnimationCause; 3] = [
        AnimationCause::SeededByGrab,
        AnimationCause::ResidualForce,
        AnimationCause::ResidualVelocity,
    ];

    const fn bit(self) -> u8 {
        match self {
            AnimationCause::SeededByGrab => 1 << 0,
            AnimationCause::ResidualForce => 1 << 1,
            AnimationCause::ResidualVelocity => 1 << 2,
        }
    }
}

/// Set of [`AnimationCause`]s. Empty means idle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Animation {
    bits: u8,
}

impl Animation {
    pub const IDLE: Animation = Animation { bits: 0 };

    /// Causes left over after an integration step.
    pub fn from_residuals(force: bool, velocity: bool) -> Self {
        let mut animation = Animation::IDLE;
        if force {
            animation.insert(AnimationCause::ResidualForce);
        }
        if velocity {
            animation.insert(AnimationCause::ResidualVelocity);
        }
        animation
    }

    pub fn insert(&mut self, cause: AnimationCause) {
        self.bits |= cause.bit();
    }

    pub fn contains(&self, cause: AnimationCause) -> bool {
        self.bits & cause.bit() != 0
    }

    pub fn is_animating(&self) -> bool {
        self.bits != 0
    }

    /// Raw bitmask: bit 0 seeded, bit 1 force, bit 2 velocity.
    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn causes(&self) -> impl Iterator<Item = AnimationCause> + '_ {
        AnimationCause::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}
