//! Error types for the wobbly model.

use core::fmt;

/// Errors reported by model construction and field evaluation.
///
/// Every error is recoverable: the controller reacts by falling back to
/// flat, synced rendering and never leaves a half-built model behind.
#[derive(Debug, Clone, PartialEq)]
pub enum WobblyError {
    /// A mass/spring arena or deformation buffer could not be reserved.
    Allocation { requested: usize },
    /// Width and height must be positive and finite.
    InvalidDimensions,
}

impl fmt::Display for WobblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WobblyError::Allocation { requested } => {
                write!(f, "could not allocate {} elements for the wobbly model", requested)
            }
            WobblyError::InvalidDimensions => write!(f, "surface width and height must be positive"),
        }
    }
}

/// Reserve exactly `count` slots in `buf`, mapping failure to [`WobblyError::Allocation`].
pub(crate) fn reserve<T>(buf: &mut alloc::vec::Vec<T>, count: usize) -> Result<(), WobblyError> {
    buf.try_reserve_exact(count)
        .map_err(|_| WobblyError::Allocation { requested: count })
}
