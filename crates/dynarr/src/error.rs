//! Array-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during array operations.
///
/// Every failing operation returns before making an observable change,
/// so the array is always left in its pre-call state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// A normalised index fell outside `[0, length)`.
    IndexOutOfBounds {
        /// The index as passed by the caller (before normalisation).
        index: isize,
        /// Array length at the time of the call.
        length: usize,
    },
    /// No element equal to the search value exists in the searched range.
    NotFound,
    /// A resize was requested that would drop live elements or leave the
    /// buffer without any slots.
    InvalidCapacity {
        /// The capacity that was requested.
        requested: usize,
        /// Array length at the time of the request.
        length: usize,
    },
    /// The configured growth factor cannot grow capacity multiplicatively.
    InvalidGrowthFactor {
        /// The rejected value.
        value: usize,
    },
    /// A slice was requested with a step of zero.
    ZeroStep,
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "index {index} out of bounds for length {length}")
            }
            Self::NotFound => write!(f, "value not found in array"),
            Self::InvalidCapacity { requested, length } => {
                write!(
                    f,
                    "invalid capacity: requested {requested} slots, length {length}"
                )
            }
            Self::InvalidGrowthFactor { value } => {
                write!(f, "growth factor must be at least 2, got {value}")
            }
            Self::ZeroStep => write!(f, "slice step cannot be zero"),
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = ArrayError::IndexOutOfBounds {
            index: -7,
            length: 3,
        };
        assert_eq!(err.to_string(), "index -7 out of bounds for length 3");

        let err = ArrayError::InvalidCapacity {
            requested: 2,
            length: 5,
        };
        assert_eq!(
            err.to_string(),
            "invalid capacity: requested 2 slots, length 5"
        );
    }

    #[test]
    fn is_std_error() {
        fn assert_error<E: Error>(_: &E) {}
        assert_error(&ArrayError::NotFound);
    }
}
