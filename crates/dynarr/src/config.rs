//! Array configuration parameters.

use crate::error::ArrayError;

/// Configuration for a [`GrowableArray`](crate::GrowableArray).
///
/// Controls how capacity scales on grow and shrink events. Validated at
/// construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Multiplier applied to capacity on grow, divisor applied on shrink.
    ///
    /// Default: 2 (capacity doubles when full and halves once occupancy
    /// drops below a quarter). Must be at least 2.
    pub growth_factor: usize,
}

impl ArrayConfig {
    /// Default growth factor: capacity doubles on grow.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Smallest growth factor that still grows capacity multiplicatively.
    pub const MIN_GROWTH_FACTOR: usize = 2;

    /// Capacity of a freshly constructed or cleared array.
    pub const INITIAL_CAPACITY: usize = 1;

    /// Create a new config with the given growth factor.
    ///
    /// The value is not checked here; see [`validate`](Self::validate).
    pub fn new(growth_factor: usize) -> Self {
        Self { growth_factor }
    }

    /// Check structural invariants.
    ///
    /// Returns `Err(ArrayError::InvalidGrowthFactor)` if the growth factor
    /// is below [`MIN_GROWTH_FACTOR`](Self::MIN_GROWTH_FACTOR).
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.growth_factor < Self::MIN_GROWTH_FACTOR {
            return Err(ArrayError::InvalidGrowthFactor {
                value: self.growth_factor,
            });
        }
        Ok(())
    }

    /// Occupancy below which a removal triggers a shrink.
    ///
    /// `capacity / growth_factor^2`, so a shrink always leaves a full
    /// growth factor of headroom before the next grow.
    pub(crate) fn shrink_threshold(&self, capacity: usize) -> usize {
        capacity / self.growth_factor.saturating_mul(self.growth_factor)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GROWTH_FACTOR)
    }
}
