//! Resize counters for a single array.
//!
//! [`ResizeStats`] records every capacity change an array makes. The
//! counters are cumulative over the array's lifetime and are the only
//! diagnostics the container emits.

/// Cumulative resize counters.
///
/// `slots_copied` counts elements moved from an old buffer into a new one.
/// Divided by the number of appends it gives the amortised copy cost per
/// append, which stays bounded by `growth_factor / (growth_factor - 1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResizeStats {
    /// Number of grow events (capacity multiplied by the growth factor).
    pub grows: u64,
    /// Number of shrink events (capacity divided by the growth factor).
    pub shrinks: u64,
    /// Number of eager resets to the initial capacity by `clear()`.
    pub resets: u64,
    /// Total elements moved across all resizes.
    pub slots_copied: u64,
}

impl ResizeStats {
    /// Total number of reallocations of any kind.
    pub fn reallocations(&self) -> u64 {
        self.grows + self.shrinks + self.resets
    }
}
