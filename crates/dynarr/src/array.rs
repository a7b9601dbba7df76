//! The growable array container.
//!
//! [`GrowableArray`] tracks logical length separately from allocated
//! capacity. Capacity changes only through `resize`, which is driven by two
//! triggers:
//!
//! - **grow**: an append or insert finds `length == capacity`; capacity is
//!   multiplied by the growth factor.
//! - **shrink**: a removal leaves `length < capacity / growth_factor^2`;
//!   capacity is divided by the growth factor.
//!
//! The squared shrink threshold leaves a full growth factor of headroom on
//! both sides of every resize, so alternating append/pop at a boundary
//! never reallocates on each call.

use crate::config::ArrayConfig;
use crate::error::ArrayError;
use crate::index::{self, SliceRange};
use crate::sort;
use crate::stats::ResizeStats;
use crate::storage::Storage;

/// A resizable array with signed indexing and stepped slicing.
///
/// # Examples
///
/// ```
/// use dynarr::GrowableArray;
///
/// let mut arr = GrowableArray::new();
/// for i in 0..5 {
///     arr.append(i);
/// }
/// assert_eq!(arr.len(), 5);
/// assert_eq!(arr.capacity(), 8);
///
/// assert_eq!(arr.get(-1), Ok(&4));
/// arr.insert(0, -1);
/// assert_eq!(arr.pop(), Ok(4));
/// assert_eq!(arr, [-1, 0, 1, 2, 3]);
/// ```
pub struct GrowableArray<T> {
    storage: Storage<T>,
    config: ArrayConfig,
    stats: ResizeStats,
}

impl<T> GrowableArray<T> {
    /// Create an empty array with the default growth factor of 2.
    pub fn new() -> Self {
        Self::from_valid_config(ArrayConfig::default())
    }

    /// Create an empty array with the given growth factor.
    ///
    /// Returns `Err(ArrayError::InvalidGrowthFactor)` if `growth_factor < 2`.
    pub fn with_growth_factor(growth_factor: usize) -> Result<Self, ArrayError> {
        Self::with_config(ArrayConfig::new(growth_factor))
    }

    /// Create an empty array from a config, validating it first.
    pub fn with_config(config: ArrayConfig) -> Result<Self, ArrayError> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: ArrayConfig) -> Self {
        Self {
            storage: Storage::new(ArrayConfig::INITIAL_CAPACITY),
            config,
            stats: ResizeStats::default(),
        }
    }

    // ── Queries ────────────────────────────────────────────────────

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.storage.len() == 0
    }

    /// Number of allocated slots. Always at least 1.
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// The growth factor fixed at construction.
    pub fn growth_factor(&self) -> usize {
        self.config.growth_factor
    }

    /// The configuration this array was built with.
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Cumulative resize counters.
    pub fn stats(&self) -> ResizeStats {
        self.stats
    }

    /// Borrow the element at `index`.
    ///
    /// Negative indices count from the end and clamp at zero. Returns
    /// `Err(ArrayError::IndexOutOfBounds)` if the normalised index is not
    /// a live position.
    pub fn get(&self, index: isize) -> Result<&T, ArrayError> {
        let pos = index::checked(index, self.len())?;
        Ok(&self.storage.live()[pos])
    }

    /// Mutably borrow the element at `index`. Same indexing rules as
    /// [`get`](Self::get).
    pub fn get_mut(&mut self, index: isize) -> Result<&mut T, ArrayError> {
        let pos = index::checked(index, self.len())?;
        Ok(&mut self.storage.live_mut()[pos])
    }

    /// First element, if any.
    pub fn first(&self) -> Option<&T> {
        self.storage.live().first()
    }

    /// Last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.storage.live().last()
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Replace the element at `index`, returning the previous value.
    pub fn set(&mut self, index: isize, value: T) -> Result<T, ArrayError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    /// Add `value` at the end. Amortised O(1).
    pub fn append(&mut self, value: T) {
        self.grow_if_full();
        self.storage.push(value);
        self.debug_check();
    }

    /// Append every element of `values` in order.
    pub fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        for value in values {
            self.append(value);
        }
    }

    /// Insert `value` before position `index`. O(n).
    ///
    /// Negative indices follow the clamp rule and indices past the end
    /// append, so insertion never fails.
    pub fn insert(&mut self, index: isize, value: T) {
        self.grow_if_full();
        let pos = index::normalize(index, self.len()).min(self.len());
        self.storage.shift_in(pos, value);
        self.debug_check();
    }

    /// Remove and return the last element.
    ///
    /// Returns `Err(ArrayError::IndexOutOfBounds)` on an empty array.
    pub fn pop(&mut self) -> Result<T, ArrayError> {
        self.pop_at(-1)
    }

    /// Remove and return the element at `index`, shifting later elements
    /// left. O(1) amortised at the end, O(n) elsewhere.
    pub fn pop_at(&mut self, index: isize) -> Result<T, ArrayError> {
        let pos = index::checked(index, self.len())?;
        let value = self.storage.shift_out(pos);
        self.shrink_if_sparse();
        self.debug_check();
        Ok(value)
    }

    /// Remove the element at `index`, discarding it.
    pub fn delete(&mut self, index: isize) -> Result<(), ArrayError> {
        self.pop_at(index).map(drop)
    }

    /// Remove all elements and reset capacity to 1.
    ///
    /// Unlike incremental removal this releases the buffer immediately.
    pub fn clear(&mut self) {
        self.storage.clear();
        // An empty buffer always fits in the initial capacity.
        if self.capacity() != ArrayConfig::INITIAL_CAPACITY
            && self.resize(ArrayConfig::INITIAL_CAPACITY).is_ok()
        {
            self.stats.resets += 1;
        }
        self.debug_check();
    }

    /// Reverse the elements in place.
    pub fn reverse(&mut self) {
        let data = self.storage.live_mut();
        let (mut lo, mut hi) = (0, data.len());
        while lo + 1 < hi {
            hi -= 1;
            data.swap(lo, hi);
            lo += 1;
        }
    }

    /// Borrowing iterator over the live elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.live().iter()
    }

    /// Mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.storage.live_mut().iter_mut()
    }

    // ── Capacity management ────────────────────────────────────────

    /// Reallocate to exactly `new_capacity` slots, keeping every element.
    ///
    /// Returns `Err(ArrayError::InvalidCapacity)` if `new_capacity` is zero
    /// or smaller than the current length.
    fn resize(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        let moved = self.storage.relocate(new_capacity)?;
        self.stats.slots_copied += moved as u64;
        Ok(())
    }

    fn grow_if_full(&mut self) {
        if !self.storage.is_full() {
            return;
        }
        let target = self
            .capacity()
            .checked_mul(self.config.growth_factor)
            .unwrap_or(usize::MAX);
        // target > capacity == length, so the guard in resize cannot trip.
        if self.resize(target).is_ok() {
            self.stats.grows += 1;
        }
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.capacity();
        if self.len() >= self.config.shrink_threshold(capacity) {
            return;
        }
        // length < capacity / gf^2 <= capacity / gf, so the target holds
        // every live element and is at least 1.
        if self.resize(capacity / self.config.growth_factor).is_ok() {
            self.stats.shrinks += 1;
        }
    }

    fn debug_check(&self) {
        debug_assert!(self.len() <= self.capacity(), "length exceeds capacity");
        debug_assert!(self.capacity() >= 1, "capacity dropped to zero");
    }

    pub(crate) fn live(&self) -> &[T] {
        self.storage.live()
    }

    pub(crate) fn into_live(self) -> Vec<T> {
        self.storage.into_live()
    }
}

impl<T: PartialEq> GrowableArray<T> {
    /// Remove the first element equal to `value`.
    ///
    /// Returns `Err(ArrayError::NotFound)` if no element matches.
    pub fn remove(&mut self, value: &T) -> Result<(), ArrayError> {
        let pos = self.index_of(value)?;
        self.storage.shift_out(pos);
        self.shrink_if_sparse();
        self.debug_check();
        Ok(())
    }

    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Result<usize, ArrayError> {
        self.index_of_in(value, None, None)
    }

    /// Position of the first element equal to `value` within
    /// `[start, end)`.
    ///
    /// Both bounds are normalised and clamped into `[0, length]` rather
    /// than rejected, so a window entirely past the end simply finds
    /// nothing. The returned position is relative to the whole array.
    pub fn index_of_in(
        &self,
        value: &T,
        start: Option<isize>,
        end: Option<isize>,
    ) -> Result<usize, ArrayError> {
        let len = self.len();
        let start = start.map_or(0, |s| index::clamp_bound(s, len));
        let end = end.map_or(len, |e| index::clamp_bound(e, len));
        if start >= end {
            return Err(ArrayError::NotFound);
        }
        self.live()[start..end]
            .iter()
            .position(|item| item == value)
            .map(|offset| start + offset)
            .ok_or(ArrayError::NotFound)
    }

    /// Number of elements equal to `value`.
    pub fn count(&self, value: &T) -> usize {
        self.iter().filter(|item| *item == value).count()
    }

    /// Whether any element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|item| item == value)
    }
}

impl<T: PartialOrd> GrowableArray<T> {
    /// Sort in place, non-decreasing. Not stable.
    ///
    /// Quicksort with a last-element pivot: average O(n log n), O(n^2) on
    /// already-descending or heavily duplicated input.
    pub fn sort(&mut self) {
        sort::quicksort(self.storage.live_mut());
    }
}

impl<T: Clone> GrowableArray<T> {
    /// A new array with the same growth factor and a clone of every
    /// element.
    pub fn copy(&self) -> Self {
        let mut out = Self::from_valid_config(self.config.clone());
        out.extend(self.iter().cloned());
        out
    }

    /// A new array holding the elements selected by `range`.
    ///
    /// Follows list slicing: `(..)` copies everything, a step of `-1`
    /// reverses. Out-of-range bounds clamp; an empty selection yields an
    /// empty array. Returns `Err(ArrayError::ZeroStep)` for a zero step.
    pub fn slice(&self, range: impl Into<SliceRange>) -> Result<Self, ArrayError> {
        let positions = range.into().positions(self.len())?;
        let live = self.live();
        let mut out = Self::from_valid_config(self.config.clone());
        out.extend(positions.map(|pos| live[pos].clone()));
        Ok(out)
    }

    /// A new array with the elements of `self` followed by those of
    /// `other`. Neither operand changes.
    pub fn concat(&self, other: &Self) -> Self {
        let mut out = self.copy();
        out.extend(other.iter().cloned());
        out
    }

    /// A new array with the elements of `self` repeated `n` times.
    ///
    /// `n <= 0` yields an empty array.
    pub fn repeat(&self, n: isize) -> Self {
        if n <= 0 {
            return Self::from_valid_config(self.config.clone());
        }
        let mut out = self.copy();
        let original = self.len();
        for _ in 1..n {
            for pos in 0..original {
                let value = out.live()[pos].clone();
                out.append(value);
            }
        }
        out
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        self.copy()
    }
}
