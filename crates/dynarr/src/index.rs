//! Index normalisation and slice ranges.
//!
//! Every entry point that accepts a signed index routes it through
//! [`normalize`]. Negative indices count back from the end and clamp at
//! zero rather than wrapping: with length 5, `-1` is `4` and `-10` is `0`.

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::error::ArrayError;

/// Normalise a signed index against `length`.
///
/// Non-negative indices pass through unchanged (they may still be past the
/// end). Negative indices become `max(0, length + index)`.
pub fn normalize(index: isize, length: usize) -> usize {
    if index < 0 {
        length.saturating_sub(index.unsigned_abs())
    } else {
        index as usize
    }
}

/// Normalise `index` and require it to address a live element.
pub(crate) fn checked(index: isize, length: usize) -> Result<usize, ArrayError> {
    let pos = normalize(index, length);
    if pos < length {
        Ok(pos)
    } else {
        Err(ArrayError::IndexOutOfBounds { index, length })
    }
}

/// Normalise a range bound and clamp it into `[0, length]`.
pub(crate) fn clamp_bound(bound: isize, length: usize) -> usize {
    normalize(bound, length).min(length)
}

/// A `start:stop:step` slice request.
///
/// Missing bounds default to the whole array. Build one with
/// [`SliceRange::full`], [`SliceRange::new`] or a `From` conversion from a
/// standard range, then adjust the step:
///
/// ```
/// use dynarr::{GrowableArray, SliceRange};
///
/// let arr: GrowableArray<i32> = (0..5).collect();
/// let rev = arr.slice(SliceRange::full().step(-1)).unwrap();
/// assert_eq!(rev, [4, 3, 2, 1, 0]);
/// let head = arr.slice(..2isize).unwrap();
/// assert_eq!(head, [0, 1]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliceRange {
    /// First index visited (forward) or bound swapped in (reverse).
    pub start: Option<isize>,
    /// Exclusive end bound.
    pub stop: Option<isize>,
    /// Distance between visited indices. Must be non-zero.
    pub step: isize,
}

impl SliceRange {
    /// The whole array, forward: `[:]`.
    pub fn full() -> Self {
        Self {
            start: None,
            stop: None,
            step: 1,
        }
    }

    /// Explicit `start:stop` with step 1.
    pub fn new(start: isize, stop: isize) -> Self {
        Self {
            start: Some(start),
            stop: Some(stop),
            step: 1,
        }
    }

    /// Replace the step.
    pub fn step(mut self, step: isize) -> Self {
        self.step = step;
        self
    }

    /// Resolve against `length` into the sequence of indices to visit.
    ///
    /// Bounds are normalised and clamped into `[0, length]` first. For a
    /// step below one the bounds are then swapped to
    /// `(stop - 1, start - 1)`, which turns `[::-1]` into a walk from the
    /// last element down to the first.
    pub fn positions(&self, length: usize) -> Result<SlicePositions, ArrayError> {
        if self.step == 0 {
            return Err(ArrayError::ZeroStep);
        }
        let start = self.start.map_or(0, |s| clamp_bound(s, length)) as isize;
        let stop = self.stop.map_or(length, |s| clamp_bound(s, length)) as isize;
        let (next, stop) = if self.step < 1 {
            (stop - 1, start - 1)
        } else {
            (start, stop)
        };
        Ok(SlicePositions {
            next,
            stop,
            step: self.step,
        })
    }
}

impl Default for SliceRange {
    fn default() -> Self {
        Self::full()
    }
}

impl From<RangeFull> for SliceRange {
    fn from(_: RangeFull) -> Self {
        Self::full()
    }
}

impl From<Range<isize>> for SliceRange {
    fn from(r: Range<isize>) -> Self {
        Self::new(r.start, r.end)
    }
}

impl From<RangeFrom<isize>> for SliceRange {
    fn from(r: RangeFrom<isize>) -> Self {
        Self {
            start: Some(r.start),
            ..Self::full()
        }
    }
}

impl From<RangeTo<isize>> for SliceRange {
    fn from(r: RangeTo<isize>) -> Self {
        Self {
            stop: Some(r.end),
            ..Self::full()
        }
    }
}

/// Iterator over the indices selected by a [`SliceRange`].
#[derive(Clone, Debug)]
pub struct SlicePositions {
    next: isize,
    stop: isize,
    step: isize,
}

impl SlicePositions {
    fn remaining(&self) -> usize {
        let span = if self.step > 0 {
            self.stop - self.next
        } else {
            self.next - self.stop
        };
        if span <= 0 {
            return 0;
        }
        let step = self.step.unsigned_abs();
        (span as usize).div_ceil(step)
    }
}

impl Iterator for SlicePositions {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let done = if self.step > 0 {
            self.next >= self.stop
        } else {
            self.next <= self.stop
        };
        if done {
            return None;
        }
        let pos = self.next;
        // Saturate on overflow; the loop condition then ends iteration.
        self.next = self.next.checked_add(self.step).unwrap_or(self.stop);
        Some(pos as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for SlicePositions {}
