//! In-place quicksort over the live elements of an array.
//!
//! Partitioning takes the last element of each subrange as the pivot and
//! converges two pointers with strict comparisons: the left pointer skips
//! elements `< pivot`, the right pointer skips elements `> pivot`, and
//! anything else is swapped. The pivot is then swapped into its resting
//! place at the left pointer.
//!
//! Subranges are kept on an explicit work stack instead of recursing. The
//! smaller side is always processed first, so at most `log2(n)` ranges are
//! pending and already-sorted or duplicate-heavy input (the O(n^2) cases)
//! cannot exhaust the call stack.
//!
//! The sort is not stable.

use smallvec::SmallVec;

/// Inclusive `(start, end)` subrange awaiting partitioning.
type Pending = SmallVec<[(usize, usize); 32]>;

/// Sort `data` in non-decreasing order.
pub(crate) fn quicksort<T: PartialOrd>(data: &mut [T]) {
    if data.len() < 2 {
        return;
    }
    let mut pending = Pending::new();
    pending.push((0, data.len() - 1));

    while let Some((start, end)) = pending.pop() {
        let pivot = partition(data, start, end);

        let low = (pivot > start + 1).then(|| (start, pivot - 1));
        let high = (pivot + 1 < end).then(|| (pivot + 1, end));

        // Push the larger side first so the smaller one is popped next.
        match (low, high) {
            (Some(l), Some(h)) => {
                if l.1 - l.0 > h.1 - h.0 {
                    pending.push(l);
                    pending.push(h);
                } else {
                    pending.push(h);
                    pending.push(l);
                }
            }
            (Some(r), None) | (None, Some(r)) => pending.push(r),
            (None, None) => {}
        }
    }
}

/// Partition `data[start..=end]` around `data[end]`.
///
/// Returns the pivot's final index. Everything before it compares
/// `<=` the pivot, everything after `>=`.
fn partition<T: PartialOrd>(data: &mut [T], start: usize, end: usize) -> usize {
    let mut left = start;
    // One past the right pointer, so the pointer can cross `start` without
    // underflowing.
    let mut right_end = end;

    while left < right_end {
        while left < right_end && data[left] < data[end] {
            left += 1;
        }
        while left < right_end && data[right_end - 1] > data[end] {
            right_end -= 1;
        }
        if left < right_end {
            data.swap(left, right_end - 1);
            left += 1;
            right_end -= 1;
        }
    }
    data.swap(left, end);
    left
}
