//! Reusable array fixtures.
//!
//! - [`range_array`]: `0..n` appended one at a time (growth factor 2).
//! - [`range_array_with_factor`]: the same with a custom growth factor.
//! - [`descending_array`]: worst case for a last-element-pivot quicksort.
//! - [`scrambled_array`]: deterministic pseudo-random permutation input.

use dynarr::GrowableArray;

/// An array holding `0..n`, built by repeated `append`.
pub fn range_array(n: i64) -> GrowableArray<i64> {
    let mut arr = GrowableArray::new();
    for i in 0..n {
        arr.append(i);
    }
    arr
}

/// An array holding `0..n` with the given growth factor.
///
/// # Panics
///
/// Panics if `growth_factor < 2`.
pub fn range_array_with_factor(n: i64, growth_factor: usize) -> GrowableArray<i64> {
    let mut arr = GrowableArray::with_growth_factor(growth_factor)
        .expect("fixture requires a valid growth factor");
    for i in 0..n {
        arr.append(i);
    }
    arr
}

/// An array holding `n-1, n-2, ..., 0`.
pub fn descending_array(n: i64) -> GrowableArray<i64> {
    (0..n).rev().collect()
}

/// `n` values from a fixed linear congruential sequence.
///
/// Same `seed` gives the same sequence; values fall in `0..modulus`.
pub fn scrambled_array(n: usize, seed: u64, modulus: i64) -> GrowableArray<i64> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 33) as i64).rem_euclid(modulus)
        })
        .collect()
}
