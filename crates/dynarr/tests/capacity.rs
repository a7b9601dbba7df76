//! Integration test: capacity management under long operation sequences.
//!
//! Verifies the amortised cost bound on append/pop, the absence of
//! grow/shrink thrash at a resize boundary, and that random operation
//! sequences keep the array in lockstep with a `Vec` reference model
//! while preserving the length/capacity invariants.

use dynarr::{GrowableArray, ResizeStats};
use dynarr_test_utils::fixtures::{range_array, range_array_with_factor};
use dynarr_test_utils::{apply_op, assert_invariants, Op, ReferenceModel};

/// Elements copied per operation, averaged over the array's lifetime.
fn copies_per_op(stats: ResizeStats, ops: u64) -> f64 {
    stats.slots_copied as f64 / ops as f64
}

#[test]
fn append_copy_cost_is_independent_of_size() {
    for n in [10i64, 1_000, 1_000_000] {
        let arr = range_array(n);
        let per_op = copies_per_op(arr.stats(), n as u64);
        // Doubling copies fewer than 2 elements per append in total.
        assert!(per_op < 2.0, "n={n}: {per_op} copies per append");
        assert_invariants(&arr);
    }
}

#[test]
fn append_then_pop_all_is_amortised_constant() {
    for n in [10i64, 1_000, 1_000_000] {
        let mut arr = range_array(n);
        for _ in 0..n {
            arr.pop().unwrap();
        }
        let per_op = copies_per_op(arr.stats(), 2 * n as u64);
        assert!(per_op < 2.0, "n={n}: {per_op} copies per op");
        // Shrinking stops one step above the initial capacity.
        assert_eq!(arr.capacity(), arr.growth_factor());
        assert!(arr.is_empty());
    }
}

#[test]
fn pop_all_shrinks_to_growth_factor_for_other_factors() {
    for factor in [3usize, 4] {
        let mut arr = range_array_with_factor(500, factor);
        while arr.pop().is_ok() {}
        assert_eq!(arr.capacity(), factor);
    }
}

#[test]
fn no_thrash_at_grow_boundary() {
    // Exactly full: the next append grows.
    let mut arr = range_array(8);
    assert_eq!(arr.capacity(), 8);
    arr.append(8);
    assert_eq!(arr.capacity(), 16);

    let before = arr.stats().reallocations();
    for i in 0..1_000 {
        arr.pop().unwrap();
        arr.append(i);
    }
    assert_eq!(arr.stats().reallocations(), before);
    assert_eq!(arr.capacity(), 16);
}

#[test]
fn no_thrash_at_shrink_boundary() {
    let mut arr = range_array(16);
    // Pop down to the shrink: 3 < 16/4.
    while arr.len() > 3 {
        arr.pop().unwrap();
    }
    assert_eq!(arr.capacity(), 8);

    let before = arr.stats().reallocations();
    for i in 0..1_000 {
        arr.append(i);
        arr.pop().unwrap();
    }
    assert_eq!(arr.stats().reallocations(), before);
}

#[test]
fn insert_and_remove_in_middle_keep_invariants() {
    let mut arr = GrowableArray::new();
    for i in 0..200i64 {
        arr.insert((i / 2) as isize, i);
        assert_invariants(&arr);
    }
    for i in 0..200i64 {
        arr.remove(&i).unwrap();
        assert_invariants(&arr);
    }
    assert!(arr.is_empty());
    assert_eq!(arr.capacity(), 2);
}

#[test]
fn sort_descending_worst_case_completes() {
    let mut arr = dynarr_test_utils::fixtures::descending_array(4_000);
    arr.sort();
    assert!(arr.iter().zip(arr.iter().skip(1)).all(|(a, b)| a <= b));
    assert_eq!(arr.len(), 4_000);
}

#[cfg(not(miri))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_op() -> impl Strategy<Value = Op> {
        prop_oneof![
            4 => (-20i64..20).prop_map(Op::Append),
            2 => (-12isize..12, -20i64..20).prop_map(|(i, v)| Op::Insert(i, v)),
            2 => Just(Op::Pop),
            1 => (-12isize..12).prop_map(Op::PopAt),
            1 => (-20i64..20).prop_map(Op::Remove),
            1 => (-12isize..12, -20i64..20).prop_map(|(i, v)| Op::Set(i, v)),
            1 => Just(Op::Sort),
            1 => Just(Op::Reverse),
            1 => Just(Op::Clear),
        ]
    }

    proptest! {
        #[test]
        fn matches_reference_model(
            factor in 2usize..5,
            ops in proptest::collection::vec(arb_op(), 0..200),
        ) {
            let mut arr = GrowableArray::with_growth_factor(factor).unwrap();
            let mut model = ReferenceModel::new();
            for op in &ops {
                prop_assert_eq!(apply_op(&mut arr, op), model.apply(op));
                prop_assert!(arr.equals(&model.items));
                prop_assert!(arr.capacity() >= 1);
                prop_assert!(arr.len() <= arr.capacity());
            }
        }

        #[test]
        fn sort_yields_sorted_permutation(
            values in proptest::collection::vec(-100i64..100, 0..300),
        ) {
            let mut arr: GrowableArray<i64> = values.iter().copied().collect();
            arr.sort();
            let mut expected = values;
            expected.sort();
            prop_assert_eq!(arr, expected);
        }

        #[test]
        fn copy_equals_source(values in proptest::collection::vec(any::<i32>(), 0..100)) {
            let arr: GrowableArray<i32> = values.into_iter().collect();
            prop_assert_eq!(arr.copy(), arr);
        }

        #[test]
        fn slice_matches_vec_model(
            values in proptest::collection::vec(0i64..10, 0..30),
            start in proptest::option::of(-40isize..40),
            stop in proptest::option::of(-40isize..40),
            step in prop_oneof![1isize..4, -4isize..0],
        ) {
            let arr: GrowableArray<i64> = values.iter().copied().collect();
            let range = dynarr::SliceRange { start, stop, step };
            let positions: Vec<usize> = range.positions(values.len()).unwrap().collect();
            let expected: Vec<i64> = positions.iter().map(|&p| values[p]).collect();
            prop_assert_eq!(arr.slice(range).unwrap(), expected);
        }
    }
}
