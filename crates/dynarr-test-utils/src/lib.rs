//! Test utilities and reference model for dynarr development.
//!
//! Provides [`assert_invariants`] for the structural guarantees every
//! public operation must restore, a `Vec`-backed [`ReferenceModel`] that
//! mirrors the array's indexing rules, and an [`Op`] vocabulary for
//! driving both side by side in model-based tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use dynarr::index::normalize;
use dynarr::{ArrayError, GrowableArray};

/// Assert the length/capacity invariants of `arr`.
///
/// - `capacity >= 1`
/// - `length <= capacity`
/// - iteration yields exactly `length` elements
pub fn assert_invariants<T>(arr: &GrowableArray<T>) {
    assert!(arr.capacity() >= 1, "capacity dropped to zero");
    assert!(
        arr.len() <= arr.capacity(),
        "length {} exceeds capacity {}",
        arr.len(),
        arr.capacity()
    );
    assert_eq!(arr.iter().count(), arr.len(), "gap in live elements");
}

/// A single mutation applied to both an array and the reference model.
#[derive(Clone, Debug)]
pub enum Op {
    Append(i64),
    Insert(isize, i64),
    Pop,
    PopAt(isize),
    Remove(i64),
    Set(isize, i64),
    Clear,
    Sort,
    Reverse,
}

/// `Vec`-backed model of the array's observable behaviour.
///
/// Implements the same clamp-to-zero normalisation and error choices
/// using only standard library operations, so any divergence points at
/// the array.
#[derive(Clone, Debug, Default)]
pub struct ReferenceModel {
    pub items: Vec<i64>,
}

impl ReferenceModel {
    pub fn new() -> Self {
        Self::default()
    }

    fn checked(&self, index: isize) -> Result<usize, ArrayError> {
        let pos = normalize(index, self.items.len());
        if pos < self.items.len() {
            Ok(pos)
        } else {
            Err(ArrayError::IndexOutOfBounds {
                index,
                length: self.items.len(),
            })
        }
    }

    /// Apply `op`, returning the value (if any) the operation yields.
    pub fn apply(&mut self, op: &Op) -> Result<Option<i64>, ArrayError> {
        match *op {
            Op::Append(v) => {
                self.items.push(v);
                Ok(None)
            }
            Op::Insert(i, v) => {
                let pos = normalize(i, self.items.len()).min(self.items.len());
                self.items.insert(pos, v);
                Ok(None)
            }
            Op::Pop => self.apply(&Op::PopAt(-1)),
            Op::PopAt(i) => {
                let pos = self.checked(i)?;
                Ok(Some(self.items.remove(pos)))
            }
            Op::Remove(v) => {
                let pos = self
                    .items
                    .iter()
                    .position(|&x| x == v)
                    .ok_or(ArrayError::NotFound)?;
                self.items.remove(pos);
                Ok(None)
            }
            Op::Set(i, v) => {
                let pos = self.checked(i)?;
                Ok(Some(std::mem::replace(&mut self.items[pos], v)))
            }
            Op::Clear => {
                self.items.clear();
                Ok(None)
            }
            Op::Sort => {
                self.items.sort_unstable();
                Ok(None)
            }
            Op::Reverse => {
                self.items.reverse();
                Ok(None)
            }
        }
    }
}

/// Apply `op` to `arr`, returning the value (if any) the operation yields.
pub fn apply_op(arr: &mut GrowableArray<i64>, op: &Op) -> Result<Option<i64>, ArrayError> {
    match *op {
        Op::Append(v) => {
            arr.append(v);
            Ok(None)
        }
        Op::Insert(i, v) => {
            arr.insert(i, v);
            Ok(None)
        }
        Op::Pop => arr.pop().map(Some),
        Op::PopAt(i) => arr.pop_at(i).map(Some),
        Op::Remove(v) => arr.remove(&v).map(|()| None),
        Op::Set(i, v) => arr.set(i, v).map(Some),
        Op::Clear => {
            arr.clear();
            Ok(None)
        }
        Op::Sort => {
            arr.sort();
            Ok(None)
        }
        Op::Reverse => {
            arr.reverse();
            Ok(None)
        }
    }
}
