//! A generic growable array with signed indexing and stepped slicing.
//!
//! [`GrowableArray`] owns a contiguous buffer whose capacity is managed
//! explicitly: it multiplies by a growth factor when full and divides by it
//! once occupancy falls below `1 / growth_factor^2`. On top of three
//! primitives (index normalisation, resize and element shift) it provides
//! signed and sliced indexing, insertion and removal, search, an in-place
//! quicksort, and value-semantics comparison and arithmetic operators.
//!
//! # Architecture
//!
//! ```text
//! GrowableArray<T>
//! ├── Storage<T>     (exact-capacity buffer; relocate() is the only allocation)
//! ├── ArrayConfig    (growth factor, validated at construction)
//! └── ResizeStats    (grow / shrink / reset / copied-slot counters)
//! ```
//!
//! # Indexing
//!
//! Every index-taking operation normalises negative indices as
//! `max(0, length + index)`, clamping rather than wrapping. `get`, `set`
//! and `pop_at` reject positions outside `[0, length)`; `insert` and
//! `index_of_in` clamp instead.
//!
//! # Example
//!
//! ```
//! use dynarr::{ArrayError, GrowableArray, SliceRange};
//!
//! let mut arr: GrowableArray<i32> = (0..5).collect();
//! arr.insert(-1, 5);
//! assert_eq!(arr, [0, 1, 2, 3, 5, 4]);
//!
//! arr.remove(&2).unwrap();
//! assert_eq!(arr.remove(&2), Err(ArrayError::NotFound));
//!
//! arr.sort();
//! let rev = arr.slice(SliceRange::full().step(-1)).unwrap();
//! assert_eq!(rev, [5, 4, 3, 1, 0]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod cmp;
pub mod config;
pub mod error;
pub mod index;
pub mod iter;
pub mod ops;
mod sort;
pub mod stats;
mod storage;

// Public re-exports for the primary API surface.
pub use array::GrowableArray;
pub use config::ArrayConfig;
pub use error::ArrayError;
pub use index::{SlicePositions, SliceRange};
pub use iter::IntoIter;
pub use stats::ResizeStats;
