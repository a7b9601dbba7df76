//! Runtime comparison harness for dynarr.
//!
//! Times `append` and default `pop` on a [`GrowableArray`] against the
//! same operations on a `Vec` and renders the results as a table:
//!
//! - [`DEFAULT_SIZES`]: small, medium and large element counts
//! - [`time_operation`]: one measurement for one operation and size
//! - [`run_comparison`]: every operation across a list of sizes
//! - [`render_table`]: fixed-width text rendering of the measurements

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::fmt::Write as _;
use std::hint::black_box;
use std::time::{Duration, Instant};

use dynarr::GrowableArray;

/// Element counts used by the comparison example.
pub const DEFAULT_SIZES: [usize; 3] = [10, 1_000, 1_000_000];

/// An operation the harness knows how to time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// `size` appends onto an empty container.
    Append,
    /// `size` default pops from a container holding `size` elements.
    Pop,
}

impl Operation {
    /// Every timed operation, in table order.
    pub const ALL: [Operation; 2] = [Operation::Append, Operation::Pop];

    /// Column label.
    pub fn name(self) -> &'static str {
        match self {
            Operation::Append => "append",
            Operation::Pop => "pop",
        }
    }
}

/// Average per-operation cost for one operation at one size.
#[derive(Clone, Copy, Debug)]
pub struct Measurement {
    /// The operation timed.
    pub operation: Operation,
    /// Number of operations performed per container.
    pub size: usize,
    /// Mean microseconds per operation on the [`GrowableArray`].
    pub array_us: f64,
    /// Mean microseconds per operation on the `Vec`.
    pub vec_us: f64,
}

impl Measurement {
    /// How many times slower the array is than the `Vec`.
    ///
    /// `None` when the `Vec` time rounds to zero.
    pub fn ratio(&self) -> Option<f64> {
        (self.vec_us > 0.0).then(|| self.array_us / self.vec_us)
    }
}

fn per_op_us(elapsed: Duration, size: usize) -> f64 {
    if size == 0 {
        return 0.0;
    }
    elapsed.as_secs_f64() * 1e6 / size as f64
}

fn time_array(operation: Operation, size: usize) -> Duration {
    match operation {
        Operation::Append => {
            let mut arr = GrowableArray::new();
            let start = Instant::now();
            for i in 0..size {
                arr.append(black_box(i));
            }
            let elapsed = start.elapsed();
            black_box(arr.len());
            elapsed
        }
        Operation::Pop => {
            let mut arr: GrowableArray<usize> = (0..size).collect();
            let start = Instant::now();
            while let Ok(v) = arr.pop() {
                black_box(v);
            }
            start.elapsed()
        }
    }
}

fn time_vec(operation: Operation, size: usize) -> Duration {
    match operation {
        Operation::Append => {
            let mut vec = Vec::new();
            let start = Instant::now();
            for i in 0..size {
                vec.push(black_box(i));
            }
            let elapsed = start.elapsed();
            black_box(vec.len());
            elapsed
        }
        Operation::Pop => {
            let mut vec: Vec<usize> = (0..size).collect();
            let start = Instant::now();
            while let Some(v) = vec.pop() {
                black_box(v);
            }
            start.elapsed()
        }
    }
}

/// Time `size` repetitions of `operation` on both containers.
pub fn time_operation(operation: Operation, size: usize) -> Measurement {
    Measurement {
        operation,
        size,
        array_us: per_op_us(time_array(operation, size), size),
        vec_us: per_op_us(time_vec(operation, size), size),
    }
}

/// Measure every [`Operation`] at every size, operation-major.
pub fn run_comparison(sizes: &[usize]) -> Vec<Measurement> {
    Operation::ALL
        .iter()
        .flat_map(|&op| sizes.iter().map(move |&size| time_operation(op, size)))
        .collect()
}

/// Render measurements as a fixed-width table with a header row.
pub fn render_table(measurements: &[Measurement]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:>10} {:>14} {:>14} {:>8}",
        "op", "size", "array (us)", "vec (us)", "ratio"
    );
    for m in measurements {
        let ratio = match m.ratio() {
            Some(r) => format!("{r:.2}x"),
            None => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<8} {:>10} {:>14.5} {:>14.5} {:>8}",
            m.operation.name(),
            m.size,
            m.array_us,
            m.vec_us,
            ratio
        );
    }
    out
}
