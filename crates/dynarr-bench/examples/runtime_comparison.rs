//! Runtime comparison of GrowableArray against Vec.
//!
//! Times append and default pop at 10, 1 000 and 1 000 000 elements and
//! prints the mean cost per operation for each container.

use dynarr_bench::{render_table, run_comparison, DEFAULT_SIZES};

fn main() {
    println!("=== dynarr runtime comparison ===\n");
    let measurements = run_comparison(&DEFAULT_SIZES);
    print!("{}", render_table(&measurements));
    println!("\nratio = array time / vec time; roughly constant across sizes means amortised O(1)");
}
