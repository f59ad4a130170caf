//! Benchmark profiles for listwalk.
//!
//! - [`striped_line`]: long line where every cell but each `stride`-th is ignored
//! - [`walled_grid`]: square grid with every other column ignored except the last

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use listwalk::{Walker, Walker1D, Walker2D};
pub use listwalk_test_utils::{numbered_grid, numbered_line};

/// Ignore every index of `walker` that is not a multiple of `stride`.
///
/// A jumping move from a visible cell then skips `stride - 1` cells.
pub fn striped_line<T>(walker: &mut Walker1D<'_, T>, stride: usize) {
    let len = walker.len();
    walker.extend_ignored((0..len).filter(|i| i % stride != 0).map(|i| i as i32));
}

/// Ignore every odd column of a square `walker` except the last one.
pub fn walled_grid(walker: &mut Walker2D<'_, Vec<i32>>) {
    let (rows, cols) = walker.size();
    let walls = (0..rows).flat_map(|r| {
        (1..cols.saturating_sub(1))
            .step_by(2)
            .map(move |c| (r as i32, c as i32))
    });
    walker.extend_ignored(walls);
}
