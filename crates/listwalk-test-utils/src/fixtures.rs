//! Reusable walker fixtures.
//!
//! - [`SAMPLE_LINE`] — `[1, 2, 3, 4, 5]` with indices 2 and 3 ignored.
//! - [`numbered_grid`] — `rows × cols` grid holding `row * cols + col + 1`;
//!   the 6 × 5 instance with [`SAMPLE_GRID_IGNORED`] is the reference grid.

use listwalk::{Walker, Walker1D, Walker2D};

pub const SAMPLE_LINE: [i32; 5] = [1, 2, 3, 4, 5];

pub const SAMPLE_LINE_IGNORED: [i32; 2] = [2, 3];

pub const SAMPLE_GRID_ROWS: usize = 6;

pub const SAMPLE_GRID_COLS: usize = 5;

/// A run down column 0 plus one cell in the top row.
pub const SAMPLE_GRID_IGNORED: [(i32, i32); 4] = [(1, 0), (2, 0), (3, 0), (0, 3)];

/// `[1, 2, ..., len]`.
pub fn numbered_line(len: usize) -> Vec<i32> {
    (1..=len as i32).collect()
}

/// Grid of `rows` rows and `cols` columns holding `row * cols + col + 1`.
pub fn numbered_grid(rows: usize, cols: usize) -> Vec<Vec<i32>> {
    (0..rows)
        .map(|r| (0..cols).map(|c| (r * cols + c + 1) as i32).collect())
        .collect()
}

/// Walker over `data` with [`SAMPLE_LINE_IGNORED`] applied.
pub fn sample_line_walker(data: &[i32]) -> Walker1D<'_, i32> {
    let mut walker = Walker1D::new(data).expect("sample line must not be empty");
    walker.extend_ignored(SAMPLE_LINE_IGNORED);
    walker
}

/// Walker over `data` with [`SAMPLE_GRID_IGNORED`] applied.
pub fn sample_grid_walker(data: &[Vec<i32>]) -> Walker2D<'_, Vec<i32>> {
    let mut walker = Walker2D::new(data).expect("sample grid must not be empty");
    walker.extend_ignored(SAMPLE_GRID_IGNORED);
    walker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_grid_matches_reference_values() {
        let grid = numbered_grid(SAMPLE_GRID_ROWS, SAMPLE_GRID_COLS);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0], [1, 2, 3, 4, 5]);
        assert_eq!(grid[4][0], 21);
        assert_eq!(grid[5][4], 30);
    }

    #[test]
    fn numbered_line_matches_sample() {
        assert_eq!(numbered_line(5), SAMPLE_LINE);
    }
}
