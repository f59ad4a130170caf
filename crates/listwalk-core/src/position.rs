//! Position arithmetic shared by 1D and 2D walkers.

use crate::id::Coord;
use smallvec::smallvec;
use std::fmt;
use std::hash::Hash;

/// A fixed-size integer position.
///
/// Implemented for `i32` (an index into a sequence) and `(i32, i32)`
/// (a `(row, col)` cell in a grid). The movement algorithm is written once
/// against this trait; each walker only supplies its bounds check.
///
/// Offsets saturate instead of overflowing. Walkers cap every axis at
/// `i32::MAX` cells, so a saturated coordinate is always out of range and
/// the bounds check rejects it like any other out-of-range candidate.
pub trait Position: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The origin: index `0`, or cell `(0, 0)`.
    const ORIGIN: Self;

    /// `self + step`, saturating per axis.
    fn offset(self, step: Self) -> Self;

    /// Flatten into per-axis components for error reporting.
    fn to_coord(self) -> Coord;
}

impl Position for i32 {
    const ORIGIN: Self = 0;

    fn offset(self, step: Self) -> Self {
        self.saturating_add(step)
    }

    fn to_coord(self) -> Coord {
        smallvec![self]
    }
}

impl Position for (i32, i32) {
    const ORIGIN: Self = (0, 0);

    fn offset(self, step: Self) -> Self {
        (self.0.saturating_add(step.0), self.1.saturating_add(step.1))
    }

    fn to_coord(self) -> Coord {
        smallvec![self.0, self.1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offset_1d() {
        assert_eq!(3i32.offset(1), 4);
        assert_eq!(0i32.offset(-1), -1);
    }

    #[test]
    fn offset_2d_is_per_axis() {
        assert_eq!((2, 3).offset((-1, 0)), (1, 3));
        assert_eq!((2, 3).offset((0, 1)), (2, 4));
    }

    #[test]
    fn offset_saturates_at_the_edges() {
        assert_eq!(i32::MAX.offset(1), i32::MAX);
        assert_eq!(i32::MIN.offset(-1), i32::MIN);
        assert_eq!((i32::MAX, i32::MIN).offset((1, -1)), (i32::MAX, i32::MIN));
    }

    #[test]
    fn to_coord_flattens_axes() {
        assert_eq!(5i32.to_coord().as_slice(), &[5]);
        assert_eq!((4, 0).to_coord().as_slice(), &[4, 0]);
    }

    proptest! {
        #[test]
        fn offset_then_back_is_identity(r in -1000i32..1000, c in -1000i32..1000) {
            for step in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
                let back = (-step.0, -step.1);
                prop_assert_eq!((r, c).offset(step).offset(back), (r, c));
            }
        }
    }
}
