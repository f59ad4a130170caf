//! Movement directions for 1D and 2D walkers.

use crate::position::Position;
use std::fmt;
use std::hash::Hash;

/// A direction the cursor can look or move in.
///
/// Every direction is a unit step along exactly one axis; diagonals are
/// not representable.
pub trait Direction: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// The position type this direction steps through.
    type Position: Position;

    /// All directions, in the order neighbour queries report them.
    const ALL: &'static [Self];

    /// Lowercase name, e.g. `"left"`.
    fn name(self) -> &'static str;

    /// Unit step vector.
    fn step(self) -> Self::Position;

    /// The direction pointing the other way.
    fn opposite(self) -> Self;
}

/// Directions along a linear sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction1D {
    /// Towards index 0.
    Left,
    /// Towards the last index.
    Right,
}

impl Direction for Direction1D {
    type Position = i32;

    const ALL: &'static [Self] = &[Self::Left, Self::Right];

    fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    fn step(self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }

    fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Direction1D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cardinal directions across a grid. Rows grow downwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction2D {
    /// Row − 1.
    Up,
    /// Column + 1.
    Right,
    /// Row + 1.
    Down,
    /// Column − 1.
    Left,
}

impl Direction for Direction2D {
    type Position = (i32, i32);

    // Clockwise from the top.
    const ALL: &'static [Self] = &[Self::Up, Self::Right, Self::Down, Self::Left];

    fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Right => "right",
            Self::Down => "down",
            Self::Left => "left",
        }
    }

    fn step(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Right => (0, 1),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
        }
    }

    fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
        }
    }
}

impl fmt::Display for Direction2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_opposites_cancel<D: Direction>() {
        for &d in D::ALL {
            let origin = <D::Position as Position>::ORIGIN;
            let there = origin.offset(d.step());
            assert_ne!(there, origin, "{d:?} must move");
            assert_eq!(there.offset(d.opposite().step()), origin);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn opposites_cancel_1d() {
        assert_opposites_cancel::<Direction1D>();
    }

    #[test]
    fn opposites_cancel_2d() {
        assert_opposites_cancel::<Direction2D>();
    }

    #[test]
    fn grid_steps_touch_one_axis() {
        for &d in Direction2D::ALL {
            let (dr, dc) = d.step();
            assert_eq!(dr.abs() + dc.abs(), 1, "{d} is not a unit step");
        }
    }

    #[test]
    fn names() {
        let names: Vec<_> = Direction2D::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(names, ["up", "right", "down", "left"]);
        assert_eq!(Direction1D::Left.to_string(), "left");
    }
}
