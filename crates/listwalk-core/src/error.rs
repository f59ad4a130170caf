//! Error types for walker queries and movement.

use crate::id::Coord;
use std::error::Error;
use std::fmt;

/// Errors from walker construction, queries, and cursor movement.
///
/// None of these are fatal: a failed query or move leaves the walker
/// exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WalkError {
    /// A requested position lies outside `[0, size)` on some axis.
    OutOfRange {
        /// The offending position.
        position: Coord,
        /// The walker's size on each axis.
        size: Coord,
    },
    /// A move with jumping disabled was blocked by an ignored element
    /// directly next to the cursor.
    CannotMove {
        /// Cursor position when the move was attempted.
        from: Coord,
        /// The ignored position that blocked it.
        blocked_at: Coord,
    },
    /// Attempted to build a walker over no elements.
    EmptyData,
    /// An axis has more elements than positions can address.
    DimensionTooLarge {
        /// Which axis (`"len"`, `"rows"`, or `"cols"`).
        name: &'static str,
        /// The rejected length.
        value: usize,
        /// Maximum accepted length.
        max: usize,
    },
}

impl WalkError {
    /// `true` for [`WalkError::OutOfRange`].
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// `true` for [`WalkError::CannotMove`].
    pub fn is_cannot_move(&self) -> bool {
        matches!(self, Self::CannotMove { .. })
    }
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { position, size } => {
                write!(f, "position {position:?} out of range for size {size:?}")
            }
            Self::CannotMove { from, blocked_at } => {
                write!(
                    f,
                    "cannot move from {from:?}: blocked by ignored element at {blocked_at:?}"
                )
            }
            Self::EmptyData => write!(f, "walker data must have at least one element"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for WalkError {}
