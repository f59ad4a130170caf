//! Cursor walkers over fixed 1D and 2D collections.
//!
//! A walker borrows a collection, keeps a cursor on one of its positions,
//! and tracks a set of *ignored* positions that movement can skip over.
//! The [`Walker`] trait carries the shared protocol; movement is written
//! once against it and reused by both backends.
//!
//! # Backends
//!
//! - [`Walker1D`]: cursor over a slice, positions are `i32` indices
//! - [`Walker2D`]: cursor over a slice of rows, positions are `(row, col)`
//!
//! # Movement
//!
//! A move steps one position in a [`Direction`]. With
//! [`MoveOptions::jump`] set it continues over any run of ignored positions
//! to the first one that is not ignored; without it an ignored neighbour
//! blocks the move with [`WalkError::CannotMove`]. Leaving the collection
//! fails with [`WalkError::OutOfRange`]. [`MoveOptions::silent`] turns both
//! failures into a no-op returning the current element.
//!
//! ```
//! use listwalk::{MoveOptions, Walker, Walker2D};
//!
//! let grid: Vec<Vec<i32>> = (0..6)
//!     .map(|r| (0..5).map(|c| r * 5 + c + 1).collect())
//!     .collect();
//! let mut walker = Walker2D::new(&grid).unwrap();
//! walker.extend_ignored([(1, 0), (2, 0), (3, 0), (0, 3)]);
//!
//! assert!(walker.move_down(MoveOptions::STEP).unwrap_err().is_cannot_move());
//! let landed = walker.move_down(MoveOptions::default()).unwrap();
//! assert_eq!((landed.position(), *landed.value()), ((4, 0), 21));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod line;
mod render;
pub mod walker;

#[cfg(test)]
pub(crate) mod compliance;

pub use grid::{Row, Walker2D};
pub use line::Walker1D;
pub use walker::{ElementOf, Walker};

pub use listwalk_core::{
    Coord, Direction, Direction1D, Direction2D, Element, MoveOptions, Position, WalkError,
    WalkerId,
};
