//! Core types for the listwalk cursor library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every walker: identifiers, position arithmetic,
//! directions, the [`Element`] snapshot, movement options, and errors.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod element;
pub mod error;
pub mod id;
pub mod options;
pub mod position;

pub use direction::{Direction, Direction1D, Direction2D};
pub use element::Element;
pub use error::WalkError;
pub use id::{Coord, WalkerId};
pub use options::MoveOptions;
pub use position::Position;
