//! Test utilities for listwalk development.
//!
//! Provides the reference data sets used across the integration tests and
//! helpers that build walkers with their ignored sets already applied.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    numbered_grid, numbered_line, sample_grid_walker, sample_line_walker, SAMPLE_GRID_COLS,
    SAMPLE_GRID_IGNORED, SAMPLE_GRID_ROWS, SAMPLE_LINE, SAMPLE_LINE_IGNORED,
};
