//! Walker identifiers and the [`Coord`] type alias.

use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// A position flattened to its per-axis components.
///
/// One component for 1D walkers, two (`[row, col]`) for 2D walkers. Used
/// wherever a position has to be reported without knowing its concrete
/// type, most notably inside [`WalkError`](crate::WalkError).
pub type Coord = SmallVec<[i32; 2]>;

/// Counter for unique [`WalkerId`] allocation.
static WALKER_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a walker.
///
/// Allocated from a monotonic atomic counter via [`WalkerId::next`]. Two
/// walkers over the same data still have different IDs. Elements carry the
/// ID of the walker that produced them instead of a reference, so an element
/// never keeps its walker borrowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalkerId(u64);

impl WalkerId {
    /// Allocate a fresh, unique walker ID.
    ///
    /// Each call returns a new ID that has never been returned before
    /// within this process. Thread-safe.
    pub fn next() -> Self {
        Self(WALKER_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WalkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "walker#{}", self.0)
    }
}
