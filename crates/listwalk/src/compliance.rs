//! Walker trait compliance test helpers.
//!
//! These functions verify that a Walker implementation satisfies the
//! invariants required by the trait contract. Reused across the Walker1D
//! and Walker2D test modules.

use crate::walker::Walker;
use listwalk_core::{Direction, MoveOptions, Position};

/// Assert `get(p).position == p` and `get(p).is_ignored == is_ignored(p)`
/// for every position.
pub fn assert_get_matches_position<'a, W: Walker<'a>>(walker: &W) {
    for p in walker.canonical_ordering() {
        let el = walker
            .get(p)
            .unwrap_or_else(|e| panic!("get({p:?}) failed: {e}"));
        assert_eq!(el.position(), p, "get({p:?}) returned wrong position");
        assert_eq!(
            el.is_ignored(),
            walker.is_ignored(p),
            "get({p:?}).is_ignored disagrees with is_ignored"
        );
        assert!(el.belongs_to(walker.id()));
    }
}

/// Assert every position in `outside` is rejected with `OutOfRange` and
/// that the rejection leaves the cursor and ignored set untouched.
pub fn assert_out_of_range_is_pure<'a, W: Walker<'a>>(walker: &W, outside: &[W::Position]) {
    let cursor = walker.cursor();
    let ignored = walker.ignored_elements().clone();
    for &p in outside {
        let err = walker.get(p).map(|el| el.position()).unwrap_err();
        assert!(err.is_out_of_range(), "get({p:?}) gave {err}");
    }
    assert_eq!(walker.cursor(), cursor);
    assert_eq!(walker.ignored_elements(), &ignored);
}

/// Assert the cursor element is in bounds and agrees with `get(cursor)`.
pub fn assert_cursor_in_bounds<'a, W: Walker<'a>>(walker: &W) {
    let cursor = walker.cursor();
    let el = walker.cursor_element();
    assert_eq!(el.position(), cursor);
    assert!(walker.get(cursor).is_ok(), "cursor {cursor:?} is out of bounds");
}

/// Assert each neighbour sits exactly one step from `origin` and that
/// every missing direction is out of range.
pub fn assert_neighbours_consistent<'a, W: Walker<'a>>(walker: &W) {
    for origin in walker.canonical_ordering() {
        let neighbours = walker.get_neighbors(Some(origin));
        for &d in W::Direction::ALL {
            let target = origin.offset(d.step());
            match neighbours.get(&d) {
                Some(el) => assert_eq!(el.position(), target),
                None => assert!(walker.get(target).is_err()),
            }
        }
    }
}

/// From every non-ignored start, repeated silent moves at the boundary in
/// each direction must eventually stop changing the cursor.
pub fn assert_silent_boundary_idempotent<'a, W: Walker<'a>>(walker: &mut W) {
    let home = walker.cursor();
    for &d in W::Direction::ALL {
        let cells = walker.canonical_ordering().len();
        for _ in 0..=cells {
            walker
                .move_towards(d, MoveOptions::PROBE)
                .unwrap_or_else(|e| panic!("silent move {d:?} failed: {e}"));
        }
        let parked = walker.cursor();
        for _ in 0..3 {
            let el = walker.move_towards(d, MoveOptions::PROBE).unwrap();
            assert_eq!(el.position(), parked);
            assert_eq!(walker.cursor(), parked);
        }
        assert!(walker.move_towards(d, MoveOptions::default()).is_err());
        assert_eq!(walker.cursor(), parked);
        walker.move_to(home).unwrap();
    }
}

/// Run every compliance check. `outside` lists out-of-range probes.
pub fn run_full_compliance<'a, W: Walker<'a>>(walker: &mut W, outside: &[W::Position]) {
    assert_get_matches_position(walker);
    assert_out_of_range_is_pure(walker, outside);
    assert_cursor_in_bounds(walker);
    assert_neighbours_consistent(walker);
    assert_silent_boundary_idempotent(walker);
}
