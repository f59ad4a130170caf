//! The [`Element`] snapshot handed out by walker queries.

use crate::id::WalkerId;
use std::fmt;

/// A read-only snapshot of one position in a walker's data.
///
/// Elements are built on demand by `get`, the directional queries, and the
/// move operations. `position`, `value`, and `is_ignored` are captured at
/// query time: changing the walker's ignored set afterwards does not update
/// an element already in hand.
///
/// The value is borrowed from the data the walker was built over, not from
/// the walker itself, so an element can outlive subsequent cursor moves.
pub struct Element<'a, T, P> {
    position: P,
    value: &'a T,
    is_ignored: bool,
    walker: WalkerId,
}

impl<'a, T, P: Copy> Element<'a, T, P> {
    /// Build an element snapshot. Callers are responsible for `position`
    /// being in bounds for the walker identified by `walker`.
    pub fn new(position: P, value: &'a T, is_ignored: bool, walker: WalkerId) -> Self {
        Self {
            position,
            value,
            is_ignored,
            walker,
        }
    }

    /// Where this element sits in the walker's data.
    pub fn position(&self) -> P {
        self.position
    }

    /// The underlying value.
    pub fn value(&self) -> &'a T {
        self.value
    }

    /// Whether the position was in the ignored set when queried.
    pub fn is_ignored(&self) -> bool {
        self.is_ignored
    }

    /// ID of the walker that produced this element.
    pub fn walker(&self) -> WalkerId {
        self.walker
    }

    /// `true` if this element was produced by the walker with `id`.
    pub fn belongs_to(&self, id: WalkerId) -> bool {
        self.walker == id
    }
}

// Manual impls: deriving would demand `T: Clone`/`T: Copy` even though
// only a reference to `T` is stored.
impl<T, P: Copy> Clone for Element<'_, T, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, P: Copy> Copy for Element<'_, T, P> {}

impl<T: PartialEq, P: PartialEq> PartialEq for Element<'_, T, P> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
            && self.value == other.value
            && self.is_ignored == other.is_ignored
            && self.walker == other.walker
    }
}

impl<T: Eq, P: Eq> Eq for Element<'_, T, P> {}

impl<T: fmt::Debug, P: fmt::Debug> fmt::Debug for Element<'_, T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Element")
            .field("position", &self.position)
            .field("value", self.value)
            .field("is_ignored", &self.is_ignored)
            .field("walker", &self.walker)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_snapshot() {
        let id = WalkerId::next();
        let value = 42u8;
        let el = Element::new((1, 2), &value, true, id);
        assert_eq!(el.position(), (1, 2));
        assert_eq!(*el.value(), 42);
        assert!(el.is_ignored());
        assert!(el.belongs_to(id));
        assert!(!el.belongs_to(WalkerId::next()));
    }

    #[test]
    fn copy_does_not_require_copy_values() {
        let id = WalkerId::next();
        let value = String::from("abc");
        let a = Element::new(0i32, &value, false, id);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(b.value(), "abc");
    }

    #[test]
    fn equality_includes_walker_identity() {
        let value = 1;
        let a = Element::new(0i32, &value, false, WalkerId::next());
        let b = Element::new(0i32, &value, false, WalkerId::next());
        assert_ne!(a, b);
    }
}
