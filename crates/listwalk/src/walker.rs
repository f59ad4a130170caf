//! The core `Walker` trait and the shared cursor-movement algorithm.

use indexmap::{IndexMap, IndexSet};
use listwalk_core::{Direction, Element, MoveOptions, Position, WalkError, WalkerId};
use tracing::{debug, trace};

/// Shorthand for the element type a walker hands out.
pub type ElementOf<'a, W> = Element<'a, <W as Walker<'a>>::Item, <W as Walker<'a>>::Position>;

/// A cursor over a fixed, borrowed collection with a set of ignored positions.
///
/// Backends ([`Walker1D`](crate::Walker1D), [`Walker2D`](crate::Walker2D))
/// supply bounds checking and element lookup; directional queries,
/// neighbour queries, and movement are provided once here in terms of
/// [`Position`] and [`Direction`].
///
/// The lifetime `'a` is the lifetime of the underlying data. Elements borrow
/// from the data, not from the walker, so they stay usable across moves.
pub trait Walker<'a> {
    /// Element value type.
    type Item: 'a;

    /// Position type: `i32` or `(row, col)`.
    type Position: Position;

    /// Directions the cursor can move in.
    type Direction: Direction<Position = Self::Position>;

    /// Size on each axis.
    type Size: Copy;

    /// Unique identifier of this walker instance.
    fn id(&self) -> WalkerId;

    /// Size of the data. Fixed for the walker's lifetime.
    fn size(&self) -> Self::Size;

    /// Current cursor position. Always in bounds.
    fn cursor(&self) -> Self::Position;

    /// Element at the cursor.
    fn cursor_element(&self) -> ElementOf<'a, Self>;

    /// Element at `position`.
    ///
    /// Returns [`WalkError::OutOfRange`] if any coordinate is negative or
    /// not less than the size of its axis.
    fn get(&self, position: Self::Position) -> Result<ElementOf<'a, Self>, WalkError>;

    /// Place the cursor at `position` regardless of its ignored state.
    ///
    /// Returns [`WalkError::OutOfRange`] and leaves the cursor unchanged if
    /// `position` is out of bounds.
    fn move_to(&mut self, position: Self::Position) -> Result<ElementOf<'a, Self>, WalkError>;

    /// Positions currently flagged as ignored, in insertion order.
    fn ignored_elements(&self) -> &IndexSet<Self::Position>;

    /// Mutable access to the ignored set.
    fn ignored_elements_mut(&mut self) -> &mut IndexSet<Self::Position>;

    /// All positions in row-major order.
    fn canonical_ordering(&self) -> Vec<Self::Position>;

    /// Whether `position` is in the ignored set.
    ///
    /// No bounds check: an out-of-range position is simply never a member
    /// unless the caller inserted it.
    fn is_ignored(&self, position: Self::Position) -> bool {
        self.ignored_elements().contains(&position)
    }

    /// Flag `position` as ignored. Returns `false` if it already was.
    fn ignore(&mut self, position: Self::Position) -> bool {
        self.ignored_elements_mut().insert(position)
    }

    /// Flag every position in `positions` as ignored.
    fn extend_ignored<I>(&mut self, positions: I)
    where
        I: IntoIterator<Item = Self::Position>,
        Self: Sized,
    {
        self.ignored_elements_mut().extend(positions);
    }

    /// Clear the ignored flag on `position`. Returns `false` if it was not set.
    fn unignore(&mut self, position: Self::Position) -> bool {
        self.ignored_elements_mut().shift_remove(&position)
    }

    /// Clear every ignored flag.
    fn clear_ignored(&mut self) {
        self.ignored_elements_mut().clear();
    }

    /// Element one step from the cursor in `direction`, without moving.
    ///
    /// Does not skip ignored positions.
    fn get_towards(&self, direction: Self::Direction) -> Result<ElementOf<'a, Self>, WalkError> {
        self.get(self.cursor().offset(direction.step()))
    }

    /// Every in-bounds element one step from `position`, or from the cursor
    /// when `position` is `None`, keyed by direction in
    /// [`Direction::ALL`] order. Out-of-range directions are omitted.
    fn get_neighbors(
        &self,
        position: Option<Self::Position>,
    ) -> IndexMap<Self::Direction, ElementOf<'a, Self>> {
        let origin = position.unwrap_or_else(|| self.cursor());
        Self::Direction::ALL
            .iter()
            .filter_map(|&direction| {
                self.get(origin.offset(direction.step()))
                    .ok()
                    .map(|element| (direction, element))
            })
            .collect()
    }

    /// Move the cursor in `direction` with respect to the ignored set.
    ///
    /// On success the cursor lands on the first non-ignored position in
    /// `direction` and its element is returned. See [`MoveOptions`] for how
    /// ignored positions and failures are treated. On failure the cursor is
    /// unchanged.
    fn move_towards(
        &mut self,
        direction: Self::Direction,
        options: MoveOptions,
    ) -> Result<ElementOf<'a, Self>, WalkError> {
        let landing = resolve_move(self, direction, options)?;
        if landing.position() == self.cursor() {
            return Ok(landing);
        }
        self.move_to(landing.position())
    }
}

/// Work out where a move would land without touching the cursor.
///
/// Returns the landing element, the unchanged cursor element when a
/// failure is silenced, or the failure itself.
pub(crate) fn resolve_move<'a, W>(
    walker: &W,
    direction: W::Direction,
    options: MoveOptions,
) -> Result<ElementOf<'a, W>, WalkError>
where
    W: Walker<'a> + ?Sized,
{
    let from = walker.cursor();
    let step = direction.step();

    let mut candidate = match walker.get(from.offset(step)) {
        Ok(element) => element,
        Err(err) => return stay(walker, direction, options, err),
    };

    // Only the position directly next to the cursor is checked here.
    if !options.jump && candidate.is_ignored() {
        let err = WalkError::CannotMove {
            from: from.to_coord(),
            blocked_at: candidate.position().to_coord(),
        };
        return stay(walker, direction, options, err);
    }

    let mut skipped = 0usize;
    while candidate.is_ignored() {
        skipped += 1;
        candidate = match walker.get(candidate.position().offset(step)) {
            Ok(element) => element,
            Err(err) => return stay(walker, direction, options, err),
        };
    }

    trace!(
        walker = %walker.id(),
        direction = direction.name(),
        from = ?from,
        to = ?candidate.position(),
        skipped,
        "cursor moved"
    );
    Ok(candidate)
}

fn stay<'a, W>(
    walker: &W,
    direction: W::Direction,
    options: MoveOptions,
    err: WalkError,
) -> Result<ElementOf<'a, W>, WalkError>
where
    W: Walker<'a> + ?Sized,
{
    debug!(
        walker = %walker.id(),
        direction = direction.name(),
        silent = options.silent,
        error = %err,
        "cursor stayed"
    );
    if options.silent {
        Ok(walker.cursor_element())
    } else {
        Err(err)
    }
}
