//! Cursor over a linear sequence.

use crate::walker::{ElementOf, Walker};
use indexmap::IndexSet;
use listwalk_core::{Direction1D, Element, MoveOptions, Position, WalkError, WalkerId};

/// A cursor over a borrowed slice.
///
/// Positions are indices `0 <= i < len`. The cursor starts at index 0.
///
/// # Examples
///
/// ```
/// use listwalk::{MoveOptions, Walker, Walker1D};
///
/// let data = [1, 2, 3, 4, 5];
/// let mut walker = Walker1D::new(&data).unwrap();
/// walker.extend_ignored([2, 3]);
///
/// assert_eq!(*walker.move_right(MoveOptions::default()).unwrap().value(), 2);
/// // Indices 2 and 3 are skipped in one move.
/// assert_eq!(*walker.move_right(MoveOptions::default()).unwrap().value(), 5);
/// assert!(walker.move_right(MoveOptions::default()).is_err());
/// ```
#[derive(Debug)]
pub struct Walker1D<'a, T> {
    data: &'a [T],
    cursor: i32,
    ignored: IndexSet<i32>,
    id: WalkerId,
}

impl<'a, T> Walker1D<'a, T> {
    /// Maximum length: positions use `i32`, so `len` must fit.
    pub const MAX_LEN: usize = i32::MAX as usize;

    /// Create a walker over `data` with the cursor at index 0.
    ///
    /// Returns `Err(WalkError::EmptyData)` if `data` is empty, or
    /// `Err(WalkError::DimensionTooLarge)` if it is longer than `i32::MAX`.
    pub fn new(data: &'a [T]) -> Result<Self, WalkError> {
        if data.is_empty() {
            return Err(WalkError::EmptyData);
        }
        if data.len() > Self::MAX_LEN {
            return Err(WalkError::DimensionTooLarge {
                name: "len",
                value: data.len(),
                max: Self::MAX_LEN,
            });
        }
        Ok(Self {
            data,
            cursor: 0,
            ignored: IndexSet::new(),
            id: WalkerId::next(),
        })
    }

    /// The underlying data.
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always returns `false`: construction rejects empty data.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Element left of the cursor.
    pub fn get_left(&self) -> Result<ElementOf<'a, Self>, WalkError> {
        self.get_towards(Direction1D::Left)
    }

    /// Element right of the cursor.
    pub fn get_right(&self) -> Result<ElementOf<'a, Self>, WalkError> {
        self.get_towards(Direction1D::Right)
    }

    /// Move the cursor left. See [`Walker::move_towards`].
    pub fn move_left(&mut self, options: MoveOptions) -> Result<ElementOf<'a, Self>, WalkError> {
        self.move_towards(Direction1D::Left, options)
    }

    /// Move the cursor right. See [`Walker::move_towards`].
    pub fn move_right(&mut self, options: MoveOptions) -> Result<ElementOf<'a, Self>, WalkError> {
        self.move_towards(Direction1D::Right, options)
    }

    fn check_bounds(&self, position: i32) -> Result<usize, WalkError> {
        if position < 0 || position as usize >= self.data.len() {
            return Err(WalkError::OutOfRange {
                position: position.to_coord(),
                size: (self.data.len() as i32).to_coord(),
            });
        }
        Ok(position as usize)
    }

    fn element_at(&self, index: usize) -> ElementOf<'a, Self> {
        let data: &'a [T] = self.data;
        let position = index as i32;
        Element::new(position, &data[index], self.is_ignored(position), self.id)
    }
}

impl<'a, T> Walker<'a> for Walker1D<'a, T> {
    type Item = T;
    type Position = i32;
    type Direction = Direction1D;
    type Size = usize;

    fn id(&self) -> WalkerId {
        self.id
    }

    fn size(&self) -> usize {
        self.data.len()
    }

    fn cursor(&self) -> i32 {
        self.cursor
    }

    fn cursor_element(&self) -> ElementOf<'a, Self> {
        self.element_at(self.cursor as usize)
    }

    fn get(&self, position: i32) -> Result<ElementOf<'a, Self>, WalkError> {
        let index = self.check_bounds(position)?;
        Ok(self.element_at(index))
    }

    fn move_to(&mut self, position: i32) -> Result<ElementOf<'a, Self>, WalkError> {
        let element = self.get(position)?;
        self.cursor = position;
        Ok(element)
    }

    fn ignored_elements(&self) -> &IndexSet<i32> {
        &self.ignored
    }

    fn ignored_elements_mut(&mut self) -> &mut IndexSet<i32> {
        &mut self.ignored
    }

    fn canonical_ordering(&self) -> Vec<i32> {
        (0..self.data.len() as i32).collect()
    }
}

// A clone is an independent cursor, so it gets its own identity.
impl<T> Clone for Walker1D<'_, T> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            cursor: self.cursor,
            ignored: self.ignored.clone(),
            id: WalkerId::next(),
        }
    }
}
