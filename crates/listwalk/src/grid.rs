//! Cursor over a rectangular grid of rows.

use crate::walker::{ElementOf, Walker};
use indexmap::IndexSet;
use listwalk_core::{Direction2D, Element, MoveOptions, Position, WalkError, WalkerId};

/// One row of a grid: anything that can be viewed as a slice of cells.
pub trait Row {
    /// Cell type.
    type Item;

    /// The cells of this row.
    fn cells(&self) -> &[Self::Item];
}

impl<T> Row for Vec<T> {
    type Item = T;

    fn cells(&self) -> &[T] {
        self
    }
}

impl<T, const N: usize> Row for [T; N] {
    type Item = T;

    fn cells(&self) -> &[T] {
        self
    }
}

impl<T> Row for &[T] {
    type Item = T;

    fn cells(&self) -> &[T] {
        self
    }
}

impl<T> Row for Box<[T]> {
    type Item = T;

    fn cells(&self) -> &[T] {
        self
    }
}

/// A cursor over a borrowed grid.
///
/// Each cell has position `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. The column count is taken from the first row; rows
/// are not checked for equal length, and cells missing from a shorter row
/// are reported as out of range. The cursor starts at `(0, 0)`.
///
/// # Examples
///
/// ```
/// use listwalk::{MoveOptions, Walker, Walker2D};
///
/// let grid = vec![vec![1, 2], vec![3, 4], vec![5, 6]];
/// let mut walker = Walker2D::new(&grid).unwrap();
/// walker.ignore((1, 0));
///
/// assert!(walker.move_down(MoveOptions::STEP).is_err());
/// assert_eq!(*walker.move_down(MoveOptions::default()).unwrap().value(), 5);
/// assert_eq!(walker.size(), (3, 2));
/// ```
#[derive(Debug)]
pub struct Walker2D<'a, R> {
    data: &'a [R],
    rows: usize,
    cols: usize,
    cursor: (i32, i32),
    ignored: IndexSet<(i32, i32)>,
    id: WalkerId,
}

impl<'a, R: Row> Walker2D<'a, R> {
    /// Maximum dimension size: positions use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Create a walker over `data` with the cursor at `(0, 0)`.
    ///
    /// Returns `Err(WalkError::EmptyData)` if there are no rows or the
    /// first row is empty, or `Err(WalkError::DimensionTooLarge)` if either
    /// axis exceeds `i32::MAX`.
    pub fn new(data: &'a [R]) -> Result<Self, WalkError> {
        let rows = data.len();
        let cols = data.first().map_or(0, |row| row.cells().len());
        if rows == 0 || cols == 0 {
            return Err(WalkError::EmptyData);
        }
        if rows > Self::MAX_DIM {
            return Err(WalkError::DimensionTooLarge {
                name: "rows",
                value: rows,
                max: Self::MAX_DIM,
            });
        }
        if cols > Self::MAX_DIM {
            return Err(WalkError::DimensionTooLarge {
                name: "cols",
                value: cols,
                max: Self::MAX_DIM,
            });
        }
        Ok(Self {
            data,
            rows,
            cols,
            cursor: (0, 0),
            ignored: IndexSet::new(),
            id: WalkerId::next(),
        })
    }

    /// The underlying rows.
    pub fn data(&self) -> &'a [R] {
        self.data
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, as given by the first row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Element above the cursor.
    pub fn get_up(&self) -> Result<ElementOf<'a, Self>, WalkError> {
        self.get_towards(Direction2D::Up)
    }

    /// Element right of the cursor.
    pub fn get_right(&self) -> Result<ElementOf<'a, Self>, WalkError> {
        self.get_towards(Direction2D::Right)
    }

    /// Element below the cursor.
    pub fn get_down(&self) -> Result<ElementOf<'a, Self>, WalkError> {
        self.get_towards(Direction2D::Down)
    }

    /// Element left of the cursor.
    pub fn get_left(&self) -> Result<ElementOf<'a, Self>, WalkError> {
        self.get_towards(Direction2D::Left)
    }

    /// Move the cursor up. See [`Walker::move_towards`].
    pub fn move_up(&mut self, options: MoveOptions) -> Result<ElementOf<'a, Self>, WalkError> {
        self.move_towards(Direction2D::Up, options)
    }

    /// Move the cursor right. See [`Walker::move_towards`].
    pub fn move_right(&mut self, options: MoveOptions) -> Result<ElementOf<'a, Self>, WalkError> {
        self.move_towards(Direction2D::Right, options)
    }

    /// Move the cursor down. See [`Walker::move_towards`].
    pub fn move_down(&mut self, options: MoveOptions) -> Result<ElementOf<'a, Self>, WalkError> {
        self.move_towards(Direction2D::Down, options)
    }

    /// Move the cursor left. See [`Walker::move_towards`].
    pub fn move_left(&mut self, options: MoveOptions) -> Result<ElementOf<'a, Self>, WalkError> {
        self.move_towards(Direction2D::Left, options)
    }

    fn out_of_range(&self, position: (i32, i32)) -> WalkError {
        WalkError::OutOfRange {
            position: position.to_coord(),
            size: (self.rows as i32, self.cols as i32).to_coord(),
        }
    }
}

impl<'a, R: Row> Walker<'a> for Walker2D<'a, R> {
    type Item = R::Item;
    type Position = (i32, i32);
    type Direction = Direction2D;
    type Size = (usize, usize);

    fn id(&self) -> WalkerId {
        self.id
    }

    fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn cursor(&self) -> (i32, i32) {
        self.cursor
    }

    fn cursor_element(&self) -> ElementOf<'a, Self> {
        let data: &'a [R] = self.data;
        let (r, c) = self.cursor;
        let value = &data[r as usize].cells()[c as usize];
        Element::new(self.cursor, value, self.is_ignored(self.cursor), self.id)
    }

    fn get(&self, position: (i32, i32)) -> Result<ElementOf<'a, Self>, WalkError> {
        let (r, c) = position;
        if r < 0 || r as usize >= self.rows || c < 0 || c as usize >= self.cols {
            return Err(self.out_of_range(position));
        }
        let data: &'a [R] = self.data;
        let value = data[r as usize]
            .cells()
            .get(c as usize)
            .ok_or_else(|| self.out_of_range(position))?;
        Ok(Element::new(
            position,
            value,
            self.is_ignored(position),
            self.id,
        ))
    }

    fn move_to(&mut self, position: (i32, i32)) -> Result<ElementOf<'a, Self>, WalkError> {
        let element = self.get(position)?;
        self.cursor = position;
        Ok(element)
    }

    fn ignored_elements(&self) -> &IndexSet<(i32, i32)> {
        &self.ignored
    }

    fn ignored_elements_mut(&mut self) -> &mut IndexSet<(i32, i32)> {
        &mut self.ignored
    }

    /// Row-major: `(0, 0), (0, 1), ..., (rows - 1, cols - 1)`. Cells
    /// missing from short rows are skipped.
    fn canonical_ordering(&self) -> Vec<(i32, i32)> {
        let mut out = Vec::with_capacity(self.rows * self.cols);
        for (r, row) in self.data.iter().enumerate() {
            let width = row.cells().len().min(self.cols);
            for c in 0..width {
                out.push((r as i32, c as i32));
            }
        }
        out
    }
}

// A clone is an independent cursor, so it gets its own identity.
impl<R> Clone for Walker2D<'_, R> {
    fn clone(&self) -> Self {
        Self {
            data: self.data,
            rows: self.rows,
            cols: self.cols,
            cursor: self.cursor,
            ignored: self.ignored.clone(),
            id: WalkerId::next(),
        }
    }
}
