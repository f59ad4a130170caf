//! Tabular rendering of walkers.
//!
//! The cursor cell is shown as `> x <` and ignored cells as `(x)`; an
//! ignored cell under the cursor is `> (x) <`. Table layout is delegated
//! to [`tabled`].

use crate::grid::{Row, Walker2D};
use crate::line::Walker1D;
use crate::walker::Walker;
use std::fmt;
use std::io::{self, Write};
use tabled::builder::Builder;

/// Display string for one cell.
pub(crate) fn cell_label<T: fmt::Display>(value: &T, ignored: bool, cursor: bool) -> String {
    let mut label = value.to_string();
    if ignored {
        label = format!("({label})");
    }
    if cursor {
        label = format!("> {label} <");
    }
    label
}

impl<T: fmt::Display> Walker1D<'_, T> {
    /// Render the data as a `Position | Element` table.
    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(["Position".to_string(), "Element".to_string()]);
        for (i, value) in self.data().iter().enumerate() {
            let position = i as i32;
            builder.push_record([
                i.to_string(),
                cell_label(value, self.is_ignored(position), position == self.cursor()),
            ]);
        }
        builder.build().to_string()
    }

    /// Write the rendered table and a trailing newline to `out`.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.render())
    }

    /// Print the rendered table to stdout.
    pub fn print(&self) -> io::Result<()> {
        self.print_to(&mut io::stdout().lock())
    }
}

impl<T: fmt::Display> fmt::Display for Walker1D<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<R> Walker2D<'_, R>
where
    R: Row,
    R::Item: fmt::Display,
{
    /// Render the grid with column indices across the top and row indices
    /// down the left.
    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        let header = std::iter::once(String::new()).chain((0..self.cols()).map(|c| c.to_string()));
        builder.push_record(header);
        for (r, row) in self.data().iter().enumerate() {
            let cells = row.cells().iter().enumerate().map(|(c, value)| {
                let position = (r as i32, c as i32);
                cell_label(value, self.is_ignored(position), position == self.cursor())
            });
            builder.push_record(std::iter::once(r.to_string()).chain(cells));
        }
        builder.build().to_string()
    }

    /// Write the rendered table and a trailing newline to `out`.
    pub fn print_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.render())
    }

    /// Print the rendered table to stdout.
    pub fn print(&self) -> io::Result<()> {
        self.print_to(&mut io::stdout().lock())
    }
}

impl<R> fmt::Display for Walker2D<'_, R>
where
    R: Row,
    R::Item: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listwalk_core::MoveOptions;

    #[test]
    fn labels() {
        assert_eq!(cell_label(&3, false, false), "3");
        assert_eq!(cell_label(&3, true, false), "(3)");
        assert_eq!(cell_label(&3, false, true), "> 3 <");
        assert_eq!(cell_label(&3, true, true), "> (3) <");
    }

    #[test]
    fn render_1d_marks_cursor_and_ignored() {
        let data = [1, 2, 3, 4, 5];
        let mut w = Walker1D::new(&data).unwrap();
        w.extend_ignored([2, 3]);
        w.move_right(MoveOptions::default()).unwrap();
        let table = w.render();
        assert!(table.contains("Position"));
        assert!(table.contains("Element"));
        assert!(table.contains("> 2 <"));
        assert!(table.contains("(3)"));
        assert!(table.contains("(4)"));
        assert!(!table.contains("(5)"));
        // Header plus one line per element, at least.
        assert!(table.lines().count() >= data.len() + 1);
    }

    #[test]
    fn render_2d_marks_cursor_and_ignored() {
        let data = vec![vec![1, 2, 3], vec![4, 5, 6]];
        let mut w = Walker2D::new(&data).unwrap();
        w.ignore((0, 1));
        w.move_down(MoveOptions::default()).unwrap();
        let table = w.render();
        assert!(table.contains("> 4 <"));
        assert!(table.contains("(2)"));
        assert!(!table.contains("> 1 <"));
    }

    #[test]
    fn render_does_not_change_state() {
        let data = [1, 2];
        let mut w = Walker1D::new(&data).unwrap();
        w.ignore(1);
        let before = (w.cursor(), w.ignored_elements().clone());
        let _ = w.render();
        assert_eq!((w.cursor(), w.ignored_elements().clone()), before);
    }

    #[test]
    fn print_to_writes_display_output() {
        let data = vec![vec!['a', 'b']];
        let w = Walker2D::new(&data).unwrap();
        let mut out = Vec::new();
        w.print_to(&mut out).unwrap();
        let printed = String::from_utf8(out).unwrap();
        assert_eq!(printed, format!("{w}\n"));
        assert!(printed.contains("> a <"));
    }
}
