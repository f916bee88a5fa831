//! The off-screen buffer a [`Model`](crate::Model) draws into, and the
//! [`Frame`] of changes a driver paints.

use crate::cell::{Cell, Style};
use crate::geom::{Point, Range};

/// A `width`×`height` buffer of [`Cell`]s. Reads outside it yield
/// [`Cell::BLANK`] and writes are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    bounds: Range,
    cells: Vec<Cell>,
}

impl Screen {
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(width, height);
        Self {
            bounds,
            cells: vec![Cell::BLANK; bounds.len()],
        }
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    pub fn at(&self, p: Point) -> Cell {
        self.bounds.index(p).map_or(Cell::BLANK, |i| self.cells[i])
    }

    pub fn set(&mut self, p: Point, cell: Cell) {
        if let Some(i) = self.bounds.index(p) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `text` left to right from `p`, stopping at the right edge.
    /// Returns how many characters fit.
    pub fn print(&mut self, p: Point, text: &str, style: Style) -> usize {
        let mut written = 0;
        for (q, ch) in (p.x..self.width()).map(|x| Point::new(x, p.y)).zip(text.chars()) {
            self.set(q, Cell { ch, style });
            written += 1;
        }
        written
    }

    /// The text of row `y`, for tests and logs.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.width()).map(|x| self.at(Point::new(x, y)).ch).collect()
    }

    pub fn cells(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }

    /// Cells of `self` that differ from `prev`. Everything counts as changed
    /// when the sizes differ.
    pub fn diff(&self, prev: &Screen) -> Frame {
        let resized = self.bounds != prev.bounds;
        Frame {
            changes: self
                .cells()
                .filter(|&(p, c)| resized || prev.at(p) != c)
                .collect(),
        }
    }
}

/// Cells to repaint, in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub changes: Vec<(Point, Cell)>,
}

impl Frame {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}
