//! The fixed-size letter buffer that every placement attempt writes into.
//!
//! A [`Grid`] is row-major with its origin at the top-left. Cells are either
//! [`Cell::Blank`] or hold a single uppercase letter. Lookups take signed
//! coordinates because candidate starts produced by
//! [`find_intersections`](crate::placement::find_intersections) can sit off
//! the grid; anything outside the buffer reads as `None`.

use std::fmt;
use std::fmt::{Display, Formatter};

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::grid_char::BLANK_CHAR;

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Blank,
    Letter(char),
}

impl Cell {
    #[must_use]
    pub fn is_blank(self) -> bool {
        self == Cell::Blank
    }

    #[must_use]
    pub fn letter(self) -> Option<char> {
        match self {
            Cell::Blank => None,
            Cell::Letter(c) => Some(c),
        }
    }

    /// Text form used by renderers and `Display`.
    #[must_use]
    pub fn to_char(self) -> char {
        self.letter().unwrap_or(BLANK_CHAR)
    }
}

/// Blank cells serialize as `null`, letters as one-character strings.
impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Cell::Blank => serializer.serialize_none(),
            Cell::Letter(c) => serializer.serialize_char(*c),
        }
    }
}

/// Placement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Letters run along increasing column index in a fixed row.
    Across,
    /// Letters run along increasing row index in a fixed column.
    Down,
}

impl Direction {
    /// Both directions, in the order the engine tries them.
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// `(row, col)` step taken between consecutive letters.
    #[must_use]
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Across => write!(f, "across"),
            Direction::Down => write!(f, "down"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// An all-blank grid of `width` x `height`.
    #[must_use]
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![Cell::Blank; width * height] }
    }

    /// An all-blank square grid.
    #[must_use]
    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Map signed coordinates to a buffer index, or `None` when off-grid.
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.height && col < self.width).then(|| row * self.width + col)
    }

    /// Cell at `(row, col)`, or `None` when the coordinates are off-grid.
    #[must_use]
    pub fn get(&self, row: isize, col: isize) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Cell at an in-range `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the grid.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        assert!(row < self.height && col < self.width, "cell ({row}, {col}) outside {}x{} grid", self.width, self.height);
        self.cells[row * self.width + col]
    }

    /// True when `(row, col)` is off-grid or holds a blank.
    #[must_use]
    pub fn is_open(&self, row: isize, col: isize) -> bool {
        self.get(row, col).map_or(true, Cell::is_blank)
    }

    /// Write `cell` at `(row, col)`. Returns `false` (and writes nothing) when off-grid.
    pub(crate) fn set(&mut self, row: isize, col: isize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// True if no cell holds a letter.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_blank())
    }

    /// Number of cells holding a letter.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_blank()).count()
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; a zero-width grid has no cells to chunk anyway
        self.cells.chunks(self.width.max(1))
    }

    /// Every letter cell as `(row, col, letter)` in reading order.
    pub fn letters(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.letter().map(|c| (i / self.width, i % self.width, c))
        })
    }

    /// Copy of the rectangle `rows` x `cols` (both inclusive).
    ///
    /// Callers clamp the ranges to the grid first.
    pub(crate) fn sub_grid(&self, min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> Grid {
        debug_assert!(min_row <= max_row && max_row < self.height, "row range out of bounds");
        debug_assert!(min_col <= max_col && max_col < self.width, "col range out of bounds");

        let width = max_col - min_col + 1;
        let height = max_row - min_row + 1;
        let mut cells = Vec::with_capacity(width * height);
        for row in min_row..=max_row {
            let start = row * self.width;
            cells.extend_from_slice(&self.cells[start + min_col..=start + max_col]);
        }
        Grid { width, height, cells }
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().map(|c| c.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// A grid serializes as its rows: `[["C", "A", "T"], [null, null, "R"], ...]`.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.height))?;
        for row in self.rows() {
            seq.serialize_element(row)?;
        }
        seq.end()
    }
}
