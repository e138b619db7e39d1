//! Deciding where a word may go: candidate generation and validation.
//!
//! [`find_intersections`] proposes start positions by lining a word up with
//! letters already on the grid. [`try_place`] is the gatekeeper: it checks a
//! single candidate and writes the word only if every check passes, so a
//! rejected candidate never leaves partial letters behind.

use crate::grid::{Cell, Direction, Grid};

/// A proposed start position for a word.
///
/// Coordinates are signed: a candidate that would start off the grid is still
/// reported, and [`try_place`] rejects it on its bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Candidate {
    pub row: isize,
    pub col: isize,
    /// Index of the word letter that lines up with the existing grid letter.
    pub letter_index: usize,
}

/// Write `word` at `(row, col)` going `direction` if it fits.
///
/// Checks, in order, stopping at the first failure:
/// 1. the whole span lies inside the grid;
/// 2. each cell along the span is blank or already holds the same letter;
/// 3. the cells just before the start and just after the end (along `direction`)
///    are off-grid or blank, so the word never runs into a neighbour.
///
/// Returns `true` and writes the letters when all checks pass; otherwise returns
/// `false` and leaves the grid untouched.
pub fn try_place(grid: &mut Grid, word: &str, row: isize, col: isize, direction: Direction) -> bool {
    let letters: Vec<char> = word.chars().collect();
    debug_assert!(!letters.is_empty(), "try_place called with an empty word");
    let Ok(len) = isize::try_from(letters.len()) else {
        return false;
    };
    let (d_row, d_col) = direction.step();

    // 1. bounds: both ends of the span must be on the grid
    let (last_row, last_col) = (row + (len - 1) * d_row, col + (len - 1) * d_col);
    if grid.get(row, col).is_none() || grid.get(last_row, last_col).is_none() {
        return false;
    }

    // 2. letter consistency
    let span = move || (0..len).map(move |i| (row + i * d_row, col + i * d_col));
    let consistent = span().zip(&letters).all(|((r, c), &ch)| match grid.get(r, c) {
        Some(Cell::Blank) => true,
        Some(Cell::Letter(existing)) => existing == ch,
        None => false,
    });
    if !consistent {
        return false;
    }

    // 3. no run-on into a neighbouring word
    let before_open = grid.is_open(row - d_row, col - d_col);
    let after_open = grid.is_open(row + len * d_row, col + len * d_col);
    if !(before_open && after_open) {
        return false;
    }

    for ((r, c), &ch) in span().zip(&letters) {
        let written = grid.set(r, c, Cell::Letter(ch));
        debug_assert!(written, "span cell ({r}, {c}) was bounds-checked but could not be written");
    }
    true
}

/// Enumerate start positions that would line `word` up with a letter already on the grid.
///
/// Grid cells are scanned in reading order; for each letter cell, every index
/// `i` where `word[i]` equals that letter yields the start that puts `word[i]`
/// on the cell. Candidates are *not* filtered for validity; the order is the
/// order callers should try them in.
#[must_use]
pub fn find_intersections(grid: &Grid, word: &str, direction: Direction) -> Vec<Candidate> {
    let letters: Vec<char> = word.chars().collect();
    let mut candidates = Vec::new();

    for (cell_row, cell_col, existing) in grid.letters() {
        // grid dimensions are bounded by MAX_GRID_SIZE, so these never wrap
        let (cell_row, cell_col) = (cell_row as isize, cell_col as isize);
        for (i, &ch) in letters.iter().enumerate() {
            if ch != existing {
                continue;
            }
            let offset = i as isize;
            let (row, col) = match direction {
                Direction::Across => (cell_row, cell_col - offset),
                Direction::Down => (cell_row - offset, cell_col),
            };
            candidates.push(Candidate { row, col, letter_index: i });
        }
    }

    candidates
}
