//! Shrink an attempt's fixed-size grid to the letters it actually holds.

use serde::Serialize;

use crate::engine::{PlacementAttempt, WordEntry};
use crate::grid::{Cell, Direction, Grid};

/// Blank cells kept around the letters on every side (where the grid allows).
pub const CROP_PADDING: usize = 1;

/// A cropped (and, after [`renumber`](crate::numbering::renumber), numbered) crossword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrosswordResult {
    pub grid: Grid,
    pub words: Vec<WordEntry>,
    pub width: usize,
    pub height: usize,
}

impl CrosswordResult {
    /// Letter at `(row, col)`, or `None` for blank or off-grid cells.
    #[must_use]
    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        let (row, col) = (isize::try_from(row).ok()?, isize::try_from(col).ok()?);
        self.grid.get(row, col).and_then(Cell::letter)
    }

    /// Across entries ordered by clue number.
    #[must_use]
    pub fn across(&self) -> Vec<&WordEntry> {
        self.entries_in(Direction::Across)
    }

    /// Down entries ordered by clue number.
    #[must_use]
    pub fn down(&self) -> Vec<&WordEntry> {
        self.entries_in(Direction::Down)
    }

    fn entries_in(&self, direction: Direction) -> Vec<&WordEntry> {
        let mut entries: Vec<&WordEntry> = self.words.iter().filter(|e| e.direction == direction).collect();
        entries.sort_by_key(|e| (e.number, e.row, e.col));
        entries
    }
}

/// Inclusive bounding box of the letters in `grid`, as `(min_row, max_row, min_col, max_col)`.
pub(crate) fn letter_bounds(grid: &Grid) -> Option<(usize, usize, usize, usize)> {
    grid.letters().fold(None, |acc, (r, c, _)| {
        Some(match acc {
            None => (r, r, c, c),
            Some((min_r, max_r, min_c, max_c)) => (min_r.min(r), max_r.max(r), min_c.min(c), max_c.max(c)),
        })
    })
}

/// Crop `attempt` to its letters plus [`CROP_PADDING`], rebasing every entry.
///
/// An attempt with no letters becomes a 1x1 blank grid with no entries.
/// Clue numbers are carried over unchanged.
#[must_use]
pub fn crop(attempt: &PlacementAttempt) -> CrosswordResult {
    let Some((min_row, max_row, min_col, max_col)) = letter_bounds(&attempt.grid) else {
        return CrosswordResult { grid: Grid::new(1, 1), words: Vec::new(), width: 1, height: 1 };
    };

    let min_row = min_row.saturating_sub(CROP_PADDING);
    let min_col = min_col.saturating_sub(CROP_PADDING);
    let max_row = (max_row + CROP_PADDING).min(attempt.grid.height() - 1);
    let max_col = (max_col + CROP_PADDING).min(attempt.grid.width() - 1);

    let grid = attempt.grid.sub_grid(min_row, max_row, min_col, max_col);
    let words = attempt
        .words
        .iter()
        .map(|entry| {
            debug_assert!(entry.row >= min_row && entry.col >= min_col, "entry starts outside the letter bounds");
            WordEntry { row: entry.row - min_row, col: entry.col - min_col, ..entry.clone() }
        })
        .collect();

    CrosswordResult { width: grid.width(), height: grid.height(), grid, words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::try_place;

    fn attempt_with(size: usize, placements: &[(&str, isize, isize, Direction)]) -> PlacementAttempt {
        let mut grid = Grid::square(size);
        let mut words = Vec::new();
        for &(word, row, col, direction) in placements {
            assert!(try_place(&mut grid, word, row, col, direction), "setup placement of {word} failed");
            words.push(WordEntry {
                word: word.to_string(),
                clue: String::new(),
                row: row as usize,
                col: col as usize,
                direction,
                number: 0,
            });
        }
        PlacementAttempt { grid, words }
    }

    #[test]
    fn test_crop_single_word_with_padding() {
        let result = crop(&attempt_with(15, &[("CODE", 7, 5, Direction::Across)]));
        assert_eq!((result.width, result.height), (6, 3));
        assert_eq!(result.grid.to_string(), "......\n.CODE.\n......\n");
        assert_eq!((result.words[0].row, result.words[0].col), (1, 1));
    }

    #[test]
    fn test_crop_empty_grid() {
        let result = crop(&attempt_with(15, &[]));
        assert_eq!((result.width, result.height), (1, 1));
        assert!(result.words.is_empty());
        assert!(result.grid.is_empty());
    }

    #[test]
    fn test_padding_clamped_at_edges() {
        let result = crop(&attempt_with(5, &[("CAT", 0, 0, Direction::Across)]));
        // no room above or to the left; one row below and one column to the right
        assert_eq!((result.width, result.height), (4, 2));
        assert_eq!((result.words[0].row, result.words[0].col), (0, 0));

        let result = crop(&attempt_with(3, &[("CAT", 2, 0, Direction::Across)]));
        assert_eq!((result.width, result.height), (3, 2));
        assert_eq!((result.words[0].row, result.words[0].col), (1, 0));
    }

    #[test]
    fn test_crop_rebases_crossing_words() {
        let result = crop(&attempt_with(
            15,
            &[("CAT", 7, 6, Direction::Across), ("ART", 7, 7, Direction::Down), ("TAG", 9, 7, Direction::Across)],
        ));
        // letters span rows 7..=9, cols 6..=9; padded rows 6..=10, cols 5..=10
        assert_eq!((result.width, result.height), (6, 5));
        let starts: Vec<_> = result.words.iter().map(|e| (e.row, e.col)).collect();
        assert_eq!(starts, vec![(1, 1), (1, 2), (3, 2)]);
        for entry in &result.words {
            for (r, c, ch) in entry.cells() {
                assert_eq!(result.letter_at(r, c), Some(ch));
            }
        }
    }

    #[test]
    fn test_letter_bounds() {
        let attempt = attempt_with(10, &[("AB", 2, 3, Direction::Down), ("BC", 3, 3, Direction::Across)]);
        assert_eq!(letter_bounds(&attempt.grid), Some((2, 3, 3, 4)));
        assert_eq!(letter_bounds(&Grid::square(4)), None);
    }

    #[test]
    fn test_across_and_down_views() {
        let mut result = crop(&attempt_with(
            15,
            &[("CAT", 7, 6, Direction::Across), ("ART", 7, 7, Direction::Down), ("TAG", 9, 7, Direction::Across)],
        ));
        for (entry, n) in result.words.iter_mut().zip([1, 2, 3]) {
            entry.number = n;
        }
        let across: Vec<_> = result.across().into_iter().map(|e| e.word.as_str()).collect();
        let down: Vec<_> = result.down().into_iter().map(|e| e.word.as_str()).collect();
        assert_eq!(across, vec!["CAT", "TAG"]);
        assert_eq!(down, vec!["ART"]);
    }
}
