use std::ops::RangeInclusive;

// Character-set constants
pub(crate) const GRID_ALPHABET: RangeInclusive<char> = 'A'..='Z';
#[cfg(test)]
pub(crate) const LOWERCASE_ALPHABET: RangeInclusive<char> = 'a'..='z';

/// Character used by text renderings for an empty cell.
pub(crate) const BLANK_CHAR: char = '.';

pub(crate) trait GridChar {
    /// True for the only characters a grid cell may hold: `A`-`Z`.
    fn is_grid_letter(&self) -> bool;
    /// Uppercase ASCII letters stay as they are; lowercase ASCII letters are uppercased;
    /// everything else is returned untouched (and will fail `is_grid_letter`).
    fn to_grid_letter(&self) -> char;
}

impl GridChar for char {
    fn is_grid_letter(&self) -> bool {
        GRID_ALPHABET.contains(self)
    }
    fn to_grid_letter(&self) -> char {
        self.to_ascii_uppercase()
    }
}

/// Normalize a raw word from a word source: trim, then uppercase ASCII letters.
pub(crate) fn normalize_word(raw: &str) -> String {
    raw.trim().chars().map(|c| c.to_grid_letter()).collect()
}

/// First character of `word` that cannot go in a grid cell, if any.
pub(crate) fn first_invalid_char(word: &str) -> Option<char> {
    word.chars().find(|c| !c.is_grid_letter())
}
