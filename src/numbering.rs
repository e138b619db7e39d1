//! Standard crossword clue numbering.
//!
//! Every distinct start cell gets one number, counting up from 1 in reading
//! order (top to bottom, then left to right). An across and a down word that
//! start on the same cell share that cell's number.

use std::collections::BTreeMap;

use crate::crop::CrosswordResult;

/// Assign clue numbers to every entry of `result`.
///
/// Existing numbers are overwritten, so running this twice on the same
/// coordinates gives the same numbers.
#[must_use]
pub fn renumber(mut result: CrosswordResult) -> CrosswordResult {
    // (row, col) keys iterate in reading order
    let mut starts: BTreeMap<(usize, usize), u32> =
        result.words.iter().map(|e| ((e.row, e.col), 0)).collect();

    for (n, number) in (1..).zip(starts.values_mut()) {
        *number = n;
    }

    for entry in &mut result.words {
        if let Some(&number) = starts.get(&(entry.row, entry.col)) {
            entry.number = number;
        }
    }

    debug_assert!(
        result.words.iter().all(|e| e.number >= 1),
        "every entry's start must have been assigned a number"
    );
    result
}
