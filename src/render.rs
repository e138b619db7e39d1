//! Plain-text output for a numbered crossword: the empty puzzle, the solution key, and the clues.

use std::collections::HashMap;
use std::fmt::Write;

use crate::crop::CrosswordResult;
use crate::engine::WordEntry;

const BLOCK: char = '#';
const OPEN: char = '_';

/// The puzzle as it is handed to a solver.
///
/// Blank cells print as `##`, open cells as `__`, and start cells show their
/// clue number right-aligned in the same columns. Cells are two characters
/// wide, or wider when a clue number has more digits, and are separated by a
/// single space.
#[must_use]
pub fn render_puzzle(result: &CrosswordResult) -> String {
    let mut start_numbers: HashMap<(usize, usize), u32> = HashMap::new();
    for entry in result.words.iter().filter(|e| e.number > 0) {
        start_numbers.insert((entry.row, entry.col), entry.number);
    }
    let width = cell_width(start_numbers.values().copied().max());
    let block = BLOCK.to_string().repeat(width);
    let open = OPEN.to_string().repeat(width);

    let mut out = String::new();
    for (row, cells) in result.grid.rows().enumerate() {
        let line: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(col, cell)| match (cell.is_blank(), start_numbers.get(&(row, col))) {
                (true, _) => block.clone(),
                (false, Some(n)) => format!("{n:>width$}"),
                (false, None) => open.clone(),
            })
            .collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

/// Characters per puzzle cell: at least two, more for numbers of three or more digits.
fn cell_width(max_number: Option<u32>) -> usize {
    max_number.map_or(2, |n| n.to_string().len().max(2))
}

/// The filled grid, letters separated by spaces and blanks shown as `.`.
#[must_use]
pub fn render_solution(result: &CrosswordResult) -> String {
    let mut out = String::new();
    for cells in result.grid.rows() {
        let line: Vec<String> = cells.iter().map(|c| c.to_char().to_string()).collect();
        let _ = writeln!(out, "{}", line.join(" "));
    }
    out
}

/// `ACROSS` and `DOWN` clue lists, each sorted by number. Empty sections are left out.
#[must_use]
pub fn render_clues(result: &CrosswordResult) -> String {
    let sections = [("ACROSS", result.across()), ("DOWN", result.down())];
    let blocks: Vec<String> = sections
        .iter()
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(title, entries)| {
            let mut block = format!("{title}\n");
            for entry in entries {
                let _ = writeln!(block, "{}", clue_line(entry));
            }
            block
        })
        .collect();
    blocks.join("\n")
}

fn clue_line(entry: &WordEntry) -> String {
    if entry.number > 0 {
        format!("{}. {} ({})", entry.number, entry.clue, entry.len())
    } else {
        format!("{} ({})", entry.clue, entry.len())
    }
}
