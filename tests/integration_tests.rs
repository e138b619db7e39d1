//! Integration tests for the crossgrid generator.
//!
//! These exercise the whole pipeline (attempt loop, cropping, numbering) and
//! check the structural properties every finished crossword must have, across
//! many seeds.

use std::collections::{HashMap, HashSet};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crossgrid::crop::{crop, CROP_PADDING};
use crossgrid::engine::{generate, generate_crossword, GenerateOptions, GenerationStatus};
use crossgrid::errors::{find_input_error, InputError};
use crossgrid::grid::{Cell, Direction};
use crossgrid::numbering::renumber;
use crossgrid::word_list::{WordClue, WordList};
use crossgrid::CrosswordResult;

fn words(list: &[&str]) -> Vec<WordClue> {
    list.iter().map(|w| WordClue::new(*w, format!("Clue for {w}"))).collect()
}

fn seeded_options(seed: u64) -> GenerateOptions {
    GenerateOptions { seed: Some(seed), ..GenerateOptions::default() }
}

/// Cell just before the start and just after the end of `entry`, along its direction.
fn neighbours(result: &CrosswordResult, row: usize, col: usize, len: usize, direction: Direction) -> [Option<Cell>; 2] {
    let (row, col, len) = (row as isize, col as isize, len as isize);
    match direction {
        Direction::Across => [result.grid.get(row, col - 1), result.grid.get(row, col + len)],
        Direction::Down => [result.grid.get(row - 1, col), result.grid.get(row + len, col)],
    }
}

/// Assert every structural property a finished crossword must satisfy.
fn assert_well_formed(result: &CrosswordResult) {
    assert_eq!(result.width, result.grid.width());
    assert_eq!(result.height, result.grid.height());

    // reconstruction (and, through it, consistency at every intersection)
    let mut letters_by_cell: HashMap<(usize, usize), char> = HashMap::new();
    for entry in &result.words {
        for (r, c, ch) in entry.cells() {
            assert_eq!(result.letter_at(r, c), Some(ch), "{} does not read back from the grid", entry.word);
            if let Some(prev) = letters_by_cell.insert((r, c), ch) {
                assert_eq!(prev, ch, "entries disagree at ({r}, {c})");
            }
        }
    }

    // no incidental concatenation
    for entry in &result.words {
        for neighbour in neighbours(result, entry.row, entry.col, entry.len(), entry.direction) {
            assert!(neighbour.map_or(true, Cell::is_blank), "{} runs into another word", entry.word);
        }
    }

    // numbering: 1..=n over distinct starts, shared starts share numbers
    let mut by_start: HashMap<(usize, usize), u32> = HashMap::new();
    for entry in &result.words {
        assert!(entry.number >= 1);
        let n = *by_start.entry((entry.row, entry.col)).or_insert(entry.number);
        assert_eq!(n, entry.number, "entries starting at ({}, {}) have different numbers", entry.row, entry.col);
    }
    let numbers: HashSet<u32> = by_start.values().copied().collect();
    assert_eq!(numbers, (1..=by_start.len() as u32).collect::<HashSet<_>>());
}

#[cfg(test)]
mod scenarios {
    use super::*;

    #[test]
    fn test_single_word() {
        let generation = generate_crossword(&words(&["CODE"]), &seeded_options(1)).unwrap();
        let result = &generation.crossword;

        assert_eq!(result.words.len(), 1);
        let entry = &result.words[0];
        assert_eq!(entry.number, 1);
        assert_eq!(entry.direction, Direction::Across);
        assert_eq!((result.width, result.height), (6, 3));
        assert_eq!((entry.row, entry.col), (1, 1));
        assert_eq!(generation.status, GenerationStatus::AllPlaced);
        assert_eq!(generation.attempts_run, 1);
        assert_well_formed(result);
    }

    #[test]
    fn test_three_crossing_words() {
        for seed in 0..10 {
            let generation = generate_crossword(&words(&["CAT", "ART", "TAG"]), &seeded_options(seed)).unwrap();
            let result = &generation.crossword;

            assert_eq!(result.words.len(), 3, "seed {seed}: all three words should be placed");
            assert_eq!(generation.status, GenerationStatus::AllPlaced);
            assert!(generation.unplaced.is_empty());
            assert_well_formed(result);

            let mut seen = HashSet::new();
            let shared = result
                .words
                .iter()
                .flat_map(|e| e.cells().map(|(r, c, _)| (r, c)))
                .filter(|cell| !seen.insert(*cell))
                .count();
            assert!(shared >= 1, "seed {seed}: expected at least one intersection");
        }
    }

    #[test]
    fn test_empty_word_list() {
        let generation = generate_crossword(&[], &seeded_options(0)).unwrap();
        let result = &generation.crossword;
        assert_eq!((result.width, result.height), (1, 1));
        assert!(result.words.is_empty());
        assert!(result.grid.is_empty());
        assert_eq!(generation.status, GenerationStatus::AllPlaced);
    }
}

#[cfg(test)]
mod properties {
    use super::*;

    const MIXED: &[&str] = &["CAT", "ART", "TAG", "GNAT", "TANGO", "ORGAN", "RATIO", "TOGA", "ZEBRA", "QUIZ"];

    #[test]
    fn test_well_formed_across_seeds() {
        for seed in 0..25 {
            let generation = generate_crossword(&words(MIXED), &seeded_options(seed)).unwrap();
            assert_well_formed(&generation.crossword);
            assert_eq!(
                generation.crossword.words.len() + generation.unplaced.len(),
                MIXED.len(),
                "seed {seed}: placed + unplaced must cover the input"
            );
        }
    }

    #[test]
    fn test_cropping_is_minimal() {
        for seed in 0..15 {
            let attempt = generate(&words(MIXED), 15, 30, &mut StdRng::seed_from_u64(seed)).unwrap();
            let rows: Vec<usize> = attempt.grid.letters().map(|(r, _, _)| r).collect();
            let cols: Vec<usize> = attempt.grid.letters().map(|(_, c, _)| c).collect();
            let (min_r, max_r) = (*rows.iter().min().unwrap(), *rows.iter().max().unwrap());
            let (min_c, max_c) = (*cols.iter().min().unwrap(), *cols.iter().max().unwrap());

            let result = crop(&attempt);
            let top = min_r.min(CROP_PADDING);
            let left = min_c.min(CROP_PADDING);
            let bottom = (14 - max_r).min(CROP_PADDING);
            let right = (14 - max_c).min(CROP_PADDING);
            assert_eq!(result.height, max_r - min_r + 1 + top + bottom, "seed {seed}");
            assert_eq!(result.width, max_c - min_c + 1 + left + right, "seed {seed}");
            assert_eq!(result.grid.filled_count(), attempt.grid.filled_count());

            for (r, c, ch) in attempt.grid.letters() {
                assert_eq!(result.letter_at(r - min_r + top, c - min_c + left), Some(ch));
            }
        }
    }

    #[test]
    fn test_renumber_is_a_no_op_on_numbered_result() {
        for seed in 0..10 {
            let generation = generate_crossword(&words(MIXED), &seeded_options(seed)).unwrap();
            let again = renumber(generation.crossword.clone());
            assert_eq!(again, generation.crossword);
        }
    }

    #[test]
    fn test_word_longer_than_grid_is_never_placed() {
        let list = words(&["EXTRAORDINARILY", "CAT", "ART"]);
        for seed in 0..10 {
            let options = GenerateOptions { grid_size: 10, max_attempts: 100, seed: Some(seed) };
            let generation = generate_crossword(&list, &options).unwrap();
            let placed: Vec<&str> = generation.crossword.words.iter().map(|e| e.word.as_str()).collect();
            assert!(!placed.contains(&"EXTRAORDINARILY"));
            assert_eq!(placed.len(), 2, "seed {seed}: CAT and ART still fit");
            assert_eq!(generation.unplaced, vec!["EXTRAORDINARILY".to_string()]);
            assert_eq!(generation.status, GenerationStatus::AttemptsExhausted);
            assert_eq!(generation.attempts_run, 100);
        }
    }

    #[test]
    fn test_same_seed_same_crossword() {
        let a = generate_crossword(&words(MIXED), &seeded_options(99)).unwrap();
        let b = generate_crossword(&words(MIXED), &seeded_options(99)).unwrap();
        assert_eq!(a.crossword, b.crossword);
    }

    #[test]
    fn test_small_grid_stays_in_bounds() {
        for seed in 0..10 {
            let options = GenerateOptions { grid_size: 5, max_attempts: 20, seed: Some(seed) };
            let generation = generate_crossword(&words(MIXED), &options).unwrap();
            assert!(generation.crossword.width <= 5 && generation.crossword.height <= 5);
            assert_well_formed(&generation.crossword);
        }
    }
}

#[cfg(test)]
mod input_handling {
    use super::*;

    #[test]
    fn test_lowercase_word_is_rejected() {
        let err = generate_crossword(&words(&["CAT", "dog"]), &seeded_options(0)).unwrap_err();
        assert!(matches!(*err, InputError::InvalidCharacter { ref word, invalid_char: 'd' } if word == "dog"));
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_zero_grid_size_is_rejected() {
        let options = GenerateOptions { grid_size: 0, ..GenerateOptions::default() };
        let err = generate_crossword(&words(&["CAT"]), &options).unwrap_err();
        assert_eq!(err.code(), "E003");
    }

    #[test]
    fn test_text_fixture_end_to_end() {
        let list = WordList::load_from_path("tests/fixtures/test_word_list.txt").unwrap();
        assert_eq!(list.len(), 8);
        assert_eq!(list.entries[0], WordClue::new("CAT", "Feline pet"));

        let generation = generate_crossword(&list.entries, &seeded_options(2024)).unwrap();
        assert_well_formed(&generation.crossword);
        assert!(generation.crossword.words.len() >= 2);
        assert_eq!(generation.words_requested, 8);
    }

    #[test]
    fn test_json_fixture_end_to_end() {
        let list = WordList::load_from_path("tests/fixtures/test_word_list.json").unwrap();
        let found: Vec<&str> = list.entries.iter().map(|wc| wc.word.as_str()).collect();
        assert_eq!(found, vec!["CODE", "DEBUG", "RUST"]);

        let generation = generate_crossword(&list.entries, &seeded_options(5)).unwrap();
        assert_well_formed(&generation.crossword);
    }

    #[test]
    fn test_malformed_json_fixture_reports_e005() {
        let err: Box<dyn std::error::Error> = WordList::load_from_path("tests/fixtures/malformed_word_list.json").unwrap_err().into();
        let input_err = find_input_error(err.as_ref()).expect("InputError should be recoverable");
        assert_eq!(input_err.code(), "E005");
        let detailed = input_err.display_detailed();
        assert!(detailed.contains("(E005)"));
        assert!(input_err.help().is_some_and(|help| detailed.contains(help)));
    }

    #[test]
    fn test_json_output_shape() {
        let generation = generate_crossword(&words(&["CODE"]), &seeded_options(1)).unwrap();
        let json: serde_json::Value = serde_json::to_value(&generation).unwrap();

        assert_eq!(json["status"], "all_placed");
        assert_eq!(json["crossword"]["width"], 6);
        assert_eq!(json["crossword"]["height"], 3);
        assert_eq!(json["crossword"]["grid"][1][1], "C");
        assert!(json["crossword"]["grid"][0][0].is_null());
        assert_eq!(json["crossword"]["words"][0]["direction"], "across");
        assert_eq!(json["crossword"]["words"][0]["number"], 1);
    }
}
