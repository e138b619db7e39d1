//! The grid placement engine: randomized restarts of a greedy, first-fit placer.
//!
//! Each attempt shuffles the word list, puts the first word across the middle
//! of a fresh grid, and then tries every following word against the letters
//! already placed (across candidates first, then down), keeping the first
//! candidate that [`try_place`] accepts. Words with no accepted candidate are
//! skipped for that attempt. The attempt that placed the most words wins;
//! ties keep the earlier attempt. A perfect attempt stops the search early.
//!
//! # Examples
//!
//! ```
//! use crossgrid::engine::{generate_crossword, GenerateOptions, GenerationStatus};
//! use crossgrid::word_list::WordClue;
//!
//! let words = vec![WordClue::new("CODE", "Program text")];
//! let options = GenerateOptions { seed: Some(7), ..GenerateOptions::default() };
//! let generation = generate_crossword(&words, &options)?;
//!
//! assert_eq!(generation.status, GenerationStatus::AllPlaced);
//! assert_eq!((generation.crossword.width, generation.crossword.height), (6, 3));
//! # Ok::<(), Box<crossgrid::errors::InputError>>(())
//! ```
//!
//! ## Handling Errors with Detailed Messages
//!
//! ```
//! use crossgrid::engine::{generate_crossword, GenerateOptions};
//! use crossgrid::word_list::WordClue;
//!
//! let words = vec![WordClue::new("ICE CREAM", "Cold dessert")];
//! match generate_crossword(&words, &GenerateOptions::default()) {
//!     Ok(g) => println!("placed {}", g.crossword.words.len()),
//!     Err(e) => eprintln!("{}", e.display_detailed()), // E002: space is not A-Z
//! }
//! ```

use std::collections::HashSet;

use instant::Instant;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::crop::{crop, CrosswordResult};
use crate::errors::InputError;
use crate::grid::{Direction, Grid};
use crate::grid_char::first_invalid_char;
use crate::numbering::renumber;
use crate::placement::{find_intersections, try_place};
use crate::word_list::WordClue;

/// Side length of the working grid when none is given.
pub const DEFAULT_GRID_SIZE: usize = 15;
/// Number of randomized attempts when none is given.
pub const DEFAULT_MAX_ATTEMPTS: usize = 100;
/// Largest accepted working grid side.
pub const MAX_GRID_SIZE: usize = 256;

/// A word that made it onto the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordEntry {
    pub word: String,
    pub clue: String,
    /// Row of the first letter.
    pub row: usize,
    /// Column of the first letter.
    pub col: usize,
    pub direction: Direction,
    /// Clue number; 0 until [`renumber`] runs.
    pub number: u32,
}

impl WordEntry {
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// `(row, col, letter)` for every letter of the word.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        let (d_row, d_col) = match self.direction {
            Direction::Across => (0, 1),
            Direction::Down => (1, 0),
        };
        self.word
            .chars()
            .enumerate()
            .map(move |(i, c)| (self.row + i * d_row, self.col + i * d_col, c))
    }
}

/// One attempt's grid and the words it managed to place, in placement order.
#[derive(Debug, Clone)]
pub struct PlacementAttempt {
    pub grid: Grid,
    pub words: Vec<WordEntry>,
}

impl PlacementAttempt {
    fn empty(grid_size: usize) -> Self {
        Self { grid: Grid::square(grid_size), words: Vec::new() }
    }

    /// Number of words placed.
    #[must_use]
    pub fn score(&self) -> usize {
        self.words.len()
    }
}

/// Knobs for [`generate_crossword`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    pub grid_size: usize,
    pub max_attempts: usize,
    /// Seed for the shuffle; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { grid_size: DEFAULT_GRID_SIZE, max_attempts: DEFAULT_MAX_ATTEMPTS, seed: None }
    }
}

/// Whether the best attempt placed the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    /// Every requested word is on the grid.
    AllPlaced,
    /// All attempts ran; the best one left some words out.
    AttemptsExhausted,
}

/// Finished, numbered crossword plus bookkeeping about how it was found.
#[derive(Debug, Clone, Serialize)]
pub struct Generation {
    pub crossword: CrosswordResult,
    pub status: GenerationStatus,
    /// Attempts actually run (fewer than requested after an early stop).
    pub attempts_run: usize,
    pub words_requested: usize,
    /// Requested words missing from the grid, in input order.
    pub unplaced: Vec<String>,
}

/// Reject input that could only produce a meaningless grid.
///
/// # Errors
///
/// Returns the first problem found: bad grid size, zero attempts, or a word
/// that is empty or contains anything other than `A`-`Z`.
pub fn validate_input(words: &[WordClue], grid_size: usize, max_attempts: usize) -> Result<(), Box<InputError>> {
    if grid_size == 0 || grid_size > MAX_GRID_SIZE {
        return Err(Box::new(InputError::InvalidGridSize { size: grid_size, max: MAX_GRID_SIZE }));
    }
    if max_attempts == 0 {
        return Err(Box::new(InputError::InvalidMaxAttempts { max_attempts }));
    }
    for (index, wc) in words.iter().enumerate() {
        if wc.word.is_empty() {
            return Err(Box::new(InputError::EmptyWord { index }));
        }
        if let Some(invalid_char) = first_invalid_char(&wc.word) {
            return Err(Box::new(InputError::InvalidCharacter { word: wc.word.clone(), invalid_char }));
        }
    }
    Ok(())
}

/// Run up to `max_attempts` randomized attempts and return the best one.
///
/// Placement failures are not errors: the returned attempt may hold fewer
/// words than requested, or none at all.
///
/// # Errors
///
/// Returns `Box<InputError>` when [`validate_input`] rejects the input.
pub fn generate<R: Rng + ?Sized>(
    words: &[WordClue],
    grid_size: usize,
    max_attempts: usize,
    rng: &mut R,
) -> Result<PlacementAttempt, Box<InputError>> {
    validate_input(words, grid_size, max_attempts)?;
    Ok(search(words, grid_size, max_attempts, rng).0)
}

/// Attempt loop over already-validated input. Returns the best attempt and the number of attempts run.
fn search<R: Rng + ?Sized>(
    words: &[WordClue],
    grid_size: usize,
    max_attempts: usize,
    rng: &mut R,
) -> (PlacementAttempt, usize) {
    debug_assert!(max_attempts > 0, "max_attempts must be positive");

    let mut best: Option<PlacementAttempt> = None;
    let mut attempts_run = 0;

    for attempt_no in 1..=max_attempts {
        let t_attempt = Instant::now();
        let attempt = run_attempt(words, grid_size, rng);
        attempts_run = attempt_no;

        let score = attempt.score();
        debug!(
            "attempt {attempt_no}/{max_attempts}: placed {score}/{} in {:.3}ms",
            words.len(),
            t_attempt.elapsed().as_secs_f64() * 1000.0
        );

        if is_new_best(best.as_ref(), score) {
            best = Some(attempt);
        }

        if score == words.len() {
            debug!("attempt {attempt_no} placed every word; stopping early");
            break;
        }
    }

    (best.unwrap_or_else(|| PlacementAttempt::empty(grid_size)), attempts_run)
}

/// Strict `>`: an attempt that only ties the best so far does not replace it.
fn is_new_best(best: Option<&PlacementAttempt>, score: usize) -> bool {
    best.map_or(true, |b| score > b.score())
}

/// End cells of the words placed so far, plus the starts they occupy.
///
/// [`try_place`] only checks the new word's own ends. Without this record a
/// later word could fill the cell just past an earlier word (`CATS` laid over
/// `CAT`, or a down word crossing right after it) and glue the two together.
#[derive(Debug, Default)]
struct Reserved {
    end_caps: HashSet<(isize, isize)>,
    starts: HashSet<(isize, isize, Direction)>,
}

impl Reserved {
    fn record(&mut self, row: isize, col: isize, len: isize, direction: Direction) {
        let (d_row, d_col) = direction.step();
        self.end_caps.insert((row - d_row, col - d_col));
        self.end_caps.insert((row + len * d_row, col + len * d_col));
        self.starts.insert((row, col, direction));
    }

    /// True if a word at this position would cover a reserved end cell or repeat a start.
    fn forbids(&self, row: isize, col: isize, len: isize, direction: Direction) -> bool {
        let (d_row, d_col) = direction.step();
        self.starts.contains(&(row, col, direction))
            || (0..len).any(|i| self.end_caps.contains(&(row + i * d_row, col + i * d_col)))
    }
}

/// One greedy pass over a fresh shuffle of `words` on a fresh grid.
fn run_attempt<R: Rng + ?Sized>(words: &[WordClue], grid_size: usize, rng: &mut R) -> PlacementAttempt {
    let mut attempt = PlacementAttempt::empty(grid_size);

    let mut order: Vec<&WordClue> = words.iter().collect();
    order.shuffle(rng);

    let Some((first, rest)) = order.split_first() else {
        return attempt;
    };

    // grid_size <= MAX_GRID_SIZE, so the casts below cannot wrap
    let size = grid_size as isize;
    let row = size / 2;
    let col = (size - first.word.len() as isize) / 2;
    if !try_place(&mut attempt.grid, &first.word, row, col, Direction::Across) {
        debug!("first word {} does not fit a {grid_size}x{grid_size} grid; attempt scores 0", first.word);
        return attempt;
    }
    let mut reserved = Reserved::default();
    reserved.record(row, col, first.word.len() as isize, Direction::Across);
    attempt.words.push(make_entry(first, row, col, Direction::Across));

    for wc in rest {
        match place_crossing(&mut attempt.grid, &reserved, &wc.word) {
            Some((row, col, direction)) => {
                reserved.record(row, col, wc.word.len() as isize, direction);
                attempt.words.push(make_entry(wc, row, col, direction));
            }
            None => debug!("no valid crossing for {}", wc.word),
        }
    }

    attempt
}

/// Place `word` at the first accepted intersection candidate, across before down.
fn place_crossing(grid: &mut Grid, reserved: &Reserved, word: &str) -> Option<(isize, isize, Direction)> {
    let len = word.len() as isize;
    for direction in Direction::ALL {
        for candidate in find_intersections(grid, word, direction) {
            if reserved.forbids(candidate.row, candidate.col, len, direction) {
                continue;
            }
            if try_place(grid, word, candidate.row, candidate.col, direction) {
                return Some((candidate.row, candidate.col, direction));
            }
        }
    }
    None
}

fn make_entry(wc: &WordClue, row: isize, col: isize, direction: Direction) -> WordEntry {
    debug_assert!(row >= 0 && col >= 0, "placed words start on the grid");
    WordEntry {
        word: wc.word.clone(),
        clue: wc.clue.clone(),
        row: row.unsigned_abs(),
        col: col.unsigned_abs(),
        direction,
        number: 0,
    }
}

/// Requested words that are not on the grid, in input order (one per missing occurrence).
fn unplaced_words(words: &[WordClue], placed: &[WordEntry]) -> Vec<String> {
    let mut remaining: Vec<&str> = placed.iter().map(|e| e.word.as_str()).collect();
    words
        .iter()
        .filter_map(|wc| match remaining.iter().position(|w| *w == wc.word) {
            Some(i) => {
                remaining.swap_remove(i);
                None
            }
            None => Some(wc.word.clone()),
        })
        .collect()
}

/// Full pipeline: validate, search, crop, number.
///
/// # Errors
///
/// Returns `Box<InputError>` for malformed input (see [`validate_input`]).
/// Leaving words out of the grid is reported through
/// [`Generation::status`] and [`Generation::unplaced`], never as an error.
pub fn generate_crossword(words: &[WordClue], options: &GenerateOptions) -> Result<Generation, Box<InputError>> {
    validate_input(words, options.grid_size, options.max_attempts)?;

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let t_search = Instant::now();
    let (best, attempts_run) = search(words, options.grid_size, options.max_attempts, &mut rng);
    let crossword = renumber(crop(&best));

    let unplaced = unplaced_words(words, &crossword.words);
    let status = if unplaced.is_empty() { GenerationStatus::AllPlaced } else { GenerationStatus::AttemptsExhausted };

    info!(
        "placed {}/{} words in {attempts_run} attempt(s), {:.3}s; grid {}x{}",
        crossword.words.len(),
        words.len(),
        t_search.elapsed().as_secs_f64(),
        crossword.width,
        crossword.height
    );

    Ok(Generation { crossword, status, attempts_run, words_requested: words.len(), unplaced })
}
