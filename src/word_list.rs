//! Loading and normalizing the word/clue list fed to the generator.
//!
//! The word source hands over its entries either as text or as JSON. Both are
//! parsed from an in-memory string (important for WebAssembly/browser builds,
//! where direct file I/O isn't allowed), with a native-only helper that reads
//! a file and picks the format from its extension.
//!
//! Text format, one entry per line:
//! - Each line is `WORD;clue text`. The clue is everything after the first `;`,
//!   so clues may contain semicolons themselves.
//! - Empty lines and lines without a `;` are skipped.
//!
//! JSON format: `[{"word": "CODE", "clue": "Program text"}, ...]`.
//!
//! For both formats:
//! - Words are trimmed and uppercased; clues are trimmed.
//! - Duplicate words are dropped, keeping the first clue.
//! - Input order is preserved (the generator shuffles on its own).
//!
//! Words that still contain something other than `A`-`Z` (spaces, digits,
//! apostrophes) are kept here on purpose: the generator rejects them with a
//! descriptive error instead of silently losing an entry.

use std::collections::HashSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::InputError;
use crate::grid_char::normalize_word;

/// A candidate word and its clue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordClue {
    pub word: String,
    pub clue: String,
}

impl WordClue {
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        Self { word: word.into(), clue: clue.into() }
    }

    fn normalized(self) -> Self {
        Self { word: normalize_word(&self.word), clue: self.clue.trim().to_string() }
    }
}

/// A processed, ready-to-use word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub entries: Vec<WordClue>,
}

impl WordList {
    /// Parse `WORD;clue` lines.
    ///
    /// # Behavior:
    /// 1. Splits the input into lines and trims each one.
    /// 2. Skips empty lines and lines without a `;` separator.
    /// 3. Splits on the first `;` into word and clue.
    /// 4. Normalizes the word (uppercase) and the clue (trimmed).
    /// 5. Drops repeated words, keeping the first occurrence.
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        let entries = contents
            .lines()
            .enumerate()
            .filter_map(|(line_no, raw_line)| {
                let line = raw_line.trim();
                if line.is_empty() {
                    return None;
                }
                match line.split_once(';') {
                    Some((word, clue)) => Some(WordClue::new(word, clue).normalized()),
                    None => {
                        debug!("skipping line {}: no ';' separator in {line:?}", line_no + 1);
                        None
                    }
                }
            });

        WordList { entries: dedup_words(entries) }
    }

    /// Parse a JSON array of `{"word": ..., "clue": ...}` objects.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Json` if `contents` is not such an array.
    pub fn parse_json(contents: &str) -> Result<WordList, Box<InputError>> {
        let raw: Vec<WordClue> = serde_json::from_str(contents)?;
        Ok(WordList { entries: dedup_words(raw.into_iter().map(WordClue::normalized)) })
    }

    /// Native-only convenience method: read a file and parse it.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as `WORD;clue` text.
    ///
    /// # Errors
    ///
    /// Will return an `Error` if unable to read a file at `path`, or
    /// (as `ErrorKind::InvalidInput` wrapping `InputError::Json`) if a JSON file is malformed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> std::io::Result<WordList> {
        let path_ref = path.as_ref();

        let data = std::fs::read_to_string(path_ref).map_err(|e| {
            std::io::Error::new(e.kind(), format!("failed to read word list from '{}': {}", path_ref.display(), e))
        })?;

        let is_json = path_ref.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::parse_json(&data).map_err(|e| std::io::Error::from(*e))
        } else {
            Ok(Self::parse_from_str(&data))
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Keep the first entry for each word, in input order.
fn dedup_words(entries: impl Iterator<Item = WordClue>) -> Vec<WordClue> {
    let mut seen = HashSet::new();
    entries
        .filter(|wc| {
            let fresh = seen.insert(wc.word.clone());
            if !fresh {
                debug!("dropping duplicate word {}", wc.word);
            }
            fresh
        })
        .collect()
}
