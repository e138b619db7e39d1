//! Error types for malformed generator input, with error codes and helpful messages.
//!
//! Failing to place a word is *not* an error: the engine simply leaves it out
//! and reports fewer placed words. The variants here cover input that would
//! make any grid meaningless.
//!
//! # Error Codes
//!
//! - E001: `EmptyWord` (A word has no letters)
//! - E002: `InvalidCharacter` (A word contains a character outside A-Z)
//! - E003: `InvalidGridSize` (Grid size is zero or too large)
//! - E004: `InvalidMaxAttempts` (Attempt count is zero)
//! - E005: `Json` (JSON word list could not be read)
//!
//! # Examples
//!
//! ```
//! use crossgrid::errors::InputError;
//!
//! fn check_word(word: &str) -> Result<(), Box<InputError>> {
//!     if word.is_empty() {
//!         return Err(Box::new(InputError::EmptyWord { index: 0 }));
//!     }
//!     Ok(())
//! }
//!
//! match check_word("") {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!     }
//!     Ok(()) => println!("Success"),
//! }
//! ```

use std::io;

/// Custom error type for generator input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Word #{index} is empty")]
    EmptyWord { index: usize },

    #[error("Word \"{word}\" contains invalid character '{invalid_char}' (only A-Z allowed)")]
    InvalidCharacter { word: String, invalid_char: char },

    #[error("Invalid grid size: {size} (must be between 1 and {max})")]
    InvalidGridSize { size: usize, max: usize },

    #[error("Invalid attempt count: {max_attempts} (must be at least 1)")]
    InvalidMaxAttempts { max_attempts: usize },

    #[error("Malformed JSON word list: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<InputError> for io::Error {
    fn from(e: InputError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e)
    }
}

/// Find the `InputError` behind `err`, whether it is one itself or wrapped in an `io::Error`.
#[must_use]
pub fn find_input_error<'a>(err: &'a (dyn std::error::Error + 'static)) -> Option<&'a InputError> {
    err.downcast_ref::<InputError>().or_else(|| {
        err.downcast_ref::<io::Error>()
            .and_then(io::Error::get_ref)
            .and_then(|inner| inner.downcast_ref::<InputError>())
    })
}

impl From<serde_json::Error> for Box<InputError> {
    fn from(e: serde_json::Error) -> Self {
        Box::new(InputError::Json(e))
    }
}

impl InputError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            InputError::EmptyWord { .. } => "E001",
            InputError::InvalidCharacter { .. } => "E002",
            InputError::InvalidGridSize { .. } => "E003",
            InputError::InvalidMaxAttempts { .. } => "E004",
            InputError::Json(_) => "E005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            InputError::EmptyWord { .. } => "A word has no letters",
            InputError::InvalidCharacter { .. } => "A word contains a character outside A-Z",
            InputError::InvalidGridSize { .. } => "Grid size is zero or too large",
            InputError::InvalidMaxAttempts { .. } => "Attempt count is zero",
            InputError::Json(_) => "JSON word list could not be read",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            InputError::EmptyWord { .. } => "Every entry in the word list must have at least one letter. Empty words cannot be written into the grid.",
            InputError::InvalidCharacter { .. } => "Grid cells hold exactly one letter A-Z. Words containing digits, punctuation, spaces or accented letters cannot be placed.",
            InputError::InvalidGridSize { .. } => "The working grid is square with the given side length. A side of zero holds nothing; very large sides are rejected to keep memory bounded.",
            InputError::InvalidMaxAttempts { .. } => "The generator keeps the best of several randomized attempts. At least one attempt is required to produce a grid.",
            InputError::Json(_) => "A JSON word list must be an array of objects with string fields \"word\" and \"clue\".",
        }
    }

    /// Returns a helpful suggestion or example for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            InputError::EmptyWord { .. } => Some("Remove empty lines or entries like ';clue' from the word list"),
            InputError::InvalidCharacter { .. } => Some("Strip spaces and punctuation before generating (e.g., 'ICE CREAM' -> 'ICECREAM')"),
            InputError::InvalidGridSize { .. } => Some("Use a grid size such as 15 (the default) or 21"),
            InputError::InvalidMaxAttempts { .. } => Some("Use a positive attempt count such as 100 (the default)"),
            InputError::Json(_) => Some("Example: [{\"word\": \"CODE\", \"clue\": \"Program text\"}]"),
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
