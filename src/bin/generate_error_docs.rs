//! Generate error code documentation from the source of truth (the error enum).
//!
//! This binary reads the error codes, descriptions, details, and help text
//! directly from `InputError` via its `code()`, `description()`, `details()`,
//! and `help()` methods.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use crossgrid::errors::InputError;
use crossgrid::word_list::WordList;

/// One Markdown section per error: heading, details, fix, then the short and detailed messages.
fn error_section(error: &InputError) -> String {
    let mut section = format!("### {}: {}\n\n**Details:** {}\n\n", error.code(), error.description(), error.details());
    if let Some(help_text) = error.help() {
        section.push_str(&format!("**How to fix:**\n```\n{help_text}\n```\n\n"));
    }
    section.push_str(&format!("**Example error message:**\n```\n{error}\n```\n\n"));
    section.push_str(&format!("**Detailed format:**\n```\n{}\n```\n\n---\n", error.display_detailed()));
    section
}

/// Helper to create all `InputError` variants for documentation
fn all_input_error_variants() -> Vec<InputError> {
    let mut errors = vec![
        InputError::EmptyWord { index: 2 },
        InputError::InvalidCharacter { word: "ICE CREAM".to_string(), invalid_char: ' ' },
        InputError::InvalidGridSize { size: 0, max: crossgrid::engine::MAX_GRID_SIZE },
        InputError::InvalidMaxAttempts { max_attempts: 0 },
    ];
    // Json--create by parsing a word list that is not an array
    if let Err(e) = WordList::parse_json(r#"{"word": "CODE"}"#) {
        errors.push(*e);
    }
    errors
}

fn main() {
    println!("# Error Code Reference\n");
    println!("**⚠️ This document is auto-generated from the source code. Do not edit manually.**\n");

    println!("## Table of Contents\n");
    println!("- [Input Errors (E001–E005)](#input-errors)");
    println!("- [How to Use Error Codes](#how-to-use-error-codes)\n");

    println!("## Input Errors\n");
    println!("Errors for word lists or options the generator cannot work with. Words that merely fail to fit are not errors; they are listed as unplaced.\n");
    for error in &all_input_error_variants() {
        println!("{}", error_section(error));
    }

    println!("\n## How to Use Error Codes\n");
    println!("When you see an error like:\n");
    println!("```");
    println!("Error: Invalid grid size: 0 (must be between 1 and 256) (E003)");
    println!("Use a grid size such as 15 (the default) or 21");
    println!("```\n");
    println!("1. Note the error code (e.g., `E003`)");
    println!("2. Look it up in this document for detailed explanation");
    println!("3. Follow the suggested resolution steps\n");
}
