use crate::engine::{generate_crossword, GenerateOptions};
use crate::errors::InputError;
use crate::logging::init_logger;
use crate::word_list::{WordClue, WordList};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E002", "WASM001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

impl From<&InputError> for WasmError {
    fn from(e: &InputError) -> Self {
        WasmError {
            code: e.code().to_string(),
            message: e.to_string(),
            description: e.description().to_string(),
            details: e.details().to_string(),
            help: e.help().map(str::to_string),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {}", help));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn internal_error(code: &str, message: String, description: &str) -> WasmError {
    WasmError {
        code: code.to_string(),
        message,
        description: description.to_string(),
        details: "The generator result could not be converted to JavaScript format.".to_string(),
        help: Some("This is an internal error. Please report this issue.".to_string()),
    }
}

/// Initialize crossgrid logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);
    log::info!("WASM module initialized");
}

/// JS entry: (words: {word, clue}[], grid_size, max_attempts, seed?)
/// returns the serialized generation (crossword, status, attempts_run, words_requested, unplaced)
#[wasm_bindgen]
pub fn generate_crossword_wasm(
    words: JsValue,
    grid_size: usize,
    max_attempts: usize,
    seed: Option<u32>,
) -> Result<JsValue, JsValue> {
    let words: Vec<WordClue> = serde_wasm_bindgen::from_value(words).map_err(|e| WasmError {
        code: "WASM001".to_string(),
        message: format!("words must be {{word, clue}}[]: {e}"),
        description: "Invalid word list format".to_string(),
        details: "The words parameter must be a JavaScript array of objects with string fields `word` and `clue`.".to_string(),
        help: Some("Example: [{word: 'CODE', clue: 'Program text'}]".to_string()),
    })?;

    let options = GenerateOptions { grid_size, max_attempts, seed: seed.map(u64::from) };
    let generation = generate_crossword(&words, &options).map_err(|e| WasmError::from(&*e))?;

    to_value(&generation)
        .map_err(|e| internal_error("WASM002", format!("serialization failed: {e}"), "Failed to serialize result").into())
}

/// Parse `WORD;clue` lines into an array of `{word, clue}` objects.
///
/// # Errors
/// Returns a `JsValue` error if the parsed list cannot be serialized.
#[wasm_bindgen]
pub fn parse_word_list(text: &str) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text);
    to_value(&word_list.entries)
        .map_err(|e| internal_error("WASM003", format!("serialization failed: {e}"), "Failed to serialize word list").into())
}

/// Generate a debug report users can paste when reporting a problem.
#[wasm_bindgen]
pub fn get_debug_info(
    error_message: &str,
    word_count: usize,
    grid_size: usize,
    max_attempts: usize,
) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // writing to a String never fails
    let _ = writeln!(&mut report, "=== CROSSGRID DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(&mut report, "Build: {}", env!("GIT_HASH"));
    let _ = writeln!(&mut report, "Generated: {}", js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string()));
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{}", error_message);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Input");
    let _ = writeln!(&mut report, "Word Count: {}", word_count);
    let _ = writeln!(&mut report, "Grid Size: {}", grid_size);
    let _ = writeln!(&mut report, "Max Attempts: {}", max_attempts);
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {}", user_agent);
        }
        let _ = writeln!(&mut report, "Location: {}", window.location().href().unwrap_or_else(|_| "unknown".to_string()));
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}
