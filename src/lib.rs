// Library API shared by the CLI and the wasm build
pub mod crop;
pub mod engine;
pub mod errors;
pub mod grid;
mod grid_char;
pub mod logging;
pub mod numbering;
pub mod placement;
pub mod render;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use crop::CrosswordResult;
pub use engine::{generate_crossword, GenerateOptions, Generation, GenerationStatus, PlacementAttempt, WordEntry};
pub use errors::InputError;
pub use grid::{Cell, Direction, Grid};
pub use word_list::{WordClue, WordList};
