use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};

use crossgrid::engine::{self, GenerateOptions, GenerationStatus};
use crossgrid::errors::find_input_error;
use crossgrid::render;
use crossgrid::word_list::WordList;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Puzzle grid and clue lists
    Text,
    /// Serialized result for other tools
    Json,
}

/// crossgrid crossword grid builder
#[derive(Parser, Debug)]
#[command(author, about, long_about = None, version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
struct Cli {
    /// Path to the word list (`WORD;clue` per line, or a .json array of {word, clue})
    word_list: String,

    /// Side length of the working grid before cropping
    #[arg(short = 's', long, default_value_t = engine::DEFAULT_GRID_SIZE)]
    grid_size: usize,

    /// Number of randomized placement attempts
    #[arg(short = 'a', long, default_value_t = engine::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the solution key (text format only)
    #[arg(long)]
    solution: bool,
}

/// Entry point of the crossgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("CROSSGRID_DEBUG").is_ok();
    crossgrid::logging::init_logger(debug_enabled);

    log::info!("Starting crossgrid");

    if let Err(e) = try_main() {
        if let Some(input_err) = find_input_error(e.as_ref()) {
            eprintln!("Error: {}", input_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the crossgrid CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Generate, crop and number the crossword.
/// 4. Print the puzzle (or JSON) on stdout.
/// 5. Print placement counts and timings on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Load the word list
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Generate
    let options = GenerateOptions { grid_size: cli.grid_size, max_attempts: cli.max_attempts, seed: cli.seed };
    let t_generate = Instant::now();
    let generation = engine::generate_crossword(&word_list.entries, &options).map_err(|e| e as Box<dyn std::error::Error>)?;
    let generate_secs = t_generate.elapsed().as_secs_f64();

    // 3. Print the result
    let crossword = &generation.crossword;
    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&generation)?),
        OutputFormat::Text => {
            println!("{}", render::render_puzzle(crossword));
            println!("{}", render::render_clues(crossword));
            if cli.solution {
                println!("SOLUTION");
                println!("{}", render::render_solution(crossword));
            }
        }
    }

    // 4. Diagnostics on stderr
    match generation.status {
        GenerationStatus::AllPlaced => {
            eprintln!("✓ Placed all {} words", generation.words_requested);
        }
        GenerationStatus::AttemptsExhausted => {
            eprintln!(
                "⚠️  Placed {}/{} words; left out: {}",
                crossword.words.len(),
                generation.words_requested,
                generation.unplaced.join(", ")
            );
        }
    }
    eprintln!(
        "Loaded {} words in {:.3}s; {} attempt(s) in {:.3}s; grid {}x{}.",
        word_list.len(),
        load_secs,
        generation.attempts_run,
        generate_secs,
        crossword.width,
        crossword.height
    );

    Ok(())
}
