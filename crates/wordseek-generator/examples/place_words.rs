//! Example demonstrating basic grid placement.
//!
//! This example shows how to:
//! - Look up a level configuration
//! - Place a word list into a grid, optionally from a fixed seed
//! - Display the grid, the placements, and the seed for replay
//!
//! # Usage
//!
//! ```sh
//! cargo run --example place_words -- CAT DOG OWL
//! ```
//!
//! Pick a level (default: 1):
//!
//! ```sh
//! cargo run --example place_words -- --level 11 TELESCOPE SATELLITE ORBIT
//! ```
//!
//! Replay a previous run from its seed:
//!
//! ```sh
//! cargo run --example place_words -- --seed <64-hex-chars> CAT DOG OWL
//! ```

use std::process;

use clap::Parser;
use wordseek_core::LevelConfig;
use wordseek_generator::{PuzzleSeed, place_with_seed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Level to place for (1-30).
    #[arg(long, value_name = "LEVEL", default_value_t = 1)]
    level: u8,

    /// Seed to replay (64 hex characters); a fresh one is drawn if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Words to place.
    #[arg(value_name = "WORD", num_args = 1.., required = true)]
    words: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let config = match LevelConfig::get(args.level) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let words: Vec<String> = args.words.iter().map(|word| word.to_uppercase()).collect();
    let seed = args.seed.unwrap_or_else(PuzzleSeed::random);

    let placement = match place_with_seed(&words, config, seed) {
        Ok(placement) => placement,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    println!("Seed:");
    println!("  {seed}");
    println!();

    println!("Grid ({0}x{0}, level {1}):", config.grid_size, config.level);
    for line in placement.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Placed {} of {} words:", placement.placed.len(), words.len());
    for word in &placement.placed {
        println!(
            "  {} at ({}, {}) {}",
            word.word, word.start_row, word.start_col, word.direction
        );
    }

    let dropped: Vec<_> = words
        .iter()
        .filter(|word| !placement.placed.iter().any(|placed| placed.word == **word))
        .collect();
    if !dropped.is_empty() {
        println!();
        println!("Dropped:");
        for word in dropped {
            println!("  {word}");
        }
    }
}
