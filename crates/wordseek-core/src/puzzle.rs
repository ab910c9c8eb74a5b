//! The persistable puzzle document model.

use serde::{Deserialize, Serialize};

use crate::{DifficultyTier, Direction};

/// A word fixed into the grid at a position and direction.
///
/// Every cell implied by `start + i * direction` for `i` in
/// `0..word.len()` lies within the grid and holds exactly `word[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedWord {
    /// The placed word, uppercase letters only.
    pub word: String,
    /// Row of the first letter.
    pub start_row: usize,
    /// Column of the first letter.
    pub start_col: usize,
    /// Direction the letters run in.
    pub direction: Direction,
}

/// A placed word together with its hint, as stored in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleWord {
    /// The placed word, uppercase letters only.
    pub word: String,
    /// Row of the first letter.
    pub start_row: usize,
    /// Column of the first letter.
    pub start_col: usize,
    /// Direction the letters run in.
    pub direction: Direction,
    /// One-sentence hint shown to the player.
    pub hint: String,
}

/// A complete generated puzzle, ready for persistence.
///
/// Assembled once per generation cycle and never mutated afterwards;
/// ownership passes to the persistence sink. The grid is stored as one
/// string per row because the document store does not accept nested arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Puzzle {
    /// Theme the word list was drawn from.
    pub theme: String,
    /// Difficulty tier of the source level.
    pub difficulty: DifficultyTier,
    /// Level number the puzzle was generated for.
    pub level: u8,
    /// Side length of the grid.
    pub grid_size: usize,
    /// Grid rows, top to bottom, one string per row.
    pub grid: Vec<String>,
    /// Placed words with hints, in placement order.
    pub words: Vec<PuzzleWord>,
    /// Generator identity recorded in the document.
    pub created_by: String,
    /// RFC 3339 timestamp of generation.
    pub generated_date: String,
    /// Play counter, starts at zero.
    pub popularity: u32,
    /// Completion counter, starts at zero.
    pub completion_count: u32,
    /// Mean completion time in seconds, starts at zero.
    pub average_completion_time: f64,
    /// Search tags: theme (lowercased), tier, and `level{n}`.
    pub tags: Vec<String>,
    /// Document schema version.
    pub version: String,
}
