//! Core data structures for word-search puzzle generation.
//!
//! This crate provides the fundamental types shared by the placement engine,
//! the replenishment scheduler, and the host application.
//!
//! # Overview
//!
//! - [`direction`]: the four placement vectors a word can run along
//! - [`grid`]: the square letter grid puzzles are laid out in
//! - [`level`]: per-level difficulty configuration and the canonical level table
//! - [`puzzle`]: the persistable puzzle document model
//!
//! # Examples
//!
//! ```
//! use wordseek_core::{Direction, LetterGrid, LevelConfig};
//!
//! let config = LevelConfig::get(1).unwrap();
//! assert_eq!(config.grid_size, 5);
//! assert_eq!(config.directions, [Direction::Horizontal, Direction::Vertical]);
//!
//! let grid = LetterGrid::new(config.grid_size);
//! assert!(!grid.is_filled());
//! ```

pub mod direction;
pub mod grid;
pub mod level;
pub mod puzzle;

pub use self::{
    direction::Direction,
    grid::LetterGrid,
    level::{ConfigError, DifficultyTier, LEVELS, LEVELS_VERSION, LevelConfig},
    puzzle::{PlacedWord, Puzzle, PuzzleWord},
};
