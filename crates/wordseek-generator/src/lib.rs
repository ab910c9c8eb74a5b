//! Word-search grid generation.
//!
//! This crate lays themed word lists into letter grids and assembles the
//! result into persistable puzzle documents.
//!
//! # Overview
//!
//! - [`place`] writes a word list into a fresh [`LetterGrid`] under the
//!   level's directional constraints, back-filling leftover cells with
//!   random letters. Words that cannot be placed within the retry budget
//!   are dropped, not errors.
//! - [`PuzzleSeed`] makes generation reproducible: the same seed always
//!   produces the same grid and placements.
//! - [`assemble`] combines a placement with the word list's hints into a
//!   [`Puzzle`] document.
//!
//! # Examples
//!
//! ```
//! use wordseek_core::LevelConfig;
//! use wordseek_generator::{PuzzleSeed, place_with_seed};
//!
//! let config = LevelConfig::get(1).unwrap();
//! let placement =
//!     place_with_seed(&["CAT", "DOG"], config, PuzzleSeed::from_bytes([7; 32])).unwrap();
//! assert!(placement.grid.is_filled());
//! ```
//!
//! [`LetterGrid`]: wordseek_core::LetterGrid
//! [`Puzzle`]: wordseek_core::Puzzle

pub mod assemble;
pub mod placer;
pub mod seed;

pub use self::{
    assemble::{DOCUMENT_VERSION, assemble},
    placer::{MAX_ATTEMPTS, Placement, place, place_with_seed},
    seed::{ParseSeedError, PuzzleSeed},
};
