//! Per-level difficulty configuration and the canonical level table.

use serde::{Deserialize, Serialize};

use crate::Direction;

/// Difficulty tier of a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyTier {
    /// Common, everyday vocabulary.
    Simple,
    /// Moderately challenging vocabulary.
    Medium,
    /// Advanced, less common vocabulary.
    Hard,
}

impl DifficultyTier {
    /// All tiers, easiest first.
    pub const ALL: [Self; 3] = [Self::Simple, Self::Medium, Self::Hard];

    /// Stable name used in stored puzzle documents.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Tunable parameters for one difficulty step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    /// Level number, 1-based.
    pub level: u8,
    /// Side length of the letter grid.
    pub grid_size: usize,
    /// Minimum number of words to request for a puzzle.
    pub min_words: usize,
    /// Maximum number of words to request for a puzzle.
    pub max_words: usize,
    /// Difficulty tier this level belongs to.
    pub tier: DifficultyTier,
    /// Directions words may run along at this level.
    pub directions: &'static [Direction],
}

/// An invalid level configuration.
///
/// Raised before any placement is attempted; a malformed level must never
/// reach the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    /// The level enables no placement directions.
    #[display("level {level}: no placement directions enabled")]
    EmptyDirections {
        /// Offending level number.
        level: u8,
    },
    /// The word-count range has `min > max`.
    #[display("level {level}: word count range {min}..={max} is inverted")]
    WordRangeInverted {
        /// Offending level number.
        level: u8,
        /// Configured minimum word count.
        min: usize,
        /// Configured maximum word count.
        max: usize,
    },
    /// The grid has no cells.
    #[display("level {level}: grid size must be positive")]
    ZeroGridSize {
        /// Offending level number.
        level: u8,
    },
    /// The level number does not appear in the table.
    #[display("unknown level {level}")]
    UnknownLevel {
        /// Requested level number.
        level: u8,
    },
}

impl LevelConfig {
    /// Looks up a level in the canonical table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownLevel`] if `level` is not in the table.
    pub fn get(level: u8) -> Result<&'static Self, ConfigError> {
        LEVELS
            .iter()
            .find(|config| config.level == level)
            .ok_or(ConfigError::UnknownLevel { level })
    }

    /// Checks structural invariants of this configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first violated invariant.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize { level: self.level });
        }
        if self.directions.is_empty() {
            return Err(ConfigError::EmptyDirections { level: self.level });
        }
        if self.min_words > self.max_words {
            return Err(ConfigError::WordRangeInverted {
                level: self.level,
                min: self.min_words,
                max: self.max_words,
            });
        }
        Ok(())
    }
}

/// Horizontal and vertical only; the beginner direction set.
const ORTHOGONAL: &[Direction] = &[Direction::Horizontal, Direction::Vertical];

/// All four directions.
const ALL_DIRECTIONS: &[Direction] = &Direction::ALL;

/// Version of the level table.
///
/// The table is the single source of truth for level tuning; hosts that need
/// an older shape migrate at their own policy layer.
pub const LEVELS_VERSION: u32 = 2;

macro_rules! level {
    ($level:expr, $size:expr, $min:expr, $max:expr, $tier:ident, $dirs:expr) => {
        LevelConfig {
            level: $level,
            grid_size: $size,
            min_words: $min,
            max_words: $max,
            tier: DifficultyTier::$tier,
            directions: $dirs,
        }
    };
}

/// The canonical level table: 30 levels, easiest first.
///
/// Grid sizes and word-count ranges are non-decreasing with level; the
/// first five levels restrict words to horizontal and vertical runs.
pub const LEVELS: [LevelConfig; 30] = [
    // Levels 1-5: beginner, 5x5 to 7x7, horizontal/vertical only
    level!(1, 5, 3, 4, Simple, ORTHOGONAL),
    level!(2, 5, 4, 5, Simple, ORTHOGONAL),
    level!(3, 6, 4, 5, Simple, ORTHOGONAL),
    level!(4, 6, 5, 6, Simple, ORTHOGONAL),
    level!(5, 7, 5, 6, Simple, ORTHOGONAL),
    // Levels 6-10: easy, 8x8, diagonals enabled
    level!(6, 8, 6, 7, Simple, ALL_DIRECTIONS),
    level!(7, 8, 6, 8, Simple, ALL_DIRECTIONS),
    level!(8, 8, 7, 8, Simple, ALL_DIRECTIONS),
    level!(9, 8, 7, 9, Simple, ALL_DIRECTIONS),
    level!(10, 8, 8, 10, Simple, ALL_DIRECTIONS),
    // Levels 11-15: medium, 10x10
    level!(11, 10, 8, 10, Medium, ALL_DIRECTIONS),
    level!(12, 10, 9, 11, Medium, ALL_DIRECTIONS),
    level!(13, 10, 10, 12, Medium, ALL_DIRECTIONS),
    level!(14, 10, 10, 12, Medium, ALL_DIRECTIONS),
    level!(15, 10, 11, 13, Medium, ALL_DIRECTIONS),
    // Levels 16-20: hard, 12x12
    level!(16, 12, 10, 12, Hard, ALL_DIRECTIONS),
    level!(17, 12, 11, 13, Hard, ALL_DIRECTIONS),
    level!(18, 12, 12, 14, Hard, ALL_DIRECTIONS),
    level!(19, 12, 13, 15, Hard, ALL_DIRECTIONS),
    level!(20, 12, 14, 16, Hard, ALL_DIRECTIONS),
    // Levels 21-25: very hard, 15x15
    level!(21, 15, 12, 15, Hard, ALL_DIRECTIONS),
    level!(22, 15, 13, 16, Hard, ALL_DIRECTIONS),
    level!(23, 15, 14, 17, Hard, ALL_DIRECTIONS),
    level!(24, 15, 15, 18, Hard, ALL_DIRECTIONS),
    level!(25, 15, 16, 19, Hard, ALL_DIRECTIONS),
    // Levels 26-30: expert, 15x15
    level!(26, 15, 16, 19, Hard, ALL_DIRECTIONS),
    level!(27, 15, 17, 20, Hard, ALL_DIRECTIONS),
    level!(28, 15, 18, 21, Hard, ALL_DIRECTIONS),
    level!(29, 15, 19, 22, Hard, ALL_DIRECTIONS),
    level!(30, 15, 20, 23, Hard, ALL_DIRECTIONS),
];
