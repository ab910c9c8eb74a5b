//! Tunable scheduling thresholds.

/// Thresholds for the go/no-go generation decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryPolicy {
    /// Below this total, generation always runs.
    pub min_puzzles: usize,
    /// At or above this total, generation never runs.
    pub max_puzzles: usize,
    /// Minimum consumption rate (percent) required to justify adding stock
    /// once `min_puzzles` is reached.
    pub min_consumption_rate: f64,
    /// Minimum stored puzzles per difficulty tier.
    pub min_per_difficulty: usize,
    /// Minimum stored puzzles per theme.
    pub min_per_theme: usize,
}

impl Default for InventoryPolicy {
    fn default() -> Self {
        Self {
            min_puzzles: 30,
            max_puzzles: 200,
            min_consumption_rate: 20.0,
            min_per_difficulty: 8,
            min_per_theme: 3,
        }
    }
}

/// Thresholds for per-level priority ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelPolicy {
    /// Below this count a level is critically low.
    pub min_per_level: usize,
    /// Count the scheduler tops levels up towards.
    pub target_per_level: usize,
    /// At or above this count a level is never scheduled.
    pub max_per_level: usize,
}

impl Default for LevelPolicy {
    fn default() -> Self {
        Self {
            min_per_level: 2,
            target_per_level: 5,
            max_per_level: 10,
        }
    }
}
