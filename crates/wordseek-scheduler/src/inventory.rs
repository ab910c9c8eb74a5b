//! Snapshot models for puzzle counts and user progress.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use wordseek_core::DifficultyTier;

/// Consumption rate assumed when there is nothing to play yet.
///
/// With zero puzzles the rate is undefined; treating it as high keeps the
/// low-consumption rule from ever blocking bootstrap generation.
pub const BOOTSTRAP_CONSUMPTION_RATE: f64 = 100.0;

/// Current puzzle inventory and usage counts, partitioned by difficulty,
/// theme, and level.
///
/// Derived read-only from external telemetry. A telemetry source that fails
/// partway must supply zero-valued fields rather than an error, so the
/// scheduler can still run conservatively; every field therefore defaults
/// to zero/empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InventorySnapshot {
    /// Total number of stored puzzles.
    pub total_puzzles: usize,
    /// Stored puzzle count per difficulty tier.
    pub counts_by_difficulty: BTreeMap<DifficultyTier, usize>,
    /// Stored puzzle count per theme.
    pub counts_by_theme: BTreeMap<String, usize>,
    /// Stored puzzle count per level.
    pub counts_by_level: BTreeMap<u8, usize>,
    /// Total play events recorded.
    pub total_played: usize,
    /// Total completed plays recorded.
    pub total_completed: usize,
}

impl InventorySnapshot {
    /// Play events per stored puzzle, as a percentage.
    ///
    /// [`BOOTSTRAP_CONSUMPTION_RATE`] when the inventory is empty.
    #[must_use]
    pub fn consumption_rate(&self) -> f64 {
        if self.total_puzzles == 0 {
            return BOOTSTRAP_CONSUMPTION_RATE;
        }
        #[expect(clippy::cast_precision_loss)]
        let rate = self.total_played as f64 / self.total_puzzles as f64 * 100.0;
        rate
    }

    /// Stored puzzle count for a difficulty tier, zero when unseen.
    #[must_use]
    pub fn difficulty_count(&self, tier: DifficultyTier) -> usize {
        self.counts_by_difficulty.get(&tier).copied().unwrap_or(0)
    }

    /// Stored puzzle count for a theme, zero when unseen.
    #[must_use]
    pub fn theme_count(&self, theme: &str) -> usize {
        self.counts_by_theme.get(theme).copied().unwrap_or(0)
    }

    /// Stored puzzle count for a level, zero when unseen.
    #[must_use]
    pub fn level_count(&self, level: u8) -> usize {
        self.counts_by_level.get(&level).copied().unwrap_or(0)
    }
}

/// Where users currently are in the level progression.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProgressSnapshot {
    /// Number of users currently at each level.
    pub users_at_level: BTreeMap<u8, u32>,
    /// Play events per level over a trailing window.
    pub recent_plays_at_level: BTreeMap<u8, u32>,
}

impl UserProgressSnapshot {
    /// Users currently at `level`, zero when unseen.
    #[must_use]
    pub fn users_at(&self, level: u8) -> u32 {
        self.users_at_level.get(&level).copied().unwrap_or(0)
    }

    /// Recent plays at `level`, zero when unseen.
    #[must_use]
    pub fn recent_plays_at(&self, level: u8) -> u32 {
        self.recent_plays_at_level.get(&level).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consumption_rate_is_played_over_stock() {
        let snapshot = InventorySnapshot {
            total_puzzles: 50,
            total_played: 10,
            ..InventorySnapshot::default()
        };
        assert!((snapshot.consumption_rate() - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_inventory_reads_as_high_consumption() {
        let snapshot = InventorySnapshot::default();
        assert!((snapshot.consumption_rate() - BOOTSTRAP_CONSUMPTION_RATE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_partitions_count_as_zero() {
        let snapshot = InventorySnapshot::default();
        assert_eq!(snapshot.difficulty_count(DifficultyTier::Hard), 0);
        assert_eq!(snapshot.theme_count("Animals"), 0);
        assert_eq!(snapshot.level_count(7), 0);
    }

    #[test]
    fn test_partial_telemetry_parses_with_defaults() {
        // A failing telemetry source reports only what it has; the rest
        // must come up zeroed rather than failing to parse.
        let snapshot: InventorySnapshot =
            serde_json::from_str(r#"{"totalPuzzles": 3}"#).unwrap();
        assert_eq!(snapshot.total_puzzles, 3);
        assert_eq!(snapshot.total_played, 0);
        assert!(snapshot.counts_by_theme.is_empty());
    }
}
