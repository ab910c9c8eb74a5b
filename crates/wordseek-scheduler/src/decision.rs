//! The go/no-go generation decision.

use serde::Serialize;
use wordseek_core::DifficultyTier;

use crate::{InventoryPolicy, InventorySnapshot};

/// Why the decision came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum DecisionReason {
    /// The inventory is at or above its cap.
    #[display("inventory_full")]
    InventoryFull,
    /// Existing stock is under-played; adding more would be wasted.
    #[display("low_consumption")]
    LowConsumption,
    /// The inventory is below its floor.
    #[display("low_inventory")]
    LowInventory,
    /// One or more difficulty tiers are under-stocked.
    #[display("unbalanced_difficulty")]
    UnbalancedDifficulty,
    /// One or more themes are under-stocked.
    #[display("unbalanced_theme")]
    UnbalancedTheme,
    /// Nothing to do.
    #[display("inventory_healthy")]
    InventoryHealthy,
}

/// The outcome of [`evaluate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// Whether a generation run should happen at all.
    pub should_generate: bool,
    /// The first rule that matched.
    pub reason: DecisionReason,
    /// How many puzzles the run should aim for, when generating.
    pub target_count: Option<usize>,
    /// Tiers to concentrate on, when the trigger was a tier imbalance.
    pub focus_difficulties: Option<Vec<DifficultyTier>>,
    /// Themes to concentrate on, when the trigger was a theme imbalance.
    pub focus_themes: Option<Vec<String>>,
}

impl Decision {
    fn skip(reason: DecisionReason) -> Self {
        Self {
            should_generate: false,
            reason,
            target_count: None,
            focus_difficulties: None,
            focus_themes: None,
        }
    }

    fn generate(reason: DecisionReason, target_count: usize) -> Self {
        Self {
            should_generate: true,
            reason,
            target_count: Some(target_count),
            focus_difficulties: None,
            focus_themes: None,
        }
    }
}

/// Decides whether new puzzles are needed.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. inventory at cap → skip, `inventory_full`
/// 2. floor reached but stock under-played → skip, `low_consumption`
/// 3. below floor → generate at least 14, `low_inventory`
/// 4. a tier under `min_per_difficulty` → generate for those tiers,
///    `unbalanced_difficulty`
/// 5. a theme (from `themes`) under `min_per_theme` → generate for those
///    themes, `unbalanced_theme`
/// 6. otherwise → skip, `inventory_healthy`
///
/// An empty inventory reads as fully consumed (see
/// [`InventorySnapshot::consumption_rate`]), so rule 2 never blocks
/// bootstrap generation.
#[must_use]
pub fn evaluate(
    snapshot: &InventorySnapshot,
    policy: &InventoryPolicy,
    themes: &[String],
) -> Decision {
    if snapshot.total_puzzles >= policy.max_puzzles {
        return Decision::skip(DecisionReason::InventoryFull);
    }

    if snapshot.total_puzzles >= policy.min_puzzles
        && snapshot.consumption_rate() < policy.min_consumption_rate
    {
        return Decision::skip(DecisionReason::LowConsumption);
    }

    if snapshot.total_puzzles < policy.min_puzzles {
        let shortfall = policy.min_puzzles - snapshot.total_puzzles;
        return Decision::generate(DecisionReason::LowInventory, shortfall.max(14));
    }

    let low_difficulties: Vec<DifficultyTier> = DifficultyTier::ALL
        .into_iter()
        .filter(|tier| snapshot.difficulty_count(*tier) < policy.min_per_difficulty)
        .collect();
    if !low_difficulties.is_empty() {
        let target = low_difficulties.len() * (policy.min_per_difficulty + 2);
        return Decision {
            focus_difficulties: Some(low_difficulties),
            ..Decision::generate(DecisionReason::UnbalancedDifficulty, target)
        };
    }

    let low_themes: Vec<String> = themes
        .iter()
        .filter(|theme| snapshot.theme_count(theme) < policy.min_per_theme)
        .cloned()
        .collect();
    if !low_themes.is_empty() {
        let target = low_themes.len() * policy.min_per_theme;
        return Decision {
            focus_themes: Some(low_themes),
            ..Decision::generate(DecisionReason::UnbalancedTheme, target)
        };
    }

    Decision::skip(DecisionReason::InventoryHealthy)
}
