//! Per-level priority ranking of replenishment targets.

use wordseek_core::LevelConfig;

use crate::{InventorySnapshot, LevelPolicy, UserProgressSnapshot};

/// Why a level scored the way it did.
///
/// Renders as the tag strings recorded in run logs (`critical_low`,
/// `3_users_here`, `7_recent_plays`, `below_target`, `at_max`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum PriorityReason {
    /// The level is below its minimum stock.
    #[display("critical_low")]
    CriticalLow,
    /// Users are currently at this level and stock is below target.
    #[display("{_0}_users_here")]
    UsersHere(u32),
    /// The level saw recent plays and stock is below target.
    #[display("{_0}_recent_plays")]
    RecentPlays(u32),
    /// Stock is below target.
    #[display("below_target")]
    BelowTarget,
    /// The level is at or above its cap and is never scheduled.
    #[display("at_max")]
    AtMax,
}

/// One level's place in the ranked remediation plan.
///
/// Computed fresh each scheduling run; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriorityEntry {
    /// The level this entry is for.
    pub config: LevelConfig,
    /// Stored puzzle count at this level.
    pub current_count: usize,
    /// Users currently at this level.
    pub users_here: u32,
    /// Recent plays at this level.
    pub recent_plays: u32,
    /// Urgency score; higher means sooner.
    pub score: u32,
    /// Which signals contributed to the score.
    pub reasons: Vec<PriorityReason>,
    /// How many puzzles to generate for this level.
    pub needed: usize,
}

/// Ranks `levels` by how urgently each needs new puzzles.
///
/// Per level: +100 when stock is below `min_per_level`; +50 plus 5 per user
/// when users sit at an under-target level; +40 plus one per recent play
/// when an under-target level is being played; +20 whenever stock is below
/// target. A level at or above `max_per_level` is forced to score zero and
/// is never scheduled, regardless of other signals. Levels scoring zero are
/// omitted.
///
/// The result is sorted by score, highest first; the sort is stable over
/// the input order, so when callers pass levels in ascending order, ties
/// resolve to the lower level.
#[must_use]
pub fn prioritize(
    snapshot: &InventorySnapshot,
    progress: &UserProgressSnapshot,
    policy: &LevelPolicy,
    levels: &[LevelConfig],
) -> Vec<PriorityEntry> {
    let mut entries: Vec<PriorityEntry> = levels
        .iter()
        .filter_map(|config| {
            let current_count = snapshot.level_count(config.level);
            let users_here = progress.users_at(config.level);
            let recent_plays = progress.recent_plays_at(config.level);

            let mut score: u32 = 0;
            let mut reasons = Vec::new();

            if current_count < policy.min_per_level {
                score += 100;
                reasons.push(PriorityReason::CriticalLow);
            }
            if users_here > 0 && current_count < policy.target_per_level {
                score = score.saturating_add(50 + users_here.saturating_mul(5));
                reasons.push(PriorityReason::UsersHere(users_here));
            }
            if recent_plays > 0 && current_count < policy.target_per_level {
                score = score.saturating_add(40 + recent_plays);
                reasons.push(PriorityReason::RecentPlays(recent_plays));
            }
            if current_count < policy.target_per_level {
                score += 20;
                reasons.push(PriorityReason::BelowTarget);
            }
            if current_count >= policy.max_per_level {
                score = 0;
                reasons = vec![PriorityReason::AtMax];
            }

            (score > 0).then(|| PriorityEntry {
                config: *config,
                current_count,
                users_here,
                recent_plays,
                score,
                reasons,
                needed: (policy.max_per_level.saturating_sub(current_count))
                    .min(policy.target_per_level.saturating_sub(current_count)),
            })
        })
        .collect();

    entries.sort_by_key(|entry| std::cmp::Reverse(entry.score));
    entries
}
