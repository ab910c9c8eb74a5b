//! The generation run: decision, plan, and per-target generation.

use std::{path::Path, time::Instant};

use rand::{Rng, RngExt};
use serde::Serialize;
use wordseek_core::{ConfigError, DifficultyTier, LevelConfig};
use wordseek_generator::{assemble, place};
use wordseek_scheduler::{DecisionReason, evaluate, prioritize};

use crate::{
    config::RunConfig,
    sink::{PuzzleSink, SinkError},
    telemetry::Telemetry,
    word_source::{WordSource, WordSourceError},
};

/// One puzzle's outcome within a run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunEntry {
    pub(crate) success: bool,
    pub(crate) theme: String,
    pub(crate) level: u8,
    pub(crate) difficulty: DifficultyTier,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) puzzle_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) word_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) error: Option<String>,
}

/// The structured record written once per run.
///
/// Counters live here, not in process-wide state, so a run is a value that
/// can be inspected and tested like any other.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RunReport {
    pub(crate) skipped: bool,
    pub(crate) reason: DecisionReason,
    pub(crate) entries: Vec<RunEntry>,
    pub(crate) success_count: usize,
    pub(crate) error_count: usize,
    pub(crate) duration_seconds: f64,
    pub(crate) timestamp: String,
}

impl RunReport {
    fn new(skipped: bool, reason: DecisionReason, entries: Vec<RunEntry>, started: Instant) -> Self {
        let success_count = entries.iter().filter(|entry| entry.success).count();
        let error_count = entries.len() - success_count;
        Self {
            skipped,
            reason,
            entries,
            success_count,
            error_count,
            duration_seconds: started.elapsed().as_secs_f64(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum GenerationError {
    #[display("{_0}")]
    WordSource(WordSourceError),
    #[display("{_0}")]
    Config(ConfigError),
    #[display("{_0}")]
    Sink(SinkError),
}

/// Executes one full generation run.
///
/// Evaluates the inventory, ranks levels, and walks the ranked plan,
/// consuming each entry's needed slots up to the run-wide cap. Each slot
/// draws a theme uniformly at random from the allowed set. Failures in word
/// acquisition, placement configuration, or persistence are recorded per
/// puzzle and never abort the rest of the run.
pub(crate) fn run(
    config: &RunConfig,
    telemetry: &Telemetry,
    word_source: &mut impl WordSource,
    sink: &mut impl PuzzleSink,
    rng: &mut impl Rng,
) -> RunReport {
    let started = Instant::now();

    let decision = evaluate(
        &telemetry.inventory,
        &config.inventory_policy,
        &config.themes,
    );
    log::info!(
        "inventory: {} puzzles, {:.1}% consumption -> {}",
        telemetry.inventory.total_puzzles,
        telemetry.inventory.consumption_rate(),
        decision.reason
    );

    if !decision.should_generate && !config.force {
        return RunReport::new(true, decision.reason, Vec::new(), started);
    }
    if config.force {
        log::info!("force generation enabled; inventory checks bypassed");
    }

    let target = decision
        .target_count
        .unwrap_or(config.max_puzzles_per_run)
        .min(config.max_puzzles_per_run);

    let mut levels = config.levels();
    if let Some(focus) = &decision.focus_difficulties {
        levels.retain(|level| focus.contains(&level.tier));
    }
    let themes = decision.focus_themes.as_deref().unwrap_or(&config.themes);
    if themes.is_empty() {
        log::warn!("no themes to generate for; nothing to do");
        return RunReport::new(false, decision.reason, Vec::new(), started);
    }

    let plan = prioritize(
        &telemetry.inventory,
        &telemetry.progress,
        &config.level_policy,
        &levels,
    );
    log::info!(
        "{} of {} levels need puzzles; generating up to {target}",
        plan.len(),
        levels.len()
    );

    let mut entries = Vec::new();
    'plan: for entry in &plan {
        log::debug!(
            "level {} scored {} ({}); needs {}",
            entry.config.level,
            entry.score,
            entry
                .reasons
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", "),
            entry.needed
        );
        for _ in 0..entry.needed {
            if entries.len() >= target {
                break 'plan;
            }
            let theme = &themes[rng.random_range(0..themes.len())];
            entries.push(generate_one(theme, &entry.config, word_source, sink, rng));
        }
    }

    RunReport::new(false, decision.reason, entries, started)
}

fn generate_one(
    theme: &str,
    config: &LevelConfig,
    word_source: &mut impl WordSource,
    sink: &mut impl PuzzleSink,
    rng: &mut impl Rng,
) -> RunEntry {
    let entry = RunEntry {
        success: false,
        theme: theme.to_owned(),
        level: config.level,
        difficulty: config.tier,
        puzzle_id: None,
        word_count: None,
        error: None,
    };
    match try_generate(theme, config, word_source, sink, rng) {
        Ok((puzzle_id, word_count)) => {
            log::info!(
                "generated {puzzle_id}: {theme} level {} with {word_count} words",
                config.level
            );
            RunEntry {
                success: true,
                puzzle_id: Some(puzzle_id),
                word_count: Some(word_count),
                ..entry
            }
        }
        Err(err) => {
            log::error!("{theme} level {}: {err}", config.level);
            RunEntry {
                error: Some(err.to_string()),
                ..entry
            }
        }
    }
}

fn try_generate(
    theme: &str,
    config: &LevelConfig,
    word_source: &mut impl WordSource,
    sink: &mut impl PuzzleSink,
    rng: &mut impl Rng,
) -> Result<(String, usize), GenerationError> {
    let list = word_source.fetch(theme, config)?;
    let placement = place(&list.words, config, rng)?;
    if placement.placed.len() < list.words.len() {
        log::warn!(
            "placed {} of {} words for {theme} level {}",
            placement.placed.len(),
            list.words.len(),
            config.level
        );
    }
    let word_count = placement.placed.len();
    let puzzle = assemble(theme, config, &list.words, &list.hints, placement);
    let puzzle_id = sink.store(&puzzle)?;
    Ok((puzzle_id, word_count))
}

/// Writes the run report next to the other run artifacts.
pub(crate) fn write_report(path: &Path, report: &RunReport) -> std::io::Result<()> {
    let text = serde_json::to_string_pretty(report).map_err(std::io::Error::other)?;
    std::fs::write(path, text)
}
