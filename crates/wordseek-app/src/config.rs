//! Run configuration: policy knobs, filters, and the theme catalog.
//!
//! Every knob has a default, can be overridden by environment variable, and
//! (where it makes sense interactively) by a command-line flag; flags win.

use std::str::FromStr;

use wordseek_core::{LEVELS, LevelConfig};
use wordseek_scheduler::{InventoryPolicy, LevelPolicy};

/// Themes puzzles are generated for when telemetry does not narrow them.
pub(crate) const DEFAULT_THEMES: [&str; 10] = [
    "Animals",
    "Countries",
    "Technology",
    "Food",
    "Sports",
    "Music",
    "Nature",
    "Movies",
    "Science",
    "History",
];

/// A level selection of the form `7` or `1-5`, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LevelFilter {
    start: u8,
    end: u8,
}

/// A level filter that is not `N` or `N-M`.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("level filter must be a level or a range like 1-5, got {text:?}")]
pub(crate) struct ParseLevelFilterError {
    text: String,
}

impl LevelFilter {
    pub(crate) fn contains(self, level: u8) -> bool {
        (self.start..=self.end).contains(&level)
    }
}

impl FromStr for LevelFilter {
    type Err = ParseLevelFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLevelFilterError { text: s.to_owned() };
        match s.split_once('-') {
            Some((start, end)) => {
                let start = start.trim().parse().map_err(|_| err())?;
                let end = end.trim().parse().map_err(|_| err())?;
                if start > end {
                    return Err(err());
                }
                Ok(Self { start, end })
            }
            None => {
                let level = s.trim().parse().map_err(|_| err())?;
                Ok(Self {
                    start: level,
                    end: level,
                })
            }
        }
    }
}

/// Everything a generation run needs to know, resolved from defaults,
/// environment, and command line.
#[derive(Debug, Clone)]
pub(crate) struct RunConfig {
    /// Theme catalog for this run.
    pub(crate) themes: Vec<String>,
    /// Thresholds for the go/no-go decision.
    pub(crate) inventory_policy: InventoryPolicy,
    /// Thresholds for per-level ranking.
    pub(crate) level_policy: LevelPolicy,
    /// Run-wide cap on generated puzzles.
    pub(crate) max_puzzles_per_run: usize,
    /// Generate even when the decision says not to.
    pub(crate) force: bool,
    /// Restrict generation to these levels.
    pub(crate) level_filter: Option<LevelFilter>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            themes: DEFAULT_THEMES.iter().map(|&theme| theme.to_owned()).collect(),
            inventory_policy: InventoryPolicy::default(),
            level_policy: LevelPolicy::default(),
            max_puzzles_per_run: 30,
            force: false,
            level_filter: None,
        }
    }
}

impl RunConfig {
    /// Resolves the configuration from environment variables.
    pub(crate) fn from_env() -> Self {
        let defaults = Self::default();
        let inventory = InventoryPolicy {
            min_puzzles: env_parse("MIN_PUZZLES", defaults.inventory_policy.min_puzzles),
            max_puzzles: env_parse("MAX_PUZZLES", defaults.inventory_policy.max_puzzles),
            min_consumption_rate: env_parse(
                "MIN_CONSUMPTION_RATE",
                defaults.inventory_policy.min_consumption_rate,
            ),
            min_per_difficulty: env_parse(
                "MIN_PER_DIFFICULTY",
                defaults.inventory_policy.min_per_difficulty,
            ),
            min_per_theme: env_parse("MIN_PER_THEME", defaults.inventory_policy.min_per_theme),
        };
        let level = LevelPolicy {
            min_per_level: env_parse("MIN_PER_LEVEL", defaults.level_policy.min_per_level),
            target_per_level: env_parse("TARGET_PER_LEVEL", defaults.level_policy.target_per_level),
            max_per_level: env_parse("MAX_PER_LEVEL", defaults.level_policy.max_per_level),
        };

        let themes = match std::env::var("THEME_FILTER") {
            Ok(theme) if !theme.is_empty() => vec![theme],
            _ => defaults.themes,
        };
        let level_filter = std::env::var("LEVEL_FILTER")
            .ok()
            .filter(|text| !text.is_empty())
            .and_then(|text| match text.parse() {
                Ok(filter) => Some(filter),
                Err(err) => {
                    log::warn!("ignoring LEVEL_FILTER: {err}");
                    None
                }
            });

        Self {
            themes,
            inventory_policy: inventory,
            level_policy: level,
            max_puzzles_per_run: env_parse("PUZZLE_COUNT", defaults.max_puzzles_per_run),
            force: std::env::var("FORCE_GENERATE").is_ok_and(|value| value == "true"),
            level_filter,
        }
    }

    /// The level table restricted to this run's filter.
    pub(crate) fn levels(&self) -> Vec<LevelConfig> {
        LEVELS
            .iter()
            .filter(|config| {
                self.level_filter
                    .is_none_or(|filter| filter.contains(config.level))
            })
            .copied()
            .collect()
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(value) => match value.parse() {
            Ok(parsed) => parsed,
            Err(_) => {
                log::warn!("ignoring unparsable {key}={value:?}");
                default
            }
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_filter_parses_single_level() {
        let filter: LevelFilter = "7".parse().unwrap();
        assert!(filter.contains(7));
        assert!(!filter.contains(6));
        assert!(!filter.contains(8));
    }

    #[test]
    fn test_level_filter_parses_range() {
        let filter: LevelFilter = "1-5".parse().unwrap();
        assert!(filter.contains(1));
        assert!(filter.contains(5));
        assert!(!filter.contains(6));
    }

    #[test]
    fn test_level_filter_rejects_garbage() {
        assert!("".parse::<LevelFilter>().is_err());
        assert!("five".parse::<LevelFilter>().is_err());
        assert!("5-1".parse::<LevelFilter>().is_err());
    }

    #[test]
    fn test_levels_honors_the_filter() {
        let config = RunConfig {
            level_filter: Some("1-5".parse().unwrap()),
            ..RunConfig::default()
        };
        let levels = config.levels();
        assert_eq!(levels.len(), 5);
        assert!(levels.iter().all(|level| level.level <= 5));
    }

    #[test]
    fn test_no_filter_keeps_the_whole_table() {
        assert_eq!(RunConfig::default().levels().len(), LEVELS.len());
    }
}
