//! Assembly of a placement into a persistable puzzle document.

use chrono::Utc;
use wordseek_core::{LevelConfig, Puzzle, PuzzleWord};

use crate::Placement;

/// Schema version stamped into every assembled document.
pub const DOCUMENT_VERSION: &str = "2.0";

/// Combines a placement with the word list's hints into a [`Puzzle`].
///
/// `words` and `hints` are the parallel sequences the word source returned.
/// Each placed word is matched to its hint by word text (first match); a
/// placed word with no matching hint gets a `Find: {word}` fallback rather
/// than failing, so hint lookup can never abort assembly.
///
/// All randomness happens upstream, in word selection and placement.
#[must_use]
pub fn assemble(
    theme: &str,
    config: &LevelConfig,
    words: &[String],
    hints: &[String],
    placement: Placement,
) -> Puzzle {
    let Placement { grid, placed } = placement;

    let words = placed
        .into_iter()
        .map(|word| {
            let hint = words
                .iter()
                .position(|candidate| *candidate == word.word)
                .and_then(|i| hints.get(i))
                .cloned()
                .unwrap_or_else(|| format!("Find: {}", word.word));
            PuzzleWord {
                word: word.word,
                start_row: word.start_row,
                start_col: word.start_col,
                direction: word.direction,
                hint,
            }
        })
        .collect();

    Puzzle {
        theme: theme.to_owned(),
        difficulty: config.tier,
        level: config.level,
        grid_size: config.grid_size,
        grid: grid.to_rows(),
        words,
        created_by: "wordseek".to_owned(),
        generated_date: Utc::now().to_rfc3339(),
        popularity: 0,
        completion_count: 0,
        average_completion_time: 0.0,
        tags: vec![
            theme.to_lowercase(),
            config.tier.name().to_owned(),
            format!("level{}", config.level),
        ],
        version: DOCUMENT_VERSION.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use wordseek_core::LevelConfig;

    use super::*;
    use crate::{PuzzleSeed, place_with_seed};

    fn sample_placement(words: &[&str]) -> Placement {
        let config = LevelConfig::get(5).unwrap();
        place_with_seed(words, config, PuzzleSeed::from_bytes([9; 32])).unwrap()
    }

    #[test]
    fn test_hints_are_matched_by_word_text() {
        let config = LevelConfig::get(5).unwrap();
        let words = vec!["CAT".to_owned(), "DOG".to_owned()];
        let hints = vec!["Purrs".to_owned(), "Barks".to_owned()];
        let placement = sample_placement(&["CAT", "DOG"]);

        let puzzle = assemble("Animals", config, &words, &hints, placement);
        for word in &puzzle.words {
            let expected = match word.word.as_str() {
                "CAT" => "Purrs",
                "DOG" => "Barks",
                other => panic!("unexpected word {other}"),
            };
            assert_eq!(word.hint, expected);
        }
    }

    #[test]
    fn test_missing_hint_falls_back_instead_of_failing() {
        let config = LevelConfig::get(5).unwrap();
        let words = vec!["CAT".to_owned()];
        let placement = sample_placement(&["CAT", "DOG"]);

        let puzzle = assemble("Animals", config, &words, &[], placement);
        for word in &puzzle.words {
            assert_eq!(word.hint, format!("Find: {}", word.word));
        }
    }

    #[test]
    fn test_document_metadata() {
        let config = LevelConfig::get(5).unwrap();
        let placement = sample_placement(&["CAT"]);

        let puzzle = assemble("Animals", config, &[], &[], placement);
        assert_eq!(puzzle.theme, "Animals");
        assert_eq!(puzzle.level, 5);
        assert_eq!(puzzle.grid_size, config.grid_size);
        assert_eq!(puzzle.grid.len(), config.grid_size);
        assert_eq!(puzzle.tags, ["animals", "simple", "level5"]);
        assert_eq!(puzzle.version, DOCUMENT_VERSION);
        assert_eq!(puzzle.popularity, 0);
        assert_eq!(puzzle.completion_count, 0);
    }
}
