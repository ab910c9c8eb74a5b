//! The grid placement engine.

use rand::{Rng, RngExt};
use wordseek_core::{ConfigError, Direction, LetterGrid, LevelConfig, PlacedWord};

use crate::PuzzleSeed;

/// Retry budget per word.
///
/// Dense grids with few directions occasionally exhaust this; the word is
/// then dropped, which is accepted behavior rather than a failure.
pub const MAX_ATTEMPTS: usize = 200;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// The outcome of one placement run: a fully filled grid plus the record of
/// every word that made it in.
///
/// Dropped words are observable only by comparing the input word count to
/// `placed.len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// The letter grid, every cell filled.
    pub grid: LetterGrid,
    /// Successfully placed words, in placement order (longest first).
    pub placed: Vec<PlacedWord>,
}

/// Lays `words` into a fresh grid for the given level.
///
/// Words are tried longest-first: long words have the fewest valid
/// (position, direction) combinations, so placing them while the grid is
/// emptiest maximizes the chance of success. Each word gets up to
/// [`MAX_ATTEMPTS`] uniform random (row, column, direction) draws from the
/// level's allowed set; a draw succeeds when every cell of the span is in
/// bounds and either unwritten or already holding the required letter, which
/// is what lets words cross on shared letters. Cells still unwritten after
/// all words are attempted are filled with independent uniform draws from
/// `A..=Z`.
///
/// Duplicate input words are each attempted independently. A word longer
/// than the grid side can never fit and always drops.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the level configuration is malformed, in
/// particular when its direction set is empty. Validation happens before
/// any placement attempt.
pub fn place<S>(
    words: &[S],
    config: &LevelConfig,
    rng: &mut impl Rng,
) -> Result<Placement, ConfigError>
where
    S: AsRef<str>,
{
    config.validate()?;

    let size = config.grid_size;
    let mut grid = LetterGrid::new(size);
    let mut placed = Vec::with_capacity(words.len());

    let mut sorted: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    sorted.sort_by_key(|word| std::cmp::Reverse(word.len()));

    for word in sorted {
        let mut success = false;
        for _ in 0..MAX_ATTEMPTS {
            let start_row = rng.random_range(0..size);
            let start_col = rng.random_range(0..size);
            let direction = config.directions[rng.random_range(0..config.directions.len())];

            if can_place(&grid, word, start_row, start_col, direction) {
                write_word(&mut grid, word, start_row, start_col, direction);
                placed.push(PlacedWord {
                    word: word.to_owned(),
                    start_row,
                    start_col,
                    direction,
                });
                success = true;
                break;
            }
        }
        if !success {
            log::warn!("could not place word {word} after {MAX_ATTEMPTS} attempts");
        }
    }

    let unwritten: Vec<_> = grid.unwritten().collect();
    for (row, col) in unwritten {
        grid.set(row, col, ALPHABET[rng.random_range(0..ALPHABET.len())]);
    }

    Ok(Placement { grid, placed })
}

/// Lays `words` into a fresh grid, reproducibly.
///
/// The same seed, word list, and level always produce the same grid and
/// placements.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the level configuration is malformed.
pub fn place_with_seed<S>(
    words: &[S],
    config: &LevelConfig,
    seed: PuzzleSeed,
) -> Result<Placement, ConfigError>
where
    S: AsRef<str>,
{
    place(words, config, &mut seed.rng())
}

/// A span is feasible when every cell is in bounds and either unwritten or
/// already holding the letter the word needs there.
fn can_place(
    grid: &LetterGrid,
    word: &str,
    start_row: usize,
    start_col: usize,
    direction: Direction,
) -> bool {
    for (i, letter) in word.bytes().enumerate() {
        let Some((row, col)) = direction.step(start_row, start_col, i) else {
            return false;
        };
        if !grid.contains(row, col) {
            return false;
        }
        if grid.cell(row, col).is_some_and(|existing| existing != letter) {
            return false;
        }
    }
    true
}

fn write_word(
    grid: &mut LetterGrid,
    word: &str,
    start_row: usize,
    start_col: usize,
    direction: Direction,
) {
    for (i, letter) in word.bytes().enumerate() {
        let (row, col) = direction
            .step(start_row, start_col, i)
            .expect("span was checked before writing");
        grid.set(row, col, letter);
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use wordseek_core::LEVELS;

    use super::*;

    fn seeded(byte: u8) -> PuzzleSeed {
        PuzzleSeed::from_bytes([byte; 32])
    }

    /// Every placed word must read back from the grid along its recorded
    /// vector.
    fn assert_placements_read_back(placement: &Placement) {
        for word in &placement.placed {
            let span = placement.grid.read_span(
                word.start_row,
                word.start_col,
                word.direction,
                word.word.len(),
            );
            assert_eq!(span.as_deref(), Some(word.word.as_str()), "{word:?}");
        }
    }

    #[test]
    fn test_two_short_words_fit_a_small_grid() {
        let config = LevelConfig::get(1).unwrap();
        let placement = place_with_seed(&["CAT", "DOG"], config, seeded(1)).unwrap();

        assert_eq!(placement.placed.len(), 2);
        assert!(placement.grid.is_filled());
        assert_placements_read_back(&placement);
    }

    #[test]
    fn test_word_longer_than_grid_is_dropped() {
        let config = LevelConfig::get(1).unwrap();
        let placement = place_with_seed(&["ELEPHANTS", "CAT"], config, seeded(2)).unwrap();

        assert!(placement.placed.iter().all(|word| word.word != "ELEPHANTS"));
        assert!(placement.grid.is_filled());
    }

    #[test]
    fn test_empty_direction_set_is_a_config_error() {
        let config = LevelConfig {
            directions: &[],
            ..LEVELS[0]
        };
        let result = place_with_seed(&["CAT"], &config, seeded(3));
        assert_eq!(result, Err(ConfigError::EmptyDirections { level: 1 }));
    }

    #[test]
    fn test_duplicate_words_are_attempted_independently() {
        let config = LevelConfig::get(5).unwrap();
        let placement = place_with_seed(&["OWL", "OWL"], config, seeded(4)).unwrap();

        // Both copies fit a near-empty 7x7 grid; they may even overlap.
        assert_eq!(placement.placed.len(), 2);
        assert_placements_read_back(&placement);
    }

    #[test]
    fn test_same_seed_reproduces_the_placement() {
        let config = LevelConfig::get(11).unwrap();
        let words = ["TELESCOPE", "SATELLITE", "GRAVITY", "ORBIT", "COMET"];

        let a = place_with_seed(&words, config, seeded(5)).unwrap();
        let b = place_with_seed(&words, config, seeded(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_beginner_levels_only_use_orthogonal_directions() {
        let config = LevelConfig::get(2).unwrap();
        let words = ["APPLE", "PEAR", "PLUM", "FIG"];
        let placement = place_with_seed(&words, config, seeded(6)).unwrap();

        for word in &placement.placed {
            assert!(
                matches!(
                    word.direction,
                    Direction::Horizontal | Direction::Vertical
                ),
                "{word:?}"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_grid_is_filled_and_placements_read_back(
            words in proptest::collection::vec("[A-Z]{3,8}", 1..10),
            seed in proptest::array::uniform32(any::<u8>()),
        ) {
            let config = LevelConfig::get(13).unwrap();
            let placement =
                place_with_seed(&words, config, PuzzleSeed::from_bytes(seed)).unwrap();

            prop_assert!(placement.grid.is_filled());
            prop_assert!(placement.placed.len() <= words.len());
            for word in &placement.placed {
                let span = placement.grid.read_span(
                    word.start_row,
                    word.start_col,
                    word.direction,
                    word.word.len(),
                );
                prop_assert_eq!(span.as_deref(), Some(word.word.as_str()));
            }
        }

        #[test]
        fn prop_oversized_words_never_place(
            seed in proptest::array::uniform32(any::<u8>()),
        ) {
            let config = LevelConfig::get(1).unwrap();
            let placement = place_with_seed(
                &["IMPOSSIBLY", "CAT"],
                config,
                PuzzleSeed::from_bytes(seed),
            ).unwrap();

            prop_assert!(placement.placed.iter().all(|word| word.word != "IMPOSSIBLY"));
        }
    }
}
