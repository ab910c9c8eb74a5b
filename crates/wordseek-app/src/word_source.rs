//! Word-list acquisition at the system boundary.
//!
//! The placement engine takes any word list; this module owns where lists
//! come from and the validation every source must pass: uppercase letters
//! only, at least three letters, no longer than the grid allows, distinct,
//! and accompanied by one hint per word.

use std::{collections::BTreeMap, fs, path::Path};

use rand::{Rng, RngExt};
use serde::Deserialize;
use wordseek_core::LevelConfig;

/// Longest word any level accepts, regardless of grid size.
const MAX_WORD_LEN: usize = 12;

/// A validated word list with its parallel hints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WordList {
    /// Distinct uppercase words.
    pub(crate) words: Vec<String>,
    /// One hint per word, same order.
    pub(crate) hints: Vec<String>,
}

/// A word source that could not produce a usable list.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum WordSourceError {
    /// The source has no entries for the requested theme.
    #[display("no word bank for theme {theme:?}")]
    #[from(skip)]
    UnknownTheme {
        /// The requested theme.
        theme: String,
    },
    /// Validation left no usable words for the requested level.
    #[display("no usable words for theme {theme:?} at level {level}")]
    #[from(skip)]
    NoUsableWords {
        /// The requested theme.
        theme: String,
        /// The requested level.
        level: u8,
    },
    /// The bank file could not be read.
    #[display("reading word bank: {_0}")]
    Io(std::io::Error),
    /// The bank file could not be parsed.
    #[display("parsing word bank: {_0}")]
    Parse(serde_json::Error),
}

/// Where word lists come from.
///
/// Implementations are responsible for returning lists that already satisfy
/// the validation contract; [`normalize`] does the heavy lifting.
pub(crate) trait WordSource {
    /// Produces a word list for one (theme, level) target.
    fn fetch(
        &mut self,
        theme: &str,
        config: &LevelConfig,
    ) -> Result<WordList, WordSourceError>;
}

/// One themed entry in a word bank file.
#[derive(Debug, Clone, Deserialize)]
struct BankEntry {
    word: String,
    hint: String,
}

/// A word source backed by a JSON file of per-theme word banks.
///
/// File shape: `{"Animals": [{"word": "cat", "hint": "Purrs"}, ...], ...}`.
/// Each fetch samples a level-appropriate number of words uniformly from the
/// theme's bank.
#[derive(Debug)]
pub(crate) struct FileWordSource<R> {
    banks: BTreeMap<String, Vec<BankEntry>>,
    rng: R,
}

impl<R: Rng> FileWordSource<R> {
    /// Loads the bank file.
    ///
    /// # Errors
    ///
    /// Returns [`WordSourceError::Io`] or [`WordSourceError::Parse`] if the
    /// file cannot be read or is not a valid bank document.
    pub(crate) fn load(path: &Path, rng: R) -> Result<Self, WordSourceError> {
        let text = fs::read_to_string(path)?;
        let banks = serde_json::from_str(&text)?;
        Ok(Self { banks, rng })
    }
}

impl<R: Rng> WordSource for FileWordSource<R> {
    fn fetch(
        &mut self,
        theme: &str,
        config: &LevelConfig,
    ) -> Result<WordList, WordSourceError> {
        let bank = self
            .banks
            .get(theme)
            .filter(|entries| !entries.is_empty())
            .ok_or_else(|| WordSourceError::UnknownTheme {
                theme: theme.to_owned(),
            })?;

        let words: Vec<String> = bank.iter().map(|entry| entry.word.clone()).collect();
        let hints: Vec<String> = bank.iter().map(|entry| entry.hint.clone()).collect();
        let list = normalize(&words, &hints, config.grid_size);
        if list.words.is_empty() {
            return Err(WordSourceError::NoUsableWords {
                theme: theme.to_owned(),
                level: config.level,
            });
        }

        // Sample a level-appropriate word count, as many as the bank allows.
        let count = self
            .rng
            .random_range(config.min_words..=config.max_words)
            .min(list.words.len());
        let mut indices: Vec<usize> = (0..list.words.len()).collect();
        for i in 0..count {
            let j = self.rng.random_range(i..indices.len());
            indices.swap(i, j);
        }
        Ok(WordList {
            words: indices[..count]
                .iter()
                .map(|&i| list.words[i].clone())
                .collect(),
            hints: indices[..count]
                .iter()
                .map(|&i| list.hints[i].clone())
                .collect(),
        })
    }
}

/// Cleans a raw word/hint pairing into the form the engine accepts.
///
/// Uppercases, strips everything but ASCII letters, then drops words that
/// end up shorter than three letters or longer than the grid allows,
/// removing their hints in the same pass. Duplicates keep their first
/// occurrence.
pub(crate) fn normalize(words: &[String], hints: &[String], grid_size: usize) -> WordList {
    let max_len = MAX_WORD_LEN.min(grid_size);
    let mut seen = Vec::new();
    let mut out_words = Vec::new();
    let mut out_hints = Vec::new();

    for (i, raw) in words.iter().enumerate() {
        let word: String = raw
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if word.len() < 3 || word.len() > max_len || seen.contains(&word) {
            continue;
        }
        seen.push(word.clone());
        out_words.push(word);
        out_hints.push(hints.get(i).cloned().unwrap_or_default());
    }

    WordList {
        words: out_words,
        hints: out_hints,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(words: &[&str]) -> Vec<String> {
        words.iter().map(|&word| word.to_owned()).collect()
    }

    #[test]
    fn test_normalize_uppercases_and_strips() {
        let list = normalize(
            &raw(&["sea horse", "dog!", "ox"]),
            &raw(&["Swims upright", "Barks", "Plows"]),
            10,
        );
        assert_eq!(list.words, ["SEAHORSE", "DOG"]);
        // The dropped word's hint goes with it.
        assert_eq!(list.hints, ["Swims upright", "Barks"]);
    }

    #[test]
    fn test_normalize_caps_length_at_grid_size() {
        let list = normalize(&raw(&["ELEPHANT", "CAT"]), &raw(&["Big", "Small"]), 5);
        assert_eq!(list.words, ["CAT"]);
    }

    #[test]
    fn test_normalize_caps_length_at_twelve_for_big_grids() {
        let list = normalize(
            &raw(&["EXTRAORDINARILY", "CONSTELLATION", "TELESCOPE"]),
            &raw(&["15 letters", "13 letters", "9 letters"]),
            15,
        );
        assert_eq!(list.words, ["TELESCOPE"]);
    }

    #[test]
    fn test_normalize_dedupes_keeping_first() {
        let list = normalize(
            &raw(&["cat", "CAT", "dog"]),
            &raw(&["first", "second", "third"]),
            10,
        );
        assert_eq!(list.words, ["CAT", "DOG"]);
        assert_eq!(list.hints, ["first", "third"]);
    }
}
