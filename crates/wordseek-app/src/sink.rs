//! Puzzle persistence at the system boundary.

use std::{
    fs,
    path::{Path, PathBuf},
};

use wordseek_core::Puzzle;

/// A puzzle that could not be persisted.
///
/// Reported per puzzle; a sink failure never aborts the rest of the run.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub(crate) enum SinkError {
    /// The document could not be written.
    #[display("writing puzzle: {_0}")]
    Io(std::io::Error),
    /// The document could not be serialized.
    #[display("serializing puzzle: {_0}")]
    Serialize(serde_json::Error),
}

/// Where assembled puzzles go.
pub(crate) trait PuzzleSink {
    /// Stores one puzzle and returns its opaque identifier.
    fn store(&mut self, puzzle: &Puzzle) -> Result<String, SinkError>;
}

/// A sink that writes one pretty-printed JSON document per puzzle.
#[derive(Debug)]
pub(crate) struct DirectorySink {
    dir: PathBuf,
    stamp: String,
    counter: usize,
}

impl DirectorySink {
    /// Creates the output directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`SinkError::Io`] if the directory cannot be created.
    pub(crate) fn create(dir: &Path) -> Result<Self, SinkError> {
        fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_owned(),
            stamp: chrono::Utc::now().format("%Y%m%d%H%M%S").to_string(),
            counter: 0,
        })
    }
}

impl PuzzleSink for DirectorySink {
    fn store(&mut self, puzzle: &Puzzle) -> Result<String, SinkError> {
        let id = format!(
            "{}-{}-level{:02}-{:04}",
            self.stamp,
            puzzle.theme.to_lowercase(),
            puzzle.level,
            self.counter
        );
        let text = serde_json::to_string_pretty(puzzle)?;
        fs::write(self.dir.join(format!("{id}.json")), text)?;
        self.counter += 1;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use wordseek_core::LevelConfig;
    use wordseek_generator::{PuzzleSeed, assemble, place_with_seed};

    use super::*;

    fn sample_puzzle() -> Puzzle {
        let config = LevelConfig::get(1).unwrap();
        let placement =
            place_with_seed(&["CAT", "DOG"], config, PuzzleSeed::from_bytes([1; 32])).unwrap();
        assemble("Animals", config, &[], &[], placement)
    }

    #[test]
    fn test_store_writes_a_readable_document() {
        let dir = std::env::temp_dir().join("wordseek-sink-test");
        let _ = fs::remove_dir_all(&dir);
        let mut sink = DirectorySink::create(&dir).unwrap();

        let id = sink.store(&sample_puzzle()).unwrap();
        let text = fs::read_to_string(dir.join(format!("{id}.json"))).unwrap();
        let parsed: Puzzle = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.theme, "Animals");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_ids_are_unique_within_a_run() {
        let dir = std::env::temp_dir().join("wordseek-sink-ids-test");
        let _ = fs::remove_dir_all(&dir);
        let mut sink = DirectorySink::create(&dir).unwrap();

        let puzzle = sample_puzzle();
        let a = sink.store(&puzzle).unwrap();
        let b = sink.store(&puzzle).unwrap();
        assert_ne!(a, b);

        fs::remove_dir_all(&dir).unwrap();
    }
}
