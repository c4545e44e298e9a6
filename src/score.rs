use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const APP_DIR_NAME: &str = "snek";
const SCORE_FILE_NAME: &str = "highscore.json";

/// Persisted best result across runs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HighScore {
    pub best: u32,
}

impl HighScore {
    /// Loads the high score from the platform data directory.
    ///
    /// A missing file is a first run and reads as zero. A file that exists
    /// but cannot be parsed is an error, so the caller can warn before the
    /// terminal enters raw mode.
    pub fn load() -> io::Result<Self> {
        Self::load_from(&score_path())
    }

    /// Writes the high score, creating parent directories when needed.
    pub fn save(self) -> io::Result<()> {
        self.save_to(&score_path())
    }

    /// Returns an updated copy when `score` beats the stored best.
    #[must_use]
    pub fn beaten_by(self, score: u32) -> Option<Self> {
        (score > self.best).then_some(Self { best: score })
    }

    fn load_from(path: &Path) -> io::Result<Self> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(error) => return Err(error),
        };

        serde_json::from_str(&raw).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
    }

    fn save_to(self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self)
            .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))?;
        fs::write(path, json)
    }
}

/// Returns the platform-correct score file path.
#[must_use]
pub fn score_path() -> PathBuf {
    let mut base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.push(APP_DIR_NAME);
    base.push(SCORE_FILE_NAME);
    base
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::HighScore;

    #[test]
    fn round_trip_preserves_the_best_score() {
        let path = unique_test_path("round_trip");

        HighScore { best: 42 }
            .save_to(&path)
            .expect("score save should succeed");
        let loaded = HighScore::load_from(&path).expect("load should succeed");

        assert_eq!(loaded.best, 42);
        cleanup_test_path(&path);
    }

    #[test]
    fn missing_file_reads_as_zero() {
        let path = unique_test_path("missing");
        // Deliberately do not create the file.
        let loaded = HighScore::load_from(&path).expect("missing file should read as default");
        assert_eq!(loaded.best, 0);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let path = unique_test_path("malformed");
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("test parent directory should be creatable");
        }
        fs::write(&path, "not-json").expect("test file write should succeed");

        assert!(HighScore::load_from(&path).is_err());

        cleanup_test_path(&path);
    }

    #[test]
    fn beaten_by_only_updates_on_improvement() {
        let stored = HighScore { best: 10 };

        assert!(stored.beaten_by(9).is_none());
        assert!(stored.beaten_by(10).is_none());
        assert_eq!(stored.beaten_by(11).map(|s| s.best), Some(11));
    }

    fn unique_test_path(label: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after epoch")
            .as_nanos();

        std::env::temp_dir()
            .join("snek-score-tests")
            .join(format!("{label}-{nanos}.json"))
    }

    fn cleanup_test_path(path: &PathBuf) {
        let _ = fs::remove_file(path);
        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir(parent);
        }
    }
}
