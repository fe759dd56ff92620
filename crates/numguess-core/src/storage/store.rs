//! Leaderboard record file.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::{Leaderboard, LeaderboardEntry};
use crate::error::{Error, Result};

/// Default record file name
pub const LEADERBOARD_FILE: &str = "leaderboard.json";

/// Loads and saves a [`Leaderboard`] at a fixed path
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl Default for LeaderboardStore {
    fn default() -> Self {
        Self::new(LEADERBOARD_FILE)
    }
}

impl LeaderboardStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the leaderboard, falling back to an empty one.
    ///
    /// A missing file is the normal first-run case. An unreadable or
    /// unparsable file is logged as a warning and discarded.
    pub fn load(&self) -> Leaderboard {
        match self.try_load() {
            Ok(board) => {
                info!(
                    "Loaded {} leaderboard entries from {}",
                    board.len(),
                    self.path.display()
                );
                board
            }
            Err(e) if e.is_not_found() => {
                debug!("No leaderboard at {}, starting empty", self.path.display());
                Leaderboard::new()
            }
            Err(e) => {
                warn!(
                    "Error loading leaderboard file {}: {}. Starting with an empty leaderboard.",
                    self.path.display(),
                    e
                );
                Leaderboard::new()
            }
        }
    }

    /// Load the leaderboard, reporting any failure to the caller
    pub fn try_load(&self) -> Result<Leaderboard> {
        let content = fs::read_to_string(&self.path)?;
        let entries: Vec<LeaderboardEntry> = serde_json::from_str(&content)?;
        if let Some(entry) = entries.iter().find(|e| !e.is_valid()) {
            return Err(Error::InvalidEntry(format!(
                "player {:?} with score {}",
                entry.player(),
                entry.score()
            )));
        }
        Ok(Leaderboard::from_entries(entries))
    }

    /// Overwrite the record file with `board`.
    ///
    /// The content goes to a sibling `.tmp` file first and is renamed into
    /// place, so the previous file survives a failed write.
    pub fn save(&self, board: &Leaderboard) -> Result<()> {
        let content = serde_json::to_string_pretty(board.entries())?;
        let temp_path = self.temp_path();

        if let Err(e) = fs::write(&temp_path, content) {
            // Best effort; the temp file may not exist.
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }
        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e.into());
        }

        info!(
            "Saved {} leaderboard entries to {}",
            board.len(),
            self.path.display()
        );
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from(LEADERBOARD_FILE));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
