//! Game configuration.

use std::path::PathBuf;

use crate::storage::LEADERBOARD_FILE;

/// Configuration for [`GuessingGame`](crate::GuessingGame)
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Leaderboard record file
    pub leaderboard_path: PathBuf,
    /// Whether a blank difficulty choice selects Hard instead of re-prompting
    pub blank_selects_hard: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from(LEADERBOARD_FILE),
            blank_selects_hard: true,
        }
    }
}

impl GameConfig {
    /// Create a new configuration builder
    pub fn builder() -> GameConfigBuilder {
        GameConfigBuilder::default()
    }
}

/// Builder for GameConfig
#[derive(Debug, Clone, Default)]
pub struct GameConfigBuilder {
    leaderboard_path: Option<PathBuf>,
    blank_selects_hard: Option<bool>,
}

impl GameConfigBuilder {
    /// Set the leaderboard file path
    pub fn leaderboard_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.leaderboard_path = Some(path.into());
        self
    }

    /// Enable or disable selecting Hard on a blank difficulty choice
    pub fn blank_selects_hard(mut self, enabled: bool) -> Self {
        self.blank_selects_hard = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> GameConfig {
        let default = GameConfig::default();
        GameConfig {
            leaderboard_path: self.leaderboard_path.unwrap_or(default.leaderboard_path),
            blank_selects_hard: self
                .blank_selects_hard
                .unwrap_or(default.blank_selects_hard),
        }
    }
}
