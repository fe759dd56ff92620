//! # numguess-core
//!
//! Core library for the number guessing game.
//!
//! This crate provides:
//! - Difficulty tiers and the scoring policy
//! - The per-round game session state machine
//! - The top-5 leaderboard and its JSON record file
//! - The session loop that ties rounds, prompting and persistence together
//!
//! Console I/O goes through the [`Prompter`] trait so rounds can be driven
//! by stdin in the binary and by scripted input in tests.

pub mod config;
pub mod error;
pub mod game;
pub mod guessing_game;
pub mod prompt;
pub mod storage;

pub use config::{GameConfig, GameConfigBuilder};
pub use error::{Error, Result};
pub use game::{
    Difficulty, DifficultyTier, Feedback, GameSession, GuessResult, Hint, Parity, Proximity,
    RoundOutcome, score,
};
pub use guessing_game::GuessingGame;
pub use prompt::{Prompter, prompt_until};
pub use storage::{
    LEADERBOARD_FILE, Leaderboard, LeaderboardEntry, LeaderboardStore, MAX_ENTRIES,
    format_leaderboard,
};
