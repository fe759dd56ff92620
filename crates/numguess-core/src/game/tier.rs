use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr, Display,
)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All tiers in menu order
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Medium, Self::Hard];

    pub fn label(&self) -> &'static str {
        self.into()
    }

    /// Menu code the player types to pick this tier
    pub fn code(&self) -> &'static str {
        match self {
            Self::Easy => "1",
            Self::Medium => "2",
            Self::Hard => "3",
        }
    }

    /// Parse a menu choice.
    ///
    /// Surrounding whitespace is ignored. A blank choice selects [`Difficulty::Hard`]
    /// when `blank_selects_hard` is set and is rejected otherwise.
    pub fn from_choice(input: &str, blank_selects_hard: bool) -> Option<Self> {
        match input.trim() {
            "" if blank_selects_hard => Some(Self::Hard),
            choice => Self::ALL.into_iter().find(|d| d.code() == choice),
        }
    }

    pub fn tier(&self) -> DifficultyTier {
        match self {
            Self::Easy => DifficultyTier {
                difficulty: *self,
                min_value: 1,
                max_value: 100,
                max_attempts: 15,
            },
            Self::Medium => DifficultyTier {
                difficulty: *self,
                min_value: 1,
                max_value: 500,
                max_attempts: 10,
            },
            Self::Hard => DifficultyTier {
                difficulty: *self,
                min_value: 1,
                max_value: 1000,
                max_attempts: 5,
            },
        }
    }
}

/// Fixed range and attempt budget of a difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyTier {
    pub difficulty: Difficulty,
    pub min_value: u32,
    pub max_value: u32,
    pub max_attempts: u32,
}

impl DifficultyTier {
    pub fn range(&self) -> RangeInclusive<u32> {
        self.min_value..=self.max_value
    }

    /// Menu line, e.g. "1. Easy (Range: 1 to 100, 15 attempts)"
    pub fn menu_line(&self) -> String {
        format!(
            "{}. {} (Range: {} to {}, {} attempts)",
            self.difficulty.code(),
            self.difficulty,
            self.min_value,
            self.max_value,
            self.max_attempts
        )
    }

    /// Confirmation shown once the tier is chosen
    pub fn selected_message(&self) -> String {
        format!(
            "You selected {} difficulty. You have {} attempts to guess a number between {} and {}.",
            self.difficulty, self.max_attempts, self.min_value, self.max_value
        )
    }
}
