//! One round of play: a secret, an attempt budget and the guesses made against it.
//!
//! Difficulty selection happens before a [`GameSession`] exists, so a session
//! starts out guessing and ends with a [`RoundOutcome`]: either
//! [`RoundOutcome::Won`] or [`RoundOutcome::Exhausted`].

use rand::Rng;
use strum::{Display, IntoStaticStr};
use tracing::debug;

use crate::error::{Error, Result};
use crate::game::{Difficulty, DifficultyTier, SCORE_EXHAUSTED, score};
use crate::storage::LeaderboardEntry;

/// Guesses within this distance of the secret are "close"
pub const CLOSE_DISTANCE: u64 = 10;

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Won { attempts: u32 },
    Exhausted,
}

impl RoundOutcome {
    /// Points earned under the scoring policy
    pub fn score(&self, max_attempts: u32) -> u32 {
        match self {
            Self::Won { attempts } => score(*attempts, max_attempts),
            Self::Exhausted => SCORE_EXHAUSTED,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Feedback {
    #[strum(serialize = "Too low!")]
    TooLow,
    #[strum(serialize = "Too high!")]
    TooHigh,
    #[strum(serialize = "Correct!")]
    Correct,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Parity {
    Even,
    Odd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Proximity {
    Close,
    Far,
}

/// Hint given after a wrong guess while attempts remain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    pub parity: Parity,
    pub proximity: Proximity,
}

impl Hint {
    fn new(secret: u32, guess: i64) -> Self {
        let parity = if secret % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        };
        let proximity = if i64::from(secret).abs_diff(guess) <= CLOSE_DISTANCE {
            Proximity::Close
        } else {
            Proximity::Far
        };
        Self { parity, proximity }
    }

    pub fn message(&self) -> String {
        format!(
            "Hint: The number is {} and you are {} from the correct number.",
            self.parity, self.proximity
        )
    }
}

/// Result of a single counted attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    /// 1-based attempt number this guess used
    pub attempt: u32,
    pub feedback: Feedback,
    pub hint: Option<Hint>,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    player: String,
    tier: DifficultyTier,
    secret: u32,
    attempts_used: u32,
    /// `None` while guesses are still being taken
    outcome: Option<RoundOutcome>,
}

impl GameSession {
    /// Start a round with a secret drawn uniformly from the tier's range
    pub fn new<R: Rng>(player: impl Into<String>, difficulty: Difficulty, rng: &mut R) -> Self {
        let secret = rng.random_range(difficulty.tier().range());
        Self::with_secret(player, difficulty, secret)
    }

    pub fn with_secret(player: impl Into<String>, difficulty: Difficulty, secret: u32) -> Self {
        let player = player.into();
        debug!("New {} session for {}", difficulty, player);
        Self {
            player,
            tier: difficulty.tier(),
            secret,
            attempts_used: 0,
            outcome: None,
        }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn tier(&self) -> DifficultyTier {
        self.tier
    }

    pub fn secret(&self) -> u32 {
        self.secret
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.tier.max_attempts - self.attempts_used
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    /// Count an attempt against the secret.
    ///
    /// Returns [`Error::SessionFinished`] once the round has been won or exhausted.
    pub fn guess(&mut self, value: i64) -> Result<GuessResult> {
        if self.is_finished() {
            return Err(Error::SessionFinished);
        }

        self.attempts_used += 1;
        let attempt = self.attempts_used;
        let secret = i64::from(self.secret);

        let feedback = if value < secret {
            Feedback::TooLow
        } else if value > secret {
            Feedback::TooHigh
        } else {
            Feedback::Correct
        };

        if feedback == Feedback::Correct {
            self.outcome = Some(RoundOutcome::Won { attempts: attempt });
            debug!("{} won on attempt {}", self.player, attempt);
            return Ok(GuessResult {
                attempt,
                feedback,
                hint: None,
            });
        }

        let hint = if attempt < self.tier.max_attempts {
            Some(Hint::new(self.secret, value))
        } else {
            self.outcome = Some(RoundOutcome::Exhausted);
            debug!("{} exhausted all {} attempts", self.player, attempt);
            None
        };

        Ok(GuessResult {
            attempt,
            feedback,
            hint,
        })
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    /// Points for the round, once finished
    pub fn score(&self) -> Option<u32> {
        self.outcome()
            .map(|outcome| outcome.score(self.tier.max_attempts))
    }

    /// Leaderboard entry for the round, once finished
    pub fn entry(&self) -> Option<LeaderboardEntry> {
        self.score()
            .map(|score| LeaderboardEntry::new(self.player.clone(), self.tier.difficulty, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_easy_low_high_correct() {
        let mut session = GameSession::with_secret("alice", Difficulty::Easy, 50);

        let first = session.guess(25).unwrap();
        assert_eq!(first.feedback, Feedback::TooLow);
        assert_eq!(first.attempt, 1);

        let second = session.guess(75).unwrap();
        assert_eq!(second.feedback, Feedback::TooHigh);

        let third = session.guess(50).unwrap();
        assert_eq!(third.feedback, Feedback::Correct);
        assert_eq!(third.hint, None);

        assert_eq!(session.attempts_used(), 3);
        assert_eq!(session.outcome(), Some(RoundOutcome::Won { attempts: 3 }));
        assert_eq!(session.score(), Some(7));
    }

    #[test]
    fn test_hard_exhausted() {
        let mut session = GameSession::with_secret("bob", Difficulty::Hard, 500);
        for guess in 1..=5 {
            let result = session.guess(guess).unwrap();
            assert_eq!(result.feedback, Feedback::TooLow);
        }

        assert_eq!(session.outcome(), Some(RoundOutcome::Exhausted));
        assert_eq!(session.score(), Some(0));

        let entry = session.entry().unwrap();
        assert_eq!(entry.player(), "bob");
        assert_eq!(entry.difficulty(), Difficulty::Hard);
        assert_eq!(entry.score(), 0);
    }

    #[test]
    fn test_first_guess_scores_ten() {
        for difficulty in Difficulty::ALL {
            let mut session = GameSession::with_secret("carol", difficulty, 42);
            session.guess(42).unwrap();
            assert_eq!(session.score(), Some(10));
        }
    }

    #[test]
    fn test_hints() {
        let mut session = GameSession::with_secret("dave", Difficulty::Easy, 50);

        let close = session.guess(40).unwrap().hint.unwrap();
        assert_eq!(close.parity, Parity::Even);
        assert_eq!(close.proximity, Proximity::Close);

        let far = session.guess(61).unwrap().hint.unwrap();
        assert_eq!(far.proximity, Proximity::Far);

        let mut odd = GameSession::with_secret("dave", Difficulty::Easy, 7);
        let hint = odd.guess(-3).unwrap().hint.unwrap();
        assert_eq!(hint.parity, Parity::Odd);
        assert_eq!(hint.proximity, Proximity::Close);
        assert_eq!(
            hint.message(),
            "Hint: The number is odd and you are close from the correct number."
        );
    }

    #[test]
    fn test_no_hint_on_last_attempt() {
        let mut session = GameSession::with_secret("erin", Difficulty::Hard, 500);
        for _ in 0..4 {
            assert!(session.guess(1).unwrap().hint.is_some());
        }
        assert_eq!(session.guess(1).unwrap().hint, None);
    }

    #[test]
    fn test_guess_after_finish_rejected() {
        let mut session = GameSession::with_secret("frank", Difficulty::Easy, 3);
        session.guess(3).unwrap();
        assert!(matches!(session.guess(3), Err(Error::SessionFinished)));
        assert_eq!(session.attempts_used(), 1);
    }

    #[test]
    fn test_unfinished_session_has_no_entry() {
        let mut session = GameSession::with_secret("gina", Difficulty::Medium, 250);
        session.guess(1).unwrap();
        assert_eq!(session.outcome(), None);
        assert!(session.entry().is_none());
        assert_eq!(session.attempts_remaining(), 9);
    }

    #[test]
    fn test_random_secret_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for difficulty in Difficulty::ALL {
            for _ in 0..200 {
                let session = GameSession::new("hal", difficulty, &mut rng);
                assert!(difficulty.tier().range().contains(&session.secret()));
            }
        }
    }
}
