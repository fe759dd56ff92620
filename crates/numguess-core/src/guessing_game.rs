//! Session loop for the number guessing game.
//!
//! [`GuessingGame`] owns the leaderboard for the whole process. It is loaded
//! once on construction, updated after every finished round and saved right
//! away.
//!
//! ## Example
//!
//! ```ignore
//! use numguess_core::{GameConfig, GuessingGame};
//!
//! let config = GameConfig::builder().leaderboard_path("scores.json").build();
//! let mut game = GuessingGame::new(config, prompter, rand::rng());
//! game.run()?;
//! ```

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::game::{Difficulty, Feedback, GameSession, RoundOutcome};
use crate::prompt::{Prompter, prompt_until};
use crate::storage::{Leaderboard, LeaderboardEntry, LeaderboardStore, format_leaderboard};

const WELCOME: &str = "Welcome to the Number Guessing Game!";
const GOODBYE: &str = "Thank you for playing! Goodbye!";
const NAME_PROMPT: &str = "Enter your name: ";
const INVALID_NAME: &str = "Please enter your name.";
const DIFFICULTY_PROMPT: &str = "Enter your choice (1, 2, or 3): ";
const INVALID_DIFFICULTY: &str = "Invalid choice. Please select 1, 2, or 3.";
const INVALID_GUESS: &str = "Please enter a valid number.";
const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (yes/no): ";

pub struct GuessingGame<P: Prompter, R: Rng> {
    config: GameConfig,
    store: LeaderboardStore,
    leaderboard: Leaderboard,
    prompter: P,
    rng: R,
}

impl<P: Prompter, R: Rng> GuessingGame<P, R> {
    /// Create the game and load the leaderboard from the configured path
    pub fn new(config: GameConfig, prompter: P, rng: R) -> Self {
        let store = LeaderboardStore::new(config.leaderboard_path.clone());
        let leaderboard = store.load();
        Self {
            config,
            store,
            leaderboard,
            prompter,
            rng,
        }
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// Play rounds until the player declines another one.
    ///
    /// End of input ends the loop like a "no"; an unfinished round is dropped.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_leaderboard();

            match self.play_round() {
                Ok(outcome) => debug!("Round finished: {:?}", outcome),
                Err(Error::InputClosed) => {
                    info!("Input closed during round, stopping");
                    break;
                }
                Err(e) => return Err(e),
            }

            match self.ask_play_again() {
                Ok(true) => continue,
                Ok(false) | Err(Error::InputClosed) => break,
                Err(e) => return Err(e),
            }
        }

        self.prompter.display_message(GOODBYE);
        Ok(())
    }

    /// Ask for a name and difficulty, then play one round with a random secret
    pub fn play_round(&mut self) -> Result<RoundOutcome> {
        self.prompter.display_message(WELCOME);

        let player = self.prompt_name()?;
        let difficulty = self.select_difficulty()?;
        let session = GameSession::new(player, difficulty, &mut self.rng);

        self.play_session(session)
    }

    /// Run the guessing loop of `session`, then record and save the result
    pub fn play_session(&mut self, mut session: GameSession) -> Result<RoundOutcome> {
        let max_attempts = session.tier().max_attempts;
        self.prompter
            .display_message("\nThe game has started! Good luck!");

        let outcome = loop {
            let prompt = format!(
                "Attempt {}/{}: Enter your guess: ",
                session.attempts_used() + 1,
                max_attempts
            );
            let value = prompt_until(&mut self.prompter, &prompt, INVALID_GUESS, |line| {
                line.trim().parse::<i64>().ok()
            })?;

            let result = session.guess(value)?;
            if result.feedback != Feedback::Correct {
                self.prompter.display_message(&result.feedback.to_string());
            }
            if let Some(hint) = result.hint {
                self.prompter.display_message(&hint.message());
            }

            if let Some(outcome) = session.outcome() {
                break outcome;
            }
        };

        let score = outcome.score(max_attempts);
        match outcome {
            RoundOutcome::Won { attempts } => {
                self.prompter.display_message(&format!(
                    "Congratulations, {}! You guessed the number in {} attempts.",
                    session.player(),
                    attempts
                ));
            }
            RoundOutcome::Exhausted => {
                self.prompter.display_message(&format!(
                    "Sorry, {}, you've used all {} attempts. The correct number was {}.",
                    session.player(),
                    max_attempts,
                    session.secret()
                ));
            }
        }
        self.prompter
            .display_message(&format!("Your score: {} points.", score));

        let entry = LeaderboardEntry::new(session.player(), session.tier().difficulty, score);
        if let Some(rank) = self.leaderboard.record(entry) {
            self.prompter
                .display_message(&format!("You placed #{} on the leaderboard!", rank));
        }
        self.persist();
        self.show_leaderboard();

        Ok(outcome)
    }

    fn prompt_name(&mut self) -> Result<String> {
        prompt_until(&mut self.prompter, NAME_PROMPT, INVALID_NAME, |line| {
            let name = line.trim();
            (!name.is_empty()).then(|| name.to_string())
        })
    }

    fn select_difficulty(&mut self) -> Result<Difficulty> {
        self.prompter.display_message("\nChoose a difficulty level:");
        for difficulty in Difficulty::ALL {
            self.prompter
                .display_message(&difficulty.tier().menu_line());
        }

        let blank_selects_hard = self.config.blank_selects_hard;
        let difficulty = prompt_until(
            &mut self.prompter,
            DIFFICULTY_PROMPT,
            INVALID_DIFFICULTY,
            |line| Difficulty::from_choice(line, blank_selects_hard),
        )?;

        self.prompter
            .display_message(&difficulty.tier().selected_message());
        Ok(difficulty)
    }

    fn ask_play_again(&mut self) -> Result<bool> {
        let answer = self
            .prompter
            .read_line(PLAY_AGAIN_PROMPT)?
            .ok_or(Error::InputClosed)?;
        Ok(answer.trim().eq_ignore_ascii_case("yes"))
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(&self.leaderboard) {
            warn!(
                "Error saving leaderboard to {}: {}",
                self.store.path().display(),
                e
            );
        }
    }

    fn show_leaderboard(&mut self) {
        self.prompter
            .display_message(&format_leaderboard(&self.leaderboard));
    }
}
