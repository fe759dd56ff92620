//! Interactive play command.

use anyhow::Result;
use numguess_core::{GameConfig, GuessingGame};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::prompter::CliPrompter;

/// Run the session loop on stdin/stdout
pub fn run(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let rng = match seed {
        Some(seed) => {
            info!("Using fixed seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut game = GuessingGame::new(config, CliPrompter::stdio(), rng);
    game.run()?;
    Ok(())
}
