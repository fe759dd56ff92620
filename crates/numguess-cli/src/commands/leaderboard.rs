//! Leaderboard display and reset.

use std::path::Path;

use anyhow::{Context, Result};
use numguess_core::{LeaderboardStore, format_leaderboard};

/// Print the leaderboard, or empty it when `clear` is set
pub fn run(path: &Path, clear: bool) -> Result<()> {
    let store = LeaderboardStore::new(path);
    let mut board = store.load();

    if clear {
        let removed = board.len();
        board.clear();
        store
            .save(&board)
            .with_context(|| format!("Failed to clear {}", path.display()))?;
        println!("Leaderboard cleared ({} entries removed).", removed);
        return Ok(());
    }

    println!("{}", format_leaderboard(&board));
    Ok(())
}
