use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use numguess_core::{GameConfig, LEADERBOARD_FILE};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod prompter;

#[derive(Parser)]
#[command(name = "numguess")]
#[command(about = "Number guessing game with a top-5 leaderboard")]
struct Args {
    /// Leaderboard record file
    #[arg(short, long, global = true, default_value = LEADERBOARD_FILE)]
    leaderboard: PathBuf,

    /// Reject a blank difficulty choice instead of selecting Hard
    #[arg(long, global = true)]
    strict_difficulty: bool,

    /// Seed for the secret number generator
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Play rounds until you decline another one (default)
    Play,
    /// Show the leaderboard
    Leaderboard {
        /// Remove all entries
        #[arg(long)]
        clear: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr so they stay out of the prompts
    let default_filter = if args.verbose {
        "warn,numguess=debug,numguess_core=debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    debug!("Using leaderboard file {:?}", args.leaderboard);

    match args.selected_command() {
        Command::Play => commands::play::run(args.game_config(), args.seed),
        Command::Leaderboard { clear } => commands::leaderboard::run(&args.leaderboard, clear),
    }
}

impl Args {
    /// Subcommand to run; `play` when none is given
    fn selected_command(&self) -> Command {
        match self.command {
            Some(Command::Leaderboard { clear }) => Command::Leaderboard { clear },
            Some(Command::Play) | None => Command::Play,
        }
    }

    fn game_config(&self) -> GameConfig {
        GameConfig::builder()
            .leaderboard_path(&self.leaderboard)
            .blank_selects_hard(!self.strict_difficulty)
            .build()
    }
}
