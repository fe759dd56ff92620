//! Leaderboard storage.
//!
//! - **Leaderboard**: in-memory top-5 list, sorted by score
//! - **Store**: JSON record file the leaderboard is loaded from and saved to
//! - **Format**: console table rendering
//!
//! ## Record file
//!
//! `leaderboard.json` holds a top-level array of
//! `{"player": ..., "difficulty": ..., "score": ...}` objects, pretty-printed.

mod format;
mod leaderboard;
mod store;

pub use format::format_leaderboard;
pub use leaderboard::*;
pub use store::*;
