use serde::{Deserialize, Serialize};

use crate::game::{
    Difficulty, SCORE_EXHAUSTED, SCORE_FIRST_HALF, SCORE_FIRST_TRY, SCORE_SECOND_HALF,
};

/// Maximum number of entries kept on the board
pub const MAX_ENTRIES: usize = 5;

/// One recorded round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    player: String,
    difficulty: Difficulty,
    score: u32,
}

impl LeaderboardEntry {
    pub fn new(player: impl Into<String>, difficulty: Difficulty, score: u32) -> Self {
        Self {
            player: player.into(),
            difficulty,
            score,
        }
    }

    pub fn player(&self) -> &str {
        &self.player
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Whether the player is non-blank and the score is one the scoring policy can award
    pub fn is_valid(&self) -> bool {
        !self.player.trim().is_empty()
            && [
                SCORE_FIRST_TRY,
                SCORE_FIRST_HALF,
                SCORE_SECOND_HALF,
                SCORE_EXHAUSTED,
            ]
            .contains(&self.score)
    }
}

/// Top entries sorted by descending score.
///
/// Ties keep insertion order, so an older entry outranks a newer one with the
/// same score. The board never holds more than [`MAX_ENTRIES`] entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from entries in insertion order, sorting and truncating them
    pub fn from_entries(entries: Vec<LeaderboardEntry>) -> Self {
        let mut board = Self { entries };
        board.normalize();
        board
    }

    /// Insert an entry, re-sort and drop anything past [`MAX_ENTRIES`].
    ///
    /// Returns the 1-based rank the entry landed at, or `None` if it did not
    /// make the board.
    pub fn record(&mut self, entry: LeaderboardEntry) -> Option<usize> {
        // Stable sort puts the new entry after every existing entry with an
        // equal or higher score.
        let rank = self
            .entries
            .iter()
            .filter(|e| e.score >= entry.score)
            .count()
            + 1;

        self.entries.push(entry);
        self.normalize();

        (rank <= MAX_ENTRIES).then_some(rank)
    }

    fn normalize(&mut self) {
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(player: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry::new(player, Difficulty::Easy, score)
    }

    fn assert_invariants(board: &Leaderboard) {
        assert!(board.len() <= MAX_ENTRIES);
        assert!(
            board
                .entries()
                .windows(2)
                .all(|pair| pair[0].score() >= pair[1].score())
        );
    }

    #[test]
    fn test_record_sorts_descending() {
        let mut board = Leaderboard::new();
        assert_eq!(board.record(entry("a", 3)), Some(1));
        assert_eq!(board.record(entry("b", 10)), Some(1));
        assert_eq!(board.record(entry("c", 7)), Some(2));

        let scores: Vec<u32> = board.iter().map(|e| e.score()).collect();
        assert_eq!(scores, vec![10, 7, 3]);
    }

    #[test]
    fn test_record_caps_at_max_entries() {
        let mut board = Leaderboard::new();
        let scores = [0, 3, 7, 10, 3, 0, 10, 7, 7, 3, 0, 10, 3];
        for (i, score) in scores.into_iter().enumerate() {
            board.record(entry(&format!("p{i}"), score));
            assert_invariants(&board);
        }
        assert_eq!(board.len(), MAX_ENTRIES);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        board.record(entry("first", 7));
        board.record(entry("second", 7));
        assert_eq!(board.record(entry("third", 7)), Some(3));

        let players: Vec<&str> = board.iter().map(|e| e.player()).collect();
        assert_eq!(players, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_full_board_drops_tied_newcomer() {
        let mut board = Leaderboard::new();
        for i in 0..MAX_ENTRIES {
            board.record(entry(&format!("p{i}"), 3));
        }
        assert_eq!(board.record(entry("late", 3)), None);
        assert!(board.iter().all(|e| e.player() != "late"));

        assert_eq!(board.record(entry("top", 10)), Some(1));
        assert_eq!(board.entries()[0].player(), "top");
        assert_eq!(board.entries()[MAX_ENTRIES - 1].player(), "p3");
    }

    #[test]
    fn test_from_entries_normalizes() {
        let entries = (0..8).map(|i| entry(&format!("p{i}"), i % 4)).collect();
        let board = Leaderboard::from_entries(entries);
        assert_invariants(&board);
        assert_eq!(board.len(), MAX_ENTRIES);
        assert_eq!(board.entries()[0].player(), "p3");
        assert_eq!(board.entries()[1].player(), "p7");
    }

    #[test]
    fn test_entry_is_valid() {
        for score in [0, 3, 7, 10] {
            assert!(LeaderboardEntry::new("alice", Difficulty::Hard, score).is_valid());
        }
        assert!(!LeaderboardEntry::new("alice", Difficulty::Hard, 999).is_valid());
        assert!(!LeaderboardEntry::new("alice", Difficulty::Hard, 5).is_valid());
        assert!(!LeaderboardEntry::new("", Difficulty::Easy, 7).is_valid());
        assert!(!LeaderboardEntry::new("   ", Difficulty::Easy, 7).is_valid());
    }
}
