use super::Leaderboard;

const TITLE: &str = "===== Leaderboard =====";
const FOOTER: &str = "=======================";
const EMPTY_MESSAGE: &str = "No scores yet. Play a game to make it to the leaderboard!";

/// Render the leaderboard as a console table, one line per entry
pub fn format_leaderboard(board: &Leaderboard) -> String {
    let mut lines = vec![format!("\n{TITLE}")];

    if board.is_empty() {
        lines.push(EMPTY_MESSAGE.to_string());
    } else {
        lines.push(format!(
            "{:<5} {:<15} {:<10} {:<5}",
            "Rank", "Player", "Difficulty", "Score"
        ));
        for (rank, entry) in board.iter().enumerate() {
            lines.push(format!(
                "{:<5} {:<15} {:<10} {:<5}",
                rank + 1,
                entry.player(),
                entry.difficulty().label(),
                entry.score()
            ));
        }
    }

    lines.push(format!("{FOOTER}\n"));
    lines.join("\n")
}
