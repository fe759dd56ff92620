//! Scoring policy for a finished round.

/// Points for a correct first guess
pub const SCORE_FIRST_TRY: u32 = 10;
/// Points for a correct guess within the first half of the attempt budget
pub const SCORE_FIRST_HALF: u32 = 7;
/// Points for a correct guess in the second half of the attempt budget
pub const SCORE_SECOND_HALF: u32 = 3;
/// Points when the attempt budget runs out
pub const SCORE_EXHAUSTED: u32 = 0;

/// Points for a correct guess made on attempt `attempts_used` out of `max_attempts`.
///
/// The half-budget threshold uses integer division, so with 5 attempts only
/// attempt 2 scores [`SCORE_FIRST_HALF`].
pub fn score(attempts_used: u32, max_attempts: u32) -> u32 {
    if attempts_used == 1 {
        SCORE_FIRST_TRY
    } else if attempts_used <= max_attempts / 2 {
        SCORE_FIRST_HALF
    } else {
        SCORE_SECOND_HALF
    }
}
