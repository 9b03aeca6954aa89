//! Heuristic evaluation for Gomoku positions
//!
//! Two levels of scoring:
//! - [`score_if_placed`]: value of dropping one stone on one empty cell,
//!   judged by the runs it would form along the four axes
//! - [`evaluate_board`]: value of a whole position for the engine's side,
//!   built from the best placements each side has available

use crate::board::{Board, Pos, Stone, DIRECTIONS};
use crate::config::EngineConfig;
use crate::rules::win::run_length;
use crate::rules::WIN_LENGTH;
use crate::search::candidates::generate;

use super::patterns::{line_score, PatternScore, Score};

/// Weight applied to the opponent's best placements in [`evaluate_board`].
/// Slightly above 1.0 so equal threats favor defending.
pub const OPPONENT_WEIGHT: Score = 1.05;

/// Whether the cell `k` steps from `pos` along `(dr, dc)` is on the board and empty.
#[inline]
fn is_open(board: &Board, pos: Pos, dr: i32, dc: i32, k: usize) -> bool {
    let (r, c) = pos.offset(dr, dc, k as i32);
    board.get_signed(r, c) == Some(Stone::Empty)
}

/// Score placing `stone` at `pos` without modifying the board.
///
/// Returns [`PatternScore::ILLEGAL`] for an occupied or off-board cell and
/// [`PatternScore::FIVE`] as soon as one axis would reach five.
#[must_use]
pub fn score_if_placed(board: &Board, stone: Stone, pos: Pos) -> Score {
    if !board.is_empty_at(pos) {
        return PatternScore::ILLEGAL;
    }

    let mut total = 0.0;
    for &(dr, dc) in &DIRECTIONS {
        let forward = run_length(board, pos, dr, dc, stone);
        let backward = run_length(board, pos, -dr, -dc, stone);
        let count = 1 + forward + backward;
        if count >= WIN_LENGTH {
            return PatternScore::FIVE;
        }

        let open_ends = u8::from(is_open(board, pos, dr, dc, forward + 1))
            + u8::from(is_open(board, pos, -dr, -dc, backward + 1));
        total += line_score(count, open_ends);
    }

    let center_dist = Score::from(pos.manhattan(board.center()));
    total - PatternScore::CENTER_PENALTY * center_dist
}

/// Sum of the `k` largest values.
fn top_k_sum(mut scores: Vec<Score>, k: usize) -> Score {
    scores.sort_unstable_by(|a, b| b.total_cmp(a));
    scores.iter().take(k).sum()
}

/// Evaluate the board from the perspective of `ai`.
///
/// Positive values favor `ai`. The opponent's best placements are weighted by
/// [`OPPONENT_WEIGHT`], so an unanswered enemy threat outweighs an equal own one.
#[must_use]
pub fn evaluate_board(board: &Board, ai: Stone, config: &EngineConfig) -> Score {
    let candidates = generate(board, ai, config.branch_limit);
    if candidates.is_empty() {
        return 0.0;
    }

    let opponent = ai.opponent();
    let (ai_scores, opp_scores): (Vec<Score>, Vec<Score>) = candidates
        .iter()
        .map(|&pos| {
            (
                score_if_placed(board, ai, pos),
                score_if_placed(board, opponent, pos),
            )
        })
        .unzip();

    top_k_sum(ai_scores, config.top_k) - OPPONENT_WEIGHT * top_k_sum(opp_scores, config.top_k)
}
