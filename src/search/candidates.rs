//! Candidate move generation
//!
//! Only empty cells within two steps (Chebyshev distance) of an existing
//! stone are considered. They are ranked by a blend of attack and defense
//! value and cut down to the branch limit, so a quiet but strong move far
//! from the action can be missed.

use crate::board::{Board, Pos, Stone, BOARD_SIZE};
use crate::eval::{score_if_placed, Score};

/// Distance from existing stones within which cells become candidates
pub const NEIGHBOR_RADIUS: i32 = 2;

/// Weight of the mover's own placement score when ranking candidates
pub const ATTACK_WEIGHT: Score = 1.2;
/// Weight of the opponent's placement score (value of blocking the cell)
pub const DEFENSE_WEIGHT: Score = 1.0;

/// Every empty cell within [`NEIGHBOR_RADIUS`] of a stone, row-major,
/// without duplicates. Empty on an empty board.
#[must_use]
pub fn neighborhood(board: &Board) -> Vec<Pos> {
    let mut seen = [[false; BOARD_SIZE]; BOARD_SIZE];
    let mut cells = Vec::with_capacity(64);

    for (pos, _) in board.occupied() {
        for dr in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
            for dc in -NEIGHBOR_RADIUS..=NEIGHBOR_RADIUS {
                let Some(cell) = board.pos_at(i32::from(pos.row) + dr, i32::from(pos.col) + dc)
                else {
                    continue;
                };
                let (r, c) = (cell.row as usize, cell.col as usize);
                if seen[r][c] || !board.is_empty_at(cell) {
                    continue;
                }
                seen[r][c] = true;
                cells.push(cell);
            }
        }
    }

    cells.sort_unstable();
    cells
}

/// Ranked, pruned candidate moves for `mover`.
///
/// An empty board yields only the center. Otherwise every neighborhood cell
/// is scored `1.2 * own + 1.0 * opponent`, sorted best first (ties keep
/// row-major order) and truncated to `branch_limit` (at least one).
#[must_use]
pub fn generate(board: &Board, mover: Stone, branch_limit: usize) -> Vec<Pos> {
    if board.is_board_empty() {
        return vec![board.center()];
    }

    let opponent = mover.opponent();
    let mut scored: Vec<(Pos, Score)> = neighborhood(board)
        .into_iter()
        .map(|pos| {
            let attack = score_if_placed(board, mover, pos);
            let defense = score_if_placed(board, opponent, pos);
            (pos, ATTACK_WEIGHT * attack + DEFENSE_WEIGHT * defense)
        })
        .collect();

    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    scored.truncate(branch_limit.max(1));
    scored.into_iter().map(|(pos, _)| pos).collect()
}
