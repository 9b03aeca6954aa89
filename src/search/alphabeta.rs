//! Depth-limited alpha-beta search
//!
//! Plain minimax with alpha-beta cutoffs, scored from the engine's side
//! (`ai`): the engine maximizes, the opponent minimizes. Leaves use the static
//! evaluation of [`evaluate_board`]. Nodes only expand the ranked, pruned
//! candidates of [`generate`], so the search width is bounded by the branch
//! limit.
//!
//! Every trial stone goes through [`Board::with_trial`], so the board is
//! restored on every path out of a node, cutoffs included.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Pos, Stone};
//! use gomoku::config::EngineConfig;
//! use gomoku::search::Searcher;
//!
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let mut searcher = Searcher::new(EngineConfig::default(), Stone::White);
//! let result = searcher.search(&mut board, Stone::White, 2);
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::{evaluate_board, Score};
use crate::rules::has_five_at;

use super::candidates::generate;

/// Base score of a completed five found during search
pub const WIN_SCORE: Score = 1e12;

/// Bonus per remaining ply for a win, so shallower wins rank higher.
pub const WIN_DEPTH_BONUS: Score = 1e6;

/// Infinity bound for the alpha-beta window
pub const INF: Score = 1e18;

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Cutoffs taken (beta <= alpha)
    pub cutoffs: u64,
    /// Leaf evaluations
    pub leaves: u64,
    /// Wins found by a trial placement
    pub wins_found: u64,
}

/// Search result containing the best move found and associated statistics.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Score of the best move from the engine's side
    pub score: Score,
    /// Depth searched
    pub depth: i32,
    /// Total nodes visited
    pub nodes: u64,
    pub stats: SearchStats,
}

/// Score for a stone that just completed five, seen from the engine's side.
#[inline]
pub fn win_score(winner_is_ai: bool, remaining_depth: i32) -> Score {
    let score = WIN_SCORE + WIN_DEPTH_BONUS * Score::from(remaining_depth);
    if winner_is_ai {
        score
    } else {
        -score
    }
}

/// Alpha-beta searcher for one engine side.
pub struct Searcher {
    config: EngineConfig,
    ai: Stone,
    nodes: u64,
    stats: SearchStats,
}

impl Searcher {
    pub fn new(config: EngineConfig, ai: Stone) -> Self {
        Self {
            config: config.sanitized(),
            ai,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ai(&self) -> Stone {
        self.ai
    }

    /// Search `depth` plies with `to_move` on move.
    ///
    /// The board is mutated during the search and handed back unchanged.
    pub fn search(&mut self, board: &mut Board, to_move: Stone, depth: i32) -> SearchResult {
        self.nodes = 0;
        self.stats = SearchStats::default();

        let depth = depth.max(0);
        let (score, best_move) = self.alpha_beta(board, depth, to_move, -INF, INF);

        tracing::debug!(
            depth,
            score,
            nodes = self.nodes,
            cutoffs = self.stats.cutoffs,
            best = ?best_move,
            "alpha-beta search finished"
        );

        SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes,
            stats: self.stats.clone(),
        }
    }

    /// Recursive alpha-beta. Returns the node score and the move achieving it.
    pub fn alpha_beta(
        &mut self,
        board: &mut Board,
        depth: i32,
        to_move: Stone,
        mut alpha: Score,
        mut beta: Score,
    ) -> (Score, Option<Pos>) {
        self.nodes += 1;

        if depth <= 0 {
            self.stats.leaves += 1;
            return (evaluate_board(board, self.ai, &self.config), None);
        }

        let candidates = generate(board, to_move, self.config.branch_limit);
        if candidates.is_empty() {
            return (0.0, None);
        }

        let maximizing = to_move == self.ai;
        let mut best_score = if maximizing { -INF } else { INF };
        let mut best_move = None;

        for pos in candidates {
            let score = board.with_trial(pos, to_move, |board| {
                if has_five_at(board, pos) {
                    self.stats.wins_found += 1;
                    win_score(maximizing, depth)
                } else {
                    self.alpha_beta(board, depth - 1, to_move.opponent(), alpha, beta).0
                }
            });

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(pos);
                }
                beta = beta.min(best_score);
            }

            if beta <= alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_score, best_move)
    }
}
