//! AI engine: picks the computer opponent's move
//!
//! Wraps the alpha-beta [`Searcher`] with the move-level policy:
//!
//! 1. **Opening**: on an empty board, play the center without searching
//! 2. **Alpha-Beta**: search the ranked candidates; a narrow root is searched
//!    at least 2 plies deep, up to `max_depth`
//! 3. **Fallback**: if the search returns no move, play the top candidate
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//! use gomoku::config::EngineConfig;
//!
//! let mut engine = AIEngine::new(EngineConfig::default());
//! let mut board = Board::new();
//! board.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! let result = engine.choose_move(&mut board, Stone::White);
//! println!("White plays {:?} ({:?})", result.best_move, result.search_type);
//! ```

use std::time::Instant;

use crate::board::{Board, Pos, Stone};
use crate::config::EngineConfig;
use crate::eval::Score;
use crate::search::{generate, Searcher};

/// Which step of the move policy produced the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Empty board, center played directly
    Opening,
    /// Regular alpha-beta search result
    AlphaBeta,
    /// Search produced no move; top-ranked candidate played
    Fallback,
    /// No empty cell left
    NoMove,
}

/// Result of a move search with detailed statistics.
#[derive(Debug, Clone)]
pub struct MoveResult {
    /// Best move found, if any
    pub best_move: Option<Pos>,
    /// Search score from the engine's side
    pub score: Score,
    pub search_type: SearchType,
    /// Depth actually searched
    pub depth: i32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of nodes searched
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn opening(pos: Pos) -> Self {
        Self {
            best_move: Some(pos),
            score: 0.0,
            search_type: SearchType::Opening,
            depth: 0,
            time_ms: 0,
            nodes: 0,
        }
    }

    #[inline]
    fn no_move() -> Self {
        Self {
            best_move: None,
            score: 0.0,
            search_type: SearchType::NoMove,
            depth: 0,
            time_ms: 0,
            nodes: 0,
        }
    }
}

/// Main AI engine for Gomoku.
///
/// The engine is stateless between moves apart from its configuration, so
/// one instance can play either color.
#[derive(Debug, Clone)]
pub struct AIEngine {
    config: EngineConfig,
}

impl AIEngine {
    /// Create an engine; invalid settings are clamped.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config: config.sanitized(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Depth to search given the number of root candidates.
    ///
    /// A narrow root (at most `deepen_threshold` candidates) is searched at
    /// least 2 plies deep, capped by `max_depth`; otherwise `depth` is used.
    #[must_use]
    pub fn resolve_depth(&self, candidate_count: usize) -> i32 {
        if candidate_count <= self.config.deepen_threshold {
            self.config.depth.max(2).min(self.config.max_depth)
        } else {
            self.config.depth
        }
    }

    /// Choose a move for `color`.
    ///
    /// The board is used as scratch space by the search and is returned in
    /// the state it was passed in.
    pub fn choose_move(&mut self, board: &mut Board, color: Stone) -> MoveResult {
        let start = Instant::now();

        if board.is_board_empty() {
            let center = board.center();
            tracing::debug!(%center, "opening move");
            return MoveResult::opening(center);
        }

        let candidates = generate(board, color, self.config.branch_limit);
        let Some(&top) = candidates.first() else {
            return MoveResult::no_move();
        };

        let depth = self.resolve_depth(candidates.len());
        let mut searcher = Searcher::new(self.config.clone(), color);
        let result = searcher.search(board, color, depth);

        let (best_move, search_type) = match result.best_move {
            Some(pos) => (pos, SearchType::AlphaBeta),
            None => (top, SearchType::Fallback),
        };

        let time_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            color = color.name(),
            %best_move,
            score = result.score,
            depth,
            nodes = result.nodes,
            time_ms,
            "engine move chosen"
        );

        MoveResult {
            best_move: Some(best_move),
            score: result.score,
            search_type,
            depth,
            time_ms,
            nodes: result.nodes,
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_empty_board_plays_center() {
        let mut engine = AIEngine::default();
        let mut board = Board::new();
        let result = engine.choose_move(&mut board, Stone::Black);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
        assert_eq!(result.search_type, SearchType::Opening);
    }

    #[test]
    fn test_engine_responds_near_first_stone() {
        let mut engine = AIEngine::default();
        let mut board = Board::new();
        board.place(Pos::new(7, 7), Stone::Black).unwrap();
        let before = board.clone();

        let result = engine.choose_move(&mut board, Stone::White);
        let m = result.best_move.unwrap();
        assert_eq!(result.search_type, SearchType::AlphaBeta);
        assert!(board.is_empty_at(m));
        assert!(m.manhattan(Pos::new(7, 7)) <= 4);
        assert_eq!(board, before);
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let mut engine = AIEngine::default();
        let mut board = Board::new();
        for col in 5..9 {
            board.place(Pos::new(4, col), Stone::White).unwrap();
        }
        board.place(Pos::new(4, 4), Stone::Black).unwrap();
        board.place(Pos::new(10, 10), Stone::Black).unwrap();
        board.place(Pos::new(11, 10), Stone::Black).unwrap();

        let result = engine.choose_move(&mut board, Stone::White);
        assert_eq!(result.best_move, Some(Pos::new(4, 9)));
    }

    #[test]
    fn test_depth_raised_for_small_candidate_sets() {
        let engine = AIEngine::default();
        assert_eq!(engine.resolve_depth(8), 2);
        assert_eq!(engine.resolve_depth(9), 2);

        let engine = AIEngine::new(EngineConfig {
            depth: 1,
            max_depth: 3,
            ..EngineConfig::default()
        });
        assert_eq!(engine.resolve_depth(8), 2);
        assert_eq!(engine.resolve_depth(9), 1);

        let engine = AIEngine::new(EngineConfig {
            depth: 3,
            ..EngineConfig::default()
        });
        assert_eq!(engine.resolve_depth(4), 3);

        let engine = AIEngine::new(EngineConfig {
            depth: 2,
            max_depth: 2,
            ..EngineConfig::default()
        });
        assert_eq!(engine.resolve_depth(3), 2);
    }

    #[test]
    fn test_depth_zero_falls_back_to_top_candidate() {
        let mut engine = AIEngine::new(EngineConfig {
            depth: 0,
            max_depth: 0,
            ..EngineConfig::default()
        });
        let mut board = Board::new();
        for col in 3..7 {
            board.place(Pos::new(7, col), Stone::Black).unwrap();
        }
        board.place(Pos::new(7, 2), Stone::White).unwrap();

        let result = engine.choose_move(&mut board, Stone::White);
        assert_eq!(result.search_type, SearchType::Fallback);
        assert_eq!(result.best_move, Some(Pos::new(7, 7)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut engine = AIEngine::default();
        let mut board = Board::with_size(1, 2);
        board.place(Pos::new(0, 0), Stone::Black).unwrap();
        board.place(Pos::new(0, 1), Stone::White).unwrap();

        let result = engine.choose_move(&mut board, Stone::Black);
        assert_eq!(result.best_move, None);
        assert_eq!(result.search_type, SearchType::NoMove);
    }
}
