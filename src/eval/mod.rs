//! Evaluation module for Gomoku positions
//!
//! The evaluation considers:
//! - Line patterns (twos, threes, fours, fives) a placement would form
//! - Open ends of those lines
//! - Positional bias toward the center
//! - Defensive weighting of the opponent's best placements

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate_board, score_if_placed, OPPONENT_WEIGHT};
pub use patterns::{line_score, PatternScore, Score};
