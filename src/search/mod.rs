//! Search module for Gomoku AI
//!
//! Contains:
//! - Candidate generation (neighborhood scan, ranking, pruning)
//! - Depth-limited alpha-beta search

pub mod alphabeta;
pub mod candidates;

pub use alphabeta::{win_score, SearchResult, SearchStats, Searcher, INF, WIN_SCORE};
pub use candidates::{generate, neighborhood};
