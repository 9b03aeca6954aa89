//! Game rules for freestyle Gomoku
//!
//! Five or more stones in a row wins; a full board without a five is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, has_five_at, WinLine, WIN_LENGTH};
