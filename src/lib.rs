//! Gomoku engine with a depth-limited alpha-beta opponent
//!
//! Freestyle five-in-a-row on a 15x15 board:
//! - Black moves first, colors alternate
//! - Five or more stones in a row (any of the four axes) wins
//! - A full board without a five is a draw
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Fixed-size grid with paired place/undo
//! - [`rules`]: Win detection through the last placed stone
//! - [`eval`]: Per-placement line scoring and whole-position evaluation
//! - [`search`]: Candidate generation and alpha-beta search
//! - [`engine`]: Move policy for the computer opponent
//! - [`game`]: Turn orchestration, terminal detection, engine auto-reply
//! - [`config`]: TOML-loadable engine and game settings
//! - [`ui`]: egui front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameController, GameStatus, Pos, Stone};
//!
//! // Human plays Black, the engine answers as White.
//! let mut game = GameController::default();
//! game.place(Pos::new(7, 7), Stone::Black).unwrap();
//!
//! assert_eq!(game.board().stone_count(), 2);
//! assert_eq!(game.status(), GameStatus::WaitingFor(Stone::Black));
//! ```
//!
//! # Search
//!
//! Each engine move runs a fixed-depth alpha-beta search (2 plies by
//! default, never more than 3) over at most 8 ranked candidates per node.
//! There is no time limit; the worst case is bounded by
//! `branch_limit ^ depth` leaf evaluations.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, BOARD_SIZE};
pub use config::{EngineConfig, GameConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, PlaceError};
pub use game::{GameController, GameEvent, GameStatus, Outcome};
