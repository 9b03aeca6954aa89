//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. All game logic
//! lives in [`crate::GameController`]; the GUI only renders it and forwards
//! clicks and key presses.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
