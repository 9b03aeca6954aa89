//! Gomoku GUI
//!
//! A graphical interface for playing Gomoku against the engine or another player.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use gomoku::ui::GomokuApp;
use gomoku::config::parse_ai_side;
use gomoku::GameConfig;

/// Play Gomoku in a window.
#[derive(Parser)]
#[command(name = "gomoku", about = "Five in a row against an alpha-beta engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Side the engine plays: black, white or none
    #[arg(long)]
    ai: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(side) = &cli.ai {
        config.ai_player = parse_ai_side(side)?;
    }
    tracing::info!(ai = ?config.ai_player, "starting GUI");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("GUI failed: {e}"))
}
