//! Text front end: play in a terminal or watch the engine play itself.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use gomoku::config::parse_ai_side;
use gomoku::{AIEngine, GameConfig, GameController, GameEvent, GameStatus, Pos};

#[derive(Parser)]
#[command(name = "gomoku-cli", about = "Gomoku in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "gomoku.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play interactively; enter moves as "row col"
    Play {
        /// Side the engine plays: black, white or none
        #[arg(long)]
        ai: Option<String>,
    },
    /// Let the engine play both sides
    Selfplay {
        /// Number of games to play
        #[arg(long, default_value_t = 1)]
        games: usize,

        /// Print the board after every move
        #[arg(long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { ai } => {
            let mut config = config;
            if let Some(side) = ai {
                config.ai_player = parse_ai_side(&side)?;
            }
            play(config)
        }
        Command::Selfplay { games, verbose } => selfplay(config, games, verbose),
    }
}

/// Parse "row col" (0-based, separated by whitespace or a comma).
fn parse_move(line: &str) -> Option<(u8, u8)> {
    let mut parts = line.split(|c: char| c.is_whitespace() || c == ',').filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row, col))
}

fn print_status(game: &GameController) {
    println!("{}", game.board());
    match game.status() {
        GameStatus::WaitingFor(stone) => println!("{} to move", stone.name()),
        GameStatus::Won(stone) => println!("{} wins!", stone.name()),
        GameStatus::Draw => println!("Draw."),
    }
}

fn play(config: GameConfig) -> Result<()> {
    let mut game = GameController::new(config);
    println!("Commands: \"row col\" to play, \"undo\", \"new\", \"quit\".");
    print_status(&game);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();

        match line {
            "" => {}
            "quit" | "q" => break,
            "undo" | "u" => {
                if !game.undo_turn() {
                    println!("Nothing to undo.");
                }
                print_status(&game);
            }
            "new" | "n" => {
                game.new_game();
                print_status(&game);
            }
            _ => match parse_move(line) {
                // The board re-checks the range; this only rejects values
                // that do not fit a coordinate at all.
                Some((row, col)) => match game.play(Pos { row, col }) {
                    Ok(events) => {
                        for event in &events {
                            if let GameEvent::AiMoved { pos, result } = event {
                                println!(
                                    "Engine plays {pos} (score {:.0}, depth {}, {} nodes, {}ms)",
                                    result.score, result.depth, result.nodes, result.time_ms
                                );
                            }
                        }
                        print_status(&game);
                    }
                    Err(err) => println!("Illegal move: {err}"),
                },
                None => println!("Could not parse \"{line}\"; expected \"row col\"."),
            },
        }
        print!("> ");
        stdout.flush().context("flushing stdout")?;
    }
    Ok(())
}

fn selfplay(config: GameConfig, games: usize, verbose: bool) -> Result<()> {
    let pvp = GameConfig {
        ai_player: None,
        ..config
    };
    let mut engine = AIEngine::new(pvp.engine.clone());
    let mut tally = [0usize; 3];

    for game_no in 1..=games {
        let mut game = GameController::new(pvp.clone());
        while let GameStatus::WaitingFor(color) = game.status() {
            let mut scratch = game.board().clone();
            let result = engine.choose_move(&mut scratch, color);
            let pos = result
                .best_move
                .context("engine found no move on a non-terminal board")?;
            game.play(pos)
                .with_context(|| format!("engine move {pos} rejected"))?;
            if verbose {
                println!("{} plays {pos} (score {:.0})", color.name(), result.score);
                println!("{}", game.board());
            }
        }

        let status = game.status();
        match status {
            GameStatus::Won(stone) if stone == pvp.first_player => tally[0] += 1,
            GameStatus::Won(_) => tally[1] += 1,
            _ => tally[2] += 1,
        }
        println!("Game {game_no}: {status:?} after {} moves", game.history().len());
        if !verbose {
            println!("{}", game.board());
        }
    }

    println!(
        "First player {} / second player {} / draws {}",
        tally[0], tally[1], tally[2]
    );
    Ok(())
}
