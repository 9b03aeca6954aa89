//! Error types for move handling and configuration loading

use std::path::PathBuf;

use crate::board::{Pos, Stone};

/// Reasons a placement is rejected. A rejected placement never changes state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlaceError {
    #[error("position ({row}, {col}) is off the board")]
    OutOfRange { row: u8, col: u8 },

    #[error("cell {0} is already occupied")]
    Occupied(Pos),

    #[error("cannot place an empty stone")]
    EmptyStone,

    #[error("the game is over")]
    GameOver,

    #[error("it is {expected:?}'s turn, not {got:?}'s")]
    NotYourTurn { expected: Stone, got: Stone },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("unknown side '{0}' (expected black, white or none)")]
    InvalidSide(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_error_display() {
        let err = PlaceError::Occupied(Pos::new(7, 7));
        assert_eq!(err.to_string(), "cell (7, 7) is already occupied");

        let err = PlaceError::OutOfRange { row: 15, col: 2 };
        assert_eq!(err.to_string(), "position (15, 2) is off the board");
    }

    #[test]
    fn test_not_your_turn_display() {
        let err = PlaceError::NotYourTurn {
            expected: Stone::Black,
            got: Stone::White,
        };
        assert_eq!(err.to_string(), "it is Black's turn, not White's");
    }

    #[test]
    fn test_invalid_side_display() {
        let err = ConfigError::InvalidSide("red".to_string());
        assert_eq!(err.to_string(), "unknown side 'red' (expected black, white or none)");
    }
}
