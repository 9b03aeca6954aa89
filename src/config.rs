//! Engine and game configuration, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::Stone;
use crate::error::ConfigError;

/// Deepest search the engine will run; larger settings are clamped to this.
pub const MAX_SEARCH_DEPTH: i32 = 3;

/// Search and evaluation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Base search depth in plies
    pub depth: i32,
    /// Depth cap when the candidate set is small enough to deepen
    pub max_depth: i32,
    /// Maximum candidates searched per node
    pub branch_limit: usize,
    /// Best placements per side summed by the static evaluation
    pub top_k: usize,
    /// Deepen to `max_depth` when the root has at most this many candidates
    pub deepen_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            max_depth: 3,
            branch_limit: 8,
            top_k: 6,
            deepen_threshold: 8,
        }
    }
}

impl EngineConfig {
    /// Clamp out-of-range values to the nearest usable setting.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.depth < 0 {
            tracing::warn!(depth = self.depth, "negative search depth, using 0");
            self.depth = 0;
        }
        if self.depth > MAX_SEARCH_DEPTH {
            tracing::warn!(depth = self.depth, cap = MAX_SEARCH_DEPTH, "search depth too large, clamping");
            self.depth = MAX_SEARCH_DEPTH;
        }
        if self.max_depth > MAX_SEARCH_DEPTH {
            tracing::warn!(max_depth = self.max_depth, cap = MAX_SEARCH_DEPTH, "max_depth too large, clamping");
            self.max_depth = MAX_SEARCH_DEPTH;
        }
        if self.max_depth < self.depth {
            tracing::warn!(
                max_depth = self.max_depth,
                depth = self.depth,
                "max_depth below depth, raising it"
            );
            self.max_depth = self.depth;
        }
        if self.branch_limit < 1 {
            tracing::warn!("branch_limit below 1, using 1");
            self.branch_limit = 1;
        }
        if self.top_k < 1 {
            tracing::warn!("top_k below 1, using 1");
            self.top_k = 1;
        }
        self
    }
}

/// Who plays what in a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side controlled by the engine, `None` for two humans
    pub ai_player: Option<Stone>,
    /// Side that moves first
    pub first_player: Stone,
    pub engine: EngineConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_player: Some(Stone::White),
            first_player: Stone::Black,
            engine: EngineConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        Ok(config.sanitized())
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::info!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.first_player == Stone::Empty {
            tracing::warn!("first_player cannot be Empty, using Black");
            self.first_player = Stone::Black;
        }
        if self.ai_player == Some(Stone::Empty) {
            tracing::warn!("ai_player cannot be Empty, disabling the engine");
            self.ai_player = None;
        }
        self.engine = self.engine.sanitized();
        self
    }
}

/// Parse an engine side as given on a command line: `black`, `white` or
/// `none` (case-insensitive, `b`/`w`/`off` accepted).
pub fn parse_ai_side(side: &str) -> Result<Option<Stone>, ConfigError> {
    match side.trim().to_ascii_lowercase().as_str() {
        "black" | "b" => Ok(Some(Stone::Black)),
        "white" | "w" => Ok(Some(Stone::White)),
        "none" | "off" => Ok(None),
        _ => Err(ConfigError::InvalidSide(side.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.ai_player, Some(Stone::White));
        assert_eq!(config.first_player, Stone::Black);
        assert_eq!(config.engine.depth, 2);
        assert_eq!(config.engine.max_depth, 3);
        assert_eq!(config.engine.branch_limit, 8);
        assert_eq!(config.engine.top_k, 6);
    }

    #[test]
    fn test_sanitize_clamps_invalid_values() {
        let engine = EngineConfig {
            depth: -3,
            max_depth: -5,
            branch_limit: 0,
            top_k: 0,
            deepen_threshold: 8,
        }
        .sanitized();

        assert_eq!(engine.depth, 0);
        assert_eq!(engine.max_depth, 0);
        assert_eq!(engine.branch_limit, 1);
        assert_eq!(engine.top_k, 1);

        let engine = EngineConfig {
            depth: 7,
            max_depth: 9,
            ..EngineConfig::default()
        }
        .sanitized();
        assert_eq!(engine.depth, MAX_SEARCH_DEPTH);
        assert_eq!(engine.max_depth, MAX_SEARCH_DEPTH);
    }

    #[test]
    fn test_sanitize_keeps_valid_values() {
        let engine = EngineConfig::default();
        assert_eq!(engine.clone().sanitized(), engine);
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            ai_player = "Black"

            [engine]
            branch_limit = 12
        "#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ai_player, Some(Stone::Black));
        assert_eq!(config.first_player, Stone::Black);
        assert_eq!(config.engine.branch_limit, 12);
        assert_eq!(config.engine.depth, 2);
    }

    #[test]
    fn test_empty_ai_player_disables_engine() {
        let config = GameConfig {
            ai_player: Some(Stone::Empty),
            ..GameConfig::default()
        }
        .sanitized();
        assert_eq!(config.ai_player, None);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = GameConfig::load_or_default(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_parse_ai_side() {
        assert_eq!(parse_ai_side("Black").unwrap(), Some(Stone::Black));
        assert_eq!(parse_ai_side("w").unwrap(), Some(Stone::White));
        assert_eq!(parse_ai_side("none").unwrap(), None);
        assert!(matches!(parse_ai_side("red"), Err(ConfigError::InvalidSide(_))));
    }
}
