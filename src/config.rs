use crate::bot::WIN_SCORE;
use crate::cube::Rules;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Jitter added to top-level move scores by default.
pub const DEFAULT_JITTER: i32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameMode {
    /// Human against the engine. The human always moves first.
    #[default]
    SinglePlayer,
    /// Two humans sharing the board; the second one plays the `O` marks.
    TwoPlayer,
}

impl GameMode {
    pub fn vs_computer(self) -> bool {
        self == GameMode::SinglePlayer
    }
}

/// Strength of the engine, expressed as its search depth in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Difficulty {
    #[default]
    Easy,
    Difficult,
    Insane,
}

impl Difficulty {
    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Difficult),
            3 => Some(Difficulty::Insane),
            _ => None,
        }
    }

    /// Like [`Difficulty::from_level`], falling back to `Easy` with a warning.
    pub fn from_level_or_default(level: u8) -> Self {
        Self::from_level(level).unwrap_or_else(|| {
            tracing::warn!(level, "invalid difficulty, defaulting to easy");
            Difficulty::Easy
        })
    }

    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Difficult => 2,
            Difficulty::Insane => 3,
        }
    }

    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Difficult => 4,
            Difficulty::Insane => 6,
        }
    }
}

/// How the configured depth is used when picking a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Deepen from 1 and keep the first depth that yields a move. Any
    /// non-full board yields one at depth 1, so deeper searches never run.
    #[default]
    FirstCompletedDepth,
    /// Search once, directly at the configured depth.
    FullDepth,
}

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: GameMode,
    pub difficulty: Difficulty,
    pub search_mode: SearchMode,
    pub rules: Rules,
    /// Half-width of the uniform noise added to each root move score.
    /// 0 makes move selection deterministic.
    pub jitter: i32,
    /// Seed for the jitter source. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            mode: GameMode::default(),
            difficulty: Difficulty::default(),
            search_mode: SearchMode::default(),
            rules: Rules::default(),
            jitter: DEFAULT_JITTER,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(mode: GameMode, difficulty: Difficulty) -> Self {
        GameConfig {
            mode,
            difficulty,
            ..Default::default()
        }
    }

    /// Parse a JSON document. Missing fields take their defaults.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }

    pub fn search_depth(&self) -> u8 {
        self.difficulty.depth()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Two jittered scores a full win apart must never swap order.
        if self.jitter < 0 || self.jitter >= WIN_SCORE / 2 {
            return Err(ConfigError::Validation(format!(
                "jitter must be in [0, {})",
                WIN_SCORE / 2
            )));
        }
        Ok(())
    }
}
