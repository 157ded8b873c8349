use crate::cube::Player;
use std::path::PathBuf;

/// Reasons a move is rejected. The game is left untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("invalid coordinates ({x}, {y}, {z}): each must be between 1 and 4")]
    OutOfRange { x: i32, y: i32, z: i32 },

    #[error("cell ({x}, {y}, {z}) is already occupied")]
    CellOccupied { x: i32, y: i32, z: i32 },

    #[error("it is not this move's turn: {expected} is to move")]
    WrongTurn { expected: Player },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
