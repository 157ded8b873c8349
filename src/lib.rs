//! # cubey
//!
//! Engine for tic-tac-toe on a 4x4x4 cube: win detection, an alpha-beta
//! minimax opponent and the move protocol a front end drives.
//!
//! ```
//! use cubey::{Game, GameMode, MoveOutcome};
//!
//! let mut game = Game::new(GameMode::SinglePlayer, 1);
//! game.apply_human_move(1, 1, 1).unwrap();
//! match game.apply_computer_move().unwrap() {
//!     MoveOutcome::Continue { placed } => println!("computer played {placed}"),
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cube`]: coordinates, board, players and winning lines
//! - [`bot`]: the minimax bot and a random baseline
//! - [`game`]: turn handling and move outcomes
//! - [`config`]: game configuration and validation
//! - [`error`]: error types

pub mod bot;
pub mod config;
pub mod cube;
pub mod error;
pub mod game;

pub use bot::{CubeBot, MinimaxBot, RandomBot, SearchResult};
pub use config::{Difficulty, GameConfig, GameMode, SearchMode};
pub use cube::{Board, Cell, Coordinates, LineKind, Player, Rules, Snapshot, WinLine};
pub use error::{ConfigError, MoveError};
pub use game::{Game, GameStatus, MoveOutcome};
