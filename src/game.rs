//! The move/turn protocol a presentation layer drives.

use crate::bot::MinimaxBot;
use crate::config::{Difficulty, GameConfig, GameMode};
use crate::cube::{Board, Coordinates, Player, Snapshot, WinLine, check_winner, is_tie};
use crate::error::{ConfigError, MoveError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// `None` is a tie.
    Ended(Option<Player>),
}

/// What happened after a move request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed and the turn passed to the other player.
    Continue { placed: Coordinates },
    /// The mark was placed and ended the game.
    GameOver {
        placed: Coordinates,
        winner: Option<Player>,
        winning_line: Option<WinLine>,
    },
    /// The game was already over; nothing changed.
    AlreadyEnded,
}

/// One game of 4x4x4 tic-tac-toe. The human always moves first.
pub struct Game {
    board: Board,
    config: GameConfig,
    current_player: Player,
    status: GameStatus,
    winning_line: Option<WinLine>,
    bot: MinimaxBot,
}

impl Game {
    /// Starts a game from a difficulty level (1, 2 or 3). Any other level
    /// logs a warning and plays at level 1.
    pub fn new(mode: GameMode, level: u8) -> Self {
        let config = GameConfig::new(mode, Difficulty::from_level_or_default(level));
        Self::start(config)
    }

    pub fn with_config(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::start(config))
    }

    /// Resumes play from an arbitrary position with `to_move` to play. A
    /// position that already holds a line or is full starts out ended.
    pub fn from_position(
        config: GameConfig,
        board: Board,
        to_move: Player,
    ) -> Result<Self, ConfigError> {
        let mut game = Self::with_config(config)?;
        game.board = board;
        game.current_player = to_move;

        let rules = game.config.rules;
        for player in [to_move.other(), to_move] {
            if let Some(line) = check_winner(&game.board, player.to_cell(), rules) {
                game.status = GameStatus::Ended(Some(player));
                game.winning_line = Some(line);
                return Ok(game);
            }
        }
        if is_tie(&game.board) {
            game.status = GameStatus::Ended(None);
        }
        Ok(game)
    }

    fn start(config: GameConfig) -> Self {
        tracing::info!(
            mode = ?config.mode,
            difficulty = ?config.difficulty,
            depth = config.search_depth(),
            "starting game"
        );
        Game {
            board: Board::new(),
            bot: MinimaxBot::from_config(&config),
            config,
            current_player: Player::Human,
            status: GameStatus::InProgress,
            winning_line: None,
        }
    }

    /// Clears the board and starts over with the same mode and difficulty.
    /// The jitter source keeps its state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::Human;
        self.status = GameStatus::InProgress;
        self.winning_line = None;
        self.bot.set_depth(self.config.search_depth());
        tracing::info!("game reset");
    }

    /// Places the current player's mark at 1-based `(x, y, z)`.
    ///
    /// In two-player mode both humans use this; the second one plays the
    /// computer's marks.
    pub fn apply_human_move(&mut self, x: i32, y: i32, z: i32) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Ok(MoveOutcome::AlreadyEnded);
        }
        if self.config.mode.vs_computer() && self.current_player == Player::Computer {
            return Err(MoveError::WrongTurn {
                expected: Player::Computer,
            });
        }

        let coords =
            Coordinates::from_one_based(x, y, z).ok_or(MoveError::OutOfRange { x, y, z })?;
        if !self.board.is_empty(coords) {
            return Err(MoveError::CellOccupied { x, y, z });
        }

        Ok(self.place(coords))
    }

    /// Lets the engine pick and play the computer's move.
    pub fn apply_computer_move(&mut self) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Ok(MoveOutcome::AlreadyEnded);
        }
        if !self.config.mode.vs_computer() || self.current_player != Player::Computer {
            return Err(MoveError::WrongTurn {
                expected: self.current_player,
            });
        }

        match self.bot.search(&mut self.board) {
            Some(found) => Ok(self.place(found.best_move)),
            None => {
                // Unreachable through play: filling the board ends the game.
                self.status = GameStatus::Ended(None);
                Ok(MoveOutcome::AlreadyEnded)
            }
        }
    }

    fn place(&mut self, coords: Coordinates) -> MoveOutcome {
        let mover = self.current_player;
        self.board.set_at(coords, mover.to_cell());

        if let Some(line) = check_winner(&self.board, mover.to_cell(), self.config.rules) {
            tracing::info!(winner = %mover, kind = ?line.kind(), "game won");
            self.status = GameStatus::Ended(Some(mover));
            self.winning_line = Some(line);
            MoveOutcome::GameOver {
                placed: coords,
                winner: Some(mover),
                winning_line: Some(line),
            }
        } else if is_tie(&self.board) {
            tracing::info!("game tied");
            self.status = GameStatus::Ended(None);
            MoveOutcome::GameOver {
                placed: coords,
                winner: None,
                winning_line: None,
            }
        } else {
            self.current_player = mover.other();
            MoveOutcome::Continue { placed: coords }
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The grid for rendering, indexed `[z][y][x]`.
    pub fn board_snapshot(&self) -> Snapshot {
        self.board.snapshot()
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, GameStatus::Ended(_))
    }

    pub fn winning_line(&self) -> Option<&WinLine> {
        self.winning_line.as_ref()
    }

    pub fn mode(&self) -> GameMode {
        self.config.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.config.difficulty
    }

    pub fn search_depth(&self) -> u8 {
        self.config.search_depth()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
