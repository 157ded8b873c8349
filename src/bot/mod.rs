//! Move pickers. [`MinimaxBot`] is the engine's opponent; [`RandomBot`] is a
//! baseline used by the match runner.

mod minimax;
mod random;

pub use minimax::{
    Jitter, LOSE_SCORE, MinimaxBot, MinimaxState, SearchResult, SearchStats, WIN_SCORE,
    evaluate_state, find_best_move, minimax,
};
pub use random::RandomBot;

use crate::cube::{Board, Coordinates};

/// Something that can pick a cell to play.
pub trait CubeBot {
    fn name(&self) -> &str;

    /// Chooses an empty cell, `None` when the board is full.
    fn choose_move(&mut self, board: &Board) -> Option<Coordinates>;
}
