//! Board representation and the rules of 4x4x4 tic-tac-toe.

mod board;
mod coord;
mod lines;
mod player;

pub use board::{Board, Cell, Snapshot};
pub use coord::{CELL_COUNT, Coordinates, Direction, LAYER_SIZE, SIZE};
pub use lines::{Line, LineKind, Rules, WinLine, check_line, check_winner, is_tie};
pub use player::Player;
