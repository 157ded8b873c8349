use crate::cube::{Board, Coordinates};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;

use super::CubeBot;

/// Plays a uniformly random empty cell.
pub struct RandomBot {
    rng: StdRng,
}

impl RandomBot {
    pub fn new() -> Self {
        RandomBot {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomBot {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomBot {
    fn default() -> Self {
        Self::new()
    }
}

impl CubeBot for RandomBot {
    fn name(&self) -> &str {
        "random_bot"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Coordinates> {
        board.empty_cells().choose(&mut self.rng)
    }
}
