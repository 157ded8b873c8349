use crate::config::{DEFAULT_JITTER, GameConfig, SearchMode};
use crate::cube::{Board, CELL_COUNT, Cell, Coordinates, Rules, check_winner};
use fixedbitset::FixedBitSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::{cmp, time::Instant};

use super::CubeBot;

pub const WIN_SCORE: i32 = 1000;

pub const LOSE_SCORE: i32 = -WIN_SCORE;

const INFINITY: i32 = i32::MAX / 2;

/// Counters collected while a search runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Calls to [`minimax`].
    pub nodes: u64,
    /// Deepest ply a node was visited at, root children being ply 0.
    pub max_ply: u8,
}

/// Outcome of [`find_best_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Coordinates,
    /// Jittered score of `best_move`.
    pub score: i32,
    /// Depth limit the move was chosen at.
    pub depth: u8,
    pub stats: SearchStats,
}

/// Uniform noise in `[-amplitude, amplitude]` added to each root move score so
/// equally valued moves are not always resolved the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Jitter {
    amplitude: i32,
}

impl Jitter {
    pub const NONE: Jitter = Jitter { amplitude: 0 };

    pub fn new(amplitude: i32) -> Self {
        Self {
            amplitude: amplitude.abs(),
        }
    }

    pub fn amplitude(&self) -> i32 {
        self.amplitude
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> i32 {
        if self.amplitude == 0 {
            0
        } else {
            rng.random_range(-self.amplitude..=self.amplitude)
        }
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self::new(DEFAULT_JITTER)
    }
}

/// Search view over a board borrowed for the length of one search. Every
/// trial move is undone before the search returns.
pub struct MinimaxState<'a> {
    board: &'a mut Board,
    available_mask: FixedBitSet,
    rules: Rules,
    stats: SearchStats,
}

impl<'a> MinimaxState<'a> {
    pub fn new(board: &'a mut Board, rules: Rules) -> Self {
        let mut available_mask = FixedBitSet::with_capacity(CELL_COUNT);
        for idx in 0..CELL_COUNT {
            if board.cell(idx) == Cell::Empty {
                available_mask.insert(idx);
            }
        }

        Self {
            board,
            available_mask,
            rules,
            stats: SearchStats::default(),
        }
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn make_move(&mut self, idx: usize, cell: Cell) {
        self.board.set_cell(idx, cell);
        self.available_mask.set(idx, false);
    }

    fn undo_move(&mut self, idx: usize) {
        self.board.set_cell(idx, Cell::Empty);
        self.available_mask.set(idx, true);
    }

    /// Empty cells, closest to the center first.
    fn available_cells(&self) -> impl Iterator<Item = usize> + '_ {
        Board::priority_order()
            .iter()
            .copied()
            .filter(|&idx| self.available_mask.contains(idx))
    }

    fn is_full(&self) -> bool {
        self.available_mask.is_clear()
    }
}

/// +1000 if the computer owns a line, -1000 if the human does, 0 otherwise.
pub fn evaluate_state(state: &MinimaxState) -> i32 {
    if check_winner(&*state.board, Cell::Computer, state.rules).is_some() {
        return WIN_SCORE;
    }
    if check_winner(&*state.board, Cell::Human, state.rules).is_some() {
        return LOSE_SCORE;
    }
    0
}

/// Alpha-beta minimax. The computer maximizes; `depth` counts plies from the
/// root children up to `depth_limit`.
pub fn minimax(
    state: &mut MinimaxState,
    depth: u8,
    maximizing_player: bool,
    mut alpha: i32,
    mut beta: i32,
    depth_limit: u8,
) -> i32 {
    state.stats.nodes += 1;
    state.stats.max_ply = cmp::max(state.stats.max_ply, depth);

    let score = evaluate_state(state);
    if score == WIN_SCORE || score == LOSE_SCORE || state.is_full() || depth >= depth_limit {
        return score;
    }

    let moves: SmallVec<[usize; CELL_COUNT]> = state.available_cells().collect();

    if maximizing_player {
        let mut best_score = -INFINITY;

        for move_idx in moves {
            state.make_move(move_idx, Cell::Computer);

            let score = minimax(state, depth + 1, false, alpha, beta, depth_limit);

            state.undo_move(move_idx);

            best_score = cmp::max(best_score, score);

            alpha = cmp::max(alpha, best_score);
            if beta <= alpha {
                break;
            }
        }
        best_score
    } else {
        let mut worst_score = INFINITY;

        for move_idx in moves {
            state.make_move(move_idx, Cell::Human);

            let score = minimax(state, depth + 1, true, alpha, beta, depth_limit);

            state.undo_move(move_idx);

            worst_score = cmp::min(worst_score, score);

            beta = cmp::min(beta, worst_score);
            if beta <= alpha {
                break;
            }
        }
        worst_score
    }
}

/// Picks the computer's move. Root scores get `jitter` added once each; the
/// strictly greatest wins, so ties go to the cell nearer the center.
///
/// Returns `None` only when no cell is empty.
pub fn find_best_move<R: Rng + ?Sized>(
    state: &mut MinimaxState,
    search_depth: u8,
    mode: SearchMode,
    jitter: Jitter,
    rng: &mut R,
) -> Option<SearchResult> {
    let moves: SmallVec<[usize; CELL_COUNT]> = state.available_cells().collect();
    if moves.is_empty() {
        return None;
    }

    let max_depth = cmp::max(search_depth, 1);
    let first_depth = match mode {
        SearchMode::FirstCompletedDepth => 1,
        SearchMode::FullDepth => max_depth,
    };

    for depth in first_depth..=max_depth {
        let mut best_score = -INFINITY;
        let mut best_move = None;

        for &move_idx in &moves {
            state.make_move(move_idx, Cell::Computer);

            let raw = minimax(state, 0, false, -INFINITY, INFINITY, depth);

            state.undo_move(move_idx);

            let score = raw + jitter.sample(rng);
            if score > best_score {
                best_score = score;
                best_move = Some(move_idx);
            }

            if best_score == WIN_SCORE {
                break;
            }
        }

        tracing::debug!(
            depth,
            best_move = ?best_move.map(Coordinates::from_index),
            score = best_score,
            nodes = state.stats.nodes,
            "search depth finished"
        );

        if let Some(move_idx) = best_move {
            return Some(SearchResult {
                best_move: Coordinates::from_index(move_idx),
                score: best_score,
                depth,
                stats: state.stats,
            });
        }
    }

    None
}

pub struct MinimaxBot {
    depth: u8,
    mode: SearchMode,
    rules: Rules,
    jitter: Jitter,
    rng: StdRng,
    last_search: Option<SearchResult>,
}

impl MinimaxBot {
    pub fn new(depth: u8, rules: Rules) -> Self {
        Self {
            depth,
            mode: SearchMode::default(),
            rules,
            jitter: Jitter::default(),
            rng: StdRng::from_os_rng(),
            last_search: None,
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        let bot = Self::new(config.search_depth(), config.rules)
            .with_mode(config.search_mode)
            .with_jitter(Jitter::new(config.jitter));
        match config.seed {
            Some(seed) => bot.with_seed(seed),
            None => bot,
        }
    }

    pub fn with_mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn last_search(&self) -> Option<&SearchResult> {
        self.last_search.as_ref()
    }

    /// Searches `board` in place. The board is back in its original state
    /// when this returns.
    pub fn search(&mut self, board: &mut Board) -> Option<SearchResult> {
        let start_time = Instant::now();

        let mut state = MinimaxState::new(board, self.rules);
        let result = find_best_move(&mut state, self.depth, self.mode, self.jitter, &mut self.rng);

        if let Some(found) = &result {
            tracing::info!(
                best_move = %found.best_move,
                score = found.score,
                depth = found.depth,
                nodes = found.stats.nodes,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "move calculated"
            );
        }

        self.last_search = result;
        result
    }
}

impl CubeBot for MinimaxBot {
    fn name(&self) -> &str {
        "minimax_bot"
    }

    fn choose_move(&mut self, board: &Board) -> Option<Coordinates> {
        let mut scratch = *board;
        self.search(&mut scratch).map(|found| found.best_move)
    }
}
