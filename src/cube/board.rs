use super::coord::{CELL_COUNT, Coordinates, SIZE};
use super::player::Player;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Computer,
}

impl Cell {
    /// Owner of the cell, `None` when empty
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Computer => Some(Player::Computer),
        }
    }
}

/// Board grid indexed `[z][y][x]`, one 4x4 layer per z.
pub type Snapshot = [[[Cell; SIZE]; SIZE]; SIZE];

/// Center index used by the priority heuristic.
const CENTER: i32 = (SIZE / 2) as i32;

/// Every cell index, enumerated with x outermost and z innermost, then
/// stable-sorted by priority (closest to center first).
static PRIORITY_ORDER: LazyLock<[usize; CELL_COUNT]> = LazyLock::new(|| {
    let mut order = [0usize; CELL_COUNT];
    let mut i = 0;
    for x in 0..SIZE as u8 {
        for y in 0..SIZE as u8 {
            for z in 0..SIZE as u8 {
                order[i] = Coordinates::new(x, y, z).to_index();
                i += 1;
            }
        }
    }
    order.sort_by_key(|&idx| std::cmp::Reverse(Board::priority(Coordinates::from_index(idx))));
    order
});

/// The 4x4x4 grid. Cells are stored flat at `x + y * 4 + z * 16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Board { cells }
    }

    /// Cell at `coords`.
    ///
    /// # Panics
    ///
    /// Panics if `coords` lies outside the cube.
    pub fn at(&self, coords: Coordinates) -> Cell {
        assert!(coords.is_valid(), "coordinates {coords} outside the board");
        self.cells[coords.to_index()]
    }

    /// Unconditional write. Same precondition as [`Board::at`].
    pub fn set_at(&mut self, coords: Coordinates, cell: Cell) {
        assert!(coords.is_valid(), "coordinates {coords} outside the board");
        self.cells[coords.to_index()] = cell;
    }

    pub fn is_empty(&self, coords: Coordinates) -> bool {
        self.at(coords) == Cell::Empty
    }

    pub(crate) fn cell(&self, idx: usize) -> Cell {
        self.cells[idx]
    }

    pub(crate) fn set_cell(&mut self, idx: usize, cell: Cell) {
        self.cells[idx] = cell;
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Empty).count()
    }

    /// Empty cells in [`Board::priority_order`].
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinates> + '_ {
        Self::priority_order()
            .iter()
            .copied()
            .filter(|&idx| self.cells[idx] == Cell::Empty)
            .map(Coordinates::from_index)
    }

    /// Center cells are more valuable: negative Manhattan distance from the
    /// center index, so 0 is best and -6 is a far corner.
    pub fn priority(coords: Coordinates) -> i32 {
        -((coords.x() as i32 - CENTER).abs()
            + (coords.y() as i32 - CENTER).abs()
            + (coords.z() as i32 - CENTER).abs())
    }

    /// All 64 cell indices in move-ordering order, best priority first.
    pub fn priority_order() -> &'static [usize; CELL_COUNT] {
        &PRIORITY_ORDER
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut grid = [[[Cell::Empty; SIZE]; SIZE]; SIZE];
        for (idx, &cell) in self.cells.iter().enumerate() {
            let c = Coordinates::from_index(idx);
            grid[c.z() as usize][c.y() as usize][c.x() as usize] = cell;
        }
        grid
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for idx in 0..CELL_COUNT {
            assert!(board.is_empty(Coordinates::from_index(idx)));
        }
        assert_eq!(board.empty_count(), CELL_COUNT);
        assert!(!board.is_full());
    }

    #[test]
    fn test_set_at_and_at() {
        let mut board = Board::new();
        let coords = Coordinates::new(1, 2, 3);
        board.set_at(coords, Cell::Human);

        assert_eq!(board.at(coords), Cell::Human);
        assert!(!board.is_empty(coords));
        assert_eq!(board.cell(coords.to_index()), Cell::Human);
        assert_eq!(board.empty_count(), CELL_COUNT - 1);
    }

    #[test]
    #[should_panic(expected = "outside the board")]
    fn test_at_panics_outside_the_board() {
        let board = Board::new();
        board.at(Coordinates::new(4, 0, 0));
    }

    #[test]
    fn test_clear_empties_every_cell() {
        let mut board = Board::from_cells([Cell::Computer; CELL_COUNT]);
        assert!(board.is_full());

        board.clear();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_priority_values() {
        assert_eq!(Board::priority(Coordinates::new(2, 2, 2)), 0);
        assert_eq!(Board::priority(Coordinates::new(1, 1, 1)), -3);
        assert_eq!(Board::priority(Coordinates::new(0, 0, 0)), -6);
        assert_eq!(Board::priority(Coordinates::new(3, 3, 3)), -3);
        assert_eq!(Board::priority(Coordinates::new(2, 3, 1)), -2);
    }

    #[test]
    fn test_priority_order_is_sorted_and_complete() {
        let order = Board::priority_order();
        let mut seen = [false; CELL_COUNT];
        for &idx in order {
            assert!(!seen[idx], "index {idx} appears twice");
            seen[idx] = true;
        }

        let priorities: Vec<i32> = order
            .iter()
            .map(|&idx| Board::priority(Coordinates::from_index(idx)))
            .collect();
        assert!(priorities.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(order[0], Coordinates::new(2, 2, 2).to_index());
    }

    #[test]
    fn test_priority_order_keeps_enumeration_order_on_ties() {
        // Priority -1 cells, x outermost then y then z.
        let order = Board::priority_order();
        let ties: Vec<Coordinates> = order[1..7]
            .iter()
            .map(|&idx| Coordinates::from_index(idx))
            .collect();
        assert_eq!(
            ties,
            vec![
                Coordinates::new(1, 2, 2),
                Coordinates::new(2, 1, 2),
                Coordinates::new(2, 2, 1),
                Coordinates::new(2, 2, 3),
                Coordinates::new(2, 3, 2),
                Coordinates::new(3, 2, 2),
            ]
        );
    }

    #[test]
    fn test_empty_cells_skips_occupied() {
        let mut board = Board::new();
        board.set_at(Coordinates::new(2, 2, 2), Cell::Computer);

        let first = board.empty_cells().next();
        assert_eq!(first, Some(Coordinates::new(1, 2, 2)));
        assert_eq!(board.empty_cells().count(), CELL_COUNT - 1);
    }

    #[test]
    fn test_snapshot_is_layered_by_z() {
        let mut board = Board::new();
        board.set_at(Coordinates::new(3, 1, 0), Cell::Human);
        board.set_at(Coordinates::new(0, 2, 3), Cell::Computer);

        let grid = board.snapshot();
        assert_eq!(grid[0][1][3], Cell::Human);
        assert_eq!(grid[3][2][0], Cell::Computer);
        assert_eq!(grid[1][1][1], Cell::Empty);
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::Human.owner(), Some(Player::Human));
        assert_eq!(Cell::Computer.owner(), Some(Player::Computer));
    }
}
