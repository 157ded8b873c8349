use cubey::bot::Jitter;
use cubey::cube::{CELL_COUNT, check_winner};
use cubey::{Board, Cell, Coordinates, Game, GameConfig, MinimaxBot, Player, Rules, SearchMode};
use proptest::prelude::*;

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![Just(Cell::Empty), Just(Cell::Human), Just(Cell::Computer)]
}

fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(cell_strategy(), CELL_COUNT).prop_map(|cells| {
        let mut grid = [Cell::Empty; CELL_COUNT];
        grid.copy_from_slice(&cells);
        Board::from_cells(grid)
    })
}

fn rules_strategy() -> impl Strategy<Value = Rules> {
    prop_oneof![Just(Rules::Classic), Just(Rules::Complete)]
}

fn is_collinear(cells: &[Coordinates; 4]) -> bool {
    let step = |a: u8, b: u8| b as i16 - a as i16;
    let dir = (
        step(cells[0].x(), cells[1].x()),
        step(cells[0].y(), cells[1].y()),
        step(cells[0].z(), cells[1].z()),
    );
    cells.windows(2).all(|w| {
        (
            step(w[0].x(), w[1].x()),
            step(w[0].y(), w[1].y()),
            step(w[0].z(), w[1].z()),
        ) == dir
    }) && dir != (0, 0, 0)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn winning_lines_are_collinear_and_owned(board in board_strategy(), rules in rules_strategy()) {
        for cell in [Cell::Human, Cell::Computer] {
            if let Some(line) = check_winner(&board, cell, rules) {
                prop_assert!(is_collinear(line.cells()));
                for &coords in line.cells() {
                    prop_assert!(coords.is_valid());
                    prop_assert_eq!(board.at(coords), cell);
                }
            }
        }
    }

    #[test]
    fn search_leaves_the_board_unchanged(
        board in board_strategy(),
        seed in any::<u64>(),
        full_depth in any::<bool>(),
    ) {
        let mode = if full_depth { SearchMode::FullDepth } else { SearchMode::FirstCompletedDepth };
        let mut bot = MinimaxBot::new(2, Rules::Classic).with_mode(mode).with_seed(seed);
        let mut searched = board;

        let found = bot.search(&mut searched);

        prop_assert_eq!(searched.snapshot(), board.snapshot());
        match found {
            Some(result) => {
                prop_assert!(board.is_empty(result.best_move));
                prop_assert!(result.stats.max_ply <= result.depth);
            }
            None => prop_assert!(board.is_full()),
        }
    }

    #[test]
    fn rejected_moves_change_nothing(x in -2i32..7, y in -2i32..7, z in -2i32..7) {
        let mut game = Game::with_config(GameConfig { jitter: Jitter::NONE.amplitude(), ..GameConfig::default() }).unwrap();
        game.apply_human_move(2, 2, 2).unwrap();
        game.apply_computer_move().unwrap();
        let before = game.board_snapshot();

        if game.apply_human_move(x, y, z).is_err() {
            prop_assert_eq!(game.board_snapshot(), before);
            prop_assert_eq!(game.current_player(), Player::Human);
        }
        prop_assert_eq!(game.board_snapshot(), game.board_snapshot());
    }
}
