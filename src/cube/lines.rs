//! Winning lines of the cube and the checks built on them.

use super::board::{Board, Cell};
use super::coord::{Coordinates, Direction, SIZE};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

const LAST: u8 = (SIZE - 1) as u8;

/// Which set of lines counts as a win.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Rules {
    /// Axis rows, the 4 space diagonals and the face diagonals of the z layers
    /// only (60 lines). Diagonals of the x and y faces do not win.
    #[default]
    Classic,
    /// Classic plus the x- and y-oriented face diagonals (76 lines).
    Complete,
}

impl Rules {
    /// Lines in the order they are scanned.
    pub fn lines(self) -> &'static [Line] {
        match self {
            Rules::Classic => &CLASSIC_LINES,
            Rules::Complete => &COMPLETE_LINES,
        }
    }
}

/// Four cells starting at `origin` and stepping by `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub origin: Coordinates,
    pub direction: Direction,
}

impl Line {
    const fn new(x: u8, y: u8, z: u8, direction: Direction) -> Self {
        Self {
            origin: Coordinates::new(x, y, z),
            direction,
        }
    }
}

static CLASSIC_LINES: LazyLock<Vec<Line>> = LazyLock::new(classic_lines);

static COMPLETE_LINES: LazyLock<Vec<Line>> = LazyLock::new(|| {
    let mut lines = classic_lines();
    for x in 0..SIZE as u8 {
        lines.push(Line::new(x, 0, 0, (0, 1, 1)));
        lines.push(Line::new(x, 0, LAST, (0, 1, -1)));
    }
    for y in 0..SIZE as u8 {
        lines.push(Line::new(0, y, 0, (1, 0, 1)));
        lines.push(Line::new(0, y, LAST, (1, 0, -1)));
    }
    lines
});

fn classic_lines() -> Vec<Line> {
    let mut lines = Vec::with_capacity(60);

    // Straight rows along x, y and z
    for i in 0..SIZE as u8 {
        for j in 0..SIZE as u8 {
            lines.push(Line::new(0, i, j, (1, 0, 0)));
            lines.push(Line::new(i, 0, j, (0, 1, 0)));
            lines.push(Line::new(i, j, 0, (0, 0, 1)));
        }
    }

    // Corner to corner
    lines.push(Line::new(0, 0, 0, (1, 1, 1)));
    lines.push(Line::new(0, LAST, 0, (1, -1, 1)));
    lines.push(Line::new(LAST, 0, 0, (-1, 1, 1)));
    lines.push(Line::new(LAST, LAST, 0, (-1, -1, 1)));

    // Diagonals of each z layer
    for z in 0..SIZE as u8 {
        lines.push(Line::new(0, 0, z, (1, 1, 0)));
        lines.push(Line::new(0, LAST, z, (1, -1, 0)));
    }

    lines
}

/// How a winning line crosses the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Changes on all three axes.
    SpaceDiagonal,
    /// Lies inside the given z layer (0-based).
    Layer(u8),
    /// Crosses z layers without being a space diagonal.
    MultiLayer,
}

/// The four cells of a completed line, in walking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    cells: [Coordinates; SIZE],
}

impl WinLine {
    pub fn cells(&self) -> &[Coordinates; SIZE] {
        &self.cells
    }

    pub fn kind(&self) -> LineKind {
        let first = self.cells[0];
        let last = self.cells[SIZE - 1];
        if first.x() != last.x() && first.y() != last.y() && first.z() != last.z() {
            LineKind::SpaceDiagonal
        } else if first.z() == last.z() {
            LineKind::Layer(first.z())
        } else {
            LineKind::MultiLayer
        }
    }
}

/// Walks four cells from `origin` along `direction`. Matches only when all of
/// them hold `cell`; a walk that leaves the cube never matches.
pub fn check_line(
    board: &Board,
    cell: Cell,
    origin: Coordinates,
    direction: Direction,
) -> Option<WinLine> {
    let mut cells = [origin; SIZE];
    for (i, slot) in cells.iter_mut().enumerate() {
        let coords = origin.offset(direction, i as i8)?;
        if board.at(coords) != cell {
            return None;
        }
        *slot = coords;
    }
    Some(WinLine { cells })
}

/// First line owned by `cell` in scan order.
pub fn check_winner(board: &Board, cell: Cell, rules: Rules) -> Option<WinLine> {
    rules
        .lines()
        .iter()
        .find_map(|line| check_line(board, cell, line.origin, line.direction))
}

/// Every cell is occupied. Only meaningful once the win check has failed.
pub fn is_tie(board: &Board) -> bool {
    board.is_full()
}
