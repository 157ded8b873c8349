use serde::{Deserialize, Serialize};

/// Number of cells along each axis of the cube.
pub const SIZE: usize = 4;

/// Number of cells in one z layer.
pub const LAYER_SIZE: usize = SIZE * SIZE;

/// Total number of cells in the cube.
pub const CELL_COUNT: usize = SIZE * SIZE * SIZE;

/// A step between two neighbouring cells of a line, one component per axis.
pub type Direction = (i8, i8, i8);

/// 0-based position of a cell in the cube.
///
/// Construction does not check the range, use [`Coordinates::is_valid`] or
/// [`Coordinates::from_one_based`] when the values come from outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinates {
    x: u8,
    y: u8,
    z: u8,
}

impl Coordinates {
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Converts 1-based player input into coordinates, `None` if any axis is
    /// outside `1..=4`.
    pub fn from_one_based(x: i32, y: i32, z: i32) -> Option<Self> {
        let axis = |v: i32| -> Option<u8> {
            if (1..=SIZE as i32).contains(&v) {
                Some((v - 1) as u8)
            } else {
                None
            }
        };
        Some(Self::new(axis(x)?, axis(y)?, axis(z)?))
    }

    /// Inverse of [`Coordinates::to_index`].
    pub fn from_index(idx: usize) -> Self {
        debug_assert!(idx < CELL_COUNT, "cell index {idx} out of range");
        Self::new(
            (idx % SIZE) as u8,
            ((idx / SIZE) % SIZE) as u8,
            (idx / LAYER_SIZE) as u8,
        )
    }

    /// Flat index `x + y * 4 + z * 16`.
    pub fn to_index(&self) -> usize {
        self.x as usize + self.y as usize * SIZE + self.z as usize * LAYER_SIZE
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn z(&self) -> u8 {
        self.z
    }

    pub fn is_valid(&self) -> bool {
        (self.x as usize) < SIZE && (self.y as usize) < SIZE && (self.z as usize) < SIZE
    }

    /// The same cell in 1-based form, as shown to players.
    pub fn to_one_based(&self) -> (u8, u8, u8) {
        (self.x + 1, self.y + 1, self.z + 1)
    }

    /// Moves `steps` times along `direction`. Returns `None` when the result
    /// leaves the cube.
    pub fn offset(&self, direction: Direction, steps: i8) -> Option<Self> {
        let step = |v: u8, d: i8| -> Option<u8> {
            let moved = v as i16 + d as i16 * steps as i16;
            if (0..SIZE as i16).contains(&moved) {
                Some(moved as u8)
            } else {
                None
            }
        };
        Some(Self::new(
            step(self.x, direction.0)?,
            step(self.y, direction.1)?,
            step(self.z, direction.2)?,
        ))
    }
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
