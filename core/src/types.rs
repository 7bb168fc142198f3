/// Single grid axis used for board rows and columns.
pub type Coord = u8;

/// Grid position `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Identifier of a cell, unique within one board.
pub type CellId = u8;

/// Reward amounts, cash values and payouts.
pub type Amount = u64;

/// Multiplier factor carried by an x2 cell and accumulated by a round.
pub type Factor = u32;

/// Side length of the square board.
pub const BOARD_SIDE: Coord = 3;

/// Number of cells on every board.
pub const CELL_COUNT: usize = BOARD_SIDE as usize * BOARD_SIDE as usize;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Row-major position of a flat index into the board.
pub const fn coords_of_index(index: usize) -> Coord2 {
    let side = BOARD_SIDE as usize;
    ((index / side) as Coord, (index % side) as Coord)
}

/// Flat row-major index of a position, `None` when it falls outside the board.
pub const fn index_of_coords((row, col): Coord2) -> Option<usize> {
    if row < BOARD_SIDE && col < BOARD_SIDE {
        Some(row as usize * BOARD_SIDE as usize + col as usize)
    } else {
        None
    }
}
