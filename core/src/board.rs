use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Reward distribution every board is built from, in creation order.
pub const BOARD_COMPOSITION: [(CellKind, usize); 8] = [
    (CellKind::Cash(100), 2),
    (CellKind::Cash(1_000), 1),
    (CellKind::Cash(500), 1),
    (CellKind::Cash(10_000), 1),
    (CellKind::Multiplier(2), 1),
    (CellKind::Stop, 1),
    (CellKind::Zero, 1),
    (CellKind::Bomb, 1),
];

/// Sum of every cash cell in [`BOARD_COMPOSITION`].
pub const STANDARD_CASH_TOTAL: Amount = 11_700;

/// The standard cell multiset with sequential ids in creation order, before any shuffle.
pub fn standard_cells() -> Vec<Cell> {
    BOARD_COMPOSITION
        .iter()
        .flat_map(|&(kind, count)| core::iter::repeat_n(kind, count))
        .enumerate()
        .map(|(id, kind)| Cell::new(id as CellId, kind))
        .collect()
}

/// A 3x3 grid of cells; row-major order is the board's sequence order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Lays out exactly [`CELL_COUNT`] cells without checking the reward distribution.
    pub(crate) fn new_unchecked(cells: Vec<Cell>) -> Self {
        let side = BOARD_SIDE as usize;
        let cells =
            Array2::from_shape_vec((side, side), cells).expect("board has a fixed 3x3 layout");
        Self { cells }
    }

    /// Builds a board from an explicit cell sequence, checking it against the standard
    /// distribution.
    pub fn from_cells(cells: Vec<Cell>) -> Result<Self> {
        if cells.len() != CELL_COUNT {
            return Err(GameError::InvalidCellCount {
                expected: CELL_COUNT,
                actual: cells.len(),
            });
        }

        for (i, cell) in cells.iter().enumerate() {
            if cells[..i].iter().any(|other| other.id() == cell.id()) {
                return Err(GameError::DuplicateCellId(cell.id()));
            }
            if cell.is_revealed() {
                return Err(GameError::CellAlreadyRevealed(cell.id()));
            }
        }

        let matches_composition = BOARD_COMPOSITION.iter().all(|&(kind, count)| {
            cells.iter().filter(|cell| cell.kind() == kind).count() == count
        });
        if !matches_composition {
            return Err(GameError::InvalidComposition);
        }

        Ok(Self::new_unchecked(cells))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.id() == id)
    }

    pub(crate) fn cell_mut(&mut self, id: CellId) -> Option<&mut Cell> {
        self.cells.iter_mut().find(|cell| cell.id() == id)
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        index_of_coords(coords)?;
        self.cells.get(coords.to_nd_index())
    }

    pub fn position_of(&self, id: CellId) -> Option<Coord2> {
        self.cells
            .indexed_iter()
            .find(|(_, cell)| cell.id() == id)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn all_revealed(&self) -> bool {
        self.cells.iter().all(Cell::is_revealed)
    }

    /// Whether every cell except bombs has been revealed.
    pub fn all_safe_revealed(&self) -> bool {
        self.cells
            .iter()
            .filter(|cell| !cell.kind().is_bomb())
            .all(Cell::is_revealed)
    }

    /// Sum of every cash cell on the board, revealed or not.
    pub fn cash_total(&self) -> Amount {
        self.cells
            .iter()
            .filter(|cell| cell.cell_type() == CellType::Cash)
            .map(Cell::value)
            .sum()
    }

    /// Presentation hook, returns `false` for unknown ids.
    pub fn set_highlighted(&mut self, id: CellId, highlighted: bool) -> bool {
        match self.cell_mut(id) {
            Some(cell) => {
                cell.set_highlighted(highlighted);
                true
            }
            None => false,
        }
    }

    pub fn clear_highlights(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.set_highlighted(false);
        }
    }

    /// Reveals every hidden cell, returning how many changed.
    pub(crate) fn reveal_all(&mut self) -> usize {
        self.cells
            .iter_mut()
            .map(|cell| cell.reveal())
            .filter(|&changed| changed)
            .count()
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a Cell;
    type IntoIter = ndarray::iter::Iter<'a, Cell, ndarray::Ix2>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_cells_follow_creation_order() {
        let cells = standard_cells();

        assert_eq!(cells.len(), CELL_COUNT);
        for (i, cell) in cells.iter().enumerate() {
            assert_eq!(cell.id() as usize, i);
            assert!(!cell.is_revealed());
            assert!(!cell.is_highlighted());
        }
        assert_eq!(cells[0].kind(), CellKind::Cash(100));
        assert_eq!(cells[1].kind(), CellKind::Cash(100));
        assert_eq!(cells[8].kind(), CellKind::Bomb);
    }

    #[test]
    fn from_cells_accepts_the_standard_distribution() {
        let board = Board::from_cells(standard_cells()).unwrap();

        assert_eq!(board.len(), CELL_COUNT);
        assert_eq!(board.cash_total(), 11_700);
        assert_eq!(board[(0, 0)].id(), 0);
        assert_eq!(board.position_of(8), Some((2, 2)));
        assert_eq!(board.cell_at((2, 2)).map(Cell::kind), Some(CellKind::Bomb));
        assert_eq!(board.cell_at((3, 0)), None);
    }

    #[test]
    fn from_cells_rejects_wrong_count() {
        let mut cells = standard_cells();
        cells.pop();

        assert_eq!(
            Board::from_cells(cells),
            Err(GameError::InvalidCellCount {
                expected: 9,
                actual: 8
            })
        );
    }

    #[test]
    fn from_cells_rejects_duplicate_ids() {
        let mut cells = standard_cells();
        cells[4] = Cell::new(0, cells[4].kind());

        assert_eq!(Board::from_cells(cells), Err(GameError::DuplicateCellId(0)));
    }

    #[test]
    fn from_cells_rejects_foreign_distribution() {
        let mut cells = standard_cells();
        cells[6] = Cell::new(6, CellKind::Bomb);

        assert_eq!(Board::from_cells(cells), Err(GameError::InvalidComposition));
    }

    #[test]
    fn from_cells_rejects_revealed_cells() {
        let mut cells = standard_cells();
        cells[2].reveal();

        assert_eq!(
            Board::from_cells(cells),
            Err(GameError::CellAlreadyRevealed(2))
        );
    }

    #[test]
    fn highlight_is_independent_of_reveal() {
        let mut board = Board::from_cells(standard_cells()).unwrap();

        assert!(board.set_highlighted(3, true));
        assert!(!board.set_highlighted(42, true));
        assert!(board.cell(3).unwrap().is_highlighted());
        assert!(!board.cell(3).unwrap().is_revealed());

        board.clear_highlights();
        assert!(board.iter().all(|cell| !cell.is_highlighted()));
    }

    #[test]
    fn reveal_all_counts_only_hidden_cells() {
        let mut board = Board::from_cells(standard_cells()).unwrap();
        board.cell_mut(5).unwrap().reveal();

        assert_eq!(board.reveal_all(), 8);
        assert!(board.all_revealed());
        assert_eq!(board.reveal_all(), 0);
    }
}
