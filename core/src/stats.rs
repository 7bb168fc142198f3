use serde::{Deserialize, Serialize};

use crate::*;

/// Revealed-cell counters per reward type, always derived from the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundStats {
    pub cash: u8,
    pub multipliers: u8,
    pub bombs: u8,
    pub zeros: u8,
    pub stops: u8,
}

impl RoundStats {
    pub const fn count(&self, cell_type: CellType) -> u8 {
        match cell_type {
            CellType::Cash => self.cash,
            CellType::X2 => self.multipliers,
            CellType::Bomb => self.bombs,
            CellType::Zero => self.zeros,
            CellType::Stop => self.stops,
        }
    }

    pub const fn total(&self) -> u8 {
        self.cash + self.multipliers + self.bombs + self.zeros + self.stops
    }

    fn record(&mut self, cell_type: CellType) {
        let counter = match cell_type {
            CellType::Cash => &mut self.cash,
            CellType::X2 => &mut self.multipliers,
            CellType::Bomb => &mut self.bombs,
            CellType::Zero => &mut self.zeros,
            CellType::Stop => &mut self.stops,
        };
        *counter = counter.saturating_add(1);
    }
}

/// Counts revealed cells per reward type.
pub fn compute_stats<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> RoundStats {
    cells
        .into_iter()
        .filter(|cell| cell.is_revealed())
        .fold(RoundStats::default(), |mut stats, cell| {
            stats.record(cell.cell_type());
            stats
        })
}
