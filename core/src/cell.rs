use serde::{Deserialize, Serialize};

use crate::types::{Amount, CellId, Factor};

/// Reward type of a cell without its payload, used for counting and display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellType {
    Cash,
    Bomb,
    X2,
    Zero,
    Stop,
}

/// Hidden content of a cell, fixed when the board is built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Cash(Amount),
    Multiplier(Factor),
    Zero,
    Stop,
    Bomb,
}

impl CellKind {
    pub const fn cell_type(self) -> CellType {
        match self {
            Self::Cash(_) => CellType::Cash,
            Self::Multiplier(_) => CellType::X2,
            Self::Zero => CellType::Zero,
            Self::Stop => CellType::Stop,
            Self::Bomb => CellType::Bomb,
        }
    }

    /// Numeric payload: the reward for cash, the factor for a multiplier, 0 otherwise.
    pub const fn value(self) -> Amount {
        match self {
            Self::Cash(amount) => amount,
            Self::Multiplier(factor) => factor as Amount,
            Self::Zero | Self::Stop | Self::Bomb => 0,
        }
    }

    pub const fn is_bomb(self) -> bool {
        matches!(self, Self::Bomb)
    }

    /// Whether revealing this kind terminates the round on its own.
    pub const fn ends_round(self) -> bool {
        matches!(self, Self::Bomb | Self::Stop)
    }
}

/// One board cell. Identity and kind never change, `revealed` only goes from false to true.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    id: CellId,
    kind: CellKind,
    revealed: bool,
    highlighted: bool,
}

impl Cell {
    pub const fn new(id: CellId, kind: CellKind) -> Self {
        Self {
            id,
            kind,
            revealed: false,
            highlighted: false,
        }
    }

    pub const fn id(&self) -> CellId {
        self.id
    }

    pub const fn kind(&self) -> CellKind {
        self.kind
    }

    pub const fn cell_type(&self) -> CellType {
        self.kind.cell_type()
    }

    pub const fn value(&self) -> Amount {
        self.kind.value()
    }

    pub const fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Presentation-owned marker, never consulted by the round logic.
    pub const fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Marks the cell revealed, returning `false` when it already was.
    pub(crate) fn reveal(&mut self) -> bool {
        let changed = !self.revealed;
        self.revealed = true;
        changed
    }

    pub(crate) fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }
}
