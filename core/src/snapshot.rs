use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Read-only copy of everything a presenter needs to draw a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundSnapshot {
    pub round: u32,
    pub board: Board,
    pub phase: RoundPhase,
    pub multiplier: Factor,
    pub payout: Amount,
    pub stats: RoundStats,
    pub revealed_order: Vec<CellId>,
    pub busy: bool,
    pub summary_open: bool,
}

impl RoundSnapshot {
    /// Snapshot of a bare round with no presenter around it, so it is never busy and has no
    /// summary open.
    pub fn from_state(state: &RoundState, round: u32) -> Self {
        Self {
            round,
            board: state.board().clone(),
            phase: state.phase(),
            multiplier: state.multiplier(),
            payout: state.total_payout(),
            stats: state.stats(),
            revealed_order: state.revealed_cells().iter().map(Cell::id).collect(),
            busy: false,
            summary_open: false,
        }
    }

    pub fn from_engine<G: BoardGenerator>(engine: &RoundEngine<G>) -> Self {
        Self {
            round: engine.round(),
            busy: engine.is_busy(),
            summary_open: engine.is_summary_open(),
            ..Self::from_state(engine.state(), engine.round())
        }
    }

    pub fn is_bomb_exploded(&self) -> bool {
        self.phase == RoundPhase::Resolved(ResolutionCause::Bomb)
    }

    /// Payout label the way the balance display shows it.
    pub fn payout_label(&self) -> alloc::string::String {
        format_value(self.payout)
    }
}
