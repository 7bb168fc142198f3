use core::time::Duration;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

/// Terminal condition that ended a round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResolutionCause {
    Bomb,
    Stop,
    AllCleared,
}

impl ResolutionCause {
    /// Whether the round keeps its winnings.
    pub const fn keeps_winnings(self) -> bool {
        !matches!(self, Self::Bomb)
    }

    /// How long a presenter should let the resolution play out before showing the summary.
    pub const fn summary_delay(self) -> Duration {
        match self {
            Self::Bomb => Duration::from_millis(2_000),
            Self::Stop | Self::AllCleared => Duration::from_millis(500),
        }
    }
}

/// Valid transitions:
/// - Active -> Resolved(Bomb)
/// - Active -> Resolved(Stop)
/// - Active -> Resolved(AllCleared)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    #[default]
    Active,
    Resolved(ResolutionCause),
}

impl RoundPhase {
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    pub const fn cause(self) -> Option<ResolutionCause> {
        match self {
            Self::Active => None,
            Self::Resolved(cause) => Some(cause),
        }
    }
}

/// Outcome of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Stale or invalid request, nothing changed.
    NoChange,
    /// A cell was revealed and the round goes on.
    Revealed(CellKind),
    /// The reveal ended the round.
    Resolved(ResolutionCause),
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }

    pub const fn resolution(self) -> Option<ResolutionCause> {
        match self {
            Self::Resolved(cause) => Some(cause),
            Self::NoChange | Self::Revealed(_) => None,
        }
    }
}

/// State of one round, from a fresh board to its resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    board: Board,
    multiplier: Factor,
    phase: RoundPhase,
    revealed: SmallVec<[Cell; CELL_COUNT]>,
}

impl RoundState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            multiplier: 1,
            phase: RoundPhase::Active,
            revealed: SmallVec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn multiplier(&self) -> Factor {
        self.multiplier
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_resolved()
    }

    pub fn is_bomb_exploded(&self) -> bool {
        self.phase == RoundPhase::Resolved(ResolutionCause::Bomb)
    }

    /// Cells in the order the player revealed them; the full-board reveal is not included.
    pub fn revealed_cells(&self) -> &[Cell] {
        &self.revealed
    }

    pub fn can_reveal(&self, id: CellId) -> bool {
        self.phase.is_active()
            && self
                .board
                .cell(id)
                .is_some_and(|cell| !cell.is_revealed())
    }

    /// Reveals the cell `id`. Requests for unknown or revealed cells, or after the round
    /// resolved, leave the state untouched.
    pub fn reveal(&mut self, id: CellId) -> RevealOutcome {
        use RevealOutcome::*;

        if let RoundPhase::Resolved(cause) = self.phase {
            log::debug!("Ignoring reveal of cell {}, round resolved via {:?}", id, cause);
            return NoChange;
        }

        let Some(cell) = self.board.cell_mut(id) else {
            log::debug!("Ignoring reveal of unknown cell {}", id);
            return NoChange;
        };
        if !cell.reveal() {
            log::debug!("Ignoring reveal of cell {}, already revealed", id);
            return NoChange;
        }
        let cell = *cell;
        self.revealed.push(cell);
        log::debug!("Revealed cell {}: {:?}", id, cell.kind());

        let outcome = match cell.kind() {
            CellKind::Bomb => self.resolve(ResolutionCause::Bomb),
            CellKind::Stop => self.resolve(ResolutionCause::Stop),
            CellKind::Multiplier(factor) => {
                // factors below 1 would let the multiplier shrink
                self.multiplier = self.multiplier.saturating_mul(factor.max(1));
                log::trace!("Multiplier now x{}", self.multiplier);
                Revealed(cell.kind())
            }
            kind @ (CellKind::Cash(_) | CellKind::Zero) => Revealed(kind),
        };

        if outcome.resolution().is_none() && self.board.all_safe_revealed() {
            return self.resolve(ResolutionCause::AllCleared);
        }
        outcome
    }

    fn resolve(&mut self, cause: ResolutionCause) -> RevealOutcome {
        debug_assert!(self.phase.is_active(), "round resolved twice");
        self.phase = RoundPhase::Resolved(cause);
        if matches!(cause, ResolutionCause::Bomb | ResolutionCause::Stop) {
            let opened = self.board.reveal_all();
            log::trace!("Full-board reveal opened {} cells", opened);
        }
        log::debug!(
            "Round resolved via {:?}, payout {}",
            cause,
            compute_total_payout(self)
        );
        RevealOutcome::Resolved(cause)
    }

    /// Payout over the cash revealed so far, scaled by the current multiplier.
    pub fn total_payout(&self) -> Amount {
        compute_total_payout(self)
    }

    /// What the player keeps: nothing after a bomb, the total payout otherwise.
    pub fn banked_payout(&self) -> Amount {
        if self.is_bomb_exploded() {
            0
        } else {
            self.total_payout()
        }
    }

    /// What a bomb took away, zero for any other outcome.
    pub fn forfeited_payout(&self) -> Amount {
        if self.is_bomb_exploded() {
            self.total_payout()
        } else {
            0
        }
    }

    pub fn stats(&self) -> RoundStats {
        compute_stats(&self.board)
    }

    pub fn set_highlighted(&mut self, id: CellId, highlighted: bool) -> bool {
        self.board.set_highlighted(id, highlighted)
    }

    pub fn clear_highlights(&mut self) {
        self.board.clear_highlights();
    }
}

/// Cash collected in the round times the round's final multiplier.
///
/// The multiplier covers every cash cell of the round, including cash revealed before it.
pub fn compute_total_payout(state: &RoundState) -> Amount {
    let cash: Amount = state
        .revealed_cells()
        .iter()
        .filter_map(|cell| match cell.kind() {
            CellKind::Cash(amount) => Some(amount),
            _ => None,
        })
        .fold(0, Amount::saturating_add);
    cash.saturating_mul(Amount::from(state.multiplier()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // standard creation order:
    // 0: cash 100, 1: cash 100, 2: cash 1000, 3: cash 500, 4: cash 10000,
    // 5: x2, 6: stop, 7: zero, 8: bomb
    fn fresh_round() -> RoundState {
        RoundState::new(Board::from_cells(standard_cells()).unwrap())
    }

    #[test]
    fn cash_then_stop_keeps_winnings() {
        let mut state = fresh_round();

        assert_eq!(state.reveal(2), RevealOutcome::Revealed(CellKind::Cash(1_000)));
        assert_eq!(state.reveal(0), RevealOutcome::Revealed(CellKind::Cash(100)));
        assert_eq!(
            state.reveal(6),
            RevealOutcome::Resolved(ResolutionCause::Stop)
        );

        assert_eq!(state.multiplier(), 1);
        assert_eq!(state.total_payout(), 1_100);
        assert_eq!(state.banked_payout(), 1_100);
        assert_eq!(state.phase(), RoundPhase::Resolved(ResolutionCause::Stop));
        assert!(state.is_game_over());
        assert!(!state.is_bomb_exploded());
        assert!(state.board().all_revealed());
    }

    #[test]
    fn bomb_first_reveals_whole_board() {
        let mut state = fresh_round();

        assert_eq!(
            state.reveal(8),
            RevealOutcome::Resolved(ResolutionCause::Bomb)
        );

        assert!(state.is_bomb_exploded());
        assert!(state.is_game_over());
        assert!(state.board().all_revealed());
        assert_eq!(state.revealed_cells().len(), 1);
        assert_eq!(state.total_payout(), 0);
    }

    #[test]
    fn bomb_forfeits_collected_cash() {
        let mut state = fresh_round();
        state.reveal(4);
        state.reveal(8);

        assert_eq!(state.total_payout(), 10_000);
        assert_eq!(state.forfeited_payout(), 10_000);
        assert_eq!(state.banked_payout(), 0);
    }

    #[test]
    fn multiplier_applies_to_earlier_cash() {
        let mut state = fresh_round();

        state.reveal(0);
        assert_eq!(state.total_payout(), 100);

        assert_eq!(
            state.reveal(5),
            RevealOutcome::Revealed(CellKind::Multiplier(2))
        );
        assert_eq!(state.multiplier(), 2);
        assert_eq!(state.total_payout(), 200);
    }

    #[test]
    fn zero_adds_nothing() {
        let mut state = fresh_round();
        state.reveal(3);
        state.reveal(7);

        assert_eq!(state.total_payout(), 500);
        assert_eq!(state.stats().zeros, 1);
        assert!(state.phase().is_active());
    }

    #[test]
    fn repeated_reveal_is_a_no_op() {
        let mut state = fresh_round();
        state.reveal(1);
        let once = state.clone();

        assert_eq!(state.reveal(1), RevealOutcome::NoChange);
        assert_eq!(state, once);
    }

    #[test]
    fn unknown_cell_is_a_no_op() {
        let mut state = fresh_round();
        let before = state.clone();

        assert_eq!(state.reveal(200), RevealOutcome::NoChange);
        assert_eq!(state, before);
    }

    #[test]
    fn resolved_round_ignores_reveals() {
        let mut state = fresh_round();
        state.reveal(0);
        state.reveal(6);
        let resolved = state.clone();

        for id in 0..CELL_COUNT as CellId {
            assert_eq!(state.reveal(id), RevealOutcome::NoChange);
        }
        assert_eq!(state, resolved);
        assert!(!state.can_reveal(1));
    }

    #[test]
    fn clearing_every_safe_cell_wins() {
        // no stop cell, so the player can open everything but the bomb
        let cells = [
            CellKind::Cash(100),
            CellKind::Cash(100),
            CellKind::Cash(1_000),
            CellKind::Cash(500),
            CellKind::Cash(10_000),
            CellKind::Multiplier(2),
            CellKind::Zero,
            CellKind::Zero,
            CellKind::Bomb,
        ]
        .into_iter()
        .enumerate()
        .map(|(id, kind)| Cell::new(id as CellId, kind))
        .collect();
        let mut state = RoundState::new(Board::new_unchecked(cells));

        for id in 0..7 {
            assert!(state.reveal(id).resolution().is_none());
        }
        assert_eq!(
            state.reveal(7),
            RevealOutcome::Resolved(ResolutionCause::AllCleared)
        );

        assert!(!state.is_bomb_exploded());
        assert!(!state.board().cell(8).unwrap().is_revealed());
        assert_eq!(state.total_payout(), 23_400);
        assert_eq!(state.reveal(8), RevealOutcome::NoChange);
    }

    #[test]
    fn stop_as_last_safe_cell_resolves_as_stop() {
        let mut state = fresh_round();
        for id in [0, 1, 2, 3, 4, 5, 7] {
            state.reveal(id);
        }

        assert_eq!(
            state.reveal(6),
            RevealOutcome::Resolved(ResolutionCause::Stop)
        );
        assert_eq!(state.total_payout(), 23_400);
    }

    #[test]
    fn stats_follow_the_board() {
        let mut state = fresh_round();
        state.reveal(0);
        state.reveal(5);

        let stats = state.stats();
        assert_eq!(stats.cash, 1);
        assert_eq!(stats.multipliers, 1);

        state.reveal(8);
        assert_eq!(state.stats().total(), 9);
    }

    #[test]
    fn summary_delay_is_longer_for_bombs() {
        assert!(
            ResolutionCause::Bomb.summary_delay() > ResolutionCause::Stop.summary_delay()
        );
        assert_eq!(
            ResolutionCause::AllCleared.summary_delay(),
            ResolutionCause::Stop.summary_delay()
        );
        assert!(!ResolutionCause::Bomb.keeps_winnings());
        assert!(ResolutionCause::AllCleared.keeps_winnings());
    }
}
