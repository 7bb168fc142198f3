use alloc::vec::{Drain, Vec};
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Block further reveals after each change until the presenter reports its animation done.
    pub hold_for_animation: bool,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hold_for_animation: true,
        }
    }
}

/// Notifications for presentation collaborators, drained with [`RoundEngine::drain_events`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundEvent {
    RoundStarted { round: u32 },
    CellRevealed { id: CellId, kind: CellKind },
    CashCollected { id: CellId, amount: Amount },
    MultiplierApplied { multiplier: Factor },
    Resolved(ResolutionCause),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DismissOutcome {
    /// There was no summary to dismiss.
    NotOpen,
    /// Summary closed, the round stays as it is.
    Closed,
    /// Summary closed after a bomb and a fresh round began.
    NewRound,
}

impl DismissOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NotOpen)
    }
}

/// Drives rounds for a presenter: owns the board source, the current round, the busy guard and
/// the summary view state.
///
/// Notifications queue up until [`RoundEngine::drain_events`] is called. Starting a new round
/// discards whatever the previous round left undrained.
#[derive(Clone, Debug)]
pub struct RoundEngine<G> {
    generator: G,
    config: RoundConfig,
    state: RoundState,
    round: u32,
    busy: bool,
    summary_open: bool,
    events: Vec<RoundEvent>,
}

impl<G: BoardGenerator> RoundEngine<G> {
    pub fn new(generator: G) -> Self {
        Self::with_config(generator, RoundConfig::default())
    }

    pub fn with_config(mut generator: G, config: RoundConfig) -> Self {
        let state = RoundState::new(generator.generate());
        log::debug!("Round 1 started");
        Self {
            generator,
            config,
            state,
            round: 1,
            busy: false,
            summary_open: false,
            events: alloc::vec![RoundEvent::RoundStarted { round: 1 }],
        }
    }

    pub fn state(&self) -> &RoundState {
        &self.state
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    /// 1-based number of the current round.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn is_summary_open(&self) -> bool {
        self.summary_open
    }

    /// Whether a reveal of `id` would be accepted right now.
    pub fn can_reveal(&self, id: CellId) -> bool {
        !self.busy && !self.summary_open && self.state.can_reveal(id)
    }

    /// Reveals `id` in the current round, unless a previous transition is still settling or the
    /// summary is showing.
    pub fn reveal(&mut self, id: CellId) -> RevealOutcome {
        if self.busy {
            log::debug!("Ignoring reveal of cell {}, waiting for animation", id);
            return RevealOutcome::NoChange;
        }
        if self.summary_open {
            log::debug!("Ignoring reveal of cell {}, summary is open", id);
            return RevealOutcome::NoChange;
        }

        let outcome = self.state.reveal(id);
        if !outcome.has_update() {
            return outcome;
        }

        if let Some(&cell) = self.state.revealed_cells().last() {
            self.events.push(RoundEvent::CellRevealed {
                id: cell.id(),
                kind: cell.kind(),
            });
            match cell.kind() {
                CellKind::Cash(amount) => self.events.push(RoundEvent::CashCollected {
                    id: cell.id(),
                    amount,
                }),
                CellKind::Multiplier(_) => self.events.push(RoundEvent::MultiplierApplied {
                    multiplier: self.state.multiplier(),
                }),
                CellKind::Zero | CellKind::Stop | CellKind::Bomb => {}
            }
        }

        if let Some(cause) = outcome.resolution() {
            self.events.push(RoundEvent::Resolved(cause));
            self.summary_open = true;
        }

        if self.config.hold_for_animation {
            self.busy = true;
        }
        outcome
    }

    /// Presenter finished animating the last transition. Returns whether the guard was up.
    pub fn animation_complete(&mut self) -> bool {
        core::mem::replace(&mut self.busy, false)
    }

    /// Opens the round summary on request. Only possible once something was revealed and no
    /// transition is pending; it does not end the round.
    pub fn claim(&mut self) -> bool {
        if self.busy || self.state.revealed_cells().is_empty() {
            return false;
        }
        self.summary_open = true;
        true
    }

    /// Closes the summary. After a bomb this also starts the next round.
    pub fn summary_dismissed(&mut self) -> DismissOutcome {
        if !self.summary_open {
            return DismissOutcome::NotOpen;
        }
        self.summary_open = false;

        if self.state.is_bomb_exploded() {
            self.start_new_round();
            DismissOutcome::NewRound
        } else {
            DismissOutcome::Closed
        }
    }

    /// Replaces the current round with a fresh one.
    pub fn start_new_round(&mut self) -> &RoundState {
        self.state = RoundState::new(self.generator.generate());
        self.round = self.round.saturating_add(1);
        self.busy = false;
        self.summary_open = false;
        if !self.events.is_empty() {
            log::trace!("Dropping {} undrained events", self.events.len());
            self.events.clear();
        }
        self.events.push(RoundEvent::RoundStarted { round: self.round });
        log::debug!("Round {} started", self.round);
        &self.state
    }

    pub fn drain_events(&mut self) -> Drain<'_, RoundEvent> {
        self.events.drain(..)
    }

    pub fn set_highlighted(&mut self, id: CellId, highlighted: bool) -> bool {
        self.state.set_highlighted(id, highlighted)
    }

    pub fn clear_highlights(&mut self) {
        self.state.clear_highlights();
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot::from_engine(self)
    }
}
