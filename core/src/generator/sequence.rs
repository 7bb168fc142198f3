use alloc::collections::VecDeque;

use super::*;

/// Replays prepared boards in order, then falls back to a seeded random generator.
#[derive(Clone, Debug, PartialEq)]
pub struct SequenceBoardGenerator {
    queued: VecDeque<Board>,
    fallback: RandomBoardGenerator,
}

impl SequenceBoardGenerator {
    pub fn new(boards: impl IntoIterator<Item = Board>, fallback_seed: u64) -> Self {
        Self {
            queued: boards.into_iter().collect(),
            fallback: RandomBoardGenerator::from_seed(fallback_seed),
        }
    }

    pub fn push(&mut self, board: Board) {
        self.queued.push_back(board);
    }

    pub fn remaining(&self) -> usize {
        self.queued.len()
    }
}

impl BoardGenerator for SequenceBoardGenerator {
    fn generate(&mut self) -> Board {
        match self.queued.pop_front() {
            Some(board) => board,
            None => {
                log::debug!("Board queue exhausted, falling back to random generation");
                self.fallback.generate()
            }
        }
    }
}
