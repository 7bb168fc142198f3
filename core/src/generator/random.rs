use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::*;

/// Builds the standard cell multiset and shuffles it with `rng`.
///
/// Ids are assigned in creation order before the shuffle, so the permutation decides which id
/// lands on which grid position.
pub fn generate_board<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut cells = standard_cells();
    cells.shuffle(rng);

    // double check the distribution survived
    let board = Board::new_unchecked(cells);
    if board.cash_total() != STANDARD_CASH_TOTAL {
        log::warn!(
            "Generated board cash mismatch, actual: {}, expected: {}",
            board.cash_total(),
            STANDARD_CASH_TOTAL
        );
    }
    log::trace!(
        "Generated board order: {:?}",
        board.iter().map(Cell::id).collect::<alloc::vec::Vec<_>>()
    );
    board
}

/// Uniformly shuffled boards drawn from an injected random source.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator<R = SmallRng> {
    rng: R,
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomBoardGenerator<SmallRng> {
    /// Reproducible generator, the same seed yields the same sequence of boards.
    pub fn from_seed(seed: u64) -> Self {
        log::debug!("Board generator seeded with {}", seed);
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(&mut self) -> Board {
        generate_board(&mut self.rng)
    }
}
