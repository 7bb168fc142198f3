use crate::*;
pub use random::*;
pub use sequence::*;

mod random;
mod sequence;

/// Source of fresh boards, invoked once per round.
pub trait BoardGenerator {
    fn generate(&mut self) -> Board;
}

impl<G: BoardGenerator + ?Sized> BoardGenerator for &mut G {
    fn generate(&mut self) -> Board {
        (**self).generate()
    }
}
