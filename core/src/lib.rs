//! Round engine for a 3x3 tile-reveal wagering game.
//!
//! Each board holds a fixed mix of cash, multiplier, zero, stop and bomb cells in shuffled
//! order. A player reveals cells one at a time: cash adds to the balance, the multiplier scales
//! every cash cell of the round, stop ends the round keeping the winnings and a bomb ends it
//! losing them.
#![no_std]

extern crate alloc;

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use format::*;
pub use generator::*;
pub use snapshot::*;
pub use state::*;
pub use stats::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod format;
mod generator;
mod snapshot;
mod state;
mod stats;
mod types;
