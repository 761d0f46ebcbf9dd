//! Game rules built on top of fair value rounds.
//!
//! The protocol only produces `(a + b) mod N`; these functions give that
//! value its meaning for the coin toss and for face rolls.

mod duel;
mod toss;

pub use duel::{choose_computer_die, judge, roll_face, DuelResult};
pub use toss::first_player;
