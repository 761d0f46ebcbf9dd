//! Commit-reveal rounds and the events they emit.

mod driver;
mod messages;
mod round;
mod types;

pub use driver::{play_round, RoundOutcome};
pub use messages::{Reveal, RoundEvent};
pub use round::{combine, AwaitingContribution, Combined, Committed, FairValueProtocol};
pub use types::{Player, RoundId, RoundKind, COIN_SIDES};
