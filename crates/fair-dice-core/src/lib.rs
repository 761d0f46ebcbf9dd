//! Fair Dice Core Library
//!
//! This crate provides the commit-reveal protocol, the unbiased random
//! primitive and the dice probability engine for a two-player
//! non-transitive dice game between a human and the computer.

pub mod collaborator;
pub mod crypto;
pub mod dice;
pub mod error;
pub mod games;
pub mod protocol;

pub use collaborator::{Contribution, ContributionRequest, ContributionSource, Reporter};
pub use crypto::{commit, verify, CommitmentTag, SecretKey, SecureRandom};
pub use dice::{DiceSet, Die, MatrixCell, PairOdds, ProbabilityMatrix};
pub use error::{FairDiceError, Result};
pub use games::DuelResult;
pub use protocol::{
    FairValueProtocol, Player, Reveal, RoundEvent, RoundId, RoundKind, RoundOutcome,
};
