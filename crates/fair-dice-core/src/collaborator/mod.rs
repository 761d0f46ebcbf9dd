//! Seams to the interactive side of the game.
//!
//! The core never prints or reads; it asks a `ContributionSource` for the
//! counterparty's value and tells a `Reporter` what happened.

mod mock;
mod traits;

pub use mock::{RecordingReporter, ScriptedContributions};
pub use traits::{Contribution, ContributionRequest, ContributionSource, Reporter};
