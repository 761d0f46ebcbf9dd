//! Collaborator trait definitions.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::protocol::{RoundEvent, RoundId, RoundKind};

/// What the counterparty answered when asked for its value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contribution {
    /// A value, already checked against the request's range
    Value(u32),
    /// Help requested; the round is dropped without effect
    Help,
    /// The session should end
    Exit,
}

/// Request for a counterparty contribution
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionRequest {
    pub round_id: RoundId,
    pub kind: RoundKind,
    pub modulus: u32,
}

impl ContributionRequest {
    /// Values the counterparty may choose from
    pub fn valid_values(&self) -> Range<u32> {
        0..self.modulus
    }
}

/// Source of counterparty contributions (a console prompt, a test script, ...)
pub trait ContributionSource {
    /// Ask for a value in `request.valid_values()`, or for help / exit
    fn contribution(&mut self, request: &ContributionRequest) -> Contribution;
}

/// Receiver of round events
///
/// Implementations decide how events are shown; the core only emits them.
pub trait Reporter {
    fn report(&mut self, event: &RoundEvent);
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn report(&mut self, event: &RoundEvent) {
        (**self).report(event)
    }
}

impl<T: ContributionSource + ?Sized> ContributionSource for &mut T {
    fn contribution(&mut self, request: &ContributionRequest) -> Contribution {
        (**self).contribution(request)
    }
}
