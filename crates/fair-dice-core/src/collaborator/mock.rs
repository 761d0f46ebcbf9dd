//! In-memory collaborators for tests and scripted play.

use std::collections::VecDeque;

use super::traits::{Contribution, ContributionRequest, ContributionSource, Reporter};
use crate::protocol::RoundEvent;

/// Replays a fixed list of contributions, then asks to exit
#[derive(Clone, Debug, Default)]
pub struct ScriptedContributions {
    script: VecDeque<Contribution>,
    requests: Vec<ContributionRequest>,
}

impl ScriptedContributions {
    /// Create a source answering with `script` in order
    pub fn new(script: impl IntoIterator<Item = Contribution>) -> Self {
        Self {
            script: script.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    /// Requests seen so far
    pub fn requests(&self) -> &[ContributionRequest] {
        &self.requests
    }

    /// Contributions not yet handed out
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ContributionSource for ScriptedContributions {
    fn contribution(&mut self, request: &ContributionRequest) -> Contribution {
        self.requests.push(*request);
        self.script.pop_front().unwrap_or(Contribution::Exit)
    }
}

/// Keeps every reported event
#[derive(Clone, Debug, Default)]
pub struct RecordingReporter {
    events: Vec<RoundEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in the order they were reported
    pub fn events(&self) -> &[RoundEvent] {
        &self.events
    }

    /// Drop recorded events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &RoundEvent) {
        self.events.push(event.clone());
    }
}
