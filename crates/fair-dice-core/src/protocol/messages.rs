//! Protocol messages.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{combine, RoundId, RoundKind};
use crate::crypto::{CommitmentTag, SecretKey};
use crate::error::{FairDiceError, Result};

/// Everything disclosed at the end of a round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reveal {
    pub round_id: RoundId,
    pub modulus: u32,
    pub secret_key: SecretKey,
    pub chosen_value: u32,
    pub counterparty_value: u32,
    pub result: u32,
    /// Tag published before the contribution
    pub tag: CommitmentTag,
}

impl Reveal {
    /// Check the disclosed key and value against the published tag and
    /// recompute the combined result.
    pub fn verify(&self) -> Result<()> {
        let consistent = self.chosen_value < self.modulus
            && self.counterparty_value < self.modulus
            && self.tag.verify(&self.secret_key, self.chosen_value)
            && combine(self.chosen_value, self.counterparty_value, self.modulus) == self.result;

        if consistent {
            Ok(())
        } else {
            warn!(round = %self.round_id, tag = %self.tag, "reveal does not match commitment");
            Err(FairDiceError::VerificationMismatch(self.round_id))
        }
    }
}

/// Structured events a round reports to the display side
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoundEvent {
    /// A round was opened and its secret committed
    Started { round_id: RoundId, kind: RoundKind },
    /// The tag must be shown before the counterparty contributes
    CommitmentPublished {
        round_id: RoundId,
        kind: RoundKind,
        tag: CommitmentTag,
    },
    ContributionReceived { round_id: RoundId, value: u32 },
    /// Key and secret value disclosed for independent verification
    Revealed { kind: RoundKind, reveal: Reveal },
    /// The counterparty asked for help or to exit; the round was dropped
    Aborted { round_id: RoundId },
}

impl RoundEvent {
    /// Round this event belongs to
    pub fn round_id(&self) -> RoundId {
        match self {
            RoundEvent::Started { round_id, .. }
            | RoundEvent::CommitmentPublished { round_id, .. }
            | RoundEvent::ContributionReceived { round_id, .. }
            | RoundEvent::Aborted { round_id } => *round_id,
            RoundEvent::Revealed { reveal, .. } => reveal.round_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::FairValueProtocol;

    fn revealed(chosen: u32, contribution: u32) -> Reveal {
        let key = SecretKey::from_bytes([3u8; 32]);
        let (_, round) = FairValueProtocol::with_value(key, chosen, 6)
            .unwrap()
            .publish();
        round.contribute(contribution).unwrap().reveal()
    }

    #[test]
    fn test_honest_reveal_verifies() {
        assert!(revealed(5, 5).verify().is_ok());
    }

    #[test]
    fn test_swapped_value_fails_verification() {
        let mut reveal = revealed(2, 1);
        reveal.chosen_value = 3;
        reveal.result = 4;

        let err = reveal.verify().unwrap_err();
        assert!(matches!(err, FairDiceError::VerificationMismatch(id) if id == reveal.round_id));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_swapped_key_fails_verification() {
        let mut reveal = revealed(2, 1);
        reveal.secret_key = SecretKey::from_bytes([4u8; 32]);

        assert!(reveal.verify().is_err());
    }

    #[test]
    fn test_wrong_result_fails_verification() {
        let mut reveal = revealed(2, 1);
        reveal.result = 0;

        assert!(reveal.verify().is_err());
    }

    #[test]
    fn test_zero_modulus_reveal_fails_verification() {
        let mut reveal = revealed(0, 0);
        reveal.modulus = 0;

        assert!(reveal.verify().is_err());
    }

    #[test]
    fn test_event_serialization() {
        let reveal = revealed(1, 2);
        let event = RoundEvent::Revealed {
            kind: RoundKind::CoinToss,
            reveal: reveal.clone(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"event\":\"revealed\""));
        assert!(json.contains(&reveal.secret_key.to_hex()));

        let deserialized: RoundEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
        assert_eq!(deserialized.round_id(), reveal.round_id);
    }
}
