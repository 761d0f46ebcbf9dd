//! Single-use fair value round.
//!
//! The computer commits to a secret value before the counterparty
//! contributes; the two values are combined modulo the range size and
//! the secret is revealed so the counterparty can check the commitment.
//!
//! Each transition consumes the round, so a commitment can be
//! contributed to and revealed only once.

use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::{Reveal, RoundId};
use crate::crypto::{commit, CommitmentTag, SecretKey, SecureRandom};
use crate::error::{FairDiceError, Result};

/// Secret drawn and committed, tag not yet handed out
#[derive(Debug)]
pub struct Committed;

/// Tag published, waiting for the counterparty's value
#[derive(Debug)]
pub struct AwaitingContribution;

/// Both values known and combined
#[derive(Debug)]
pub struct Combined {
    counterparty_value: u32,
    result: u32,
}

/// One round of the fair value protocol in state `S`
#[derive(Debug)]
pub struct FairValueProtocol<S> {
    id: RoundId,
    modulus: u32,
    secret_key: SecretKey,
    chosen_value: u32,
    tag: CommitmentTag,
    state: S,
}

/// `(a + b) mod modulus`, without overflow
pub fn combine(a: u32, b: u32, modulus: u32) -> u32 {
    ((u64::from(a) + u64::from(b)) % u64::from(modulus)) as u32
}

impl<S> FairValueProtocol<S> {
    /// Round identifier
    pub fn id(&self) -> RoundId {
        self.id
    }

    /// Size of the value range
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// The commitment tag for this round
    pub fn tag(&self) -> &CommitmentTag {
        &self.tag
    }
}

impl FairValueProtocol<Committed> {
    /// Start a round over `0..modulus` with a fresh key and secret value
    pub fn start<R: RngCore + CryptoRng>(rng: &mut SecureRandom<R>, modulus: u32) -> Result<Self> {
        let chosen_value = rng.uniform(0, i64::from(modulus) - 1)? as u32;
        let secret_key = SecretKey::generate(rng)?;
        Self::with_value(secret_key, chosen_value, modulus)
    }

    /// Start a round with a caller-chosen key and value
    ///
    /// Fails with `InvalidContribution` if `chosen_value` is outside `0..modulus`.
    pub fn with_value(secret_key: SecretKey, chosen_value: u32, modulus: u32) -> Result<Self> {
        if chosen_value >= modulus {
            return Err(FairDiceError::InvalidContribution {
                value: chosen_value,
                modulus,
            });
        }

        let id = RoundId::new();
        let tag = commit(&secret_key, chosen_value);
        debug!(round = %id, modulus, tag = %tag, "round committed");

        Ok(Self {
            id,
            modulus,
            secret_key,
            chosen_value,
            tag,
            state: Committed,
        })
    }

    /// Hand out the tag; it must reach the counterparty before it contributes
    pub fn publish(self) -> (CommitmentTag, FairValueProtocol<AwaitingContribution>) {
        let tag = self.tag;
        (tag, self.transition(AwaitingContribution))
    }
}

impl FairValueProtocol<AwaitingContribution> {
    /// Accept the counterparty's value and combine it with the secret one
    pub fn contribute(self, counterparty_value: u32) -> Result<FairValueProtocol<Combined>> {
        if counterparty_value >= self.modulus {
            return Err(FairDiceError::InvalidContribution {
                value: counterparty_value,
                modulus: self.modulus,
            });
        }

        let result = combine(self.chosen_value, counterparty_value, self.modulus);
        debug!(round = %self.id, counterparty_value, "contribution combined");

        Ok(self.transition(Combined {
            counterparty_value,
            result,
        }))
    }
}

impl FairValueProtocol<Combined> {
    /// The combined value in `0..modulus`
    pub fn result(&self) -> u32 {
        self.state.result
    }

    /// The counterparty's contribution
    pub fn counterparty_value(&self) -> u32 {
        self.state.counterparty_value
    }

    /// Disclose the key and secret value, ending the round
    pub fn reveal(self) -> Reveal {
        debug!(round = %self.id, result = self.state.result, "round revealed");
        Reveal {
            round_id: self.id,
            modulus: self.modulus,
            secret_key: self.secret_key,
            chosen_value: self.chosen_value,
            counterparty_value: self.state.counterparty_value,
            result: self.state.result,
            tag: self.tag,
        }
    }
}

impl<S> FairValueProtocol<S> {
    fn transition<T>(self, state: T) -> FairValueProtocol<T> {
        FairValueProtocol {
            id: self.id,
            modulus: self.modulus,
            secret_key: self.secret_key,
            chosen_value: self.chosen_value,
            tag: self.tag,
            state,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::verify;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn key() -> SecretKey {
        SecretKey::from_bytes([7u8; 32])
    }

    #[test]
    fn test_combination_example() {
        let round = FairValueProtocol::with_value(key(), 3, 6).unwrap();
        let (_, round) = round.publish();
        let round = round.contribute(4).unwrap();

        assert_eq!(round.result(), 1);
    }

    #[test]
    fn test_full_round_reveals_verifiable_values() {
        let mut rng = SecureRandom::with_rng(StdRng::seed_from_u64(42));
        let round = FairValueProtocol::start(&mut rng, 6).unwrap();
        let (tag, round) = round.publish();
        let reveal = round.contribute(2).unwrap().reveal();

        assert_eq!(reveal.tag, tag);
        assert!(reveal.chosen_value < 6);
        assert!(verify(&reveal.secret_key, reveal.chosen_value, &tag));
        assert_eq!(reveal.result, (reveal.chosen_value + 2) % 6);
        assert!(reveal.verify().is_ok());
    }

    #[test]
    fn test_coin_toss_round() {
        let mut rng = SecureRandom::new();
        for _ in 0..20 {
            let (_, round) = FairValueProtocol::start(&mut rng, 2).unwrap().publish();
            let round = round.contribute(1).unwrap();
            assert!(round.result() < 2);
        }
    }

    #[test]
    fn test_out_of_range_contribution_is_rejected() {
        let (_, round) = FairValueProtocol::with_value(key(), 0, 6).unwrap().publish();
        let err = round.contribute(6).unwrap_err();

        assert!(matches!(
            err,
            FairDiceError::InvalidContribution {
                value: 6,
                modulus: 6
            }
        ));
    }

    #[test]
    fn test_out_of_range_secret_is_rejected() {
        assert!(FairValueProtocol::with_value(key(), 2, 2).is_err());
    }

    #[test]
    fn test_zero_modulus_is_rejected() {
        let mut rng = SecureRandom::new();
        let err = FairValueProtocol::start(&mut rng, 0).unwrap_err();
        assert!(matches!(err, FairDiceError::InvalidRange { min: 0, max: -1 }));
    }

    #[test]
    fn test_fresh_key_per_round() {
        let mut rng = SecureRandom::new();
        let first = FairValueProtocol::start(&mut rng, 6).unwrap();
        let second = FairValueProtocol::start(&mut rng, 6).unwrap();

        assert_ne!(first.id(), second.id());
        assert_ne!(first.secret_key, second.secret_key);
    }

    #[test]
    fn test_combine_does_not_overflow() {
        assert_eq!(combine(u32::MAX - 1, u32::MAX - 1, u32::MAX), u32::MAX - 2);
    }
}
