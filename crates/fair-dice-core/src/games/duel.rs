//! Die selection and roll comparison.

use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::crypto::SecureRandom;
use crate::dice::{DiceSet, Die};
use crate::error::Result;
use crate::protocol::{Player, Reveal};

/// Outcome of comparing two rolls
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuelResult {
    ComputerWins,
    HumanWins,
    Tie,
}

impl DuelResult {
    /// The winning player, if any
    pub fn winner(&self) -> Option<Player> {
        match self {
            DuelResult::ComputerWins => Some(Player::Computer),
            DuelResult::HumanWins => Some(Player::Human),
            DuelResult::Tie => None,
        }
    }
}

impl fmt::Display for DuelResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuelResult::ComputerWins => write!(f, "Computer wins"),
            DuelResult::HumanWins => write!(f, "User wins"),
            DuelResult::Tie => write!(f, "Tie"),
        }
    }
}

/// Higher roll wins; equal rolls tie
pub fn judge(computer_roll: u32, human_roll: u32) -> DuelResult {
    match computer_roll.cmp(&human_roll) {
        std::cmp::Ordering::Greater => DuelResult::ComputerWins,
        std::cmp::Ordering::Less => DuelResult::HumanWins,
        std::cmp::Ordering::Equal => DuelResult::Tie,
    }
}

/// The face of `die` selected by a completed face-roll round
pub fn roll_face(die: &Die, roll: &Reveal) -> Result<u32> {
    die.face(roll.result)
}

/// Pick the computer's die uniformly among those not `taken` by the human
pub fn choose_computer_die<R: RngCore + CryptoRng>(
    rng: &mut SecureRandom<R>,
    dice: &DiceSet,
    taken: Option<usize>,
) -> Result<usize> {
    let available = dice.available(taken);
    let pick = rng.uniform(0, available.len() as i64 - 1)? as usize;
    let index = available[pick];
    debug!(index, ?taken, "computer chose die");
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::SecretKey;
    use crate::protocol::FairValueProtocol;

    fn dice() -> DiceSet {
        DiceSet::parse(&["2,2,4,4,9,9", "1,1,6,6,8,8", "3,3,5,5,7,7"]).unwrap()
    }

    #[test]
    fn test_judge() {
        assert_eq!(judge(9, 8), DuelResult::ComputerWins);
        assert_eq!(judge(1, 6), DuelResult::HumanWins);
        assert_eq!(judge(5, 5), DuelResult::Tie);
    }

    #[test]
    fn test_winner() {
        assert_eq!(DuelResult::ComputerWins.winner(), Some(Player::Computer));
        assert_eq!(DuelResult::HumanWins.winner(), Some(Player::Human));
        assert_eq!(DuelResult::Tie.winner(), None);
    }

    #[test]
    fn test_roll_face_uses_result_as_index() {
        let die = Die::from_faces(&[10, 11, 12, 13, 14, 15]).unwrap();
        let key = SecretKey::from_bytes([1u8; 32]);
        let (_, round) = FairValueProtocol::with_value(key, 3, 6).unwrap().publish();
        let reveal = round.contribute(4).unwrap().reveal();

        assert_eq!(roll_face(&die, &reveal).unwrap(), 11);
    }

    #[test]
    fn test_computer_never_takes_human_die() {
        let mut rng = SecureRandom::new();
        let dice = dice();
        for _ in 0..100 {
            let index = choose_computer_die(&mut rng, &dice, Some(1)).unwrap();
            assert_ne!(index, 1);
            assert!(index < dice.len());
        }
    }

    #[test]
    fn test_computer_can_pick_any_free_die() {
        let mut rng = SecureRandom::new();
        let dice = dice();
        let mut seen = [false; 3];
        for _ in 0..300 {
            seen[choose_computer_die(&mut rng, &dice, None).unwrap()] = true;
        }
        assert_eq!(seen, [true, true, true]);
    }
}
