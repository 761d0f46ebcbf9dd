//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::dice::FACE_COUNT;

/// Number of outcomes of the first-move coin toss
pub const COIN_SIDES: u32 = 2;

/// Unique round identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoundId(Uuid);

impl RoundId {
    /// Create a new random round ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RoundId {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for RoundId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl fmt::Debug for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoundId({})", self.0)
    }
}

impl fmt::Display for RoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Participant in a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Computer,
    Human,
}

impl Player {
    /// Get the opponent
    pub fn opponent(&self) -> Player {
        match self {
            Player::Computer => Player::Human,
            Player::Human => Player::Computer,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Computer => write!(f, "Computer"),
            Player::Human => write!(f, "User"),
        }
    }
}

/// What a round's combined value is used for
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundKind {
    /// Decides who moves first
    CoinToss,
    /// Selects the face of the given player's die
    FaceRoll(Player),
}

impl RoundKind {
    /// Size of the agreed value range
    pub fn modulus(&self) -> u32 {
        match self {
            RoundKind::CoinToss => COIN_SIDES,
            RoundKind::FaceRoll(_) => FACE_COUNT as u32,
        }
    }
}

impl fmt::Display for RoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundKind::CoinToss => write!(f, "first move"),
            RoundKind::FaceRoll(player) => write!(f, "{}'s roll", player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_id_generation() {
        let id1 = RoundId::new();
        let id2 = RoundId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_round_id_parses_from_display() {
        let id = RoundId::new();
        let parsed: RoundId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_player_opponent() {
        assert_eq!(Player::Computer.opponent(), Player::Human);
        assert_eq!(Player::Human.opponent(), Player::Computer);
    }

    #[test]
    fn test_round_kind_modulus() {
        assert_eq!(RoundKind::CoinToss.modulus(), 2);
        assert_eq!(RoundKind::FaceRoll(Player::Human).modulus(), 6);
    }

    #[test]
    fn test_round_kind_display() {
        assert_eq!(RoundKind::CoinToss.to_string(), "first move");
        assert_eq!(
            RoundKind::FaceRoll(Player::Computer).to_string(),
            "Computer's roll"
        );
    }
}
