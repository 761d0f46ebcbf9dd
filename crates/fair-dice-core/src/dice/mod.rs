//! Dice and dice sets.
//!
//! A die has exactly six non-negative integer faces, parsed from a
//! comma-separated list such as `2,2,4,4,9,9`. A game needs at least
//! three dice.

mod probability;

pub use probability::{MatrixCell, PairOdds, ProbabilityMatrix, FACE_PAIRS};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FairDiceError, Result};

/// Faces on every die
pub const FACE_COUNT: usize = 6;

/// Dice needed to start a game
pub const MIN_DICE: usize = 3;

/// A six-faced die; immutable once validated
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    faces: [u32; FACE_COUNT],
}

impl Die {
    /// Build a die from exactly six faces
    pub fn from_faces(faces: &[u32]) -> Result<Self> {
        let faces = faces
            .try_into()
            .map_err(|_| FairDiceError::WrongFaceCount {
                expected: FACE_COUNT,
                found: faces.len(),
            })?;
        Ok(Self { faces })
    }

    /// All faces in order
    pub fn faces(&self) -> &[u32; FACE_COUNT] {
        &self.faces
    }

    /// Face at `index`, as selected by a face roll
    pub fn face(&self, index: u32) -> Result<u32> {
        self.faces
            .get(index as usize)
            .copied()
            .ok_or(FairDiceError::FaceIndexOutOfRange { index })
    }
}

impl FromStr for Die {
    type Err = FairDiceError;

    fn from_str(s: &str) -> Result<Self> {
        let faces = s
            .split(',')
            .map(|token| {
                let token = token.trim();
                let value: i64 = token
                    .parse()
                    .map_err(|_| FairDiceError::NonIntegerFace(token.to_string()))?;
                if value < 0 {
                    return Err(FairDiceError::NegativeFace(value));
                }
                u32::try_from(value).map_err(|_| FairDiceError::NonIntegerFace(token.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;

        Self::from_faces(&faces)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let faces: Vec<String> = self.faces.iter().map(|face| face.to_string()).collect();
        write!(f, "[{}]", faces.join(","))
    }
}

/// The dice available in a game session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    /// Create a set of at least `MIN_DICE` dice
    pub fn new(dice: Vec<Die>) -> Result<Self> {
        if dice.len() < MIN_DICE {
            return Err(FairDiceError::TooFewDice {
                required: MIN_DICE,
                found: dice.len(),
            });
        }
        Ok(Self { dice })
    }

    /// Parse one die per argument string
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Self> {
        if args.len() < MIN_DICE {
            return Err(FairDiceError::TooFewDice {
                required: MIN_DICE,
                found: args.len(),
            });
        }
        let dice = args
            .iter()
            .map(|arg| arg.as_ref().parse())
            .collect::<Result<Vec<Die>>>()?;
        Self::new(dice)
    }

    pub fn len(&self) -> usize {
        self.dice.len()
    }

    /// Always false for a validated set
    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    pub fn as_slice(&self) -> &[Die] {
        &self.dice
    }

    /// Indices of the dice still free once `taken` is claimed
    pub fn available(&self, taken: Option<usize>) -> Vec<usize> {
        (0..self.dice.len())
            .filter(|&index| Some(index) != taken)
            .collect()
    }

    /// Win probabilities between every ordered pair of dice in the set
    pub fn probabilities(&self) -> ProbabilityMatrix {
        ProbabilityMatrix::from_dice(&self.dice)
    }
}
