//! Exact die-vs-die win probabilities.
//!
//! Every ordered pair of dice is evaluated by enumerating all 36 face
//! pairs. Ties count toward neither side, so for dice A and B
//! `P(A beats B) + P(B beats A) + P(tie) == 1`.

use serde::Serialize;
use std::fmt;

use super::{Die, FACE_COUNT};
use crate::error::{FairDiceError, Result};

/// Face pairs enumerated for each ordered pair of dice
pub const FACE_PAIRS: u32 = (FACE_COUNT * FACE_COUNT) as u32;

/// Outcome counts for one die rolled against another
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PairOdds {
    pub wins: u32,
    pub ties: u32,
    pub losses: u32,
}

impl PairOdds {
    /// Count outcomes of `die` against `opponent` over all face pairs
    pub fn between(die: &Die, opponent: &Die) -> Self {
        let mut odds = PairOdds {
            wins: 0,
            ties: 0,
            losses: 0,
        };
        for face in die.faces() {
            for other in opponent.faces() {
                match face.cmp(other) {
                    std::cmp::Ordering::Greater => odds.wins += 1,
                    std::cmp::Ordering::Equal => odds.ties += 1,
                    std::cmp::Ordering::Less => odds.losses += 1,
                }
            }
        }
        odds
    }

    pub fn win_probability(&self) -> f64 {
        f64::from(self.wins) / f64::from(FACE_PAIRS)
    }

    pub fn tie_probability(&self) -> f64 {
        f64::from(self.ties) / f64::from(FACE_PAIRS)
    }

    pub fn loss_probability(&self) -> f64 {
        f64::from(self.losses) / f64::from(FACE_PAIRS)
    }

    /// The same pairing seen from the opponent's side
    pub fn reversed(&self) -> Self {
        PairOdds {
            wins: self.losses,
            ties: self.ties,
            losses: self.wins,
        }
    }

    /// Win probability as a one-decimal percentage, e.g. `55.6%`
    pub fn to_percent(&self) -> String {
        format!("{:.1}%", self.win_probability() * 100.0)
    }
}

/// One cell of the matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MatrixCell {
    /// A die against itself; not a meaningful pairing
    SelfMatch,
    Odds(PairOdds),
}

impl MatrixCell {
    /// Display text for `SelfMatch`
    pub const SENTINEL: &'static str = "-";

    pub fn odds(&self) -> Option<&PairOdds> {
        match self {
            MatrixCell::SelfMatch => None,
            MatrixCell::Odds(odds) => Some(odds),
        }
    }
}

impl fmt::Display for MatrixCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrixCell::SelfMatch => f.write_str(Self::SENTINEL),
            MatrixCell::Odds(odds) => f.write_str(&odds.to_percent()),
        }
    }
}

/// Win probabilities for every ordered pair of dice, row against column.
///
/// Computed on demand and never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProbabilityMatrix {
    size: usize,
    cells: Vec<MatrixCell>,
}

impl ProbabilityMatrix {
    /// Evaluate a non-empty list of dice
    pub fn evaluate(dice: &[Die]) -> Result<Self> {
        if dice.is_empty() {
            return Err(FairDiceError::TooFewDice {
                required: 1,
                found: 0,
            });
        }
        Ok(Self::from_dice(dice))
    }

    pub(crate) fn from_dice(dice: &[Die]) -> Self {
        let cells = dice
            .iter()
            .enumerate()
            .flat_map(|(row, die)| {
                dice.iter().enumerate().map(move |(column, opponent)| {
                    if row == column {
                        MatrixCell::SelfMatch
                    } else {
                        MatrixCell::Odds(PairOdds::between(die, opponent))
                    }
                })
            })
            .collect();

        Self {
            size: dice.len(),
            cells,
        }
    }

    /// Number of dice (rows and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell for `row` playing against `column`
    pub fn cell(&self, row: usize, column: usize) -> Option<&MatrixCell> {
        if row >= self.size || column >= self.size {
            return None;
        }
        self.cells.get(row * self.size + column)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[MatrixCell]> {
        self.cells.chunks(self.size)
    }

    /// Percentage strings, `-` on the diagonal
    pub fn to_percent_table(&self) -> Vec<Vec<String>> {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect()
    }

    /// A die that beats every other die more often than it loses, if any
    pub fn dominant(&self) -> Option<usize> {
        (0..self.size).find(|&row| {
            self.rows()
                .nth(row)
                .into_iter()
                .flatten()
                .filter_map(MatrixCell::odds)
                .all(|odds| odds.wins > odds.losses)
        })
    }
}
