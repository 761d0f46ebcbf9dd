//! Runtime configuration resolved from the command line and environment.

use fair_dice_core::{DiceSet, FairDiceError};

/// Settings for one game session
#[derive(Debug, Clone)]
pub struct Config {
    pub dice: DiceSet,
    /// Whether console output is colored
    pub color: bool,
}

impl Config {
    /// Validate dice arguments and presentation flags
    pub fn resolve<S: AsRef<str>>(dice: &[S], no_color: bool) -> Result<Self, FairDiceError> {
        Ok(Self {
            dice: DiceSet::parse(dice)?,
            color: !no_color,
        })
    }
}
