//! Error types for the fair dice core.

use thiserror::Error;

use crate::protocol::RoundId;

/// Errors from protocol, sampling and dice validation
#[derive(Debug, Error)]
pub enum FairDiceError {
    #[error("Invalid range: max {max} is below min {min}")]
    InvalidRange { min: i64, max: i64 },

    #[error("Invalid contribution {value}: expected a number from 0 to {}", .modulus.saturating_sub(1))]
    InvalidContribution { value: u32, modulus: u32 },

    #[error("Each dice must have exactly {expected} faces, got {found}")]
    WrongFaceCount { expected: usize, found: usize },

    #[error("Each dice value must be an integer, got '{0}'")]
    NonIntegerFace(String),

    #[error("Dice values must not be negative, got {0}")]
    NegativeFace(i64),

    #[error("At least {required} dice configurations are required, got {found}")]
    TooFewDice { required: usize, found: usize },

    #[error("Face index {index} is out of range")]
    FaceIndexOutOfRange { index: u32 },

    #[error("Verification failed for round {0}: revealed values do not match the commitment")]
    VerificationMismatch(RoundId),

    #[error("Secure random source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

impl FairDiceError {
    /// Whether the caller may re-prompt and try again.
    ///
    /// Integrity and entropy failures abort the round instead.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            FairDiceError::VerificationMismatch(_) | FairDiceError::EntropyUnavailable(_)
        )
    }
}

impl From<rand::Error> for FairDiceError {
    fn from(err: rand::Error) -> Self {
        FairDiceError::EntropyUnavailable(err.to_string())
    }
}

impl From<hex::FromHexError> for FairDiceError {
    fn from(err: hex::FromHexError) -> Self {
        FairDiceError::InvalidHex(err.to_string())
    }
}

/// Convenience result type for fair dice operations.
pub type Result<T> = std::result::Result<T, FairDiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors_are_recoverable() {
        assert!(FairDiceError::InvalidRange { min: 1, max: 0 }.is_recoverable());
        assert!(FairDiceError::WrongFaceCount {
            expected: 6,
            found: 5
        }
        .is_recoverable());
        assert!(FairDiceError::NonIntegerFace("x".to_string()).is_recoverable());
        assert!(FairDiceError::InvalidContribution {
            value: 9,
            modulus: 6
        }
        .is_recoverable());
    }

    #[test]
    fn test_integrity_errors_are_fatal() {
        assert!(!FairDiceError::VerificationMismatch(RoundId::new()).is_recoverable());
        assert!(!FairDiceError::EntropyUnavailable("gone".to_string()).is_recoverable());
    }

    #[test]
    fn test_error_messages() {
        let err = FairDiceError::InvalidContribution {
            value: 7,
            modulus: 6,
        };
        assert_eq!(
            err.to_string(),
            "Invalid contribution 7: expected a number from 0 to 5"
        );

        let err = FairDiceError::WrongFaceCount {
            expected: 6,
            found: 5,
        };
        assert_eq!(err.to_string(), "Each dice must have exactly 6 faces, got 5");
    }
}
