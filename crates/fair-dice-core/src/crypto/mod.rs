//! Cryptographic primitives for the fair dice protocol.
//!
//! This module provides:
//! - SecureRandom for unbiased integers drawn from the OS entropy source
//! - SecretKey and CommitmentTag for the commit-reveal scheme

mod commitment;
mod random;

pub use commitment::{commit, verify, CommitmentTag, SecretKey, SECRET_KEY_LEN};
pub use random::SecureRandom;
