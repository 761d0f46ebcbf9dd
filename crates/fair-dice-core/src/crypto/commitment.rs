//! SecretKey and CommitmentTag for the commit-reveal scheme.
//!
//! tag = HMAC-SHA3-256(secret_key, decimal(value))

use hmac::{Hmac, Mac};
use rand::{CryptoRng, RngCore};
use serde::{Deserialize, Serialize};
use sha3::Sha3_256;
use std::fmt;
use std::str::FromStr;

use super::SecureRandom;
use crate::error::{FairDiceError, Result};

type HmacSha3 = Hmac<Sha3_256>;

/// Length of a secret key in bytes
pub const SECRET_KEY_LEN: usize = 32;

/// Per-round secret key, disclosed only at reveal time
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey(#[serde(with = "hex_serde")] [u8; SECRET_KEY_LEN]);

impl SecretKey {
    /// Generate a fresh key from the secure random source
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut SecureRandom<R>) -> Result<Self> {
        let mut bytes = [0u8; SECRET_KEY_LEN];
        rng.fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; SECRET_KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LEN] {
        &self.0
    }

    /// Uppercase hex, as shown to the counterparty at reveal
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode_upper(&self.0[..4]))
    }
}

impl FromStr for SecretKey {
    type Err = FairDiceError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(decode_32(s)?))
    }
}

/// Published commitment tag
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommitmentTag(#[serde(with = "hex_serde")] [u8; 32]);

impl CommitmentTag {
    /// Commit to `value` under `key`
    pub fn new(key: &SecretKey, value: u32) -> Self {
        Self(keyed_mac(key, value).finalize().into_bytes().into())
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify that the given key and value produce this tag
    pub fn verify(&self, key: &SecretKey, value: u32) -> bool {
        keyed_mac(key, value).verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CommitmentTag({})", hex::encode_upper(&self.0[..8]))
    }
}

impl fmt::Display for CommitmentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl FromStr for CommitmentTag {
    type Err = FairDiceError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(decode_32(s)?))
    }
}

/// Compute the commitment tag for `value` under `key`
pub fn commit(key: &SecretKey, value: u32) -> CommitmentTag {
    CommitmentTag::new(key, value)
}

/// Check a disclosed key and value against a previously published tag
pub fn verify(key: &SecretKey, value: u32, tag: &CommitmentTag) -> bool {
    tag.verify(key, value)
}

fn keyed_mac(key: &SecretKey, value: u32) -> HmacSha3 {
    let mut mac = HmacSha3::new_from_slice(key.as_bytes()).expect("HMAC accepts any key length");
    mac.update(value.to_string().as_bytes());
    mac
}

fn decode_32(s: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(s.trim())?;
    bytes
        .try_into()
        .map_err(|b: Vec<u8>| FairDiceError::InvalidHex(format!("expected 32 bytes, got {}", b.len())))
}

mod hex_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8; 32], s: S) -> Result<S::Ok, S::Error> {
        hex::encode_upper(bytes).serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<[u8; 32], D::Error> {
        let hex_str = String::deserialize(d)?;
        super::decode_32(&hex_str).map_err(serde::de::Error::custom)
    }
}
