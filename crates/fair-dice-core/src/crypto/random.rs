//! Unbiased integer sampling by rejection over cryptographic random bytes.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::trace;

use crate::error::{FairDiceError, Result};

/// Uniform integer sampler over a cryptographically secure byte source.
///
/// The generator must implement `CryptoRng`; the default is the operating
/// system's entropy source.
#[derive(Debug, Default)]
pub struct SecureRandom<R = OsRng> {
    rng: R,
}

impl SecureRandom<OsRng> {
    /// Create a sampler backed by the OS entropy source
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> SecureRandom<R> {
    /// Create a sampler over a caller-supplied cryptographic generator
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Fill `dest` with random bytes
    pub fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<()> {
        self.rng.try_fill_bytes(dest)?;
        Ok(())
    }

    /// Draw an integer uniformly from `min..=max`.
    ///
    /// Draws the fewest big-endian bytes that can cover the range and
    /// rejects any draw at or above the largest multiple of the range size,
    /// so every value has exactly the same probability.
    pub fn uniform(&mut self, min: i64, max: i64) -> Result<i64> {
        if max < min {
            return Err(FairDiceError::InvalidRange { min, max });
        }

        let range = (i128::from(max) - i128::from(min) + 1) as u128;
        let byte_count = bytes_to_cover(range);
        let space = 1u128 << (8 * byte_count);
        let limit = space - space % range;

        let mut buf = [0u8; 8];
        loop {
            let bytes = &mut buf[..byte_count];
            self.fill_bytes(bytes)?;
            let value = bytes
                .iter()
                .fold(0u128, |acc, byte| (acc << 8) | u128::from(*byte));

            if value < limit {
                let offset = (value % range) as i128;
                return Ok((i128::from(min) + offset) as i64);
            }
            trace!("rejected draw {} (limit {}) for range {}", value, limit, range);
        }
    }
}

/// Smallest `k` such that `256^k >= range`
fn bytes_to_cover(range: u128) -> usize {
    let mut count = 0;
    let mut space: u128 = 1;
    while space < range {
        space <<= 8;
        count += 1;
    }
    count
}
