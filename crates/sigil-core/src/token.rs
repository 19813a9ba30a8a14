use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::{Result, SigilError};

/// Number of decimal digits in a candidate string.
pub const CANDIDATE_LEN: usize = 7;

/// A generated token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Human-readable candidate: 7 ASCII decimal digits in draw order.
    pub candidate: String,
    /// Lowercase SHA-256 hex of the candidate's bytes, 64 chars.
    pub digest: String,
}

/// A uniform source of decimal digits.
///
/// Production code draws from the operating system via [`OsDigitSource`];
/// tests pass a [`SeededDigitSource`] so runs are reproducible.
pub trait DigitSource {
    /// Next uniform digit in `0..=9`.
    fn next_digit(&mut self) -> Result<u8>;
}

/// Digits drawn from the OS random source.
///
/// Bytes 250..=255 are redrawn so `byte % 10` stays exactly uniform.
/// A failed OS read surfaces as [`SigilError::RandomSource`] instead of
/// panicking.
pub struct OsDigitSource;

impl DigitSource for OsDigitSource {
    fn next_digit(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        loop {
            OsRng
                .try_fill_bytes(&mut buf)
                .map_err(|e| SigilError::RandomSource(e.to_string()))?;
            if buf[0] < 250 {
                return Ok(buf[0] % 10);
            }
        }
    }
}

/// Deterministic digit source seeded from a `u64`.
///
/// Never wired into the production entry point; the same seed always
/// yields the same digit sequence.
pub struct SeededDigitSource {
    rng: StdRng,
}

impl SeededDigitSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl DigitSource for SeededDigitSource {
    fn next_digit(&mut self) -> Result<u8> {
        Ok(self.rng.gen_range(0..=9))
    }
}

/// Generate a candidate string and its digest from the given digit source.
///
/// Draws `CANDIDATE_LEN` digits in order, then hashes the resulting
/// string. The only failure mode is the source itself.
pub fn generate(source: &mut dyn DigitSource) -> Result<Token> {
    let mut candidate = String::with_capacity(CANDIDATE_LEN);
    for _ in 0..CANDIDATE_LEN {
        let digit = source.next_digit()?;
        candidate.push(char::from(b'0' + digit));
    }

    let digest = hash_candidate(&candidate);
    debug!("generated {CANDIDATE_LEN}-digit candidate");

    Ok(Token { candidate, digest })
}

/// SHA-256 over the candidate's UTF-8 bytes, rendered as lowercase hex.
pub fn hash_candidate(candidate: &str) -> String {
    let digest = Sha256::digest(candidate.as_bytes());
    hex::encode(digest)
}
