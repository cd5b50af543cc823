//! Deterministic entropy derivation
//!
//! Every pseudo-random value in the scheme comes from SHA-256 over a seed and
//! a domain-separation label, optionally followed by a big-endian counter:
//!
//! - `label_digest(label) = SHA256(seed || label)`
//! - `derive(label, i)    = BE64(SHA256(label_digest(label) || BE32(i))[..8])`
//!
//! Outputs are pure functions of their inputs and identical on every
//! platform. Nothing here touches system randomness.
//!
//! Encryption randomness is derived from the *message* instead of a seed
//! (see [`message_word`]). Equal plaintexts therefore encrypt identically,
//! which breaks semantic security; randomized encryption takes a caller RNG
//! instead and lives in `deoxys-lwe`.

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use deoxys_params::utils::hash::{
    COUNTER_BYTES, DERIVED_WORD_BYTES, MESSAGE_WORD_BYTES, SHA256_OUTPUT_SIZE,
};

use crate::error::{validate, Result};

/// A SHA-256 output
pub type Digest256 = [u8; SHA256_OUTPUT_SIZE];

/// SHA-256 over the concatenation of `parts`
pub fn sha256(parts: &[&[u8]]) -> Digest256 {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// The first four digest bytes of `SHA256(bytes)` as a big-endian integer
pub fn prefix_word(bytes: &[u8]) -> u32 {
    be32(&sha256(&[bytes]))
}

#[inline]
fn be64(digest: &Digest256) -> u64 {
    let mut word = [0u8; DERIVED_WORD_BYTES];
    word.copy_from_slice(&digest[..DERIVED_WORD_BYTES]);
    u64::from_be_bytes(word)
}

#[inline]
fn be32(digest: &Digest256) -> u32 {
    let mut word = [0u8; MESSAGE_WORD_BYTES];
    word.copy_from_slice(&digest[..MESSAGE_WORD_BYTES]);
    u32::from_be_bytes(word)
}

#[inline]
fn centered(word: u64, bound: i64) -> i64 {
    debug_assert!(bound > 0);
    (word % (2 * bound as u64)) as i64 - bound
}

/// Seeded, label-separated derivation stream.
///
/// The seed is key material and is zeroized when the source is dropped.
pub struct DeterministicEntropy {
    seed: Zeroizing<Vec<u8>>,
}

impl DeterministicEntropy {
    /// Create a source over `seed`. The seed must not be empty.
    pub fn new(seed: &[u8]) -> Result<Self> {
        validate::parameter(!seed.is_empty(), "seed", "must not be empty")?;
        Ok(Self {
            seed: Zeroizing::new(seed.to_vec()),
        })
    }

    /// `SHA256(seed || label)`
    pub fn label_digest(&self, label: &[u8]) -> Zeroizing<Digest256> {
        Zeroizing::new(sha256(&[self.seed.as_slice(), label]))
    }

    /// Counter-mode word `index` under `label`
    pub fn derive(&self, label: &[u8], index: u32) -> u64 {
        counter_word(&self.label_digest(label), index)
    }

    /// [`Self::derive`] reduced into `[0, modulus)`
    pub fn derive_mod(&self, label: &[u8], index: u32, modulus: u64) -> u64 {
        self.derive(label, index) % modulus
    }

    /// The first `count` counter-mode words under `label`, reduced into `[0, modulus)`
    pub fn derive_vec(&self, label: &[u8], count: usize, modulus: u64) -> Vec<u64> {
        let digest = self.label_digest(label);
        (0..count)
            .map(|i| counter_word(&digest, i as u32) % modulus)
            .collect()
    }

    /// `count` bits read from `label_digest(label)`: bit `i` is bit `i mod 8`
    /// of byte `i mod 32`, so the digest bytes cycle for long outputs.
    pub fn bits(&self, label: &[u8], count: usize) -> Vec<u8> {
        let digest = self.label_digest(label);
        (0..count)
            .map(|i| (digest[i % SHA256_OUTPUT_SIZE] >> (i % 8)) & 1)
            .collect()
    }

    /// A small signed value in `[-bound, bound)` read from `label_digest(label)`
    pub fn small_error(&self, label: &[u8], bound: i64) -> i64 {
        centered(be64(&self.label_digest(label)), bound)
    }
}

fn counter_word(digest: &Digest256, index: u32) -> u64 {
    let counter: [u8; COUNTER_BYTES] = index.to_be_bytes();
    be64(&sha256(&[digest.as_slice(), &counter[..]]))
}

/// `BE32(SHA256(decimal(message) || label)[..4])`
pub fn message_word(message: u64, label: &[u8]) -> u32 {
    be32(&sha256(&[message.to_string().as_bytes(), label]))
}

/// [`message_word`] reduced into `[0, modulus)`
pub fn message_sample(message: u64, label: &[u8], modulus: u64) -> u64 {
    u64::from(message_word(message, label)) % modulus
}

/// [`message_word`] mapped into `[-bound, bound)`
pub fn message_error(message: u64, label: &[u8], bound: i64) -> i64 {
    centered(u64::from(message_word(message, label)), bound)
}
