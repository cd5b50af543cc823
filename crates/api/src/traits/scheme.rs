//! Trait definition for homomorphic encryption schemes.

use super::serialize::{Serialize, SerializeSecret};
use crate::error::{CipherResult, KeyResult};
use crate::Result;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// Trait for public key encryption schemes over a small integer plaintext space.
///
/// # Security Design
///
/// Secret keys only ever enter through `decrypt`, by shared reference. A scheme
/// never stores a secret key between calls.
pub trait HomomorphicScheme {
    /// Public key type. Shared freely with encrypting parties.
    type PublicKey: Clone + Serialize;

    /// Secret key type.
    ///
    /// # Security Note
    /// - Implements `Zeroize` for secure memory cleanup.
    /// - Implements `SerializeSecret`, so raw bytes only leave through a zeroizing buffer.
    type SecretKey: Zeroize + Clone + SerializeSecret;

    /// Ciphertext type. An immutable value with no reference to the key that made it.
    type Ciphertext: Clone + Serialize;

    /// Returns the scheme name.
    fn name() -> &'static str;

    /// Size of the plaintext space; valid plaintexts are `0..plaintext_modulus()`.
    fn plaintext_modulus() -> u64;

    /// Derive a key pair deterministically from a seed.
    fn keypair_from_seed(seed: &[u8]) -> KeyResult<(Self::PublicKey, Self::SecretKey)>;

    /// Generate a key pair from a fresh seed drawn from the provided CSPRNG.
    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> KeyResult<(Self::PublicKey, Self::SecretKey)>;

    /// Encrypt `plaintext`. Equal inputs give equal ciphertexts.
    ///
    /// Fails with [`crate::Error::PlaintextOutOfRange`] when the plaintext is not
    /// below [`Self::plaintext_modulus`].
    fn encrypt(public_key: &Self::PublicKey, plaintext: u64) -> CipherResult<Self::Ciphertext>;

    /// Encrypt `plaintext` with encryption randomness drawn from `rng`.
    fn encrypt_with_rng<R: CryptoRng + RngCore>(
        public_key: &Self::PublicKey,
        plaintext: u64,
        rng: &mut R,
    ) -> CipherResult<Self::Ciphertext>;

    /// Decrypt a ciphertext.
    ///
    /// A ciphertext whose noise has outgrown the budget still decrypts, to a
    /// wrong value; only malformed inputs produce an error.
    fn decrypt(secret_key: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<u64>;
}

/// Schemes whose ciphertexts can be added without decryption.
pub trait AdditiveHomomorphic: HomomorphicScheme {
    /// Combine two ciphertexts into one that decrypts to the sum of their
    /// plaintexts modulo the plaintext modulus.
    fn add(lhs: &Self::Ciphertext, rhs: &Self::Ciphertext) -> CipherResult<Self::Ciphertext>;
}
