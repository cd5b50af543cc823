//! Encryption
//!
//! `u = A*r + e1 (mod Q)` and `v = b*r + e2 + m*Δ (mod Q)`.
//!
//! [`encrypt`] derives `(r, e1, e2)` from the plaintext itself, so it is a
//! pure function of `(pk, m)`: equal plaintexts give equal ciphertexts.
//! [`encrypt_with_rng`] draws them from a caller RNG instead.

use deoxys_algorithms::modular::{mod_add, mod_mul, reduce_signed, scale_and_shift};
use deoxys_algorithms::{message_error, message_sample};
use deoxys_api::{Error, Result};
use deoxys_params::lwe::{labels, NOISE_BOUND, R_BOUND};
use deoxys_params::LweParams;
use rand::{CryptoRng, Rng, RngCore};

use crate::keygen::check_params;
use crate::keys::{Ciphertext, PublicKey};

/// The per-encryption randomness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct EncryptionNoise {
    pub r: u64,
    pub e1: i64,
    pub e2: i64,
}

impl EncryptionNoise {
    pub(crate) fn from_message(m: u64) -> Self {
        Self {
            r: message_sample(m, labels::ENC_R, R_BOUND),
            e1: message_error(m, labels::ENC_E1, NOISE_BOUND),
            e2: message_error(m, labels::ENC_E2, NOISE_BOUND),
        }
    }

    fn sample<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        Self {
            r: rng.gen_range(0..R_BOUND),
            e1: rng.gen_range(-NOISE_BOUND..NOISE_BOUND),
            e2: rng.gen_range(-NOISE_BOUND..NOISE_BOUND),
        }
    }
}

pub(crate) fn check_plaintext<P: LweParams>(m: u64) -> Result<()> {
    if m >= P::T {
        return Err(Error::PlaintextOutOfRange {
            value: m,
            modulus: P::T,
        });
    }
    Ok(())
}

/// Encrypt `m` in `[0, T)` with message-derived randomness
pub fn encrypt<P: LweParams>(pk: &PublicKey, m: u64) -> Result<Ciphertext> {
    check_params::<P>()?;
    check_plaintext::<P>(m)?;
    encrypt_with_noise::<P>(pk, m, EncryptionNoise::from_message(m))
}

/// Encrypt `m` in `[0, T)` with randomness drawn from `rng`
pub fn encrypt_with_rng<P, R>(pk: &PublicKey, m: u64, rng: &mut R) -> Result<Ciphertext>
where
    P: LweParams,
    R: RngCore + CryptoRng,
{
    check_params::<P>()?;
    check_plaintext::<P>(m)?;
    encrypt_with_noise::<P>(pk, m, EncryptionNoise::sample(rng))
}

pub(crate) fn encrypt_with_noise<P: LweParams>(
    pk: &PublicKey,
    m: u64,
    noise: EncryptionNoise,
) -> Result<Ciphertext> {
    pk.check::<P>()?;

    let u = scale_and_shift(pk.a(), noise.r, noise.e1, P::Q);
    let masked = mod_add(mod_mul(pk.b(), noise.r, P::Q), reduce_signed(noise.e2, P::Q), P::Q);
    let v = mod_add(masked, mod_mul(m, P::DELTA, P::Q), P::Q);

    tracing::trace!(scheme = P::NAME, "encrypted plaintext");
    Ok(Ciphertext::from_parts(u, v))
}
