//! Key generation

use deoxys_algorithms::error::to_core_result;
use deoxys_algorithms::modular::{inner_product_bits, mod_add, mod_neg, reduce_signed};
use deoxys_algorithms::DeterministicEntropy;
use deoxys_api::{Error, Result};
use deoxys_params::lwe::{labels, NOISE_BOUND};
use deoxys_params::LweParams;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::keys::{KeyPair, PublicKey, SecretKey};

/// Length of the seed drawn by [`keygen_with_rng`]
pub const RANDOM_SEED_BYTES: usize = 32;

pub(crate) fn check_params<P: LweParams>() -> Result<()> {
    P::parameter_set()
        .validate()
        .map_err(|reason| Error::param(P::NAME, reason))
}

/// Derive a key pair from `seed`. The same seed always yields the same keys.
pub fn keygen<P: LweParams>(seed: &[u8]) -> Result<KeyPair> {
    check_params::<P>()?;
    let source = to_core_result(DeterministicEntropy::new(seed), "keygen")?;

    let bits = source.bits(labels::SECRET_KEY, P::N);
    let a = source.derive_vec(labels::PUBLIC_A, P::N, P::Q);
    let e = source.small_error(labels::KEY_ERROR, NOISE_BOUND);

    let masked = to_core_result(inner_product_bits(&a, &bits, P::Q), "keygen")?;
    let b = mod_add(mod_neg(masked, P::Q), reduce_signed(e, P::Q), P::Q);

    tracing::debug!(scheme = P::NAME, dimension = P::N, "derived key pair");
    Ok(KeyPair::new(PublicKey::from_parts(a, b), SecretKey::new(bits)))
}

/// Generate a key pair from a fresh seed drawn from `rng`
pub fn keygen_with_rng<P, R>(rng: &mut R) -> Result<KeyPair>
where
    P: LweParams,
    R: RngCore + CryptoRng,
{
    let mut seed = Zeroizing::new([0u8; RANDOM_SEED_BYTES]);
    rng.try_fill_bytes(&mut seed[..])
        .map_err(|e| Error::RandomGenerationError {
            context: "keygen",
            message: e.to_string(),
        })?;
    keygen::<P>(&seed[..])
}
