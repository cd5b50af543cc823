//! Decryption

use deoxys_algorithms::error::to_core_result;
use deoxys_algorithms::modular::{inner_product_bits, mod_add, round_scale};
use deoxys_api::Result;
use deoxys_params::LweParams;

use crate::keys::{Ciphertext, SecretKey};

/// `v + <u, sk> (mod Q)`: the scaled plaintext plus accumulated noise
pub(crate) fn noisy_plaintext<P: LweParams>(sk: &SecretKey, ct: &Ciphertext) -> Result<u64> {
    sk.check::<P>()?;
    ct.check::<P>()?;
    let inner = to_core_result(inner_product_bits(ct.u(), sk.bits(), P::Q), "decrypt")?;
    Ok(mod_add(ct.v(), inner, P::Q))
}

/// Decrypt to a value in `[0, T)`, rounding exact ties to even.
///
/// Decryption always yields a value. Once the accumulated noise reaches
/// `Δ/2` the result can be silently wrong; see [`crate::noise`].
pub fn decrypt<P: LweParams>(sk: &SecretKey, ct: &Ciphertext) -> Result<u64> {
    let noisy = noisy_plaintext::<P>(sk, ct)?;
    tracing::trace!(scheme = P::NAME, "decrypted ciphertext");
    Ok(round_scale(noisy, P::DELTA, P::T))
}
