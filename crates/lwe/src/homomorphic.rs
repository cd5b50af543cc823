//! Homomorphic addition
//!
//! Adding ciphertexts adds plaintexts mod T and adds their noise terms.
//! Nothing tracks how much noise a sum carries; use [`crate::noise`] to
//! measure it.

use deoxys_algorithms::error::to_core_result;
use deoxys_algorithms::modular::{mod_add, vec_add};
use deoxys_api::{Error, Result};
use deoxys_params::LweParams;

use crate::keys::Ciphertext;

/// Componentwise `(u1 + u2, v1 + v2) mod Q`
pub fn add<P: LweParams>(lhs: &Ciphertext, rhs: &Ciphertext) -> Result<Ciphertext> {
    lhs.check::<P>()?;
    rhs.check::<P>()?;
    let u = to_core_result(vec_add(lhs.u(), rhs.u(), P::Q), "add")?;
    let v = mod_add(lhs.v(), rhs.v(), P::Q);
    Ok(Ciphertext::from_parts(u, v))
}

/// Fold [`add`] over a non-empty sequence of ciphertexts
pub fn sum<'a, P, I>(ciphertexts: I) -> Result<Ciphertext>
where
    P: LweParams,
    I: IntoIterator<Item = &'a Ciphertext>,
{
    let mut iter = ciphertexts.into_iter();
    let first = iter
        .next()
        .ok_or_else(|| Error::param("sum", "at least one ciphertext is required"))?;
    first.check::<P>()?;

    let mut count = 1usize;
    let total = iter.try_fold(first.clone(), |acc, ct| {
        count += 1;
        add::<P>(&acc, ct)
    })?;
    tracing::debug!(scheme = P::NAME, count, "summed ciphertexts");
    Ok(total)
}
