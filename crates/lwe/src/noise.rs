//! Noise diagnostics
//!
//! A ciphertext of `m` satisfies `v + <u, sk> = m*Δ + noise (mod Q)`. For a
//! fresh encryption `noise = e*r + e2 + e1*hw(sk)`, and homomorphic addition
//! adds noise terms. Decryption is correct while `|noise| < Δ/2`; past that
//! it returns a wrong plaintext without any error. These helpers let callers
//! watch the margin.

use deoxys_algorithms::modular::{centered_lift, mod_mul, mod_sub};
use deoxys_api::Result;
use deoxys_params::lwe::{NOISE_BOUND, R_BOUND};
use deoxys_params::LweParams;

use crate::decrypt::noisy_plaintext;
use crate::encrypt::check_plaintext;
use crate::keys::{Ciphertext, SecretKey};

/// Measured noise of a ciphertext against its expected plaintext
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoiseReport {
    /// Signed noise, centered into `(-Q/2, Q/2]`
    pub noise: i64,
    /// The decryption budget `Δ/2`
    pub budget: u64,
}

impl NoiseReport {
    /// `|noise|`
    pub fn magnitude(&self) -> u64 {
        self.noise.unsigned_abs()
    }

    /// Whether the ciphertext still decrypts to the expected plaintext
    pub fn is_within_budget(&self) -> bool {
        self.magnitude() < self.budget
    }

    /// How much more noise fits before decryption breaks
    pub fn remaining(&self) -> u64 {
        self.budget.saturating_sub(self.magnitude())
    }
}

/// Measure the noise in `ct` assuming it encrypts `expected`
pub fn measure<P: LweParams>(
    sk: &SecretKey,
    ct: &Ciphertext,
    expected: u64,
) -> Result<NoiseReport> {
    check_plaintext::<P>(expected)?;
    let noisy = noisy_plaintext::<P>(sk, ct)?;
    let offset = mod_sub(noisy, mod_mul(expected, P::DELTA, P::Q), P::Q);
    let report = NoiseReport {
        noise: centered_lift(offset, P::Q),
        budget: P::parameter_set().noise_budget(),
    };
    tracing::debug!(
        scheme = P::NAME,
        magnitude = report.magnitude(),
        budget = report.budget,
        "measured ciphertext noise"
    );
    Ok(report)
}

/// Worst-case `|noise|` of a fresh encryption under `sk`
pub fn fresh_noise_bound(sk: &SecretKey) -> u64 {
    let e = NOISE_BOUND as u64;
    e * (R_BOUND - 1) + e + e * sk.hamming_weight()
}

/// How many fresh ciphertexts under `sk` can be summed before the
/// worst-case noise reaches the budget of `P`
pub fn additions_within_budget<P: LweParams>(sk: &SecretKey) -> u64 {
    let budget = P::parameter_set().noise_budget();
    (budget - 1) / fresh_noise_bound(sk)
}
