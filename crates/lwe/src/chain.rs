//! Layered encryption chain
//!
//! Round one encrypts the message. Every later round encrypts a digest of
//! the previous ciphertext reduced mod T, so the result depends on every
//! earlier layer. The chain is a one-way commitment: decryption peels
//! only the last layer, which yields the digest fed into the final round, not
//! the original message.

use core::fmt::Write;
use core::marker::PhantomData;

use deoxys_algorithms::entropy::prefix_word;
use deoxys_api::Result;
use deoxys_params::LweParams;

use crate::decrypt::decrypt;
use crate::encrypt::encrypt;
use crate::keys::{Ciphertext, PublicKey, SecretKey};

/// Depth used by the command line surface
pub const DEFAULT_DEPTH: usize = 3;

/// Canonical text form of a ciphertext: `([u0, u1, ...], v)`
pub fn render(ct: &Ciphertext) -> String {
    // Twenty digits per residue plus separators.
    let mut out = String::with_capacity(22 * (ct.dimension() + 1) + 4);
    out.push_str("([");
    for (i, value) in ct.u().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "{}", value);
    }
    let _ = write!(out, "], {})", ct.v());
    out
}

/// Recursive encryption over a fixed parameter set
pub struct LayeredChain<P: LweParams> {
    _params: PhantomData<P>,
}

impl<P: LweParams> LayeredChain<P> {
    /// `BE32(SHA256(render(ct))[..4]) mod T`
    pub fn layer_digest(ct: &Ciphertext) -> u64 {
        u64::from(prefix_word(render(ct).as_bytes())) % P::T
    }

    /// Encrypt `message`, then re-encrypt the digest of each result until
    /// `depth` rounds have run. A depth of zero runs a single round.
    pub fn recursive_encrypt(pk: &PublicKey, message: u64, depth: usize) -> Result<Ciphertext> {
        let rounds = depth.max(1);
        let mut ct = encrypt::<P>(pk, message)?;
        for round in 1..rounds {
            let digest = Self::layer_digest(&ct);
            tracing::trace!(round, "encrypting layer digest");
            ct = encrypt::<P>(pk, digest)?;
        }
        tracing::debug!(scheme = P::NAME, depth, rounds, "built layered ciphertext");
        Ok(ct)
    }

    /// Decrypt the outermost layer only.
    ///
    /// For `depth > 1` this returns the digest encrypted in the last round,
    /// not the original message. `depth` does not change the result.
    pub fn recursive_decrypt(sk: &SecretKey, ct: &Ciphertext, depth: usize) -> Result<u64> {
        tracing::debug!(scheme = P::NAME, depth, "decrypting outermost layer");
        decrypt::<P>(sk, ct)
    }
}
