//! Additive-homomorphic LWE encryption for the deoxys library
//!
//! Keys are derived deterministically from a seed, plaintexts are integers in
//! `[0, T)`, and ciphertexts can be added without the secret key. The free
//! functions in each module are generic over an [`LweParams`] set; [`Lwe`]
//! wraps them behind the [`deoxys_api`] scheme traits.
//!
//! Decryption does not detect noise overflow. See [`noise`] for how much
//! headroom a ciphertext has left.
//!
//! [`LweParams`]: deoxys_params::LweParams

#![forbid(unsafe_code)]

pub mod chain;
pub mod decrypt;
pub mod encrypt;
pub mod homomorphic;
pub mod keygen;
pub mod keys;
pub mod noise;
mod scheme;

pub use chain::{render, LayeredChain, DEFAULT_DEPTH};
pub use keys::{Ciphertext, KeyPair, PublicKey, SecretKey};
pub use noise::NoiseReport;
pub use scheme::{Deoxys, Lwe};
