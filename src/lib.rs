//! # deoxys
//!
//! An additive-homomorphic LWE encryption engine: encrypt a small integer,
//! add ciphertexts without decrypting, decrypt the sum.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! deoxys = "0.3"
//! ```
//!
//! ```
//! use deoxys::prelude::*;
//!
//! let (pk, sk) = Deoxys::keypair_from_seed(FROZEN_SEED).unwrap();
//! let a = Deoxys::encrypt(&pk, 40).unwrap();
//! let b = Deoxys::encrypt(&pk, 2).unwrap();
//! let sum = Deoxys::add(&a, &b).unwrap();
//! assert_eq!(Deoxys::decrypt(&sk, &sum).unwrap(), 42);
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `rand`: re-export `rand` for randomized key generation and encryption
//! - `serde`: serde support for public keys and ciphertexts
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`deoxys-api`]: Error types and scheme traits
//! - [`deoxys-params`]: Parameter sets
//! - [`deoxys-algorithms`]: Deterministic entropy and modular arithmetic
//! - [`deoxys-lwe`]: Key generation, encryption, homomorphic addition, layered chains

// Core re-exports (always available)
pub use deoxys_algorithms as algorithms;
pub use deoxys_api as api;
pub use deoxys_lwe as lwe;
pub use deoxys_params as params;

#[cfg(feature = "rand")]
pub use rand;

/// Common imports for deoxys users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{AdditiveHomomorphic, HomomorphicScheme, Serialize, SerializeSecret};

    // Re-export parameter sets
    pub use crate::params::{Deoxys1024Params, LweParams, FROZEN_SEED};

    // Re-export scheme types
    pub use crate::lwe::{Ciphertext, Deoxys, KeyPair, LayeredChain, Lwe, PublicKey, SecretKey};
}
