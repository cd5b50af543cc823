//! Derivation and arithmetic primitives for the deoxys library
//!
//! This crate provides the pieces every lattice operation is built from:
//!
//! - [`entropy`]: SHA-256 based, label-separated deterministic derivation
//! - [`modular`]: canonical residue arithmetic, rounding and inner products
//! - [`error`]: the primitives error type and validation helpers

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

pub mod entropy;
pub use entropy::{message_error, message_sample, message_word, DeterministicEntropy};

pub mod modular;
