//! Public API traits and types for the deoxys library
//!
//! This crate provides the public API surface for the deoxys workspace: the
//! error taxonomy shared by every layer and the traits that homomorphic
//! schemes and their key/ciphertext types implement.

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};

// Re-export all traits from the traits module
pub use traits::{AdditiveHomomorphic, HomomorphicScheme, Serialize, SerializeSecret};

// Re-export trait modules for direct access
pub use traits::{scheme, serialize};
