//! Trait definitions for homomorphic schemes and their serializable types

pub mod scheme;
pub mod serialize;

pub use scheme::{AdditiveHomomorphic, HomomorphicScheme};
pub use serialize::{Serialize, SerializeSecret};
