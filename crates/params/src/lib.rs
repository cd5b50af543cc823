//! Parameter sets and constant values for the deoxys library
//!
//! Everything here is plain data: modulus and dimension choices, the
//! domain-separation labels used during derivation, and hash sizes.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod lwe;
pub mod utils;

pub use lwe::{
    Deoxys1024Params, LweParameterSet, LweParams, DEOXYS_1024, FROZEN_SEED,
};
