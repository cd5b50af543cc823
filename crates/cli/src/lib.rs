//! Command line boundary for the deoxys library
//!
//! Plaintexts come in as integers, ciphertexts and keys go out as base64
//! JSON blobs (see [`transport`]).

pub mod runner;
pub mod transport;

pub use runner::{run, Action, Args, DEFAULT_SEED};
