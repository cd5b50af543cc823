//! Constant values shared by the deoxys derivation routines

pub mod hash;
