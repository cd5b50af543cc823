//! Validation utilities for primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that every value is a canonical residue below `modulus`
pub fn residues(name: &'static str, values: &[u64], modulus: u64) -> Result<()> {
    match values.iter().position(|&x| x >= modulus) {
        Some(index) => Err(Error::param(
            name,
            format!(
                "entry {} is {}, not below modulus {}",
                index, values[index], modulus
            ),
        )),
        None => Ok(()),
    }
}

/// Validate that a single value is a canonical residue below `modulus`
pub fn residue(name: &'static str, value: u64, modulus: u64) -> Result<()> {
    if value >= modulus {
        return Err(Error::param(
            name,
            format!("scalar is {}, not below modulus {}", value, modulus),
        ));
    }
    Ok(())
}

/// Validate that every entry is 0 or 1
pub fn bits(name: &'static str, values: &[u8]) -> Result<()> {
    match values.iter().position(|&b| b > 1) {
        Some(index) => Err(Error::param(
            name,
            format!("entry {} is {}, expected 0 or 1", index, values[index]),
        )),
        None => Ok(()),
    }
}
