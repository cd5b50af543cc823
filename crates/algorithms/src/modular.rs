//! Modular arithmetic over the ciphertext modulus
//!
//! Residues are canonical `u64` values in `[0, m)`. Products go through
//! `u128`, so any modulus below 2^63 is supported, power of two or not.

use crate::error::{validate, Result};

/// Perform modular addition: (a + b) mod m
#[inline]
pub fn mod_add(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

/// Perform modular subtraction: (a - b) mod m
#[inline]
pub fn mod_sub(a: u64, b: u64, m: u64) -> u64 {
    mod_add(a % m, m - (b % m), m)
}

/// Perform modular negation: (-a) mod m
#[inline]
pub fn mod_neg(a: u64, m: u64) -> u64 {
    mod_sub(0, a, m)
}

/// Perform modular multiplication: (a * b) mod m
#[inline]
pub fn mod_mul(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}

/// Map a signed value to its canonical residue mod m
#[inline]
pub fn reduce_signed(x: i64, m: u64) -> u64 {
    (x as i128).rem_euclid(m as i128) as u64
}

/// Lift a residue to its centered representative in `(-m/2, m/2]`
#[inline]
pub fn centered_lift(x: u64, m: u64) -> i64 {
    let x = x % m;
    if x > m / 2 {
        -((m - x) as i64)
    } else {
        x as i64
    }
}

/// Round `x / delta` to the nearest integer, then reduce mod `t`.
///
/// Exact ties round to the even neighbour.
#[inline]
pub fn round_scale(x: u64, delta: u64, t: u64) -> u64 {
    let quotient = x / delta;
    let twice_rem = 2 * (x % delta) as u128;
    let rounded = match twice_rem.cmp(&(delta as u128)) {
        core::cmp::Ordering::Less => quotient,
        core::cmp::Ordering::Greater => quotient + 1,
        core::cmp::Ordering::Equal => quotient + (quotient & 1),
    };
    rounded % t
}

/// Inner product of a residue vector with a 0/1 vector, reduced mod m
pub fn inner_product_bits(values: &[u64], bits: &[u8], m: u64) -> Result<u64> {
    validate::length("inner product", bits.len(), values.len())?;
    let sum = values
        .iter()
        .zip(bits)
        .filter(|&(_, &bit)| bit == 1)
        .fold(0u128, |acc, (&value, _)| (acc + value as u128) % m as u128);
    Ok(sum as u64)
}

/// Elementwise `a * scalar + offset (mod m)`
pub fn scale_and_shift(values: &[u64], scalar: u64, offset: i64, m: u64) -> Vec<u64> {
    let offset = reduce_signed(offset, m);
    values
        .iter()
        .map(|&value| mod_add(mod_mul(value, scalar, m), offset, m))
        .collect()
}

/// Elementwise `(a + b) mod m`
pub fn vec_add(a: &[u64], b: &[u64], m: u64) -> Result<Vec<u64>> {
    validate::length("vector addition", b.len(), a.len())?;
    Ok(a.iter().zip(b).map(|(&x, &y)| mod_add(x, y, m)).collect())
}
