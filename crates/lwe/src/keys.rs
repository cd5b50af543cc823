//! Key and ciphertext types
//!
//! All three types are plain containers. Shape and range checks against a
//! parameter set happen when a value is handed to an operation, so a value
//! decoded from bytes or from a wire format is never trusted blindly.

use core::fmt;

use deoxys_algorithms::validate;
use deoxys_api::{Error, Result, Serialize, SerializeSecret};
use deoxys_params::LweParams;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

const WORD: usize = core::mem::size_of::<u64>();

/// LWE public key `(A, b)` with `b = -<A, sk> + e (mod Q)`
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PublicKey {
    a: Vec<u64>,
    b: u64,
}

impl PublicKey {
    /// Assemble a public key from its parts. Checked on use.
    pub fn from_parts(a: Vec<u64>, b: u64) -> Self {
        Self { a, b }
    }

    /// The public vector A
    pub fn a(&self) -> &[u64] {
        &self.a
    }

    /// The public scalar b
    pub fn b(&self) -> u64 {
        self.b
    }

    /// Lattice dimension of this key
    pub fn dimension(&self) -> usize {
        self.a.len()
    }

    pub(crate) fn check<P: LweParams>(&self) -> Result<()> {
        validate::length("public key", self.a.len(), P::N)?;
        validate::residues("public key", &self.a, P::Q)
            .and_then(|()| validate::residue("public key", self.b, P::Q))
            .map_err(|e| Error::InvalidKey {
                context: "public key",
                message: e.to_string(),
            })
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicKey")
            .field("dimension", &self.a.len())
            .field("b", &self.b)
            .finish()
    }
}

/// Secret key: one 0/1 entry per lattice dimension
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bits: Vec<u8>,
}

impl SecretKey {
    pub(crate) fn new(bits: Vec<u8>) -> Self {
        Self { bits }
    }

    /// Assemble a secret key from its bits, rejecting anything but 0 and 1
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        validate::bits("secret key", bits).map_err(|e| Error::InvalidKey {
            context: "secret key",
            message: e.to_string(),
        })?;
        Ok(Self::new(bits.to_vec()))
    }

    pub(crate) fn bits(&self) -> &[u8] {
        &self.bits
    }

    /// Lattice dimension of this key
    pub fn dimension(&self) -> usize {
        self.bits.len()
    }

    /// Number of set bits
    pub(crate) fn hamming_weight(&self) -> u64 {
        self.bits.iter().map(|&bit| u64::from(bit)).sum()
    }

    pub(crate) fn check<P: LweParams>(&self) -> Result<()> {
        validate::length("secret key", self.bits.len(), P::N)?;
        Ok(())
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey([REDACTED]; n={})", self.bits.len())
    }
}

impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        self.bits.as_slice().ct_eq(other.bits.as_slice())
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for SecretKey {}

/// A matched public and secret key
#[derive(Clone, Debug)]
pub struct KeyPair {
    public: PublicKey,
    secret: SecretKey,
}

impl KeyPair {
    pub(crate) fn new(public: PublicKey, secret: SecretKey) -> Self {
        Self { public, secret }
    }

    /// The public half
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// The secret half
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    /// Split into `(public, secret)`
    pub fn into_parts(self) -> (PublicKey, SecretKey) {
        (self.public, self.secret)
    }
}

/// LWE ciphertext `(u, v)`
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ciphertext {
    u: Vec<u64>,
    v: u64,
}

impl Ciphertext {
    /// Assemble a ciphertext from its parts. Checked on use.
    pub fn from_parts(u: Vec<u64>, v: u64) -> Self {
        Self { u, v }
    }

    /// The vector component
    pub fn u(&self) -> &[u64] {
        &self.u
    }

    /// The scalar component
    pub fn v(&self) -> u64 {
        self.v
    }

    /// Lattice dimension of this ciphertext
    pub fn dimension(&self) -> usize {
        self.u.len()
    }

    pub(crate) fn check<P: LweParams>(&self) -> Result<()> {
        validate::length("ciphertext", self.u.len(), P::N)?;
        validate::residues("ciphertext", &self.u, P::Q)
            .and_then(|()| validate::residue("ciphertext", self.v, P::Q))
            .map_err(|e| Error::InvalidCiphertext {
                context: "ciphertext",
                message: e.to_string(),
            })
    }
}

impl fmt::Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ciphertext")
            .field("dimension", &self.u.len())
            .field("v", &self.v)
            .finish()
    }
}

fn encode_words(vector: &[u64], scalar: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity((vector.len() + 1) * WORD);
    for word in vector.iter().chain(core::iter::once(&scalar)) {
        out.extend_from_slice(&word.to_be_bytes());
    }
    out
}

/// Split big-endian words into `(vector, trailing scalar)`
fn decode_words(context: &'static str, bytes: &[u8]) -> Result<(Vec<u64>, u64)> {
    if bytes.len() < 2 * WORD || bytes.len() % WORD != 0 {
        return Err(Error::SerializationError {
            context,
            message: format!(
                "expected a multiple of {} bytes holding at least two words, got {}",
                WORD,
                bytes.len()
            ),
        });
    }
    let mut words = bytes
        .chunks_exact(WORD)
        .map(|chunk| <[u8; WORD]>::try_from(chunk).map(u64::from_be_bytes))
        .collect::<core::result::Result<Vec<u64>, _>>()?;
    let scalar = words.pop().ok_or_else(|| Error::SerializationError {
        context,
        message: "missing trailing word".into(),
    })?;
    Ok((words, scalar))
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (a, b) = decode_words("public key", bytes)?;
        Ok(Self::from_parts(a, b))
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_words(&self.a, self.b)
    }
}

impl Serialize for Ciphertext {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let (u, v) = decode_words("ciphertext", bytes)?;
        Ok(Self::from_parts(u, v))
    }

    fn to_bytes(&self) -> Vec<u8> {
        encode_words(&self.u, self.v)
    }
}

impl SerializeSecret for SecretKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.is_empty() {
            return Err(Error::SerializationError {
                context: "secret key",
                message: "no key bits".into(),
            });
        }
        Self::from_bits(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.bits.clone())
    }
}
