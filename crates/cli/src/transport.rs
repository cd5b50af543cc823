//! JSON + base64 wire formats
//!
//! - ciphertext: `{"u": [..], "v": n}`
//! - keys: `{"pk": [[..A..], b], "sk": [..bits..]}`
//!
//! Both are JSON documents wrapped in standard padded base64.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use deoxys_api::SerializeSecret;
use deoxys_lwe::{Ciphertext, PublicKey, SecretKey};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

/// Ciphertext document
#[derive(Debug, Serialize, Deserialize)]
pub struct CiphertextWire {
    pub u: Vec<u64>,
    pub v: u64,
}

/// Key document. `pk` is the pair `[A, b]`.
#[derive(Serialize, Deserialize)]
pub struct KeysWire {
    pub pk: (Vec<u64>, u64),
    pub sk: Vec<u8>,
}

/// Output of the encrypt action
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct EncryptOutput {
    pub ciphertext: String,
    pub keys: String,
}

fn to_blob<T: Serialize>(document: &T) -> Result<String> {
    let json = serde_json::to_vec(document).wrap_err("failed to encode JSON")?;
    Ok(STANDARD.encode(json))
}

fn from_blob<T: for<'de> Deserialize<'de>>(blob: &str, what: &str) -> Result<T> {
    let json = Zeroizing::new(
        STANDARD
            .decode(blob.trim())
            .wrap_err_with(|| format!("{} is not valid base64", what))?,
    );
    serde_json::from_slice(&json).wrap_err_with(|| format!("{} is not a valid JSON document", what))
}

/// Encode a ciphertext for transport
pub fn encode_ciphertext(ct: &Ciphertext) -> Result<String> {
    to_blob(&CiphertextWire {
        u: ct.u().to_vec(),
        v: ct.v(),
    })
}

/// Decode a ciphertext blob. Shape and range are checked when it is used.
pub fn decode_ciphertext(blob: &str) -> Result<Ciphertext> {
    let wire: CiphertextWire = from_blob(blob, "ciphertext")?;
    Ok(Ciphertext::from_parts(wire.u, wire.v))
}

/// Encode a key pair for transport
pub fn encode_keys(pk: &PublicKey, sk: &SecretKey) -> Result<String> {
    let bits = sk.to_bytes_zeroizing();
    let wire = KeysWire {
        pk: (pk.a().to_vec(), pk.b()),
        sk: bits.to_vec(),
    };
    let blob = to_blob(&wire);
    drop(Zeroizing::new(wire.sk));
    blob
}

/// Decode a key blob, rejecting secret entries other than 0 and 1
pub fn decode_keys(blob: &str) -> Result<(PublicKey, SecretKey)> {
    let wire: KeysWire = from_blob(blob, "keys")?;
    let bits = Zeroizing::new(wire.sk);
    let sk = SecretKey::from_bits(&bits).wrap_err("keys contain an invalid secret key")?;
    let (a, b) = wire.pk;
    Ok((PublicKey::from_parts(a, b), sk))
}
