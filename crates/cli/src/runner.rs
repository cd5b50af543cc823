//! Argument parsing and action dispatch

use clap::{ArgAction, Parser, ValueEnum};
use deoxys_api::HomomorphicScheme;
use deoxys_lwe::Deoxys;
use eyre::{bail, eyre, Result, WrapErr};
use tracing::{debug, info};

use crate::transport::{self, EncryptOutput};

/// Seed used when `--seed` is not given
pub const DEFAULT_SEED: &str = "AxiomHive_Frozen_Seed_v1.0";

/// Operation selected with `--action`
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Action {
    Encrypt,
    Decrypt,
}

#[derive(Parser, Debug)]
#[command(name = "deoxys")]
#[command(about = "Encrypt and decrypt integers with the Deoxys LWE scheme")]
#[command(version)]
pub struct Args {
    /// Operation to run
    #[arg(long, value_enum)]
    pub action: Action,

    /// Plaintext to encrypt, in [0, 65536)
    #[arg(long, allow_negative_numbers = true)]
    pub message: Option<i64>,

    /// Base64 ciphertext blob to decrypt
    #[arg(long)]
    pub ciphertext: Option<String>,

    /// Base64 key blob produced by the encrypt action
    #[arg(long)]
    pub keys: Option<String>,

    /// Key derivation seed
    #[arg(long, default_value = DEFAULT_SEED)]
    pub seed: String,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// The one-line message for a clap parse failure, without clap's prefix
pub fn parse_error_message(err: &clap::Error) -> String {
    let rendered = err.to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.trim_start_matches("error: ").to_string()
}

/// Run the selected action and return what goes to stdout
pub fn run(args: &Args) -> Result<String> {
    match args.action {
        Action::Encrypt => {
            let message = args
                .message
                .ok_or_else(|| eyre!("--message required for encryption"))?;
            let output = encrypt(args.seed.as_bytes(), message)?;
            serde_json::to_string(&output).wrap_err("failed to encode output")
        }
        Action::Decrypt => {
            let (ciphertext, keys) = match (&args.ciphertext, &args.keys) {
                (Some(ciphertext), Some(keys)) => (ciphertext, keys),
                _ => bail!("--ciphertext and --keys required for decryption"),
            };
            decrypt(ciphertext, keys).map(|m| m.to_string())
        }
    }
}

/// Derive keys from `seed`, encrypt `message`, and package both for transport
pub fn encrypt(seed: &[u8], message: i64) -> Result<EncryptOutput> {
    let message =
        u64::try_from(message).map_err(|_| eyre!("plaintext {} is negative", message))?;
    let (pk, sk) = Deoxys::keypair_from_seed(seed).wrap_err("key generation failed")?;
    info!(scheme = Deoxys::name(), "derived key pair");

    let ct = Deoxys::encrypt(&pk, message)?;
    debug!(dimension = ct.dimension(), "encrypted message");

    Ok(EncryptOutput {
        ciphertext: transport::encode_ciphertext(&ct)?,
        keys: transport::encode_keys(&pk, &sk)?,
    })
}

/// Decrypt a ciphertext blob with the secret key inside a key blob
pub fn decrypt(ciphertext: &str, keys: &str) -> Result<u64> {
    let ct = transport::decode_ciphertext(ciphertext)?;
    let (_, sk) = transport::decode_keys(keys)?;
    let m = Deoxys::decrypt(&sk, &ct)?;
    info!(dimension = ct.dimension(), "decrypted ciphertext");
    Ok(m)
}
