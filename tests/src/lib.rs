//! Shared fixtures for the deoxys integration tests

use std::sync::OnceLock;

use deoxys::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// Small parameters that overflow the noise budget after a few hundred
/// additions: Q = 2^20, T = 2^4, N = 32
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToyParams;

impl LweParams for ToyParams {
    const NAME: &'static str = "Toy-LWE-32";
    const Q: u64 = 1 << 20;
    const T: u64 = 1 << 4;
    const N: usize = 32;
}

/// The scheme over [`ToyParams`]
pub type Toy = Lwe<ToyParams>;

/// Key pair derived from the frozen seed, computed once per test binary
pub fn frozen_keypair() -> &'static (PublicKey, SecretKey) {
    static KEYS: OnceLock<(PublicKey, SecretKey)> = OnceLock::new();
    KEYS.get_or_init(|| Deoxys::keypair_from_seed(FROZEN_SEED).expect("frozen keygen"))
}

/// Deterministic RNG for randomized operations
pub fn rng() -> ChaChaRng {
    ChaChaRng::seed_from_u64(42)
}
