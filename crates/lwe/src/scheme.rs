//! Scheme type implementing the API traits

use core::marker::PhantomData;

use deoxys_api::error::{CipherResult, KeyResult};
use deoxys_api::{AdditiveHomomorphic, HomomorphicScheme, Result};
use deoxys_params::{Deoxys1024Params, LweParams};
use rand::{CryptoRng, RngCore};

use crate::keys::{Ciphertext, KeyPair, PublicKey, SecretKey};
use crate::{decrypt, encrypt, homomorphic, keygen};

/// Additive-homomorphic LWE over the parameter set `P`
pub struct Lwe<P: LweParams> {
    _params: PhantomData<P>,
}

/// LWE with the Deoxys-1024 parameters
pub type Deoxys = Lwe<Deoxys1024Params>;

impl<P: LweParams> HomomorphicScheme for Lwe<P> {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type Ciphertext = Ciphertext;

    fn name() -> &'static str {
        P::NAME
    }

    fn plaintext_modulus() -> u64 {
        P::T
    }

    fn keypair_from_seed(seed: &[u8]) -> KeyResult<(Self::PublicKey, Self::SecretKey)> {
        keygen::keygen::<P>(seed).map(KeyPair::into_parts)
    }

    fn keypair<R: CryptoRng + RngCore>(
        rng: &mut R,
    ) -> KeyResult<(Self::PublicKey, Self::SecretKey)> {
        keygen::keygen_with_rng::<P, R>(rng).map(KeyPair::into_parts)
    }

    fn encrypt(public_key: &Self::PublicKey, plaintext: u64) -> CipherResult<Self::Ciphertext> {
        encrypt::encrypt::<P>(public_key, plaintext)
    }

    fn encrypt_with_rng<R: CryptoRng + RngCore>(
        public_key: &Self::PublicKey,
        plaintext: u64,
        rng: &mut R,
    ) -> CipherResult<Self::Ciphertext> {
        encrypt::encrypt_with_rng::<P, R>(public_key, plaintext, rng)
    }

    fn decrypt(secret_key: &Self::SecretKey, ciphertext: &Self::Ciphertext) -> Result<u64> {
        decrypt::decrypt::<P>(secret_key, ciphertext)
    }
}

impl<P: LweParams> AdditiveHomomorphic for Lwe<P> {
    fn add(lhs: &Self::Ciphertext, rhs: &Self::Ciphertext) -> CipherResult<Self::Ciphertext> {
        homomorphic::add::<P>(lhs, rhs)
    }
}
