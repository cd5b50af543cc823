//! Correctness, determinism and homomorphism of the default scheme

use deoxys::prelude::*;
use deoxys_tests::{frozen_keypair, rng};
use proptest::prelude::*;

const T: u64 = 1 << 16;

#[test]
fn concrete_scenario() {
    let (pk, sk) = Deoxys::keypair_from_seed(FROZEN_SEED).unwrap();
    let ct = Deoxys::encrypt(&pk, 42).unwrap();
    assert_eq!(Deoxys::decrypt(&sk, &ct).unwrap(), 42);
}

#[test]
fn wraparound() {
    let (pk, sk) = frozen_keypair();
    let sum = Deoxys::add(
        &Deoxys::encrypt(pk, T - 1).unwrap(),
        &Deoxys::encrypt(pk, 1).unwrap(),
    )
    .unwrap();
    assert_eq!(Deoxys::decrypt(sk, &sum).unwrap(), 0);
}

#[test]
fn range_enforcement() {
    let (pk, _) = frozen_keypair();
    for m in [T, T + 5, u64::MAX] {
        let err = Deoxys::encrypt(pk, m).unwrap_err();
        assert!(err.is_range_error(), "{} should be rejected", m);
        assert_eq!(err.to_string(), format!("plaintext {} exceeds modulus {}", m, T));
    }
    assert!(Deoxys::encrypt(pk, T - 1).is_ok());

    let mut rng = rng();
    assert!(Deoxys::encrypt_with_rng(pk, T, &mut rng)
        .unwrap_err()
        .is_range_error());
}

#[test]
fn keys_from_different_seeds_do_not_interoperate() {
    let (pk, _) = frozen_keypair();
    let (_, other_sk) = Deoxys::keypair_from_seed(b"a different seed").unwrap();
    let ct = Deoxys::encrypt(pk, 42).unwrap();
    assert_ne!(Deoxys::decrypt(&other_sk, &ct).unwrap(), 42);
}

proptest! {
    #[test]
    fn decrypt_inverts_encrypt(m in 0..T) {
        let (pk, sk) = frozen_keypair();
        let ct = Deoxys::encrypt(pk, m).unwrap();
        prop_assert_eq!(Deoxys::decrypt(sk, &ct).unwrap(), m);
    }

    #[test]
    fn encrypt_is_deterministic(m in 0..T) {
        let (pk, _) = frozen_keypair();
        prop_assert_eq!(Deoxys::encrypt(pk, m).unwrap(), Deoxys::encrypt(pk, m).unwrap());
    }

    #[test]
    fn addition_is_homomorphic(m1 in 0..T, m2 in 0..T) {
        let (pk, sk) = frozen_keypair();
        let sum = Deoxys::add(
            &Deoxys::encrypt(pk, m1).unwrap(),
            &Deoxys::encrypt(pk, m2).unwrap(),
        )
        .unwrap();
        prop_assert_eq!(Deoxys::decrypt(sk, &sum).unwrap(), (m1 + m2) % T);
    }

    #[test]
    fn randomized_encryption_decrypts(m in 0..T, seed in any::<u64>()) {
        use rand::SeedableRng;
        let (pk, sk) = frozen_keypair();
        let mut rng = rand_chacha::ChaChaRng::seed_from_u64(seed);
        let ct = Deoxys::encrypt_with_rng(pk, m, &mut rng).unwrap();
        prop_assert_eq!(Deoxys::decrypt(sk, &ct).unwrap(), m);
    }

    #[test]
    fn any_seed_yields_working_keys(seed in prop::collection::vec(any::<u8>(), 1..48), m in 0..T) {
        let (pk, sk) = Deoxys::keypair_from_seed(&seed).unwrap();
        let ct = Deoxys::encrypt(&pk, m).unwrap();
        prop_assert_eq!(Deoxys::decrypt(&sk, &ct).unwrap(), m);
    }
}
