//! Layered encryption chain behavior

use deoxys::lwe::{render, DEFAULT_DEPTH};
use deoxys::prelude::*;
use deoxys_tests::frozen_keypair;
use proptest::prelude::*;

type Chain = LayeredChain<Deoxys1024Params>;

#[test]
fn outer_layer_holds_the_previous_digest() {
    let (pk, sk) = frozen_keypair();
    let first = Deoxys::encrypt(pk, 42).unwrap();
    let digest = Chain::layer_digest(&first);
    assert_eq!(digest, 24975);

    let layered = Chain::recursive_encrypt(pk, 42, 2).unwrap();
    assert_eq!(layered, Deoxys::encrypt(pk, digest).unwrap());
    assert_eq!(Chain::recursive_decrypt(sk, &layered, 2).unwrap(), digest);
}

#[test]
fn default_depth_does_not_recover_the_message() {
    let (pk, sk) = frozen_keypair();
    let layered = Chain::recursive_encrypt(pk, 42, DEFAULT_DEPTH).unwrap();
    let recovered = Chain::recursive_decrypt(sk, &layered, DEFAULT_DEPTH).unwrap();
    assert_eq!(recovered, 62715);
    assert_ne!(recovered, 42);
}

#[test]
fn depth_zero_runs_one_round() {
    let (pk, sk) = frozen_keypair();
    let layered = Chain::recursive_encrypt(pk, 9, 0).unwrap();
    assert_eq!(Chain::recursive_decrypt(sk, &layered, 0).unwrap(), 9);
}

#[test]
fn digest_reads_the_rendered_text() {
    let ct = Ciphertext::from_parts(vec![0, 1], 2);
    assert_eq!(render(&ct), "([0, 1], 2)");
    assert!(Chain::layer_digest(&ct) < 1 << 16);
}

proptest! {
    #[test]
    fn depth_one_matches_plain_encryption(m in 0u64..1 << 16) {
        let (pk, sk) = frozen_keypair();
        let layered = Chain::recursive_encrypt(pk, m, 1).unwrap();
        prop_assert_eq!(&layered, &Deoxys::encrypt(pk, m).unwrap());
        prop_assert_eq!(Chain::recursive_decrypt(sk, &layered, 1).unwrap(), m);
    }

    #[test]
    fn deeper_chains_decrypt_to_a_plaintext(m in 0u64..1 << 16, depth in 2usize..5) {
        let (pk, sk) = frozen_keypair();
        let layered = Chain::recursive_encrypt(pk, m, depth).unwrap();
        prop_assert!(Chain::recursive_decrypt(sk, &layered, depth).unwrap() < 1 << 16);
    }
}
