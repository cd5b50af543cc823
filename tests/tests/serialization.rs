//! Byte and serde encodings of keys and ciphertexts

use deoxys::prelude::*;
use deoxys_tests::{frozen_keypair, Toy};

#[test]
fn byte_encodings_survive_a_round_trip() {
    let (pk, sk) = frozen_keypair();
    let ct = Deoxys::encrypt(pk, 512).unwrap();

    let pk2 = <PublicKey as Serialize>::from_bytes(&pk.to_bytes()).unwrap();
    let sk2 = <SecretKey as SerializeSecret>::from_bytes(&sk.to_bytes_zeroizing()).unwrap();
    let ct2 = <Ciphertext as Serialize>::from_bytes(&ct.to_bytes()).unwrap();

    assert_eq!(Deoxys::encrypt(&pk2, 512).unwrap(), ct);
    assert_eq!(Deoxys::decrypt(&sk2, &ct2).unwrap(), 512);
}

#[test]
fn decoded_values_are_checked_against_the_parameters() {
    let (pk, sk) = frozen_keypair();
    let ct = Deoxys::encrypt(pk, 1).unwrap();

    // A well-formed encoding with the wrong dimension for this scheme.
    let toy_ct = <Ciphertext as Serialize>::from_bytes(&ct.to_bytes()[..33 * 8]).unwrap();
    assert!(matches!(
        Deoxys::decrypt(sk, &toy_ct),
        Err(Error::InvalidLength { .. })
    ));

    let (_, toy_sk) = Toy::keypair_from_seed(FROZEN_SEED).unwrap();
    assert!(Toy::decrypt(&toy_sk, &ct).is_err());
}

#[test]
fn serde_uses_field_names() {
    let ct = Ciphertext::from_parts(vec![10, 20], 30);
    let json = serde_json::to_string(&ct).unwrap();
    assert_eq!(json, r#"{"u":[10,20],"v":30}"#);
    let back: Ciphertext = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ct);

    let pk = PublicKey::from_parts(vec![1], 2);
    assert_eq!(serde_json::to_string(&pk).unwrap(), r#"{"a":[1],"b":2}"#);
}

#[test]
fn secret_key_debug_is_redacted() {
    let (_, sk) = frozen_keypair();
    assert_eq!(format!("{:?}", sk), "SecretKey([REDACTED]; n=1024)");
}
