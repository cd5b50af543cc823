//! Noise growth and silent decryption failure

use deoxys::lwe::{homomorphic, noise};
use deoxys::prelude::*;
use deoxys_tests::{frozen_keypair, rng, Toy, ToyParams};
use proptest::prelude::*;

#[test]
fn toy_sum_degrades_silently_past_the_budget() {
    let (pk, sk) = Toy::keypair_from_seed(FROZEN_SEED).unwrap();
    let one = Toy::encrypt(&pk, 1).unwrap();

    let mut acc = one.clone();
    for k in 2..=206u64 {
        acc = Toy::add(&acc, &one).unwrap();
        assert_eq!(Toy::decrypt(&sk, &acc).unwrap(), k % 16, "k = {}", k);
    }
    assert!(noise::measure::<ToyParams>(&sk, &acc, 206 % 16)
        .unwrap()
        .is_within_budget());

    acc = Toy::add(&acc, &one).unwrap();
    assert_eq!(Toy::decrypt(&sk, &acc).unwrap(), 0);
    assert!(!noise::measure::<ToyParams>(&sk, &acc, 207 % 16)
        .unwrap()
        .is_within_budget());
}

#[test]
fn worst_case_sum_stays_correct() {
    let (pk, sk) = Toy::keypair_from_seed(FROZEN_SEED).unwrap();
    let budgeted = noise::additions_within_budget::<ToyParams>(&sk) as usize;
    let mut rng = rng();
    let cts: Vec<Ciphertext> = (0..budgeted)
        .map(|_| Toy::encrypt_with_rng(&pk, 3, &mut rng).unwrap())
        .collect();
    let total = homomorphic::sum::<ToyParams, _>(&cts).unwrap();
    assert_eq!(
        Toy::decrypt(&sk, &total).unwrap(),
        (3 * budgeted as u64) % 16
    );
}

#[test]
fn measured_noise_matches_the_analytic_value() {
    let (pk, sk) = frozen_keypair();
    let ct = Deoxys::encrypt(pk, 42).unwrap();
    let report = noise::measure::<Deoxys1024Params>(sk, &ct, 42).unwrap();
    // e*r + e2 + e1*hw = 2*75 + 4 + 4*384
    assert_eq!(report.noise, 1690);
    assert_eq!(report.budget, 1 << 43);
}

proptest! {
    #[test]
    fn fresh_noise_stays_under_the_bound(m in 0u64..1 << 16, seed in any::<u64>()) {
        use rand::SeedableRng;
        let (pk, sk) = frozen_keypair();
        let bound = noise::fresh_noise_bound(sk);

        let deterministic = Deoxys::encrypt(pk, m).unwrap();
        let report = noise::measure::<Deoxys1024Params>(sk, &deterministic, m).unwrap();
        prop_assert!(report.magnitude() <= bound);

        let mut rng = rand_chacha::ChaChaRng::seed_from_u64(seed);
        let randomized = Deoxys::encrypt_with_rng(pk, m, &mut rng).unwrap();
        let report = noise::measure::<Deoxys1024Params>(sk, &randomized, m).unwrap();
        prop_assert!(report.magnitude() <= bound);
    }
}
