//! Benchmarks for the Deoxys LWE scheme
//!
//! This benchmark suite measures the performance of:
//! - Seeded key generation
//! - Deterministic and randomized encryption
//! - Decryption and homomorphic addition
//! - Layered chain construction

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deoxys_api::{AdditiveHomomorphic, HomomorphicScheme};
use deoxys_lwe::{Deoxys, LayeredChain, DEFAULT_DEPTH};
use deoxys_params::{Deoxys1024Params, FROZEN_SEED};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_keygen(c: &mut Criterion) {
    c.bench_function("deoxys_keygen_from_seed", |b| {
        b.iter(|| Deoxys::keypair_from_seed(black_box(FROZEN_SEED)).expect("keygen failed"))
    });
}

fn bench_encrypt_decrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("deoxys_lwe");
    let (pk, sk) = Deoxys::keypair_from_seed(FROZEN_SEED).expect("keygen failed");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    group.bench_function("encrypt", |b| {
        b.iter(|| Deoxys::encrypt(&pk, black_box(42)).expect("encrypt failed"))
    });

    group.bench_function("encrypt_with_rng", |b| {
        b.iter(|| Deoxys::encrypt_with_rng(&pk, black_box(42), &mut rng).expect("encrypt failed"))
    });

    let ct = Deoxys::encrypt(&pk, 42).expect("encrypt failed");
    group.bench_function("decrypt", |b| {
        b.iter(|| Deoxys::decrypt(&sk, black_box(&ct)).expect("decrypt failed"))
    });

    let other = Deoxys::encrypt(&pk, 7).expect("encrypt failed");
    group.bench_function("add", |b| {
        b.iter(|| Deoxys::add(black_box(&ct), black_box(&other)).expect("add failed"))
    });

    group.finish();
}

fn bench_chain(c: &mut Criterion) {
    let (pk, _) = Deoxys::keypair_from_seed(FROZEN_SEED).expect("keygen failed");
    c.bench_function("deoxys_recursive_encrypt", |b| {
        b.iter(|| {
            LayeredChain::<Deoxys1024Params>::recursive_encrypt(&pk, black_box(42), DEFAULT_DEPTH)
                .expect("chain failed")
        })
    });
}

criterion_group!(benches, bench_keygen, bench_encrypt_decrypt, bench_chain);
criterion_main!(benches);
