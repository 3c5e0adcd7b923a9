//! GLV-accelerated scalar multiplication benchmarks, in the style of
//! `k256`'s own `benches/scalar.rs`: `criterion`, `black_box`-wrapped
//! inputs, one `BenchmarkGroup` per operation being compared.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crypto_bigint::{NonZero, U256};
use glv_mul::{
    dev::ToyPoint,
    params::{Bn254Fr, BN254_FR_MODULUS},
    scalar_mul_endo, scalar_mul_endo_m2w2, G1Endomorphism,
};

fn test_scalar() -> U256 {
    let k = U256::from_be_hex("24a0b87203c7a8def0018c95d7fab106373aebf920265c696f0ae08f8229b3f3");
    let m = NonZero::new(BN254_FR_MODULUS).expect("BN254 Fr modulus is nonzero");
    k.rem_vartime(&m)
}

fn bench_unwindowed(c: &mut Criterion) {
    let p = ToyPoint::from_u64(7);
    let phi_p = p.endomorphism();
    let k = test_scalar();

    c.bench_function("scalar_mul_endo (unwindowed, M=2)", |b| {
        b.iter(|| {
            scalar_mul_endo::<Bn254Fr, ToyPoint, 2, 4, 16, 1, 2>(
                &black_box(p),
                &black_box([phi_p]),
                &black_box(k),
            )
        })
    });
}

fn bench_windowed(c: &mut Criterion) {
    let p = ToyPoint::from_u64(7);
    let phi_p = p.endomorphism();
    let k = test_scalar();

    c.bench_function("scalar_mul_endo_m2w2 (windowed, M=2 W=2)", |b| {
        b.iter(|| {
            scalar_mul_endo_m2w2::<Bn254Fr, ToyPoint, 4, 16>(
                &black_box(p),
                &black_box(phi_p),
                &black_box(k),
            )
        })
    });
}

criterion_group!(benches, bench_unwindowed, bench_windowed);
criterion_main!(benches);
