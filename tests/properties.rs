//! Algebraic property tests — distributivity of scalar multiplication,
//! decomposition round-trip, and recoding round-trip — driven by
//! `proptest` over random scalars/mini-scalars, the same tool and
//! `prop_compose!` style `p256`'s own `tests/scalar.rs` uses for its
//! "for all scalars" checks.

use crypto_bigint::{NonZero, U256, U64};
use glv_mul::{
    decompose::decompose,
    dev::ToyPoint,
    endomorphism::G1Endomorphism,
    params::{Bn254Fr, BN254_FR_MODULUS},
    recode::recode,
};
use num_bigint::BigUint;
use num_traits::Zero;
use proptest::prelude::*;

fn modulus_biguint() -> BigUint {
    BigUint::from_bytes_be(&<U256 as crypto_bigint::ArrayEncoding>::to_be_byte_array(
        &BN254_FR_MODULUS,
    ))
}

fn to_biguint(x: &U256) -> BigUint {
    BigUint::from_bytes_be(&<U256 as crypto_bigint::ArrayEncoding>::to_be_byte_array(x))
}

prop_compose! {
    /// A uniformly-distributed scalar strictly less than the BN254 `Fr`
    /// order (reducing 256 random bits, same construction `p256`'s own
    /// `scalar()` strategy uses).
    fn bn254_scalar()(bytes in any::<[u8; 32]>()) -> U256 {
        let m = NonZero::new(BN254_FR_MODULUS).expect("BN254 Fr modulus is nonzero");
        U256::from_be_slice(&bytes).rem_vartime(&m)
    }
}

proptest! {
    /// The decomposition's signed recombination reproduces `k` modulo
    /// the curve order, for arbitrary `k` (not just the fixed known
    /// vectors `decompose.rs`'s own unit tests pin down).
    #[test]
    fn decomposition_recombines_to_original_scalar(k in bn254_scalar()) {
        let d = decompose::<Bn254Fr, 2, 4>(&k);

        let r = modulus_biguint();
        let lambda = BigUint::parse_bytes(
            b"30644e72e131a029048b6e193fd84104cc37a73fec2bc5e9b8ca0b2d36636f23",
            16,
        )
        .unwrap();

        let signed = |mini: &U256, negate: bool| -> BigUint {
            let m = to_biguint(mini) % &r;
            if negate && !m.is_zero() {
                &r - m
            } else {
                m
            }
        };

        let term0 = signed(&d.mini[0], bool::from(d.negate[0]));
        let term1 = signed(&d.mini[1], bool::from(d.negate[1]));
        let recombined = (term0 + term1 * &lambda) % &r;

        prop_assert_eq!(recombined, to_biguint(&k) % &r);
    }

    /// For arbitrary mini-scalars with `mini[0]` forced odd, the
    /// GLV-SAC-decoded signed sum of each column equals that column's
    /// original mini-scalar.
    #[test]
    fn recoding_round_trips_arbitrary_mini_scalars(
        k0_raw in any::<u64>(),
        k1 in any::<u64>(),
    ) {
        let l = 64usize;
        let k0 = k0_raw | 1; // precondition: mini[0] odd.
        let mini: [U64; 2] = [U64::from_u64(k0), U64::from_u64(k1)];
        let sac = recode::<2, 1, 8>(&mini, l);

        for (col, expected) in [(0usize, k0 as i128), (1usize, k1 as i128)] {
            let mut sum: i128 = 0;
            for i in 0..l {
                let sign: i128 = if bool::from(sac.columns[0].get(l, i)) { -1 } else { 1 };
                let value: i128 = if col == 0 {
                    1
                } else {
                    i128::from(bool::from(sac.columns[col].get(l, i)))
                };
                sum += sign * value * (1i128 << i);
            }
            prop_assert_eq!(sum, expected);
        }
    }

    /// Scalar multiplication distributes over modular scalar addition,
    /// for arbitrary `a`, `b` reduced mod the curve order.
    #[test]
    fn distributes_over_scalar_addition(a in bn254_scalar(), b in bn254_scalar()) {
        let m = NonZero::new(BN254_FR_MODULUS).expect("BN254 Fr modulus is nonzero");
        let sum = a.wrapping_add(&b).rem_vartime(&m);

        let p = ToyPoint::from_u64(11);
        let phi_p = p.endomorphism();

        let lhs_a = glv_mul::scalar_mul_endo::<Bn254Fr, ToyPoint, 2, 4, 16, 1, 2>(&p, &[phi_p], &a);
        let lhs_b = glv_mul::scalar_mul_endo::<Bn254Fr, ToyPoint, 2, 4, 16, 1, 2>(&p, &[phi_p], &b);
        let rhs = glv_mul::scalar_mul_endo::<Bn254Fr, ToyPoint, 2, 4, 16, 1, 2>(&p, &[phi_p], &sum);

        prop_assert_eq!(lhs_a.add(&lhs_b), rhs);
    }
}
