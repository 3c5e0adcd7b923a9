//! Scalar decomposer: splits a secret scalar `k` into `M` short,
//! non-negative mini-scalars plus `M` sign flags, using the curve's
//! Babai-rounded lattice basis (the GLV decomposition of Gallant,
//! Lambert & Vanstone 2001, generalized to `M` dimensions as in
//! Galbraith, Lin & Scott 2011's GLV+GLS construction).

use crate::{
    bigint::high_words,
    ct,
    params::EndoParams,
};
use crypto_bigint::Uint;
use subtle::{Choice, ConditionallySelectable};

/// Output of [`decompose`]: `M` non-negative mini-scalars of width
/// `P::MINI_BITS`, plus `M` sign flags.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decomposition<const M: usize, const LIMBS: usize> {
    /// `k[0]..k[M-1]`, each holding only its low `MINI_BITS` bits.
    pub mini: [Uint<LIMBS>; M],
    /// `true` iff the corresponding companion point must be negated
    /// before use (the sign normalizer).
    pub negate: [Choice; M],
}

/// Zeroizes the mini-scalars (the sensitive material derived from the
/// secret scalar `k`) on drop, the same `DefaultIsZeroes` pattern
/// `primeorder::ProjectivePoint` uses.
#[cfg(feature = "zeroize")]
impl<const M: usize, const LIMBS: usize> zeroize::DefaultIsZeroes for Decomposition<M, LIMBS> {}

/// Low-`bits` bitmask of a `Uint<LIMBS>`, built word-by-word so no
/// `shl`/`shl_vartime` operation on `Uint` is required.
fn low_bits_mask<const LIMBS: usize>(bits: usize) -> Uint<LIMBS> {
    let word_bits = crypto_bigint::Word::BITS as usize;
    let total_bits = LIMBS * word_bits;
    debug_assert!(bits <= total_bits);

    let full_words = bits / word_bits;
    let rem_bits = bits % word_bits;

    let mut words = [0 as crypto_bigint::Word; LIMBS];
    for word in words.iter_mut().take(full_words) {
        *word = crypto_bigint::Word::MAX;
    }
    if rem_bits > 0 {
        words[full_words] = (1 as crypto_bigint::Word << rem_bits) - 1;
    }
    Uint::from_words(words)
}

/// Decompose `k` into `M` mini-scalars per `P`'s lattice parameters.
///
/// `k` must be strictly less than the curve order (a caller
/// precondition; violating it is undefined behavior but does not branch
/// on secret bits since `k` itself is treated as secret input
/// throughout).
pub fn decompose<P, const M: usize, const LIMBS: usize>(k: &Uint<LIMBS>) -> Decomposition<M, LIMBS>
where
    P: EndoParams<M, LIMBS>,
{
    let _ = P::CHECK;

    // Step 1: alpha_i = high_words(babai_i * k, w), corrected toward -inf
    // when babai_i carries a negative sign.
    let mut alpha = [Uint::<LIMBS>::ZERO; M];
    for i in 0..M {
        let babai = &P::BABAI[i];
        let mut a = high_words(&babai.value, k, P::ORDER_WORDS);
        a = ct::cadd(&a, &Uint::<LIMBS>::ONE, babai.sign());
        alpha[i] = a;
    }

    // Step 2: k[0] = scalar, k[j>0] = 0.
    let mut acc = [Uint::<LIMBS>::ZERO; M];
    acc[0] = *k;

    // Step 3: fold in every basis vector's contribution to every
    // coordinate. `lattice[b][i].sign XOR babai[b].sign == 0` subtracts,
    // `== 1` adds.
    for i in 0..M {
        for b in 0..M {
            let entry = &P::LATTICE[b][i];
            if bool::from(entry.value.is_zero()) {
                continue;
            }

            let alpha_b = alpha[b].wrapping_mul(&entry.value);
            let xor_sign = entry.sign() ^ P::BABAI[b].sign();

            let subtracted = acc[i].wrapping_sub(&alpha_b);
            let added = acc[i].wrapping_add(&alpha_b);
            acc[i] = Uint::conditional_select(&subtracted, &added, xor_sign);
        }
    }

    // Step 4: extract sign, conditionally negate, truncate to MINI_BITS.
    let mask = low_bits_mask::<LIMBS>(P::MINI_BITS);
    let mut mini = [Uint::<LIMBS>::ZERO; M];
    let mut negate = [Choice::from(0u8); M];
    for i in 0..M {
        let sign = crate::bigint::bit(&acc[i], P::MINI_BITS - 1);
        let negated = acc[i].wrapping_neg();
        let chosen = Uint::conditional_select(&acc[i], &negated, sign);
        mini[i] = crate::bigint::and(&chosen, &mask);
        negate[i] = sign;
    }

    Decomposition { mini, negate }
}
