//! Wide-multiply and bit-extraction helpers built on [`crypto_bigint::Uint`].
//!
//! These are the only big-integer primitives the decomposer and recoder
//! need beyond what `crypto_bigint` already exposes. The shift amounts
//! used here are always compile-time or public curve/configuration
//! parameters, never secret, so the `_vartime` shifts are the right
//! tool — the value being shifted is secret, the amount is not.

use crypto_bigint::{Uint, Word};
use subtle::Choice;

/// A whole-word left shift of `x` by `shift` words, truncated to `LIMBS`
/// words, built from [`Uint::from_words`] so no `shl`/`shl_vartime`
/// operation is required (only a whole-word lane shuffle).
fn shift_words_left<const LIMBS: usize>(x: &Uint<LIMBS>, shift: usize) -> Uint<LIMBS> {
    debug_assert!(shift <= LIMBS);
    let src = x.to_words();
    let mut dst = [0 as Word; LIMBS];
    for i in shift..LIMBS {
        dst[i] = src[i - shift];
    }
    Uint::from_words(dst)
}

/// A whole-word right shift of `x` by `shift` words, built the same way
/// as [`shift_words_left`].
fn shift_words_right<const LIMBS: usize>(x: &Uint<LIMBS>, shift: usize) -> Uint<LIMBS> {
    debug_assert!(shift <= LIMBS);
    let src = x.to_words();
    let mut dst = [0 as Word; LIMBS];
    for i in 0..(LIMBS - shift) {
        dst[i] = src[i + shift];
    }
    Uint::from_words(dst)
}

/// Returns the upper `w` words of `x * y`, i.e. `(x * y) >> (w * Word::BITS)`,
/// truncated back down to `LIMBS` words.
///
/// The decomposer's Babai rounding coefficient `alpha_i` is the upper
/// half of a wide product of the scalar by a precomputed basis-inverse
/// row, equivalent to a logical right shift by `w` whole words.
pub fn high_words<const LIMBS: usize>(x: &Uint<LIMBS>, y: &Uint<LIMBS>, w: usize) -> Uint<LIMBS> {
    debug_assert!(w <= LIMBS);
    let (lo, hi) = x.widening_mul(y);

    if w == LIMBS {
        return hi;
    }

    let lo_part = shift_words_right(&lo, w);
    let hi_part = shift_words_left(&hi, LIMBS - w);
    lo_part.wrapping_add(&hi_part)
}

/// Returns bit `i` of `x` as a [`Choice`].
///
/// `i` is a public index (always a compile-time loop bound in this
/// crate); the bit value read out of `x` is secret.
pub fn bit<const LIMBS: usize>(x: &Uint<LIMBS>, i: usize) -> Choice {
    let shifted = x.shr_vartime(i as u32);
    Choice::from((shifted.to_words()[0] & 1) as u8)
}

/// Returns the least-significant bit of `x` as a [`Choice`].
pub fn is_odd<const LIMBS: usize>(x: &Uint<LIMBS>) -> Choice {
    x.is_odd()
}

/// Word-wise bitwise AND, built from [`Uint::to_words`]/[`Uint::from_words`]
/// so the combination does not depend on `Uint` implementing `BitAnd`
/// directly.
pub fn and<const LIMBS: usize>(x: &Uint<LIMBS>, y: &Uint<LIMBS>) -> Uint<LIMBS> {
    let xw = x.to_words();
    let yw = y.to_words();
    let mut out = [0 as Word; LIMBS];
    for i in 0..LIMBS {
        out[i] = xw[i] & yw[i];
    }
    Uint::from_words(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::U256;

    #[test]
    fn high_words_matches_full_width_shift() {
        let x = U256::from_u64(0xffff_ffff_ffff_ffff);
        let y = U256::from_u64(2);
        let got = high_words(&x, &y, 4);
        assert_eq!(got, U256::ZERO);
    }

    #[test]
    fn bit_extracts_expected_positions() {
        let x = U256::from_u64(0b1010);
        assert_eq!(bool::from(bit(&x, 0)), false);
        assert_eq!(bool::from(bit(&x, 1)), true);
        assert_eq!(bool::from(bit(&x, 2)), false);
        assert_eq!(bool::from(bit(&x, 3)), true);
    }

    #[test]
    fn is_odd_matches_lsb() {
        assert_eq!(bool::from(is_odd(&U256::from_u64(7))), true);
        assert_eq!(bool::from(is_odd(&U256::from_u64(8))), false);
    }
}
