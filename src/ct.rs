//! Constant-time primitives consumed by the decomposer, recoder, table
//! builder, and accumulator loop.
//!
//! These are thin named wrappers over [`subtle`], matching
//! `LookupTable::select` in both `k256::arithmetic::mul` and
//! `primeorder::lookup_table` almost verbatim, generalized over arbitrary
//! point and integer types instead of one fixed curve.

use crypto_bigint::Uint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// `SecretBool`: a boolean whose value must never be branched on directly.
///
/// This is exactly [`subtle::Choice`]; the alias exists only to give that
/// concept a name in this crate's public surface.
pub type SecretBool = Choice;

/// Negate `x` in place iff `flag` is true. Both the negated and
/// non-negated computations always run; only the final select is
/// conditioned on `flag`.
///
/// Written directly against `ConditionallySelectable` + by-value `Neg`
/// rather than `subtle::ConditionallyNegatable`: that trait's blanket impl
/// requires `&T: Neg<Output = T>`, but [`crate::point::CurvePoint`] and its
/// `Affine` associated type only promise `Neg<Output = Self>` by value
/// (matching how curve point types are normally written), so this crate
/// negates by computing `-*x` directly instead.
pub fn cneg<T>(x: &mut T, flag: Choice)
where
    T: Copy + ConditionallySelectable + core::ops::Neg<Output = T>,
{
    let negated = -*x;
    *x = T::conditional_select(&*x, &negated, flag);
}

/// Copy `src` into `dst` iff `flag` is true.
///
/// The write always happens; what changes is whether the written value is
/// `src` or `dst`'s own previous value, so the memory-access pattern does
/// not depend on `flag`.
pub fn ccopy<T: ConditionallySelectable>(dst: &mut T, src: &T, flag: Choice) {
    dst.conditional_assign(src, flag);
}

/// Scan every entry of `table` and copy the one matching `index` into the
/// return value. No early exit: every entry is read and compared exactly
/// once regardless of where `index` points.
pub fn secret_lookup<T>(table: &[T], index: u32, default: T) -> T
where
    T: ConditionallySelectable,
{
    let mut out = default;
    for (i, entry) in table.iter().enumerate() {
        let c = (i as u32).ct_eq(&index);
        out.conditional_assign(entry, c);
    }
    out
}

/// Conditional big-integer add: `x + y` iff `flag`, else `x` unchanged.
/// Both the sum and the pass-through are computed; only the select
/// depends on `flag`.
pub fn cadd<const LIMBS: usize>(x: &Uint<LIMBS>, y: &Uint<LIMBS>, flag: Choice) -> Uint<LIMBS> {
    let sum = x.wrapping_add(y);
    Uint::conditional_select(x, &sum, flag)
}

/// Conditional big-integer subtract: `x - y` iff `flag`, else `x`
/// unchanged.
pub fn csub<const LIMBS: usize>(x: &Uint<LIMBS>, y: &Uint<LIMBS>, flag: Choice) -> Uint<LIMBS> {
    let diff = x.wrapping_sub(y);
    Uint::conditional_select(x, &diff, flag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cneg_both_paths_defined() {
        let mut x = 3i8;
        cneg(&mut x, Choice::from(0));
        assert_eq!(x, 3);
        cneg(&mut x, Choice::from(1));
        assert_eq!(x, -3);
    }

    #[test]
    fn ccopy_selects_by_flag() {
        let mut dst = 1u8;
        let src = 2u8;
        ccopy(&mut dst, &src, Choice::from(0));
        assert_eq!(dst, 1);
        ccopy(&mut dst, &src, Choice::from(1));
        assert_eq!(dst, 2);
    }

    #[test]
    fn secret_lookup_finds_index() {
        let table: [u32; 4] = [10, 20, 30, 40];
        let found = secret_lookup(&table, 2, 0u32);
        assert_eq!(found, 30);
    }

    #[test]
    fn cadd_csub_roundtrip() {
        let x = Uint::<4>::from_u64(100);
        let y = Uint::<4>::from_u64(7);
        let added = cadd(&x, &y, Choice::from(1));
        assert_eq!(added, Uint::<4>::from_u64(107));
        let unchanged = cadd(&x, &y, Choice::from(0));
        assert_eq!(unchanged, x);
        let subbed = csub(&added, &y, Choice::from(1));
        assert_eq!(subbed, x);
    }
}
