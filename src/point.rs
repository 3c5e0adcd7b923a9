//! External collaborator contracts: finite-field arithmetic and point
//! group laws, referenced only through their contracts.
//!
//! This crate does not implement a finite field or a curve; it only
//! requires enough of each to run the GLV engine. A concrete curve crate
//! plugs in its own [`FieldElement`] and [`CurvePoint`] implementations
//! (typically backed by `ff::Field`/`group::Group`, trimmed down here to
//! exactly what the decomposer, recoder, table builder, and accumulator
//! loop touch).

use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

/// Minimal finite-field contract the GLV engine needs: multiplication,
/// squaring, addition, subtraction, inversion, batch inversion, and a
/// zero check.
pub trait FieldElement:
    Copy
    + Clone
    + Default
    + ConditionallySelectable
    + ConstantTimeEq
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Neg<Output = Self>
{
    /// Additive identity.
    const ZERO: Self;

    /// Multiplicative identity.
    const ONE: Self;

    /// `self * self`.
    fn square(&self) -> Self {
        *self * *self
    }

    /// Multiplicative inverse. The caller is responsible for never
    /// calling this on a value that is allowed to be secretly zero
    /// without handling the resulting behavior; zero has no inverse.
    fn invert(&self) -> Self;

    /// `Choice::from(1)` iff `self` is the additive identity.
    fn is_zero(&self) -> Choice {
        self.ct_eq(&Self::ZERO)
    }

    /// Batch-invert `values` into `out`, `out[i] = 1 / values[i]` (or
    /// `ZERO` if `values[i]` was zero), using Montgomery's trick so the
    /// whole batch costs one inversion.
    fn batch_invert(values: &[Self], out: &mut [Self]) {
        debug_assert_eq!(values.len(), out.len());
        if values.is_empty() {
            return;
        }

        // Running product scan: out[i] = values[0] * .. * values[i].
        let mut acc = Self::ONE;
        for i in 0..values.len() {
            out[i] = acc;
            acc = acc * values[i];
        }

        // One inversion of the total product (zero entries are swapped
        // for ONE beforehand by the caller in the single-inversion
        // variant used by `table::build`; here we invert whatever
        // product resulted, which is only zero if some input was zero).
        let mut inv = acc.invert();

        for i in (0..values.len()).rev() {
            out[i] = out[i] * inv;
            inv = inv * values[i];
        }
    }
}

/// Minimal elliptic-curve point contract the GLV engine needs: Jacobian
/// (or projective) group laws, plus an affine form for lookup-table
/// storage.
pub trait CurvePoint: Copy + Clone + Default + ConditionallySelectable + core::ops::Neg<Output = Self> {
    /// The base field this point's coordinates live in (`Fp` for G1,
    /// `Fp2` for G2).
    type Field: FieldElement;

    /// Affine representation, used only by the lookup table (which holds
    /// `2^(M-1)` affine points).
    type Affine: Copy + Clone + Default + ConditionallySelectable + core::ops::Neg<Output = Self::Affine>;

    /// The point at infinity.
    const IDENTITY: Self;

    /// Lift an affine point into this coordinate system.
    fn from_affine(p: &Self::Affine) -> Self;

    /// Point doubling.
    fn double(&self) -> Self;

    /// Point addition (same coordinate system on both sides).
    fn add(&self, other: &Self) -> Self;

    /// Mixed addition: `self` in this coordinate system, `other` affine.
    fn add_mixed(&self, other: &Self::Affine) -> Self;

    /// This point's `Z` coordinate (or whatever the coordinate system
    /// calls the common denominator), needed to batch-convert a table of
    /// points to affine with a single inversion.
    fn z(&self) -> Self::Field;

    /// Convert to affine given the precomputed inverse of [`Self::z`].
    fn to_affine_with_zinv(&self, zinv: Self::Field) -> Self::Affine;
}
