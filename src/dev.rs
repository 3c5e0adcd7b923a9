//! Development-only fixtures: a symbolic abelian group for exercising the
//! recoder/table/accumulator *structure* without real field arithmetic,
//! and one genuine BN254 scalar-field group for numeric end-to-end checks.
//!
//! Mirrors `primefield::dev`/`primeorder::dev`: neither of those modules
//! implements a real curve either — they exist purely to give the rest
//! of their workspace's tests something concrete to instantiate generics
//! against. `num-bigint` is already a dev-dependency of this crate (for
//! cross-checking decomposition in `decompose.rs`'s own tests), so this
//! module reuses it rather than hand-rolling modular inversion.

use crate::{
    endomorphism::G1Endomorphism,
    params::BN254_FR_MODULUS,
    point::{CurvePoint, FieldElement},
};
use crypto_bigint::{ArrayEncoding, NonZero, Uint};
use num_bigint::BigUint;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

fn modulus_biguint() -> BigUint {
    BigUint::from_bytes_be(&BN254_FR_MODULUS.to_be_byte_array())
}

fn reduce(x: &Uint<4>) -> Uint<4> {
    let m = NonZero::new(BN254_FR_MODULUS).expect("BN254 Fr modulus is nonzero");
    x.rem_vartime(&m)
}

/// `Z / rZ` (`r` = BN254's scalar-field order) used as the toy "field"
/// backing [`ToyPoint`] below. Not constant-time: `invert` goes through
/// `num-bigint`, which is fine because this type only ever exists under
/// `#[cfg(test)]`/`feature = "dev"`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToyField(pub Uint<4>);

impl ToyField {
    fn to_biguint(self) -> BigUint {
        BigUint::from_bytes_be(&self.0.to_be_byte_array())
    }

    fn from_biguint(x: &BigUint) -> Uint<4> {
        let bytes = x.to_bytes_be();
        let mut buf = [0u8; 32];
        buf[32 - bytes.len()..].copy_from_slice(&bytes);
        Uint::<4>::from_be_slice(&buf)
    }
}

impl core::ops::Add for ToyField {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(reduce(&self.0.wrapping_add(&rhs.0)))
    }
}

impl core::ops::Sub for ToyField {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(reduce(&self.0.wrapping_add(&BN254_FR_MODULUS).wrapping_sub(&rhs.0)))
    }
}

impl core::ops::Mul for ToyField {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let product = (self.to_biguint() * rhs.to_biguint()) % modulus_biguint();
        Self(Self::from_biguint(&product))
    }
}

impl core::ops::Neg for ToyField {
    type Output = Self;
    fn neg(self) -> Self {
        Self(reduce(&BN254_FR_MODULUS.wrapping_sub(&self.0)))
    }
}

impl ConditionallySelectable for ToyField {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(Uint::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for ToyField {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl FieldElement for ToyField {
    const ZERO: Self = Self(Uint::<4>::ZERO);
    const ONE: Self = Self(Uint::<4>::ONE);

    fn invert(&self) -> Self {
        // Fermat's little theorem: r is prime, so a^(r-2) == a^-1 (mod r).
        let r = modulus_biguint();
        let exponent = &r - BigUint::from(2u32);
        let inv = self.to_biguint().modpow(&exponent, &r);
        Self(Self::from_biguint(&inv))
    }
}

/// A one-coordinate "point" over `Z / rZ` under addition: `P` is any
/// nonzero residue, and `phi(P) = lambda * P` for BN254's endomorphism
/// eigenvalue `lambda`. Scalar multiplication in this group is literally
/// modular multiplication, which makes `scalar_mul_endo`'s output
/// checkable against a one-line reference (`k * p mod r`) without
/// needing a real curve's group law.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToyPoint(pub ToyField);

/// BN254's GLV eigenvalue (a primitive cube root of unity mod `r`), the
/// same root used to derive the `Bn254Fr` lattice in `params.rs`.
const LAMBDA_HEX: &str = "30644e72e131a029048b6e193fd84104cc37a73fec2bc5e9b8ca0b2d36636f23";

impl ToyPoint {
    /// Build a toy point from a small integer, for test fixtures.
    pub fn from_u64(x: u64) -> Self {
        Self(ToyField(Uint::<4>::from_u64(x)))
    }
}

impl ConditionallySelectable for ToyPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(ToyField::conditional_select(&a.0, &b.0, choice))
    }
}

impl core::ops::Neg for ToyPoint {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl CurvePoint for ToyPoint {
    type Field = ToyField;
    type Affine = ToyPoint;

    const IDENTITY: Self = Self(ToyField::ZERO);

    fn from_affine(p: &Self::Affine) -> Self {
        *p
    }

    fn double(&self) -> Self {
        Self(self.0 + self.0)
    }

    fn add(&self, other: &Self) -> Self {
        Self(self.0 + other.0)
    }

    fn add_mixed(&self, other: &Self::Affine) -> Self {
        Self(self.0 + other.0)
    }

    fn z(&self) -> Self::Field {
        ToyField::ONE
    }

    fn to_affine_with_zinv(&self, _zinv: Self::Field) -> Self::Affine {
        *self
    }
}

impl G1Endomorphism for ToyPoint {
    fn endomorphism(&self) -> Self {
        let lambda = ToyField(Uint::<4>::from_be_hex(LAMBDA_HEX));
        Self(self.0 * lambda)
    }
}

/// A symbolic point: an integer linear combination of up to four basis
/// symbols `P0..P3`. Exercises the recoder, table builder, and
/// accumulator loop's *structure* without needing any real field
/// arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SymbolicPoint(pub [i64; 4]);

/// A trivial one-valued "field" used only for [`SymbolicPoint`]'s `Z`
/// bookkeeping coordinate, which is always 1 (points are carried purely
/// in affine form).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SymbolicField(pub i64);

impl core::ops::Add for SymbolicField {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl core::ops::Sub for SymbolicField {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl core::ops::Mul for SymbolicField {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl core::ops::Neg for SymbolicField {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl ConditionallySelectable for SymbolicField {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(i64::conditional_select(&a.0, &b.0, choice))
    }
}

impl ConstantTimeEq for SymbolicField {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl FieldElement for SymbolicField {
    const ZERO: Self = Self(0);
    const ONE: Self = Self(1);

    fn invert(&self) -> Self {
        debug_assert_eq!(self.0, 1, "SymbolicPoint is always stored affine (z == 1)");
        Self(1)
    }
}

impl SymbolicPoint {
    /// `P_i`, the `i`-th basis symbol.
    pub fn basis(i: usize) -> Self {
        let mut coeffs = [0i64; 4];
        coeffs[i] = 1;
        Self(coeffs)
    }
}

impl ConditionallySelectable for SymbolicPoint {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        let mut out = [0i64; 4];
        for i in 0..4 {
            out[i] = i64::conditional_select(&a.0[i], &b.0[i], choice);
        }
        Self(out)
    }
}

impl core::ops::Neg for SymbolicPoint {
    type Output = Self;
    fn neg(self) -> Self {
        Self(core::array::from_fn(|i| -self.0[i]))
    }
}

impl CurvePoint for SymbolicPoint {
    type Field = SymbolicField;
    type Affine = SymbolicPoint;

    const IDENTITY: Self = Self([0; 4]);

    fn from_affine(p: &Self::Affine) -> Self {
        *p
    }

    fn double(&self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] * 2))
    }

    fn add(&self, other: &Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] + other.0[i]))
    }

    fn add_mixed(&self, other: &Self::Affine) -> Self {
        self.add(other)
    }

    fn z(&self) -> Self::Field {
        SymbolicField::ONE
    }

    fn to_affine_with_zinv(&self, _zinv: Self::Field) -> Self::Affine {
        *self
    }
}
