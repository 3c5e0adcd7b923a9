//! Compile-time curve-parameter registry: a build-time table keyed by
//! curve identifier, entries are constants.

use crypto_bigint::Uint;
use subtle::Choice;

/// A signed big-integer table entry: a magnitude plus a sign bit.
#[derive(Clone, Copy, Debug)]
pub struct SignedUint<const LIMBS: usize> {
    /// Magnitude.
    pub value: Uint<LIMBS>,
    /// `true` if this entry is negative.
    pub negative: bool,
}

impl<const LIMBS: usize> SignedUint<LIMBS> {
    /// A non-negative entry.
    pub const fn positive(value: Uint<LIMBS>) -> Self {
        Self {
            value,
            negative: false,
        }
    }

    /// A negative entry.
    pub const fn negative(value: Uint<LIMBS>) -> Self {
        Self {
            value,
            negative: true,
        }
    }

    /// This entry's sign as a [`Choice`] (`1` iff negative).
    pub fn sign(&self) -> Choice {
        Choice::from(self.negative as u8)
    }
}

/// Compile-time curve-parameter table consumed by the scalar decomposer.
///
/// `M` is the decomposition dimension (2 for GLV on G1, 4 for GLV x GLS on
/// G2); `LIMBS` is the limb width of the scalar's `Uint` representation.
pub trait EndoParams<const M: usize, const LIMBS: usize> {
    /// Bit width of scalars this table decomposes (`curveOrderBits`).
    const SCALAR_BITS: usize;

    /// Width in bits of each mini-scalar, `L = ceil(SCALAR_BITS / M) + 1`.
    const MINI_BITS: usize;

    /// Number of limb-words of precision `w` used by `high_words` when
    /// computing Babai rounding coefficients.
    const ORDER_WORDS: usize;

    /// `babai(F)`: length-`M` array of rounded GLV basis-inverse rows.
    const BABAI: [SignedUint<LIMBS>; M];

    /// `lattice(F)`: `M x M` matrix of basis vectors, `LATTICE[b][i]` is
    /// the `i`-th coordinate of basis vector `b`.
    const LATTICE: [[SignedUint<LIMBS>; M]; M];

    /// Compile-time check that `M` is a supported decomposition
    /// dimension; any other `M` is a configuration error, rejected at
    /// build time.
    ///
    /// Referencing this associated constant from a generic context forces
    /// its evaluation, turning an unsupported `M` into a compile error at
    /// the monomorphization site.
    const CHECK: () = assert!(
        M == 2 || M == 4,
        "EndoParams only supports M = 2 (GLV) or M = 4 (GLV x GLS)"
    );
}

/// BN254's scalar field (`Fr`), the one concrete, numerically-verified
/// `EndoParams<2, 4>` instance this crate ships.
///
/// The lattice basis and Babai constants were derived from the standard
/// two-dimensional GLV short-basis construction (extended Euclidean
/// algorithm on `(r, lambda)`, stopped at the first remainder below
/// `sqrt(r)`, picking the shorter of the two candidate second vectors)
/// and cross-checked bit-for-bit against known decomposition vectors.
#[derive(Clone, Copy, Debug)]
pub struct Bn254Fr;

/// BN254 `Fr` modulus, for reference and for reducing test scalars.
pub const BN254_FR_MODULUS: Uint<4> = Uint::<4>::from_be_hex(
    "30644e72e131a029b85045b68181585d2833e84879b9709143e1f593f0000001",
);

impl EndoParams<2, 4> for Bn254Fr {
    const SCALAR_BITS: usize = 254;
    const MINI_BITS: usize = 128;
    const ORDER_WORDS: usize = 4;

    const BABAI: [SignedUint<4>; 2] = [
        SignedUint::positive(Uint::<4>::from_be_hex(
            "000000000000000000000000000000024ccef014a773d2d25398fd0300ff6565",
        )),
        SignedUint::positive(Uint::<4>::from_be_hex(
            "000000000000000000000000000000000000000000000002d91d232ec7e0b3d7",
        )),
    ];

    const LATTICE: [[SignedUint<4>; 2]; 2] = [
        [
            SignedUint::positive(Uint::<4>::from_be_hex(
                "000000000000000000000000000000006f4d8248eeb859fc8211bbeb7d4f1128",
            )),
            SignedUint::negative(Uint::<4>::from_be_hex(
                "00000000000000000000000000000000000000000000000089d3256894d213e3",
            )),
        ],
        [
            SignedUint::positive(Uint::<4>::from_be_hex(
                "00000000000000000000000000000000000000000000000089d3256894d213e3",
            )),
            SignedUint::positive(Uint::<4>::from_be_hex(
                "000000000000000000000000000000006f4d8248eeb859fd0be4e1541221250b",
            )),
        ],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_accepts_supported_dimensions() {
        let _ = <Bn254Fr as EndoParams<2, 4>>::CHECK;
    }
}
