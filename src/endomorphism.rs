//! Endomorphism image generation.
//!
//! A concrete curve crate picks whichever of these fits its group:
//! [`G1Endomorphism`] for the prime-field cube-root-of-unity x-twist, or
//! [`G2Endomorphism`] for the iterated-Frobenius construction on the
//! quadratic extension.

use crate::point::CurvePoint;

/// The G1 endomorphism: `phi(P) = (beta * x, y)` for a curve-specific
/// cube root of unity `beta` in `Fp`. One fixed map, used by the `M = 2`
/// GLV decomposition.
pub trait G1Endomorphism: CurvePoint {
    /// `phi(self)`.
    fn endomorphism(&self) -> Self;
}

/// The G2 endomorphism family: the `p`-power Frobenius map `psi`, whose
/// `M - 1` iterates `psi, psi^2, psi^3` supply the companion points for
/// the `M = 4` GLV x GLS decomposition.
pub trait G2Endomorphism: CurvePoint {
    /// `psi(self)`, one application of Frobenius.
    fn frobenius(&self) -> Self;

    /// The `N` companion points `psi(self), psi^2(self), .., psi^N(self)`,
    /// generated by repeated application of a single map rather than `N`
    /// independent ones.
    fn endomorphism_images<const N: usize>(&self) -> [Self; N] {
        let mut out = [*self; N];
        let mut cur = *self;
        for slot in out.iter_mut() {
            cur = cur.frobenius();
            *slot = cur;
        }
        out
    }
}
