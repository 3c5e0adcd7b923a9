//! The main scalar-multiplication loop and its constant-time final
//! correction.
//!
//! Grounded on `k256::arithmetic::mul::lincomb_generic`'s shape: decompose,
//! sign-normalize, build a table, then a double-and-add loop consuming
//! digits most-significant first. Generalized from that function's fixed
//! 2-table/radix-16 structure to a GLV-SAC column loop (single
//! sign-aligned column set rather than per-component independent
//! tables, a single 1-bit or 2-bit digit per step rather than 4-bit
//! radix-16 windows).

use crate::{
    bigint,
    ct,
    decompose,
    params::EndoParams,
    point::CurvePoint,
    recode::{self, GlvSac},
};
use crypto_bigint::Uint;

/// `[k]P`, accelerated by the `M - 1` endomorphism images in `images`
/// (the unwindowed GLV-SAC pipeline end to end).
///
/// `images[j]` must be `phi_{j+1}(P)` for the same `P` passed in (the
/// caller derives these via
/// [`crate::endomorphism::G1Endomorphism`]/[`crate::endomorphism::G2Endomorphism`]).
///
/// `NM1` must equal `M - 1` and `SIZE` must equal `2^NM1`; both are
/// explicit const parameters (rather than computed) because stable Rust
/// cannot derive one const generic from another. `BYTES` is the packed
/// byte width of a [`recode::Recoded`] column for `P::MINI_BITS` digits,
/// i.e. `P::MINI_BITS.div_ceil(8)`.
pub fn scalar_mul_endo<P, Pt, const M: usize, const LIMBS: usize, const BYTES: usize, const NM1: usize, const SIZE: usize>(
    p: &Pt,
    images: &[Pt; NM1],
    k: &Uint<LIMBS>,
) -> Pt
where
    P: EndoParams<M, LIMBS>,
    Pt: CurvePoint,
{
    debug_assert_eq!(NM1, M - 1);
    debug_assert_eq!(SIZE, 1usize << NM1);
    let l = P::MINI_BITS;
    debug_assert_eq!(BYTES, l.div_ceil(8));

    let decomposition = decompose::decompose::<P, M, LIMBS>(k);

    // Sign normalizer: negate P itself and every companion point by its
    // own decomposition sign flag, so every mini-scalar can be treated
    // as the non-negative magnitude `decompose` already produced.
    let mut p0 = *p;
    ct::cneg(&mut p0, decomposition.negate[0]);

    let mut companions = *images;
    for j in 0..NM1 {
        ct::cneg(&mut companions[j], decomposition.negate[j + 1]);
    }

    // Force mini[0] odd, remembering its original parity for the final
    // correction.
    let mut mini = decomposition.mini;
    let k0_was_odd = bigint::is_odd(&mini[0]);
    mini[0] = ct::cadd(&mini[0], &Uint::<LIMBS>::ONE, !k0_was_odd);

    let table = crate::table::build::<Pt, NM1, SIZE>(&p0, &companions);
    let sac = recode::recode::<M, LIMBS, BYTES>(&mini, l);

    let mut acc = Pt::from_affine(&lookup::<Pt, M, BYTES, SIZE>(&table, &sac, l, l - 1));
    for i in (0..l - 1).rev() {
        acc = acc.double();
        let mut tmp = lookup::<Pt, M, BYTES, SIZE>(&table, &sac, l, i);
        ct::cneg(&mut tmp, sac.columns[0].get(l, i));
        acc = acc.add_mixed(&tmp);
    }

    // Final correction: undo the +1 forced onto mini[0] by subtracting
    // the (already sign-normalized) base point whenever the original
    // low bit of mini[0] was even.
    let corrected = acc.add(&(-p0));
    Pt::conditional_select(&corrected, &acc, k0_was_odd)
}

/// Constant-time secret-index lookup into the table at column position
/// `i`: composes the index by OR-ing bit `j - 1` of each non-sign
/// column's digit at position `i`.
fn lookup<Pt, const M: usize, const BYTES: usize, const SIZE: usize>(
    table: &[Pt::Affine; SIZE],
    sac: &GlvSac<M, BYTES>,
    l: usize,
    i: usize,
) -> Pt::Affine
where
    Pt: CurvePoint,
{
    let mut index = 0u32;
    for j in 1..M {
        let bit = sac.columns[j].get(l, i);
        index |= u32::from(u8::from(bit)) << (j - 1);
    }
    ct::secret_lookup(table, index, Pt::Affine::default())
}

/// `[k]P` via the windowed `m2w2` pipeline: `M = 2`, two bits recoded
/// per window, an 8-entry table.
///
/// `images` is the single companion point `phi(P)` (M - 1 = 1 for M = 2).
pub fn scalar_mul_endo_m2w2<P, Pt, const LIMBS: usize, const BYTES: usize>(
    p: &Pt,
    image: &Pt,
    k: &Uint<LIMBS>,
) -> Pt
where
    P: EndoParams<2, LIMBS>,
    Pt: CurvePoint,
{
    let l = recode::compute_recoded_length_w2(P::MINI_BITS);
    debug_assert_eq!(BYTES, l.div_ceil(8));

    let decomposition = decompose::decompose::<P, 2, LIMBS>(k);

    let mut p0 = *p;
    ct::cneg(&mut p0, decomposition.negate[0]);
    let mut p1 = *image;
    ct::cneg(&mut p1, decomposition.negate[1]);

    let mut mini = decomposition.mini;
    let k0_was_odd = bigint::is_odd(&mini[0]);
    mini[0] = ct::cadd(&mini[0], &Uint::<LIMBS>::ONE, !k0_was_odd);

    let table = crate::table::build_m2w2(&p0, &p1);
    let sac = recode::recode::<2, LIMBS, BYTES>(&mini, l);

    let windows = l / 2;
    let (idx, is_neg) = recode::w2_table_index::<BYTES>(&sac, l, windows - 1);
    let mut acc = Pt::from_affine(&ct::secret_lookup(&table, idx, Pt::Affine::default()));
    ct::cneg(&mut acc, is_neg);

    for w in (0..windows - 1).rev() {
        acc = acc.double().double();
        let (idx, is_neg) = recode::w2_table_index::<BYTES>(&sac, l, w);
        let mut tmp = ct::secret_lookup(&table, idx, Pt::Affine::default());
        ct::cneg(&mut tmp, is_neg);
        acc = acc.add_mixed(&tmp);
    }

    let corrected = acc.add(&(-p0));
    Pt::conditional_select(&corrected, &acc, k0_was_odd)
}
