//! Lookup-table builder, plus the windowed 8-entry `m2w2` table.
//!
//! Grounded on `primeorder::lookup_table::LookupTable` (constant-time
//! `select`, itself reused here as [`crate::ct::secret_lookup`]) and
//! `primeorder::projective::batch_normalize_generic` (Montgomery's-trick
//! batch inversion, one `invert()` call for the whole table).

use crate::point::{CurvePoint, FieldElement};

/// Build the `2^{NM1}` unwindowed lookup table: `tab[u] = P + sum of
/// images[j] for each set bit j of u`. Each new entry costs exactly one
/// point addition by reusing the entry with `u`'s most-significant set
/// bit cleared. `u` is a public table index, so the
/// `leading_zeros`-based `log2` is a harmless variable-time operation.
pub fn build<Pt, const NM1: usize, const SIZE: usize>(
    p: &Pt,
    images: &[Pt; NM1],
) -> [Pt::Affine; SIZE]
where
    Pt: CurvePoint,
{
    debug_assert_eq!(SIZE, 1usize << NM1);

    let mut table = [*p; SIZE];
    for u in 1..SIZE {
        let msb = (usize::BITS - 1 - (u as u32).leading_zeros()) as usize;
        table[u] = table[u ^ (1 << msb)].add(&images[msb]);
    }
    batch_to_affine(&table)
}

/// Build the 8-entry windowed `m2w2` table: two `P0` tiers (`P0`, `3P0`),
/// each combined with `{0, ±1, ±2, ±3} * P1`. Entry `idx` is stored as
/// the *positive* combination for its `(parity, k1)` pattern;
/// [`crate::recode::w2_table_index`]'s `isNeg` flag negates the whole
/// entry at lookup time, so only the magnitude needs to be baked in
/// here.
///
/// Index layout (`idx = parity << 2 | k1`):
/// - `parity = 0` (`|k0| = 3` tier): `idx 0..=3` = `3*P0 + k1 * P1`.
/// - `parity = 1` (`|k0| = 1` tier): `idx 4..=7` = `P0 + v(k1) * P1`,
///   `v` an opposite-two's-complement map (`00->0, 01->-1, 10->2,
///   11->1`).
pub fn build_m2w2<Pt>(p0: &Pt, p1: &Pt) -> [Pt::Affine; 8]
where
    Pt: CurvePoint,
{
    let double_p1 = p1.double();
    let triple_p1 = double_p1.add(p1);
    let triple_p0 = p0.double().add(p0);
    let neg_p1 = -*p1;

    let table = [
        triple_p0,                  // parity 0, k1 = 00 -> 3P0
        triple_p0.add(p1),          // parity 0, k1 = 01 -> 3P0 + P1
        triple_p0.add(&double_p1),  // parity 0, k1 = 10 -> 3P0 + 2P1
        triple_p0.add(&triple_p1),  // parity 0, k1 = 11 -> 3P0 + 3P1
        *p0,                        // parity 1, k1 = 00 -> P0
        p0.add(&neg_p1),            // parity 1, k1 = 01 -> P0 - P1
        p0.add(&double_p1),         // parity 1, k1 = 10 -> P0 + 2P1
        p0.add(p1),                 // parity 1, k1 = 11 -> P0 + P1
    ];
    batch_to_affine(&table)
}

/// Batch-convert `points` to affine with a single field inversion over
/// all entries' `Z` coordinates.
fn batch_to_affine<Pt, const SIZE: usize>(points: &[Pt; SIZE]) -> [Pt::Affine; SIZE]
where
    Pt: CurvePoint,
{
    let zs: [Pt::Field; SIZE] = core::array::from_fn(|i| points[i].z());
    let mut zinvs = [Pt::Field::ZERO; SIZE];
    Pt::Field::batch_invert(&zs, &mut zinvs);
    core::array::from_fn(|i| points[i].to_affine_with_zinv(zinvs[i]))
}
