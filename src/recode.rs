//! GLV-SAC (Sign-Aligned-Column) recoder (Faz-Hernández, Longa & Sánchez
//! 2013, Algorithm 1), plus the windowed `m2w2` variant of the same
//! paper's section 6.
//!
//! `Recoded` is a dedicated bitvector abstraction rather than exposing
//! raw bytes directly: callers index digits by position, never by
//! byte/bit offset.

use crate::{bigint, ct};
use crypto_bigint::Uint;
use subtle::Choice;

/// A packed column of `L` single-digit values: digit `i` lives in byte
/// `(L-1-i) / 8`, bit `i % 8` (big-endian across bytes, little-endian
/// within a byte). `L` is passed to every accessor rather than carried
/// as a type parameter, so one `Recoded<BYTES>` type serves every
/// curve's `MINI_BITS`.
#[derive(Clone, Copy, Debug)]
pub struct Recoded<const BYTES: usize> {
    bytes: [u8; BYTES],
}

impl<const BYTES: usize> Default for Recoded<BYTES> {
    fn default() -> Self {
        Self {
            bytes: [0u8; BYTES],
        }
    }
}

/// Zeroizes the packed digit bytes (derived from the secret mini-scalar
/// they recode), the same `DefaultIsZeroes` pattern
/// `primeorder::ProjectivePoint` uses.
#[cfg(feature = "zeroize")]
impl<const BYTES: usize> zeroize::DefaultIsZeroes for Recoded<BYTES> {}

impl<const BYTES: usize> Recoded<BYTES> {
    /// Digit `i` of an `l`-digit buffer, as a [`Choice`].
    pub fn get(&self, l: usize, i: usize) -> Choice {
        debug_assert!(i < l);
        let byte_idx = (l - 1 - i) >> 3;
        let bit_pos = i & 7;
        Choice::from((self.bytes[byte_idx] >> bit_pos) & 1)
    }

    /// OR `digit` into digit slot `i` of an `l`-digit buffer. The buffer is
    /// zero-initialized and write-once: every slot must be written at
    /// most once.
    pub fn set(&mut self, l: usize, i: usize, digit: Choice) {
        debug_assert!(i < l);
        let byte_idx = (l - 1 - i) >> 3;
        let bit_pos = i & 7;
        self.bytes[byte_idx] |= u8::from(digit) << bit_pos;
    }
}

/// `M` packed digit columns of a GLV-SAC recoding. Column 0 is the sign
/// column; columns `1..M` are absolute-value bits sharing column 0's
/// sign at the same position.
#[derive(Clone, Copy, Debug)]
pub struct GlvSac<const M: usize, const BYTES: usize> {
    /// One [`Recoded`] buffer per mini-scalar.
    pub columns: [Recoded<BYTES>; M],
}

impl<const M: usize, const BYTES: usize> Default for GlvSac<M, BYTES> {
    fn default() -> Self {
        Self {
            columns: [Recoded::default(); M],
        }
    }
}

#[cfg(feature = "zeroize")]
impl<const M: usize, const BYTES: usize> zeroize::DefaultIsZeroes for GlvSac<M, BYTES> {}

/// Recode `M` non-negative, `l`-bit mini-scalars into their GLV-SAC
/// representation (Faz-Hernández, Longa & Sánchez 2013, Algorithm 1).
///
/// Precondition: `mini[0]` is odd (the caller's sign normalizer is
/// responsible for forcing this).
pub fn recode<const M: usize, const LIMBS: usize, const BYTES: usize>(
    mini: &[Uint<LIMBS>; M],
    l: usize,
) -> GlvSac<M, BYTES> {
    debug_assert!(bool::from(bigint::is_odd(&mini[0])));

    let mut sac = GlvSac::<M, BYTES>::default();

    // Column 0: the sign digit. Position l-1 is fixed to +1 (digit 0);
    // every other position reads the *next higher* bit of mini[0].
    sac.columns[0].set(l, l - 1, Choice::from(0u8));
    for i in 0..(l - 1) {
        let bit = bigint::bit(&mini[0], i + 1);
        sac.columns[0].set(l, i, !bit);
    }

    // Columns 1..M: absolute-value bits, with the sign-aligned carry
    // (add bji AND b0i back into kj) propagated bit by bit.
    for j in 1..M {
        let mut kj = mini[j];
        for i in 0..l {
            let bji = bigint::is_odd(&kj);
            sac.columns[j].set(l, i, bji);
            kj = kj.shr_vartime(1);
            let b0i = sac.columns[0].get(l, i);
            let carry = bji & b0i;
            kj = ct::cadd(&kj, &Uint::<LIMBS>::ONE, carry);
        }
    }

    sac
}

/// `L` for the windowed `m2w2` variant: `(lw mod 2) + lw` with
/// `lw = ceil(bits / 2) + 1`. Padding to an even length lets the windowed
/// loop consume exactly `l / 2` two-bit windows.
pub const fn compute_recoded_length_w2(mini_bits: usize) -> usize {
    mini_bits + (mini_bits % 2)
}

/// Compose the windowed table index and sign flag for window `w`,
/// reading the two raw SAC digit-bits at positions `2w` and `2w + 1`
/// directly out of the `M = 2` unwindowed recoding. No separate windowed
/// recoding algorithm exists: the raw bits of [`recode`] already carry
/// exactly the information the windowed table's bit patterns key off
/// of; only the *table builder* ([`crate::table::build_m2w2`])
/// interprets them.
pub fn w2_table_index<const BYTES: usize>(
    sac: &GlvSac<2, BYTES>,
    l: usize,
    window: usize,
) -> (u32, Choice) {
    let lo = 2 * window;
    let hi = lo + 1;

    let k0_hi = sac.columns[0].get(l, hi);
    let k0_lo = sac.columns[0].get(l, lo);
    let k1_hi = sac.columns[1].get(l, hi);
    let k1_lo = sac.columns[1].get(l, lo);

    let is_neg = k0_hi;
    let parity = k0_hi ^ k0_lo;
    let k1_idx = (u8::from(k1_hi) << 1) | u8::from(k1_lo);
    let index = ((u8::from(parity) << 2) | k1_idx) as u32;

    (index, is_neg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_bigint::U64;

    /// Mini-scalars `(11, 6, 14, 3)` recode to columns
    /// `k0=[1,-1,1,-1,1]`, `k1=[1,-1,0,-1,0]`, `k2=[1,0,0,-1,0]`,
    /// `k3=[0,0,1,-1,1]`, most-significant digit first.
    #[test]
    fn recodes_known_four_column_vector() {
        let mini: [U64; 4] = [
            U64::from_u64(11),
            U64::from_u64(6),
            U64::from_u64(14),
            U64::from_u64(3),
        ];
        let l = 5;
        let sac = recode::<4, 1, 1>(&mini, l);

        // digit(i) interpreted as signed: 0 -> +1, 1 -> -1, read most
        // significant position (l-1) down to least (0).
        let col_signed = |c: usize| -> [i8; 5] {
            core::array::from_fn(|pos| {
                let i = l - 1 - pos;
                if bool::from(sac.columns[c].get(l, i)) {
                    -1
                } else {
                    1
                }
            })
        };
        assert_eq!(col_signed(0), [1, -1, 1, -1, 1]);

        // Columns 1..3 store magnitude bits; multiply by column 0's sign
        // at the same position to recover the signed value listed above.
        let magnitude_signed = |c: usize| -> [i8; 5] {
            core::array::from_fn(|pos| {
                let i = l - 1 - pos;
                let mag = i8::from(bool::from(sac.columns[c].get(l, i)));
                let sign = if bool::from(sac.columns[0].get(l, i)) {
                    -1
                } else {
                    1
                };
                mag * sign
            })
        };
        assert_eq!(magnitude_signed(1), [1, -1, 0, -1, 0]);
        assert_eq!(magnitude_signed(2), [1, 0, 0, -1, 0]);
        assert_eq!(magnitude_signed(3), [0, 0, 1, -1, 1]);
    }

    #[test]
    fn recode_round_trips_to_original_mini_scalars() {
        let mini: [U64; 2] = [U64::from_u64(0b1011), U64::from_u64(0b0110)];
        let l = 6;
        let sac = recode::<2, 1, 1>(&mini, l);

        for (col, expected) in [(0usize, 11i64), (1usize, 6i64)] {
            let mut sum = 0i64;
            for i in 0..l {
                let sign = if bool::from(sac.columns[0].get(l, i)) {
                    -1
                } else {
                    1
                };
                let value = if col == 0 {
                    1
                } else {
                    i64::from(bool::from(sac.columns[col].get(l, i)))
                };
                sum += sign * value * (1i64 << i);
            }
            assert_eq!(sum, expected);
        }
    }

    #[test]
    fn w2_table_index_reproduces_known_windows() {
        let mini: [U64; 2] = [U64::from_u64(11), U64::from_u64(14)];
        let l = compute_recoded_length_w2(6);
        let sac = recode::<2, 1, 1>(&mini, l);

        let (idx0, neg0) = w2_table_index::<1>(&sac, l, 0);
        assert_eq!(idx0, 6);
        assert!(bool::from(neg0));

        let (idx1, neg1) = w2_table_index::<1>(&sac, l, 1);
        assert_eq!(idx1, 4);
        assert!(bool::from(neg1));

        let (idx2, neg2) = w2_table_index::<1>(&sac, l, 2);
        assert_eq!(idx2, 7);
        assert!(!bool::from(neg2));
    }
}
