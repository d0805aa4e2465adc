//! Multiplication of a mantissa by a two-word table entry, keeping the bits above `j`.
//!
//! Both the parser and the shortest formatter scale a mantissa by a power of five this way: the
//! full product has up to three words, of which only the top ones matter.

use crate::conv::common::Multiplier;

/// Calculates `(m * (mult.hi * 2^32 + mult.lo)) >> j` from two 32×32 partial products, without
/// overflow. Requires `32 ≤ j < 96`.
#[inline]
pub const fn mul_shift_32(m: u32, mult: &Multiplier<u32>, j: i32) -> u64 {
    debug_assert!(j >= 32 && j < 96);
    let lo = m as u64 * mult.lo as u64;
    let hi = m as u64 * mult.hi as u64;
    ((lo >> 32) + hi) >> (j - 32)
}

/// Calculates `(m * (mult.hi * 2^64 + mult.lo)) >> j` from two 64×64 partial products, without
/// overflow. Requires `64 ≤ j < 192`.
#[inline]
pub const fn mul_shift_64(m: u64, mult: &Multiplier<u64>, j: i32) -> u128 {
    debug_assert!(j >= 64 && j < 192);
    let lo = m as u128 * mult.lo as u128;
    let hi = m as u128 * mult.hi as u128;
    ((lo >> 64) + hi) >> (j - 64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn exact_when_low_word_vanishes() {
        let mult = Multiplier { hi: 5u32, lo: 0 };
        assert_eq!(mul_shift_32(3, &mult, 32), 15);
        assert_eq!(mul_shift_32(u32::MAX, &mult, 32), u32::MAX as u64 * 5);

        let mult = Multiplier { hi: 1u64 << 63, lo: 0 };
        assert_eq!(mul_shift_64(u64::MAX, &mult, 127), u64::MAX as u128);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100_000))]

        #[test]
        fn matches_full_product_32(m in any::<u32>(), hi in any::<u32>(), lo in any::<u32>(), j in 32 .. 96) {
            let full = m as u128 * ((hi as u128) << 32 | lo as u128);
            assert_eq!(mul_shift_32(m, &Multiplier { hi, lo }, j) as u128, full >> j);
        }

        #[test]
        fn matches_split_product_64(m in any::<u64>(), hi in any::<u64>(), lo in any::<u64>(), j in 64 .. 128) {
            // Reference: three-word schoolbook product, top bits only.
            let p_lo = m as u128 * lo as u128;
            let p_hi = m as u128 * hi as u128;
            let mid = (p_lo >> 64) + (p_hi & u64::MAX as u128);
            let top = (p_hi >> 64) + (mid >> 64);
            let wide = (top << 64) | (mid & u64::MAX as u128);
            assert_eq!(mul_shift_64(m, &Multiplier { hi, lo }, j), wide >> (j - 64));
        }
    }
}
