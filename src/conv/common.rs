//! Routines and types that are *shared* between all implementations.

/// The exponent is represented by an i32 regardless of underlying type; this is sufficiently wide
/// to accomodate the exponent of any floating point format.
pub type Exp = i32;

//

pub const EXP_LOG10_POW2_BOUNDS: core::ops::RangeInclusive<i32> = -112815 ..= 112815;

/// Returns the largest exponent `f` such that `10^f ≤ 2^e`, i.e. the integer part of
/// `log_10(2^e)`.
///
/// Uses an euclidean approximation that is only valid in the range [EXP_LOG10_POW2_BOUNDS]. If
/// `exp` is not in that range, the result is unspecified.
#[inline]
pub const fn exp_log10_pow2(exp: i32) -> i32 {
    debug_assert!(*EXP_LOG10_POW2_BOUNDS.start() <= exp && exp <= *EXP_LOG10_POW2_BOUNDS.end());
    let x = 1292913987i64 * exp as i64;
    (x >> 32) as i32
}

/// Returns the largest exponent `f` such that `10^f ≤ 5^e`. Valid for `0 ≤ e ≤ 2620`.
#[inline]
pub const fn exp_log10_pow5(exp: i32) -> i32 {
    debug_assert!(0 <= exp && exp <= 2620);
    ((exp as u32 * 732923) >> 20) as i32
}

/// Returns the number of bits of `5^e` (and 1 for `e = 0`). Valid for `0 ≤ e ≤ 3528`.
#[inline]
pub const fn pow5_bits(exp: i32) -> i32 {
    debug_assert!(0 <= exp && exp <= 3528);
    (((exp as u32 * 1217359) >> 19) + 1) as i32
}

/// Returns the largest `p` such that `5^p` divides `x`. `x` must be nonzero.
#[inline]
pub const fn pow5_factor(mut x: u64) -> u32 {
    debug_assert!(x != 0);
    let mut count = 0;
    while x % 5 == 0 {
        x /= 5;
        count += 1;
    }
    count
}

/// Checks whether `x` is a multiple of `5^p`.
#[inline]
pub const fn is_multiple_of_pow5(x: u64, p: u32) -> bool {
    pow5_factor(x) >= p
}

/// Checks whether `x` is a multiple of `2^p`.
#[inline]
pub const fn is_multiple_of_pow2(x: u64, p: u32) -> bool {
    debug_assert!(p < u64::BITS);
    x & ((1 << p) - 1) == 0
}

//

/// A power-of-five table, indexed from 0.
pub struct Multipliers<T, const N: usize> (
    [Multiplier<T>; N]
);

/// A fixed-point multiplier stored in two words, `hi * 2^BITS + lo`.
#[derive(Debug)]
#[derive(Clone, Copy)]
pub struct Multiplier<T> {
    pub hi: T,
    pub lo: T,
}

impl<T, const N: usize> Multipliers<T, N> {
    pub const fn new(table: [Multiplier<T>; N]) -> Self {
        Self(table)
    }

    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn get(&self, idx: i32) -> &Multiplier<T> {
        debug_assert!(0 <= idx && (idx as usize) < self.len());
        &self.0[idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bit_len_pow5(e: u32) -> i32 {
        // 5^e for e <= 55 fits a u128.
        (u128::BITS - 5u128.pow(e).leading_zeros()) as i32
    }

    #[test]
    fn pow5_bits_small() {
        assert_eq!(pow5_bits(0), 1);
        for e in 1 ..= 55 {
            assert_eq!(pow5_bits(e as i32), bit_len_pow5(e), "e = {e}");
        }
    }

    #[test]
    fn log10_small() {
        for e in 0 ..= 127 {
            let pow2 = 2f64.powi(e);
            assert_eq!(exp_log10_pow2(e), pow2.log10().floor() as i32, "e = {e}");
        }
        for e in 0 ..= 55u32 {
            let digits = format!("{}", 5u128.pow(e)).len() as i32;
            assert_eq!(exp_log10_pow5(e as i32), digits - 1, "e = {e}");
        }
    }

    #[test]
    fn factors() {
        assert_eq!(pow5_factor(1), 0);
        assert_eq!(pow5_factor(5), 1);
        assert_eq!(pow5_factor(250), 3);
        assert_eq!(pow5_factor(5u64.pow(27)), 27);
        assert!(is_multiple_of_pow5(75, 2));
        assert!(!is_multiple_of_pow5(75, 3));
        assert!(is_multiple_of_pow2(96, 5));
        assert!(!is_multiple_of_pow2(96, 6));
        assert!(is_multiple_of_pow2(7, 0));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(20_000))]

        #[test]
        fn log10_pow2_negative(e in -1000i32 .. 0) {
            // 10^f <= 2^e < 10^(f+1), checked on the reciprocal to stay inside f64.
            let f = exp_log10_pow2(e);
            let lhs = 2f64.powi(-e).log10();
            assert!((-f - 1) as f64 <= lhs + 1e-9 && lhs <= (-f) as f64 + 1e-9);
        }

        #[test]
        fn pow2_multiples(x in any::<u64>(), p in 0u32 .. 64) {
            assert_eq!(is_multiple_of_pow2(x, p), x.trailing_zeros() >= p);
        }
    }
}
