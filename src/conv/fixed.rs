//! Formatting with a fixed number of digits after the point.
//!
//! Unlike the shortest representation, this prints the exact binary value, correctly rounded at
//! any precision, so digits are generated one at a time from a big-integer ratio.

use core::cmp::Ordering;

use crate::ConversionError;
use crate::conv::bignum::Big;
use crate::conv::binary64::Binary;
use crate::conv::common;
use crate::conv::fmt::Writer;
use crate::conv::{FiniteFloatType, FloatType, Sealed};

/// Writes `num` with exactly `precision` digits after the decimal point, and no point if
/// `precision` is zero, rounding the exact value half to even.
///
/// Special values are written as `NaN`, `inf` and `-inf`. A negative number keeps its sign even
/// when it rounds to zero.
pub fn write_fixed(num: f64, precision: u32, w: &mut Writer<'_>) -> Result<(), ConversionError> {
    match Sealed::classify(&num) {
        FloatType::Finite => {}
        FloatType::PosInf => return w.push_str(b"inf"),
        FloatType::NegInf => return w.push_str(b"-inf"),
        FloatType::Nan => return w.push_str(b"NaN"),
    }
    match Sealed::classify_finite(&num) {
        FiniteFloatType::Nonzero => {
            if num.is_sign_negative() {
                w.push(b'-')?;
            }
            write_digits(Binary::new(num), precision, w)
        }
        FiniteFloatType::PosZero => write_zero(precision, w),
        FiniteFloatType::NegZero => {
            w.push(b'-')?;
            write_zero(precision, w)
        }
    }
}

fn write_zero(precision: u32, w: &mut Writer<'_>) -> Result<(), ConversionError> {
    w.push(b'0')?;
    if precision > 0 {
        w.push(b'.')?;
        w.push_zeros(precision as usize)?;
    }
    Ok(())
}

fn write_digits(binary: Binary, precision: u32, w: &mut Writer<'_>) -> Result<(), ConversionError> {
    let Binary { exp, mant } = binary;
    debug_assert!(mant != 0);

    // Estimate `k` with `10^(k-1) <= value < 10^k`; it can be one too large.
    let bit_len = mant.ilog2() as i32 + 1 + exp;
    let mut k = if bit_len == 0 { 0 } else { common::exp_log10_pow2(bit_len) + 1 };

    // `value = num / scale * 10^k`, with `num < scale`.
    let mut num = Big::from_u64(mant);
    let mut scale = Big::from_u64(1);
    if exp >= 0 {
        num.mul_pow2(exp as usize);
    } else {
        scale.mul_pow2(exp.unsigned_abs() as usize);
    }
    if k >= 0 {
        scale.mul_pow10(k as usize);
    } else {
        num.mul_pow10(k.unsigned_abs() as usize);
    }
    debug_assert!(!num.is_zero() && num < scale);

    let mut ten_num = num;
    ten_num.mul_small(10);
    if ten_num < scale {
        k -= 1;
        num = ten_num;
    }

    let mut scale2 = scale;
    scale2.add(&scale);
    let mut scale4 = scale2;
    scale4.add(&scale2);
    let mut scale8 = scale4;
    scale8.add(&scale4);
    let scales = [scale, scale2, scale4, scale8];

    let start = w.len();
    if k <= 0 {
        w.push(b'0')?;
        if precision > 0 {
            w.push(b'.')?;
            w.push_zeros(k.unsigned_abs().min(precision) as usize)?;
        }
    }

    let n_digits = k as i64 + precision as i64;
    if n_digits < 0 {
        // `value < 10^k`, which is below half a unit in the last place.
        return Ok(())
    }

    for i in 0 .. n_digits {
        if k > 0 && i == k as i64 {
            w.push(b'.')?;
        }
        num.mul_small(10);
        let digit = num.div_rem_digit(&scales);
        w.push(b'0' + digit)?;
    }

    // What is left, `num / scale`, is the fraction of a unit in the last place.
    num.mul_pow2(1);
    let round_up = match num.cmp(&scale) {
        Ordering::Greater => true,
        Ordering::Less => false,
        Ordering::Equal => w.written_mut().last().is_some_and(|&c| c & 1 == 1),
    };
    if round_up {
        round_up_digits(w, start)?;
    }
    Ok(())
}

/// Adds one unit in the last place to the digits written since `start`, carrying through nines
/// and across the point. A carry out of the first digit inserts a new leading `1`.
fn round_up_digits(w: &mut Writer<'_>, start: usize) -> Result<(), ConversionError> {
    for c in w.written_mut()[start ..].iter_mut().rev() {
        match *c {
            b'.' => {}
            b'9' => *c = b'0',
            _ => {
                *c += 1;
                return Ok(())
            }
        }
    }
    w.insert(start, b'1')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn fixed(num: f64, precision: u32) -> String {
        let mut buf = vec![0u8; 1200];
        let mut w = Writer::new(&mut buf);
        write_fixed(num, precision, &mut w).unwrap();
        let len = w.len();
        String::from_utf8(buf[.. len].to_vec()).unwrap()
    }

    #[test]
    fn simple() {
        assert_eq!(fixed(1.0, 0), "1");
        assert_eq!(fixed(1.0, 3), "1.000");
        assert_eq!(fixed(123.456, 2), "123.46");
        assert_eq!(fixed(-123.456, 5), "-123.45600");
        assert_eq!(fixed(0.001, 5), "0.00100");
        assert_eq!(fixed(1e21, 0), "1000000000000000000000");
        assert_eq!(fixed(0.1, 20), "0.10000000000000000555");
    }

    #[test]
    fn rounding() {
        // Ties are exact binary values, and go to the even digit.
        assert_eq!(fixed(0.5, 0), "0");
        assert_eq!(fixed(1.5, 0), "2");
        assert_eq!(fixed(2.5, 0), "2");
        assert_eq!(fixed(0.125, 2), "0.12");
        assert_eq!(fixed(0.375, 2), "0.38");
        // Not ties: 2.675 is stored as 2.67499999...
        assert_eq!(fixed(2.675, 2), "2.67");
        assert_eq!(fixed(0.7, 0), "1");
        // Carries.
        assert_eq!(fixed(9.9999, 3), "10.000");
        assert_eq!(fixed(0.9999, 2), "1.00");
        assert_eq!(fixed(-99.96, 1), "-100.0");
        assert_eq!(fixed(9.5, 0), "10");
        assert_eq!(fixed(0.96, 1), "1.0");
    }

    #[test]
    fn rounds_to_zero() {
        assert_eq!(fixed(0.001, 2), "0.00");
        assert_eq!(fixed(0.004, 2), "0.00");
        assert_eq!(fixed(0.005, 2), "0.01");
        assert_eq!(fixed(1e-10, 3), "0.000");
        assert_eq!(fixed(-1e-10, 3), "-0.000");
        assert_eq!(fixed(0.3, 0), "0");
        assert_eq!(fixed(1e-300, 0), "0");
    }

    #[test]
    fn zeros() {
        assert_eq!(fixed(0.0, 0), "0");
        assert_eq!(fixed(0.0, 3), "0.000");
        assert_eq!(fixed(-0.0, 0), "-0");
        assert_eq!(fixed(-0.0, 2), "-0.00");
    }

    #[test]
    fn specials() {
        assert_eq!(fixed(f64::NAN, 3), "NaN");
        assert_eq!(fixed(f64::INFINITY, 3), "inf");
        assert_eq!(fixed(f64::NEG_INFINITY, 0), "-inf");
    }

    #[test]
    fn extremes() {
        let max = fixed(f64::MAX, 0);
        assert_eq!(max.len(), 309);
        assert!(max.starts_with("179769313486231570814527423731"));
        assert_eq!(max, format!("{:.0}", f64::MAX));

        let min = fixed(f64::from_bits(1), 1074);
        assert_eq!(min.len(), 1076);
        assert!(min.starts_with(&format!("0.{}4940656458412465", "0".repeat(323))));
        assert!(min.ends_with("625"));
        assert_eq!(min, format!("{:.1074}", f64::from_bits(1)));

        assert_eq!(fixed(f64::from_bits(1), 323), format!("0.{}", "0".repeat(323)));
        assert_eq!(fixed(f64::from_bits(1), 324), format!("0.{}5", "0".repeat(323)));
    }

    #[test]
    fn capacity() {
        for (num, precision) in [(123.456, 2), (-0.5, 3), (9.9999, 3), (0.0, 4), (f64::NEG_INFINITY, 1)] {
            let len = fixed(num, precision).len();
            for cap in 0 .. len {
                let mut buf = vec![0u8; cap];
                let mut w = Writer::new(&mut buf);
                assert_eq!(write_fixed(num, precision, &mut w), Err(ConversionError::OutputBufferTooSmall));
            }
            let mut buf = vec![0u8; len];
            let mut w = Writer::new(&mut buf);
            assert_eq!(write_fixed(num, precision, &mut w), Ok(()));
            assert_eq!(w.len(), len);
        }
    }

    /// Writes `num` at precision 0 into buffers of every size up to its length.
    fn check_capacity_without_point(num: f64) {
        let text = fixed(num, 0);
        assert!(!text.contains('.'), "{text}");
        for cap in 0 .. text.len() {
            let mut buf = vec![0u8; cap];
            let mut w = Writer::new(&mut buf);
            assert_eq!(write_fixed(num, 0, &mut w), Err(ConversionError::OutputBufferTooSmall), "{text} in {cap}");
        }
        let mut buf = vec![0u8; text.len()];
        let mut w = Writer::new(&mut buf);
        assert_eq!(write_fixed(num, 0, &mut w), Ok(()));
        assert_eq!(w.len(), text.len());
        assert_eq!(buf, text.as_bytes());
    }

    #[test]
    fn capacity_without_point() {
        // The carry inserts a leading digit.
        assert_eq!(fixed(9.5, 0), "10");
        // Below one, rounding up the leading zero.
        assert_eq!(fixed(0.7, 0), "1");
        assert_eq!(fixed(-0.3, 0), "-0");
        for num in [9.5, 0.7, -0.3, f64::MAX, -0.0, 99.5, 0.5] {
            check_capacity_without_point(num);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50_000))]

        #[test]
        fn std_fmt(bits in any::<u64>(), precision in 0u32 .. 40) {
            let num = f64::from_bits(bits);
            prop_assume!(num.is_finite());
            assert_eq!(fixed(num, precision), format!("{num:.*}", precision as usize));
        }

        #[test]
        fn std_fmt_moderate(num in -1e6f64 .. 1e6, precision in 0u32 .. 20) {
            assert_eq!(fixed(num, precision), format!("{num:.*}", precision as usize));
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(2_000))]

        #[test]
        fn capacity_without_point_any(bits in any::<u64>()) {
            let num = f64::from_bits(bits);
            prop_assume!(num.is_finite());
            check_capacity_without_point(num);
        }
    }
}
