//! Conversions between decimal text and IEEE 754 binary floating point numbers, `f32` and `f64`,
//! without allocating.
//!
//! - [parse_f32] and [parse_f64] read a plain decimal (an optional sign, digits, and at most one
//!   decimal point) into the nearest float, ties to even.
//! - [to_shortest_f32] and [to_shortest_f64] write the shortest digits that parse back to the same
//!   float, in scientific notation such as `8.388608E6`.
//! - [to_fixed_f64] writes the exact binary value with a fixed number of digits after the decimal
//!   point, rounded half to even.
//!
//! All formatting writes into a caller-provided byte slice, and fails with
//! [ConversionError::OutputBufferTooSmall] rather than writing past its end.

#![cfg_attr(not(test), no_std)]

mod conv;
mod error;

pub use conv::Float;
pub use error::{ConversionError, ParseError};

use conv::fmt::Writer;

/// Parses a decimal number into the nearest `f32`, ties to even.
///
/// The accepted syntax is an optional `+` or `-`, then decimal digits with at most one `.`, which
/// may come first or last. `inf` and `nan` are accepted in any letter case. Exponents are not.
/// Values too small for a subnormal round to a zero of the same sign, and values too large become
/// infinite.
///
/// Only the digits from the first to the last nonzero one count as significant; more than 9 of
/// them is an [ParseError::InputNumberTooLarge] error.
pub fn parse_f32(text: &[u8]) -> Result<f32, ParseError> {
    parse(text)
}

/// Parses a decimal number into the nearest `f64`, ties to even.
///
/// Like [parse_f32], but with up to 19 significant digits.
///
/// ## Example
///
/// ```
/// assert_eq!(fpconv::parse_f64(b"-123.456"), Ok(-123.456));
/// assert_eq!(fpconv::parse_f64(b"1.2.3"), Err(fpconv::ParseError::InputHasMultipleDots));
/// ```
pub fn parse_f64(text: &[u8]) -> Result<f64, ParseError> {
    parse(text)
}

/// Parses a decimal number into the nearest `F`; see [parse_f32] for the syntax.
pub fn parse<F: Float>(text: impl AsRef<[u8]>) -> Result<F, ParseError> {
    F::parse(text.as_ref())
}

/// Writes the shortest decimal that parses back to `value` into `buf`, and returns the number of
/// bytes written.
///
/// The output is `-` for negative values, the first digit, then `.` and the remaining digits if
/// there are more, then `E` and the decimal exponent if it is not zero: `8.388608E6`, `2E2`,
/// `-1.5`, `5E-1`. Zeros are written as `0` and `-0`, and the special values as `NaN`, `inf` and
/// `-inf`.
///
/// Fails if `buf` cannot hold the whole output, in which case its contents are unspecified. 16
/// bytes are always enough.
pub fn to_shortest_f32(value: f32, buf: &mut [u8]) -> Result<usize, ConversionError> {
    to_shortest(value, buf)
}

/// Like [to_shortest_f32], for `f64`. 24 bytes are always enough.
///
/// ## Example
///
/// ```
/// let mut buf = [0u8; 24];
/// let len = fpconv::to_shortest_f64(8388608.0, &mut buf).unwrap();
/// assert_eq!(&buf[.. len], b"8.388608E6");
/// ```
pub fn to_shortest_f64(value: f64, buf: &mut [u8]) -> Result<usize, ConversionError> {
    to_shortest(value, buf)
}

/// Writes the shortest decimal that parses back to `value`; see [to_shortest_f32].
pub fn to_shortest<F: Float>(value: F, buf: &mut [u8]) -> Result<usize, ConversionError> {
    let mut w = Writer::new(buf);
    conv::write_shortest(value, &mut w)?;
    Ok(w.len())
}

/// Writes the exact value of `value` rounded half to even to `precision` digits after the decimal
/// point, and returns the number of bytes written.
///
/// There is no decimal point when `precision` is zero. Negative values keep their `-` even when
/// they round to zero. The special values are written as `NaN`, `inf` and `-inf`.
///
/// Fails if `buf` cannot hold the whole output, in which case its contents are unspecified. The
/// output can be long: the smallest subnormal needs 1076 bytes at precision 1074, and [f64::MAX]
/// has 309 digits before the point.
///
/// ## Example
///
/// ```
/// let mut buf = [0u8; 32];
/// let len = fpconv::to_fixed_f64(123.456, 2, &mut buf).unwrap();
/// assert_eq!(&buf[.. len], b"123.46");
/// ```
pub fn to_fixed_f64(value: f64, precision: u32, buf: &mut [u8]) -> Result<usize, ConversionError> {
    to_fixed(value, precision, buf)
}

/// Like [to_fixed_f64], for the exact value of an `f32`.
pub fn to_fixed_f32(value: f32, precision: u32, buf: &mut [u8]) -> Result<usize, ConversionError> {
    to_fixed(value, precision, buf)
}

/// Writes `value` with `precision` digits after the decimal point; see [to_fixed_f64].
pub fn to_fixed<F: Float>(value: F, precision: u32, buf: &mut [u8]) -> Result<usize, ConversionError> {
    let mut w = Writer::new(buf);
    value.write_fixed(precision, &mut w)?;
    Ok(w.len())
}

/// Safe API for formatting floating point numbers to text, in a buffer always large enough for the
/// shortest representation.
///
/// ## Example
///
/// ```
/// let mut buffer = fpconv::Buffer::new();
/// let printed = buffer.format(1.234e-5f64);
/// assert_eq!(printed, "1.234E-5");
/// ```
#[derive(Clone, Copy)]
pub struct Buffer<F: Float> {
    bytes: F::Buffer,
}

impl<F: Float> Buffer<F> {
    /// This is a cheap operation; you don't need to worry about reusing buffers for efficiency.
    pub fn new() -> Self {
        Buffer { bytes: F::new_buffer() }
    }

    /// Print a floating point `num` into this buffer, and return a reference to its shortest
    /// representation within the buffer, as written by [to_shortest].
    ///
    /// This function formats NaN as the string `"NaN"`, positive infinity as `"inf"`, and negative
    /// infinity as `"-inf"`, to match [core::fmt].
    ///
    /// If `num` is known to be finite, you may get better performance by calling the
    /// [Self::format_finite] method instead of format to avoid the checks for special cases.
    pub fn format(&mut self, num: F) -> &str {
        let mut w = Writer::new(self.bytes.as_mut());
        let written = conv::write_shortest(num, &mut w);
        // The buffer is sized for the longest output.
        debug_assert!(written.is_ok());
        let n = written.map_or(0, |()| w.len());
        // SAFETY: the formatter only writes ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.bytes.as_ref()[.. n]) }
    }

    /// Print a floating point `num` into this buffer, and return a reference to its shortest
    /// representation within the buffer, **provided that `num.is_finite()`**.
    ///
    /// This function **does not** check that `num` is indeed finite, for performance reasons; in
    /// this case it will print an unspecified (but valid) string.
    pub fn format_finite(&mut self, num: F) -> &str {
        let mut w = Writer::new(self.bytes.as_mut());
        let written = conv::write_shortest_finite(num, &mut w);
        // The buffer is sized for the longest output.
        debug_assert!(written.is_ok());
        let n = written.map_or(0, |()| w.len());
        // SAFETY: the formatter only writes ASCII.
        unsafe { core::str::from_utf8_unchecked(&self.bytes.as_ref()[.. n]) }
    }
}

impl<F: Float> Default for Buffer<F> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn shortest_f32(value: f32) -> String {
        Buffer::new().format(value).to_owned()
    }

    fn shortest_f64(value: f64) -> String {
        Buffer::new().format(value).to_owned()
    }

    fn fixed_f64(value: f64, precision: u32) -> String {
        let mut buf = [0u8; 512];
        let len = to_fixed_f64(value, precision, &mut buf).unwrap();
        String::from_utf8(buf[.. len].to_vec()).unwrap()
    }

    #[test]
    fn parse_examples() {
        assert_eq!(parse_f32(b"1"), Ok(1.0));
        assert_eq!(parse_f32(b"8388608"), Ok(8388608.0));
        assert_eq!(parse_f64(b"123.456"), Ok(123.456));
        assert_eq!(parse_f64(b"-0.000001"), Ok(-1e-6));
        assert_eq!(parse_f64(b"9007199254740993"), Ok(9007199254740992.0));
        assert_eq!(parse_f64(b"9007199254740995"), Ok(9007199254740996.0));
        assert_eq!(parse_f32(b"16777217"), Ok(16777216.0));
        assert_eq!(parse_f32(b"3.4028236"), Ok(3.4028236));
        assert_eq!(parse::<f64>("100000000000000000000000"), Ok(1e23));
        assert_eq!(parse::<f32>(String::from("0.1")), Ok(0.1));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(parse_f64(b""), Err(ParseError::InputEmpty));
        assert_eq!(parse_f32(b"1.2.3"), Err(ParseError::InputHasMultipleDots));
        assert_eq!(parse_f64(b"12a"), Err(ParseError::InputHasInvalidSymbol));
        assert_eq!(parse_f64(b"1e5"), Err(ParseError::InputHasInvalidSymbol));
        assert_eq!(parse_f64(b"12345678901234567891"), Err(ParseError::InputNumberTooLarge));
        assert_eq!(parse_f32(b"1234567891"), Err(ParseError::InputNumberTooLarge));
        assert_eq!(parse_f32(b"123456789"), Ok(123456789.0));
        assert_eq!(parse_f64(b"1234567890123456789"), Ok(1234567890123456789.0));
        // Trailing zeros are not significant.
        assert_eq!(parse_f64(b"12345678901234567890"), Ok(12345678901234567890.0));
    }

    #[test]
    fn parse_signed_zeros() {
        assert_eq!(parse_f64(b"-0").map(f64::to_bits), Ok((-0.0f64).to_bits()));
        assert_eq!(parse_f32(b"-0").map(f32::to_bits), Ok((-0.0f32).to_bits()));
        assert_eq!(parse_f64(b"0.0").map(f64::to_bits), Ok(0));
    }

    #[test]
    fn error_messages() {
        assert_eq!(ParseError::InputHasMultipleDots.to_string(), "input has more than one decimal point");
        assert_eq!(ConversionError::OutputBufferTooSmall.to_string(), "output buffer too small");
    }

    #[test]
    fn shortest_examples() {
        assert_eq!(shortest_f32(8388608.0), "8.388608E6");
        assert_eq!(shortest_f64(200.0), "2E2");
        assert_eq!(shortest_f64(1.0), "1");
        assert_eq!(shortest_f64(-0.1), "-1E-1");
        assert_eq!(shortest_f64(0.3), "3E-1");
        assert_eq!(shortest_f64(0.1 + 0.2), "3.0000000000000004E-1");
        assert_eq!(shortest_f32(0.1 + 0.2), "3E-1");
        assert_eq!(shortest_f64(f64::MAX), "1.7976931348623157E308");
        assert_eq!(shortest_f64(f64::MIN_POSITIVE), "2.2250738585072014E-308");
        assert_eq!(shortest_f64(-f64::MIN_POSITIVE), "-2.2250738585072014E-308");
        assert_eq!(shortest_f64(f64::from_bits(1)), "5E-324");
        assert_eq!(shortest_f32(f32::MAX), "3.4028235E38");
        assert_eq!(shortest_f32(-f32::MIN_POSITIVE), "-1.1754944E-38");
        assert_eq!(shortest_f32(f32::from_bits(1)), "1E-45");
    }

    #[test]
    fn shortest_specials() {
        assert_eq!(shortest_f64(0.0), "0");
        assert_eq!(shortest_f64(-0.0), "-0");
        assert_eq!(shortest_f32(-0.0), "-0");
        assert_eq!(shortest_f64(f64::NAN), "NaN");
        assert_eq!(shortest_f32(f32::INFINITY), "inf");
        assert_eq!(shortest_f64(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn buffer_format_finite() {
        let mut buffer = Buffer::new();
        assert_eq!(buffer.format_finite(-2.5f32), "-2.5");
        assert_eq!(buffer.format_finite(0.0f32), "0");
        let mut buffer = Buffer::<f64>::default();
        assert_eq!(buffer.format_finite(-1.7976931348623157e308), "-1.7976931348623157E308");
        assert_eq!(buffer.format(-1.7976931348623157e308), "-1.7976931348623157E308");
    }

    #[test]
    fn shortest_capacity() {
        let mut buf = [0u8; 10];
        assert_eq!(to_shortest_f32(8388608.0, &mut buf), Ok(10));
        assert_eq!(&buf, b"8.388608E6");
        assert_eq!(to_shortest_f32(8388608.0, &mut buf[.. 9]), Err(ConversionError::OutputBufferTooSmall));
        assert_eq!(to_shortest_f64(f64::NEG_INFINITY, &mut buf[.. 3]), Err(ConversionError::OutputBufferTooSmall));
        assert_eq!(to_shortest_f64(0.0, &mut []), Err(ConversionError::OutputBufferTooSmall));
    }

    fn check_shortest_capacity<F: Float>(value: F, expected: &str) {
        let len = expected.len();
        let mut buf = [0u8; 8];
        for cap in 0 .. len {
            assert_eq!(to_shortest(value, &mut buf[.. cap]), Err(ConversionError::OutputBufferTooSmall), "{expected} in {cap}");
        }
        assert_eq!(to_shortest(value, &mut buf[.. len]), Ok(len));
        assert_eq!(&buf[.. len], expected.as_bytes());
    }

    #[test]
    fn shortest_capacity_specials() {
        for (value, expected) in [(f32::NAN, "NaN"), (f32::INFINITY, "inf"), (f32::NEG_INFINITY, "-inf"), (0.0, "0"), (-0.0, "-0")] {
            check_shortest_capacity(value, expected);
            let mut buf = [0u8; 4];
            for cap in 0 .. expected.len() {
                assert_eq!(to_shortest_f32(value, &mut buf[.. cap]), Err(ConversionError::OutputBufferTooSmall));
            }
            assert_eq!(to_shortest_f32(value, &mut buf[.. expected.len()]), Ok(expected.len()));
        }
        for (value, expected) in [(f64::NAN, "NaN"), (f64::INFINITY, "inf"), (f64::NEG_INFINITY, "-inf"), (0.0, "0"), (-0.0, "-0")] {
            check_shortest_capacity(value, expected);
            let mut buf = [0u8; 4];
            for cap in 0 .. expected.len() {
                assert_eq!(to_shortest_f64(value, &mut buf[.. cap]), Err(ConversionError::OutputBufferTooSmall));
            }
            assert_eq!(to_shortest_f64(value, &mut buf[.. expected.len()]), Ok(expected.len()));
        }
    }

    #[test]
    fn buffer_fits_longest() {
        let longest = Buffer::new().format(-2.2250738585072014e-308f64).len();
        assert_eq!(longest, 24);
        assert_eq!(Buffer::new().format(-f32::MIN_POSITIVE), "-1.1754944E-38");
        assert_eq!(Buffer::new().format_finite(-2.2250738585072014e-308f64), "-2.2250738585072014E-308");
    }

    #[test]
    fn fixed_examples() {
        assert_eq!(fixed_f64(123.456, 2), "123.46");
        assert_eq!(fixed_f64(0.5, 0), "0");
        assert_eq!(fixed_f64(1.5, 0), "2");
        assert_eq!(fixed_f64(2.5, 0), "2");
        assert_eq!(fixed_f64(3.5, 0), "4");
        assert_eq!(fixed_f64(1729.142857142857, 2), "1729.14");
        assert_eq!(fixed_f64(9.9999, 3), "10.000");
        assert_eq!(fixed_f64(-0.0, 2), "-0.00");
        assert_eq!(fixed_f64(1e-7, 3), "0.000");
        assert_eq!(fixed_f64(f64::NAN, 2), "NaN");

        let mut buf = [0u8; 16];
        assert_eq!(to_fixed_f32(0.1, 10, &mut buf), Ok(12));
        assert_eq!(&buf[.. 12], b"0.1000000015");
    }

    #[test]
    fn fixed_capacity() {
        let mut buf = [0u8; 6];
        assert_eq!(to_fixed_f64(123.456, 2, &mut buf), Ok(6));
        assert_eq!(to_fixed_f64(123.456, 2, &mut buf[.. 5]), Err(ConversionError::OutputBufferTooSmall));
        assert_eq!(to_fixed_f64(9.9999, 3, &mut buf[.. 5]), Err(ConversionError::OutputBufferTooSmall));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100_000))]

        #[test]
        fn roundtrip_f64(bits in any::<u64>()) {
            let num = f64::from_bits(bits);
            prop_assume!(!num.is_nan());
            let s = shortest_f64(num);
            let refloat: f64 = s.parse().unwrap();
            assert_eq!(refloat.to_bits(), num.to_bits(), "{}", s);
        }

        #[test]
        fn roundtrip_f32(bits in any::<u32>()) {
            let num = f32::from_bits(bits);
            prop_assume!(!num.is_nan());
            let s = shortest_f32(num);
            let refloat: f32 = s.parse().unwrap();
            assert_eq!(refloat.to_bits(), num.to_bits(), "{}", s);
        }

        #[test]
        fn buffer_matches_slice_f32(bits in any::<u32>()) {
            let num = f32::from_bits(bits);
            let mut buf = [0u8; 32];
            let len = to_shortest_f32(num, &mut buf).unwrap();
            assert!(len <= 16);
            assert_eq!(Buffer::new().format(num).as_bytes(), &buf[.. len]);
        }

        #[test]
        fn buffer_matches_slice_f64(bits in any::<u64>()) {
            let num = f64::from_bits(bits);
            let mut buf = [0u8; 32];
            let len = to_shortest_f64(num, &mut buf).unwrap();
            assert!(len <= 24);
            assert_eq!(Buffer::new().format(num).as_bytes(), &buf[.. len]);
        }

        #[test]
        fn fixed_f32_widens(bits in any::<u32>(), precision in 0u32 .. 30) {
            let num = f32::from_bits(bits);
            prop_assume!(num.is_finite());
            let mut a = [0u8; 128];
            let mut b = [0u8; 128];
            let len = to_fixed_f32(num, precision, &mut a).unwrap();
            assert_eq!(to_fixed_f64(num as f64, precision, &mut b), Ok(len));
            assert_eq!(a, b);
        }
    }
}
