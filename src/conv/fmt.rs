//! Routines for actually writing numbers as strings, into caller-owned buffers.

use crate::ConversionError;

const DIGITS_LUT: &[u8; 200] =
    b"00010203040506070809\
      10111213141516171819\
      20212223242526272829\
      30313233343536373839\
      40414243444546474849\
      50515253545556575859\
      60616263646566676869\
      70717273747576777879\
      80818283848586878889\
      90919293949596979899";

const POW10: [u64; 20] = {
    let mut table = [1u64; 20];
    let mut i = 1;
    while i < 20 {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// Number of decimal digits of `x`, counting `0` as one digit.
///
/// `1233 / 2^12 ≈ log10(2)` turns the bit length into a digit count that is at most one short,
/// which a single comparison against a power of ten corrects.
#[inline]
pub const fn digit_count(x: u64) -> u32 {
    let bits = u64::BITS - (x | 1).leading_zeros();
    let t = (bits * 1233) >> 12;
    t + ((x | 1) >= POW10[t as usize]) as u32
}

/// Writes the decimal digits of `x` to the front of `out`, left-padded with zeros to at least
/// `width` digits, and returns how many bytes were written.
pub fn int_to_digits(mut x: u64, out: &mut [u8], width: usize) -> Result<usize, ConversionError> {
    let len = (digit_count(x) as usize).max(width);
    let out = out.get_mut(..len).ok_or(ConversionError::OutputBufferTooSmall)?;

    let mut pos = len;
    while x >= 100 {
        let pair = (x % 100) as usize * 2;
        x /= 100;
        pos -= 2;
        out[pos .. pos + 2].copy_from_slice(&DIGITS_LUT[pair .. pair + 2]);
    }
    if x >= 10 {
        let pair = x as usize * 2;
        pos -= 2;
        out[pos .. pos + 2].copy_from_slice(&DIGITS_LUT[pair .. pair + 2]);
    } else {
        pos -= 1;
        out[pos] = b'0' + x as u8;
    }
    out[.. pos].fill(b'0');
    Ok(len)
}

/// A cursor over a caller-supplied output buffer. Every write checks the remaining capacity first
/// and fails with [ConversionError::OutputBufferTooSmall] instead of writing past the end.
pub struct Writer<'a> {
    buf: &'a mut [u8],
    len: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Writer { buf, len: 0 }
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// The bytes written so far.
    #[inline]
    pub fn written_mut(&mut self) -> &mut [u8] {
        &mut self.buf[.. self.len]
    }

    #[inline]
    pub fn push(&mut self, byte: u8) -> Result<(), ConversionError> {
        let slot = self.buf.get_mut(self.len).ok_or(ConversionError::OutputBufferTooSmall)?;
        *slot = byte;
        self.len += 1;
        Ok(())
    }

    pub fn push_str(&mut self, bytes: &[u8]) -> Result<(), ConversionError> {
        let end = self.len + bytes.len();
        let dst = self.buf.get_mut(self.len .. end).ok_or(ConversionError::OutputBufferTooSmall)?;
        dst.copy_from_slice(bytes);
        self.len = end;
        Ok(())
    }

    /// Writes `n` zero digits.
    pub fn push_zeros(&mut self, n: usize) -> Result<(), ConversionError> {
        let end = self.len.checked_add(n).ok_or(ConversionError::OutputBufferTooSmall)?;
        let dst = self.buf.get_mut(self.len .. end).ok_or(ConversionError::OutputBufferTooSmall)?;
        dst.fill(b'0');
        self.len = end;
        Ok(())
    }

    /// Writes the decimal digits of `x`.
    pub fn push_u64(&mut self, x: u64) -> Result<(), ConversionError> {
        let n = int_to_digits(x, &mut self.buf[self.len ..], 0)?;
        self.len += n;
        Ok(())
    }

    /// Inserts `byte` at position `at`, shifting the bytes after it one place to the right.
    pub fn insert(&mut self, at: usize, byte: u8) -> Result<(), ConversionError> {
        debug_assert!(at <= self.len);
        if self.len >= self.buf.len() {
            return Err(ConversionError::OutputBufferTooSmall)
        }
        self.buf.copy_within(at .. self.len, at + 1);
        self.buf[at] = byte;
        self.len += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn digits(x: u64, width: usize) -> String {
        let mut buf = [0u8; 40];
        let n = int_to_digits(x, &mut buf, width).unwrap();
        String::from_utf8(buf[.. n].to_vec()).unwrap()
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(1), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(u64::MAX), 20);
        for k in 1 .. 20 {
            let p = 10u64.pow(k);
            assert_eq!(digit_count(p - 1), k);
            assert_eq!(digit_count(p), k + 1);
        }
        for k in 0 .. 64 {
            let p = 1u64 << k;
            assert_eq!(digit_count(p) as usize, p.to_string().len());
            assert_eq!(digit_count(p - 1) as usize, (p - 1).to_string().len());
        }
    }

    #[test]
    fn test_int_to_digits() {
        assert_eq!(digits(0, 0), "0");
        assert_eq!(digits(7, 0), "7");
        assert_eq!(digits(10, 0), "10");
        assert_eq!(digits(61295, 0), "61295");
        assert_eq!(digits(u64::MAX, 0), "18446744073709551615");
        assert_eq!(digits(42, 5), "00042");
        assert_eq!(digits(0, 3), "000");
        assert_eq!(digits(12345, 2), "12345");
    }

    #[test]
    fn int_to_digits_capacity() {
        let mut buf = [0u8; 4];
        assert_eq!(int_to_digits(12345, &mut buf, 0), Err(ConversionError::OutputBufferTooSmall));
        assert_eq!(int_to_digits(1234, &mut buf, 0), Ok(4));
        assert_eq!(int_to_digits(1, &mut buf, 5), Err(ConversionError::OutputBufferTooSmall));
        assert_eq!(&buf, b"1234");
    }

    #[test]
    fn writer() {
        let mut buf = [0u8; 8];
        let mut w = Writer::new(&mut buf);
        w.push(b'-').unwrap();
        w.push_u64(123).unwrap();
        w.push_str(b".5").unwrap();
        assert_eq!(w.len(), 6);
        assert_eq!(w.push_zeros(3), Err(ConversionError::OutputBufferTooSmall));
        assert_eq!(w.len(), 6);
        w.insert(1, b'9').unwrap();
        assert_eq!(w.written_mut(), b"-9123.5");
        w.push(b'0').unwrap();
        assert_eq!(w.push(b'0'), Err(ConversionError::OutputBufferTooSmall));
        assert_eq!(w.insert(0, b'1'), Err(ConversionError::OutputBufferTooSmall));
        assert_eq!(&buf, b"-9123.50");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200_000))]

        #[test]
        fn proptest_digits(x in any::<u64>()) {
            let std = format!("{x}");
            assert_eq!(digit_count(x) as usize, std.len());
            assert_eq!(digits(x, 0), std);
        }

        #[test]
        fn proptest_padded(x in 0u64 .. 1 << 40, width in 0usize .. 30) {
            assert_eq!(digits(x, width), format!("{x:0width$}"));
        }
    }
}
