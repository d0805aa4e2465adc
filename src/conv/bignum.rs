//! A fixed-capacity unsigned big integer, for the few places where the conversion has to be exact.
//!
//! The capacity (40 digits of 32 bits) covers the largest quantities either direction needs: a
//! scaled `f64` mantissa against `2^1074` or `10^309`, times the small factors used while
//! extracting digits. Exceeding it is a bug in the caller and panics.

use core::cmp::Ordering;

type Digit = u32;

const DIGIT_BITS: usize = Digit::BITS as usize;

/// Number of digits.
const N: usize = 40;

/// The largest power of 5 that fits a digit, `5^13`.
const LARGEST_POW5: Digit = 1220703125;

#[derive(Clone, Copy)]
pub struct Big {
    /// `base[size..]` is known to be zero.
    size: usize,
    /// `[a, b, c, ...]` represents `a + b * 2^32 + c * 2^64 + ...`.
    base: [Digit; N],
}

impl Big {
    pub const fn from_u64(mut v: u64) -> Self {
        let mut base = [0; N];
        let mut size = 0;
        while v > 0 {
            base[size] = v as Digit;
            v >>= DIGIT_BITS;
            size += 1;
        }
        Big { size, base }
    }

    pub fn is_zero(&self) -> bool {
        self.base[.. self.size].iter().all(|&d| d == 0)
    }

    pub fn add(&mut self, other: &Big) -> &mut Self {
        let mut size = self.size.max(other.size);
        let mut carry = false;
        for (a, &b) in self.base[.. size].iter_mut().zip(&other.base[.. size]) {
            let (v, c1) = a.overflowing_add(b);
            let (v, c2) = v.overflowing_add(carry as Digit);
            *a = v;
            carry = c1 || c2;
        }
        if carry {
            self.base[size] = 1;
            size += 1;
        }
        self.size = size;
        self
    }

    /// Subtracts `other`, which must not be larger than `self`.
    pub fn sub(&mut self, other: &Big) -> &mut Self {
        let size = self.size.max(other.size);
        let mut borrow = false;
        for (a, &b) in self.base[.. size].iter_mut().zip(&other.base[.. size]) {
            let (v, b1) = a.overflowing_sub(b);
            let (v, b2) = v.overflowing_sub(borrow as Digit);
            *a = v;
            borrow = b1 || b2;
        }
        assert!(!borrow, "bignum subtraction underflow");
        self.size = size;
        self
    }

    pub fn mul_small(&mut self, other: Digit) -> &mut Self {
        let mut size = self.size;
        let mut carry = 0;
        for a in &mut self.base[.. size] {
            let v = *a as u64 * other as u64 + carry as u64;
            *a = v as Digit;
            carry = (v >> DIGIT_BITS) as Digit;
        }
        if carry > 0 {
            self.base[size] = carry;
            size += 1;
        }
        self.size = size;
        self
    }

    pub fn mul_pow2(&mut self, bits: usize) -> &mut Self {
        let digits = bits / DIGIT_BITS;
        let bits = bits % DIGIT_BITS;
        if self.size == 0 {
            return self
        }
        assert!(self.size + digits <= N, "bignum overflow");

        // shift by `digits * DIGIT_BITS` bits
        self.base.copy_within(0 .. self.size, digits);
        self.base[.. digits].fill(0);

        // shift by `bits` bits
        let mut size = self.size + digits;
        if bits > 0 {
            let last = size;
            let overflow = self.base[last - 1] >> (DIGIT_BITS - bits);
            if overflow > 0 {
                self.base[last] = overflow;
                size += 1;
            }
            for i in (digits + 1 .. last).rev() {
                self.base[i] = (self.base[i] << bits) | (self.base[i - 1] >> (DIGIT_BITS - bits));
            }
            self.base[digits] <<= bits;
        }
        self.size = size;
        self
    }

    pub fn mul_pow5(&mut self, mut e: usize) -> &mut Self {
        while e >= 13 {
            self.mul_small(LARGEST_POW5);
            e -= 13;
        }
        self.mul_small(5u32.pow(e as u32))
    }

    pub fn mul_pow10(&mut self, e: usize) -> &mut Self {
        self.mul_pow5(e).mul_pow2(e)
    }

    /// Divides `self` by `scale`, assuming the quotient is below 10, and leaves the remainder in
    /// `self`. `scales` holds `scale`, `2 * scale`, `4 * scale`, `8 * scale`.
    pub fn div_rem_digit(&mut self, scales: &[Big; 4]) -> u8 {
        let mut d = 0;
        for (i, scale) in scales.iter().enumerate().rev() {
            if *self >= *scale {
                self.sub(scale);
                d += 1 << i;
            }
        }
        debug_assert!(d < 10 && *self < scales[0]);
        d
    }
}

impl PartialEq for Big {
    fn eq(&self, other: &Big) -> bool {
        self.base == other.base
    }
}

impl Eq for Big {}

impl PartialOrd for Big {
    fn partial_cmp(&self, other: &Big) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Big {
    fn cmp(&self, other: &Big) -> Ordering {
        let size = self.size.max(other.size);
        let lhs = self.base[.. size].iter().rev();
        let rhs = other.base[.. size].iter().rev();
        lhs.cmp(rhs)
    }
}

impl core::fmt::Debug for Big {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let size = self.size.max(1);
        write!(f, "{:#x}", self.base[size - 1])?;
        for d in self.base[.. size - 1].iter().rev() {
            write!(f, "_{:08x}", d)?;
        }
        Ok(())
    }
}

/// Compares `m10 * 10^e10` against the binary halfway point `(2 * q + 1) * 2^e2`, exactly.
///
/// Used when parsing, when the fast path cannot tell on which side of a halfway point the decimal
/// input lies. Both sides are scaled to integers before comparing.
pub fn cmp_halfway(m10: u64, e10: i32, q: u64, e2: i32) -> Ordering {
    let mut decimal = Big::from_u64(m10);
    let mut halfway = Big::from_u64(2 * q + 1);
    if e10 >= 0 {
        decimal.mul_pow5(e10 as usize);
    } else {
        halfway.mul_pow5(e10.unsigned_abs() as usize);
    }
    // The common factor 2^min(e10, e2) cancels.
    if e10 >= e2 {
        decimal.mul_pow2((e10 - e2) as usize);
    } else {
        halfway.mul_pow2((e2 - e10) as usize);
    }
    decimal.cmp(&halfway)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(v: u64) -> Big {
        Big::from_u64(v)
    }

    #[test]
    fn test_add() {
        assert_eq!(*big(3).add(&big(4)), big(7));
        assert_eq!(*big(3).add(&big(0)), big(3));
        assert_eq!(*big(0).add(&big(3)), big(3));
        assert_eq!(*big(3).add(&big(0xffff_fffe)), big(0x1_0000_0001));
        assert_eq!(*big(u64::MAX).add(&big(1)), *big(1).mul_pow2(64));
    }

    #[test]
    fn test_sub() {
        assert_eq!(*big(7).sub(&big(4)), big(3));
        assert_eq!(*big(0x1_0000_0665).sub(&big(0x789)), big(0xffff_fedc));
        assert_eq!(*big(0x1_0000_0665).sub(&big(0x1_0000_0665)), big(0));
        assert!(big(0x1_0000_0665).sub(&big(0x1_0000_0665)).is_zero());
    }

    #[test]
    #[should_panic]
    fn test_sub_underflow() {
        big(0x1_0000_0665).sub(&big(0x1_0000_0666));
    }

    #[test]
    fn test_mul_small() {
        assert_eq!(*big(7).mul_small(5), big(35));
        assert_eq!(*big(0xffff_ffff).mul_small(0xffff_ffff), big(0xffff_fffe_0000_0001));
        assert_eq!(*big(0).mul_small(13), big(0));
    }

    #[test]
    fn test_mul_pow2() {
        assert_eq!(*big(0x7).mul_pow2(4), big(0x70));
        assert_eq!(*big(0xff).mul_pow2(1), big(0x1fe));
        assert_eq!(*big(0x123).mul_pow2(0), big(0x123));
        assert_eq!(*big(0x123).mul_pow2(33), big(0x246_0000_0000));
        assert_eq!(*big(0).mul_pow2(100), big(0));
        assert_eq!(*big(1).mul_pow2(63), big(1 << 63));
        assert_eq!(*big(3).mul_pow2(1200).mul_pow2(75), *big(3).mul_pow2(1275));
    }

    #[test]
    #[should_panic]
    fn test_mul_pow2_overflow() {
        big(1).mul_pow2(N * DIGIT_BITS);
    }

    #[test]
    fn test_mul_pow5_pow10() {
        assert_eq!(*big(1).mul_pow5(27), big(5u64.pow(27)));
        assert_eq!(*big(3).mul_pow10(18), big(3 * 10u64.pow(18)));
        let mut lhs = big(1);
        lhs.mul_pow5(40);
        let mut rhs = big(5u64.pow(20));
        rhs.mul_small(5u32.pow(10)).mul_small(5u32.pow(10));
        assert_eq!(lhs, rhs);
    }

    #[test]
    fn test_ord() {
        assert!(big(0) < big(0xffffff));
        assert!(big(0x102) < big(0x201));
        assert!(big(1 << 40) > big(u32::MAX as u64));
        // Sizes differ after a subtraction clears the top digit.
        let mut a = big(1 << 40);
        a.sub(&big((1 << 40) - 5));
        assert_eq!(a, big(5));
        assert_eq!(a.cmp(&big(5)), Ordering::Equal);
    }

    #[test]
    fn test_div_rem_digit() {
        let scale = big(1000);
        let scales = [scale, big(2000), big(4000), big(8000)];
        let mut num = big(9999);
        assert_eq!(num.div_rem_digit(&scales), 9);
        assert_eq!(num, big(999));
        let mut num = big(999);
        assert_eq!(num.div_rem_digit(&scales), 0);
        assert_eq!(num, big(999));
    }

    #[test]
    fn test_fmt() {
        assert_eq!(format!("{:?}", big(0)), "0x0");
        assert_eq!(format!("{:?}", big(0x12)), "0x12");
        assert_eq!(format!("{:?}", big(0x1_2345_6789)), "0x1_23456789");
    }

    #[test]
    fn test_cmp_halfway() {
        // 0.5 = 1 * 2^-1
        assert_eq!(cmp_halfway(5, -1, 0, -1), Ordering::Equal);
        assert_eq!(cmp_halfway(6, -1, 0, -1), Ordering::Greater);
        assert_eq!(cmp_halfway(4, -1, 0, -1), Ordering::Less);
        // 2^53 + 1 = 9007199254740993, halfway between 2^53 and 2^53 + 2.
        assert_eq!(cmp_halfway(9007199254740993, 0, 1 << 52, 0), Ordering::Equal);
        // 1e23 is exactly halfway between its two f64 neighbours.
        assert_eq!(cmp_halfway(1, 23, 0x152d02c7e14af6, 23), Ordering::Equal);
        assert_eq!(cmp_halfway(10000000000000000001, 4, 0x152d02c7e14af6, 23), Ordering::Greater);
        // The smallest subnormal halfway point is 2^-1075 = 2.4703...e-324.
        assert_eq!(cmp_halfway(247, -326, 0, -1075), Ordering::Less);
        assert_eq!(cmp_halfway(248, -326, 0, -1075), Ordering::Greater);
    }
}
