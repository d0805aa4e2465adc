macro_rules! mk_impl { (
    float = $f:ident,
    mant = $mant:ident,
    wide = $wide:ident,
    lut = $lut:ident,
    mul_shift = $mul_shift:path,
    zero_cutoff = $zero_cutoff:literal,
    inf_cutoff = $inf_cutoff:literal,
) => {

use core::cmp::Ordering;

use crate::{ConversionError, ParseError};
use crate::conv::{bignum, common, fmt};
use crate::conv::lut::$lut as lut;

/// The mantissa is represented by an unsigned integer the same size as the float (in this case,
/// $mant for $f).
pub type Mant = $mant;
/// Twice as wide as [Mant], for products with table entries.
pub type Wide = $wide;
pub type Exp = common::Exp;

/// The **absolute value** of a finite `$f` decoded into exponent and mantissa, `mant * 2^exp`.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Binary {
    pub exp: Exp,
    pub mant: Mant,
}

/// A decimal number `mant * 10^exp`: either a scanned literal on its way to a `$f`, or the
/// shortest representation of a `$f` on its way to text.
#[derive(Debug)]
#[derive(Clone, Copy)]
#[derive(PartialEq, Eq)]
pub struct Decimal {
    pub exp: Exp,
    pub mant: Mant,
}

/// Returns the lowest `n` bits of `x`.
pub const fn lsb(x: Mant, n: u32) -> Mant {
    x % (1 << n)
}

/// Checks if `n` is an even number, in which case a mantissa of `n` wins the tiebreak against its
/// neighbours (in a "round to nearest, ties to even" rounding rule).
#[inline]
pub const fn is_even(n: Mant) -> bool {
    n % 2 == 0
}

/// `$mul_shift`, for results known to fit a [Mant].
#[inline]
fn mul_shift(m: Mant, mult: &common::Multiplier<Mant>, j: Exp) -> Mant {
    let result = $mul_shift(m, mult, j);
    debug_assert!(result <= Mant::MAX as Wide);
    result as Mant
}

#[inline]
fn saturate(x: Wide) -> Mant {
    Mant::try_from(x).unwrap_or(Mant::MAX)
}

impl Binary {
    /// Number of bits in precision of the mantissa, including the implicit `1.`.
    const BITS_MANTISSA: u32 = $f::MANTISSA_DIGITS;

    /// Number of bits of the mantissa that are actually stored.
    const BITS_MANTISSA_EXPLICIT: u32 = Self::BITS_MANTISSA - 1;

    /// Number of bits of the biased exponent field.
    const BITS_EXPONENT: u32 = Mant::BITS - Self::BITS_MANTISSA;

    const BIAS: Exp = $f::MAX_EXP - 1;

    /// The exponent bias, including the implicit factor of `2 ^ Self::BITS_MANTISSA` from treating
    /// the mantissa as a fixed-point decimal.
    const MIN_EXP: Exp = $f::MIN_EXP - Self::BITS_MANTISSA as i32;

    /// 1 + the maximum mantissa value storable in a float.
    const MAX_MANT: Mant = 1 << Self::BITS_MANTISSA_EXPLICIT;

    /// The biased exponent shared by infinities and NaNs.
    const MAX_BIASED_EXP: Exp = (1 << Self::BITS_EXPONENT) - 1;

    pub const INFINITY_BITS: Mant = (Self::MAX_BIASED_EXP as Mant) << Self::BITS_MANTISSA_EXPLICIT;

    /// Largest `q` for which `4 * mant` can be a multiple of `5^q`.
    const MAX_POW5_FACTOR: Exp = {
        let mut q = 0;
        let mut pow5: u64 = 5;
        while pow5 < 1 << (Self::BITS_MANTISSA + 2) {
            pow5 *= 5;
            q += 1;
        }
        q
    };

    /// Decomposes a **finite** `$f` into the binary exponent and mantissa of its absolute
    /// value, i.e. such that `|num| = mant * 2^exp`.
    ///
    /// If `num` is infinite or NaN, returns an unspecified value; this is not checked except in
    /// debug assertions.
    #[inline]
    pub const fn new(num: $f) -> Self {
        debug_assert!(num.is_finite());

        let num = num.abs();
        let mut mant = lsb(num.to_bits(), Self::BITS_MANTISSA_EXPLICIT);
        let mut exp = (num.to_bits() >> Self::BITS_MANTISSA_EXPLICIT) as Exp;

        if exp != 0 {
            exp -= 1;
            mant |= 1 << Self::BITS_MANTISSA_EXPLICIT;
        }

        Binary{
            exp: exp + Self::MIN_EXP,
            mant,
        }
    }

    /// Packs `self` into the bits of a positive `$f`; the inverse of [Binary::new]. A mantissa
    /// that overflowed by one bit when rounding carries into the exponent, and exponents past the
    /// largest finite one give infinity.
    #[inline]
    pub const fn to_bits(self) -> Mant {
        let Binary { mut exp, mut mant } = self;
        if mant >> Self::BITS_MANTISSA != 0 {
            debug_assert!(mant >> Self::BITS_MANTISSA == 1);
            mant >>= 1;
            exp += 1;
        }
        if mant < Self::MAX_MANT {
            debug_assert!(exp == Self::MIN_EXP);
            return mant
        }
        let biased = exp - Self::MIN_EXP + 1;
        if biased >= Self::MAX_BIASED_EXP {
            return Self::INFINITY_BITS
        }
        (biased as Mant) << Self::BITS_MANTISSA_EXPLICIT | lsb(mant, Self::BITS_MANTISSA_EXPLICIT)
    }

    /// Whether the neighbours of `self` are equidistant from it. They are not only when `self` is
    /// a power of two and the float below it has a smaller exponent.
    #[inline]
    const fn is_centered(&self) -> bool {
        self.mant != Self::MAX_MANT || self.exp == Self::MIN_EXP
    }

    /// Finds the shortest decimal that rounds back to `self`, or among those of that length, the
    /// closest one (ties to even). `self` must be nonzero.
    ///
    /// The rounding interval of `self` is scaled to a power of ten by a table multiplier, then
    /// digits are removed while its ends still differ. Divisibility checks track whether the
    /// removed digits were all zero, which decides if an end of the interval is attainable and
    /// how a removed `5` rounds.
    pub fn shortest(self) -> Decimal {
        debug_assert!(self.mant != 0);

        let e2 = self.exp - 2;
        let accept_bounds = is_even(self.mant);

        // The interval is `[mm, mp] * 2^e2`, around `mv * 2^e2`.
        let mv = 4 * self.mant;
        let mp = mv + 2;
        let mm_shift = self.is_centered() as Mant;
        let mm = mv - 1 - mm_shift;

        let mut vm_is_trailing_zeros = false;
        let mut vr_is_trailing_zeros = false;
        let mut last_removed_digit = 0u8;

        let (e10, mut vr, mut vp, mut vm);
        if e2 >= 0 {
            let q = common::exp_log10_pow2(e2);
            e10 = q;
            let k = lut::POW5_INV_BITCOUNT + common::pow5_bits(q) - 1;
            let i = -e2 + q + k;
            let mult = lut::POW5_INV_SPLIT.get(q);
            vr = mul_shift(mv, mult, i);
            vp = mul_shift(mp, mult, i);
            vm = mul_shift(mm, mult, i);
            if q != 0 && (vp - 1) / 10 <= vm / 10 {
                // The loop below stops before the last digit it would remove; get it here.
                let l = lut::POW5_INV_BITCOUNT + common::pow5_bits(q - 1) - 1;
                let mult = lut::POW5_INV_SPLIT.get(q - 1);
                last_removed_digit = ($mul_shift(mv, mult, -e2 + q - 1 + l) % 10) as u8;
            }
            if q <= Self::MAX_POW5_FACTOR {
                // Only one of mp, mv, mm can be a multiple of 5, if any.
                let q = q as u32;
                if mv % 5 == 0 {
                    vr_is_trailing_zeros = common::is_multiple_of_pow5(mv as u64, q);
                } else if accept_bounds {
                    vm_is_trailing_zeros = common::is_multiple_of_pow5(mm as u64, q);
                } else {
                    vp -= common::is_multiple_of_pow5(mp as u64, q) as Mant;
                }
            }
        } else {
            let q = common::exp_log10_pow5(-e2);
            e10 = q + e2;
            let i = -e2 - q;
            let k = common::pow5_bits(i) - lut::POW5_BITCOUNT;
            let j = q - k;
            let mult = lut::POW5_SPLIT.get(i);
            vr = mul_shift(mv, mult, j);
            vp = mul_shift(mp, mult, j);
            vm = mul_shift(mm, mult, j);
            if q != 0 && (vp - 1) / 10 <= vm / 10 {
                let j = q - 1 - (common::pow5_bits(i + 1) - lut::POW5_BITCOUNT);
                let mult = lut::POW5_SPLIT.get(i + 1);
                last_removed_digit = ($mul_shift(mv, mult, j) % 10) as u8;
            }
            if q <= 1 {
                // mv has at least two trailing zero bits, so {vr,vp,vm} all do.
                vr_is_trailing_zeros = true;
                if accept_bounds {
                    vm_is_trailing_zeros = mm_shift == 1;
                } else {
                    vp -= 1;
                }
            } else if q < Mant::BITS as Exp - 1 {
                vr_is_trailing_zeros = common::is_multiple_of_pow2(mv as u64, (q - 1) as u32);
            }
        }

        let mut removed: Exp = 0;
        let output = if vm_is_trailing_zeros || vr_is_trailing_zeros {
            while vp / 10 > vm / 10 {
                vm_is_trailing_zeros &= vm % 10 == 0;
                vr_is_trailing_zeros &= last_removed_digit == 0;
                last_removed_digit = (vr % 10) as u8;
                vr /= 10;
                vp /= 10;
                vm /= 10;
                removed += 1;
            }
            if vm_is_trailing_zeros {
                while vm % 10 == 0 {
                    vr_is_trailing_zeros &= last_removed_digit == 0;
                    last_removed_digit = (vr % 10) as u8;
                    vr /= 10;
                    vm /= 10;
                    removed += 1;
                }
            }
            if vr_is_trailing_zeros && last_removed_digit == 5 && is_even(vr) {
                // Exactly halfway: round to even.
                last_removed_digit = 4;
            }
            let round_up = (vr == vm && (!accept_bounds || !vm_is_trailing_zeros))
                || last_removed_digit >= 5;
            vr + round_up as Mant
        } else {
            while vp / 10 > vm / 10 {
                last_removed_digit = (vr % 10) as u8;
                vr /= 10;
                vp /= 10;
                vm /= 10;
                removed += 1;
            }
            vr + (vr == vm || last_removed_digit >= 5) as Mant
        };

        Decimal{ exp: e10 + removed, mant: output }
    }
}

impl Decimal {
    /// Largest number of significant digits that always fits a [Mant].
    const MAX_DIGITS: u32 = Mant::MAX.ilog10();

    /// Target bit length of the scaled binary mantissa when parsing: as many bits as the table
    /// precision allows while keeping the multiply-shift at least a word wide.
    const GUARD_TARGET: Exp = {
        let bits = if lut::POW5_BITCOUNT < lut::POW5_INV_BITCOUNT {
            lut::POW5_BITCOUNT
        } else {
            lut::POW5_INV_BITCOUNT
        };
        bits - 1 - Mant::BITS as Exp
    };

    /// Scans unsigned decimal digits, with at most one decimal point, into `mant * 10^exp`.
    ///
    /// Zeros after the last nonzero digit are kept out of `mant` and counted in `exp` instead, so
    /// only the digits between the first and last nonzero ones count toward [Self::MAX_DIGITS].
    pub fn parse(text: &[u8]) -> Result<Self, ParseError> {
        let mut mant: Mant = 0;
        let mut n_digits = 0u32;
        let mut trailing_zeros = 0u64;
        let mut n_fraction_digits = 0u64;
        let mut seen_point = false;
        let mut seen_digit = false;

        for &c in text {
            match c {
                b'0' ..= b'9' => {
                    seen_digit = true;
                    n_fraction_digits += seen_point as u64;
                    let d = (c - b'0') as Mant;
                    if d == 0 {
                        trailing_zeros += (mant != 0) as u64;
                    } else {
                        let n = n_digits as u64 + trailing_zeros + 1;
                        if n > Self::MAX_DIGITS as u64 {
                            return Err(ParseError::InputNumberTooLarge)
                        }
                        mant = mant * (10 as Mant).pow(trailing_zeros as u32 + 1) + d;
                        n_digits = n as u32;
                        trailing_zeros = 0;
                    }
                }
                b'.' if seen_point => return Err(ParseError::InputHasMultipleDots),
                b'.' => seen_point = true,
                _ => return Err(ParseError::InputHasInvalidSymbol),
            }
        }

        if !seen_digit {
            return Err(ParseError::InputEmpty)
        }
        let exp = trailing_zeros as i64 - n_fraction_digits as i64;
        Ok(Decimal{
            exp: exp.clamp(Exp::MIN as i64, Exp::MAX as i64) as Exp,
            mant,
        })
    }

    /// `m10 * 5^e10 / 2^(e2 - e10)` for `e10 >= 0`, and whether it is exact.
    fn scale_up(m10: Mant, e10: Exp, e2: Exp) -> (Mant, bool) {
        let exact = (5 as Mant).checked_pow(e10 as u32).and_then(|pow5| {
            if e2 <= e10 {
                let shift = (e10 - e2) as u32;
                let scaled = m10.checked_mul(pow5)?;
                (scaled.leading_zeros() >= shift).then(|| scaled << shift)
            } else {
                let shift = (e2 - e10) as u32;
                let divisible = shift < Mant::BITS && common::is_multiple_of_pow2(m10 as u64, shift);
                if divisible { (m10 >> shift).checked_mul(pow5) } else { None }
            }
        });
        match exact {
            Some(m2) => (m2, true),
            None => {
                let j = e2 - e10 - common::pow5_bits(e10) + lut::POW5_BITCOUNT;
                (saturate($mul_shift(m10, lut::POW5_SPLIT.get(e10), j)), false)
            }
        }
    }

    /// `m10 / 5^k / 2^(e2 + k)` for `k = -e10 > 0`, and whether it is exact.
    fn scale_down(m10: Mant, k: Exp, e2: Exp) -> (Mant, bool) {
        let exact = if common::is_multiple_of_pow5(m10 as u64, k as u32) {
            // 5^k divides m10, so it fits.
            let quotient = m10 / (5 as Mant).pow(k as u32);
            let shift = e2 + k;
            if shift <= 0 {
                let shift = shift.unsigned_abs();
                (quotient.leading_zeros() >= shift).then(|| quotient << shift)
            } else {
                let shift = shift as u32;
                let divisible = shift < Mant::BITS && common::is_multiple_of_pow2(m10 as u64, shift);
                divisible.then(|| quotient >> shift)
            }
        } else {
            None
        };
        match exact {
            Some(m2) => (m2, true),
            None => {
                let j = e2 + k + common::pow5_bits(k) - 1 + lut::POW5_INV_BITCOUNT;
                (saturate($mul_shift(m10, lut::POW5_INV_SPLIT.get(k), j)), false)
            }
        }
    }

    /// Rounds `self` to the nearest `$f`, ties to even, and returns the bits of that (positive)
    /// float.
    ///
    /// `self` is first scaled to `m2 * 2^e2` with `m2` a little over [Self::GUARD_TARGET] bits,
    /// exactly when divisibility allows and through a table multiplier otherwise; the approximate
    /// `m2` is then off by less than one. Rounding `m2` to the mantissa width is correct unless the
    /// discarded bits are within that error of one half, where an exact comparison decides.
    pub fn to_bits(self) -> Mant {
        let Decimal{ exp: e10, mant: m10 } = self;
        if m10 == 0 {
            return 0
        }

        // `10^(magnitude - 1) <= self < 10^magnitude`
        let magnitude = fmt::digit_count(m10 as u64) as i64 + e10 as i64;
        if magnitude <= $zero_cutoff {
            return 0
        }
        if magnitude >= $inf_cutoff {
            return Binary::INFINITY_BITS
        }

        let log2_m10 = m10.ilog2() as Exp;
        let (e2, (m2, exact)) = if e10 >= 0 {
            let e2 = log2_m10 + e10 + common::pow5_bits(e10) - 1 - Self::GUARD_TARGET;
            (e2, Self::scale_up(m10, e10, e2))
        } else {
            let k = -e10;
            let e2 = log2_m10 + e10 - common::pow5_bits(k) - Self::GUARD_TARGET;
            (e2, Self::scale_down(m10, k, e2))
        };
        debug_assert!(m2 != 0);

        let biased = (e2 + Binary::BIAS + m2.ilog2() as Exp).max(0);
        if biased >= Binary::MAX_BIASED_EXP {
            return Binary::INFINITY_BITS
        }

        // Number of low bits of `m2` that do not fit the mantissa.
        let shift = biased.max(1) - e2 - Binary::BIAS - Binary::BITS_MANTISSA_EXPLICIT as Exp;
        debug_assert!(shift >= 2 && (shift as u32) < Wide::BITS);
        let shift = shift as u32;

        let m2 = m2 as Wide;
        let q = (m2 >> shift) as Mant;
        let removed = m2 & ((1 << shift) - 1);
        let half: Wide = 1 << (shift - 1);

        let round_up = if !exact && removed.abs_diff(half) <= 1 {
            match bignum::cmp_halfway(m10 as u64, e10, q as u64, e2 + shift as Exp - 1) {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => !is_even(q),
            }
        } else {
            let is_tie = exact && removed == half;
            removed >= half && (!is_tie || !is_even(q))
        };

        Binary{ exp: e2 + shift as Exp, mant: q + round_up as Mant }.to_bits()
    }

    /// Writes `self` in scientific notation: the first digit, then a point and the other digits if
    /// there are any, then `E` and the exponent if it is not zero.
    pub fn write_exp(self, w: &mut fmt::Writer<'_>) -> Result<(), ConversionError> {
        let mut digits = [0u8; 20];
        let len = fmt::int_to_digits(self.mant as u64, &mut digits, 0)?;

        w.push(digits[0])?;
        if len > 1 {
            w.push(b'.')?;
            w.push_str(&digits[1 .. len])?;
        }

        let exp = self.exp + len as Exp - 1;
        if exp != 0 {
            w.push(b'E')?;
            if exp < 0 {
                w.push(b'-')?;
            }
            w.push_u64(exp.unsigned_abs() as u64)?;
        }
        Ok(())
    }
}

/// Parses decimal text (an optional sign, then digits with at most one point, or `inf`/`nan` in
/// any case) into the nearest `$f`, ties to even.
pub fn parse(text: &[u8]) -> Result<$f, ParseError> {
    let (negative, body) = match text {
        [] => return Err(ParseError::InputEmpty),
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, text),
    };

    let magnitude = if body.eq_ignore_ascii_case(b"nan") {
        $f::NAN
    } else if body.eq_ignore_ascii_case(b"inf") {
        $f::INFINITY
    } else {
        $f::from_bits(Decimal::parse(body)?.to_bits())
    };
    Ok(if negative { -magnitude } else { magnitude })
}

/// Writes the sign and the shortest round-tripping digits of a **finite**, **nonzero** `num`.
pub fn write_shortest_nonzero(num: $f, w: &mut fmt::Writer<'_>) -> Result<(), ConversionError> {
    debug_assert!(num.is_finite() && num != 0.0);
    if num.is_sign_negative() {
        w.push(b'-')?;
    }
    Binary::new(num).shortest().write_exp(w)
}


}} // mk_impl

pub(crate) use mk_impl;
