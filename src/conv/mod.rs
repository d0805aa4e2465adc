mod bignum;
mod common;
mod fixed;
pub mod fmt;
mod lut;
mod mk_impl;
mod wide;

use crate::{ConversionError, ParseError};
use fmt::Writer;

mod binary32 {
    crate::conv::mk_impl::mk_impl! {
        float = f32,
        mant = u32,
        wide = u64,
        lut = b32,
        mul_shift = crate::conv::wide::mul_shift_32,
        zero_cutoff = -46,
        inf_cutoff = 40,
    }
}

mod binary64 {
    crate::conv::mk_impl::mk_impl! {
        float = f64,
        mant = u64,
        wide = u128,
        lut = b64,
        mul_shift = crate::conv::wide::mul_shift_64,
        zero_cutoff = -324,
        inf_cutoff = 310,
    }
}

/// A floating point type which [fpconv](crate) can parse from and format into text.
///
/// This trait is "sealed", meaning it cannot be implemented for any other types.
pub trait Float: Sealed {}
impl Float for f32 {}
impl Float for f64 {}

#[derive(Debug)]
pub enum FloatType {
    Finite,
    PosInf,
    NegInf,
    Nan,
}

#[derive(Debug)]
pub enum FiniteFloatType {
    Nonzero,
    PosZero,
    NegZero,
}

pub trait Sealed: Copy
where
    Self: core::panic::RefUnwindSafe + Send + Sync + Unpin + core::panic::UnwindSafe
{
    /// Storage for the longest shortest representation.
    type Buffer: AsRef<[u8]> + AsMut<[u8]> + Copy;
    fn new_buffer() -> Self::Buffer;

    fn classify(&self) -> FloatType;
    fn classify_finite(&self) -> FiniteFloatType;

    fn parse(text: &[u8]) -> Result<Self, ParseError>;
    fn write_shortest_nonzero(self, w: &mut Writer<'_>) -> Result<(), ConversionError>;
    fn write_fixed(self, precision: u32, w: &mut Writer<'_>) -> Result<(), ConversionError>;
}

macro_rules! impl_sealed { ($f:ident, $imp:ident, $buffer_len:literal) => {
    impl Sealed for $f {
        type Buffer = [u8; $buffer_len];

        fn new_buffer() -> Self::Buffer {
            [0; $buffer_len]
        }

        #[inline]
        fn classify(&self) -> FloatType {
            if self.is_finite() {
                FloatType::Finite
            } else if self.is_infinite() {
                if self.is_sign_positive() {FloatType::PosInf} else {FloatType::NegInf}
            } else {
                FloatType::Nan
            }
        }

        #[inline]
        fn classify_finite(&self) -> FiniteFloatType {
            if *self != 0.0 {
                FiniteFloatType::Nonzero
            } else if self.is_sign_positive() {
                FiniteFloatType::PosZero
            } else {
                FiniteFloatType::NegZero
            }
        }

        fn parse(text: &[u8]) -> Result<Self, ParseError> {
            $imp::parse(text)
        }

        fn write_shortest_nonzero(self, w: &mut Writer<'_>) -> Result<(), ConversionError> {
            $imp::write_shortest_nonzero(self, w)
        }

        fn write_fixed(self, precision: u32, w: &mut Writer<'_>) -> Result<(), ConversionError> {
            // Widening is exact.
            fixed::write_fixed(self as f64, precision, w)
        }
    }
}}

// "-1.17549435E-38"
impl_sealed!(f32, binary32, 16);
// "-2.2250738585072014E-308"
impl_sealed!(f64, binary64, 24);

/// Writes the shortest text that parses back to `num`, in scientific notation, or `NaN`, `inf`,
/// `-inf`.
pub fn write_shortest<F: Float>(num: F, w: &mut Writer<'_>) -> Result<(), ConversionError> {
    match num.classify() {
        FloatType::Finite => write_shortest_finite(num, w),
        FloatType::PosInf => w.push_str(b"inf"),
        FloatType::NegInf => w.push_str(b"-inf"),
        FloatType::Nan => w.push_str(b"NaN"),
    }
}

/// Like [write_shortest], for a `num` known to be finite. Otherwise, writes unspecified (but
/// valid) text.
pub fn write_shortest_finite<F: Float>(num: F, w: &mut Writer<'_>) -> Result<(), ConversionError> {
    match num.classify_finite() {
        FiniteFloatType::Nonzero => num.write_shortest_nonzero(w),
        FiniteFloatType::PosZero => w.push(b'0'),
        FiniteFloatType::NegZero => w.push_str(b"-0"),
    }
}
