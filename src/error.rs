use thiserror::Error;

/// Reasons a text cannot be parsed into a float.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseError {
    #[error("input contains no digits")]
    InputEmpty,

    #[error("input has more than one decimal point")]
    InputHasMultipleDots,

    #[error("input contains a symbol other than a digit or a decimal point")]
    InputHasInvalidSymbol,

    #[error("input has too many significant digits")]
    InputNumberTooLarge,
}

/// Reasons a float cannot be formatted into a buffer.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    #[error("output buffer too small")]
    OutputBufferTooSmall,
}
