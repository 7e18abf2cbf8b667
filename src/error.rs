//! Error types for parsing and fallible arithmetic

use thiserror::Error;

/// Failure to read a decimal literal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseBigIntError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
}

#[derive(Debug, Error)]
pub enum BigIntError {
    #[error("attempt to divide by zero")]
    DivisionByZero,

    #[error("limb {limb} at index {index} is not below the radix")]
    LimbOutOfRange { index: usize, limb: u32 },

    #[error("value does not fit in the target integer type")]
    OutOfRange,

    #[error(transparent)]
    Parse(#[from] ParseBigIntError),

    #[error("failed to read integer token: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BigIntError>;
