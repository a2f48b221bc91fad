//! Error set shared by every px_core operation.

use thiserror::Error;

/// Errors surfaced by the numeric helpers.
///
/// Most operations are total; only the proportion solver, decimal arithmetic
/// and configuration validation can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    /// Proportion solver called with zero, two or three absent quantities.
    #[error("exactly one of total, variable and percentage must be absent")]
    InvalidArgument,

    /// Decimal division (or remainder) by zero in an unguarded branch.
    #[error("decimal division by zero")]
    DivideByZero,

    /// Decimal result outside the representable range.
    #[error("decimal overflow")]
    Overflow,

    /// Text that is not a plain `[+-]digits[.digits]` decimal.
    #[error("invalid decimal: {0}")]
    InvalidDecimal(String),

    /// Tolerance must be finite and strictly positive.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(f64),

    /// Rounding precision above the supported digit count.
    #[error("invalid precision: {0} decimal places")]
    InvalidPrecision(u32),
}

pub type NumericResult<T> = Result<T, NumericError>;
