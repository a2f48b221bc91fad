//! Proportion solver ("cross multiplication").
//!
//! Solves `variable / total = percentage / 100` for whichever of the three
//! quantities is absent:
//!
//! | absent       | result                                          |
//! |--------------|-------------------------------------------------|
//! | `total`      | `variable * 100 / percentage`                   |
//! | `percentage` | `variable * 100 / total`, or `0` if total is 0  |
//! | `variable`   | `percentage * total / 100`                      |
//!
//! Only the percentage branch is guarded against a zero divisor. The total
//! branch divides by `percentage` unguarded: `f64` follows IEEE-754 and
//! [`Decimal`] reports [`NumericError::DivideByZero`].

use crate::decimal::Decimal;
use crate::errors::{NumericError, NumericResult};

/// Arithmetic needed by the solver. Implemented for `f64` and [`Decimal`] so
/// both variants share one branching.
pub trait Scalar: Copy {
    const ZERO: Self;
    const HUNDRED: Self;

    fn product(self, rhs: Self) -> NumericResult<Self>;
    fn quotient(self, rhs: Self) -> NumericResult<Self>;
    /// Strictly positive or strictly negative.
    fn is_nonzero(self) -> bool;
}

impl Scalar for f64 {
    const ZERO: Self = 0.0;
    const HUNDRED: Self = 100.0;

    #[inline]
    fn product(self, rhs: Self) -> NumericResult<Self> { Ok(self * rhs) }

    #[inline]
    fn quotient(self, rhs: Self) -> NumericResult<Self> { Ok(self / rhs) }

    // NaN is neither, so a NaN total takes the zero guard.
    #[inline]
    fn is_nonzero(self) -> bool { self > 0.0 || self < 0.0 }
}

impl Scalar for Decimal {
    const ZERO: Self = Decimal::ZERO;
    const HUNDRED: Self = Decimal::HUNDRED;

    #[inline]
    fn product(self, rhs: Self) -> NumericResult<Self> {
        self.checked_mul(rhs).ok_or(NumericError::Overflow)
    }

    #[inline]
    fn quotient(self, rhs: Self) -> NumericResult<Self> {
        if rhs.is_zero() {
            return Err(NumericError::DivideByZero);
        }
        self.checked_div(rhs).ok_or(NumericError::Overflow)
    }

    #[inline]
    fn is_nonzero(self) -> bool { !self.is_zero() }
}

/// Which quantity of the proportion is being solved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProportionTerm {
    Total,
    Variable,
    Percentage,
}

/// The single absent quantity, or [`NumericError::InvalidArgument`] when
/// zero, two or three are absent.
pub fn missing_term<T>(
    total: Option<T>,
    variable: Option<T>,
    percentage: Option<T>,
) -> NumericResult<ProportionTerm> {
    match (total.is_none(), variable.is_none(), percentage.is_none()) {
        (true, false, false) => Ok(ProportionTerm::Total),
        (false, true, false) => Ok(ProportionTerm::Variable),
        (false, false, true) => Ok(ProportionTerm::Percentage),
        (t, v, p) => {
            tracing::debug!(
                total_absent = t,
                variable_absent = v,
                percentage_absent = p,
                "proportion rejected: exactly one quantity must be absent"
            );
            Err(NumericError::InvalidArgument)
        }
    }
}

/// Solve `variable / total = percentage / 100` for the absent quantity.
pub fn cross_multiply<T: Scalar>(
    total: Option<T>,
    variable: Option<T>,
    percentage: Option<T>,
) -> NumericResult<T> {
    match (total, variable, percentage) {
        (None, Some(v), Some(p)) => v.product(T::HUNDRED)?.quotient(p),
        (Some(t), Some(v), None) => {
            if t.is_nonzero() {
                v.product(T::HUNDRED)?.quotient(t)
            } else {
                Ok(T::ZERO)
            }
        }
        (Some(t), None, Some(p)) => p.product(t)?.quotient(T::HUNDRED),
        _ => missing_term(total, variable, percentage).map(|_| T::ZERO),
    }
}

/// Floating-point variant of [`cross_multiply`].
#[inline]
pub fn cross_multiply_f64(
    total: Option<f64>,
    variable: Option<f64>,
    percentage: Option<f64>,
) -> NumericResult<f64> {
    cross_multiply(total, variable, percentage)
}

/// Fixed-point variant of [`cross_multiply`].
#[inline]
pub fn cross_multiply_decimal(
    total: Option<Decimal>,
    variable: Option<Decimal>,
    percentage: Option<Decimal>,
) -> NumericResult<Decimal> {
    cross_multiply(total, variable, percentage)
}

/* ---------------------------------- Tests --------------------------------- */
