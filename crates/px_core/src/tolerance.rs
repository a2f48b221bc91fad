//! Epsilon-bounded comparison of `f64` values.
//!
//! All predicates share [`EPSILON`] by default so that equality, ordering and
//! closeness agree for the same pair of operands.
//!
//! The strict predicates combine with AND-NOT while
//! [`smaller_than_or_close`] combines with OR. The two families are not
//! complements of each other and callers rely on the exact boundaries.

use crate::errors::{NumericError, NumericResult};

/// Shared default tolerance.
pub const EPSILON: f64 = 1.53e-6;

/// `a == b`, or `|a - b| < eps` (open interval).
#[inline]
pub fn nearly_equal(a: f64, b: f64, eps: f64) -> bool {
    if a == b {
        return true;
    }
    let delta = a - b;
    delta < eps && delta > -eps
}

/// [`nearly_equal`] against an integer operand, converted to `f64` first.
#[inline]
pub fn nearly_equal_int(a: f64, b: i32, eps: f64) -> bool {
    nearly_equal(a, f64::from(b), eps)
}

/// `a > b` and the two are not within `eps`.
#[inline]
pub fn greater_than(a: f64, b: f64, eps: f64) -> bool {
    a > b && !nearly_equal(a, b, eps)
}

/// `a < b` and the two are not within `eps`.
#[inline]
pub fn smaller_than(a: f64, b: f64, eps: f64) -> bool {
    a < b && !nearly_equal(a, b, eps)
}

/// `a < b`, or the two are within `eps`.
#[inline]
pub fn smaller_than_or_close(a: f64, b: f64, eps: f64) -> bool {
    a < b || nearly_equal(a, b, eps)
}

/// A validated tolerance threaded by callers instead of default arguments.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Tolerance(f64);

impl Tolerance {
    /// Rejects `NaN`, infinities, zero and negative values.
    pub fn new(eps: f64) -> NumericResult<Self> {
        if eps.is_finite() && eps > 0.0 {
            Ok(Self(eps))
        } else {
            Err(NumericError::InvalidTolerance(eps))
        }
    }

    pub fn value(self) -> f64 { self.0 }

    pub fn nearly_equal(self, a: f64, b: f64) -> bool { nearly_equal(a, b, self.0) }

    pub fn nearly_equal_int(self, a: f64, b: i32) -> bool { nearly_equal_int(a, b, self.0) }

    pub fn greater_than(self, a: f64, b: f64) -> bool { greater_than(a, b, self.0) }

    pub fn smaller_than(self, a: f64, b: f64) -> bool { smaller_than(a, b, self.0) }

    pub fn smaller_than_or_close(self, a: f64, b: f64) -> bool {
        smaller_than_or_close(a, b, self.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self { Self(EPSILON) }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Tolerance {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        use serde::de::{Error as DeError, Unexpected};
        let v = f64::deserialize(d)?;
        Tolerance::new(v)
            .map_err(|_| D::Error::invalid_value(Unexpected::Float(v), &"finite tolerance > 0"))
    }
}

/* ---------------------------------- Tests --------------------------------- */
