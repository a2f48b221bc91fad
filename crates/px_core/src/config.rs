//! config.rs: Tolerance and precision threaded explicitly by callers.
//!
//! Replaces implicit default arguments: callers either use
//! [`NumericConfig::default`] (shared [`EPSILON`], zero decimal places) or
//! load/build their own and pass it down.

use crate::errors::{NumericError, NumericResult};
use crate::rounding::{round_up_value, MAX_ROUNDING_DIGITS};
use crate::tolerance::{Tolerance, EPSILON};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct NumericConfig {
    /// Comparison tolerance (finite, > 0).
    pub epsilon: f64,
    /// Decimal places used by rounding helpers (0..=15).
    pub decimal_places: u32,
}

impl Default for NumericConfig {
    fn default() -> Self {
        Self { epsilon: EPSILON, decimal_places: 0 }
    }
}

impl NumericConfig {
    /// Check domains; the first offending field wins.
    pub fn validate(&self) -> NumericResult<()> {
        Tolerance::new(self.epsilon)?;
        if self.decimal_places > MAX_ROUNDING_DIGITS {
            return Err(NumericError::InvalidPrecision(self.decimal_places));
        }
        Ok(())
    }

    /// Validated tolerance for the comparison helpers.
    pub fn tolerance(&self) -> NumericResult<Tolerance> {
        Tolerance::new(self.epsilon)
    }

    /// [`round_up_value`] at the configured precision.
    pub fn round_up(&self, value: f64) -> f64 {
        round_up_value(value, self.decimal_places)
    }
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = NumericConfig::default();
        assert_eq!(c.epsilon, EPSILON);
        assert_eq!(c.decimal_places, 0);
        assert!(c.validate().is_ok());
        assert_eq!(c.tolerance().unwrap(), Tolerance::default());
    }

    #[test]
    fn rejects_bad_domains() {
        let c = NumericConfig { epsilon: -1.0, ..Default::default() };
        assert_eq!(c.validate(), Err(NumericError::InvalidTolerance(-1.0)));
        let c = NumericConfig { decimal_places: 16, ..Default::default() };
        assert_eq!(c.validate(), Err(NumericError::InvalidPrecision(16)));
    }

    #[test]
    fn rounds_at_configured_precision() {
        let c = NumericConfig { decimal_places: 1, ..Default::default() };
        assert!(crate::tolerance::nearly_equal(c.round_up(1.21), 1.3, EPSILON));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn json_round_trip_with_defaults() {
        let c: NumericConfig = serde_json::from_str(r#"{ "decimal_places": 2 }"#).unwrap();
        assert_eq!(c, NumericConfig { epsilon: EPSILON, decimal_places: 2 });
        assert!(serde_json::from_str::<NumericConfig>(r#"{ "eps": 1 }"#).is_err());
    }
}
