//! Ceiling-biased rounding and clamping helpers.

/// Highest supported rounding precision; larger requests are capped.
pub const MAX_ROUNDING_DIGITS: u32 = 15;

/// Magnitude from which an `f64` carries no fractional digits worth rounding.
pub const ROUNDING_LIMIT: f64 = 1e16;

/// Round half-to-even at `decimal_places`, then bump by one step
/// (`10^-decimal_places`) if that went below `value`.
///
/// The result is never below `value`. Values at or above [`ROUNDING_LIMIT`]
/// in magnitude, infinities and `NaN` come back unchanged. When the step is
/// smaller than one ulp of `value` the bump cannot help, and `value` itself
/// is returned.
pub fn round_up_value(value: f64, decimal_places: u32) -> f64 {
    if value.is_nan() || value.abs() >= ROUNDING_LIMIT {
        return value;
    }
    let places = decimal_places.min(MAX_ROUNDING_DIGITS) as i32;
    let power = 10f64.powi(places);
    let mut result = (value * power).round_ties_even() / power;

    if result < value {
        result += 10f64.powi(-places);
    }
    if result < value { value } else { result }
}

/// [`round_up_value`] at zero decimal places.
#[inline]
pub fn round_up(value: f64) -> f64 {
    round_up_value(value, 0)
}

/// `min` if `value <= min`, `max` if `value >= max`, else `value`.
///
/// Expects `min <= max`; otherwise the result is whichever bound is tested
/// first.
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value <= min {
        min
    } else if value >= max {
        max
    } else {
        value
    }
}

/// `n` if even, otherwise `n + 1` (wraps at `i32::MAX`).
#[inline]
pub const fn next_even(n: i32) -> i32 {
    if n % 2 == 0 { n } else { n.wrapping_add(1) }
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tolerance::{nearly_equal, EPSILON};

    #[test]
    fn bumps_when_rounding_went_down() {
        assert!(nearly_equal(round_up_value(2.401, 2), 2.41, EPSILON));
        assert_eq!(round_up_value(2.1, 0), 3.0);
        assert_eq!(round_up(0.2), 1.0);
    }

    #[test]
    fn keeps_upward_rounding() {
        assert!(nearly_equal(round_up_value(2.406, 2), 2.41, EPSILON));
        assert_eq!(round_up_value(2.7, 0), 3.0);
    }

    #[test]
    fn exact_values_unchanged() {
        assert_eq!(round_up_value(2.0, 0), 2.0);
        assert_eq!(round_up_value(2.5, 1), 2.5);
        assert_eq!(round_up(-4.0), -4.0);
    }

    #[test]
    fn halfway_goes_to_upper_step() {
        // 2.5 -> 2 (to even) -> bumped to 3; 3.5 -> 4 directly.
        assert_eq!(round_up(2.5), 3.0);
        assert_eq!(round_up(3.5), 4.0);
        assert_eq!(round_up(-2.5), -2.0);
    }

    #[test]
    fn large_magnitudes_are_returned_unchanged() {
        assert_eq!(round_up_value(1e300, 15), 1e300);
        assert_eq!(round_up_value(-1e300, 15), -1e300);
        assert_eq!(round_up_value(1.0000000000025926e16, 6), 1.0000000000025926e16);
        assert_eq!(round_up_value(f64::INFINITY, 2), f64::INFINITY);
        assert!(round_up_value(f64::NAN, 2).is_nan());
    }

    #[test]
    fn sub_ulp_step_falls_back_to_value() {
        let v = 1000000.0493828;
        assert!(round_up_value(v, 14) >= v);
        assert!(round_up_value(v, 15) >= v);
        assert!(round_up_value(123456789.123456789, 15) >= 123456789.123456789);
    }

    #[test]
    fn precision_is_capped() {
        assert_eq!(round_up_value(1.0, 40), round_up_value(1.0, MAX_ROUNDING_DIGITS));
    }

    #[test]
    fn clamp_int_and_float() {
        assert_eq!(clamp(5, 0, 10), 5);
        assert_eq!(clamp(-1, 0, 10), 0);
        assert_eq!(clamp(11, 0, 10), 10);
        assert_eq!(clamp(0, 0, 10), 0);
        assert_eq!(clamp(10, 0, 10), 10);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-0.1, 0.0, 1.0), 0.0);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
    }

    #[test]
    fn inverted_bounds_not_special_cased() {
        assert_eq!(clamp(5, 10, 0), 10);
        assert_eq!(clamp(20, 10, 0), 0);
    }

    #[test]
    fn even_numbers() {
        assert_eq!(next_even(4), 4);
        assert_eq!(next_even(5), 6);
        assert_eq!(next_even(-3), -2);
        assert_eq!(next_even(0), 0);
        assert_eq!(next_even(i32::MAX), i32::MIN);
    }
}
