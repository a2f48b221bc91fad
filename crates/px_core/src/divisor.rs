//! Euclidean greatest common divisor.
//!
//! `gcd(a, b) = b == 0 ? a : gcd(b, a mod b)`, unrolled into a loop. The
//! remainder is truncated (sign follows the dividend) and no sign
//! normalisation is applied, so negative inputs may yield a negative result.

use crate::decimal::Decimal;

/// GCD over `f64`; `gcd_f64(a, 0.0) == a`.
///
/// A `NaN` operand (or an infinite dividend, whose remainder is `NaN`) ends
/// the loop with `NaN`.
pub fn gcd_f64(mut a: f64, mut b: f64) -> f64 {
    while b != 0.0 {
        if b.is_nan() {
            return f64::NAN;
        }
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// GCD over [`Decimal`]; `gcd_decimal(a, ZERO) == a`.
pub fn gcd_decimal(mut a: Decimal, mut b: Decimal) -> Decimal {
    // `checked_rem` only fails on a zero divisor, which the loop condition excludes.
    while let Some(r) = a.checked_rem(b) {
        a = b;
        b = r;
    }
    a
}

fn gcd_u32(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Reduce a pixel size to lowest terms, e.g. `1920x1080 → 16:9`.
/// A zero side reduces the other to `1`; `(0, 0)` stays `(0, 0)`.
pub fn aspect_ratio(width: u32, height: u32) -> (u32, u32) {
    match gcd_u32(width, height) {
        0 => (0, 0),
        g => (width / g, height / g),
    }
}

/* ---------------------------------- Tests --------------------------------- */
