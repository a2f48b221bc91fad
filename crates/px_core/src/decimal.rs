//! Fixed-point decimal for precision-sensitive proportions (currency, exact
//! pixel ratios).
//!
//! Representation: `i128` raw value scaled by `10^12`. Twelve fractional
//! digits are exact; products and quotients truncate toward zero beyond that.
//! Arithmetic mirrors the integer primitives: `checked_*` returns `None` on
//! overflow or division by zero.

use core::fmt;
use core::str::FromStr;

use crate::errors::NumericError;

/// Number of exact fractional digits.
pub const DECIMAL_PLACES: u32 = 12;

/// Signed fixed-point decimal with [`DECIMAL_PLACES`] fractional digits.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Decimal(i128);

impl Decimal {
    /// Raw units per whole number.
    pub const SCALE: i128 = 1_000_000_000_000;

    pub const ZERO: Decimal = Decimal(0);
    pub const ONE: Decimal = Decimal(Self::SCALE);
    pub const HUNDRED: Decimal = Decimal(100 * Self::SCALE);
    pub const MAX: Decimal = Decimal(i128::MAX);
    pub const MIN: Decimal = Decimal(i128::MIN);

    /// Build from the raw scaled representation (`raw / 10^12`).
    #[inline]
    pub const fn from_raw(raw: i128) -> Self { Decimal(raw) }

    #[inline]
    pub const fn raw(self) -> i128 { self.0 }

    #[inline]
    pub const fn is_zero(self) -> bool { self.0 == 0 }

    #[inline]
    pub const fn is_negative(self) -> bool { self.0 < 0 }

    /// Absolute value; `None` for [`Decimal::MIN`].
    #[inline]
    pub fn checked_abs(self) -> Option<Self> { self.0.checked_abs().map(Decimal) }

    #[inline]
    pub fn checked_add(self, rhs: Self) -> Option<Self> { self.0.checked_add(rhs.0).map(Decimal) }

    #[inline]
    pub fn checked_sub(self, rhs: Self) -> Option<Self> { self.0.checked_sub(rhs.0).map(Decimal) }

    /// Product truncated at the last fractional digit.
    pub fn checked_mul(self, rhs: Self) -> Option<Self> {
        if let Some(p) = self.0.checked_mul(rhs.0) {
            return Some(Decimal(p / Self::SCALE));
        }
        // a * b / S == (a / S) * b + (a % S) * b / S, keeps intermediates small.
        let whole = (self.0 / Self::SCALE).checked_mul(rhs.0)?;
        let frac = (self.0 % Self::SCALE).checked_mul(rhs.0)? / Self::SCALE;
        whole.checked_add(frac).map(Decimal)
    }

    /// Quotient truncated at the last fractional digit; `None` when `rhs` is zero.
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        if let Some(n) = self.0.checked_mul(Self::SCALE) {
            return n.checked_div(rhs.0).map(Decimal);
        }
        // Long division: (q * b + r) * S / b == q * S + r * S / b.
        let q = self.0.checked_div(rhs.0)?;
        let r = self.0.checked_rem(rhs.0)?;
        let whole = q.checked_mul(Self::SCALE)?;
        let frac = r.checked_mul(Self::SCALE)? / rhs.0;
        whole.checked_add(frac).map(Decimal)
    }

    /// Truncated remainder (sign follows `self`); `None` when `rhs` is zero.
    #[inline]
    pub fn checked_rem(self, rhs: Self) -> Option<Self> {
        if rhs.0 == 0 {
            return None;
        }
        // MIN % -1 overflows in i128 but is mathematically zero.
        Some(Decimal(self.0.wrapping_rem(rhs.0)))
    }

    /// Lossy conversion for display or float interop.
    pub fn to_f64(self) -> f64 {
        let whole = (self.0 / Self::SCALE) as f64;
        let frac = (self.0 % Self::SCALE) as f64 / Self::SCALE as f64;
        whole + frac
    }
}

impl From<i32> for Decimal {
    fn from(v: i32) -> Self { Decimal(i128::from(v) * Self::SCALE) }
}

impl From<i64> for Decimal {
    fn from(v: i64) -> Self { Decimal(i128::from(v) * Self::SCALE) }
}

impl From<u32> for Decimal {
    fn from(v: u32) -> Self { Decimal(i128::from(v) * Self::SCALE) }
}

impl FromStr for Decimal {
    type Err = NumericError;

    /// Accepts `[+-]digits[.digits]` with at most [`DECIMAL_PLACES`] fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || NumericError::InvalidDecimal(s.to_string());

        let (negative, body) = match s.as_bytes().first() {
            Some(b'-') => (true, &s[1..]),
            Some(b'+') => (false, &s[1..]),
            _ => (false, s),
        };
        let (int_part, frac_part) = match body.split_once('.') {
            Some((i, f)) => (i, f),
            None => (body, ""),
        };
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(bad());
        }
        if frac_part.len() > DECIMAL_PLACES as usize {
            return Err(bad());
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(bad());
        }

        let mut raw: i128 = 0;
        for b in int_part.bytes() {
            raw = raw
                .checked_mul(10)
                .and_then(|r| r.checked_add(i128::from(b - b'0')))
                .ok_or(NumericError::Overflow)?;
        }
        raw = raw.checked_mul(Self::SCALE).ok_or(NumericError::Overflow)?;

        let mut frac: i128 = 0;
        for b in frac_part.bytes() {
            frac = frac * 10 + i128::from(b - b'0');
        }
        frac *= 10i128.pow(DECIMAL_PLACES - frac_part.len() as u32);
        raw = raw.checked_add(frac).ok_or(NumericError::Overflow)?;

        Ok(Decimal(if negative { -raw } else { raw }))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = Self::SCALE.unsigned_abs();
        let abs = self.0.unsigned_abs();
        let whole = abs / scale;
        let frac = abs % scale;
        if self.0 < 0 {
            f.write_str("-")?;
        }
        if frac == 0 {
            return write!(f, "{whole}");
        }
        let digits = format!("{:0width$}", frac, width = DECIMAL_PLACES as usize);
        write!(f, "{whole}.{}", digits.trim_end_matches('0'))
    }
}

impl fmt::Debug for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Decimal({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        use serde::de::Error as DeError;
        let s = String::deserialize(d)?;
        s.parse().map_err(D::Error::custom)
    }
}

/* ---------------------------------- Tests --------------------------------- */

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> Decimal { s.parse().unwrap() }

    #[test]
    fn parse_and_display() {
        assert_eq!(d("200").to_string(), "200");
        assert_eq!(d("2.50").to_string(), "2.5");
        assert_eq!(d("-0.125").to_string(), "-0.125");
        assert_eq!(d("+.5").to_string(), "0.5");
        assert_eq!(d("7.").to_string(), "7");
        assert_eq!(d("0.000000000001").raw(), 1);
    }

    #[test]
    fn parse_rejects_garbage() {
        for s in ["", "-", ".", "1e3", "1.2.3", "abc", " 1", "0.0000000000001"] {
            assert!(matches!(s.parse::<Decimal>(), Err(NumericError::InvalidDecimal(_))), "{s}");
        }
    }

    #[test]
    fn parse_overflow() {
        let huge = "9".repeat(40);
        assert_eq!(huge.parse::<Decimal>(), Err(NumericError::Overflow));
    }

    #[test]
    fn integer_conversions() {
        assert_eq!(Decimal::from(100i32), Decimal::HUNDRED);
        assert_eq!(Decimal::from(-3i64), d("-3"));
        assert_eq!(Decimal::from(1u32), Decimal::ONE);
    }

    #[test]
    fn arithmetic_is_exact_within_scale() {
        assert_eq!(d("0.1").checked_add(d("0.2")), Some(d("0.3")));
        assert_eq!(d("2.5").checked_mul(d("4")), Some(d("10")));
        assert_eq!(d("1").checked_div(d("8")), Some(d("0.125")));
        assert_eq!(d("1").checked_div(d("3")), Some(d("0.333333333333")));
        assert_eq!(d("-7").checked_rem(d("3")), Some(d("-1")));
        assert_eq!(d("5").checked_sub(d("7.5")), Some(d("-2.5")));
    }

    #[test]
    fn division_by_zero_is_none() {
        assert_eq!(Decimal::ONE.checked_div(Decimal::ZERO), None);
        assert_eq!(Decimal::ONE.checked_rem(Decimal::ZERO), None);
    }

    #[test]
    fn large_operands_use_split_paths() {
        let big = Decimal::from(10_000_000_000_000i64); // 1e13
        assert_eq!(big.checked_mul(d("0.5")), Some(Decimal::from(5_000_000_000_000i64)));
        assert_eq!(big.checked_mul(Decimal::HUNDRED), Some(Decimal::from(1_000_000_000_000_000i64)));
        assert_eq!(Decimal::MAX.checked_mul(d("2")), None);
        let huge = Decimal::from_raw(i128::MAX / 2);
        assert_eq!(huge.checked_div(d("2")).map(|q| q.raw() > 0), Some(true));
    }

    #[test]
    fn min_rem_minus_one_is_zero() {
        assert_eq!(Decimal::MIN.checked_rem(Decimal::from_raw(-1)), Some(Decimal::ZERO));
    }

    #[test]
    fn ordering_and_f64() {
        assert!(d("-1") < d("0.5"));
        assert_eq!(d("2.25").to_f64(), 2.25);
        assert_eq!(Decimal::ZERO.checked_abs(), Some(Decimal::ZERO));
        assert_eq!(Decimal::MIN.checked_abs(), None);
        assert!(d("-0.5").is_negative());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_canonical_string() {
        assert_eq!(serde_json::to_string(&d("2.50")).unwrap(), r#""2.5""#);
        assert_eq!(serde_json::from_str::<Decimal>(r#""2.5""#).unwrap(), d("2.5"));
        assert_eq!(serde_json::from_str::<Decimal>(r#""-0.125""#).unwrap(), d("-0.125"));
        assert!(serde_json::from_str::<Decimal>(r#""2.5x""#).is_err());
        assert!(serde_json::from_str::<Decimal>("2.5").is_err());
    }
}
