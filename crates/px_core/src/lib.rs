//! px_core: Pure numeric helpers for sizing and geometry code.
//!
//! This crate is **I/O-free** and stateless. Every operation is a plain
//! function over primitive values (or the fixed-point [`Decimal`]):
//!
//! - Tolerant float comparison around a shared [`EPSILON`]
//! - Proportion solving (`variable / total = percentage / 100`)
//! - Euclidean GCD over `f64` and `Decimal`
//! - Lossless packing of two `i32` into one `i64`
//! - Ceiling-biased decimal rounding and clamping
//!
//! Serialization derives are gated behind the `serde` feature.

#![forbid(unsafe_code)]

pub mod config;
pub mod decimal;
pub mod divisor;
pub mod errors;
pub mod packing;
pub mod proportion;
pub mod rounding;
pub mod tolerance;

pub use config::NumericConfig;
pub use decimal::Decimal;
pub use divisor::{aspect_ratio, gcd_decimal, gcd_f64};
pub use errors::{NumericError, NumericResult};
pub use packing::{pack, unpack, PackedPair};
pub use proportion::{
    cross_multiply, cross_multiply_decimal, cross_multiply_f64, missing_term, ProportionTerm,
    Scalar,
};
pub use rounding::{clamp, next_even, round_up, round_up_value, MAX_ROUNDING_DIGITS, ROUNDING_LIMIT};
pub use tolerance::{
    greater_than, nearly_equal, nearly_equal_int, smaller_than, smaller_than_or_close, Tolerance,
    EPSILON,
};
