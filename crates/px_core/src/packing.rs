//! Lossless packing of two `i32` into one `i64`.
//!
//! Layout: `left` in the high word, `right`'s raw bit pattern in the low word.
//! `right` is reinterpreted as `u32` before widening so its sign bit lands in
//! bit 31 instead of being sign-extended over `left`.

/// `left << 32 | right as u32`.
#[inline]
pub const fn pack(left: i32, right: i32) -> i64 {
    ((left as i64) << 32) | (right as u32 as i64)
}

/// Inverse of [`pack`]: `(value >> 32, low 32 bits as i32)`.
#[inline]
pub const fn unpack(value: i64) -> (i32, i32) {
    ((value >> 32) as i32, (value & 0xFFFF_FFFF) as i32)
}

/// A packed `(left, right)` pair usable as a compact key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PackedPair(i64);

impl PackedPair {
    #[inline]
    pub const fn new(left: i32, right: i32) -> Self { Self(pack(left, right)) }

    #[inline]
    pub const fn left(self) -> i32 { unpack(self.0).0 }

    #[inline]
    pub const fn right(self) -> i32 { unpack(self.0).1 }

    #[inline]
    pub const fn into_parts(self) -> (i32, i32) { unpack(self.0) }

    #[inline]
    pub const fn as_i64(self) -> i64 { self.0 }
}

impl From<i64> for PackedPair {
    fn from(v: i64) -> Self { Self(v) }
}

impl From<PackedPair> for i64 {
    fn from(p: PackedPair) -> Self { p.0 }
}

impl From<(i32, i32)> for PackedPair {
    fn from((left, right): (i32, i32)) -> Self { Self::new(left, right) }
}

/* ---------------------------------- Tests --------------------------------- */
