//! descriptor.rs: Raster image descriptor.
//!
//! Plain attribute storage. Every setter returns the [`RasterChange`] it
//! caused (or `None` when the value was already stored); [`ObservedRaster`]
//! forwards those events to a [`ChangeListener`].
//!
//! Sizing helpers read the stored fields through `px_core`; the descriptor
//! holds no invariants beyond field typing.

use px_core::{aspect_ratio, cross_multiply_f64, NumericResult, Tolerance};

use crate::notify::{ChangeListener, PropertyValue, RasterChange, RasterProperty};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default channel count (RGBA).
pub const DEFAULT_CHANNEL_COUNT: u8 = 4;
/// Default bits per channel.
pub const DEFAULT_BITS_PER_CHANNEL: u8 = 8;

/// Value equality used to decide whether a setter fires.
/// Floats treat `NaN` as equal to itself so re-setting it is silent.
trait SameValue: Copy {
    fn same(self, other: Self) -> bool;
}

macro_rules! same_by_eq {
    ($($t:ty),+) => {
        $(impl SameValue for $t {
            #[inline]
            fn same(self, other: Self) -> bool { self == other }
        })+
    };
}

same_by_eq!(u8, u16, u64);

impl SameValue for f64 {
    #[inline]
    fn same(self, other: Self) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RasterDescriptor {
    original_width: u16,
    original_height: u16,
    horizontal_dpi: f64,
    vertical_dpi: f64,
    channel_count: u8,
    bits_per_channel: u8,
    data_length: u64,
    stream_position: u64,
    header_length: u64,
}

impl Default for RasterDescriptor {
    fn default() -> Self {
        Self {
            original_width: 0,
            original_height: 0,
            horizontal_dpi: 0.0,
            vertical_dpi: 0.0,
            channel_count: DEFAULT_CHANNEL_COUNT,
            bits_per_channel: DEFAULT_BITS_PER_CHANNEL,
            data_length: 0,
            stream_position: 0,
            header_length: 0,
        }
    }
}

/// Getter + change-emitting setter for one field.
macro_rules! property {
    ($get:ident, $set:ident, $ty:ty, $prop:ident, $variant:ident, $doc:literal) => {
        #[doc = $doc]
        #[inline]
        pub fn $get(&self) -> $ty { self.$get }

        #[doc = concat!("Set `", stringify!($get), "`; returns the change, or `None` if unchanged.")]
        pub fn $set(&mut self, value: $ty) -> Option<RasterChange> {
            if self.$get.same(value) {
                return None;
            }
            let old = core::mem::replace(&mut self.$get, value);
            let change = RasterChange {
                property: RasterProperty::$prop,
                old: PropertyValue::$variant(old),
                new: PropertyValue::$variant(value),
            };
            tracing::trace!(
                property = change.property.name(),
                old = %change.old,
                new = %change.new,
                "raster property changed"
            );
            Some(change)
        }
    };
}

impl RasterDescriptor {
    /// Descriptor of a `width x height` capture with default channel layout.
    pub fn new(original_width: u16, original_height: u16) -> Self {
        Self { original_width, original_height, ..Self::default() }
    }

    property!(original_width, set_original_width, u16, OriginalWidth, U16,
        "Original (pre-resize) width in pixels.");
    property!(original_height, set_original_height, u16, OriginalHeight, U16,
        "Original (pre-resize) height in pixels.");
    property!(horizontal_dpi, set_horizontal_dpi, f64, HorizontalDpi, F64,
        "Horizontal resolution in dots per inch.");
    property!(vertical_dpi, set_vertical_dpi, f64, VerticalDpi, F64,
        "Vertical resolution in dots per inch.");
    property!(channel_count, set_channel_count, u8, ChannelCount, U8,
        "Number of channels: 4 is RGBA, 3 is RGB.");
    property!(bits_per_channel, set_bits_per_channel, u8, BitsPerChannel, U8,
        "Bits per channel.");
    property!(data_length, set_data_length, u64, DataLength, U64,
        "Byte length of the pixel payload.");
    property!(stream_position, set_stream_position, u64, StreamPosition, U64,
        "Offset of this entry in its backing stream.");
    property!(header_length, set_header_length, u64, HeaderLength, U64,
        "Size of the headers preceding the pixel payload.");

    /// Offset of the pixel payload: stream position plus headers.
    #[inline]
    pub fn data_stream_position(&self) -> u64 {
        self.stream_position.saturating_add(self.header_length)
    }

    /// Width and height reduced to lowest terms (`1920x1080 → (16, 9)`).
    pub fn aspect_ratio(&self) -> (u32, u32) {
        aspect_ratio(u32::from(self.original_width), u32::from(self.original_height))
    }

    /// Height keeping the original proportions at `target_width`.
    /// A zero original width yields `0`.
    pub fn scaled_height(&self, target_width: f64) -> NumericResult<f64> {
        let width = f64::from(self.original_width);
        let height = f64::from(self.original_height);
        let pct = cross_multiply_f64(Some(width), Some(target_width), None)?;
        cross_multiply_f64(Some(height), None, Some(pct))
    }

    /// Both axes within `tolerance` of `dpi`.
    pub fn has_dpi(&self, dpi: f64, tolerance: Tolerance) -> bool {
        tolerance.nearly_equal(self.horizontal_dpi, dpi) && tolerance.nearly_equal(self.vertical_dpi, dpi)
    }

    /// Whole bytes needed per pixel (rounded up for sub-byte layouts).
    pub fn bytes_per_pixel(&self) -> u32 {
        (u32::from(self.channel_count) * u32::from(self.bits_per_channel)).div_ceil(8)
    }

    /// Payload size implied by the dimensions and channel layout.
    pub fn expected_data_length(&self) -> u64 {
        let bits = u64::from(self.original_width)
            * u64::from(self.original_height)
            * u64::from(self.channel_count)
            * u64::from(self.bits_per_channel);
        bits.div_ceil(8)
    }

    /// Stored `data_length` equals [`expected_data_length`](Self::expected_data_length).
    pub fn data_length_matches(&self) -> bool {
        self.data_length == self.expected_data_length()
    }
}

/* -------------------------------------------------------------------------- */
/*                              Observed wrapper                              */
/* -------------------------------------------------------------------------- */

/// A descriptor paired with the listener that receives its change events.
#[derive(Debug)]
pub struct ObservedRaster<L> {
    raster: RasterDescriptor,
    listener: L,
}

impl<L: ChangeListener> ObservedRaster<L> {
    pub fn new(raster: RasterDescriptor, listener: L) -> Self {
        Self { raster, listener }
    }

    pub fn raster(&self) -> &RasterDescriptor { &self.raster }

    pub fn listener(&self) -> &L { &self.listener }

    pub fn into_parts(self) -> (RasterDescriptor, L) { (self.raster, self.listener) }

    /// Run one setter and forward its event. Returns whether anything changed.
    ///
    /// ```
    /// use px_raster::{ObservedRaster, RasterDescriptor, RasterChange};
    ///
    /// let mut obs = ObservedRaster::new(RasterDescriptor::default(), Vec::<RasterChange>::new());
    /// assert!(obs.update(|r| r.set_channel_count(3)));
    /// assert!(!obs.update(|r| r.set_channel_count(3)));
    /// assert_eq!(obs.listener().len(), 1);
    /// ```
    pub fn update<F>(&mut self, edit: F) -> bool
    where
        F: FnOnce(&mut RasterDescriptor) -> Option<RasterChange>,
    {
        match edit(&mut self.raster) {
            Some(change) => {
                self.listener.on_change(&change);
                true
            }
            None => false,
        }
    }
}

/* ---------------------------------- Tests --------------------------------- */
