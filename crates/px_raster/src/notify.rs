//! Change events emitted by raster setters and the listener seam.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Observable raster properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RasterProperty {
    OriginalWidth,
    OriginalHeight,
    HorizontalDpi,
    VerticalDpi,
    ChannelCount,
    BitsPerChannel,
    DataLength,
    StreamPosition,
    HeaderLength,
}

impl RasterProperty {
    /// Stable snake_case name (used in logs).
    pub fn name(self) -> &'static str {
        match self {
            RasterProperty::OriginalWidth => "original_width",
            RasterProperty::OriginalHeight => "original_height",
            RasterProperty::HorizontalDpi => "horizontal_dpi",
            RasterProperty::VerticalDpi => "vertical_dpi",
            RasterProperty::ChannelCount => "channel_count",
            RasterProperty::BitsPerChannel => "bits_per_channel",
            RasterProperty::DataLength => "data_length",
            RasterProperty::StreamPosition => "stream_position",
            RasterProperty::HeaderLength => "header_length",
        }
    }
}

impl fmt::Display for RasterProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.name()) }
}

/// Typed old/new payload of a change.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PropertyValue {
    U8(u8),
    U16(u16),
    U64(u64),
    F64(f64),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::U8(v) => write!(f, "{v}"),
            PropertyValue::U16(v) => write!(f, "{v}"),
            PropertyValue::U64(v) => write!(f, "{v}"),
            PropertyValue::F64(v) => write!(f, "{v}"),
        }
    }
}

/// One property mutation. Only emitted when the value actually changed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RasterChange {
    pub property: RasterProperty,
    pub old: PropertyValue,
    pub new: PropertyValue,
}

/// Receives change events from an [`ObservedRaster`](crate::ObservedRaster).
pub trait ChangeListener {
    fn on_change(&mut self, change: &RasterChange);
}

/// Recorder: keeps every event in order.
impl ChangeListener for Vec<RasterChange> {
    fn on_change(&mut self, change: &RasterChange) {
        self.push(*change);
    }
}

impl<L: ChangeListener + ?Sized> ChangeListener for &mut L {
    fn on_change(&mut self, change: &RasterChange) {
        (**self).on_change(change);
    }
}

/// Adapter turning a closure into a listener.
pub struct FnListener<F>(pub F);

impl<F: FnMut(&RasterChange)> ChangeListener for FnListener<F> {
    fn on_change(&mut self, change: &RasterChange) {
        (self.0)(change);
    }
}

/* ---------------------------------- Tests --------------------------------- */
