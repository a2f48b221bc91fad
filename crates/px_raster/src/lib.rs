//! px_raster: Raster image descriptor.
//!
//! Holds the original size, resolution, channel layout and payload location
//! of a captured frame. Mutation goes through setters that return explicit
//! [`RasterChange`] events; [`ObservedRaster`] forwards them to an injected
//! [`ChangeListener`].
//!
//! The descriptor depends on `px_core` for its sizing helpers; `px_core`
//! never reads or writes it.

#![forbid(unsafe_code)]

pub mod descriptor;
pub mod notify;

pub use descriptor::{ObservedRaster, RasterDescriptor, DEFAULT_BITS_PER_CHANNEL, DEFAULT_CHANNEL_COUNT};
pub use notify::{ChangeListener, FnListener, PropertyValue, RasterChange, RasterProperty};
