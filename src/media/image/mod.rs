//! Lossless raster carriers, backed by the `image` crate.
//!
//! The spatial codec only holds up when integer channel values round-trip
//! exactly, so carriers are written back as PNG regardless of what format
//! they were decoded from.

pub mod lsb_codec;

pub use lsb_codec::{ColorChannel, LsbCodec, SpatialOptions};

use std::path::Path;

use image::RgbaImage;

use crate::result::Result;

/// Decodes a carrier image into per-pixel channel values.
pub fn open_carrier(path: impl AsRef<Path>) -> Result<RgbaImage> {
    Ok(image::open(path)?.to_rgba8())
}

/// Re-encodes a carrier losslessly. The target path decides nothing: the
/// output is always PNG so no recompression can disturb embedded bits.
pub fn save_carrier(carrier: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    carrier.save_with_format(path, image::ImageFormat::Png)?;
    Ok(())
}
