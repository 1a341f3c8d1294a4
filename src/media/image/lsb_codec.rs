//! Spatial-domain embedding: one payload bit per pixel in a single channel.
//!
//! The scan is plain raster order (row-major, left to right, top to bottom)
//! over every pixel, writing or reading the least-significant bit of the
//! selected color channel. Order is the whole contract: the extractor walks
//! the same pixels and stops at the 56-bit `<-END->` suffix.

use image::RgbaImage;

use crate::payload::{self, bits, EccMode, Extraction};
use crate::result::Result;
use crate::StegoError;

/// The color channel carrying the payload. Alpha is never used: many
/// carriers are fully opaque and a perturbed alpha plane is conspicuous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChannel {
    #[default]
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    fn offset(self) -> usize {
        match self {
            ColorChannel::Red => 0,
            ColorChannel::Green => 1,
            ColorChannel::Blue => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SpatialOptions {
    pub channel: ColorChannel,
    pub ecc: EccMode,
}

pub struct LsbCodec;

impl LsbCodec {
    /// One bit per pixel in the chosen channel.
    pub fn capacity(carrier: &RgbaImage) -> usize {
        (carrier.width() * carrier.height()) as usize
    }

    /// Embeds `payload` into a copy of the carrier; the source buffer is
    /// never mutated and pixels beyond the bit stream stay untouched.
    pub fn embed(
        carrier: &RgbaImage,
        payload: &[u8],
        options: &SpatialOptions,
    ) -> Result<RgbaImage> {
        let stream = payload::frame(payload, options.ecc, &bits::spatial_delimiter_bits());
        let available = Self::capacity(carrier);
        if stream.len() > available {
            return Err(StegoError::CapacityExceeded {
                required: stream.len(),
                available,
            });
        }

        let mut stego = carrier.clone();
        let offset = options.channel.offset();
        let mut cursor = stream.iter();
        for pixel in stego.pixels_mut() {
            let Some(&bit) = cursor.next() else {
                break;
            };
            let channel = &mut pixel.0[offset];
            *channel = (*channel & !1) | u8::from(bit);
        }

        log::debug!(
            "lsb: embedded {} bits into {available} pixels via {:?}",
            stream.len(),
            options.channel
        );
        Ok(stego)
    }

    /// Reads channel LSBs in raster order until the delimiter suffix appears.
    pub fn extract(carrier: &RgbaImage, options: &SpatialOptions) -> Result<Extraction> {
        let delimiter = bits::spatial_delimiter_bits();
        let offset = options.channel.offset();
        let mut buffer = Vec::with_capacity(Self::capacity(carrier).min(1 << 16));
        let mut found = false;

        for pixel in carrier.pixels() {
            buffer.push(pixel.0[offset] & 1 == 1);
            if bits::ends_with(&buffer, &delimiter) {
                buffer.truncate(buffer.len() - delimiter.len());
                found = true;
                break;
            }
        }

        if !found {
            log::warn!(
                "lsb: no delimiter after scanning {} pixels, payload is best-effort",
                buffer.len()
            );
        }
        payload::unframe(&buffer, options.ecc, found)
    }
}
