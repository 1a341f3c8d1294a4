//! # Stegobit
//!
//! Steganographic payload codecs that hide an arbitrary byte payload inside a
//! carrier image and later recover it exactly. Two carrier domains are
//! supported, with one codec family each:
//!
//! - [`LsbCodec`] writes one payload bit into the least-significant bit of a
//!   single color channel per pixel of a lossless raster (PNG) carrier.
//! - [`JstegCodec`] and [`F5Codec`] write one payload bit per quantized AC
//!   DCT coefficient of a JPEG carrier, under JSteg's direct-LSB rule or F5's
//!   magnitude-shrink rule respectively.
//!
//! Payloads are framed as a self-delimiting bit stream (optional per-byte
//! parity protection via [`EccMode`], followed by a fixed delimiter pattern),
//! so no length prefix ever appears in the carrier. Decoding the PNG and JPEG
//! containers themselves is the job of external codecs: the `image` crate
//! supplies pixel buffers, and a transform codec supplies the per-component
//! coefficient arrays wrapped in [`jpeg::Component`].
//!
//! ## Hide a message in a raster image
//!
//! ```rust
//! use stegobit::{ColorChannel, EccMode, LsbCodec, SpatialOptions};
//!
//! let carrier = image::RgbaImage::from_fn(64, 64, |x, y| {
//!     image::Rgba([(x * 3) as u8, (y * 5) as u8, (x + y) as u8, 255])
//! });
//! let options = SpatialOptions {
//!     channel: ColorChannel::Blue,
//!     ecc: EccMode::Parity,
//! };
//!
//! let stego = LsbCodec::embed(&carrier, b"meet at dawn", &options).unwrap();
//! let found = LsbCodec::extract(&stego, &options).unwrap();
//!
//! assert!(found.delimiter_found);
//! assert_eq!(found.payload, b"meet at dawn");
//! ```
//!
//! ## Hide a message in JPEG coefficients
//!
//! ```rust
//! use stegobit::jpeg::Component;
//! use stegobit::{EccMode, F5Codec};
//!
//! // coefficient arrays normally come from a JPEG transform codec
//! let mut coefficients = vec![0i16; 64 * 64];
//! for (i, c) in coefficients.iter_mut().enumerate() {
//!     if i % 64 != 0 {
//!         *c = ((i % 23) as i16) - 11;
//!     }
//! }
//! let cover = vec![Component::new(8, 8, coefficients).unwrap()];
//!
//! let stego = F5Codec::embed(&cover, b"Hi", EccMode::None).unwrap();
//! let found = F5Codec::extract(&stego, EccMode::None).unwrap();
//! assert_eq!(found.payload, b"Hi");
//! ```

pub mod error;
pub mod jpeg;
pub mod media;
pub mod payload;
pub mod result;

pub use crate::error::StegoError;
pub use crate::jpeg::{Component, F5Codec, JstegCodec};
pub use crate::media::image::{ColorChannel, LsbCodec, SpatialOptions};
pub use crate::payload::{EccMode, Extraction};
pub use crate::result::Result;
