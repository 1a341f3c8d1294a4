//! Carrier media handled by external container codecs.
//!
//! Only lossless raster images live here; frequency-domain carriers are
//! coefficient arrays and belong to [`crate::jpeg`].

pub mod image;
