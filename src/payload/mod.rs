//! Payload framing shared by all carrier codecs.
//!
//! Embedding side: `frame` turns bytes into the self-delimiting bit stream
//! `parity(payload bits) ++ delimiter`. Extraction side: the codec collects
//! carrier bits until it sees the delimiter suffix, then `unframe` reverses
//! the parity layer and packs bytes.

pub mod bits;
pub mod parity;

pub use parity::{EccMode, ParityDecode};

use crate::result::Result;

/// What an extraction scan recovered.
///
/// A missing delimiter is deliberately not an error: the accumulated bits are
/// returned as best-effort data so a caller comparing against a known payload
/// still learns something.
#[derive(Debug, PartialEq, Eq)]
pub struct Extraction {
    pub payload: Vec<u8>,
    /// False when the scan exhausted the carrier without a delimiter match;
    /// the payload is then non-authoritative.
    pub delimiter_found: bool,
    /// Parity blocks that failed verification (always 0 in `EccMode::None`).
    pub parity_errors: usize,
}

/// Builds the embedding bit stream for a payload. The delimiter is appended
/// after the parity layer so its pattern is never rewritten by it.
pub(crate) fn frame(payload: &[u8], ecc: EccMode, delimiter: &[bool]) -> Vec<bool> {
    let mut stream = parity::encode(&bits::payload_to_bits(payload), ecc);
    stream.extend_from_slice(delimiter);
    stream
}

/// Reverses `frame` on the bits a codec collected before the delimiter.
pub(crate) fn unframe(raw: &[bool], ecc: EccMode, delimiter_found: bool) -> Result<Extraction> {
    let decoded = parity::decode(raw, ecc)?;
    if decoded.parity_errors > 0 {
        log::warn!(
            "{} parity block(s) failed verification, payload kept uncorrected",
            decoded.parity_errors
        );
    }

    Ok(Extraction {
        payload: bits::bits_to_payload(&decoded.bits)?,
        delimiter_found,
        parity_errors: decoded.parity_errors,
    })
}
