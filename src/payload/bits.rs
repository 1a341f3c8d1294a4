//! Byte/bit conversion and the end-of-payload delimiters.
//!
//! A payload is expanded to one `bool` per bit, MSB first, so that the bit at
//! stream index `i` always lands on carrier position `i`. The delimiters are
//! appended raw (never parity-protected); extraction recognizes the end of the
//! payload by suffix match instead of a length prefix.

use std::io::Cursor;

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

use crate::result::Result;

/// End-of-payload marker for the spatial (pixel LSB) carrier, embedded as the
/// big-endian bit expansion of these 7 ASCII bytes (56 bits).
pub const SPATIAL_DELIMITER: &[u8] = b"<-END->";

/// End-of-payload marker for the frequency (DCT coefficient) carriers:
/// `0111111001111110`, two repetitions of `0x7E`. Shorter than the spatial
/// marker because eligible coefficients are far scarcer than pixels.
pub const FREQUENCY_DELIMITER: [u8; 2] = [0x7E, 0x7E];

/// Expands a payload to its bit sequence, 8 bits per byte, MSB first.
pub fn payload_to_bits(payload: &[u8]) -> Vec<bool> {
    let mut reader = BitReader::endian(Cursor::new(payload), BigEndian);
    let mut bits = Vec::with_capacity(payload.len() * 8);
    while let Ok(bit) = reader.read_bit() {
        bits.push(bit);
    }
    bits
}

/// Packs a bit sequence back into bytes, MSB first. A trailing partial byte
/// carries no recoverable data and is dropped.
pub fn bits_to_payload(bits: &[bool]) -> Result<Vec<u8>> {
    let aligned = bits.len() - bits.len() % 8;
    if aligned < bits.len() {
        log::debug!(
            "dropping {} trailing bits of a partial final byte",
            bits.len() - aligned
        );
    }

    let mut payload = Vec::with_capacity(aligned / 8);
    let mut writer = BitWriter::endian(&mut payload, BigEndian);
    for &bit in &bits[..aligned] {
        writer.write_bit(bit)?;
    }
    Ok(payload)
}

pub fn spatial_delimiter_bits() -> Vec<bool> {
    payload_to_bits(SPATIAL_DELIMITER)
}

pub fn frequency_delimiter_bits() -> Vec<bool> {
    payload_to_bits(&FREQUENCY_DELIMITER)
}

/// Suffix test run after every extracted bit. A payload whose own bit
/// expansion contains the delimiter truncates extraction at that point; this
/// is inherent to unauthenticated delimiter framing and not treated as a
/// defect.
pub fn ends_with(bits: &[bool], pattern: &[bool]) -> bool {
    bits.len() >= pattern.len() && bits[bits.len() - pattern.len()..] == *pattern
}
