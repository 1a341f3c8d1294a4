//! Per-byte even-parity protection for the framed bit stream.
//!
//! Detection only, no correction: each 8-bit group carries one parity bit and
//! a mismatch on decode is counted, not repaired. Pass-through is a mode of
//! the same functions, not a separate code path, so callers always run their
//! bit streams through `encode`/`decode` regardless of configuration.

use crate::error::StegoError;
use crate::result::Result;

const DATA_BITS: usize = 8;
const BLOCK_BITS: usize = DATA_BITS + 1;

/// Forward-error-detection mode for the payload bit stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EccMode {
    /// No parity bits; encode/decode pass the stream through unchanged.
    #[default]
    None,
    /// One even-parity bit per 8 data bits.
    Parity,
}

/// Outcome of a parity decode.
#[derive(Debug, PartialEq, Eq)]
pub struct ParityDecode {
    /// The data bits with parity bits stripped (kept uncorrected on mismatch).
    pub bits: Vec<bool>,
    /// Number of 9-bit blocks whose parity disagreed.
    pub parity_errors: usize,
    /// Trailing bits beyond the last complete 9-bit block, dropped.
    pub dropped_bits: usize,
}

/// Appends one even-parity bit per 8-bit group. A final group shorter than 8
/// bits is zero-padded before its parity bit; the normal framing pipeline is
/// byte-aligned and never hits that case.
pub fn encode(bits: &[bool], mode: EccMode) -> Vec<bool> {
    if mode == EccMode::None {
        return bits.to_vec();
    }

    let mut encoded = Vec::with_capacity(bits.len().div_ceil(DATA_BITS) * BLOCK_BITS);
    for group in bits.chunks(DATA_BITS) {
        let mut parity = false;
        for &bit in group {
            encoded.push(bit);
            parity ^= bit;
        }
        for _ in group.len()..DATA_BITS {
            encoded.push(false);
        }
        encoded.push(parity);
    }
    encoded
}

/// Strips and verifies the parity bit of each 9-bit block.
///
/// Data bits are kept even when their parity disagrees; the caller learns the
/// mismatch count and decides how much to trust the result. Trailing bits that
/// do not fill a block are dropped and reported. A nonempty input shorter than
/// one block holds no decodable data at all and fails with `MalformedLength`.
pub fn decode(bits: &[bool], mode: EccMode) -> Result<ParityDecode> {
    if mode == EccMode::None {
        return Ok(ParityDecode {
            bits: bits.to_vec(),
            parity_errors: 0,
            dropped_bits: 0,
        });
    }

    let aligned = bits.len() - bits.len() % BLOCK_BITS;
    if aligned == 0 && !bits.is_empty() {
        return Err(StegoError::MalformedLength { len: bits.len() });
    }

    let dropped_bits = bits.len() - aligned;
    if dropped_bits > 0 {
        log::debug!("dropping {dropped_bits} trailing bits beyond the last parity block");
    }

    let mut data = Vec::with_capacity(aligned / BLOCK_BITS * DATA_BITS);
    let mut parity_errors = 0;
    for block in bits[..aligned].chunks(BLOCK_BITS) {
        let expected = block[..DATA_BITS].iter().fold(false, |acc, &b| acc ^ b);
        if expected != block[DATA_BITS] {
            parity_errors += 1;
        }
        data.extend_from_slice(&block[..DATA_BITS]);
    }

    Ok(ParityDecode {
        bits: data,
        parity_errors,
        dropped_bits,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::bits::payload_to_bits;

    #[test]
    fn pass_through_mode_is_a_no_op() {
        let bits = payload_to_bits(b"plain");
        assert_eq!(encode(&bits, EccMode::None), bits);
        let decoded = decode(&bits, EccMode::None).unwrap();
        assert_eq!(decoded.bits, bits);
        assert_eq!(decoded.parity_errors, 0);
    }

    #[test]
    fn encoded_length_is_nine_bits_per_byte() {
        let bits = payload_to_bits(b"four bytes!!");
        let encoded = encode(&bits, EccMode::Parity);
        assert_eq!(encoded.len(), bits.len() / 8 * 9);
    }

    #[test]
    fn should_round_trip_without_errors() {
        let bits = payload_to_bits(b"parity protected");
        let decoded = decode(&encode(&bits, EccMode::Parity), EccMode::Parity).unwrap();
        assert_eq!(decoded.bits, bits);
        assert_eq!(decoded.parity_errors, 0);
        assert_eq!(decoded.dropped_bits, 0);
    }

    #[test]
    fn parity_bit_makes_each_block_even() {
        // 0xFF has eight ones, parity bit must be 0; 0x01 has one, parity 1
        let encoded = encode(&payload_to_bits(&[0xff, 0x01]), EccMode::Parity);
        assert!(!encoded[8]);
        assert!(encoded[17]);
    }

    #[test]
    fn single_bit_flip_is_detected() {
        let bits = payload_to_bits(b"x");
        let mut encoded = encode(&bits, EccMode::Parity);
        encoded[3] = !encoded[3];

        let decoded = decode(&encoded, EccMode::Parity).unwrap();
        assert!(decoded.parity_errors >= 1);
        // detection only: the damaged data bits come back uncorrected
        assert_ne!(decoded.bits, bits);
    }

    #[test]
    fn parity_preserving_double_flip_goes_unnoticed() {
        // a known false negative of single-parity detection
        let bits = payload_to_bits(b"x");
        let mut encoded = encode(&bits, EccMode::Parity);
        encoded[0] = !encoded[0];
        encoded[1] = !encoded[1];

        let decoded = decode(&encoded, EccMode::Parity).unwrap();
        assert_eq!(decoded.parity_errors, 0);
    }

    #[test]
    fn trailing_bits_beyond_the_last_block_are_dropped_and_reported() {
        let bits = payload_to_bits(b"ab");
        let mut encoded = encode(&bits, EccMode::Parity);
        encoded.extend([true, false, true, true]);

        let decoded = decode(&encoded, EccMode::Parity).unwrap();
        assert_eq!(decoded.bits, bits);
        assert_eq!(decoded.dropped_bits, 4);
    }

    #[test]
    fn nonempty_input_shorter_than_one_block_is_malformed() {
        let result = decode(&[true, false, true], EccMode::Parity);
        assert!(matches!(
            result,
            Err(crate::StegoError::MalformedLength { len: 3 })
        ));
    }

    #[test]
    fn empty_input_decodes_to_empty() {
        let decoded = decode(&[], EccMode::Parity).unwrap();
        assert!(decoded.bits.is_empty());
        assert_eq!(decoded.parity_errors, 0);
    }

    #[test]
    fn short_final_group_is_zero_padded() {
        let encoded = encode(&[true, true, true], EccMode::Parity);
        assert_eq!(encoded.len(), 9);
        assert_eq!(&encoded[..3], &[true, true, true]);
        assert_eq!(&encoded[3..8], &[false; 5]);
        assert!(encoded[8]); // three ones -> odd -> parity bit set
    }
}
