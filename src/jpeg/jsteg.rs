//! JSteg-style embedding: direct LSB replacement on eligible AC coefficients.
//!
//! A coefficient carries a bit when its value is outside {0, 1}. Zero stays
//! zero so the entropy coder keeps its run lengths, and +1 is excluded because
//! clearing its LSB would turn it into a zero-class coefficient; -1 remains
//! eligible since `(-1 & !1) | bit` stays outside {0, 1}. Both sides recompute
//! eligibility from the value alone, so traversal order is the only contract
//! between embed and extract.

use crate::payload::{self, bits, EccMode, Extraction};
use crate::result::Result;
use crate::StegoError;

use super::{count_eligible_ac, zigzag, Component, BLOCK_LEN};

fn carries_bit(value: i16) -> bool {
    value != 0 && value != 1
}

pub struct JstegCodec;

impl JstegCodec {
    /// Number of payload bits the components can hold, by dry pre-scan.
    pub fn capacity(components: &[Component]) -> Result<usize> {
        count_eligible_ac(components, carries_bit)
    }

    /// Embeds `payload` and returns the edited components. The input is
    /// untouched; on any failure no edited state escapes.
    pub fn embed(
        components: &[Component],
        payload: &[u8],
        ecc: EccMode,
    ) -> Result<Vec<Component>> {
        let stream = payload::frame(payload, ecc, &bits::frequency_delimiter_bits());
        let available = Self::capacity(components)?;
        if stream.len() > available {
            return Err(StegoError::CapacityExceeded {
                required: stream.len(),
                available,
            });
        }

        let mut work = components.to_vec();
        let mut cursor = 0;
        'scan: for component in work.iter_mut() {
            let order = zigzag::scan_order(component.block_shape())?;
            let block_count = component.block_count();
            let coefficients = component.coefficients_mut();
            for block in 0..block_count {
                let base = block * BLOCK_LEN;
                for &natural in &order[1..] {
                    if cursor == stream.len() {
                        break 'scan;
                    }
                    let coefficient = &mut coefficients[base + natural];
                    if !carries_bit(*coefficient) {
                        continue;
                    }
                    *coefficient = (*coefficient & !1) | i16::from(stream[cursor]);
                    cursor += 1;
                }
            }
        }

        debug_assert_eq!(cursor, stream.len());
        log::debug!("jsteg: embedded {cursor} bits into {available} eligible coefficients");
        Ok(work)
    }

    /// Reads eligible-coefficient LSBs until the delimiter suffix appears.
    pub fn extract(components: &[Component], ecc: EccMode) -> Result<Extraction> {
        let delimiter = bits::frequency_delimiter_bits();
        let mut buffer = Vec::new();
        let mut found = false;

        'scan: for component in components {
            let order = zigzag::scan_order(component.block_shape())?;
            let coefficients = component.coefficients();
            for block in 0..component.block_count() {
                let base = block * BLOCK_LEN;
                for &natural in &order[1..] {
                    let value = coefficients[base + natural];
                    if !carries_bit(value) {
                        continue;
                    }
                    buffer.push(value & 1 == 1);
                    if bits::ends_with(&buffer, &delimiter) {
                        buffer.truncate(buffer.len() - delimiter.len());
                        found = true;
                        break 'scan;
                    }
                }
            }
        }

        if !found {
            log::warn!(
                "jsteg: no delimiter after {} extracted bits, payload is best-effort",
                buffer.len()
            );
        }
        payload::unframe(&buffer, ecc, found)
    }
}
