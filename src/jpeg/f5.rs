//! F5-style embedding: magnitude shrink on LSB mismatch.
//!
//! Every nonzero AC coefficient is a carrier position. When its LSB already
//! equals the next payload bit the coefficient is left alone; otherwise its
//! magnitude shrinks by one toward zero, which flips the LSB. Shrinking a |1|
//! coefficient produces zero: the position vanishes from the extractor's
//! view entirely, so the cursor does not advance and the same bit is retried
//! on the next coefficient. Extraction has no special case: it reads the LSB
//! of every nonzero coefficient, and every coefficient that carries a bit is
//! guaranteed to still be nonzero.
//!
//! This is the shrink primitive only, not full F5: matrix encoding and
//! permutative straddling are out of scope.

use crate::payload::{self, bits, EccMode, Extraction};
use crate::result::Result;
use crate::StegoError;

use super::{count_eligible_ac, zigzag, Component, BLOCK_LEN};

fn carries_bit(value: i16) -> bool {
    value != 0
}

pub struct F5Codec;

impl F5Codec {
    /// Nonzero AC coefficient count across all components. An upper bound on
    /// the real capacity: a |1| coefficient that needs a flip shrinks away
    /// instead of carrying its bit.
    pub fn capacity(components: &[Component]) -> Result<usize> {
        count_eligible_ac(components, carries_bit)
    }

    /// Embeds `payload` and returns the edited components, or fails without
    /// committing any edit.
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
        let mut shrinkage = 0usize;
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
                    let value = *coefficient;
                    if value == 0 {
                        continue;
                    }
                    if (value & 1 == 1) == stream[cursor] {
                        cursor += 1;
                        continue;
                    }
                    *coefficient = if value > 0 { value - 1 } else { value + 1 };
                    if *coefficient == 0 {
                        // the position shrank away; the extractor will never
                        // see it, so the same bit is retried further on
                        shrinkage += 1;
                        continue;
                    }
                    cursor += 1;
                }
            }
        }

        if cursor < stream.len() {
            return Err(StegoError::MessageTooLarge {
                embedded: cursor,
                required: stream.len(),
            });
        }

        log::debug!(
            "f5: embedded {cursor} bits, {shrinkage} coefficients shrank away of {available} nonzero"
        );
        Ok(work)
    }

    /// Reads the LSB of every nonzero AC coefficient until the delimiter
    /// suffix appears.
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
                    if value == 0 {
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
                "f5: no delimiter after {} extracted bits, payload is best-effort",
                buffer.len()
            );
        }
        payload::unframe(&buffer, ecc, found)
    }
}
