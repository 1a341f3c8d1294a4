//! Frequency-domain carriers: quantized DCT coefficient arrays.
//!
//! The JPEG container itself (Huffman tables, quantization, entropy coding) is
//! the job of an external transform codec. That codec hands over one
//! [`Component`] per color component: the quantized integer coefficients,
//! grouped in 8x8 blocks, which it can later re-serialize bit-exact with the
//! original tables. The codecs in [`jsteg`] and [`f5`] only ever touch AC
//! coefficients of a private working copy and hand back the edited components
//! on full success.

pub mod f5;
pub mod jsteg;
pub mod zigzag;

pub use f5::F5Codec;
pub use jsteg::JstegCodec;

use crate::error::StegoError;
use crate::result::Result;

pub const BLOCK_EDGE: usize = 8;
pub const BLOCK_LEN: usize = BLOCK_EDGE * BLOCK_EDGE;

/// One color component's coefficient array as produced by a transform codec.
///
/// Blocks are stored row-major over the block grid; inside each block the 64
/// coefficients are in natural (row-major) order, DC first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    block_shape: (usize, usize),
    blocks_wide: usize,
    blocks_high: usize,
    coefficients: Vec<i16>,
}

impl Component {
    /// Wraps a standard 8x8-block coefficient array.
    pub fn new(blocks_wide: usize, blocks_high: usize, coefficients: Vec<i16>) -> Result<Self> {
        Self::with_block_shape((BLOCK_EDGE, BLOCK_EDGE), blocks_wide, blocks_high, coefficients)
    }

    /// Wraps a coefficient array with an explicit block shape. Shapes other
    /// than 8x8 are accepted here but rejected by every codec the moment the
    /// component is scanned.
    pub fn with_block_shape(
        block_shape: (usize, usize),
        blocks_wide: usize,
        blocks_high: usize,
        coefficients: Vec<i16>,
    ) -> Result<Self> {
        let expected = blocks_wide * blocks_high * block_shape.0 * block_shape.1;
        if coefficients.len() != expected {
            return Err(StegoError::InvalidCoefficientLayout {
                actual: coefficients.len(),
                expected,
            });
        }

        Ok(Self {
            block_shape,
            blocks_wide,
            blocks_high,
            coefficients,
        })
    }

    pub fn block_shape(&self) -> (usize, usize) {
        self.block_shape
    }

    pub fn blocks_wide(&self) -> usize {
        self.blocks_wide
    }

    pub fn blocks_high(&self) -> usize {
        self.blocks_high
    }

    pub fn block_count(&self) -> usize {
        self.blocks_wide * self.blocks_high
    }

    pub fn coefficients(&self) -> &[i16] {
        &self.coefficients
    }

    /// Reads a single coefficient by block grid position and in-block cell.
    pub fn coefficient(&self, block_row: usize, block_col: usize, row: usize, col: usize) -> i16 {
        let block = block_row * self.blocks_wide + block_col;
        let cell = row * self.block_shape.1 + col;
        self.coefficients[block * self.block_shape.0 * self.block_shape.1 + cell]
    }

    pub(crate) fn coefficients_mut(&mut self) -> &mut [i16] {
        &mut self.coefficients
    }
}

/// Dry pre-scan: counts the AC coefficients matching `eligible` across all
/// components, in the exact embedding traversal order.
pub(crate) fn count_eligible_ac(
    components: &[Component],
    eligible: fn(i16) -> bool,
) -> Result<usize> {
    let mut slots = 0;
    for component in components {
        let order = zigzag::scan_order(component.block_shape())?;
        let coefficients = component.coefficients();
        for block in 0..component.block_count() {
            let base = block * BLOCK_LEN;
            slots += order[1..]
                .iter()
                .filter(|&&natural| eligible(coefficients[base + natural]))
                .count();
        }
    }
    Ok(slots)
}
