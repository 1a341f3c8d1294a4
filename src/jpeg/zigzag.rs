//! The fixed zigzag traversal of an 8x8 coefficient block.
//!
//! Both frequency-domain codecs address carrier bits in block-raster x zigzag
//! order, so this table is the shared addressing scheme between embedder and
//! extractor. Index 0 is the DC coefficient at (0,0) and is never used as a
//! carrier position.

use crate::error::StegoError;
use crate::result::Result;

use super::{BLOCK_EDGE, BLOCK_LEN};

/// Natural (row-major) index of each zigzag position, standard JPEG order.
const NATURAL_FROM_ZIGZAG: [usize; BLOCK_LEN] = [
    0, 1, 8, 16, 9, 2, 3, 10, //
    17, 24, 32, 25, 18, 11, 4, 5, //
    12, 19, 26, 33, 40, 48, 41, 34, //
    27, 20, 13, 6, 7, 14, 21, 28, //
    35, 42, 49, 56, 57, 50, 43, 36, //
    29, 22, 15, 23, 30, 37, 44, 51, //
    58, 59, 52, 45, 38, 31, 39, 46, //
    53, 60, 61, 54, 47, 55, 62, 63,
];

/// Returns the zigzag scan order as natural in-block indices.
///
/// Only 8x8 blocks have a defined traversal; any other shape coming out of a
/// transform codec is rejected before a single coefficient is read.
pub fn scan_order(block_shape: (usize, usize)) -> Result<&'static [usize; BLOCK_LEN]> {
    if block_shape != (BLOCK_EDGE, BLOCK_EDGE) {
        return Err(StegoError::UnsupportedBlockShape {
            width: block_shape.0,
            height: block_shape.1,
        });
    }
    Ok(&NATURAL_FROM_ZIGZAG)
}

/// The 64 `(row, col)` pairs of the traversal, index 0 = DC at (0,0).
pub fn positions(block_shape: (usize, usize)) -> Result<[(usize, usize); BLOCK_LEN]> {
    let order = scan_order(block_shape)?;
    let mut pairs = [(0, 0); BLOCK_LEN];
    for (zz, &natural) in order.iter().enumerate() {
        pairs[zz] = (natural / BLOCK_EDGE, natural % BLOCK_EDGE);
    }
    Ok(pairs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traversal_starts_at_dc_and_walks_the_first_diagonal() {
        let pairs = positions((8, 8)).unwrap();
        assert_eq!(pairs[0], (0, 0));
        assert_eq!(pairs[1], (0, 1));
        assert_eq!(pairs[2], (1, 0));
        assert_eq!(pairs[3], (2, 0));
        assert_eq!(pairs[4], (1, 1));
        assert_eq!(pairs[5], (0, 2));
    }

    #[test]
    fn traversal_ends_in_the_bottom_right_corner() {
        let pairs = positions((8, 8)).unwrap();
        assert_eq!(pairs[62], (7, 6));
        assert_eq!(pairs[63], (7, 7));
    }

    #[test]
    fn traversal_visits_every_position_exactly_once() {
        let order = scan_order((8, 8)).unwrap();
        let mut seen = [false; BLOCK_LEN];
        for &natural in order {
            assert!(!seen[natural], "natural index {natural} visited twice");
            seen[natural] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn consecutive_positions_stay_adjacent() {
        // each zigzag step moves to a neighboring cell (diagonal included)
        let pairs = positions((8, 8)).unwrap();
        for window in pairs.windows(2) {
            let dr = window[0].0.abs_diff(window[1].0);
            let dc = window[0].1.abs_diff(window[1].1);
            assert!(dr <= 1 && dc <= 1, "jump between {:?} and {:?}", window[0], window[1]);
        }
    }

    #[test]
    fn non_square_blocks_are_rejected() {
        assert!(matches!(
            scan_order((8, 16)),
            Err(StegoError::UnsupportedBlockShape {
                width: 8,
                height: 16
            })
        ));
        assert!(matches!(
            positions((4, 4)),
            Err(StegoError::UnsupportedBlockShape { width: 4, height: 4 })
        ));
    }
}
