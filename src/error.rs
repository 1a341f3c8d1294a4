use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a framed bit stream that does not fit the carrier, detected
    /// by the dry pre-scan before any coefficient or pixel is touched
    #[error("carrier capacity exceeded: {required} bits required but only {available} available")]
    CapacityExceeded { required: usize, available: usize },

    /// Represents an F5 embedding that ran out of usable coefficients after a
    /// full traversal. The pre-scan counts nonzero coefficients, which is only
    /// an upper bound: a |1| coefficient that needs a flip cannot carry its bit
    #[error("message too large: only {embedded} of {required} bits fit after full traversal")]
    MessageTooLarge { embedded: usize, required: usize },

    /// Represents a parity decode input shorter than one full parity block
    #[error("parity stream of {len} bits holds no complete 9-bit block")]
    MalformedLength { len: usize },

    /// Represents a coefficient block shape other than 8x8
    #[error("unsupported coefficient block shape {width}x{height}, only 8x8 blocks are supported")]
    UnsupportedBlockShape { width: usize, height: usize },

    /// Represents a coefficient array whose length disagrees with the declared block grid
    #[error("coefficient array holds {actual} values but the block grid requires {expected}")]
    InvalidCoefficientLayout { actual: usize, expected: usize },

    /// Represents a failure of the external pixel codec, propagated as-is
    #[error("carrier media is unavailable: {0}")]
    CarrierUnavailable(#[from] image::ImageError),

    /// Represents a failure in the bit-level plumbing
    #[error("bit I/O error: {0}")]
    BitIo(#[from] std::io::Error),
}
