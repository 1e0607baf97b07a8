//! Error types for the deposit SSZ core.

use ssz::DecodeError;
use thiserror::Error;

/// Errors raised while constructing or decoding SSZ values.
///
/// Every variant is a deterministic function of the input: retrying with the
/// same bytes fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A fixed-width value was built from a slice of the wrong length.
    #[error("width mismatch: expected {expected} bytes, got {actual}")]
    WidthMismatch { expected: usize, actual: usize },

    /// The input length does not match the encoded width of the value.
    #[error("malformed encoding: expected {expected} bytes, got {actual}")]
    MalformedEncoding { expected: usize, actual: usize },

    /// A variable-length offset points outside the input, into the fixed
    /// part, or backwards.
    #[error("invalid offset {offset}")]
    InvalidOffset { offset: usize },

    /// Any other SSZ decode failure.
    #[error("invalid ssz: {0}")]
    InvalidSsz(String),

    #[error("invalid hex: {0}")]
    InvalidHex(String),
}

impl From<DecodeError> for CodecError {
    fn from(e: DecodeError) -> Self {
        match e {
            DecodeError::InvalidByteLength { len, expected } => CodecError::MalformedEncoding {
                expected,
                actual: len,
            },
            DecodeError::OffsetIntoFixedPortion(offset)
            | DecodeError::OffsetSkipsVariableBytes(offset)
            | DecodeError::OffsetsAreDecreasing(offset)
            | DecodeError::OffsetOutOfBounds(offset) => CodecError::InvalidOffset { offset },
            other => CodecError::InvalidSsz(format!("{:?}", other)),
        }
    }
}

impl From<hex::FromHexError> for CodecError {
    fn from(e: hex::FromHexError) -> Self {
        CodecError::InvalidHex(e.to_string())
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
