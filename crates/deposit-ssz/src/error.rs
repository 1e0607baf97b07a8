//! Error types for the deposit SSZ facade.

use deposit_ssz_core::CodecError;
use thiserror::Error;

/// Errors that can occur during batch encoding and decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// A frame in a batch failed to decode.
    #[error("frame {index}: {source}")]
    Frame {
        index: usize,
        #[source]
        source: CodecError,
    },

    /// A blocking worker panicked or was cancelled.
    #[error("batch worker failed: {0}")]
    Worker(String),
}

/// Result type for facade operations.
pub type Result<T> = std::result::Result<T, Error>;
