//! # Deposit SSZ
//!
//! Canonical encoding for validator deposit records, with a sharded batch
//! codec for callers that move many records at once.
//!
//! ## Overview
//!
//! - **Fixed-width values**: [`Bytes48`] and [`Bytes32`], owned and immutable
//! - **Signatures**: [`BlsSignature`], an ordered pair compared field by field
//! - **Records**: [`DepositInput`], encoded to exactly 176 bytes
//! - **Batches**: [`BatchCodec`] spreads work over the blocking pool
//!
//! ## Usage
//!
//! ```rust,no_run
//! use deposit_ssz::{BatchCodec, BatchConfig, BlsSignature, Bytes32, Bytes48, DepositInput};
//!
//! async fn example() -> deposit_ssz::Result<()> {
//!     let input = DepositInput::new(
//!         Bytes48::from_array([1; 48]),
//!         Bytes32::from_array([2; 32]),
//!         BlsSignature::new(Bytes48::from_array([3; 48]), Bytes48::from_array([4; 48])),
//!     );
//!
//!     let codec = BatchCodec::new(BatchConfig::default().with_shard_size(256));
//!     let frames = codec.encode_all(vec![input; 1000]).await?;
//!     let decoded = codec.decode_all(frames).await?;
//!     assert_eq!(decoded[0], input);
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `deposit_ssz::codec` - the pure codec crate (`deposit-ssz-core`)

pub mod batch;
pub mod error;

pub use deposit_ssz_core as codec;

pub use batch::{BatchCodec, BatchConfig};
pub use error::{Error, Result};

pub use deposit_ssz_core::{
    decode, encode, BlsSignature, Bytes32, Bytes48, CodecError, DepositInput, FixedBytes, Hash256,
    SignatureScheme, TreeHash,
};
