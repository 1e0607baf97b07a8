//! # Deposit SSZ Core
//!
//! Canonical simple-serialize (SSZ) encoding for validator deposit records.
//!
//! This crate contains no I/O, no storage, no networking, and no signature
//! cryptography. It is pure computation over fixed-width byte values.
//!
//! ## Key Types
//!
//! - [`FixedBytes`] - Owned byte vector whose width is part of the type
//!   ([`Bytes48`], [`Bytes32`])
//! - [`BlsSignature`] - Ordered pair of 48-byte components
//! - [`DepositInput`] - Public key, withdrawal credentials and proof of
//!   possession
//!
//! ## Encoding
//!
//! A [`DepositInput`] encodes to exactly 176 bytes:
//!
//! ```rust
//! use deposit_ssz_core::{decode, encode, BlsSignature, Bytes32, Bytes48, DepositInput};
//!
//! let input = DepositInput::new(
//!     Bytes48::from_array([1; 48]),
//!     Bytes32::from_array([2; 32]),
//!     BlsSignature::new(Bytes48::from_array([3; 48]), Bytes48::from_array([4; 48])),
//! );
//!
//! let bytes = encode(&input);
//! assert_eq!(bytes.len(), DepositInput::WIDTH);
//! assert_eq!(decode(&bytes).unwrap(), input);
//! ```
//!
//! [`DepositInput`] implements the `ethereum_ssz` [`Encode`] and [`Decode`]
//! traits, so it can be embedded in larger containers, including ones with
//! variable-length fields. Hash tree roots come from the `tree_hash`
//! [`TreeHash`] trait.

pub mod deposit;
pub mod error;
pub mod fixed_bytes;
pub mod signature;

pub use deposit::{decode, encode, DepositInput};
pub use error::{CodecError, Result};
pub use fixed_bytes::{Bytes32, Bytes48, FixedBytes};
pub use signature::{BlsSignature, SignatureScheme};
pub use ssz::{Decode, Encode};
pub use tree_hash::{Hash256, TreeHash};
