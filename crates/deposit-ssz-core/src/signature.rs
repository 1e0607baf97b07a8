//! Two-component BLS signature wrapper.
//!
//! The core stores and compares signatures but never interprets them. Signing
//! and verification belong to a [`SignatureScheme`] supplied by the caller.

use std::fmt;

use serde::{Deserialize, Serialize};
use ssz_derive::{Decode, Encode};
use tree_hash_derive::TreeHash;

use crate::fixed_bytes::Bytes48;

/// A signature as an ordered pair `(c0, c1)`.
///
/// Field order is part of identity: `(c1, c0)` is a different signature.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct BlsSignature {
    c0: Bytes48,
    c1: Bytes48,
}

impl BlsSignature {
    /// Encoded width: both components back to back.
    pub const WIDTH: usize = 2 * Bytes48::WIDTH;

    /// Create from two components, stored in the order given.
    pub const fn new(c0: Bytes48, c1: Bytes48) -> Self {
        Self { c0, c1 }
    }

    pub const fn c0(&self) -> &Bytes48 {
        &self.c0
    }

    pub const fn c1(&self) -> &Bytes48 {
        &self.c1
    }

    /// The same components in swapped order.
    pub fn reversed(&self) -> Self {
        Self {
            c0: self.c1,
            c1: self.c0,
        }
    }
}

impl fmt::Debug for BlsSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlsSignature")
            .field("c0", &self.c0)
            .field("c1", &self.c1)
            .finish()
    }
}

/// Signature capability provided outside this crate.
///
/// Implementations give the two components their cryptographic meaning.
pub trait SignatureScheme {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Check `signature` over `message` against `public_key`.
    fn verify(
        &self,
        public_key: &Bytes48,
        message: &[u8],
        signature: &BlsSignature,
    ) -> Result<(), Self::Error>;
}
