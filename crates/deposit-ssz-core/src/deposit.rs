//! DepositInput: the record a validator submits to register.
//!
//! A deposit input binds three fields:
//! - `pubkey`: the validator's BLS public key
//! - `withdrawal_credentials`: commitment to the withdrawal key
//! - `proof_of_possession`: signature over the signing root, proving the
//!   depositor holds the secret key for `pubkey`
//!
//! The canonical encoding is `pubkey || withdrawal_credentials || c0 || c1`,
//! exactly [`DepositInput::WIDTH`] bytes.

use bytes::{Buf, BufMut};
use serde::{Deserialize, Serialize};
use ssz::{Decode as _, Encode as _};
use ssz_derive::{Decode, Encode};
use tree_hash::{Hash256, TreeHash};
use tree_hash_derive::TreeHash;

use crate::error::{CodecError, Result};
use crate::fixed_bytes::{Bytes32, Bytes48};
use crate::signature::{BlsSignature, SignatureScheme};

/// Deposit record: immutable, compared field by field.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Encode, Decode, TreeHash,
)]
pub struct DepositInput {
    pubkey: Bytes48,
    withdrawal_credentials: Bytes32,
    proof_of_possession: BlsSignature,
}

impl DepositInput {
    /// Encoded width: 48 + 32 + 96.
    pub const WIDTH: usize = Bytes48::WIDTH + Bytes32::WIDTH + BlsSignature::WIDTH;

    pub const fn new(
        pubkey: Bytes48,
        withdrawal_credentials: Bytes32,
        proof_of_possession: BlsSignature,
    ) -> Self {
        Self {
            pubkey,
            withdrawal_credentials,
            proof_of_possession,
        }
    }

    pub const fn pubkey(&self) -> &Bytes48 {
        &self.pubkey
    }

    pub const fn withdrawal_credentials(&self) -> &Bytes32 {
        &self.withdrawal_credentials
    }

    pub const fn proof_of_possession(&self) -> &BlsSignature {
        &self.proof_of_possession
    }

    /// Encode to canonical bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.as_ssz_bytes()
    }

    /// Decode from canonical bytes.
    ///
    /// Fails with [`CodecError::MalformedEncoding`] unless `bytes` is exactly
    /// [`Self::WIDTH`] long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        // Check the total up front so short and long inputs report the same
        // expected width.
        if bytes.len() != Self::WIDTH {
            return Err(CodecError::MalformedEncoding {
                expected: Self::WIDTH,
                actual: bytes.len(),
            });
        }
        Ok(Self::from_ssz_bytes(bytes)?)
    }

    /// Write the canonical bytes to a sink.
    pub fn encode_to<B: BufMut>(&self, sink: &mut B) {
        sink.put_slice(self.pubkey.as_bytes());
        sink.put_slice(self.withdrawal_credentials.as_bytes());
        sink.put_slice(self.proof_of_possession.c0().as_bytes());
        sink.put_slice(self.proof_of_possession.c1().as_bytes());
    }

    /// Read one record from a source, consuming exactly [`Self::WIDTH`] bytes.
    ///
    /// Nothing is consumed on failure.
    pub fn decode_from<B: Buf>(source: &mut B) -> Result<Self> {
        if source.remaining() < Self::WIDTH {
            return Err(CodecError::MalformedEncoding {
                expected: Self::WIDTH,
                actual: source.remaining(),
            });
        }
        let mut raw = [0u8; Self::WIDTH];
        source.copy_to_slice(&mut raw);
        Self::from_bytes(&raw)
    }

    /// Root of every field except the proof of possession.
    ///
    /// This is the message the proof of possession signs.
    pub fn signing_root(&self) -> Hash256 {
        DepositMessage {
            pubkey: self.pubkey,
            withdrawal_credentials: self.withdrawal_credentials,
        }
        .tree_hash_root()
    }

    /// Check the proof of possession with an external signature scheme.
    pub fn verify_proof_of_possession<S: SignatureScheme>(
        &self,
        scheme: &S,
    ) -> std::result::Result<(), S::Error> {
        let message = self.signing_root();
        scheme.verify(&self.pubkey, message.as_slice(), &self.proof_of_possession)
    }
}

/// The signed part of a deposit input.
#[derive(TreeHash)]
struct DepositMessage {
    pubkey: Bytes48,
    withdrawal_credentials: Bytes32,
}

/// Encode a deposit input to canonical bytes.
pub fn encode(input: &DepositInput) -> Vec<u8> {
    input.to_bytes()
}

/// Decode a deposit input from canonical bytes.
pub fn decode(bytes: &[u8]) -> Result<DepositInput> {
    DepositInput::from_bytes(bytes)
}
