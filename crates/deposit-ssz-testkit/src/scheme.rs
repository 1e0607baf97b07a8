//! A deterministic stand-in for a real signature scheme.
//!
//! `DigestScheme` derives both signature components from SHA-256 of the
//! public key and message. It has no secret key and proves nothing; it only
//! lets tests exercise the `SignatureScheme` seam end to end.

use deposit_ssz_core::{BlsSignature, Bytes48, SignatureScheme};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DigestSchemeError {
    #[error("signature does not match public key and message")]
    Mismatch,
}

/// Digest-based signature scheme for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestScheme;

impl DigestScheme {
    /// Produce the signature this scheme accepts for `(public_key, message)`.
    pub fn sign(&self, public_key: &Bytes48, message: &[u8]) -> BlsSignature {
        BlsSignature::new(
            component(0, public_key, message),
            component(2, public_key, message),
        )
    }
}

impl SignatureScheme for DigestScheme {
    type Error = DigestSchemeError;

    fn verify(
        &self,
        public_key: &Bytes48,
        message: &[u8],
        signature: &BlsSignature,
    ) -> Result<(), Self::Error> {
        if self.sign(public_key, message) == *signature {
            Ok(())
        } else {
            Err(DigestSchemeError::Mismatch)
        }
    }
}

/// 48 bytes from two tagged digests.
fn component(tag: u8, public_key: &Bytes48, message: &[u8]) -> Bytes48 {
    let digest = |t: u8| -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update([t]);
        hasher.update(public_key.as_bytes());
        hasher.update(message);
        hasher.finalize().into()
    };

    let mut arr = [0u8; 48];
    arr[..32].copy_from_slice(&digest(tag));
    arr[32..].copy_from_slice(&digest(tag + 1)[..16]);
    Bytes48::from_array(arr)
}
