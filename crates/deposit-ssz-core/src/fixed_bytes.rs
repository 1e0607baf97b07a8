//! Fixed-width byte vectors.
//!
//! The width is part of the type: a [`Bytes48`] can never hold 47 or 49
//! bytes, and the only fallible constructor is [`FixedBytes::from_slice`].

use std::fmt;
use std::ops::Not;

use rand::RngCore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ssz::DecodeError;
use tree_hash::{Hash256, PackedEncoding, TreeHashType, BYTES_PER_CHUNK};

use crate::error::{CodecError, Result};

/// An immutable, owned byte vector of exactly `N` bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FixedBytes<const N: usize>([u8; N]);

/// 48-byte value (BLS public keys and signature components).
pub type Bytes48 = FixedBytes<48>;

/// 32-byte value (withdrawal credentials, hashes).
pub type Bytes32 = FixedBytes<32>;

impl<const N: usize> FixedBytes<N> {
    /// Width of this type in bytes.
    pub const WIDTH: usize = N;

    /// All-zero value.
    pub const ZERO: Self = Self([0u8; N]);

    /// Create from an array of the right width.
    pub const fn from_array(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, failing unless `raw.len() == N`.
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        let arr: [u8; N] = raw.try_into().map_err(|_| CodecError::WidthMismatch {
            expected: N,
            actual: raw.len(),
        })?;
        Ok(Self(arr))
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Fill a new value from the thread-local RNG.
    ///
    /// For test fixtures only; nothing in the codec calls this.
    pub fn random() -> Self {
        Self::random_with(&mut rand::thread_rng())
    }

    /// Fill a new value from the given entropy source.
    pub fn random_with<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let mut arr = [0u8; N];
        rng.fill_bytes(&mut arr);
        Self(arr)
    }

    /// Bitwise NOT over every byte.
    ///
    /// For `N > 0` the result never equals `self`.
    pub fn complement(&self) -> Self {
        let mut arr = self.0;
        for b in arr.iter_mut() {
            *b = !*b;
        }
        Self(arr)
    }

    /// Convert to a `0x`-prefixed lowercase hex string.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Parse from hex, with or without a `0x` prefix.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(digits)?;
        Self::from_slice(&bytes)
    }
}

impl<const N: usize> Default for FixedBytes<N> {
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> Not for FixedBytes<N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

impl<const N: usize> fmt::Debug for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = &self.0[..N.min(4)];
        write!(f, "Bytes{}(0x{}...)", N, hex::encode(prefix))
    }
}

impl<const N: usize> fmt::Display for FixedBytes<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl<const N: usize> AsRef<[u8]> for FixedBytes<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for FixedBytes<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> TryFrom<&[u8]> for FixedBytes<N> {
    type Error = CodecError;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl<const N: usize> Serialize for FixedBytes<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de, const N: usize> Deserialize<'de> for FixedBytes<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl<const N: usize> ssz::Encode for FixedBytes<N> {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn ssz_bytes_len(&self) -> usize {
        N
    }

    fn ssz_append(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.0);
    }
}

impl<const N: usize> ssz::Decode for FixedBytes<N> {
    fn is_ssz_fixed_len() -> bool {
        true
    }

    fn ssz_fixed_len() -> usize {
        N
    }

    fn from_ssz_bytes(bytes: &[u8]) -> std::result::Result<Self, DecodeError> {
        let arr: [u8; N] = bytes
            .try_into()
            .map_err(|_| DecodeError::InvalidByteLength {
                len: bytes.len(),
                expected: N,
            })?;
        Ok(Self(arr))
    }
}

// Hashed as an SSZ byte vector: packed into chunks, never packed further.
impl<const N: usize> tree_hash::TreeHash for FixedBytes<N> {
    fn tree_hash_type() -> TreeHashType {
        TreeHashType::Vector
    }

    fn tree_hash_packed_encoding(&self) -> PackedEncoding {
        PackedEncoding::from_slice(&self.0)
    }

    fn tree_hash_packing_factor() -> usize {
        1
    }

    fn tree_hash_root(&self) -> Hash256 {
        tree_hash::merkle_root(&self.0, N.div_ceil(BYTES_PER_CHUNK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use ssz::{Decode, Encode};
    use tree_hash::TreeHash;

    #[test]
    fn test_from_slice_exact_width() {
        let raw = [0x11u8; 48];
        let value = Bytes48::from_slice(&raw).unwrap();
        assert_eq!(value.as_bytes(), &raw);
    }

    #[test]
    fn test_from_slice_rejects_wrong_width() {
        assert_eq!(
            Bytes48::from_slice(&[0u8; 47]),
            Err(CodecError::WidthMismatch {
                expected: 48,
                actual: 47
            })
        );
        assert_eq!(
            Bytes48::from_slice(&[0u8; 49]),
            Err(CodecError::WidthMismatch {
                expected: 48,
                actual: 49
            })
        );
        assert!(Bytes32::from_slice(&[0u8; 48]).is_err());
        assert!(Bytes32::from_slice(&[]).is_err());
    }

    #[test]
    fn test_complement_never_equal() {
        let value = Bytes32::from_array([0xa5; 32]);
        let flipped = value.complement();
        assert_ne!(value, flipped);
        assert_eq!(flipped.as_bytes(), &[0x5a; 32]);
        assert_eq!(flipped.complement(), value);
        assert_eq!(!value, flipped);

        assert_ne!(Bytes48::ZERO, !Bytes48::ZERO);
    }

    #[test]
    fn test_random_with_seed_is_reproducible() {
        let a = Bytes48::random_with(&mut StdRng::seed_from_u64(7));
        let b = Bytes48::random_with(&mut StdRng::seed_from_u64(7));
        let c = Bytes48::random_with(&mut StdRng::seed_from_u64(8));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hex_roundtrip() {
        let value = Bytes32::from_array([0xab; 32]);
        let hex = value.to_hex();
        assert!(hex.starts_with("0xabab"));
        assert_eq!(Bytes32::from_hex(&hex).unwrap(), value);
        assert_eq!(Bytes32::from_hex(&hex[2..]).unwrap(), value);
    }

    #[test]
    fn test_from_hex_wrong_width() {
        let err = Bytes48::from_hex("0xabcd").unwrap_err();
        assert_eq!(
            err,
            CodecError::WidthMismatch {
                expected: 48,
                actual: 2
            }
        );
        assert!(matches!(
            Bytes48::from_hex("0xzz"),
            Err(CodecError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_debug_and_display() {
        let value = Bytes48::from_array([0xcd; 48]);
        assert_eq!(format!("{:?}", value), "Bytes48(0xcdcdcdcd...)");
        assert_eq!(format!("{}", value).len(), 2 + 96);
    }

    #[test]
    fn test_serde_hex_string() {
        let value = Bytes32::from_array([0x01; 32]);
        let json = serde_json::to_string(&value).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "01".repeat(32)));
        let back: Bytes32 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);

        let short = "\"0x0101\"";
        assert!(serde_json::from_str::<Bytes32>(short).is_err());
    }

    #[test]
    fn test_ssz_is_raw_bytes() {
        let value = Bytes48::from_array([0x3c; 48]);
        let bytes = value.as_ssz_bytes();
        assert_eq!(bytes, value.to_vec());
        assert_eq!(Bytes48::from_ssz_bytes(&bytes).unwrap(), value);
    }

    #[test]
    fn test_ssz_decode_wrong_length() {
        let err = Bytes48::from_ssz_bytes(&[0u8; 47]).unwrap_err();
        assert_eq!(
            CodecError::from(err),
            CodecError::MalformedEncoding {
                expected: 48,
                actual: 47
            }
        );
        assert!(Bytes32::from_ssz_bytes(&[0u8; 33]).is_err());
    }

    #[test]
    fn test_bytes32_is_its_own_root() {
        let value = Bytes32::from_array([0x5c; 32]);
        assert_eq!(value.tree_hash_root().0, *value.as_bytes());
    }

    #[test]
    fn test_bytes48_root_pads_second_chunk() {
        let value = Bytes48::from_array([0xff; 48]);
        let mut padded = [0u8; 64];
        padded[..48].copy_from_slice(value.as_bytes());
        assert_eq!(
            value.tree_hash_root(),
            tree_hash::merkle_root(&padded, 2)
        );
        assert_ne!(value.tree_hash_root(), Hash256::ZERO);
    }
}
