//! Golden test vectors for deterministic verification.
//!
//! These vectors pin the canonical encoding and the merkle roots so that any
//! other implementation of the deposit codec can be checked byte for byte.

use deposit_ssz_core::{encode, BlsSignature, Bytes32, Bytes48, CodecError, DepositInput, TreeHash};

/// A golden test vector. All fields are hex without a `0x` prefix.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    pub pubkey: &'static str,
    pub withdrawal_credentials: &'static str,
    /// First signature component.
    pub c0: &'static str,
    /// Second signature component.
    pub c1: &'static str,
    /// Expected `signing_root()`.
    pub expected_signing_root: &'static str,
    /// Expected `tree_hash_root()`.
    pub expected_tree_hash_root: &'static str,
}

impl GoldenVector {
    /// Build the deposit input described by this vector.
    pub fn input(&self) -> Result<DepositInput, CodecError> {
        Ok(DepositInput::new(
            Bytes48::from_hex(self.pubkey)?,
            Bytes32::from_hex(self.withdrawal_credentials)?,
            BlsSignature::new(Bytes48::from_hex(self.c0)?, Bytes48::from_hex(self.c1)?),
        ))
    }

    /// Expected canonical encoding: the four fields back to back.
    pub fn expected_encoding(&self) -> String {
        [self.pubkey, self.withdrawal_credentials, self.c0, self.c1].concat()
    }
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "all zero",
            pubkey: "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
            withdrawal_credentials: "0000000000000000000000000000000000000000000000000000000000000000",
            c0: "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
            c1: "000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000",
            expected_signing_root: "7a0501f5957bdf9cb3a8ff4966f02265f968658b7a9c62642cba1165e86642f5",
            expected_tree_hash_root: "73915541a97e024b86f1a356ee9e525fa82bb7d5f06732bcf8ef6176b9b233b3",
        },
        GoldenVector {
            name: "ascending bytes",
            pubkey: "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f202122232425262728292a2b2c2d2e2f",
            withdrawal_credentials: "303132333435363738393a3b3c3d3e3f404142434445464748494a4b4c4d4e4f",
            c0: "505152535455565758595a5b5c5d5e5f606162636465666768696a6b6c6d6e6f707172737475767778797a7b7c7d7e7f",
            c1: "808182838485868788898a8b8c8d8e8f909192939495969798999a9b9c9d9e9fa0a1a2a3a4a5a6a7a8a9aaabacadaeaf",
            expected_signing_root: "9f2027ab8cfd6ae6cacea1bc30c1977e4d814840e45d3f334b0b60ecdc628c4c",
            expected_tree_hash_root: "cf645aaf9c5fc5416e07445bc938ade6929c376da352ad39cda24c19ae63ef2c",
        },
        GoldenVector {
            name: "all ones",
            pubkey: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            withdrawal_credentials: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            c0: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            c1: "ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff",
            expected_signing_root: "5d3bd2c7c0b52cad3ceb7e37831dcf466fe19f731c41145fb3a4a83a53c93ca6",
            expected_tree_hash_root: "e64610fd1388b8a1e1e6abaf0a37df5697ea552efabacf6a8bb825b732ab0231",
        },
        GoldenVector {
            name: "distinct fills",
            pubkey: "010101010101010101010101010101010101010101010101010101010101010101010101010101010101010101010101",
            withdrawal_credentials: "0202020202020202020202020202020202020202020202020202020202020202",
            c0: "030303030303030303030303030303030303030303030303030303030303030303030303030303030303030303030303",
            c1: "040404040404040404040404040404040404040404040404040404040404040404040404040404040404040404040404",
            expected_signing_root: "3e0edcd174eab8ee8fac7db2933090f7da388289df567d8272fde2dc7c6bf875",
            expected_tree_hash_root: "caecae3540c58ac923814a2c21dc09ae99fed9d8198238938717b246be36033a",
        },
    ]
}

/// Outcome of checking one vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorReport {
    pub name: String,
    pub encoding_matches: bool,
    pub signing_root_matches: bool,
    pub tree_hash_root_matches: bool,
}

impl VectorReport {
    pub fn passed(&self) -> bool {
        self.encoding_matches && self.signing_root_matches && self.tree_hash_root_matches
    }
}

/// Check every golden vector against this implementation.
pub fn verify_all_vectors() -> Result<Vec<VectorReport>, CodecError> {
    all_vectors()
        .iter()
        .map(|v| {
            let input = v.input()?;
            Ok(VectorReport {
                name: v.name.to_string(),
                encoding_matches: hex::encode(encode(&input)) == v.expected_encoding(),
                signing_root_matches: hex::encode(input.signing_root())
                    == v.expected_signing_root,
                tree_hash_root_matches: hex::encode(input.tree_hash_root())
                    == v.expected_tree_hash_root,
            })
        })
        .collect()
}
