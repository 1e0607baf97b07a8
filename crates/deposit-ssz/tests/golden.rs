//! Golden test vectors and equality contract for deposit inputs.
//!
//! Every implementation of the deposit codec must produce identical:
//! - canonical bytes (176, field order pubkey, credentials, c0, c1)
//! - signing_root
//! - tree_hash_root

use deposit_ssz::{
    decode, encode, BatchCodec, BatchConfig, BlsSignature, Bytes32, Bytes48, CodecError,
    DepositInput, Error, TreeHash,
};
use deposit_ssz_testkit::{all_vectors, DepositFixture, DigestScheme};
use serde::Serialize;

/// A golden vector as written to JSON.
#[derive(Debug, Serialize)]
struct VectorRecord {
    name: String,
    input: DepositInput,
    encoding: String,
    signing_root: String,
    tree_hash_root: String,
}

fn generate_records() -> Vec<VectorRecord> {
    all_vectors()
        .iter()
        .map(|v| {
            let input = v.input().unwrap();
            VectorRecord {
                name: v.name.to_string(),
                input,
                encoding: hex::encode(encode(&input)),
                signing_root: hex::encode(input.signing_root()),
                tree_hash_root: hex::encode(input.tree_hash_root()),
            }
        })
        .collect()
}

#[test]
fn test_vectors_match_expected() {
    for (record, vector) in generate_records().iter().zip(all_vectors()) {
        assert_eq!(
            record.encoding,
            vector.expected_encoding(),
            "encoding mismatch for {}",
            record.name
        );
        assert_eq!(
            record.signing_root, vector.expected_signing_root,
            "signing_root mismatch for {}",
            record.name
        );
        assert_eq!(
            record.tree_hash_root, vector.expected_tree_hash_root,
            "tree_hash_root mismatch for {}",
            record.name
        );
    }
}

#[test]
fn test_vectors_deterministic() {
    let a = generate_records();
    let b = generate_records();
    for (x, y) in a.iter().zip(b.iter()) {
        assert_eq!(x.encoding, y.encoding, "encoding mismatch for {}", x.name);
        assert_eq!(x.tree_hash_root, y.tree_hash_root, "root mismatch for {}", x.name);
    }
}

#[test]
fn test_ascending_vector_is_identity_layout() {
    let vector = all_vectors()
        .into_iter()
        .find(|v| v.name == "ascending bytes")
        .unwrap();
    let bytes = encode(&vector.input().unwrap());
    assert_eq!(bytes, (0u8..176).collect::<Vec<u8>>());
}

#[test]
fn print_golden_vectors_json() {
    #[derive(Serialize)]
    struct VectorFile {
        version: String,
        description: String,
        record_width: usize,
        vectors: Vec<VectorRecord>,
    }

    let file = VectorFile {
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "Golden test vectors for DepositInput SSZ encoding.".to_string(),
        record_width: DepositInput::WIDTH,
        vectors: generate_records(),
    };

    let json = serde_json::to_string_pretty(&file).unwrap();
    assert!(json.contains("\"record_width\": 176"));
    println!("{}", json);
}

// =============================================================================
// EQUALITY CONTRACT
// =============================================================================

#[test]
fn equals_returns_true_when_objects_are_same() {
    let fixture = DepositFixture::new();
    let same = &fixture.input;
    assert_eq!(&fixture.input, same);
    assert!(std::ptr::eq(&fixture.input, same));
}

#[test]
fn equals_returns_true_when_object_fields_are_equal() {
    let fixture = DepositFixture::new();
    let other = DepositInput::new(
        fixture.pubkey,
        fixture.withdrawal_credentials,
        fixture.proof_of_possession,
    );
    assert_eq!(fixture.input, other);
}

#[test]
fn equals_returns_false_when_pubkeys_are_different() {
    let fixture = DepositFixture::new();
    assert_ne!(fixture.input, fixture.with_pubkey_complemented());
}

#[test]
fn equals_returns_false_when_withdrawal_credentials_are_different() {
    let fixture = DepositFixture::new();
    assert_ne!(fixture.input, fixture.with_credentials_complemented());
}

#[test]
fn equals_returns_false_when_proofs_of_possession_are_different() {
    let fixture = DepositFixture::new();
    let pop = fixture.proof_of_possession;
    let reversed = BlsSignature::new(*pop.c1(), *pop.c0());
    let other = DepositInput::new(fixture.pubkey, fixture.withdrawal_credentials, reversed);
    assert_ne!(fixture.input, other);
}

#[test]
fn roundtrip_ssz() {
    let fixture = DepositFixture::new();
    let bytes = fixture.input.to_bytes();
    assert_eq!(fixture.input, DepositInput::from_bytes(&bytes).unwrap());
}

#[test]
fn proof_of_possession_verifies_through_scheme() {
    let scheme = DigestScheme;
    let fixture = DepositFixture::signed(3, &scheme);
    let decoded = decode(&encode(&fixture.input)).unwrap();
    assert!(decoded.verify_proof_of_possession(&scheme).is_ok());
}

// =============================================================================
// REJECTION TEST VECTORS
// =============================================================================

#[test]
fn test_reject_short_record() {
    let bytes = vec![0u8; DepositInput::WIDTH - 1];
    assert_eq!(
        decode(&bytes),
        Err(CodecError::MalformedEncoding {
            expected: 176,
            actual: 175
        })
    );
}

#[test]
fn test_reject_long_record() {
    let bytes = vec![0u8; DepositInput::WIDTH + 1];
    assert_eq!(
        decode(&bytes),
        Err(CodecError::MalformedEncoding {
            expected: 176,
            actual: 177
        })
    );
}

#[test]
fn test_reject_wrong_width_values() {
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
    assert!(Bytes32::try_from(&[0u8; 31][..]).is_err());
}

#[test]
fn test_rejection_is_deterministic() {
    let bytes = vec![0xabu8; 100];
    assert_eq!(decode(&bytes), decode(&bytes));
}

// =============================================================================
// BATCHES
// =============================================================================

#[tokio::test]
async fn test_batch_roundtrip_with_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let records: Vec<DepositInput> = deposit_ssz_testkit::seeded_fixtures(500, 50)
        .into_iter()
        .map(|f| f.input)
        .collect();

    let codec = BatchCodec::new(BatchConfig::default().with_shard_size(7));
    let frames = codec.encode_all(records.clone()).await.unwrap();
    let decoded = codec.decode_all(frames).await.unwrap();
    assert_eq!(decoded, records);
}

#[tokio::test]
async fn test_batch_rejects_bad_frame() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let codec = BatchCodec::default();
    let mut frames = codec
        .encode_all(vec![DepositFixture::with_seed(1).input; 3])
        .await
        .unwrap();
    frames[1].push(0);

    let err = codec.decode_all(frames).await.unwrap_err();
    assert!(matches!(err, Error::Frame { index: 1, .. }));
}
