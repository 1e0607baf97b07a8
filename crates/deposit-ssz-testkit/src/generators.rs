//! Proptest generators for property-based testing.

use proptest::prelude::*;

use deposit_ssz_core::{BlsSignature, Bytes32, Bytes48, DepositInput, FixedBytes};

/// Generate an arbitrary fixed-width value.
pub fn fixed_bytes<const N: usize>() -> impl Strategy<Value = FixedBytes<N>> {
    prop::collection::vec(any::<u8>(), N).prop_map(|v| {
        let mut arr = [0u8; N];
        arr.copy_from_slice(&v);
        FixedBytes::from_array(arr)
    })
}

pub fn bytes48() -> impl Strategy<Value = Bytes48> {
    fixed_bytes::<48>()
}

pub fn bytes32() -> impl Strategy<Value = Bytes32> {
    fixed_bytes::<32>()
}

/// Generate a signature; components may coincide.
pub fn signature() -> impl Strategy<Value = BlsSignature> {
    (bytes48(), bytes48()).prop_map(|(c0, c1)| BlsSignature::new(c0, c1))
}

/// Generate a signature whose components differ.
pub fn distinct_signature() -> impl Strategy<Value = BlsSignature> {
    signature().prop_filter("components must differ", |sig| sig.c0() != sig.c1())
}

pub fn deposit_input() -> impl Strategy<Value = DepositInput> {
    (bytes48(), bytes32(), signature())
        .prop_map(|(pubkey, credentials, sig)| DepositInput::new(pubkey, credentials, sig))
}

/// Generate raw bytes whose length is anything but `DepositInput::WIDTH`.
pub fn wrong_length_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
        .prop_filter("length must differ from the record width", |v| {
            v.len() != DepositInput::WIDTH
        })
}

/// Generate exactly one record's worth of raw bytes.
pub fn record_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), DepositInput::WIDTH)
}
