//! # Deposit SSZ Testkit
//!
//! Testing utilities for the deposit SSZ codec.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with expected encodings and roots
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Seeded deposit records and their negative variants
//! - **DigestScheme**: A deterministic stand-in for a real signature scheme
//!
//! ## Golden Vectors
//!
//! ```rust
//! use deposit_ssz_testkit::vectors::verify_all_vectors;
//!
//! for report in verify_all_vectors().unwrap() {
//!     assert!(report.passed(), "{}", report.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use deposit_ssz_testkit::generators::deposit_input;
//!
//! proptest! {
//!     #[test]
//!     fn roundtrip(input in deposit_input()) {
//!         let bytes = deposit_ssz_core::encode(&input);
//!         prop_assert_eq!(deposit_ssz_core::decode(&bytes).unwrap(), input);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use deposit_ssz_testkit::fixtures::DepositFixture;
//!
//! let fixture = DepositFixture::with_seed(1);
//! assert_ne!(fixture.input, fixture.with_signature_reversed());
//! ```

pub mod fixtures;
pub mod generators;
pub mod scheme;
pub mod vectors;

pub use fixtures::{distinct_signature, fixture_rng, seeded_fixtures, DepositFixture, FixtureRng};
pub use scheme::{DigestScheme, DigestSchemeError};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector, VectorReport};
