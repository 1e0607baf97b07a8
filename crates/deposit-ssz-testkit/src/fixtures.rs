//! Test fixtures and helpers.
//!
//! Randomness is always injected: seeded fixtures are reproducible, and
//! `DepositFixture::new` is the only constructor that reaches for the
//! thread-local RNG.

use deposit_ssz_core::{BlsSignature, Bytes32, Bytes48, DepositInput};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::scheme::DigestScheme;

/// Entropy source for fixtures.
pub type FixtureRng = StdRng;

/// A reproducible entropy source.
pub fn fixture_rng(seed: u64) -> FixtureRng {
    StdRng::seed_from_u64(seed)
}

/// Random signature whose components are guaranteed to differ.
pub fn distinct_signature<R: RngCore + ?Sized>(rng: &mut R) -> BlsSignature {
    let c0 = Bytes48::random_with(rng);
    let c1 = loop {
        let candidate = Bytes48::random_with(rng);
        if candidate != c0 {
            break candidate;
        }
    };
    BlsSignature::new(c0, c1)
}

/// A deposit input together with the fields it was built from.
#[derive(Debug, Clone)]
pub struct DepositFixture {
    pub pubkey: Bytes48,
    pub withdrawal_credentials: Bytes32,
    pub proof_of_possession: BlsSignature,
    pub input: DepositInput,
}

impl DepositFixture {
    /// Create a fixture with random fields.
    pub fn new() -> Self {
        Self::from_rng(&mut rand::thread_rng())
    }

    /// Create a reproducible fixture.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(&mut fixture_rng(seed))
    }

    pub fn from_rng<R: RngCore + ?Sized>(rng: &mut R) -> Self {
        let pubkey = Bytes48::random_with(rng);
        let withdrawal_credentials = Bytes32::random_with(rng);
        let proof_of_possession = distinct_signature(rng);
        Self::from_parts(pubkey, withdrawal_credentials, proof_of_possession)
    }

    /// Create a fixture whose proof of possession verifies under `scheme`.
    pub fn signed(seed: u64, scheme: &DigestScheme) -> Self {
        let mut rng = fixture_rng(seed);
        let pubkey = Bytes48::random_with(&mut rng);
        let withdrawal_credentials = Bytes32::random_with(&mut rng);
        let unsigned = DepositInput::new(pubkey, withdrawal_credentials, BlsSignature::default());
        let proof_of_possession = scheme.sign(&pubkey, unsigned.signing_root().as_slice());
        Self::from_parts(pubkey, withdrawal_credentials, proof_of_possession)
    }

    fn from_parts(
        pubkey: Bytes48,
        withdrawal_credentials: Bytes32,
        proof_of_possession: BlsSignature,
    ) -> Self {
        Self {
            pubkey,
            withdrawal_credentials,
            proof_of_possession,
            input: DepositInput::new(pubkey, withdrawal_credentials, proof_of_possession),
        }
    }

    /// Same record with every bit of the public key flipped.
    pub fn with_pubkey_complemented(&self) -> DepositInput {
        DepositInput::new(
            self.pubkey.complement(),
            self.withdrawal_credentials,
            self.proof_of_possession,
        )
    }

    /// Same record with every bit of the withdrawal credentials flipped.
    pub fn with_credentials_complemented(&self) -> DepositInput {
        DepositInput::new(
            self.pubkey,
            self.withdrawal_credentials.complement(),
            self.proof_of_possession,
        )
    }

    /// Same record with the signature components swapped.
    pub fn with_signature_reversed(&self) -> DepositInput {
        DepositInput::new(
            self.pubkey,
            self.withdrawal_credentials,
            self.proof_of_possession.reversed(),
        )
    }

    /// The record rebuilt from its fields, as a second independent value.
    pub fn rebuilt(&self) -> DepositInput {
        DepositInput::new(
            self.pubkey,
            self.withdrawal_credentials,
            self.proof_of_possession,
        )
    }
}

impl Default for DepositFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Create `count` reproducible fixtures with consecutive seeds.
pub fn seeded_fixtures(base_seed: u64, count: usize) -> Vec<DepositFixture> {
    (0..count as u64)
        .map(|i| DepositFixture::with_seed(base_seed.wrapping_add(i)))
        .collect()
}
