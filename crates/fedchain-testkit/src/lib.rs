//! fedchain-testkit
//!
//! Explicit test fixtures. Every harness takes a `TestContext` instead of
//! touching process-wide randomness, wall-clock time or a shared data
//! directory, so runs are reproducible from the seed alone.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use fedchain_core::types::Timestamp;
use fedchain_crypto::FederationKey;
use k256::elliptic_curve::PrimeField;
use k256::Scalar;
use rand::rngs::StdRng;
use rand::SeedableRng;

static NEXT_DIR: AtomicU64 = AtomicU64::new(0);

/// Fixed starting clock: 2024-01-01 00:00:00 UTC.
pub const TEST_EPOCH: Timestamp = 1_704_067_200;

/// Entropy, clock and scratch directory for one test.
///
/// The directory is created on construction and removed on drop.
pub struct TestContext {
    rng: StdRng,
    now: Timestamp,
    root: PathBuf,
}

impl TestContext {
    pub fn new(seed: u64) -> Self {
        let root = std::env::temp_dir().join(format!(
            "fedchain_test_{}_{}_{}",
            std::process::id(),
            seed,
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        let _ = std::fs::remove_dir_all(&root);
        std::fs::create_dir_all(&root).expect("create test directory");
        Self {
            rng: StdRng::seed_from_u64(seed),
            now: TEST_EPOCH,
            root,
        }
    }

    pub fn now(&self) -> Timestamp {
        self.now
    }

    pub fn advance(&mut self, secs: i64) -> Timestamp {
        self.now += secs;
        self.now
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// A named subdirectory of the scratch directory, created on demand.
    pub fn data_dir(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        std::fs::create_dir_all(&dir).expect("create test data directory");
        dir
    }

    /// `n` independent federation keys.
    pub fn federation_keys(&mut self, n: usize) -> Vec<FederationKey> {
        (0..n).map(|_| FederationKey::generate(&mut self.rng)).collect()
    }

    /// `n` keys (n ≥ 2) whose public keys sum to the point at infinity: the
    /// last key's secret is the negated sum of the others.
    pub fn cancelling_keys(&mut self, n: usize) -> Vec<FederationKey> {
        assert!(n >= 2, "need at least two keys to cancel");
        let mut keys = self.federation_keys(n - 1);

        let partial = FederationKey::combine(&keys).expect("random keys sum to zero");
        let secret = partial.secret_bytes();
        let scalar = Option::<Scalar>::from(Scalar::from_repr((*secret).into()))
            .expect("secret bytes are a canonical scalar");
        let negated: [u8; 32] = (-scalar).to_bytes().into();
        keys.push(FederationKey::from_bytes(&negated).expect("negated sum is non-zero"));
        keys
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

/// The `signblockpubkey` value for `keys`: their compressed hex, concatenated.
pub fn concat_pubkeys(keys: &[FederationKey]) -> String {
    keys.iter().map(|k| k.public_key_hex()).collect()
}
