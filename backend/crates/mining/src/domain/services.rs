//! Domain Services
//!
//! Pure domain logic for record hashing and difficulty checks.

use crate::domain::entities::Record;
use crate::domain::value_objects::Difficulty;
use sha2::{Digest, Sha256};

/// Canonical hash input: `"{from}->{to}:{value}:{iteration_count}"`
pub fn canonical_preimage(record: &Record) -> String {
    format!(
        "{}->{}:{}:{}",
        record.from, record.to, record.value, record.metadata.iteration_count
    )
}

/// Compute the lowercase hex SHA-256 of the record's canonical preimage
pub fn compute_record_hash(record: &Record) -> String {
    RecordHasher::new(record).hash_at(record.metadata.iteration_count)
}

/// Verify that a hash meets the difficulty requirement
pub fn meets_difficulty(hash: &str, difficulty: Difficulty) -> bool {
    difficulty.is_met_by(hash)
}

/// Hashes one record at arbitrary iteration counts.
///
/// The constant `"{from}->{to}:{value}:"` prefix is absorbed once; each call
/// clones that state and feeds only the nonce digits.
#[derive(Clone)]
pub struct RecordHasher {
    prefix: Sha256,
}

impl RecordHasher {
    pub fn new(record: &Record) -> Self {
        let mut prefix = Sha256::new();
        prefix.update(record.from.as_bytes());
        prefix.update(b"->");
        prefix.update(record.to.as_bytes());
        prefix.update(b":");
        prefix.update(record.value.to_string().as_bytes());
        prefix.update(b":");
        Self { prefix }
    }

    pub fn hash_at(&self, iteration_count: u64) -> String {
        let digest = self
            .prefix
            .clone()
            .chain_update(iteration_count.to_string().as_bytes())
            .finalize();
        hex::encode(digest)
    }
}
