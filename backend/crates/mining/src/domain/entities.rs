//! Domain Entities
//!
//! Core business entities for the mining domain.

use crate::domain::services::compute_record_hash;

/// Record entity - the transaction-like unit of work being mined
///
/// Only `metadata` changes after construction, and only on the copy owned
/// by a search worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub from: String,
    pub to: String,
    pub value: i64,
    pub metadata: RecordMetadata,
}

/// Proof-of-work attached to a record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMetadata {
    /// Nonce that produced `hash`
    pub iteration_count: u64,
    /// Lowercase hex digest, empty until a search succeeds
    pub hash: String,
}

impl Record {
    /// Create an unmined record
    pub fn new(from: impl Into<String>, to: impl Into<String>, value: i64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            value,
            metadata: RecordMetadata::default(),
        }
    }

    /// Hash of the record at its current iteration count
    pub fn hash(&self) -> String {
        compute_record_hash(self)
    }

    /// Copy a search result into this record
    pub fn apply_solution(&mut self, solution: RecordMetadata) {
        self.metadata.iteration_count = solution.iteration_count;
        self.metadata.hash = solution.hash;
    }

    pub fn is_mined(&self) -> bool {
        !self.metadata.hash.is_empty()
    }
}
