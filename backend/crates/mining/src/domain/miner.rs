//! Miner Trait
//!
//! Interface between request handling and the proof-of-work search.
//! The deadline-bounded implementation lives in the application layer.

use crate::domain::entities::Record;
use crate::error::MiningResult;

/// Record miner trait
#[trait_variant::make(RecordMiner: Send)]
pub trait LocalRecordMiner {
    /// Mine `record`, returning it with populated metadata
    ///
    /// Fails with `MiningError::DeadlineExceeded` when no valid hash is found
    /// in time.
    async fn mine(&self, record: Record) -> MiningResult<Record>;
}
