//! Deadline Miner Use Case
//!
//! Races one search worker per request against the configured timeout.

use crate::application::config::MiningConfig;
use crate::application::search_worker::{InFlight, SearchWorker};
use crate::domain::entities::Record;
use crate::domain::miner::RecordMiner;
use crate::error::{MiningError, MiningResult};
use kernel::id::MiningJobId;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

/// Deadline-bounded miner
///
/// Each call to [`RecordMiner::mine`] owns a private cancellation token and
/// result channel; nothing mutable is shared between calls apart from the
/// in-flight counter.
#[derive(Debug, Clone)]
pub struct DeadlineMiner {
    config: Arc<MiningConfig>,
    in_flight: InFlight,
}

impl DeadlineMiner {
    pub fn new(config: Arc<MiningConfig>) -> Self {
        Self {
            config,
            in_flight: InFlight::default(),
        }
    }

    /// Workers that have not exited yet, including cancelled ones still
    /// finishing their last hash
    pub fn in_flight(&self) -> usize {
        self.in_flight.count()
    }
}

impl RecordMiner for DeadlineMiner {
    async fn mine(&self, mut record: Record) -> MiningResult<Record> {
        let job_id = MiningJobId::new();
        let difficulty = self.config.difficulty;
        let timeout = self.config.timeout;
        let span = tracing::info_span!("mine", job_id = %job_id, difficulty = %difficulty);

        async move {
            let cancel = CancellationToken::new();
            // Stops the worker if this future is dropped before the race resolves
            let _cancel_on_drop = cancel.clone().drop_guard();

            let started = Instant::now();
            let handle =
                SearchWorker::spawn(record.clone(), difficulty, cancel.clone(), &self.in_flight);

            match tokio::time::timeout(timeout, handle.result).await {
                Ok(Ok(solution)) => {
                    record.apply_solution(solution);
                    tracing::info!(
                        iterations = record.metadata.iteration_count,
                        elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX),
                        "Record mined"
                    );
                    Ok(record)
                }
                Ok(Err(_)) => Err(MiningError::WorkerAborted),
                Err(_) => {
                    cancel.cancel();
                    tracing::debug!(
                        timeout_ms = self.config.timeout_ms(),
                        "Deadline reached, search cancelled"
                    );
                    Err(MiningError::DeadlineExceeded { timeout })
                }
            }
        }
        .instrument(span)
        .await
    }
}
