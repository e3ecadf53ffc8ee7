//! Bounded Search Worker
//!
//! Brute-forces the iteration count of one record until its hash meets the
//! difficulty or the request's cancellation token is raised.

use crate::domain::entities::{Record, RecordMetadata};
use crate::domain::services::RecordHasher;
use crate::domain::value_objects::Difficulty;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

/// Search for the first iteration count whose hash meets `difficulty`.
///
/// Cancellation is polled once per iteration, after a failed attempt. The
/// first attempt always runs and a match always wins over a raised token.
/// Returns `None` only when cancelled (or if the counter space is exhausted).
pub fn search(
    mut record: Record,
    difficulty: Difficulty,
    cancel: &CancellationToken,
) -> Option<RecordMetadata> {
    let hasher = RecordHasher::new(&record);
    let mut nonce: u64 = 0;
    loop {
        record.metadata.iteration_count = nonce;
        let hash = hasher.hash_at(nonce);
        if difficulty.is_met_by(&hash) {
            record.metadata.hash = hash;
            return Some(record.metadata);
        }
        if cancel.is_cancelled() {
            return None;
        }
        nonce = nonce.checked_add(1)?;
    }
}

/// Number of search workers currently alive
#[derive(Debug, Clone, Default)]
pub struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::Acquire)
    }

    fn enter(&self) -> InFlightGuard {
        self.0.fetch_add(1, Ordering::AcqRel);
        InFlightGuard(self.0.clone())
    }
}

struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

/// Handles to a spawned search
pub struct SearchHandle {
    /// Single-slot result channel; closes without a value on cancellation
    pub result: oneshot::Receiver<RecordMetadata>,
    /// Completes once the worker has exited
    pub task: JoinHandle<()>,
}

/// Spawns searches on the blocking pool
pub struct SearchWorker;

impl SearchWorker {
    /// Start searching `record` in the background.
    ///
    /// The worker owns `record`. Its result is handed over through a oneshot
    /// channel whose send never waits for the receiver, so a worker that
    /// finishes after the requester gave up still exits.
    pub fn spawn(
        record: Record,
        difficulty: Difficulty,
        cancel: CancellationToken,
        in_flight: &InFlight,
    ) -> SearchHandle {
        let (tx, rx) = oneshot::channel();
        let guard = in_flight.enter();
        let span = tracing::Span::current();

        let task = tokio::task::spawn_blocking(move || {
            let _guard = guard;
            span.in_scope(|| match search(record, difficulty, &cancel) {
                Some(found) => {
                    let iterations = found.iteration_count;
                    if tx.send(found).is_err() {
                        tracing::debug!(iterations, "Search result arrived after requester left");
                    }
                }
                None => tracing::debug!("Search cancelled"),
            })
        });

        SearchHandle { result: rx, task }
    }
}
