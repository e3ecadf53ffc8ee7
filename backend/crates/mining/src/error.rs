//! Mining Error Types
//!
//! This module provides mining-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use kernel::error::{app_error::AppError, kind::ErrorKind};
use std::time::Duration;
use thiserror::Error;

/// Mining-specific result type alias
pub type MiningResult<T> = Result<T, MiningError>;

/// Mining-specific error variants
///
/// Every variant maps to exactly one [`ErrorKind`]. Errors reach the client
/// through `AppError`, whose responses never carry a body.
#[derive(Debug, Error)]
pub enum MiningError {
    /// Request body could not be read
    #[error("Unreadable request body: {0}")]
    UnreadableBody(String),

    /// Request body is not a well-formed record
    #[error("Malformed record: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    /// No hash met the difficulty before the deadline
    #[error("Mining deadline of {timeout:?} exceeded")]
    DeadlineExceeded { timeout: Duration },

    /// The mined record could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// The search worker ended without reporting a result
    #[error("Search worker aborted without a result")]
    WorkerAborted,
}

impl MiningError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MiningError::UnreadableBody(_) | MiningError::MalformedRecord(_) => {
                ErrorKind::BadRequest
            }
            MiningError::DeadlineExceeded { .. } => ErrorKind::RequestTimeout,
            MiningError::Serialization(_) | MiningError::WorkerAborted => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MiningError::Serialization(e) => {
                tracing::error!(error = %e, "Mined record serialization failed");
            }
            MiningError::WorkerAborted => {
                tracing::error!("Search worker aborted");
            }
            MiningError::DeadlineExceeded { timeout } => {
                let timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
                tracing::warn!(timeout_ms, "Mining deadline exceeded");
            }
            _ => {
                tracing::debug!(error = %self, "Rejected mining request");
            }
        }
    }
}

impl From<MiningError> for AppError {
    fn from(err: MiningError) -> Self {
        err.log();
        let kind = err.kind();
        let message = err.to_string();
        AppError::new(kind, message).with_source(err)
    }
}
