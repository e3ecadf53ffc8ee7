//! Application Configuration
//!
//! Configuration for the mining application layer. Values are supplied by the
//! binary at startup and stay fixed for the lifetime of the router.

use crate::domain::value_objects::Difficulty;
use std::time::Duration;

/// Mining application configuration
#[derive(Debug, Clone)]
pub struct MiningConfig {
    /// Required leading zero hex characters
    pub difficulty: Difficulty,
    /// Per-request search deadline
    pub timeout: Duration,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::DEFAULT,
            timeout: Duration::from_secs(1),
        }
    }
}

impl MiningConfig {
    pub fn new(difficulty: Difficulty, timeout: Duration) -> Self {
        Self {
            difficulty,
            timeout,
        }
    }

    /// Create config for development (cheap difficulty)
    pub fn development() -> Self {
        Self {
            difficulty: Difficulty::new(2),
            ..Default::default()
        }
    }

    pub fn timeout_ms(&self) -> u64 {
        u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX)
    }
}
