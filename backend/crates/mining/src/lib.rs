//! Mining Backend Module
//!
//! Accepts a transaction-like record over HTTP and returns it with a
//! proof-of-work nonce and hash, or 408 when the search misses its deadline.
//!
//! Clean Architecture structure:
//! - `domain/` - Record entity, difficulty, hashing services, miner trait
//! - `application/` - Search worker and deadline-bounded miner
//! - `presentation/` - HTTP handler, DTOs, router
//!
//! ## Concurrency Model
//! - One blocking search task per request, owning its own record copy
//! - Results travel over a single-slot channel whose send never blocks
//! - Cancellation is cooperative and polled once per hash attempt
//! - A request that goes away cancels its worker

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MiningConfig;
pub use application::deadline_miner::DeadlineMiner;
pub use domain::entities::{Record, RecordMetadata};
pub use domain::miner::RecordMiner;
pub use domain::value_objects::Difficulty;
pub use error::{MiningError, MiningResult};
pub use presentation::router::{mining_router, mining_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
