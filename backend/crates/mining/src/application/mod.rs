//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic on the async runtime.
//! Contains the search worker and the deadline-bounded miner.

pub mod config;
pub mod deadline_miner;
pub mod search_worker;
