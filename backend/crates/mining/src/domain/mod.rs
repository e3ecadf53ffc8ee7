//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Record, RecordMetadata)
//! - Domain value objects (Difficulty)
//! - Domain services (canonical record hashing, difficulty check)
//! - The miner trait the presentation layer depends on

pub mod entities;
pub mod miner;
pub mod services;
pub mod value_objects;
