//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the vocabulary every workspace member agrees on:
//! - Common error types and result aliases
//! - Typed ID wrappers used to correlate work in logs
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
