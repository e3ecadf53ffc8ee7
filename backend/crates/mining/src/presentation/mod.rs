//! Presentation Layer
//!
//! HTTP handler and DTOs for the API.

pub mod dto;
pub mod handlers;
pub mod router;
