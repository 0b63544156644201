//! ferry-types: Domain model for the ferry transfer-job store
//!
//! This crate provides:
//! - Job identifiers and the transfer-job record
//! - Authorization-state tags used for secondary indexing
//! - Error details attached to jobs during a transfer

pub mod error_detail;
pub mod id;
pub mod job;
pub mod state;

// Re-exports
pub use error_detail::{ErrorDetail, ErrorDetailBuilder, MissingField};
pub use id::JobId;
pub use job::TransferJob;
pub use state::AuthState;
