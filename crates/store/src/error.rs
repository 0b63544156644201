// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store error taxonomy

use crate::temp::TempDataError;
use crate::validator::RejectedUpdate;
use ferry_types::JobId;
use thiserror::Error;

/// Errors from job-store mutation operations
///
/// Lookups never produce these: `find_job`/`find_first` report absence as
/// `None`, which is a normal outcome, not a failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A mutation targeted a job id that does not exist
    #[error("job not found: {0}")]
    NotFound(JobId),
    /// Create collided with an existing job id
    #[error("job already exists: {0}")]
    AlreadyExists(JobId),
    /// Underlying storage or collaborator fault; caller-retryable
    #[error("backend failure: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// A validator rejected the proposed update; retrying the same record
    /// will fail again
    #[error("invalid transition: {0}")]
    InvalidTransition(#[from] RejectedUpdate),
}

impl StoreError {
    /// Wrap an arbitrary backend fault
    pub fn backend(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(source))
    }

    /// Whether retrying the same call unchanged can succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, StoreError::Backend(_))
    }
}

impl From<TempDataError> for StoreError {
    fn from(e: TempDataError) -> Self {
        StoreError::Backend(Box::new(e))
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
