// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The transfer-job record

use crate::error_detail::ErrorDetail;
use crate::state::AuthState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A transfer job's stored state
///
/// Treated as an immutable value swapped wholesale on update. The one
/// exception is `errors`, which is append-only: the store carries the
/// committed log across record swaps, so a stale `errors` field on a
/// proposed update cannot drop entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferJob {
    /// Service the data is exported from
    pub export_service: String,
    /// Service the data is imported into
    pub import_service: String,
    /// Kind of data being moved (photos, contacts, ...)
    pub data_type: String,
    /// Authorization lifecycle tag; the store indexes jobs by this
    pub state: AuthState,
    /// Append-only error log
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    /// Encrypted credential payload, once the frontend has produced it
    #[serde(default)]
    pub encrypted_auth_data: Option<String>,
    /// Identity of the worker that claimed this job, if any.
    /// Validators use this to detect conflicting claimants.
    #[serde(default)]
    pub worker_instance: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TransferJob {
    /// Create a job in the `Initial` state with an empty error log
    pub fn new(
        export_service: impl Into<String>,
        import_service: impl Into<String>,
        data_type: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            export_service: export_service.into(),
            import_service: import_service.into(),
            data_type: data_type.into(),
            state: AuthState::Initial,
            errors: Vec::new(),
            encrypted_auth_data: None,
            worker_instance: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Return a copy moved to the given state
    pub fn with_state(mut self, state: AuthState) -> Self {
        self.state = state;
        self.updated_at = Utc::now();
        self
    }

    /// Return a copy claimed by the given worker instance
    pub fn with_worker_instance(mut self, worker: impl Into<String>) -> Self {
        self.worker_instance = Some(worker.into());
        self.updated_at = Utc::now();
        self
    }

    /// Return a copy carrying encrypted credentials
    pub fn with_encrypted_auth_data(mut self, data: impl Into<String>) -> Self {
        self.encrypted_auth_data = Some(data.into());
        self.updated_at = Utc::now();
        self
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
