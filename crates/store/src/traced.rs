// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced store wrapper for consistent observability

use crate::error::StoreError;
use crate::store::JobStore;
use crate::validator::JobUpdateValidator;
use ferry_types::{AuthState, ErrorDetail, JobId, TransferJob};

/// Wrapper that adds tracing to any JobStore
#[derive(Clone)]
pub struct TracedJobStore<S> {
    inner: S,
}

impl<S> TracedJobStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: JobStore> JobStore for TracedJobStore<S> {
    fn create_job(&self, id: JobId, job: TransferJob) -> Result<(), StoreError> {
        let span = tracing::info_span!("job.create", job_id = %id, state = %job.state);
        let _guard = span.enter();

        tracing::info!(
            export = %job.export_service,
            import = %job.import_service,
            data_type = %job.data_type,
            "creating"
        );

        let start = std::time::Instant::now();
        let result = self.inner.create_job(id, job);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "job created"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "create failed"
            ),
        }

        result
    }

    fn update_job(&self, id: JobId, job: TransferJob) -> Result<(), StoreError> {
        let span = tracing::info_span!("job.update", job_id = %id, state = %job.state);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.update_job(id, job);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "job updated"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "update failed"
            ),
        }

        result
    }

    fn update_job_validated(
        &self,
        id: JobId,
        job: TransferJob,
        validator: &dyn JobUpdateValidator,
    ) -> Result<(), StoreError> {
        let span = tracing::info_span!("job.update_validated", job_id = %id, state = %job.state);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.update_job_validated(id, job, validator);
        let elapsed = start.elapsed();

        match &result {
            Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "job updated"),
            // A rejection is a domain outcome, not a store fault.
            Err(e @ StoreError::InvalidTransition(_)) => tracing::warn!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "update rejected"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "update failed"
            ),
        }

        result
    }

    fn add_errors(&self, id: JobId, errors: Vec<ErrorDetail>) -> Result<(), StoreError> {
        let span = tracing::info_span!("job.add_errors", job_id = %id);
        let _guard = span.enter();

        tracing::debug!(count = errors.len(), "appending errors");
        let result = self.inner.add_errors(id, errors);

        match &result {
            Ok(()) => tracing::debug!("errors appended"),
            Err(e) => tracing::error!(error = %e, "append failed"),
        }

        result
    }

    fn remove(&self, id: JobId) -> Result<(), StoreError> {
        let span = tracing::info_span!("job.remove", job_id = %id);
        let _guard = span.enter();

        let result = self.inner.remove(id);
        match &result {
            Ok(()) => tracing::info!("job removed"),
            Err(e) => tracing::error!(error = %e, "remove failed"),
        }

        result
    }

    fn find_job(&self, id: JobId) -> Option<TransferJob> {
        let result = self.inner.find_job(id);
        tracing::trace!(job_id = %id, found = result.is_some(), "looked up job");
        result
    }

    fn find_first(&self, state: AuthState) -> Option<JobId> {
        let result = self.inner.find_first(state);
        tracing::trace!(state = %state, found = ?result.map(|id| id.to_string()), "picked first");
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
