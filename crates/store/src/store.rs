// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The job-store contract
//!
//! This trait is intended to be implemented by backends (in-memory,
//! relational, distributed KV). Every method is a synchronous blocking call
//! that returns a definitive outcome before control returns to the caller.
//!
//! Backends must keep the state index exactly consistent with the primary
//! records at every point between operations, and must make each mutation
//! all-or-nothing per job id: operations on one id are linearizable, and no
//! caller ever observes a half-applied update.

use crate::error::StoreError;
use crate::validator::JobUpdateValidator;
use ferry_types::{AuthState, ErrorDetail, JobId, TransferJob};

/// A store for transfer jobs, indexed by authorization state
///
/// Object-safe so callers can hold `Arc<dyn JobStore>`.
pub trait JobStore: Send + Sync {
    /// Insert a new job keyed by `id`
    ///
    /// Allocates the temporary-data scope for the job and indexes the record
    /// under its initial state. Fails with `AlreadyExists` if `id` is
    /// already present.
    fn create_job(&self, id: JobId, job: TransferJob) -> Result<(), StoreError>;

    /// Replace the record for an existing job
    ///
    /// Re-keys the state index in the same atomic section as the primary
    /// write when the state tag changed. The committed error log is carried
    /// forward; the proposed record's `errors` field is ignored. Fails with
    /// `NotFound` if `id` was never created.
    fn update_job(&self, id: JobId, job: TransferJob) -> Result<(), StoreError>;

    /// Replace the record, gated by a validator
    ///
    /// The validator sees (previous, proposed) inside the same indivisible
    /// section as the commit; no other writer can interleave between its
    /// read and the store's write. A rejection fails the call with
    /// `InvalidTransition` and leaves the store untouched.
    fn update_job_validated(
        &self,
        id: JobId,
        job: TransferJob,
        validator: &dyn JobUpdateValidator,
    ) -> Result<(), StoreError>;

    /// Append error details to a job's log, preserving call order
    ///
    /// Touches nothing but the error log. Concurrent appends against the
    /// same id are all retained.
    fn add_errors(&self, id: JobId, errors: Vec<ErrorDetail>) -> Result<(), StoreError>;

    /// Delete a job, its index entries, and its temporary-data scope
    fn remove(&self, id: JobId) -> Result<(), StoreError>;

    /// The current record, or `None` if no such job exists
    fn find_job(&self, id: JobId) -> Option<TransferJob>;

    /// Some job id currently indexed under `state`, or `None`
    ///
    /// Selection among several candidates is arbitrary but always a
    /// genuinely indexed member.
    fn find_first(&self, state: AuthState) -> Option<JobId>;
}
