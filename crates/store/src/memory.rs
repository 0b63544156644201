// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory reference backend
//!
//! The primary map is a sharded `DashMap`; holding a key's entry guard is
//! the per-job critical section, so operations on different ids proceed
//! independently while operations on one id serialize. The state index sits
//! behind its own mutex and is only ever touched while the relevant entry
//! guard is held, always in the order primary-entry -> index. `find_first`
//! takes only the index lock.

use crate::error::StoreError;
use crate::index::StateIndex;
use crate::store::JobStore;
use crate::temp::{MemoryTempStore, TempDataStore};
use crate::validator::JobUpdateValidator;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use ferry_types::{AuthState, ErrorDetail, JobId, TransferJob};
use std::sync::{Arc, Mutex, MutexGuard};

/// Sharded in-memory job store
pub struct MemoryJobStore {
    jobs: DashMap<JobId, TransferJob>,
    index: Mutex<StateIndex>,
    temp: Arc<dyn TempDataStore>,
}

impl MemoryJobStore {
    /// Create a store backed by a fresh [`MemoryTempStore`]
    pub fn new() -> Self {
        Self::with_temp_store(Arc::new(MemoryTempStore::new()))
    }

    /// Create a store wired to the given temporary-data collaborator
    pub fn with_temp_store(temp: Arc<dyn TempDataStore>) -> Self {
        Self {
            jobs: DashMap::new(),
            index: Mutex::new(StateIndex::new()),
            temp,
        }
    }

    /// Number of live job records
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Number of jobs currently indexed under `state`
    pub fn count_in_state(&self, state: AuthState) -> usize {
        self.lock_index().count(state)
    }

    fn lock_index(&self) -> MutexGuard<'_, StateIndex> {
        self.index.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn update_inner(
        &self,
        id: JobId,
        mut job: TransferJob,
        validator: Option<&dyn JobUpdateValidator>,
    ) -> Result<(), StoreError> {
        let Some(mut entry) = self.jobs.get_mut(&id) else {
            return Err(StoreError::NotFound(id));
        };

        // Invariant: the error log only grows through add_errors, so the
        // committed log replaces whatever the proposed record carried.
        job.errors = entry.value().errors.clone();

        if let Some(validator) = validator {
            validator.validate(entry.value(), &job)?;
        }

        let prev_state = entry.value().state;
        let next_state = job.state;
        let mut index = self.lock_index();
        *entry.value_mut() = job;
        index.rekey(id, prev_state, next_state);
        Ok(())
    }
}

impl Default for MemoryJobStore {
    fn default() -> Self {
        Self::new()
    }
}

impl JobStore for MemoryJobStore {
    fn create_job(&self, id: JobId, job: TransferJob) -> Result<(), StoreError> {
        match self.jobs.entry(id) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(id)),
            Entry::Vacant(slot) => {
                self.temp.allocate(id)?;
                let mut index = self.lock_index();
                index.insert(job.state, id);
                slot.insert(job);
                Ok(())
            }
        }
    }

    fn update_job(&self, id: JobId, job: TransferJob) -> Result<(), StoreError> {
        self.update_inner(id, job, None)
    }

    fn update_job_validated(
        &self,
        id: JobId,
        job: TransferJob,
        validator: &dyn JobUpdateValidator,
    ) -> Result<(), StoreError> {
        self.update_inner(id, job, Some(validator))
    }

    fn add_errors(&self, id: JobId, errors: Vec<ErrorDetail>) -> Result<(), StoreError> {
        let Some(mut entry) = self.jobs.get_mut(&id) else {
            return Err(StoreError::NotFound(id));
        };
        entry.value_mut().errors.extend(errors);
        Ok(())
    }

    fn remove(&self, id: JobId) -> Result<(), StoreError> {
        match self.jobs.entry(id) {
            Entry::Occupied(entry) => {
                // Release first: a collaborator fault must leave the record
                // and index intact.
                self.temp.release(id)?;
                let state = entry.get().state;
                let mut index = self.lock_index();
                entry.remove();
                index.remove(state, id);
                Ok(())
            }
            Entry::Vacant(_) => Err(StoreError::NotFound(id)),
        }
    }

    fn find_job(&self, id: JobId) -> Option<TransferJob> {
        self.jobs.get(&id).map(|entry| entry.value().clone())
    }

    fn find_first(&self, state: AuthState) -> Option<JobId> {
        self.lock_index().first(state)
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
