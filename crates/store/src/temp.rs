// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Temporary per-job data collaborator
//!
//! Each job owns a scope of transient blobs (downloaded data awaiting
//! import, worker scratch state) that lives outside the job record. The
//! store only needs two hooks: allocate a scope on create and release it on
//! remove. Everything else about the collaborator is its own business.

use dashmap::DashMap;
use ferry_types::JobId;
use std::collections::HashMap;
use thiserror::Error;

/// Fault in the temporary-data collaborator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("temp data store: {message}")]
pub struct TempDataError {
    message: String,
}

impl TempDataError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Scoped per-job blob storage
///
/// Implementations must not call back into the job store; both hooks run
/// inside the store's per-job critical section.
pub trait TempDataStore: Send + Sync {
    /// Allocate the scope for a job; invoked before the record commits
    fn allocate(&self, id: JobId) -> Result<(), TempDataError>;

    /// Release everything held for a job; invoked as part of `remove`
    fn release(&self, id: JobId) -> Result<(), TempDataError>;
}

/// In-memory collaborator: one key/value scope per job
#[derive(Debug, Default)]
pub struct MemoryTempStore {
    scopes: DashMap<JobId, HashMap<String, Vec<u8>>>,
}

impl MemoryTempStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a blob under a key inside a job's scope
    pub fn put_bytes(&self, id: JobId, key: impl Into<String>, data: Vec<u8>) {
        self.scopes.entry(id).or_default().insert(key.into(), data);
    }

    /// Fetch a blob from a job's scope
    pub fn get_bytes(&self, id: JobId, key: &str) -> Option<Vec<u8>> {
        self.scopes.get(&id)?.get(key).cloned()
    }

    pub fn has_scope(&self, id: JobId) -> bool {
        self.scopes.contains_key(&id)
    }
}

impl TempDataStore for MemoryTempStore {
    fn allocate(&self, id: JobId) -> Result<(), TempDataError> {
        self.scopes.entry(id).or_default();
        Ok(())
    }

    fn release(&self, id: JobId) -> Result<(), TempDataError> {
        self.scopes.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "temp_tests.rs"]
mod tests;
