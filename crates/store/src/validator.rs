// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Update-validator protocol
//!
//! A validator runs inside the store's per-job atomic section, between the
//! read of the previous record and the commit of the proposed one. It must
//! inspect only its two arguments; calling back into the store from a
//! validator deadlocks the critical section it is running in.

use ferry_types::TransferJob;
use thiserror::Error;

/// A validator declined the proposed update
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{reason}")]
pub struct RejectedUpdate {
    reason: String,
}

impl RejectedUpdate {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Caller-supplied guard for atomic updates
///
/// A rejection aborts the whole update with no partial effects. Implemented
/// for any matching closure, so most callers never name this trait.
pub trait JobUpdateValidator {
    fn validate(
        &self,
        previous: &TransferJob,
        proposed: &TransferJob,
    ) -> Result<(), RejectedUpdate>;
}

impl<F> JobUpdateValidator for F
where
    F: Fn(&TransferJob, &TransferJob) -> Result<(), RejectedUpdate>,
{
    fn validate(
        &self,
        previous: &TransferJob,
        proposed: &TransferJob,
    ) -> Result<(), RejectedUpdate> {
        self(previous, proposed)
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
