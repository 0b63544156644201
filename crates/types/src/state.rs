// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authorization-state tags
//!
//! The store treats these purely as indexing keys. Which transitions are
//! legal is decided by caller-supplied validators, not here; the `Ord` impl
//! exists so validators *can* impose a monotonic policy if they want one.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Authorization lifecycle tag carried by every transfer job
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthState {
    /// Job created, no credentials yet
    Initial,
    /// Export/import credentials are available to the frontend
    CredsAvailable,
    /// A worker generated its encryption key pair
    CredsEncryptionKeyGenerated,
    /// Encrypted credentials have been stored for the claiming worker
    CredsStored,
    /// Authorization flow timed out
    TimedOut,
}

impl AuthState {
    /// All states, in declaration order
    pub const ALL: [AuthState; 5] = [
        AuthState::Initial,
        AuthState::CredsAvailable,
        AuthState::CredsEncryptionKeyGenerated,
        AuthState::CredsStored,
        AuthState::TimedOut,
    ];

    /// Wire name used for persistence and display
    pub fn wire_name(&self) -> &'static str {
        match self {
            AuthState::Initial => "INITIAL",
            AuthState::CredsAvailable => "CREDS_AVAILABLE",
            AuthState::CredsEncryptionKeyGenerated => "CREDS_ENCRYPTION_KEY_GENERATED",
            AuthState::CredsStored => "CREDS_STORED",
            AuthState::TimedOut => "TIMED_OUT",
        }
    }
}

impl fmt::Display for AuthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.wire_name())
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
