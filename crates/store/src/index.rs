// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Secondary index: authorization state -> set of job ids
//!
//! Not internally synchronized. The owning store guards it with a mutex and
//! repairs it in the same critical section as every primary-map mutation
//! that changes a record's state tag.

use ferry_types::{AuthState, JobId};
use std::collections::{HashMap, HashSet};

/// In-memory state index with O(1) insert, remove and pick
#[derive(Debug, Default)]
pub struct StateIndex {
    by_state: HashMap<AuthState, HashSet<JobId>>,
}

impl StateIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index `id` under `state`
    pub fn insert(&mut self, state: AuthState, id: JobId) {
        self.by_state.entry(state).or_default().insert(id);
    }

    /// Drop `id` from `state`, removing the bucket once empty
    pub fn remove(&mut self, state: AuthState, id: JobId) {
        if let Some(ids) = self.by_state.get_mut(&state) {
            ids.remove(&id);
            if ids.is_empty() {
                self.by_state.remove(&state);
            }
        }
    }

    /// Move `id` between states; no-op when they are equal
    pub fn rekey(&mut self, id: JobId, from: AuthState, to: AuthState) {
        if from == to {
            return;
        }
        self.remove(from, id);
        self.insert(to, id);
    }

    /// Some id currently indexed under `state`; arbitrary among several
    pub fn first(&self, state: AuthState) -> Option<JobId> {
        self.by_state
            .get(&state)
            .and_then(|ids| ids.iter().next())
            .copied()
    }

    pub fn contains(&self, state: AuthState, id: JobId) -> bool {
        self.by_state
            .get(&state)
            .is_some_and(|ids| ids.contains(&id))
    }

    pub fn count(&self, state: AuthState) -> usize {
        self.by_state.get(&state).map_or(0, HashSet::len)
    }

    /// States under which `id` is currently indexed (for consistency checks)
    pub fn states_of(&self, id: JobId) -> Vec<AuthState> {
        self.by_state
            .iter()
            .filter(|(_, ids)| ids.contains(&id))
            .map(|(state, _)| *state)
            .collect()
    }
}

#[cfg(test)]
#[path = "index_tests.rs"]
mod tests;
