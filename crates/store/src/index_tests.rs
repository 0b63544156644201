// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use ferry_types::AuthState;

#[test]
fn insert_then_first_finds_the_id() {
    let mut index = StateIndex::new();
    let id = JobId::random();
    index.insert(AuthState::Initial, id);
    assert_eq!(index.first(AuthState::Initial), Some(id));
    assert_eq!(index.count(AuthState::Initial), 1);
}

#[test]
fn first_on_empty_state_is_none() {
    let index = StateIndex::new();
    assert_eq!(index.first(AuthState::CredsStored), None);
}

#[test]
fn remove_drops_the_id_and_empty_bucket() {
    let mut index = StateIndex::new();
    let id = JobId::random();
    index.insert(AuthState::Initial, id);
    index.remove(AuthState::Initial, id);
    assert_eq!(index.first(AuthState::Initial), None);
    assert_eq!(index.count(AuthState::Initial), 0);
}

#[test]
fn remove_of_absent_id_is_a_no_op() {
    let mut index = StateIndex::new();
    let kept = JobId::random();
    index.insert(AuthState::Initial, kept);
    index.remove(AuthState::Initial, JobId::random());
    index.remove(AuthState::TimedOut, kept);
    assert_eq!(index.first(AuthState::Initial), Some(kept));
}

#[test]
fn rekey_moves_between_states() {
    let mut index = StateIndex::new();
    let id = JobId::random();
    index.insert(AuthState::Initial, id);
    index.rekey(id, AuthState::Initial, AuthState::CredsAvailable);
    assert!(!index.contains(AuthState::Initial, id));
    assert!(index.contains(AuthState::CredsAvailable, id));
    assert_eq!(index.states_of(id), vec![AuthState::CredsAvailable]);
}

#[test]
fn rekey_to_same_state_keeps_the_entry() {
    let mut index = StateIndex::new();
    let id = JobId::random();
    index.insert(AuthState::CredsStored, id);
    index.rekey(id, AuthState::CredsStored, AuthState::CredsStored);
    assert!(index.contains(AuthState::CredsStored, id));
}

#[test]
fn first_picks_only_indexed_members() {
    let mut index = StateIndex::new();
    let a = JobId::random();
    let b = JobId::random();
    index.insert(AuthState::Initial, a);
    index.insert(AuthState::Initial, b);
    let picked = index.first(AuthState::Initial).unwrap();
    assert!(picked == a || picked == b);
}
