// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    initial = { AuthState::Initial, "INITIAL" },
    creds_available = { AuthState::CredsAvailable, "CREDS_AVAILABLE" },
    key_generated = { AuthState::CredsEncryptionKeyGenerated, "CREDS_ENCRYPTION_KEY_GENERATED" },
    creds_stored = { AuthState::CredsStored, "CREDS_STORED" },
    timed_out = { AuthState::TimedOut, "TIMED_OUT" },
)]
fn wire_name_matches_display_and_serde(state: AuthState, expected: &str) {
    assert_eq!(state.wire_name(), expected);
    assert_eq!(state.to_string(), expected);
    let json = serde_json::to_string(&state).unwrap();
    assert_eq!(json, format!("\"{}\"", expected));
}

#[test]
fn deserializes_from_wire_name() {
    let state: AuthState = serde_json::from_str("\"CREDS_STORED\"").unwrap();
    assert_eq!(state, AuthState::CredsStored);
}

#[test]
fn ordering_follows_lifecycle_declaration() {
    for pair in AuthState::ALL.windows(2) {
        assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
    }
}
