// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn only_backend_failures_are_retryable() {
    let id = JobId::random();
    assert!(!StoreError::NotFound(id).is_retryable());
    assert!(!StoreError::AlreadyExists(id).is_retryable());
    assert!(!StoreError::InvalidTransition(RejectedUpdate::new("backwards")).is_retryable());

    let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    assert!(StoreError::backend(io).is_retryable());
}

#[test]
fn temp_data_faults_surface_as_backend() {
    let err: StoreError = TempDataError::new("scope allocation failed").into();
    assert!(matches!(err, StoreError::Backend(_)));
    assert!(err.is_retryable());
}

#[test]
fn rejection_converts_to_invalid_transition() {
    let err: StoreError = RejectedUpdate::new("state went backwards").into();
    assert!(err.to_string().contains("state went backwards"));
}
