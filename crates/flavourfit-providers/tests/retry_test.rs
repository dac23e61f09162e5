// ABOUTME: Tests for bounded retry of transient recipe source failures
// ABOUTME: Verifies attempts are counted and permanent errors are not retried
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit
#![allow(missing_docs)]

use flavourfit_providers::{with_retry, ProviderError, RetryBackoffConfig};
use std::sync::atomic::{AtomicU32, Ordering};

fn status(code: u16) -> ProviderError {
    ProviderError::Status {
        source_name: "test".into(),
        status: code,
    }
}

#[tokio::test]
async fn test_transient_failures_are_retried_until_success() {
    let attempts = AtomicU32::new(0);
    let config = RetryBackoffConfig::immediate(3);

    let result = with_retry(&config, "fetch", || async {
        let n = attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if n < 3 {
            Err(status(503))
        } else {
            Ok(n)
        }
    })
    .await;

    assert_eq!(result.unwrap(), 3);
    assert_eq!(attempts.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_gives_up_after_max_attempts() {
    let attempts = AtomicU32::new(0);
    let config = RetryBackoffConfig::immediate(2);

    let result: Result<(), _> = with_retry(&config, "fetch", || async {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(status(500))
    })
    .await;

    assert!(matches!(result, Err(ProviderError::Status { status: 500, .. })));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_permanent_error_is_not_retried() {
    let attempts = AtomicU32::new(0);
    let config = RetryBackoffConfig::immediate(5);

    let result: Result<(), _> = with_retry(&config, "fetch", || async {
        attempts.fetch_add(1, Ordering::SeqCst);
        Err(status(404))
    })
    .await;

    assert!(result.is_err());
    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}
