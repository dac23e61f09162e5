// ABOUTME: Unit tests for the recipe source circuit breaker
// ABOUTME: Tests state transitions, failure counting, fail-fast, and recovery behavior
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit
#![allow(missing_docs)]

use flavourfit_providers::{CircuitBreaker, CircuitBreakerConfig, CircuitState, ProviderError};
use std::time::Duration;

fn unavailable() -> ProviderError {
    ProviderError::Status {
        source_name: "test".into(),
        status: 503,
    }
}

#[test]
fn test_circuit_breaker_starts_closed() {
    let cb = CircuitBreaker::new("test");
    assert_eq!(cb.state(), CircuitState::Closed);
    assert!(cb.is_allowed());
}

#[test]
fn test_circuit_opens_after_threshold_failures() {
    let config = CircuitBreakerConfig::new(3, Duration::from_secs(30), 1);
    let cb = CircuitBreaker::with_config("test", config);

    cb.record_failure();
    cb.record_failure();
    assert_eq!(cb.state(), CircuitState::Closed);
    cb.record_failure();
    assert_eq!(cb.state(), CircuitState::Open);
    assert!(!cb.is_allowed());
}

#[test]
fn test_success_resets_failure_count() {
    let config = CircuitBreakerConfig::new(3, Duration::from_secs(30), 1);
    let cb = CircuitBreaker::with_config("test", config);

    cb.record_failure();
    cb.record_failure();
    assert_eq!(cb.failure_count(), 2);

    cb.record_success();
    assert_eq!(cb.failure_count(), 0);
    assert_eq!(cb.state(), CircuitState::Closed);
}

#[test]
fn test_default_config() {
    assert_eq!(CircuitBreakerConfig::default().failure_threshold, 5);
}

#[test]
fn test_reset() {
    let config = CircuitBreakerConfig::new(2, Duration::from_secs(30), 1);
    let cb = CircuitBreaker::with_config("test", config);

    cb.record_failure();
    cb.record_failure();
    assert_eq!(cb.state(), CircuitState::Open);

    cb.reset();
    assert_eq!(cb.state(), CircuitState::Closed);
    assert_eq!(cb.failure_count(), 0);
}

#[test]
fn test_zero_recovery_timeout_allows_trial_call() {
    let config = CircuitBreakerConfig::new(1, Duration::ZERO, 1);
    let cb = CircuitBreaker::with_config("test", config);

    cb.record_failure();
    assert_eq!(cb.state(), CircuitState::Open);

    assert!(cb.is_allowed());
    assert_eq!(cb.state(), CircuitState::HalfOpen);
    // Only one trial call at a time
    assert!(!cb.is_allowed());

    cb.record_success();
    assert_eq!(cb.state(), CircuitState::Closed);
}

#[test]
fn test_failed_trial_call_reopens() {
    let config = CircuitBreakerConfig::new(1, Duration::ZERO, 1);
    let cb = CircuitBreaker::with_config("test", config);

    cb.record_failure();
    assert!(cb.is_allowed());
    cb.record_failure();
    assert_eq!(cb.state(), CircuitState::Open);
}

#[tokio::test]
async fn test_call_fails_fast_when_open() {
    let config = CircuitBreakerConfig::new(1, Duration::from_secs(60), 1);
    let cb = CircuitBreaker::with_config("upstream", config);

    let first: Result<(), _> = cb.call(async { Err(unavailable()) }).await;
    assert!(matches!(first, Err(ProviderError::Status { status: 503, .. })));
    assert_eq!(cb.state(), CircuitState::Open);

    let second: Result<u32, _> = cb.call(async { Ok::<_, ProviderError>(1) }).await;
    match second {
        Err(ProviderError::CircuitBreakerOpen {
            provider,
            retry_after_secs,
        }) => {
            assert_eq!(provider, "upstream");
            assert!(retry_after_secs > 0 && retry_after_secs <= 60);
        }
        other => panic!("expected open circuit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_permanent_errors_do_not_trip_circuit() {
    let config = CircuitBreakerConfig::new(1, Duration::from_secs(60), 1);
    let cb = CircuitBreaker::with_config("upstream", config);

    let result: Result<(), _> = cb
        .call(async {
            Err(ProviderError::Status {
                source_name: "upstream".into(),
                status: 404,
            })
        })
        .await;

    assert!(result.is_err());
    assert_eq!(cb.state(), CircuitState::Closed);
    assert_eq!(cb.failure_count(), 0);
}
