// ABOUTME: Circuit breaker guarding calls to upstream recipe sources
// ABOUTME: Fails fast while a source is down and tries one call after a cool-down
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use std::future::Future;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::errors::ProviderError;

/// Circuit breaker states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircuitState {
    /// Requests pass through
    Closed,
    /// Requests fail immediately
    Open,
    /// One trial request is in flight
    HalfOpen,
}

impl CircuitState {
    const fn from_u32(value: u32) -> Self {
        match value {
            0 => Self::Closed,
            1 => Self::Open,
            _ => Self::HalfOpen,
        }
    }

    const fn as_u32(self) -> u32 {
        match self {
            Self::Closed => 0,
            Self::Open => 1,
            Self::HalfOpen => 2,
        }
    }
}

/// Thresholds and timeouts for a circuit breaker
#[derive(Debug, Clone)]
pub struct CircuitBreakerConfig {
    /// Consecutive retryable failures that open the circuit
    pub failure_threshold: u32,
    /// Time the circuit stays open before a trial request is allowed
    pub recovery_timeout: Duration,
    /// Successful trial calls needed to close the circuit again
    pub success_threshold: u32,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            failure_threshold: 5,
            recovery_timeout: Duration::from_secs(30),
            success_threshold: 1,
        }
    }
}

impl CircuitBreakerConfig {
    /// Create a configuration
    #[must_use]
    pub const fn new(
        failure_threshold: u32,
        recovery_timeout: Duration,
        success_threshold: u32,
    ) -> Self {
        Self {
            failure_threshold,
            recovery_timeout,
            success_threshold,
        }
    }
}

/// Lock-free circuit breaker shared by all requests to one source
///
/// - **Closed**: calls pass; consecutive retryable failures are counted.
/// - **Open**: calls fail with [`ProviderError::CircuitBreakerOpen`] until
///   the recovery timeout has elapsed.
/// - **Half-open**: a single trial call is let through; success closes the
///   circuit, failure re-opens it.
pub struct CircuitBreaker {
    source_name: String,
    state: AtomicU32,
    failure_count: AtomicU32,
    success_count: AtomicU32,
    /// Millis since `start_instant` when the circuit last opened
    opened_at_ms: AtomicU64,
    config: CircuitBreakerConfig,
    start_instant: Instant,
}

impl CircuitBreaker {
    /// Create a circuit breaker with default thresholds
    #[must_use]
    pub fn new(source_name: &str) -> Self {
        Self::with_config(source_name, CircuitBreakerConfig::default())
    }

    /// Create a circuit breaker with custom thresholds
    #[must_use]
    pub fn with_config(source_name: &str, config: CircuitBreakerConfig) -> Self {
        Self {
            source_name: source_name.to_owned(),
            state: AtomicU32::new(CircuitState::Closed.as_u32()),
            failure_count: AtomicU32::new(0),
            success_count: AtomicU32::new(0),
            opened_at_ms: AtomicU64::new(0),
            config,
            start_instant: Instant::now(),
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> CircuitState {
        CircuitState::from_u32(self.state.load(Ordering::SeqCst))
    }

    /// Consecutive failures counted while closed
    #[must_use]
    pub fn failure_count(&self) -> u32 {
        self.failure_count.load(Ordering::SeqCst)
    }

    /// Whether a call may proceed now
    ///
    /// In the open state this moves the breaker to half-open once the
    /// recovery timeout has elapsed, admitting exactly one caller.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        match self.state() {
            CircuitState::Closed => true,
            CircuitState::Open => self.try_half_open(),
            CircuitState::HalfOpen => false,
        }
    }

    fn try_half_open(&self) -> bool {
        if self.millis_since_open() < self.recovery_millis() {
            return false;
        }
        let swapped = self
            .state
            .compare_exchange(
                CircuitState::Open.as_u32(),
                CircuitState::HalfOpen.as_u32(),
                Ordering::SeqCst,
                Ordering::SeqCst,
            )
            .is_ok();
        if swapped {
            info!(source.name = %self.source_name, "Circuit breaker half-open, probing source");
        }
        swapped
    }

    #[allow(clippy::cast_possible_truncation)] // Safe: breaker lifetimes are far below u64 millis
    fn elapsed_millis(&self) -> u64 {
        self.start_instant.elapsed().as_millis() as u64
    }

    #[allow(clippy::cast_possible_truncation)] // Safe: recovery timeouts are seconds to minutes
    const fn recovery_millis(&self) -> u64 {
        self.config.recovery_timeout.as_millis() as u64
    }

    fn millis_since_open(&self) -> u64 {
        self.elapsed_millis()
            .saturating_sub(self.opened_at_ms.load(Ordering::SeqCst))
    }

    fn open(&self) {
        self.state
            .store(CircuitState::Open.as_u32(), Ordering::SeqCst);
        self.opened_at_ms
            .store(self.elapsed_millis(), Ordering::SeqCst);
        self.success_count.store(0, Ordering::SeqCst);
    }

    /// Record a successful call
    pub fn record_success(&self) {
        match self.state() {
            CircuitState::Closed => self.failure_count.store(0, Ordering::SeqCst),
            CircuitState::HalfOpen => {
                let successes = self.success_count.fetch_add(1, Ordering::SeqCst) + 1;
                if successes >= self.config.success_threshold {
                    self.state
                        .store(CircuitState::Closed.as_u32(), Ordering::SeqCst);
                    self.failure_count.store(0, Ordering::SeqCst);
                    self.success_count.store(0, Ordering::SeqCst);
                    info!(source.name = %self.source_name, "Circuit breaker closed, source recovered");
                } else {
                    // Let the next trial call through
                    self.state
                        .store(CircuitState::Open.as_u32(), Ordering::SeqCst);
                    self.opened_at_ms.store(0, Ordering::SeqCst);
                }
            }
            CircuitState::Open => {}
        }
    }

    /// Record a failed call
    pub fn record_failure(&self) {
        match self.state() {
            CircuitState::Closed => {
                let failures = self.failure_count.fetch_add(1, Ordering::SeqCst) + 1;
                if failures >= self.config.failure_threshold {
                    self.open();
                    warn!(
                        source.name = %self.source_name,
                        failures,
                        threshold = self.config.failure_threshold,
                        recovery_timeout_secs = self.config.recovery_timeout.as_secs(),
                        "Circuit breaker opened, source failing"
                    );
                }
            }
            CircuitState::HalfOpen => {
                self.open();
                warn!(source.name = %self.source_name, "Circuit breaker re-opened, trial call failed");
            }
            CircuitState::Open => {
                self.opened_at_ms
                    .store(self.elapsed_millis(), Ordering::SeqCst);
            }
        }
    }

    /// Run `operation` under the breaker
    ///
    /// Only retryable errors count as failures; a 404 or a bad record says
    /// nothing about the source's health.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::CircuitBreakerOpen`] without running the
    /// operation when the circuit is open, otherwise the operation's error
    pub async fn call<F, T, E>(&self, operation: F) -> Result<T, ProviderError>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<ProviderError>,
    {
        if !self.is_allowed() {
            return Err(ProviderError::CircuitBreakerOpen {
                provider: self.source_name.clone(),
                retry_after_secs: self.secs_until_recovery(),
            });
        }

        match operation.await {
            Ok(value) => {
                self.record_success();
                Ok(value)
            }
            Err(e) => {
                let error = e.into();
                if error.is_retryable() {
                    self.record_failure();
                } else if self.state() == CircuitState::HalfOpen {
                    // The source answered; a permanent error still proves it is up
                    self.record_success();
                }
                Err(error)
            }
        }
    }

    /// Whole seconds until a trial call is allowed, rounded up
    fn secs_until_recovery(&self) -> u64 {
        self.recovery_millis()
            .saturating_sub(self.millis_since_open())
            .div_ceil(1000)
    }

    /// Force the circuit closed
    pub fn reset(&self) {
        self.state
            .store(CircuitState::Closed.as_u32(), Ordering::SeqCst);
        self.failure_count.store(0, Ordering::SeqCst);
        self.success_count.store(0, Ordering::SeqCst);
        info!(source.name = %self.source_name, "Circuit breaker manually reset");
    }
}
