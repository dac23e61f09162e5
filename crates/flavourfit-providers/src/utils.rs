// ABOUTME: Retry with exponential backoff and jitter for upstream recipe source calls
// ABOUTME: Only transient provider errors are retried; limits are environment-overridable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::errors::ProviderResult;
use rand::Rng;
use std::env;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum attempts, including the first
pub const ENV_RETRY_MAX_ATTEMPTS: &str = "FLAVOURFIT_RETRY_MAX_ATTEMPTS";
/// Delay before the first retry, in milliseconds
pub const ENV_RETRY_BASE_DELAY_MS: &str = "FLAVOURFIT_RETRY_BASE_DELAY_MS";
/// Ceiling for any single delay, in milliseconds
pub const ENV_RETRY_MAX_DELAY_MS: &str = "FLAVOURFIT_RETRY_MAX_DELAY_MS";
/// Fraction of the delay randomized in either direction (0.0 - 1.0)
pub const ENV_RETRY_JITTER_FACTOR: &str = "FLAVOURFIT_RETRY_JITTER_FACTOR";

/// Backoff settings for [`with_retry`]
#[derive(Debug, Clone, PartialEq)]
pub struct RetryBackoffConfig {
    /// Maximum attempts, including the first
    pub max_attempts: u32,
    /// Delay before the first retry
    pub base_delay: Duration,
    /// Ceiling for any single delay
    pub max_delay: Duration,
    /// Fraction of the delay randomized in either direction
    pub jitter_factor: f64,
}

impl Default for RetryBackoffConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(200),
            max_delay: Duration::from_secs(5),
            jitter_factor: 0.2,
        }
    }
}

impl RetryBackoffConfig {
    /// Defaults overridden by `FLAVOURFIT_RETRY_*` variables; unparseable values are ignored
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(attempts) = env_parse::<u32>(ENV_RETRY_MAX_ATTEMPTS) {
            config.max_attempts = attempts.max(1);
        }
        if let Some(ms) = env_parse::<u64>(ENV_RETRY_BASE_DELAY_MS) {
            config.base_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = env_parse::<u64>(ENV_RETRY_MAX_DELAY_MS) {
            config.max_delay = Duration::from_millis(ms);
        }
        if let Some(jitter) = env_parse::<f64>(ENV_RETRY_JITTER_FACTOR) {
            config.jitter_factor = jitter.clamp(0.0, 1.0);
        }
        config
    }

    /// No waiting between attempts; for tests
    #[must_use]
    pub const fn immediate(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            base_delay: Duration::ZERO,
            max_delay: Duration::ZERO,
            jitter_factor: 0.0,
        }
    }

    /// Delay before retry number `retry` (1-based), before jitter
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2_u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay
            .saturating_mul(factor)
            .min(self.max_delay)
    }

    fn jittered(&self, delay: Duration) -> Duration {
        if self.jitter_factor.is_nan() || self.jitter_factor <= 0.0 || delay.is_zero() {
            return delay;
        }
        let spread = rand::thread_rng().gen_range(-self.jitter_factor..=self.jitter_factor);
        delay.mul_f64((1.0 + spread).max(0.0))
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}

/// Run `operation` until it succeeds, fails permanently, or attempts run out
///
/// # Errors
///
/// Returns the last error when it is not retryable or when `max_attempts`
/// is exhausted
pub async fn with_retry<F, Fut, T>(
    config: &RetryBackoffConfig,
    operation_name: &str,
    mut operation: F,
) -> ProviderResult<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ProviderResult<T>>,
{
    let mut attempt = 1;
    loop {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!(operation = operation_name, attempt, "Succeeded after retry");
                }
                return Ok(value);
            }
            Err(error) if error.is_retryable() && attempt < config.max_attempts => {
                let delay = config.jittered(config.backoff(attempt));
                warn!(
                    operation = operation_name,
                    attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %error,
                    "Transient failure, retrying"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(error) => return Err(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles_and_caps() {
        let config = RetryBackoffConfig {
            max_attempts: 5,
            base_delay: Duration::from_millis(100),
            max_delay: Duration::from_millis(350),
            jitter_factor: 0.0,
        };
        assert_eq!(config.backoff(1), Duration::from_millis(100));
        assert_eq!(config.backoff(2), Duration::from_millis(200));
        assert_eq!(config.backoff(3), Duration::from_millis(350));
    }
}
