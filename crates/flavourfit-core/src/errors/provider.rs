// ABOUTME: Error types for recipe data sources (catalog files and upstream HTTP APIs)
// ABOUTME: Classifies failures as retryable or permanent for the circuit breaker and retry loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use super::recipe::InvalidRecipeData;
use thiserror::Error;

/// Errors raised while fetching recipes or region counts from a source
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Transport-level failure (connect, timeout, reset)
    #[error("{source_name} request failed: {message}")]
    Http {
        /// Name of the source
        source_name: String,
        /// Transport error message
        message: String,
    },

    /// Upstream answered with a non-success status
    #[error("{source_name} returned HTTP {status}")]
    Status {
        /// Name of the source
        source_name: String,
        /// HTTP status code
        status: u16,
    },

    /// Payload could not be decoded
    #[error("{source_name} payload could not be decoded: {message}")]
    Decode {
        /// Name of the source
        source_name: String,
        /// Decoder error message
        message: String,
    },

    /// A record was decoded but failed validation
    #[error(transparent)]
    InvalidRecord(#[from] InvalidRecipeData),

    /// Catalog file could not be read
    #[error("catalog file {path} could not be read: {message}")]
    Io {
        /// File path
        path: String,
        /// I/O error message
        message: String,
    },

    /// Circuit breaker is open; calls fail fast
    #[error("{provider} circuit breaker is open, retry after {retry_after_secs}s")]
    CircuitBreakerOpen {
        /// Name of the source
        provider: String,
        /// Seconds until a recovery attempt is allowed
        retry_after_secs: u64,
    },
}

/// Result type for source operations
pub type ProviderResult<T> = Result<T, ProviderError>;

impl ProviderError {
    /// Whether the failure is transient and worth retrying
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Http { .. } => true,
            Self::Status { status, .. } => *status == 429 || *status >= 500,
            Self::Decode { .. }
            | Self::InvalidRecord(_)
            | Self::Io { .. }
            | Self::CircuitBreakerOpen { .. } => false,
        }
    }

    /// Build from a `reqwest` error, classifying status errors separately
    #[cfg(feature = "provider-errors")]
    #[must_use]
    pub fn from_reqwest(source_name: &str, error: &reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return Self::Status {
                source_name: source_name.to_owned(),
                status: status.as_u16(),
            };
        }
        if error.is_decode() {
            return Self::Decode {
                source_name: source_name.to_owned(),
                message: error.to_string(),
            };
        }
        Self::Http {
            source_name: source_name.to_owned(),
            message: error.to_string(),
        }
    }
}
