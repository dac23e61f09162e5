// ABOUTME: Recipe data sources for the FlavourFit platform (catalog file, upstream HTTP API)
// ABOUTME: Core source trait, validated catalog, circuit breaker, retry, and shared HTTP client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

#![deny(unsafe_code)]

//! Recipe source implementations and core abstractions.
//!
//! Sources decode loosely-typed `RecipeRecord`s and validate them into
//! `Recipe`s before handing them to callers; nothing unvalidated leaves
//! this crate.

// Re-export flavourfit-core modules so sources can `use crate::errors::*`
pub use flavourfit_core::constants;
pub use flavourfit_core::errors;
pub use flavourfit_core::models;

/// Validated recipe catalog and its JSON document format
pub mod catalog;
/// Circuit breaker for upstream resilience
pub mod circuit_breaker;
/// Core recipe source trait
pub mod core;
/// JSON catalog file source
pub mod file_catalog;
/// Shared HTTP client for upstream calls
pub mod http_client;
/// Upstream HTTP API source
pub mod http_source;
/// Retry with backoff
pub mod utils;

pub use catalog::{CatalogDocument, RecipeCatalog};
pub use circuit_breaker::{CircuitBreaker, CircuitBreakerConfig, CircuitState};
pub use crate::core::RecipeSource;
pub use file_catalog::{FileCatalogSource, FILE_CATALOG_SOURCE};
pub use flavourfit_core::errors::{ProviderError, ProviderResult};
pub use http_client::{initialize_shared_client, shared_client};
pub use http_source::{HttpRecipeSource, HTTP_SOURCE};
pub use utils::{
    with_retry, RetryBackoffConfig, ENV_RETRY_BASE_DELAY_MS,
    ENV_RETRY_JITTER_FACTOR, ENV_RETRY_MAX_ATTEMPTS, ENV_RETRY_MAX_DELAY_MS,
};
