// ABOUTME: Recipe source backed by an upstream JSON API
// ABOUTME: Requests go through the shared client, bounded retry, and a circuit breaker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::catalog::{CatalogDocument, RecipeCatalog};
use crate::circuit_breaker::{CircuitBreaker, CircuitBreakerConfig};
use crate::core::RecipeSource;
use crate::errors::{ProviderError, ProviderResult};
use crate::http_client::shared_client;
use crate::models::{Recipe, RegionCounts};
use crate::utils::{with_retry, RetryBackoffConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// Source name used in logs and errors
pub const HTTP_SOURCE: &str = "upstream-api";

/// Path of the recipe list, relative to the base URL
pub const RECIPES_PATH: &str = "recipes";

/// Path of the per-state counts, relative to the base URL
pub const REGION_COUNTS_PATH: &str = "regions/counts";

/// Fetches recipes from `{base_url}/recipes` and counts from `{base_url}/regions/counts`
pub struct HttpRecipeSource {
    base_url: String,
    client: Client,
    breaker: CircuitBreaker,
    retry: RetryBackoffConfig,
}

impl HttpRecipeSource {
    /// Source using the shared client, default breaker, and env-configured retry
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self::with_config(
            base_url,
            shared_client().clone(),
            CircuitBreakerConfig::default(),
            RetryBackoffConfig::from_env(),
        )
    }

    /// Source with explicit client, breaker, and retry settings
    #[must_use]
    pub fn with_config(
        base_url: &str,
        client: Client,
        breaker: CircuitBreakerConfig,
        retry: RetryBackoffConfig,
    ) -> Self {
        info!(source.name = HTTP_SOURCE, base_url, "Configured upstream recipe source");
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client,
            breaker: CircuitBreaker::with_config(HTTP_SOURCE, breaker),
            retry,
        }
    }

    /// Circuit breaker guarding this source
    #[must_use]
    pub const fn circuit_breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ProviderResult<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProviderError::from_reqwest(HTTP_SOURCE, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                source_name: HTTP_SOURCE.to_owned(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| ProviderError::from_reqwest(HTTP_SOURCE, &e))?;
        serde_json::from_slice(&body).map_err(|e| ProviderError::Decode {
            source_name: HTTP_SOURCE.to_owned(),
            message: e.to_string(),
        })
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> ProviderResult<T> {
        let url = self.url(path);
        let url = url.as_str();
        self.breaker
            .call(with_retry(&self.retry, path, move || self.get_json(url)))
            .await
    }
}

#[async_trait]
impl RecipeSource for HttpRecipeSource {
    fn name(&self) -> &'static str {
        HTTP_SOURCE
    }

    async fn get_all_recipes(&self) -> ProviderResult<Vec<Recipe>> {
        let document: CatalogDocument = self.fetch(RECIPES_PATH).await?;
        let catalog = RecipeCatalog::from_records(document.into_records())?;
        debug!(
            source.name = HTTP_SOURCE,
            recipe.count = catalog.len(),
            "Fetched recipes from upstream"
        );
        Ok(catalog.into_recipes())
    }

    async fn get_region_counts(&self) -> ProviderResult<RegionCounts> {
        self.fetch(REGION_COUNTS_PATH).await
    }
}
