// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Owns the recipe source, the scoring engine, the community store, and the configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::config::{RecipeSourceConfig, ServerConfig};
use crate::services::CommunityStore;
use flavourfit_intelligence::RecipeScorer;
use flavourfit_providers::{FileCatalogSource, HttpRecipeSource, RecipeSource};
use std::sync::Arc;
use tracing::info;

/// Resources shared across requests
///
/// Cloning is cheap; everything heavy sits behind an `Arc`.
#[derive(Clone)]
pub struct ServerResources {
    /// Where recipes and region counts come from
    pub source: Arc<dyn RecipeSource>,
    /// Personalized scoring engine
    pub scorer: RecipeScorer,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Community recipes published since startup
    pub community: Arc<CommunityStore>,
}

impl ServerResources {
    /// Assemble resources around an explicit source
    #[must_use]
    pub fn new(source: Arc<dyn RecipeSource>, scorer: RecipeScorer, config: ServerConfig) -> Self {
        Self {
            source,
            scorer,
            config: Arc::new(config),
            community: Arc::new(CommunityStore::new()),
        }
    }

    /// Build the source named by the configuration and the globally configured scorer
    ///
    /// The upstream source uses the shared HTTP client, so
    /// `initialize_shared_client` should run first.
    #[must_use]
    pub fn from_config(config: ServerConfig) -> Self {
        let source: Arc<dyn RecipeSource> = match &config.source {
            RecipeSourceConfig::File { path } => Arc::new(FileCatalogSource::new(path.clone())),
            RecipeSourceConfig::Upstream { base_url } => Arc::new(HttpRecipeSource::new(base_url)),
        };
        info!(
            source.name = source.name(),
            source.target = %config.source.describe(),
            "Recipe source configured"
        );

        Self::new(source, RecipeScorer::new(), config)
    }
}

impl std::fmt::Debug for ServerResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerResources")
            .field("source", &self.source.name())
            .field("scorer", &self.scorer)
            .field("config", &self.config)
            .field("community", &self.community)
            .finish()
    }
}
