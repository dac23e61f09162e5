// ABOUTME: Regional business logic: per-state counts, state payloads, and the heatmap
// ABOUTME: Derives counts and state names from one catalog snapshot for the map view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, RegionCounts, StateCode};
use crate::resources::ServerResources;
use flavourfit_intelligence::{build_heatmap, HeatmapCell};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Counts and names for every state with recipes
#[derive(Debug, Serialize)]
pub struct PopularRegionsResponse {
    /// Recipes per state
    pub counts: RegionCounts,
    /// State display names
    pub names: BTreeMap<StateCode, String>,
}

/// Everything the map shows for one state
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPayload {
    /// State code
    pub code: StateCode,
    /// State display name (the code when no name is known)
    pub name: String,
    /// Number of recipes
    pub count: u32,
    /// The state's recipes in catalog order
    pub recipes: Vec<Recipe>,
}

/// Heatmap for the whole map
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapResponse {
    /// Normalization maximum (never below 1)
    pub max_count: u32,
    /// One cell per state, in state-code order
    pub cells: Vec<HeatmapCell>,
}

/// Region operations over the configured source
pub struct RegionService {
    resources: Arc<ServerResources>,
}

impl RegionService {
    /// Create a service over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Counts and names from a single catalog snapshot
    async fn counts_and_names(&self) -> AppResult<(RegionCounts, BTreeMap<StateCode, String>)> {
        let source = &self.resources.source;
        let catalog = source.get_catalog().await?;
        let counts = catalog.region_counts();
        debug!(
            source.name = source.name(),
            states = counts.len(),
            "Loaded region counts"
        );
        Ok((counts, catalog.state_names()))
    }

    /// Counts and names for every state
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read
    pub async fn popular_all(&self) -> AppResult<PopularRegionsResponse> {
        let (counts, names) = self.counts_and_names().await?;
        Ok(PopularRegionsResponse { counts, names })
    }

    /// Payload for one state
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank code and `ResourceNotFound`
    /// for a state with no recipes
    pub async fn popular(&self, state: Option<&str>) -> AppResult<RegionPayload> {
        let code = state
            .map(StateCode::new)
            .filter(|code| !code.is_empty())
            .ok_or_else(|| AppError::missing_field("state"))?;

        let catalog = self.resources.source.get_catalog().await?;
        let recipes = catalog.for_state(&code);
        if recipes.is_empty() {
            return Err(AppError::not_found(format!("Region {code}")));
        }

        let name = catalog
            .state_names()
            .remove(&code)
            .unwrap_or_else(|| code.to_string());

        Ok(RegionPayload {
            name,
            count: u32::try_from(recipes.len()).unwrap_or(u32::MAX),
            code,
            recipes,
        })
    }

    /// Colour and glow for every state
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read
    pub async fn heatmap(&self) -> AppResult<HeatmapResponse> {
        let (counts, names) = self.counts_and_names().await?;
        Ok(HeatmapResponse {
            max_count: counts.max_count(),
            cells: build_heatmap(&counts, &names),
        })
    }
}
