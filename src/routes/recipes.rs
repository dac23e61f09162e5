// ABOUTME: Recipe catalog route handlers
// ABOUTME: Lists the catalog with an optional diet filter, fetches one recipe, and finds look-alikes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::RecipeService;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use flavourfit_intelligence::HealthFilter;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the catalog listing
#[derive(Deserialize, Default)]
struct ListQuery {
    #[serde(default)]
    filter: Option<String>,
}

/// Query parameters for similar recipes
#[derive(Deserialize, Default)]
struct SimilarQuery {
    #[serde(default)]
    limit: Option<usize>,
}

/// Recipe catalog routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", get(Self::handle_list))
            .route("/api/recipes/:id", get(Self::handle_get))
            .route("/api/recipes/:id/similar", get(Self::handle_similar))
            .with_state(resources)
    }

    /// Handle catalog listing; an unknown filter name lists everything
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let filter = params
            .filter
            .as_deref()
            .map_or(HealthFilter::All, HealthFilter::from_str_lossy);

        let response = RecipeService::new(resources).list(filter).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = RecipeService::new(resources).get(&id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    async fn handle_similar(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        Query(params): Query<SimilarQuery>,
    ) -> Result<Response, AppError> {
        let response = RecipeService::new(resources)
            .similar(&id, params.limit)
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
