// ABOUTME: Regional route handlers for the interactive map
// ABOUTME: Per-state recipe counts and names, single-state payloads, and heatmap colours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::RegionService;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize, Default)]
struct StateQuery {
    #[serde(default)]
    state: Option<String>,
}

/// Region routes
pub struct RegionRoutes;

impl RegionRoutes {
    /// Create all region routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/regions/popular", get(Self::handle_popular))
            .route("/api/regions/popular/all", get(Self::handle_popular_all))
            .route("/api/regions/heatmap", get(Self::handle_heatmap))
            .with_state(resources)
    }

    /// Handle a single state; `state` is required
    async fn handle_popular(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<StateQuery>,
    ) -> Result<Response, AppError> {
        let payload = RegionService::new(resources)
            .popular(params.state.as_deref())
            .await?;
        Ok((StatusCode::OK, Json(payload)).into_response())
    }

    async fn handle_popular_all(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let response = RegionService::new(resources).popular_all().await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_heatmap(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let response = RegionService::new(resources).heatmap().await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
