// ABOUTME: Free-text and spoken-query search route handler
// ABOUTME: Diet phrases map to a filter, other text matches titles and tags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::RecipeService;
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
struct SearchQuery {
    #[serde(default)]
    q: String,
}

/// Search routes
pub struct SearchRoutes;

impl SearchRoutes {
    /// Create search routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/search", get(Self::handle_search))
            .with_state(resources)
    }

    async fn handle_search(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<SearchQuery>,
    ) -> Result<Response, AppError> {
        let response = RecipeService::new(resources).search(&params.q).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
