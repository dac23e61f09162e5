// ABOUTME: Personalized recommendation route handler
// ABOUTME: Accepts a preference profile with optional filter and exclusions, returns ranked recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use super::json_rejection;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::RecipeService;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use flavourfit_intelligence::PersonalizationRequest;
use std::sync::Arc;

/// Recommendation routes
pub struct RecommendationRoutes;

impl RecommendationRoutes {
    /// Create recommendation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recommendations", post(Self::handle_recommend))
            .with_state(resources)
    }

    async fn handle_recommend(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<PersonalizationRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| json_rejection(&e))?;
        let response = RecipeService::new(resources).recommend(&request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
