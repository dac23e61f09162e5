// ABOUTME: Weekly meal plan route handler
// ABOUTME: Accepts a preference profile and optional seed, returns seven days of three meals
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
use flavourfit_intelligence::MealPlanRequest;
use std::sync::Arc;

/// Meal plan routes
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create meal plan routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/meal-plan", post(Self::handle_plan))
            .with_state(resources)
    }

    async fn handle_plan(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<MealPlanRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| json_rejection(&e))?;
        let plan = RecipeService::new(resources).meal_plan(&request).await?;
        Ok((StatusCode::OK, Json(plan)).into_response())
    }
}
