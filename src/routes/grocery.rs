// ABOUTME: Grocery list route handler
// ABOUTME: Aggregates ingredient lines across the selected recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use super::json_rejection;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::recipes::{GroceryListRequest, RecipeService};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use std::sync::Arc;

/// Grocery list routes
pub struct GroceryRoutes;

impl GroceryRoutes {
    /// Create grocery list routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/grocery-list", post(Self::handle_grocery_list))
            .with_state(resources)
    }

    async fn handle_grocery_list(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<GroceryListRequest>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(request) = body.map_err(|e| json_rejection(&e))?;
        let response = RecipeService::new(resources)
            .grocery_list(&request)
            .await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
