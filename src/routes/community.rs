// ABOUTME: Community recipe route handlers
// ABOUTME: Publishes enriched submissions, lists them by sort and diet, fetches one, toggles likes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use super::json_rejection;
use crate::errors::AppError;
use crate::resources::ServerResources;
use crate::services::community::{parse_diet, CommunitySort, LikeRequest};
use axum::{
    body::Bytes,
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use flavourfit_intelligence::CommunitySubmission;
use serde::Deserialize;
use std::sync::Arc;

/// Query parameters for the community listing
#[derive(Deserialize, Default)]
struct ListQuery {
    #[serde(default)]
    sort: Option<String>,
    #[serde(default)]
    diet: Option<String>,
}

/// Community recipe routes
pub struct CommunityRoutes;

impl CommunityRoutes {
    /// Create all community routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/community/recipes",
                post(Self::handle_publish).get(Self::handle_list),
            )
            .route("/api/community/recipes/:id", get(Self::handle_get))
            .route("/api/community/recipes/:id/like", post(Self::handle_like))
            .with_state(resources)
    }

    async fn handle_publish(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<CommunitySubmission>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let Json(submission) = body.map_err(|e| json_rejection(&e))?;
        let response = resources.community.publish(&submission).await?;
        Ok((StatusCode::CREATED, Json(response)).into_response())
    }

    /// Handle listing; an unknown sort name falls back to newest first
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<ListQuery>,
    ) -> Result<Response, AppError> {
        let sort = params
            .sort
            .as_deref()
            .map_or(CommunitySort::Newest, CommunitySort::from_str_lossy);
        let diet = parse_diet(params.diet.as_deref())?;

        let response = resources.community.list(sort, diet).await;
        Ok((StatusCode::OK, Json(response)).into_response())
    }

    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let recipe = resources.community.get(&id).await?;
        Ok((StatusCode::OK, Json(recipe)).into_response())
    }

    /// Handle a like toggle; the body is optional
    async fn handle_like(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let request: LikeRequest = if body.iter().all(u8::is_ascii_whitespace) {
            LikeRequest::default()
        } else {
            serde_json::from_slice(&body)
                .map_err(|e| AppError::invalid_input(format!("Invalid request body: {e}")))?
        };

        let response = resources.community.toggle_like(&id, &request).await?;
        Ok((StatusCode::OK, Json(response)).into_response())
    }
}
