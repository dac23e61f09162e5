// ABOUTME: HTTP route definitions for the FlavourFit JSON API
// ABOUTME: Each submodule owns one resource and merges into the server router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Route modules
//!
//! Handlers parse the request, delegate to a service in [`crate::services`],
//! and serialize the result. Errors render through `AppError`'s
//! `IntoResponse` implementation.

/// Community recipe submissions and likes
pub mod community;
/// Grocery list aggregation
pub mod grocery;
/// Liveness and readiness
pub mod health;
/// Catalog listing, single recipes, and similar recipes
pub mod recipes;
/// Weekly meal plans
pub mod meal_plan;
/// Personalized recommendations
pub mod recommendations;
/// Regional counts, state payloads, and heatmap
pub mod regions;
/// Free-text search
pub mod search;

use crate::errors::AppError;
use axum::extract::rejection::JsonRejection;

pub use community::CommunityRoutes;
pub use grocery::GroceryRoutes;
pub use health::HealthRoutes;
pub use meal_plan::MealPlanRoutes;
pub use recipes::RecipeRoutes;
pub use recommendations::RecommendationRoutes;
pub use regions::RegionRoutes;
pub use search::SearchRoutes;

/// Render a JSON body rejection in the API's error format
pub(crate) fn json_rejection(rejection: &JsonRejection) -> AppError {
    AppError::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
}
