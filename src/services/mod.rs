// ABOUTME: Domain service layer between route handlers and the recipe engine
// ABOUTME: Fetches data from the recipe source and runs the intelligence components over it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Domain service layer
//!
//! Route handlers stay thin: they parse the request, call a service, and
//! serialize the result. Services fetch fresh data from the configured
//! [`RecipeSource`](flavourfit_providers::RecipeSource) on every call and pass
//! it explicitly into the pure functions of `flavourfit-intelligence`.

/// In-memory community recipe store
pub mod community;

/// Catalog listing, recommendations, meal plans, similarity, search, and grocery lists
pub mod recipes;

/// Regional counts, per-state payloads, and the heatmap
pub mod regions;

pub use community::CommunityStore;
pub use recipes::RecipeService;
pub use regions::RegionService;
