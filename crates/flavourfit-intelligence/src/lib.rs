// ABOUTME: Recipe intelligence engine: scoring, flavour similarity, diet filters, heatmap
// ABOUTME: Pure synchronous algorithms over validated recipes and explicit user profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

#![deny(unsafe_code)]

//! # `FlavourFit` Intelligence
//!
//! Personalization algorithms for the `FlavourFit` recipe platform. Every
//! function is pure: the user profile and the recipes are passed in and
//! nothing is cached between calls.
//!
//! ## Modules
//!
//! - **similarity**: cosine similarity of flavour profiles, similar-recipe lookup
//! - **scoring**: additive personalized score and stable descending rank
//! - **`health_filter`**: diabetic / high-protein / low-carb filters
//! - **heatmap**: count to colour and glow mapping for the regional map
//! - **recommendations**: filter, exclude, rank, and limit pipeline
//! - **`meal_plan`**: seeded weekly plan over the recommendation pool
//! - **community**: nutrition, flavour, and health estimates for user-submitted recipes
//! - **search**: spoken-query intents and text search
//! - **grocery**: ingredient aggregation
//! - **config**: environment-overridable scoring configuration

/// Enrichment of community-submitted recipes
pub mod community;
/// Scoring configuration
pub mod config;
/// Ingredient aggregation for shopping lists
pub mod grocery;
/// Diet filters
pub mod health_filter;
/// Heatmap colour and glow mapping
pub mod heatmap;
/// Weekly meal planning
pub mod meal_plan;
/// Recommendation pipeline
pub mod recommendations;
/// Recipe scoring and ranking
pub mod scoring;
/// Free-text search
pub mod search;
/// Flavour profile similarity
pub mod similarity;

pub use community::{
    enrich_submission, BudgetTier, CommunitySubmission, DietType, EnrichedSubmission,
    IngredientEntry, SubmissionError,
};
pub use config::{ConfigError, DietThresholds, ScoringConfig};
pub use grocery::{grocery_list, GroceryList};
pub use health_filter::{filter_by_health, HealthFilter};
pub use heatmap::{build_heatmap, color_for, glow_for, HeatmapCell, Rgb};
pub use meal_plan::{
    plan_week, DayPlan, MealPlanRequest, MealSlot, PlannedMeal, WeeklyMealPlan, Weekday,
    MEAL_PLAN_POOL_SIZE,
};
pub use recommendations::{recommend, PersonalizationRequest};
pub use scoring::{rank, score, RecipeScorer, ScoreBreakdown, ScoredRecipe};
pub use search::{parse_query, search, SearchIntent};
pub use similarity::{cosine_similarity, similar_recipes, taste_similarity, SimilarRecipe};
