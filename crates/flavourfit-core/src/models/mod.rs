// ABOUTME: Core data models for recipes, user preferences, and geographic regions
// ABOUTME: Re-exports the validated Recipe record and its wire-format counterpart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Core data models
//!
//! `Recipe` is the validated, fixed-shape record every algorithm consumes.
//! `RecipeRecord` is the loosely-typed form decoded from catalogs and upstream
//! APIs; converting it with `Recipe::try_from` is the ingestion boundary.

/// User preference profile and its enumerated goals
pub mod profile;
/// Recipe, nutrition, and flavour profile models
pub mod recipe;
/// State codes, broad regions, and per-region counts
pub mod region;

pub use profile::{HealthGoal, TastePreference, UserPreferenceProfile};
pub use recipe::{
    FlavorDimension, FlavorProfile, FlavorRecord, Nutrition, NutritionRecord, Recipe, RecipeRecord,
};
pub use region::{broad_region_for, BroadRegion, RegionCounts, StateCode, DEFAULT_BROAD_REGION};
