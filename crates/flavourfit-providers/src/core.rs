// ABOUTME: Core recipe source trait implemented by every data-retrieval backend
// ABOUTME: Supplies the full recipe list and per-state recipe counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Recipe source abstraction
//!
//! The personalization engine never fetches data itself. Callers obtain
//! recipes and region counts from a [`RecipeSource`] and pass them in.

use crate::catalog::RecipeCatalog;
use crate::errors::ProviderResult;
use crate::models::{Recipe, RegionCounts};
use async_trait::async_trait;

/// A backend that can list recipes
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Source name for logs and error messages
    fn name(&self) -> &'static str;

    /// Every recipe the source knows, validated, in source order
    async fn get_all_recipes(&self) -> ProviderResult<Vec<Recipe>>;

    /// Recipe count per state
    ///
    /// Defaults to counting [`RecipeSource::get_all_recipes`].
    async fn get_region_counts(&self) -> ProviderResult<RegionCounts> {
        let recipes = self.get_all_recipes().await?;
        Ok(RecipeCatalog::new(recipes).region_counts())
    }

    /// All recipes wrapped for lookups
    async fn get_catalog(&self) -> ProviderResult<RecipeCatalog> {
        Ok(RecipeCatalog::new(self.get_all_recipes().await?))
    }
}
