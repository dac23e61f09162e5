// ABOUTME: Personalized recommendation pipeline over a recipe catalog
// ABOUTME: Diet filter, ingredient exclusion, scoring and ranking, then a fixed-size prefix
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Recommendation pipeline
//!
//! 1. Optional diet filter
//! 2. Drop recipes with an excluded ingredient (case-insensitive substring)
//! 3. Score and rank against the profile
//! 4. Keep the first `limit` results

use crate::health_filter::HealthFilter;
use crate::scoring::{RecipeScorer, ScoredRecipe};
use flavourfit_core::constants::limits::MAX_RESULT_LIMIT;
use flavourfit_core::errors::InvalidRecipeData;
use flavourfit_core::models::{Recipe, UserPreferenceProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A personalization request as sent by the presentation layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationRequest {
    /// User preferences
    #[serde(default)]
    pub profile: UserPreferenceProfile,
    /// Optional diet filter applied before ranking
    #[serde(default)]
    pub health_filter: HealthFilter,
    /// Ingredient fragments to avoid (allergies, dislikes)
    #[serde(default)]
    pub exclude_ingredients: Vec<String>,
    /// Number of results; defaults to the configured recommendation limit
    #[serde(default)]
    pub limit: Option<usize>,
}

impl PersonalizationRequest {
    /// Requested limit, falling back to `default_limit`, capped at [`MAX_RESULT_LIMIT`]
    #[must_use]
    pub fn effective_limit(&self, default_limit: usize) -> usize {
        self.limit.unwrap_or(default_limit).min(MAX_RESULT_LIMIT)
    }
}

/// Whether any ingredient line contains any excluded fragment
#[must_use]
pub fn contains_excluded(recipe: &Recipe, excluded: &[String]) -> bool {
    let fragments: Vec<String> = excluded
        .iter()
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
        .collect();
    if fragments.is_empty() {
        return false;
    }
    recipe.ingredients.iter().any(|line| {
        let line = line.to_lowercase();
        fragments.iter().any(|fragment| line.contains(fragment.as_str()))
    })
}

/// Personalized recommendations from `catalog`
///
/// # Errors
///
/// Returns [`InvalidRecipeData`] if a candidate recipe fails validation
pub fn recommend(
    scorer: &RecipeScorer,
    catalog: &[Recipe],
    request: &PersonalizationRequest,
    default_limit: usize,
) -> Result<Vec<ScoredRecipe>, InvalidRecipeData> {
    let candidates: Vec<Recipe> = request
        .health_filter
        .apply(catalog, &scorer.config().diet)
        .into_iter()
        .filter(|recipe| !contains_excluded(recipe, &request.exclude_ingredients))
        .collect();

    let mut ranked = scorer.rank(&candidates, &request.profile)?;
    ranked.truncate(request.effective_limit(default_limit));

    debug!(
        catalog = catalog.len(),
        candidates = candidates.len(),
        returned = ranked.len(),
        filter = %request.health_filter,
        "Built recommendations"
    );
    Ok(ranked)
}
