// ABOUTME: Recipe scoring and ranking against a user preference profile
// ABOUTME: Additive bonuses on the health score; stable descending rank via rayon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Recipe scoring engine
//!
//! A recipe's personalized score starts from its health score and adds
//! independent bonuses for regional affinity, the user's health goal, and
//! the user's taste preference. The exact-state bonus supersedes the
//! broad-region bonus; the two are never granted together.

use crate::config::ScoringConfig;
use flavourfit_core::errors::InvalidRecipeData;
use flavourfit_core::models::{
    broad_region_for, HealthGoal, Recipe, TastePreference, UserPreferenceProfile,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

/// How a score was assembled
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    /// Recipe's health score
    pub base: f64,
    /// Exact-state or broad-region bonus
    pub region: f64,
    /// Health goal bonus
    pub health_goal: f64,
    /// Taste preference bonus
    pub taste: f64,
}

impl ScoreBreakdown {
    /// Final score
    #[must_use]
    pub fn total(&self) -> f64 {
        self.base + self.region + self.health_goal + self.taste
    }
}

/// A recipe paired with its personalized score
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredRecipe {
    /// The scored recipe
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Personalized score
    pub personalized_score: f64,
    /// Component bonuses
    pub score_breakdown: ScoreBreakdown,
}

/// Scores and ranks recipes for a user
#[derive(Debug, Clone, Copy)]
pub struct RecipeScorer {
    config: ScoringConfig,
}

impl Default for RecipeScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeScorer {
    /// Create a scorer with the global configuration
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: *ScoringConfig::global(),
        }
    }

    /// Create with custom configuration
    #[must_use]
    pub const fn with_config(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Break a recipe's score down into its components
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecipeData`] if the recipe carries non-finite or
    /// out-of-scale numbers
    pub fn breakdown(
        &self,
        recipe: &Recipe,
        profile: &UserPreferenceProfile,
    ) -> Result<ScoreBreakdown, InvalidRecipeData> {
        recipe.validate()?;

        Ok(ScoreBreakdown {
            base: recipe.health_score,
            region: self.region_bonus(recipe, profile),
            health_goal: self.goal_bonus(recipe, profile.health_goal),
            taste: self.taste_bonus(recipe, profile.taste_preference),
        })
    }

    /// Personalized score for one recipe
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecipeData`] if the recipe carries non-finite or
    /// out-of-scale numbers
    pub fn score(
        &self,
        recipe: &Recipe,
        profile: &UserPreferenceProfile,
    ) -> Result<f64, InvalidRecipeData> {
        self.breakdown(recipe, profile).map(|b| b.total())
    }

    /// Score every recipe and order by score, highest first
    ///
    /// Recipes with equal scores keep their input order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecipeData`] for the first invalid recipe in input order
    pub fn rank(
        &self,
        recipes: &[Recipe],
        profile: &UserPreferenceProfile,
    ) -> Result<Vec<ScoredRecipe>, InvalidRecipeData> {
        // Indexed collect keeps input order, so the sequential pass below
        // reports the earliest invalid recipe
        let results: Vec<Result<ScoredRecipe, InvalidRecipeData>> = recipes
            .par_iter()
            .map(|recipe| {
                let breakdown = self.breakdown(recipe, profile)?;
                Ok(ScoredRecipe {
                    recipe: recipe.clone(),
                    personalized_score: breakdown.total(),
                    score_breakdown: breakdown,
                })
            })
            .collect();
        let mut scored = results.into_iter().collect::<Result<Vec<_>, _>>()?;

        // sort_by is stable, so ties keep catalog order
        scored.sort_by(|a, b| b.personalized_score.total_cmp(&a.personalized_score));

        debug!(
            recipes = scored.len(),
            location = %profile.location,
            "Ranked recipes for profile"
        );
        Ok(scored)
    }

    fn region_bonus(&self, recipe: &Recipe, profile: &UserPreferenceProfile) -> f64 {
        if recipe.state == profile.location {
            self.config.bonuses.exact_region
        } else if recipe.region == broad_region_for(&profile.location) {
            self.config.bonuses.broad_region
        } else {
            0.0
        }
    }

    fn goal_bonus(&self, recipe: &Recipe, goal: HealthGoal) -> f64 {
        let bonuses = &self.config.bonuses;
        let thresholds = &self.config.thresholds;
        match goal {
            HealthGoal::WeightLoss
                if recipe.nutrition.calories < thresholds.weight_loss_max_calories =>
            {
                bonuses.weight_loss
            }
            HealthGoal::MuscleGain
                if recipe.nutrition.protein >= thresholds.muscle_gain_min_protein_g =>
            {
                bonuses.muscle_gain
            }
            HealthGoal::Diabetic if recipe.diabetic_friendly => bonuses.diabetic,
            _ => 0.0,
        }
    }

    fn taste_bonus(&self, recipe: &Recipe, taste: TastePreference) -> f64 {
        let intensity = match taste {
            TastePreference::Spicy => recipe.flavor_profile.spicy,
            TastePreference::Sweet => recipe.flavor_profile.sweet,
            // Only spicy and sweet preferences earn a taste bonus
            TastePreference::Tangy | TastePreference::Savory | TastePreference::Other => {
                return 0.0
            }
        };
        if intensity >= self.config.thresholds.taste_min_intensity {
            self.config.bonuses.taste
        } else {
            0.0
        }
    }
}

/// Personalized score using the global configuration
///
/// # Errors
///
/// Returns [`InvalidRecipeData`] if the recipe carries non-finite or out-of-scale numbers
pub fn score(recipe: &Recipe, profile: &UserPreferenceProfile) -> Result<f64, InvalidRecipeData> {
    RecipeScorer::new().score(recipe, profile)
}

/// Rank recipes using the global configuration
///
/// # Errors
///
/// Returns [`InvalidRecipeData`] for the first invalid recipe in input order
pub fn rank(
    recipes: &[Recipe],
    profile: &UserPreferenceProfile,
) -> Result<Vec<ScoredRecipe>, InvalidRecipeData> {
    RecipeScorer::new().rank(recipes, profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flavourfit_core::models::{BroadRegion, FlavorProfile, Nutrition};

    fn recipe(id: &str, state: &str, region: BroadRegion) -> Recipe {
        Recipe {
            id: id.into(),
            name: id.into(),
            state: state.into(),
            state_name: None,
            region,
            category: "Main Course".into(),
            nutrition: Nutrition {
                calories: 400.0,
                protein: 10.0,
                carbs: 50.0,
                fat: 10.0,
                fiber: 5.0,
            },
            flavor_profile: FlavorProfile::new(3.0, 3.0, 3.0, 3.0, 0.0),
            diabetic_friendly: false,
            health_score: 50.0,
            prep_time: None,
            servings: None,
            price: None,
            image: None,
            badges: vec![],
            tags: vec![],
            ingredients: vec![],
            instructions: None,
        }
    }

    fn scorer() -> RecipeScorer {
        RecipeScorer::with_config(ScoringConfig::default())
    }

    #[test]
    fn test_exact_match_supersedes_broad_match() {
        let r = recipe("a", "MH", BroadRegion::West);
        let profile = UserPreferenceProfile::new("MH", HealthGoal::Balanced, TastePreference::Tangy);

        let breakdown = scorer().breakdown(&r, &profile).unwrap();
        assert!((breakdown.region - 20.0).abs() < f64::EPSILON);
        assert!((breakdown.total() - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_goal_thresholds_are_strict_and_inclusive() {
        let profile =
            UserPreferenceProfile::new("WB", HealthGoal::WeightLoss, TastePreference::Other);
        let mut r = recipe("a", "KL", BroadRegion::South);
        r.nutrition.calories = 300.0;
        assert!((scorer().score(&r, &profile).unwrap() - 50.0).abs() < f64::EPSILON);
        r.nutrition.calories = 299.0;
        assert!((scorer().score(&r, &profile).unwrap() - 65.0).abs() < f64::EPSILON);

        let profile =
            UserPreferenceProfile::new("WB", HealthGoal::MuscleGain, TastePreference::Other);
        r.nutrition.protein = 20.0;
        assert!((scorer().score(&r, &profile).unwrap() - 65.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tangy_preference_never_earns_taste_bonus() {
        let mut r = recipe("a", "KL", BroadRegion::South);
        r.flavor_profile.tangy = 10.0;
        let profile = UserPreferenceProfile::new("WB", HealthGoal::Balanced, TastePreference::Tangy);

        let breakdown = scorer().breakdown(&r, &profile).unwrap();
        assert!(breakdown.taste.abs() < f64::EPSILON);
    }

    #[test]
    fn test_invalid_recipe_is_reported() {
        let mut r = recipe("bad", "KL", BroadRegion::South);
        r.nutrition.calories = f64::NAN;

        let err = scorer()
            .score(&r, &UserPreferenceProfile::default())
            .unwrap_err();
        assert_eq!(err.recipe_id, "bad");
        assert_eq!(err.field, "nutrition.calories");
    }

    #[test]
    fn test_custom_config_changes_bonus() {
        let mut config = ScoringConfig::default();
        config.bonuses.diabetic = 40.0;
        let mut r = recipe("a", "KL", BroadRegion::South);
        r.diabetic_friendly = true;
        let profile = UserPreferenceProfile::new("WB", HealthGoal::Diabetic, TastePreference::Other);

        let score = RecipeScorer::with_config(config).score(&r, &profile).unwrap();
        assert!((score - 90.0).abs() < f64::EPSILON);
    }
}
