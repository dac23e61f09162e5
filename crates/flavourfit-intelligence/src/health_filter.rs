// ABOUTME: Diet filters that narrow a recipe list by a named mode
// ABOUTME: Unknown modes pass every recipe through; filtering never reorders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::config::{DietThresholds, ScoringConfig};
use flavourfit_core::models::Recipe;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named diet filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum HealthFilter {
    /// Diabetic-friendly recipes only
    Diabetic,
    /// Recipes with protein at or above the high-protein threshold
    HighProtein,
    /// Recipes with carbs below the low-carb threshold
    LowCarb,
    /// No filtering
    #[default]
    All,
}

impl HealthFilter {
    /// Parse a mode name, mapping unrecognized names to [`HealthFilter::All`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "diabetic" => Self::Diabetic,
            "high-protein" => Self::HighProtein,
            "low-carb" => Self::LowCarb,
            _ => Self::All,
        }
    }

    /// Mode name as used on the wire
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Diabetic => "diabetic",
            Self::HighProtein => "high-protein",
            Self::LowCarb => "low-carb",
            Self::All => "all",
        }
    }

    /// Whether a recipe passes this filter
    #[must_use]
    pub fn matches(self, recipe: &Recipe, thresholds: &DietThresholds) -> bool {
        match self {
            Self::Diabetic => recipe.diabetic_friendly,
            Self::HighProtein => recipe.nutrition.protein >= thresholds.high_protein_min_g,
            Self::LowCarb => recipe.nutrition.carbs < thresholds.low_carb_max_g,
            Self::All => true,
        }
    }

    /// Recipes passing this filter, in input order
    #[must_use]
    pub fn apply(self, recipes: &[Recipe], thresholds: &DietThresholds) -> Vec<Recipe> {
        recipes
            .iter()
            .filter(|recipe| self.matches(recipe, thresholds))
            .cloned()
            .collect()
    }
}

impl From<String> for HealthFilter {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

impl fmt::Display for HealthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter recipes by mode using the global diet thresholds
#[must_use]
pub fn filter_by_health(recipes: &[Recipe], mode: HealthFilter) -> Vec<Recipe> {
    mode.apply(recipes, &ScoringConfig::global().diet)
}
