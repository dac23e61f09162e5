// ABOUTME: Scoring and diet-filter configuration for the recipe personalization engine
// ABOUTME: Bonus magnitudes and nutrition thresholds, defaulting to the published rule set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Scoring Configuration
//!
//! Bonus values and thresholds used by the recipe scorer and the diet
//! filters. Defaults come from `flavourfit_core::constants`.

use flavourfit_core::constants::{diet, scoring};
use serde::{Deserialize, Serialize};

/// Bonus points granted by each scoring rule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringBonuses {
    /// Recipe comes from the user's own state
    pub exact_region: f64,
    /// Recipe shares the user's broad region (not granted with `exact_region`)
    pub broad_region: f64,
    /// Weight-loss goal and a low-calorie recipe
    pub weight_loss: f64,
    /// Muscle-gain goal and a protein-rich recipe
    pub muscle_gain: f64,
    /// Diabetic goal and a diabetic-friendly recipe
    pub diabetic: f64,
    /// Preferred taste is spicy or sweet and the recipe is intense enough in it
    pub taste: f64,
}

impl Default for ScoringBonuses {
    fn default() -> Self {
        Self {
            exact_region: scoring::EXACT_REGION_BONUS,
            broad_region: scoring::BROAD_REGION_BONUS,
            weight_loss: scoring::WEIGHT_LOSS_BONUS,
            muscle_gain: scoring::MUSCLE_GAIN_BONUS,
            diabetic: scoring::DIABETIC_BONUS,
            taste: scoring::TASTE_BONUS,
        }
    }
}

/// Thresholds that decide whether a goal or taste bonus applies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringThresholds {
    /// Calories must be strictly below this for the weight-loss bonus
    pub weight_loss_max_calories: f64,
    /// Protein grams must be at least this for the muscle-gain bonus
    pub muscle_gain_min_protein_g: f64,
    /// Taste intensity must be at least this for the taste bonus
    pub taste_min_intensity: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            weight_loss_max_calories: scoring::WEIGHT_LOSS_MAX_CALORIES,
            muscle_gain_min_protein_g: scoring::MUSCLE_GAIN_MIN_PROTEIN_G,
            taste_min_intensity: scoring::TASTE_MIN_INTENSITY,
        }
    }
}

/// Nutrition thresholds for the diet filters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DietThresholds {
    /// Protein grams at or above which a recipe counts as high-protein
    pub high_protein_min_g: f64,
    /// Carbohydrate grams below which a recipe counts as low-carb
    pub low_carb_max_g: f64,
}

impl Default for DietThresholds {
    fn default() -> Self {
        Self {
            high_protein_min_g: diet::HIGH_PROTEIN_MIN_G,
            low_carb_max_g: diet::LOW_CARB_MAX_G,
        }
    }
}

/// Recipe scoring configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Bonus magnitudes
    pub bonuses: ScoringBonuses,
    /// Bonus thresholds
    pub thresholds: ScoringThresholds,
    /// Diet filter thresholds
    pub diet: DietThresholds,
}
