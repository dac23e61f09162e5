// ABOUTME: User preference profile passed explicitly into every personalization call
// ABOUTME: Health goals and taste preferences parse leniently; unknown values grant no bonus
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use super::region::StateCode;
use serde::{Deserialize, Serialize};

/// Dietary goal the user is working towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum HealthGoal {
    /// No specific goal
    #[default]
    Balanced,
    /// Prefer low-calorie dishes
    WeightLoss,
    /// Prefer protein-rich dishes
    MuscleGain,
    /// Prefer diabetic-friendly dishes
    Diabetic,
    /// Value not recognized; no goal bonus applies
    Other,
}

impl HealthGoal {
    /// Parse a goal from string, mapping unknown values to [`HealthGoal::Other`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "balanced" => Self::Balanced,
            "weight-loss" => Self::WeightLoss,
            "muscle-gain" => Self::MuscleGain,
            "diabetic" => Self::Diabetic,
            _ => Self::Other,
        }
    }
}

impl From<String> for HealthGoal {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

/// Taste the user gravitates towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TastePreference {
    /// Spicy food
    #[default]
    Spicy,
    /// Sweet food
    Sweet,
    /// Tangy food
    Tangy,
    /// Savoury food
    Savory,
    /// Value not recognized; no taste bonus applies
    Other,
}

impl TastePreference {
    /// Parse a preference from string, mapping unknown values to [`TastePreference::Other`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "spicy" => Self::Spicy,
            "sweet" => Self::Sweet,
            "tangy" => Self::Tangy,
            "savory" | "savoury" => Self::Savory,
            _ => Self::Other,
        }
    }
}

impl From<String> for TastePreference {
    fn from(s: String) -> Self {
        Self::from_str_lossy(&s)
    }
}

/// Preferences supplied with each personalization request; never persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferenceProfile {
    /// User's state code
    pub location: StateCode,
    /// Dietary goal
    #[serde(default)]
    pub health_goal: HealthGoal,
    /// Preferred taste
    #[serde(default)]
    pub taste_preference: TastePreference,
}

impl UserPreferenceProfile {
    /// Create a profile
    #[must_use]
    pub fn new(
        location: impl Into<StateCode>,
        health_goal: HealthGoal,
        taste_preference: TastePreference,
    ) -> Self {
        Self {
            location: location.into(),
            health_goal,
            taste_preference,
        }
    }
}

impl Default for UserPreferenceProfile {
    fn default() -> Self {
        Self::new("DL", HealthGoal::Balanced, TastePreference::Spicy)
    }
}
