// ABOUTME: Recipe, nutrition, and flavour profile models with ingestion-time validation
// ABOUTME: RecipeRecord is the loose wire form; Recipe is the fixed-shape validated record
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use super::region::{broad_region_for, BroadRegion, StateCode};
use crate::constants::bounds::{MAX_FLAVOR_INTENSITY, MAX_HEALTH_SCORE};
use crate::errors::{DataIssue, InvalidRecipeData};
use serde::{Deserialize, Serialize};

/// Fixed taste dimensions, in the order used to build flavour vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlavorDimension {
    /// Chilli heat
    Spicy,
    /// Sweetness
    Sweet,
    /// Sourness
    Tangy,
    /// Umami / savouriness
    Savory,
    /// Bitterness
    Bitter,
}

impl FlavorDimension {
    /// All dimensions in vector order
    pub const ALL: [Self; 5] = [
        Self::Spicy,
        Self::Sweet,
        Self::Tangy,
        Self::Savory,
        Self::Bitter,
    ];

    /// Dotted field path used in validation errors
    #[must_use]
    pub const fn field_path(self) -> &'static str {
        match self {
            Self::Spicy => "flavorProfile.spicy",
            Self::Sweet => "flavorProfile.sweet",
            Self::Tangy => "flavorProfile.tangy",
            Self::Savory => "flavorProfile.savory",
            Self::Bitter => "flavorProfile.bitter",
        }
    }
}

/// Intensity of each taste dimension on the 0-10 scale
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FlavorProfile {
    /// Chilli heat
    pub spicy: f64,
    /// Sweetness
    pub sweet: f64,
    /// Sourness
    pub tangy: f64,
    /// Umami / savouriness
    pub savory: f64,
    /// Bitterness
    pub bitter: f64,
}

impl FlavorProfile {
    /// Create a profile from all five intensities
    #[must_use]
    pub const fn new(spicy: f64, sweet: f64, tangy: f64, savory: f64, bitter: f64) -> Self {
        Self {
            spicy,
            sweet,
            tangy,
            savory,
            bitter,
        }
    }

    /// Intensity of one dimension
    #[must_use]
    pub const fn get(&self, dimension: FlavorDimension) -> f64 {
        match dimension {
            FlavorDimension::Spicy => self.spicy,
            FlavorDimension::Sweet => self.sweet,
            FlavorDimension::Tangy => self.tangy,
            FlavorDimension::Savory => self.savory,
            FlavorDimension::Bitter => self.bitter,
        }
    }

    /// Intensities in [`FlavorDimension::ALL`] order
    #[must_use]
    pub const fn as_vector(&self) -> [f64; 5] {
        [self.spicy, self.sweet, self.tangy, self.savory, self.bitter]
    }

    /// Check every dimension is a finite, non-negative value on the taste scale
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecipeData`] naming the first offending dimension
    pub fn validate(&self, recipe_id: &str) -> Result<(), InvalidRecipeData> {
        for dimension in FlavorDimension::ALL {
            check_bounded(
                recipe_id,
                dimension.field_path(),
                self.get(dimension),
                MAX_FLAVOR_INTENSITY,
            )?;
        }
        Ok(())
    }
}

/// Per-serving nutrition facts
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    /// Energy in kcal
    pub calories: f64,
    /// Protein in grams
    pub protein: f64,
    /// Carbohydrates in grams
    pub carbs: f64,
    /// Fat in grams
    pub fat: f64,
    /// Fiber in grams
    pub fiber: f64,
}

impl Nutrition {
    /// Check every field is finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecipeData`] naming the first offending field
    pub fn validate(&self, recipe_id: &str) -> Result<(), InvalidRecipeData> {
        check_non_negative(recipe_id, "nutrition.calories", self.calories)?;
        check_non_negative(recipe_id, "nutrition.protein", self.protein)?;
        check_non_negative(recipe_id, "nutrition.carbs", self.carbs)?;
        check_non_negative(recipe_id, "nutrition.fat", self.fat)?;
        check_non_negative(recipe_id, "nutrition.fiber", self.fiber)
    }
}

/// A validated, immutable recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// State the dish comes from
    pub state: StateCode,
    /// State display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_name: Option<String>,
    /// Broad region of the state
    pub region: BroadRegion,
    /// Course category (Main Course, Snack, ...)
    pub category: String,
    /// Nutrition facts
    pub nutrition: Nutrition,
    /// Taste intensities
    pub flavor_profile: FlavorProfile,
    /// Suitable for a diabetic diet
    pub diabetic_friendly: bool,
    /// Editorial health score, 0-100
    pub health_score: f64,
    /// Preparation time as displayed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<String>,
    /// Servings per batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// Approximate price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display badges
    #[serde(default)]
    pub badges: Vec<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Cooking instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl Recipe {
    /// Re-check the numeric invariants scoring relies on
    ///
    /// Recipes built through [`Recipe::try_from`] always pass; this guards
    /// hand-built values before they reach an algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecipeData`] naming the first offending field
    pub fn validate(&self) -> Result<(), InvalidRecipeData> {
        check_bounded(&self.id, "healthScore", self.health_score, MAX_HEALTH_SCORE)?;
        self.nutrition.validate(&self.id)?;
        self.flavor_profile.validate(&self.id)
    }
}

/// Nutrition block as it appears on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Energy in kcal
    pub calories: Option<f64>,
    /// Protein in grams
    pub protein: Option<f64>,
    /// Carbohydrates in grams
    pub carbs: Option<f64>,
    /// Fat in grams
    pub fat: Option<f64>,
    /// Fiber in grams
    pub fiber: Option<f64>,
}

/// Flavour block as it appears on the wire
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlavorRecord {
    /// Chilli heat
    pub spicy: Option<f64>,
    /// Sweetness
    pub sweet: Option<f64>,
    /// Sourness
    pub tangy: Option<f64>,
    /// Umami / savouriness
    pub savory: Option<f64>,
    /// Bitterness (absent in most catalogs; read as 0)
    pub bitter: Option<f64>,
}

/// Recipe as decoded from a catalog file or upstream API, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Stable identifier
    pub id: Option<String>,
    /// Display name
    pub name: Option<String>,
    /// State code
    pub state: Option<String>,
    /// State display name
    pub state_name: Option<String>,
    /// Broad region name; derived from `state` when absent or unknown
    pub region: Option<String>,
    /// Course category
    pub category: Option<String>,
    /// Nutrition facts
    pub nutrition: Option<NutritionRecord>,
    /// Taste intensities
    pub flavor_profile: Option<FlavorRecord>,
    /// Suitable for a diabetic diet
    pub diabetic_friendly: Option<bool>,
    /// Editorial health score
    pub health_score: Option<f64>,
    /// Preparation time
    pub prep_time: Option<String>,
    /// Servings per batch
    pub servings: Option<u32>,
    /// Approximate price
    pub price: Option<f64>,
    /// Image URL
    pub image: Option<String>,
    /// Display badges
    #[serde(default)]
    pub badges: Vec<String>,
    /// Free-form tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Ingredient lines
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Cooking instructions
    pub instructions: Option<String>,
}

impl TryFrom<RecipeRecord> for Recipe {
    type Error = InvalidRecipeData;

    fn try_from(record: RecipeRecord) -> Result<Self, Self::Error> {
        let id = match record.id {
            Some(id) if !id.trim().is_empty() => id,
            _ => return Err(InvalidRecipeData::new("<unknown>", "id", DataIssue::Missing)),
        };

        let name = required(&id, "name", record.name)?;
        let state = StateCode::new(&required(&id, "state", record.state)?);
        if state.is_empty() {
            return Err(InvalidRecipeData::new(id, "state", DataIssue::Missing));
        }
        let region = record
            .region
            .as_deref()
            .and_then(BroadRegion::parse)
            .unwrap_or_else(|| broad_region_for(&state));

        let nutrition_record = required(&id, "nutrition", record.nutrition)?;
        let nutrition = Nutrition {
            calories: required(&id, "nutrition.calories", nutrition_record.calories)?,
            protein: required(&id, "nutrition.protein", nutrition_record.protein)?,
            carbs: required(&id, "nutrition.carbs", nutrition_record.carbs)?,
            fat: required(&id, "nutrition.fat", nutrition_record.fat)?,
            fiber: required(&id, "nutrition.fiber", nutrition_record.fiber)?,
        };

        let flavor_record = required(&id, "flavorProfile", record.flavor_profile)?;
        let flavor_profile = FlavorProfile {
            spicy: required(&id, "flavorProfile.spicy", flavor_record.spicy)?,
            sweet: required(&id, "flavorProfile.sweet", flavor_record.sweet)?,
            tangy: required(&id, "flavorProfile.tangy", flavor_record.tangy)?,
            savory: required(&id, "flavorProfile.savory", flavor_record.savory)?,
            bitter: flavor_record.bitter.unwrap_or(0.0),
        };

        let recipe = Self {
            name,
            state,
            state_name: record.state_name,
            region,
            category: record.category.unwrap_or_default(),
            nutrition,
            flavor_profile,
            diabetic_friendly: record.diabetic_friendly.unwrap_or(false),
            health_score: required(&id, "healthScore", record.health_score)?,
            prep_time: record.prep_time,
            servings: record.servings,
            price: record.price,
            image: record.image,
            badges: record.badges,
            tags: record.tags,
            ingredients: record.ingredients,
            instructions: record.instructions,
            id,
        };
        recipe.validate()?;
        Ok(recipe)
    }
}

fn required<T>(recipe_id: &str, field: &'static str, value: Option<T>) -> Result<T, InvalidRecipeData> {
    value.ok_or_else(|| InvalidRecipeData::new(recipe_id, field, DataIssue::Missing))
}

fn check_non_negative(
    recipe_id: &str,
    field: &'static str,
    value: f64,
) -> Result<(), InvalidRecipeData> {
    if !value.is_finite() {
        return Err(InvalidRecipeData::new(recipe_id, field, DataIssue::NotFinite(value)));
    }
    if value < 0.0 {
        return Err(InvalidRecipeData::new(recipe_id, field, DataIssue::Negative(value)));
    }
    Ok(())
}

fn check_bounded(
    recipe_id: &str,
    field: &'static str,
    value: f64,
    max: f64,
) -> Result<(), InvalidRecipeData> {
    check_non_negative(recipe_id, field, value)?;
    if value > max {
        return Err(InvalidRecipeData::new(
            recipe_id,
            field,
            DataIssue::AboveMaximum { value, max },
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> RecipeRecord {
        serde_json::from_value(serde_json::json!({
            "id": "mh-1",
            "name": "Pav Bhaji",
            "state": "MH",
            "stateName": "Maharashtra",
            "region": "West",
            "category": "Main Course",
            "nutrition": { "calories": 420, "protein": 12, "carbs": 58, "fat": 16, "fiber": 8 },
            "healthScore": 75,
            "diabeticFriendly": false,
            "flavorProfile": { "spicy": 8, "sweet": 3, "tangy": 6, "savory": 9 },
            "ingredients": ["4 potatoes", "2 tomatoes"]
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_record_converts() {
        let recipe = Recipe::try_from(record()).unwrap();

        assert_eq!(recipe.id, "mh-1");
        assert_eq!(recipe.state.as_str(), "MH");
        assert_eq!(recipe.region, BroadRegion::West);
        assert!((recipe.nutrition.calories - 420.0).abs() < f64::EPSILON);
        assert!(recipe.flavor_profile.bitter.abs() < f64::EPSILON);
        assert_eq!(recipe.flavor_profile.as_vector(), [8.0, 3.0, 6.0, 9.0, 0.0]);
    }

    #[test]
    fn test_missing_flavor_dimension_is_rejected() {
        let mut rec = record();
        rec.flavor_profile.as_mut().unwrap().tangy = None;

        let err = Recipe::try_from(rec).unwrap_err();
        assert_eq!(err.recipe_id, "mh-1");
        assert_eq!(err.field, "flavorProfile.tangy");
        assert_eq!(err.issue, DataIssue::Missing);
    }

    #[test]
    fn test_missing_nutrition_field_is_rejected() {
        let mut rec = record();
        rec.nutrition.as_mut().unwrap().protein = None;

        let err = Recipe::try_from(rec).unwrap_err();
        assert_eq!(err.field, "nutrition.protein");
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let mut rec = record();
        rec.id = Some("  ".into());

        let err = Recipe::try_from(rec).unwrap_err();
        assert_eq!(err.recipe_id, "<unknown>");
        assert_eq!(err.field, "id");
    }

    #[test]
    fn test_non_numeric_nutrition_fails_decoding() {
        let value = serde_json::json!({
            "id": "x", "nutrition": { "calories": "lots" }
        });
        assert!(serde_json::from_value::<RecipeRecord>(value).is_err());
    }

    #[test]
    fn test_out_of_scale_values_are_rejected() {
        let mut rec = record();
        rec.flavor_profile.as_mut().unwrap().spicy = Some(11.0);
        let err = Recipe::try_from(rec).unwrap_err();
        assert_eq!(
            err.issue,
            DataIssue::AboveMaximum {
                value: 11.0,
                max: 10.0
            }
        );

        let mut rec = record();
        rec.nutrition.as_mut().unwrap().carbs = Some(-1.0);
        let err = Recipe::try_from(rec).unwrap_err();
        assert_eq!(err.issue, DataIssue::Negative(-1.0));
    }

    #[test]
    fn test_unknown_region_falls_back_to_lookup() {
        let mut rec = record();
        rec.state = Some("ka".into());
        rec.region = Some("Deccan".into());

        let recipe = Recipe::try_from(rec).unwrap();
        assert_eq!(recipe.state.as_str(), "KA");
        assert_eq!(recipe.region, BroadRegion::South);
    }

    #[test]
    fn test_hand_built_nan_fails_validation() {
        let mut recipe = Recipe::try_from(record()).unwrap();
        recipe.flavor_profile.sweet = f64::NAN;

        let err = recipe.validate().unwrap_err();
        assert_eq!(err.field, "flavorProfile.sweet");
        assert!(matches!(err.issue, DataIssue::NotFinite(_)));
    }
}
