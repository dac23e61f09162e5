// ABOUTME: Enrichment of user-submitted community recipes into validated catalog recipes
// ABOUTME: Estimates nutrition, flavour, health score, cost, and warnings from the ingredient list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Community recipe enrichment
//!
//! A submission carries a title, a state, and named ingredients but no
//! numbers. Nutrition comes from a per-ingredient lookup table, flavour from
//! ingredient keywords plus the author's declared spice level, and the health
//! score from the resulting nutrition. The enriched values are assembled into
//! a [`RecipeRecord`] and converted with [`Recipe::try_from`], so a community
//! recipe passes exactly the checks a catalog recipe does.

use flavourfit_core::constants::bounds::{MAX_FLAVOR_INTENSITY, MAX_HEALTH_SCORE};
use flavourfit_core::constants::diet::LOW_CARB_MAX_G;
use flavourfit_core::errors::{AppError, InvalidRecipeData};
use flavourfit_core::models::{FlavorRecord, Nutrition, NutritionRecord, Recipe, RecipeRecord};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Servings a submitted ingredient list is assumed to make
pub const ASSUMED_SERVINGS: u32 = 2;

/// Lowest accepted spice level
pub const MIN_SPICE_LEVEL: u8 = 1;
/// Highest accepted spice level
pub const MAX_SPICE_LEVEL: u8 = 5;
/// Spice level used when the author gives none
pub const DEFAULT_SPICE_LEVEL: u8 = 3;

/// Category given to submissions that name none
pub const COMMUNITY_CATEGORY: &str = "Community";
/// Badge on every community recipe
pub const COMMUNITY_BADGE: &str = "Community";
/// Health tag that marks a recipe diabetic-friendly
pub const DIABETIC_FRIENDLY_TAG: &str = "diabetic-friendly";

/// Nutrition per roughly 100 g of a known ingredient
///
/// Matching is by substring in either direction; the first entry that
/// matches wins.
pub const INGREDIENT_NUTRITION: &[(&str, Nutrition)] = &[
    ("rice", nutrition(130.0, 2.7, 28.0, 0.3, 0.4)),
    ("wheat", nutrition(340.0, 13.0, 72.0, 2.5, 12.0)),
    ("dal", nutrition(116.0, 9.0, 20.0, 0.4, 8.0)),
    ("potato", nutrition(77.0, 2.0, 17.0, 0.1, 2.2)),
    ("chicken", nutrition(239.0, 27.0, 0.0, 14.0, 0.0)),
    ("paneer", nutrition(265.0, 18.0, 1.2, 21.0, 0.0)),
    ("tomato", nutrition(18.0, 0.9, 3.9, 0.2, 1.2)),
    ("onion", nutrition(40.0, 1.1, 9.0, 0.1, 1.7)),
    ("oil", nutrition(884.0, 0.0, 0.0, 100.0, 0.0)),
    ("milk", nutrition(42.0, 3.4, 5.0, 1.0, 0.0)),
    ("sugar", nutrition(387.0, 0.0, 100.0, 0.0, 0.0)),
    ("butter", nutrition(717.0, 0.9, 0.1, 81.0, 0.0)),
    ("cream", nutrition(340.0, 2.0, 3.0, 36.0, 0.0)),
    ("cheese", nutrition(402.0, 25.0, 1.3, 33.0, 0.0)),
    ("egg", nutrition(155.0, 13.0, 1.1, 11.0, 0.0)),
    ("fish", nutrition(206.0, 22.0, 0.0, 12.0, 0.0)),
    ("coconut", nutrition(354.0, 3.3, 15.0, 33.0, 9.0)),
    ("lemon", nutrition(29.0, 1.1, 9.0, 0.3, 2.8)),
    ("spinach", nutrition(23.0, 2.9, 3.6, 0.4, 2.2)),
    ("carrot", nutrition(41.0, 0.9, 10.0, 0.2, 2.8)),
];

/// Nutrition assumed for an ingredient missing from [`INGREDIENT_NUTRITION`]
pub const DEFAULT_NUTRITION: Nutrition = nutrition(80.0, 2.0, 12.0, 1.5, 1.0);

const fn nutrition(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Nutrition {
    Nutrition {
        calories,
        protein,
        carbs,
        fat,
        fiber,
    }
}

/// Sweet, tangy, savory, bitter contribution of ingredient keywords (0-10)
///
/// Spiciness is not taken from ingredients; it follows the declared spice level.
const INGREDIENT_FLAVORS: &[(&str, [f64; 4])] = &[
    ("sugar", [10.0, 0.0, 0.0, 0.0]),
    ("jaggery", [9.0, 0.0, 0.0, 1.0]),
    ("honey", [9.0, 0.0, 0.0, 0.0]),
    ("milk", [4.0, 0.0, 2.0, 0.0]),
    ("cream", [3.0, 0.0, 3.0, 0.0]),
    ("coconut", [5.0, 0.0, 3.0, 0.0]),
    ("carrot", [5.0, 0.0, 2.0, 0.0]),
    ("lemon", [0.0, 9.0, 0.0, 1.0]),
    ("tamarind", [2.0, 9.0, 1.0, 0.0]),
    ("tomato", [2.0, 6.0, 4.0, 0.0]),
    ("yogurt", [1.0, 6.0, 2.0, 0.0]),
    ("curd", [1.0, 6.0, 2.0, 0.0]),
    ("onion", [3.0, 1.0, 5.0, 0.0]),
    ("garlic", [0.0, 0.0, 7.0, 1.0]),
    ("masala", [0.0, 1.0, 7.0, 1.0]),
    ("paneer", [1.0, 0.0, 6.0, 0.0]),
    ("cheese", [0.0, 1.0, 8.0, 0.0]),
    ("chicken", [0.0, 0.0, 8.0, 0.0]),
    ("fish", [0.0, 0.0, 8.0, 0.0]),
    ("egg", [0.0, 0.0, 6.0, 0.0]),
    ("dal", [0.0, 0.0, 6.0, 0.0]),
    ("potato", [1.0, 0.0, 5.0, 0.0]),
    ("rice", [1.0, 0.0, 3.0, 0.0]),
    ("wheat", [1.0, 0.0, 3.0, 1.0]),
    ("spinach", [0.0, 0.0, 3.0, 5.0]),
    ("methi", [0.0, 0.0, 2.0, 7.0]),
    ("fenugreek", [0.0, 0.0, 2.0, 7.0]),
    ("karela", [0.0, 0.0, 1.0, 9.0]),
    ("bitter gourd", [0.0, 0.0, 1.0, 9.0]),
];

/// Flavour of an ingredient no keyword matches
const NEUTRAL_FLAVOR: [f64; 4] = [1.0, 1.0, 2.0, 0.0];

/// Health score before adjustments
pub const HEALTH_SCORE_BASE: f64 = 70.0;
/// Points per gram of fiber, up to [`MAX_FIBER_BONUS`]
pub const FIBER_POINTS_PER_G: f64 = 2.0;
/// Cap on the fiber bonus
pub const MAX_FIBER_BONUS: f64 = 15.0;
/// Protein at or above which [`PROTEIN_BONUS`] applies (grams)
pub const PROTEIN_BONUS_MIN_G: f64 = 15.0;
/// Bonus for protein-rich recipes
pub const PROTEIN_BONUS: f64 = 10.0;
/// Calories above which the calorie penalty and warning apply
pub const HIGH_CALORIES: f64 = 600.0;
/// Fat above which the fat penalty and warning apply (grams)
pub const HIGH_FAT_G: f64 = 30.0;
/// Carbohydrates above which the carb penalty and warning apply (grams)
pub const HIGH_CARBS_G: f64 = 80.0;
/// Penalty for a high-calorie recipe
pub const CALORIE_PENALTY: f64 = 15.0;
/// Penalty for a high-fat recipe
pub const FAT_PENALTY: f64 = 15.0;
/// Penalty for a high-carb recipe
pub const CARB_PENALTY: f64 = 10.0;
/// Spice level at or above which a warning is attached
pub const VERY_SPICY_LEVEL: u8 = 4;

/// How much a recipe costs to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum BudgetTier {
    /// Everyday ingredients
    #[serde(rename = "₹", alias = "low")]
    Low,
    /// Moderate
    #[default]
    #[serde(rename = "₹₹", alias = "medium")]
    Medium,
    /// Premium ingredients
    #[serde(rename = "₹₹₹", alias = "high")]
    High,
}

impl BudgetTier {
    /// Estimated rupees per ingredient
    #[must_use]
    pub const fn cost_per_ingredient(self) -> f64 {
        match self {
            Self::Low => 8.0,
            Self::Medium => 15.0,
            Self::High => 25.0,
        }
    }
}

/// Diet a community recipe declares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    /// Vegetarian
    #[default]
    Veg,
    /// No animal products
    Vegan,
    /// Vegetarian without root vegetables
    Jain,
    /// Includes meat, fish, or egg
    #[serde(alias = "non_veg", alias = "nonveg")]
    NonVeg,
}

impl DietType {
    /// Parse a diet name as used on the wire, accepting `_` for `-`
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "veg" => Some(Self::Veg),
            "vegan" => Some(Self::Vegan),
            "jain" => Some(Self::Jain),
            "non-veg" | "nonveg" => Some(Self::NonVeg),
            _ => None,
        }
    }
}

/// One named ingredient with a free-form quantity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientEntry {
    /// Ingredient name, e.g. `paneer`
    pub name: String,
    /// Amount as written, e.g. `200g`
    #[serde(default)]
    pub quantity: String,
}

impl IngredientEntry {
    /// Ingredient line as shown in recipes and grocery lists
    #[must_use]
    pub fn line(&self) -> String {
        format!("{} {}", self.quantity.trim(), self.name.trim())
            .trim()
            .to_owned()
    }
}

/// A recipe as posted by a community member
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunitySubmission {
    /// Posting user
    #[serde(default, alias = "author_id")]
    pub author_id: Option<String>,
    /// Display name of the posting user
    #[serde(default, alias = "author_name")]
    pub author_name: Option<String>,
    /// Recipe title
    #[serde(default)]
    pub title: String,
    /// State code the dish comes from
    #[serde(default)]
    pub state: String,
    /// State display name
    #[serde(default, alias = "state_name")]
    pub state_name: Option<String>,
    /// Cuisine label, free-form
    #[serde(default)]
    pub cuisine: String,
    /// Course, e.g. `Main Course`
    #[serde(default)]
    pub category: Option<String>,
    /// Declared diet
    #[serde(default, alias = "diet_type")]
    pub diet_type: DietType,
    /// Heat from 1 to 5
    #[serde(default, alias = "spice_level")]
    pub spice_level: Option<u8>,
    /// Ingredients with quantities
    #[serde(default)]
    pub ingredients: Vec<IngredientEntry>,
    /// Method, one step per entry
    #[serde(default)]
    pub steps: Vec<String>,
    /// Author-supplied tags such as `high-protein`
    #[serde(default, alias = "health_tags")]
    pub health_tags: Vec<String>,
    /// Cost tier
    #[serde(default, alias = "budget_tier")]
    pub budget_tier: BudgetTier,
    /// Preparation time, e.g. `30 mins`
    #[serde(default, alias = "prep_time")]
    pub prep_time: Option<String>,
    /// Photo URL
    #[serde(default, alias = "image_url")]
    pub image_url: Option<String>,
}

/// A submission could not be turned into a recipe
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    /// A required field is absent or blank
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Spice level outside the accepted scale
    #[error("Spice level {0} is outside 1-5")]
    SpiceLevelOutOfRange(u8),

    /// The enriched recipe failed validation
    #[error(transparent)]
    InvalidRecipe(#[from] InvalidRecipeData),
}

impl From<SubmissionError> for AppError {
    fn from(error: SubmissionError) -> Self {
        match error {
            SubmissionError::MissingField(field) => Self::missing_field(field),
            SubmissionError::SpiceLevelOutOfRange(_) => Self::out_of_range(error.to_string()),
            SubmissionError::InvalidRecipe(invalid) => Self::from(invalid),
        }
    }
}

/// A submission turned into a validated recipe plus community metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSubmission {
    /// The recipe with estimated nutrition, flavour, and health score
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Posting user
    pub author_id: String,
    /// Display name of the posting user
    pub author_name: String,
    /// Cuisine label
    pub cuisine: String,
    /// Declared diet
    pub diet_type: DietType,
    /// Heat from 1 to 5
    pub spice_level: u8,
    /// Cost tier
    pub budget_tier: BudgetTier,
    /// Method steps
    pub steps: Vec<String>,
    /// Estimated cost in rupees per serving
    pub estimated_cost: f64,
    /// Nutrition warnings for the reader
    pub health_warnings: Vec<String>,
}

/// Turn a submission into a validated recipe with the given id
///
/// # Errors
///
/// Returns [`SubmissionError::MissingField`] for a blank title or state,
/// [`SubmissionError::SpiceLevelOutOfRange`] for a spice level outside 1-5,
/// and [`SubmissionError::InvalidRecipe`] if the assembled recipe fails
/// catalog validation
pub fn enrich_submission(
    id: &str,
    submission: &CommunitySubmission,
) -> Result<EnrichedSubmission, SubmissionError> {
    let title = submission.title.trim();
    if title.is_empty() {
        return Err(SubmissionError::MissingField("title"));
    }
    if submission.state.trim().is_empty() {
        return Err(SubmissionError::MissingField("state"));
    }
    let spice_level = submission.spice_level.unwrap_or(DEFAULT_SPICE_LEVEL);
    if !(MIN_SPICE_LEVEL..=MAX_SPICE_LEVEL).contains(&spice_level) {
        return Err(SubmissionError::SpiceLevelOutOfRange(spice_level));
    }

    let names: Vec<String> = submission
        .ingredients
        .iter()
        .map(|entry| entry.name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect();

    let per_serving = estimate_nutrition(&names);
    let flavor = estimate_flavor(&names, spice_level);
    let health_score = estimate_health_score(&per_serving);
    let diabetic_friendly = submission
        .health_tags
        .iter()
        .any(|tag| tag.trim().eq_ignore_ascii_case(DIABETIC_FRIENDLY_TAG))
        || per_serving.carbs < LOW_CARB_MAX_G;
    let estimated_cost = round_to(
        submission.budget_tier.cost_per_ingredient() * names.len() as f64
            / f64::from(ASSUMED_SERVINGS),
        2,
    );

    let record = RecipeRecord {
        id: Some(id.to_owned()),
        name: Some(title.to_owned()),
        state: Some(submission.state.clone()),
        state_name: submission.state_name.clone(),
        region: None,
        category: Some(
            submission
                .category
                .clone()
                .filter(|c| !c.trim().is_empty())
                .unwrap_or_else(|| COMMUNITY_CATEGORY.to_owned()),
        ),
        nutrition: Some(NutritionRecord {
            calories: Some(per_serving.calories),
            protein: Some(per_serving.protein),
            carbs: Some(per_serving.carbs),
            fat: Some(per_serving.fat),
            fiber: Some(per_serving.fiber),
        }),
        flavor_profile: Some(flavor),
        diabetic_friendly: Some(diabetic_friendly),
        health_score: Some(health_score),
        prep_time: submission.prep_time.clone(),
        servings: Some(ASSUMED_SERVINGS),
        price: Some(estimated_cost),
        image: submission.image_url.clone(),
        badges: vec![COMMUNITY_BADGE.to_owned()],
        tags: submission.health_tags.clone(),
        ingredients: submission
            .ingredients
            .iter()
            .filter(|entry| !entry.name.trim().is_empty())
            .map(IngredientEntry::line)
            .collect(),
        instructions: (!submission.steps.is_empty()).then(|| submission.steps.join("\n")),
    };
    let recipe = Recipe::try_from(record)?;

    Ok(EnrichedSubmission {
        health_warnings: health_warnings(&recipe.nutrition, spice_level),
        recipe,
        author_id: non_blank_or(submission.author_id.as_deref(), "anonymous"),
        author_name: non_blank_or(submission.author_name.as_deref(), "Anonymous Chef"),
        cuisine: submission.cuisine.trim().to_owned(),
        diet_type: submission.diet_type,
        spice_level,
        budget_tier: submission.budget_tier,
        steps: submission.steps.clone(),
        estimated_cost,
    })
}

/// Table entry for an ingredient name, or [`DEFAULT_NUTRITION`]
#[must_use]
pub fn ingredient_nutrition(name: &str) -> Nutrition {
    let key = name.trim().to_lowercase();
    if key.is_empty() {
        return DEFAULT_NUTRITION;
    }
    INGREDIENT_NUTRITION
        .iter()
        .find(|(known, _)| key.contains(known) || known.contains(key.as_str()))
        .map_or(DEFAULT_NUTRITION, |(_, values)| *values)
}

/// Per-serving nutrition of a list of lower-cased ingredient names
fn estimate_nutrition(names: &[String]) -> Nutrition {
    let total = names
        .iter()
        .map(|name| ingredient_nutrition(name))
        .fold(Nutrition::default(), |acc, n| Nutrition {
            calories: acc.calories + n.calories,
            protein: acc.protein + n.protein,
            carbs: acc.carbs + n.carbs,
            fat: acc.fat + n.fat,
            fiber: acc.fiber + n.fiber,
        });
    let servings = f64::from(ASSUMED_SERVINGS);
    Nutrition {
        calories: round_to(total.calories / servings, 1),
        protein: round_to(total.protein / servings, 1),
        carbs: round_to(total.carbs / servings, 1),
        fat: round_to(total.fat / servings, 1),
        fiber: round_to(total.fiber / servings, 1),
    }
}

/// Mean keyword flavour of the ingredients, with spiciness from the spice level
fn estimate_flavor(names: &[String], spice_level: u8) -> FlavorRecord {
    let mut sums = [0.0_f64; 4];
    for name in names {
        let contribution = INGREDIENT_FLAVORS
            .iter()
            .find(|(keyword, _)| name.contains(keyword))
            .map_or(NEUTRAL_FLAVOR, |(_, values)| *values);
        for (sum, value) in sums.iter_mut().zip(contribution) {
            *sum += value;
        }
    }
    let count = names.len().max(1) as f64;
    let [sweet, tangy, savory, bitter] = sums.map(|sum| round_to(sum / count, 1));
    let spicy = MAX_FLAVOR_INTENSITY * f64::from(spice_level) / f64::from(MAX_SPICE_LEVEL);

    FlavorRecord {
        spicy: Some(spicy),
        sweet: Some(sweet),
        tangy: Some(tangy),
        savory: Some(savory),
        bitter: Some(bitter),
    }
}

/// Health score from per-serving nutrition, in `[0, 100]`
#[must_use]
pub fn estimate_health_score(nutrition: &Nutrition) -> f64 {
    let mut score = HEALTH_SCORE_BASE + (nutrition.fiber * FIBER_POINTS_PER_G).min(MAX_FIBER_BONUS);
    if nutrition.protein >= PROTEIN_BONUS_MIN_G {
        score += PROTEIN_BONUS;
    }
    if nutrition.calories > HIGH_CALORIES {
        score -= CALORIE_PENALTY;
    }
    if nutrition.fat > HIGH_FAT_G {
        score -= FAT_PENALTY;
    }
    if nutrition.carbs > HIGH_CARBS_G {
        score -= CARB_PENALTY;
    }
    score.clamp(0.0, MAX_HEALTH_SCORE).round()
}

/// Reader-facing warnings for rich or very spicy dishes
#[must_use]
pub fn health_warnings(nutrition: &Nutrition, spice_level: u8) -> Vec<String> {
    let checks = [
        (
            nutrition.calories > HIGH_CALORIES,
            "High calorie dish; consider reducing oil or butter",
        ),
        (
            nutrition.fat > HIGH_FAT_G,
            "High fat content; may not suit heart-healthy diets",
        ),
        (
            nutrition.carbs > HIGH_CARBS_G,
            "High carb; not ideal for low-carb or diabetic diets",
        ),
        (
            spice_level >= VERY_SPICY_LEVEL,
            "Very spicy; may cause discomfort for sensitive stomachs",
        ),
    ];
    checks
        .into_iter()
        .filter(|(applies, _)| *applies)
        .map(|(_, warning)| warning.to_owned())
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

fn non_blank_or(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_lookup_matches_substrings_in_table_order() {
        assert!((ingredient_nutrition("Basmati Rice").calories - 130.0).abs() < f64::EPSILON);
        // "dal" appears in neither direction for "toor", so the default applies
        assert_eq!(ingredient_nutrition("toor"), DEFAULT_NUTRITION);
        // "oil" is matched before "coconut"
        assert!((ingredient_nutrition("coconut oil").fat - 100.0).abs() < f64::EPSILON);
        assert_eq!(ingredient_nutrition("   "), DEFAULT_NUTRITION);
    }

    #[test]
    fn test_health_score_adjustments() {
        let lean = nutrition(300.0, 20.0, 30.0, 5.0, 4.0);
        // 70 + 8 fiber + 10 protein
        assert!((estimate_health_score(&lean) - 88.0).abs() < f64::EPSILON);

        let rich = nutrition(900.0, 5.0, 120.0, 60.0, 0.0);
        // 70 - 15 - 15 - 10
        assert!((estimate_health_score(&rich) - 30.0).abs() < f64::EPSILON);

        let fibrous = nutrition(100.0, 0.0, 10.0, 0.0, 50.0);
        assert!((estimate_health_score(&fibrous) - 85.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_warnings() {
        let rich = nutrition(700.0, 5.0, 90.0, 40.0, 0.0);
        assert_eq!(health_warnings(&rich, 4).len(), 4);
        assert!(health_warnings(&DEFAULT_NUTRITION, 3).is_empty());
    }

    #[test]
    fn test_budget_tier_wire_names() {
        let tier: BudgetTier = serde_json::from_str("\"₹₹₹\"").unwrap();
        assert_eq!(tier, BudgetTier::High);
        let tier: BudgetTier = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(tier, BudgetTier::Low);
        assert_eq!(serde_json::to_string(&BudgetTier::Medium).unwrap(), "\"₹₹\"");
    }

    #[test]
    fn test_diet_type_parse() {
        assert_eq!(DietType::parse(" Non_Veg "), Some(DietType::NonVeg));
        assert_eq!(DietType::parse("vegan"), Some(DietType::Vegan));
        assert_eq!(DietType::parse("pescatarian"), None);
    }

    #[test]
    fn test_ingredient_line() {
        let entry = IngredientEntry {
            name: " paneer ".into(),
            quantity: "200g".into(),
        };
        assert_eq!(entry.line(), "200g paneer");
        let bare = IngredientEntry {
            name: "salt".into(),
            quantity: String::new(),
        };
        assert_eq!(bare.line(), "salt");
    }
}
