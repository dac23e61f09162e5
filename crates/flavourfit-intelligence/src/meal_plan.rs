// ABOUTME: Weekly meal planner built on the personalized recommendation pipeline
// ABOUTME: Seeded shuffle of a 21-recipe pool into breakfast, lunch, and dinner for seven days
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Weekly meal planning
//!
//! The pool is the top [`MEAL_PLAN_POOL_SIZE`] recommendations for the
//! request. It is shuffled with a seeded generator and dealt out day by day.
//! A pool smaller than the number of slots is cycled, so every slot is
//! filled as long as at least one recipe survives the filters.

use crate::health_filter::HealthFilter;
use crate::recommendations::{recommend, PersonalizationRequest};
use crate::scoring::{RecipeScorer, ScoredRecipe};
use flavourfit_core::errors::InvalidRecipeData;
use flavourfit_core::models::{Recipe, UserPreferenceProfile};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Days in a plan
pub const DAYS_PER_WEEK: usize = 7;

/// Meals per day
pub const MEALS_PER_DAY: usize = 3;

/// Recommendations drawn for one plan, one per slot
pub const MEAL_PLAN_POOL_SIZE: usize = DAYS_PER_WEEK * MEALS_PER_DAY;

/// Day of the week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    /// Monday
    Monday,
    /// Tuesday
    Tuesday,
    /// Wednesday
    Wednesday,
    /// Thursday
    Thursday,
    /// Friday
    Friday,
    /// Saturday
    Saturday,
    /// Sunday
    Sunday,
}

impl Weekday {
    /// Monday through Sunday
    pub const ALL: [Self; DAYS_PER_WEEK] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];
}

/// Meal slot within a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// Slots in serving order
    pub const ALL: [Self; MEALS_PER_DAY] = [Self::Breakfast, Self::Lunch, Self::Dinner];
}

/// Meal plan request
///
/// Same profile, filter, and exclusions as a recommendation request. The
/// seed makes the shuffle reproducible; without one a random seed is drawn
/// and echoed back in the plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlanRequest {
    /// User preferences
    #[serde(default)]
    pub profile: UserPreferenceProfile,
    /// Optional diet filter applied before ranking
    #[serde(default)]
    pub health_filter: HealthFilter,
    /// Ingredient fragments to avoid
    #[serde(default)]
    pub exclude_ingredients: Vec<String>,
    /// Shuffle seed
    #[serde(default)]
    pub seed: Option<u64>,
}

impl MealPlanRequest {
    /// The requested seed, or a fresh random one
    #[must_use]
    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }

    fn pool_request(&self) -> PersonalizationRequest {
        PersonalizationRequest {
            profile: self.profile.clone(),
            health_filter: self.health_filter,
            exclude_ingredients: self.exclude_ingredients.clone(),
            limit: Some(MEAL_PLAN_POOL_SIZE),
        }
    }
}

/// One filled slot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedMeal {
    /// Which meal of the day
    pub meal: MealSlot,
    /// The recipe served, with its personalized score
    pub recipe: ScoredRecipe,
}

/// Meals for one day, in slot order
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    /// Day of the week
    pub day: Weekday,
    /// Breakfast, lunch, dinner; empty when nothing matched the request
    pub meals: Vec<PlannedMeal>,
}

/// A seven-day plan
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMealPlan {
    /// Seed that reproduces this plan
    pub seed: u64,
    /// Distinct recipes in the pool
    pub unique_recipes: usize,
    /// Monday through Sunday
    pub days: Vec<DayPlan>,
}

/// Plan a week of meals from `catalog`
///
/// The same catalog, request, and seed always produce the same plan.
///
/// # Errors
///
/// Returns [`InvalidRecipeData`] if a candidate recipe fails validation
pub fn plan_week(
    scorer: &RecipeScorer,
    catalog: &[Recipe],
    request: &MealPlanRequest,
    seed: u64,
) -> Result<WeeklyMealPlan, InvalidRecipeData> {
    let mut pool = recommend(scorer, catalog, &request.pool_request(), MEAL_PLAN_POOL_SIZE)?;
    pool.shuffle(&mut StdRng::seed_from_u64(seed));

    let days = Weekday::ALL
        .iter()
        .enumerate()
        .map(|(day_index, &day)| DayPlan {
            day,
            meals: MealSlot::ALL
                .iter()
                .enumerate()
                .filter_map(|(slot_index, &meal)| {
                    let slot = day_index * MEALS_PER_DAY + slot_index;
                    let recipe = pool.get(slot.checked_rem(pool.len())?)?;
                    Some(PlannedMeal {
                        meal,
                        recipe: recipe.clone(),
                    })
                })
                .collect(),
        })
        .collect();

    debug!(
        seed,
        pool = pool.len(),
        location = %request.profile.location,
        "Planned week of meals"
    );

    Ok(WeeklyMealPlan {
        seed,
        unique_recipes: pool.len(),
        days,
    })
}
