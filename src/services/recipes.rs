// ABOUTME: Recipe business logic behind the catalog, recommendation, meal plan, and search endpoints
// ABOUTME: Loads recipes from the source per call and applies filters, ranking, and similarity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::constants::limits::{DEFAULT_SIMILAR_LIMIT, MAX_RESULT_LIMIT};
use crate::errors::{AppError, AppResult};
use crate::models::{Recipe, UserPreferenceProfile};
use crate::resources::ServerResources;
use flavourfit_intelligence::{
    grocery_list, parse_query, plan_week, recommend, search, similar_recipes, GroceryList,
    HealthFilter, MealPlanRequest, PersonalizationRequest, ScoredRecipe, SearchIntent,
    SimilarRecipe, WeeklyMealPlan,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

// ================================================================================================
// Request/Response Models
// ================================================================================================

/// Catalog listing, optionally diet-filtered
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeListResponse {
    /// Filter that was applied
    pub filter: HealthFilter,
    /// Number of recipes returned
    pub count: usize,
    /// Recipes in catalog order
    pub recipes: Vec<Recipe>,
}

/// Ranked recommendations for one profile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    /// Profile the ranking was computed for
    pub profile: UserPreferenceProfile,
    /// Diet filter applied before ranking
    pub health_filter: HealthFilter,
    /// Number of recommendations returned
    pub count: usize,
    /// Recipes, highest personalized score first
    pub recommendations: Vec<ScoredRecipe>,
}

/// Recipes tasting like a target recipe
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRecipesResponse {
    /// Target recipe id
    pub recipe_id: String,
    /// Most similar first
    pub similar: Vec<SimilarRecipe>,
}

/// Free-text search results
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Query as received
    pub query: String,
    /// How the query was interpreted
    pub intent: SearchIntent,
    /// Number of matches
    pub count: usize,
    /// Matches in catalog order
    pub results: Vec<Recipe>,
}

/// Grocery list request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GroceryListRequest {
    /// Recipes to shop for
    #[serde(default, alias = "recipeIds")]
    pub recipe_ids: Vec<String>,
}

/// Aggregated grocery list
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryListResponse {
    /// Ingredient line to occurrence count, ordered by ingredient
    pub items: GroceryList,
    /// Requested ids that matched a recipe
    pub recipe_ids: Vec<String>,
    /// Requested ids with no matching recipe
    pub unknown_ids: Vec<String>,
}

// ================================================================================================
// Service
// ================================================================================================

/// Recipe operations over the configured source
pub struct RecipeService {
    resources: Arc<ServerResources>,
}

impl RecipeService {
    /// Create a service over shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    async fn load(&self) -> AppResult<Vec<Recipe>> {
        let recipes = self.resources.source.get_all_recipes().await?;
        debug!(
            source.name = self.resources.source.name(),
            recipe.count = recipes.len(),
            "Loaded recipes"
        );
        Ok(recipes)
    }

    /// Whole catalog, filtered by `filter`
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read
    pub async fn list(&self, filter: HealthFilter) -> AppResult<RecipeListResponse> {
        let recipes = self.load().await?;
        let recipes = filter.apply(&recipes, &self.resources.scorer.config().diet);
        Ok(RecipeListResponse {
            filter,
            count: recipes.len(),
            recipes,
        })
    }

    /// Single recipe by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn get(&self, id: &str) -> AppResult<Recipe> {
        self.load()
            .await?
            .into_iter()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))
    }

    /// Personalized ranking for a request
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or a recipe fails validation
    pub async fn recommend(
        &self,
        request: &PersonalizationRequest,
    ) -> AppResult<RecommendationResponse> {
        let recipes = self.load().await?;
        let recommendations = recommend(
            &self.resources.scorer,
            &recipes,
            request,
            self.resources.config.recommendation_limit,
        )?;

        info!(
            profile.location = %request.profile.location,
            profile.goal = ?request.profile.health_goal,
            profile.taste = ?request.profile.taste_preference,
            returned = recommendations.len(),
            "Personalized recommendations computed"
        );

        Ok(RecommendationResponse {
            profile: request.profile.clone(),
            health_filter: request.health_filter,
            count: recommendations.len(),
            recommendations,
        })
    }

    /// Seven-day meal plan for a request
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read or a recipe fails validation
    pub async fn meal_plan(&self, request: &MealPlanRequest) -> AppResult<WeeklyMealPlan> {
        let recipes = self.load().await?;
        let plan = plan_week(
            &self.resources.scorer,
            &recipes,
            request,
            request.seed_or_random(),
        )?;

        info!(
            profile.location = %request.profile.location,
            seed = plan.seed,
            pool = plan.unique_recipes,
            "Meal plan generated"
        );
        Ok(plan)
    }

    /// Recipes most similar in taste to `id`
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id, `ValueOutOfRange` for a zero limit
    pub async fn similar(&self, id: &str, limit: Option<usize>) -> AppResult<SimilarRecipesResponse> {
        let limit = match limit {
            Some(0) => return Err(AppError::out_of_range("limit must be at least 1")),
            Some(n) => n.min(MAX_RESULT_LIMIT),
            None => DEFAULT_SIMILAR_LIMIT,
        };

        let recipes = self.load().await?;
        let target = recipes
            .iter()
            .find(|recipe| recipe.id == id)
            .ok_or_else(|| AppError::not_found(format!("Recipe {id}")))?;
        let similar = similar_recipes(target, &recipes, limit)?;

        Ok(SimilarRecipesResponse {
            recipe_id: id.to_owned(),
            similar,
        })
    }

    /// Free-text search; diet phrases select a filter
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be read
    pub async fn search(&self, query: &str) -> AppResult<SearchResponse> {
        let recipes = self.load().await?;
        let results = search(&recipes, query, &self.resources.scorer.config().diet);
        debug!(query, matches = results.len(), "Search complete");

        Ok(SearchResponse {
            query: query.to_owned(),
            intent: parse_query(query),
            count: results.len(),
            results,
        })
    }

    /// Aggregate the ingredients of the requested recipes
    ///
    /// Unknown ids are reported rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` when no ids are given
    pub async fn grocery_list(&self, request: &GroceryListRequest) -> AppResult<GroceryListResponse> {
        if request.recipe_ids.is_empty() {
            return Err(AppError::missing_field("recipe_ids"));
        }

        let recipes = self.load().await?;
        let mut selected = Vec::with_capacity(request.recipe_ids.len());
        let mut recipe_ids = Vec::new();
        let mut unknown_ids = Vec::new();
        for id in &request.recipe_ids {
            match recipes.iter().find(|recipe| &recipe.id == id) {
                Some(recipe) => {
                    selected.push(recipe);
                    recipe_ids.push(id.clone());
                }
                None => unknown_ids.push(id.clone()),
            }
        }

        Ok(GroceryListResponse {
            items: grocery_list(selected),
            recipe_ids,
            unknown_ids,
        })
    }
}
