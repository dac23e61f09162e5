// ABOUTME: In-memory store for community-submitted recipes with likes
// ABOUTME: Enriches submissions into validated recipes and serves sorted, diet-filtered listings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use flavourfit_intelligence::{enrich_submission, CommunitySubmission, DietType, EnrichedSubmission};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// Prefix that sets community recipe ids apart from catalog ids
pub const COMMUNITY_ID_PREFIX: &str = "cm-";

/// User credited with a like when the request names none
pub const ANONYMOUS_USER: &str = "anonymous";

/// A published community recipe
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityRecipe {
    /// Validated recipe and submission metadata
    #[serde(flatten)]
    pub enriched: EnrichedSubmission,
    /// Publication time
    pub created_at: DateTime<Utc>,
    /// Number of users who like the recipe
    pub likes: usize,
    #[serde(skip)]
    liked_by: BTreeSet<String>,
}

impl CommunityRecipe {
    /// Recipe id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.enriched.recipe.id
    }
}

/// Listing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunitySort {
    /// Most recently published first
    #[default]
    Newest,
    /// Most liked first
    Popular,
    /// Cheapest budget tier first
    Budget,
}

impl CommunitySort {
    /// Parse a sort name, mapping unrecognized names to [`CommunitySort::Newest`]
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "popular" => Self::Popular,
            "budget" => Self::Budget,
            _ => Self::Newest,
        }
    }
}

/// Response to a new submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublishResponse {
    /// Always `published`
    pub status: &'static str,
    /// Confirmation for the author
    pub message: String,
    /// The stored recipe
    pub recipe: CommunityRecipe,
}

/// Community listing
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityListResponse {
    /// Number of recipes returned
    pub count: usize,
    /// Order applied
    pub sort: CommunitySort,
    /// Diet filter applied, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<DietType>,
    /// Recipes in the requested order
    pub recipes: Vec<CommunityRecipe>,
}

/// Like toggle request body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeRequest {
    /// User toggling the like
    #[serde(default, alias = "user_id")]
    pub user_id: Option<String>,
}

/// Result of a like toggle
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    /// `liked` or `unliked`
    pub status: &'static str,
    /// Like count after the toggle
    pub likes: usize,
    /// Recipe id
    pub recipe_id: String,
}

/// Community recipes held in memory for the lifetime of the process
///
/// Recipes are kept in publication order.
#[derive(Debug, Default)]
pub struct CommunityStore {
    recipes: RwLock<Vec<CommunityRecipe>>,
}

impl CommunityStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enrich and store a submission
    ///
    /// # Errors
    ///
    /// Returns `MissingRequiredField` for a blank title or state,
    /// `ValueOutOfRange` for a bad spice level, and `InvalidRecipeData` if the
    /// enriched recipe fails validation
    pub async fn publish(&self, submission: &CommunitySubmission) -> AppResult<PublishResponse> {
        let id = new_recipe_id();
        let enriched = enrich_submission(&id, submission)?;
        let recipe = CommunityRecipe {
            enriched,
            created_at: Utc::now(),
            likes: 0,
            liked_by: BTreeSet::new(),
        };

        self.recipes.write().await.push(recipe.clone());
        info!(
            recipe.id = %id,
            recipe.state = %recipe.enriched.recipe.state,
            health_score = recipe.enriched.recipe.health_score,
            "Community recipe published"
        );

        Ok(PublishResponse {
            status: "published",
            message: format!("'{}' published", recipe.enriched.recipe.name),
            recipe,
        })
    }

    /// All recipes matching `diet`, in `sort` order
    ///
    /// Ties keep newest-first order.
    pub async fn list(&self, sort: CommunitySort, diet: Option<DietType>) -> CommunityListResponse {
        let mut recipes: Vec<CommunityRecipe> = self
            .recipes
            .read()
            .await
            .iter()
            .rev()
            .filter(|r| diet.is_none_or(|d| r.enriched.diet_type == d))
            .cloned()
            .collect();

        match sort {
            CommunitySort::Newest => {}
            CommunitySort::Popular => recipes.sort_by(|a, b| b.likes.cmp(&a.likes)),
            CommunitySort::Budget => recipes.sort_by_key(|r| r.enriched.budget_tier),
        }

        CommunityListResponse {
            count: recipes.len(),
            sort,
            diet,
            recipes,
        }
    }

    /// One recipe by id
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn get(&self, id: &str) -> AppResult<CommunityRecipe> {
        self.recipes
            .read()
            .await
            .iter()
            .find(|r| r.id() == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Community recipe {id}")))
    }

    /// Add or remove `user`'s like
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown id
    pub async fn toggle_like(&self, id: &str, request: &LikeRequest) -> AppResult<LikeResponse> {
        let user = request
            .user_id
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .unwrap_or(ANONYMOUS_USER);

        let mut recipes = self.recipes.write().await;
        let recipe = recipes
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| AppError::not_found(format!("Community recipe {id}")))?;

        let liked = if recipe.liked_by.remove(user) {
            false
        } else {
            recipe.liked_by.insert(user.to_owned());
            true
        };
        recipe.likes = recipe.liked_by.len();

        Ok(LikeResponse {
            status: if liked { "liked" } else { "unliked" },
            likes: recipe.likes,
            recipe_id: id.to_owned(),
        })
    }
}

/// Parse an optional diet query value
///
/// # Errors
///
/// Returns `InvalidInput` for an unknown diet name
pub fn parse_diet(value: Option<&str>) -> AppResult<Option<DietType>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(name) => DietType::parse(name)
            .map(Some)
            .ok_or_else(|| AppError::invalid_input(format!("Unknown diet: {name}"))),
    }
}

fn new_recipe_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("{COMMUNITY_ID_PREFIX}{}", &uuid[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_ids_are_prefixed_and_short() {
        let id = new_recipe_id();
        assert!(id.starts_with(COMMUNITY_ID_PREFIX));
        assert_eq!(id.len(), COMMUNITY_ID_PREFIX.len() + 8);
        assert_ne!(id, new_recipe_id());
    }

    #[test]
    fn test_sort_names() {
        assert_eq!(CommunitySort::from_str_lossy("Popular"), CommunitySort::Popular);
        assert_eq!(CommunitySort::from_str_lossy("budget"), CommunitySort::Budget);
        assert_eq!(CommunitySort::from_str_lossy("random"), CommunitySort::Newest);
    }

    #[test]
    fn test_parse_diet() {
        assert_eq!(parse_diet(None).unwrap(), None);
        assert_eq!(parse_diet(Some(" ")).unwrap(), None);
        assert_eq!(parse_diet(Some("vegan")).unwrap(), Some(DietType::Vegan));
        assert!(parse_diet(Some("carnivore")).is_err());
    }
}
