// ABOUTME: Validated in-memory recipe catalog and its JSON document format
// ABOUTME: Converts decoded records at the ingestion boundary and answers lookups by id and state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::errors::InvalidRecipeData;
use crate::models::{Recipe, RecipeRecord, RegionCounts, StateCode};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Catalog JSON: `{"recipes": [...]}` or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CatalogDocument {
    /// Object wrapping the recipe list
    Wrapped {
        /// Recipe records
        recipes: Vec<RecipeRecord>,
    },
    /// Bare recipe list
    Bare(Vec<RecipeRecord>),
}

impl CatalogDocument {
    /// The records, whichever shape was decoded
    #[must_use]
    pub fn into_records(self) -> Vec<RecipeRecord> {
        match self {
            Self::Wrapped { recipes } | Self::Bare(recipes) => recipes,
        }
    }
}

/// Validated recipes in source order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Wrap already validated recipes
    #[must_use]
    pub const fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Validate decoded records
    ///
    /// # Errors
    ///
    /// Returns [`InvalidRecipeData`] for the first record that fails validation
    pub fn from_records(records: Vec<RecipeRecord>) -> Result<Self, InvalidRecipeData> {
        records
            .into_iter()
            .map(Recipe::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }

    /// All recipes
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Take ownership of the recipes
    #[must_use]
    pub fn into_recipes(self) -> Vec<Recipe> {
        self.recipes
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Recipe with the given id
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    /// Recipes from one state, in catalog order
    #[must_use]
    pub fn for_state(&self, state: &StateCode) -> Vec<Recipe> {
        self.recipes
            .iter()
            .filter(|r| &r.state == state)
            .cloned()
            .collect()
    }

    /// Recipes per state
    #[must_use]
    pub fn region_counts(&self) -> RegionCounts {
        self.recipes.iter().map(|r| (r.state.clone(), 1)).collect()
    }

    /// State display names, first one seen per state
    #[must_use]
    pub fn state_names(&self) -> BTreeMap<StateCode, String> {
        let mut names = BTreeMap::new();
        for recipe in &self.recipes {
            if let Some(name) = &recipe.state_name {
                names
                    .entry(recipe.state.clone())
                    .or_insert_with(|| name.clone());
            }
        }
        names
    }
}
