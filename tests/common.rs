// ABOUTME: Shared test utilities for the FlavourFit integration tests
// ABOUTME: Quiet logging, recipe fixtures, and in-process server resources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit
#![allow(dead_code, missing_docs)]

use flavourfit_core::models::{
    BroadRegion, FlavorProfile, HealthGoal, Nutrition, Recipe, TastePreference,
    UserPreferenceProfile,
};
use flavourfit_intelligence::{RecipeScorer, ScoringConfig};
use flavourfit_providers::FileCatalogSource;
use flavourfit_server::config::ServerConfig;
use flavourfit_server::resources::ServerResources;
use std::path::PathBuf;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Catalog shipped with the repository
pub fn catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/regional_recipes.json")
}

/// Scorer with the built-in defaults, independent of the environment
pub fn default_scorer() -> RecipeScorer {
    RecipeScorer::with_config(ScoringConfig::default())
}

/// Resources over the repository catalog
pub fn catalog_resources() -> ServerResources {
    init_test_logging();
    ServerResources::new(
        Arc::new(FileCatalogSource::new(catalog_path())),
        default_scorer(),
        ServerConfig::default(),
    )
}

pub fn profile(location: &str, goal: HealthGoal, taste: TastePreference) -> UserPreferenceProfile {
    UserPreferenceProfile::new(location, goal, taste)
}

/// Builder for hand-made recipes
pub struct RecipeBuilder {
    recipe: Recipe,
}

impl RecipeBuilder {
    pub fn new(id: &str, state: &str, region: BroadRegion) -> Self {
        Self {
            recipe: Recipe {
                id: id.into(),
                name: format!("Recipe {id}"),
                state: state.into(),
                state_name: None,
                region,
                category: "Main Course".into(),
                nutrition: Nutrition {
                    calories: 400.0,
                    protein: 10.0,
                    carbs: 50.0,
                    fat: 10.0,
                    fiber: 4.0,
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
            },
        }
    }

    pub fn health_score(mut self, score: f64) -> Self {
        self.recipe.health_score = score;
        self
    }

    pub fn calories(mut self, calories: f64) -> Self {
        self.recipe.nutrition.calories = calories;
        self
    }

    pub fn protein(mut self, protein: f64) -> Self {
        self.recipe.nutrition.protein = protein;
        self
    }

    pub fn carbs(mut self, carbs: f64) -> Self {
        self.recipe.nutrition.carbs = carbs;
        self
    }

    pub fn diabetic_friendly(mut self, value: bool) -> Self {
        self.recipe.diabetic_friendly = value;
        self
    }

    pub fn flavor(mut self, spicy: f64, sweet: f64, tangy: f64, savory: f64) -> Self {
        self.recipe.flavor_profile = FlavorProfile::new(spicy, sweet, tangy, savory, 0.0);
        self
    }

    pub fn ingredients(mut self, lines: &[&str]) -> Self {
        self.recipe.ingredients = lines.iter().map(|line| (*line).to_owned()).collect();
        self
    }

    pub fn build(self) -> Recipe {
        self.recipe
    }
}
