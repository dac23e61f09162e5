// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Scoring bonuses, diet thresholds, heatmap colour stops, and environment names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Constants module
//!
//! Application constants grouped by domain. The scoring and filter values are the
//! defaults of `ScoringConfig` in the intelligence crate; the heatmap stops are fixed.

/// Heatmap colour stops and glow parameters
pub mod heatmap;

/// Additive bonuses applied by the recipe scoring engine
pub mod scoring {
    /// Bonus when the recipe's state code equals the user's location
    pub const EXACT_REGION_BONUS: f64 = 20.0;
    /// Bonus when only the broad region matches
    pub const BROAD_REGION_BONUS: f64 = 10.0;
    /// Bonus for low-calorie recipes under the weight-loss goal
    pub const WEIGHT_LOSS_BONUS: f64 = 15.0;
    /// Bonus for protein-rich recipes under the muscle-gain goal
    pub const MUSCLE_GAIN_BONUS: f64 = 15.0;
    /// Bonus for diabetic-friendly recipes under the diabetic goal
    pub const DIABETIC_BONUS: f64 = 20.0;
    /// Bonus when the user's preferred taste is strong in the recipe
    pub const TASTE_BONUS: f64 = 10.0;

    /// Weight-loss applies below this calorie count (exclusive)
    pub const WEIGHT_LOSS_MAX_CALORIES: f64 = 300.0;
    /// Muscle-gain applies at or above this protein amount (grams)
    pub const MUSCLE_GAIN_MIN_PROTEIN_G: f64 = 20.0;
    /// Taste bonus applies at or above this flavour intensity
    pub const TASTE_MIN_INTENSITY: f64 = 6.0;
}

/// Health/diet filter thresholds
pub mod diet {
    /// `high-protein` keeps recipes at or above this protein amount (grams)
    pub const HIGH_PROTEIN_MIN_G: f64 = 15.0;
    /// `low-carb` keeps recipes strictly below this carbohydrate amount (grams)
    pub const LOW_CARB_MAX_G: f64 = 40.0;
}

/// Bounds enforced when recipe records are validated at ingestion
pub mod bounds {
    /// Maximum flavour intensity on the taste scale
    pub const MAX_FLAVOR_INTENSITY: f64 = 10.0;
    /// Maximum health score
    pub const MAX_HEALTH_SCORE: f64 = 100.0;
}

/// Default limits
pub mod limits {
    /// Number of ranked recipes the presentation layer shows
    pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 10;
    /// Number of similar recipes returned when no limit is given
    pub const DEFAULT_SIMILAR_LIMIT: usize = 5;
    /// Upper bound for any caller-supplied limit
    pub const MAX_RESULT_LIMIT: usize = 100;
}

/// Service names used for structured logging
pub mod service_names {
    /// HTTP API server
    pub const FLAVOURFIT_SERVER: &str = "flavourfit-server";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Environment variable names
pub mod env_config {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// HTTP listen host
    pub const HOST: &str = "HOST";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Path of the JSON recipe catalog
    pub const CATALOG_PATH: &str = "FLAVOURFIT_CATALOG_PATH";
    /// Base URL of an upstream recipe API (switches to the HTTP source)
    pub const UPSTREAM_URL: &str = "FLAVOURFIT_UPSTREAM_URL";
    /// Upstream request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: &str = "FLAVOURFIT_HTTP_TIMEOUT_SECS";
    /// Upstream connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: &str = "FLAVOURFIT_HTTP_CONNECT_TIMEOUT_SECS";
    /// Default number of recommendations returned
    pub const RECOMMENDATION_LIMIT: &str = "FLAVOURFIT_RECOMMENDATION_LIMIT";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Default values
pub mod defaults {
    /// Catalog shipped with the repository
    pub const CATALOG_PATH: &str = "data/regional_recipes.json";
    /// Listen host
    pub const HOST: &str = "127.0.0.1";
    /// Upstream request timeout in seconds
    pub const HTTP_TIMEOUT_SECS: u64 = 10;
    /// Upstream connect timeout in seconds
    pub const HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;
}
