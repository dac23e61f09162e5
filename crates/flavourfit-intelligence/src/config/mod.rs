// ABOUTME: Configuration module for flavourfit-intelligence crate
// ABOUTME: Process-wide scoring configuration with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Intelligence configuration
//!
//! [`ScoringConfig::global`] loads defaults once, applies `FLAVOURFIT_SCORING_*`
//! environment overrides, and validates the result. Invalid overrides are
//! logged and the defaults are used instead.

/// Configuration error types
pub mod error;
/// Scoring bonuses and thresholds
pub mod scoring;

pub use error::ConfigError;
pub use scoring::{DietThresholds, ScoringBonuses, ScoringConfig, ScoringThresholds};

use flavourfit_core::constants::bounds::MAX_FLAVOR_INTENSITY;
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static SCORING_CONFIG: OnceLock<ScoringConfig> = OnceLock::new();

impl ScoringConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        SCORING_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load scoring config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error when a bonus or threshold is negative or not finite,
    /// when the broad-region bonus exceeds the exact-region bonus, or when the
    /// taste threshold lies outside the 0-10 taste scale
    pub fn validate(&self) -> Result<(), ConfigError> {
        let b = &self.bonuses;
        let bonuses = [
            b.exact_region,
            b.broad_region,
            b.weight_loss,
            b.muscle_gain,
            b.diabetic,
            b.taste,
        ];
        if bonuses.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "scoring bonuses must be finite and non-negative",
            ));
        }

        if b.broad_region > b.exact_region {
            return Err(ConfigError::InvalidRange(
                "broad_region bonus must be <= exact_region bonus",
            ));
        }

        let t = &self.thresholds;
        if !non_negative(t.weight_loss_max_calories) || !non_negative(t.muscle_gain_min_protein_g)
        {
            return Err(ConfigError::ValueOutOfRange(
                "nutrition thresholds must be finite and non-negative",
            ));
        }

        if !non_negative(t.taste_min_intensity) || t.taste_min_intensity > MAX_FLAVOR_INTENSITY {
            return Err(ConfigError::ValueOutOfRange(
                "taste_min_intensity must be within the 0-10 taste scale",
            ));
        }

        if !non_negative(self.diet.high_protein_min_g) || !non_negative(self.diet.low_carb_max_g) {
            return Err(ConfigError::ValueOutOfRange(
                "diet thresholds must be finite and non-negative",
            ));
        }

        Ok(())
    }

    /// Parse an environment variable into `target` when it is set
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "FLAVOURFIT_SCORING_EXACT_REGION_BONUS",
            &mut self.bonuses.exact_region,
        )?;
        Self::apply_env_var(
            "FLAVOURFIT_SCORING_BROAD_REGION_BONUS",
            &mut self.bonuses.broad_region,
        )?;
        Self::apply_env_var(
            "FLAVOURFIT_SCORING_WEIGHT_LOSS_BONUS",
            &mut self.bonuses.weight_loss,
        )?;
        Self::apply_env_var(
            "FLAVOURFIT_SCORING_MUSCLE_GAIN_BONUS",
            &mut self.bonuses.muscle_gain,
        )?;
        Self::apply_env_var(
            "FLAVOURFIT_SCORING_DIABETIC_BONUS",
            &mut self.bonuses.diabetic,
        )?;
        Self::apply_env_var("FLAVOURFIT_SCORING_TASTE_BONUS", &mut self.bonuses.taste)?;

        Self::apply_env_var(
            "FLAVOURFIT_SCORING_WEIGHT_LOSS_MAX_CALORIES",
            &mut self.thresholds.weight_loss_max_calories,
        )?;
        Self::apply_env_var(
            "FLAVOURFIT_SCORING_MUSCLE_GAIN_MIN_PROTEIN",
            &mut self.thresholds.muscle_gain_min_protein_g,
        )?;
        Self::apply_env_var(
            "FLAVOURFIT_SCORING_TASTE_MIN_INTENSITY",
            &mut self.thresholds.taste_min_intensity,
        )?;

        Self::apply_env_var(
            "FLAVOURFIT_DIET_HIGH_PROTEIN_MIN",
            &mut self.diet.high_protein_min_g,
        )?;
        Self::apply_env_var("FLAVOURFIT_DIET_LOW_CARB_MAX", &mut self.diet.low_carb_max_g)?;

        Ok(self)
    }
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_are_valid() {
        let config = ScoringConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.bonuses.exact_region - 20.0).abs() < f64::EPSILON);
        assert!((config.bonuses.broad_region - 10.0).abs() < f64::EPSILON);
        assert!((config.diet.low_carb_max_g - 40.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_broad_bonus_above_exact_is_rejected() {
        let mut config = ScoringConfig::default();
        config.bonuses.broad_region = 25.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    fn test_negative_bonus_is_rejected() {
        let mut config = ScoringConfig::default();
        config.bonuses.taste = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));

        let mut config = ScoringConfig::default();
        config.thresholds.taste_min_intensity = 11.0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_override_applies() {
        env::set_var("FLAVOURFIT_SCORING_DIABETIC_BONUS", "30");
        let config = ScoringConfig::load();
        env::remove_var("FLAVOURFIT_SCORING_DIABETIC_BONUS");

        let config = config.unwrap();
        assert!((config.bonuses.diabetic - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    #[serial]
    fn test_unparseable_env_override_is_an_error() {
        env::set_var("FLAVOURFIT_DIET_LOW_CARB_MAX", "forty");
        let result = ScoringConfig::load();
        env::remove_var("FLAVOURFIT_DIET_LOW_CARB_MAX");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
