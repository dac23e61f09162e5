// ABOUTME: Invalid recipe data error raised when a record fails fixed-shape validation
// ABOUTME: Names the recipe, the offending field, and what was wrong with its value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use std::fmt;
use thiserror::Error;

/// What was wrong with a recipe field
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataIssue {
    /// Field absent from the record
    Missing,
    /// Value is NaN or infinite
    NotFinite(f64),
    /// Value below zero where only non-negative values are meaningful
    Negative(f64),
    /// Value above the upper bound of its scale
    AboveMaximum {
        /// Offending value
        value: f64,
        /// Largest accepted value
        max: f64,
    },
}

impl fmt::Display for DataIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => write!(f, "field is missing"),
            Self::NotFinite(value) => write!(f, "value {value} is not a finite number"),
            Self::Negative(value) => write!(f, "value {value} is negative"),
            Self::AboveMaximum { value, max } => write!(f, "value {value} exceeds maximum {max}"),
        }
    }
}

/// A recipe failed fixed-shape validation.
///
/// Raised at the ingestion boundary when a record is converted into a `Recipe`,
/// and again by scoring and similarity if a hand-built recipe carries a value
/// that would otherwise turn a score into `NaN`.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid recipe data for '{recipe_id}': {field}: {issue}")]
pub struct InvalidRecipeData {
    /// Identifier of the offending recipe (`<unknown>` when the id itself is missing)
    pub recipe_id: String,
    /// Dotted path of the offending field, e.g. `flavorProfile.spicy`
    pub field: &'static str,
    /// What was wrong
    pub issue: DataIssue,
}

impl InvalidRecipeData {
    /// Create a new invalid-data error
    #[must_use]
    pub fn new(recipe_id: impl Into<String>, field: &'static str, issue: DataIssue) -> Self {
        Self {
            recipe_id: recipe_id.into(),
            field,
            issue,
        }
    }
}
