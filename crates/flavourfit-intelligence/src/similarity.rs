// ABOUTME: Cosine similarity between recipe flavour profiles
// ABOUTME: Fixed five-dimension vectors; zero-magnitude profiles compare as 0.0
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Flavour similarity
//!
//! Flavour profiles are compared as vectors in the fixed dimension order
//! spicy, sweet, tangy, savory, bitter.

use flavourfit_core::errors::{DataIssue, InvalidRecipeData};
use flavourfit_core::models::Recipe;
use serde::Serialize;

/// Number of flavour dimensions in a profile vector
pub const FLAVOR_DIMENSIONS: usize = 5;

/// Similarity reported when either vector has zero magnitude
pub const ZERO_MAGNITUDE_SIMILARITY: f64 = 0.0;

/// Cosine of the angle between two flavour vectors
///
/// Each vector is divided by its largest absolute component before the dot
/// product, so magnitudes near the limits of `f64` neither overflow nor
/// underflow. For validated recipes the result lies in `[0, 1]`. If either
/// vector has zero magnitude the angle is undefined and
/// [`ZERO_MAGNITUDE_SIMILARITY`] is returned.
///
/// # Errors
///
/// Returns [`DataIssue::NotFinite`] with the first NaN or infinite component
pub fn cosine_similarity(
    a: &[f64; FLAVOR_DIMENSIONS],
    b: &[f64; FLAVOR_DIMENSIONS],
) -> Result<f64, DataIssue> {
    if let Some(&value) = a.iter().chain(b).find(|x| !x.is_finite()) {
        return Err(DataIssue::NotFinite(value));
    }

    let (Some(a), Some(b)) = (unit_scaled(a), unit_scaled(b)) else {
        return Ok(ZERO_MAGNITUDE_SIMILARITY);
    };

    let dot: f64 = a.iter().zip(&b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    Ok((dot / (norm_a * norm_b)).clamp(-1.0, 1.0))
}

/// Vector divided by its largest absolute component, `None` for the zero vector
fn unit_scaled(v: &[f64; FLAVOR_DIMENSIONS]) -> Option<[f64; FLAVOR_DIMENSIONS]> {
    let max = v.iter().fold(0.0_f64, |acc, x| acc.max(x.abs()));
    (max > 0.0).then(|| v.map(|x| x / max))
}

/// Flavour similarity of two recipes
///
/// # Errors
///
/// Returns [`InvalidRecipeData`] if either flavour profile holds a
/// non-finite or out-of-scale intensity
pub fn taste_similarity(a: &Recipe, b: &Recipe) -> Result<f64, InvalidRecipeData> {
    a.flavor_profile.validate(&a.id)?;
    b.flavor_profile.validate(&b.id)?;
    cosine_similarity(&a.flavor_profile.as_vector(), &b.flavor_profile.as_vector())
        .map_err(|issue| InvalidRecipeData::new(a.id.clone(), "flavorProfile", issue))
}

/// A catalog recipe and its flavour similarity to a target
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarRecipe {
    /// The similar recipe
    #[serde(flatten)]
    pub recipe: Recipe,
    /// Cosine similarity to the target
    pub similarity: f64,
}

/// The `limit` recipes tasting most like `target`, most similar first
///
/// The target itself (matched by id) is excluded. Ties keep catalog order.
///
/// # Errors
///
/// Returns [`InvalidRecipeData`] for the first recipe with an invalid flavour profile
pub fn similar_recipes(
    target: &Recipe,
    catalog: &[Recipe],
    limit: usize,
) -> Result<Vec<SimilarRecipe>, InvalidRecipeData> {
    let mut similar = catalog
        .iter()
        .filter(|candidate| candidate.id != target.id)
        .map(|candidate| {
            Ok(SimilarRecipe {
                similarity: taste_similarity(target, candidate)?,
                recipe: candidate.clone(),
            })
        })
        .collect::<Result<Vec<_>, InvalidRecipeData>>()?;

    similar.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    similar.truncate(limit);
    Ok(similar)
}
