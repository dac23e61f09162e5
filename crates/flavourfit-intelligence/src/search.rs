// ABOUTME: Free-text recipe search with spoken-query diet intents
// ABOUTME: Diet phrases route to a health filter; anything else is a title and tag match
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::config::DietThresholds;
use crate::health_filter::HealthFilter;
use flavourfit_core::models::Recipe;
use serde::Serialize;

/// What a free-text query asks for
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum SearchIntent {
    /// A diet phrase was recognized
    Diet(HealthFilter),
    /// Lower-cased, trimmed text to match against titles and tags
    Text(String),
}

/// Phrases that select a diet filter, checked in order
const DIET_PHRASES: &[(&str, HealthFilter)] = &[
    ("high protein", HealthFilter::HighProtein),
    ("diabetic", HealthFilter::Diabetic),
    ("diabetes", HealthFilter::Diabetic),
    ("low carb", HealthFilter::LowCarb),
];

/// Classify a query
#[must_use]
pub fn parse_query(query: &str) -> SearchIntent {
    let lowered = query.trim().to_lowercase();
    DIET_PHRASES
        .iter()
        .find(|(phrase, _)| lowered.contains(phrase))
        .map_or(SearchIntent::Text(lowered), |(_, filter)| {
            SearchIntent::Diet(*filter)
        })
}

/// Whether a recipe's name, category, state name, or tags contain `needle`
///
/// `needle` must already be lower-cased.
#[must_use]
pub fn matches_text(recipe: &Recipe, needle: &str) -> bool {
    let contains = |haystack: &str| haystack.to_lowercase().contains(needle);
    contains(&recipe.name)
        || contains(&recipe.category)
        || recipe.state_name.as_deref().is_some_and(contains)
        || recipe.tags.iter().any(|tag| contains(tag))
}

/// Recipes answering `query`, in catalog order
///
/// A blank query returns the whole catalog.
#[must_use]
pub fn search(recipes: &[Recipe], query: &str, thresholds: &DietThresholds) -> Vec<Recipe> {
    match parse_query(query) {
        SearchIntent::Diet(filter) => filter.apply(recipes, thresholds),
        SearchIntent::Text(needle) if needle.is_empty() => recipes.to_vec(),
        SearchIntent::Text(needle) => recipes
            .iter()
            .filter(|recipe| matches_text(recipe, &needle))
            .cloned()
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_phrases() {
        assert_eq!(
            parse_query("Show me HIGH PROTEIN dinners"),
            SearchIntent::Diet(HealthFilter::HighProtein)
        );
        assert_eq!(
            parse_query("safe for diabetes?"),
            SearchIntent::Diet(HealthFilter::Diabetic)
        );
        assert_eq!(
            parse_query("low carb please"),
            SearchIntent::Diet(HealthFilter::LowCarb)
        );
    }

    #[test]
    fn test_plain_text_query() {
        assert_eq!(
            parse_query("  Pav Bhaji "),
            SearchIntent::Text("pav bhaji".into())
        );
    }
}
