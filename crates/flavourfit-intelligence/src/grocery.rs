// ABOUTME: Aggregates the ingredient lines of several recipes into a shopping list
// ABOUTME: Lines are normalized (trimmed, lower-cased) and counted by occurrence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use flavourfit_core::models::Recipe;
use std::collections::BTreeMap;

/// Ingredient line to number of selected recipes using it, ordered by line
pub type GroceryList = BTreeMap<String, u32>;

/// Count every normalized ingredient line across `recipes`
///
/// Blank lines are skipped.
pub fn grocery_list<'a>(recipes: impl IntoIterator<Item = &'a Recipe>) -> GroceryList {
    let mut list = GroceryList::new();
    for line in recipes.into_iter().flat_map(|r| r.ingredients.iter()) {
        let item = line.trim().to_lowercase();
        if item.is_empty() {
            continue;
        }
        *list.entry(item).or_insert(0) += 1;
    }
    list
}
