// ABOUTME: Integration tests for flavour profile cosine similarity
// ABOUTME: Covers the numeric properties, the zero-vector rule, and similar-recipe lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit
#![allow(missing_docs)]

mod common;

use common::RecipeBuilder;
use flavourfit_core::errors::DataIssue;
use flavourfit_core::models::BroadRegion;
use flavourfit_intelligence::{cosine_similarity, similar_recipes, taste_similarity};
use flavourfit_providers::{FileCatalogSource, RecipeSource};

#[test]
fn test_identical_and_scaled_profiles_are_fully_similar() {
    let a = [8.0, 3.0, 6.0, 9.0, 0.0];
    let doubled = a.map(|x| x * 2.0);

    assert!((cosine_similarity(&a, &a).unwrap() - 1.0).abs() < 1e-12);
    assert!((cosine_similarity(&a, &doubled).unwrap() - 1.0).abs() < 1e-12);
}

#[test]
fn test_known_angle() {
    let a = [1.0, 0.0, 0.0, 0.0, 0.0];
    let b = [1.0, 1.0, 0.0, 0.0, 0.0];
    let similarity = cosine_similarity(&a, &b).unwrap();
    assert!((similarity - std::f64::consts::FRAC_1_SQRT_2).abs() < 1e-12);
}

#[test]
fn test_symmetric() {
    let a = [7.0, 4.0, 7.0, 8.0, 0.0];
    let b = [1.0, 9.0, 0.0, 3.0, 2.0];
    let ab = cosine_similarity(&a, &b).unwrap();
    let ba = cosine_similarity(&b, &a).unwrap();
    assert!((ab - ba).abs() < 1e-15);
}

#[test]
fn test_zero_vector_compares_as_zero() {
    let zero = [0.0; 5];
    let a = [5.0, 1.0, 6.0, 7.0, 0.0];

    assert!(cosine_similarity(&zero, &a).unwrap().abs() < f64::EPSILON);
    assert!(cosine_similarity(&a, &zero).unwrap().abs() < f64::EPSILON);
    assert!(cosine_similarity(&zero, &zero).unwrap().abs() < f64::EPSILON);
}

#[test]
fn test_extreme_magnitudes_do_not_overflow_or_underflow() {
    let huge = [1e200; 5];
    let tiny = [1e-200; 5];
    let mixed = [1e200, 0.0, 1e200, 0.0, 0.0];

    assert!((cosine_similarity(&huge, &huge).unwrap() - 1.0).abs() < 1e-12);
    assert!((cosine_similarity(&tiny, &tiny).unwrap() - 1.0).abs() < 1e-12);
    let similarity = cosine_similarity(&huge, &mixed).unwrap();
    assert!((similarity - (2.0 / 10.0_f64.sqrt())).abs() < 1e-12);
}

#[test]
fn test_nan_vector_is_rejected() {
    let a = [f64::NAN; 5];
    let b = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert!(matches!(
        cosine_similarity(&a, &b),
        Err(DataIssue::NotFinite(v)) if v.is_nan()
    ));
    assert!(cosine_similarity(&b, &a).is_err());
}

#[test]
fn test_non_finite_intensity_is_rejected() {
    let good = RecipeBuilder::new("good", "KA", BroadRegion::South).build();
    let bad = RecipeBuilder::new("bad", "KA", BroadRegion::South)
        .flavor(f64::INFINITY, 1.0, 1.0, 1.0)
        .build();

    let err = taste_similarity(&good, &bad).unwrap_err();
    assert_eq!(err.recipe_id, "bad");
    assert_eq!(err.field, "flavorProfile.spicy");
    assert!(matches!(err.issue, DataIssue::NotFinite(_)));
}

#[test]
fn test_out_of_scale_intensity_is_rejected() {
    let good = RecipeBuilder::new("good", "KA", BroadRegion::South).build();
    let bad = RecipeBuilder::new("bad", "KA", BroadRegion::South)
        .flavor(1.0, 11.0, 1.0, 1.0)
        .build();

    let err = taste_similarity(&bad, &good).unwrap_err();
    assert_eq!(err.field, "flavorProfile.sweet");
    assert!(matches!(err.issue, DataIssue::AboveMaximum { .. }));
}

#[tokio::test]
async fn test_similar_recipes_on_catalog() {
    let recipes = FileCatalogSource::new(common::catalog_path())
        .get_all_recipes()
        .await
        .unwrap();
    let target = recipes.iter().find(|r| r.id == "ka-3").unwrap();

    let similar = similar_recipes(target, &recipes, 3).unwrap();
    assert_eq!(similar.len(), 3);
    assert!(similar.iter().all(|s| s.recipe.id != "ka-3"));
    assert!(similar
        .windows(2)
        .all(|pair| pair[0].similarity >= pair[1].similarity));
    assert!(similar.iter().all(|s| (0.0..=1.0).contains(&s.similarity)));
    // Sweet-dominant profiles come first
    let ids: Vec<_> = similar.iter().map(|s| s.recipe.id.as_str()).collect();
    assert_eq!(ids, ["tn-3", "mh-3", "rj-1"]);
}

#[test]
fn test_similar_recipes_limit_larger_than_catalog() {
    let target = RecipeBuilder::new("t", "KA", BroadRegion::South).build();
    let others = vec![
        target.clone(),
        RecipeBuilder::new("a", "KA", BroadRegion::South).build(),
        RecipeBuilder::new("b", "KA", BroadRegion::South).build(),
    ];

    let similar = similar_recipes(&target, &others, 10).unwrap();
    let ids: Vec<_> = similar.iter().map(|s| s.recipe.id.as_str()).collect();
    // Equal similarity keeps catalog order
    assert_eq!(ids, ["a", "b"]);
}
