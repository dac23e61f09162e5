// ABOUTME: Integration tests for personalized recipe scoring and ranking
// ABOUTME: Covers the bonus rules, their thresholds, and stable descending order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit
#![allow(missing_docs)]

mod common;

use common::{default_scorer, profile, RecipeBuilder};
use flavourfit_core::errors::DataIssue;
use flavourfit_core::models::{BroadRegion, HealthGoal, TastePreference};
use flavourfit_providers::{FileCatalogSource, RecipeSource};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_exact_state_weight_loss_spicy_profile() {
    let scorer = default_scorer();
    let user = profile("MH", HealthGoal::WeightLoss, TastePreference::Spicy);
    let vada_pav = RecipeBuilder::new("mh-x", "MH", BroadRegion::West)
        .health_score(75.0)
        .calories(280.0)
        .flavor(8.0, 2.0, 4.0, 7.0)
        .build();

    // 75 + 20 (state) + 15 (weight loss) + 10 (spicy)
    assert_close(scorer.score(&vada_pav, &user).unwrap(), 120.0);
}

#[test]
fn test_broad_region_only() {
    let scorer = default_scorer();
    let user = profile("MH", HealthGoal::WeightLoss, TastePreference::Spicy);
    let dhokla = RecipeBuilder::new("gj-x", "GJ", BroadRegion::West)
        .health_score(60.0)
        .calories(450.0)
        .flavor(3.0, 3.0, 7.0, 6.0)
        .build();

    assert_close(scorer.score(&dhokla, &user).unwrap(), 70.0);
}

#[test]
fn test_exact_match_replaces_broad_bonus() {
    let scorer = default_scorer();
    let user = profile("KA", HealthGoal::Balanced, TastePreference::Tangy);
    let recipe = RecipeBuilder::new("ka-x", "KA", BroadRegion::South)
        .health_score(50.0)
        .build();

    let breakdown = scorer.breakdown(&recipe, &user).unwrap();
    assert_close(breakdown.region, 20.0);
    assert_close(breakdown.total(), 70.0);
}

#[test]
fn test_no_region_bonus_elsewhere() {
    let scorer = default_scorer();
    let user = profile("KA", HealthGoal::Balanced, TastePreference::Tangy);
    let recipe = RecipeBuilder::new("dl-x", "DL", BroadRegion::North)
        .health_score(50.0)
        .build();

    assert_close(scorer.score(&recipe, &user).unwrap(), 50.0);
}

#[test]
fn test_weight_loss_threshold_is_exclusive() {
    let scorer = default_scorer();
    let user = profile("DL", HealthGoal::WeightLoss, TastePreference::Tangy);
    let at_limit = RecipeBuilder::new("a", "KL", BroadRegion::South)
        .calories(300.0)
        .build();
    let below = RecipeBuilder::new("b", "KL", BroadRegion::South)
        .calories(299.0)
        .build();

    assert_close(scorer.breakdown(&at_limit, &user).unwrap().health_goal, 0.0);
    assert_close(scorer.breakdown(&below, &user).unwrap().health_goal, 15.0);
}

#[test]
fn test_muscle_gain_threshold_is_inclusive() {
    let scorer = default_scorer();
    let user = profile("DL", HealthGoal::MuscleGain, TastePreference::Tangy);
    let at_limit = RecipeBuilder::new("a", "KL", BroadRegion::South)
        .protein(20.0)
        .build();
    let below = RecipeBuilder::new("b", "KL", BroadRegion::South)
        .protein(19.9)
        .build();

    assert_close(scorer.breakdown(&at_limit, &user).unwrap().health_goal, 15.0);
    assert_close(scorer.breakdown(&below, &user).unwrap().health_goal, 0.0);
}

#[test]
fn test_diabetic_goal_rewards_friendly_recipes() {
    let scorer = default_scorer();
    let user = profile("DL", HealthGoal::Diabetic, TastePreference::Tangy);
    let friendly = RecipeBuilder::new("a", "KL", BroadRegion::South)
        .diabetic_friendly(true)
        .build();
    let other = RecipeBuilder::new("b", "KL", BroadRegion::South).build();

    assert_close(scorer.breakdown(&friendly, &user).unwrap().health_goal, 20.0);
    assert_close(scorer.breakdown(&other, &user).unwrap().health_goal, 0.0);
}

#[test]
fn test_taste_bonus_only_for_spicy_and_sweet() {
    let scorer = default_scorer();
    let recipe = RecipeBuilder::new("a", "KL", BroadRegion::South)
        .flavor(6.0, 9.0, 10.0, 10.0)
        .build();

    let taste = |pref| {
        scorer
            .breakdown(&recipe, &profile("DL", HealthGoal::Balanced, pref))
            .unwrap()
            .taste
    };

    assert_close(taste(TastePreference::Spicy), 10.0);
    assert_close(taste(TastePreference::Sweet), 10.0);
    assert_close(taste(TastePreference::Tangy), 0.0);
    assert_close(taste(TastePreference::Savory), 0.0);
}

#[test]
fn test_taste_threshold_is_inclusive() {
    let scorer = default_scorer();
    let user = profile("DL", HealthGoal::Balanced, TastePreference::Sweet);
    let at_limit = RecipeBuilder::new("a", "KL", BroadRegion::South)
        .flavor(0.0, 6.0, 0.0, 0.0)
        .build();
    let below = RecipeBuilder::new("b", "KL", BroadRegion::South)
        .flavor(0.0, 5.9, 0.0, 0.0)
        .build();

    assert_close(scorer.breakdown(&at_limit, &user).unwrap().taste, 10.0);
    assert_close(scorer.breakdown(&below, &user).unwrap().taste, 0.0);
}

#[test]
fn test_unknown_goal_grants_no_goal_bonus() {
    let scorer = default_scorer();
    let user = profile("DL", HealthGoal::from_str_lossy("keto"), TastePreference::Tangy);
    let recipe = RecipeBuilder::new("a", "KL", BroadRegion::South)
        .calories(100.0)
        .protein(40.0)
        .diabetic_friendly(true)
        .build();

    assert_close(scorer.breakdown(&recipe, &user).unwrap().health_goal, 0.0);
}

#[test]
fn test_rank_orders_descending_and_keeps_ties_stable() {
    let scorer = default_scorer();
    let user = profile("TN", HealthGoal::Balanced, TastePreference::Tangy);
    let recipes = vec![
        RecipeBuilder::new("tie-1", "DL", BroadRegion::North).health_score(60.0).build(),
        RecipeBuilder::new("top", "TN", BroadRegion::South).health_score(70.0).build(),
        RecipeBuilder::new("tie-2", "DL", BroadRegion::North).health_score(60.0).build(),
        RecipeBuilder::new("low", "DL", BroadRegion::North).health_score(10.0).build(),
        RecipeBuilder::new("tie-3", "KA", BroadRegion::South).health_score(50.0).build(),
    ];

    let ranked = scorer.rank(&recipes, &user).unwrap();
    let ids: Vec<_> = ranked.iter().map(|r| r.recipe.id.as_str()).collect();
    // top = 90, tie-1/tie-2/tie-3 = 60, low = 10
    assert_eq!(ids, ["top", "tie-1", "tie-2", "tie-3", "low"]);
    assert!(ranked
        .windows(2)
        .all(|pair| pair[0].personalized_score >= pair[1].personalized_score));
}

#[test]
fn test_rank_empty_catalog() {
    let user = profile("TN", HealthGoal::Balanced, TastePreference::Spicy);
    assert!(default_scorer().rank(&[], &user).unwrap().is_empty());
}

#[test]
fn test_invalid_recipe_is_reported() {
    let scorer = default_scorer();
    let user = profile("TN", HealthGoal::Balanced, TastePreference::Spicy);
    let broken = RecipeBuilder::new("broken", "TN", BroadRegion::South)
        .calories(f64::NAN)
        .build();

    let err = scorer.score(&broken, &user).unwrap_err();
    assert_eq!(err.recipe_id, "broken");
    assert_eq!(err.field, "nutrition.calories");
    assert!(matches!(err.issue, DataIssue::NotFinite(_)));

    let ok = RecipeBuilder::new("ok", "TN", BroadRegion::South).build();
    assert!(scorer.rank(&[ok, broken], &user).is_err());
}

#[test]
fn test_rank_reports_earliest_invalid_recipe() {
    let scorer = default_scorer();
    let user = profile("TN", HealthGoal::Balanced, TastePreference::Spicy);
    let mut recipes: Vec<_> = (0..500)
        .map(|i| RecipeBuilder::new(&format!("ok-{i}"), "TN", BroadRegion::South).build())
        .collect();
    for index in [137, 138, 260, 499] {
        recipes[index] = RecipeBuilder::new(&format!("bad-{index}"), "TN", BroadRegion::South)
            .health_score(f64::INFINITY)
            .build();
    }

    for _ in 0..20 {
        let err = scorer.rank(&recipes, &user).unwrap_err();
        assert_eq!(err.recipe_id, "bad-137");
        assert_eq!(err.field, "healthScore");
    }
}

#[tokio::test]
async fn test_scores_never_fall_below_health_score_on_catalog() {
    let recipes = FileCatalogSource::new(common::catalog_path())
        .get_all_recipes()
        .await
        .unwrap();
    let scorer = default_scorer();

    for goal in [
        HealthGoal::Balanced,
        HealthGoal::WeightLoss,
        HealthGoal::MuscleGain,
        HealthGoal::Diabetic,
    ] {
        for taste in [TastePreference::Spicy, TastePreference::Sweet] {
            let user = profile("MH", goal, taste);
            let ranked = scorer.rank(&recipes, &user).unwrap();
            assert_eq!(ranked.len(), recipes.len());
            for scored in &ranked {
                assert!(scored.personalized_score >= scored.recipe.health_score);
                assert_close(scored.personalized_score, scored.score_breakdown.total());
            }
        }
    }
}
