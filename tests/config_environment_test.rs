// ABOUTME: Tests for loading server configuration from environment variables
// ABOUTME: Serialized because every case mutates the process environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit
#![allow(missing_docs)]

use flavourfit_server::config::{Environment, RecipeSourceConfig, ServerConfig};
use serial_test::serial;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const VARS: &[&str] = &[
    "HTTP_PORT",
    "HOST",
    "ENVIRONMENT",
    "FLAVOURFIT_CATALOG_PATH",
    "FLAVOURFIT_UPSTREAM_URL",
    "FLAVOURFIT_HTTP_TIMEOUT_SECS",
    "FLAVOURFIT_HTTP_CONNECT_TIMEOUT_SECS",
    "FLAVOURFIT_RECOMMENDATION_LIMIT",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.recommendation_limit, 10);
    assert_eq!(config.http_client.timeout, Duration::from_secs(10));
    assert_eq!(config.http_client.connect_timeout, Duration::from_secs(5));
    assert_eq!(config.cors.allowed_origins, "*");
    assert!(matches!(
        config.source,
        RecipeSourceConfig::File { ref path } if path == &PathBuf::from("data/regional_recipes.json")
    ));
}

#[test]
#[serial]
fn test_overrides_from_environment() {
    clear_env();
    env::set_var("HTTP_PORT", "9090");
    env::set_var("HOST", "0.0.0.0");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("FLAVOURFIT_CATALOG_PATH", "/srv/recipes.json");
    env::set_var("FLAVOURFIT_RECOMMENDATION_LIMIT", "25");
    env::set_var("CORS_ALLOWED_ORIGINS", "https://flavourfit.app");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.http_port, 9090);
    assert_eq!(config.host, "0.0.0.0");
    assert!(config.environment.is_production());
    assert_eq!(config.recommendation_limit, 25);
    assert_eq!(config.cors.allowed_origins, "https://flavourfit.app");
    assert!(matches!(
        config.source,
        RecipeSourceConfig::File { ref path } if path == &PathBuf::from("/srv/recipes.json")
    ));
}

#[test]
#[serial]
fn test_upstream_url_wins_over_catalog_path() {
    clear_env();
    env::set_var("FLAVOURFIT_CATALOG_PATH", "/srv/recipes.json");
    env::set_var("FLAVOURFIT_UPSTREAM_URL", " http://recipes.internal:4000 ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    match config.source {
        RecipeSourceConfig::Upstream { base_url } => {
            assert_eq!(base_url, "http://recipes.internal:4000");
        }
        RecipeSourceConfig::File { .. } => panic!("expected upstream source"),
    }
}

#[test]
#[serial]
fn test_blank_upstream_url_falls_back_to_file() {
    clear_env();
    env::set_var("FLAVOURFIT_UPSTREAM_URL", "   ");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert!(matches!(config.source, RecipeSourceConfig::File { .. }));
}

#[test]
#[serial]
fn test_invalid_port_is_an_error() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");

    let result = ServerConfig::from_env();
    clear_env();

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("HTTP_PORT"), "{message}");
}

#[test]
#[serial]
fn test_recommendation_limit_bounds() {
    clear_env();

    env::set_var("FLAVOURFIT_RECOMMENDATION_LIMIT", "0");
    assert!(ServerConfig::from_env().is_err());

    env::set_var("FLAVOURFIT_RECOMMENDATION_LIMIT", "101");
    assert!(ServerConfig::from_env().is_err());

    env::set_var("FLAVOURFIT_RECOMMENDATION_LIMIT", "100");
    assert_eq!(ServerConfig::from_env().unwrap().recommendation_limit, 100);

    clear_env();
}

#[test]
#[serial]
fn test_unknown_environment_defaults_to_development() {
    clear_env();
    env::set_var("ENVIRONMENT", "staging-ish");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.environment, Environment::Development);
}

#[test]
#[serial]
fn test_summary_lists_key_settings() {
    clear_env();
    let config = ServerConfig::from_env().unwrap();

    let summary = config.summary();
    assert!(summary.contains("127.0.0.1:8081"));
    assert!(summary.contains("Recommendation Limit: 10"));
    assert!(summary.contains("CORS Origins: *"));
}
