// ABOUTME: Server configuration module
// ABOUTME: Environment-driven settings for the HTTP API and its recipe source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

/// Environment variable parsing for the server
pub mod environment;

pub use environment::{CorsConfig, Environment, HttpClientConfig, RecipeSourceConfig, ServerConfig};
