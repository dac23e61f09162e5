// ABOUTME: Main library entry point for the FlavourFit recipe personalization API
// ABOUTME: Wires the recipe source and intelligence engine into an axum JSON service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

#![deny(unsafe_code)]

//! # `FlavourFit` Server
//!
//! A JSON API over the `FlavourFit` recipe personalization engine. It ranks
//! regional recipes for a user's location, health goal, and taste, filters
//! them by diet, finds recipes that taste alike, and colours a regional
//! heatmap by recipe density.
//!
//! ## Architecture
//!
//! - **flavourfit-core**: recipe and profile models, error taxonomy, constants
//! - **flavourfit-intelligence**: scoring, similarity, diet filters, heatmap
//! - **flavourfit-providers**: catalog file and upstream HTTP recipe sources
//! - **this crate**: configuration, logging, services, routes, and the server
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use flavourfit_server::config::ServerConfig;
//! use flavourfit_server::resources::ServerResources;
//! use flavourfit_server::server::FlavourFitServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     FlavourFitServer::new(ServerResources::from_config(config)).run().await
//! }
//! ```

// Re-export flavourfit-core modules so the server can `use crate::errors::*`
pub use flavourfit_core::constants;
pub use flavourfit_core::errors;
pub use flavourfit_core::models;

/// Environment configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request tracing)
pub mod middleware;

/// Shared server resources
pub mod resources;

/// `HTTP` route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

/// Domain services used by the routes
pub mod services;
