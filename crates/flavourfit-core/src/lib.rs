// ABOUTME: Core types and constants for the FlavourFit recipe intelligence platform
// ABOUTME: Foundation crate with recipe models, region lookup, error handling, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

#![deny(unsafe_code)]

//! # `FlavourFit` Core
//!
//! Foundation crate providing shared types and constants for the `FlavourFit`
//! recipe intelligence platform. Every other workspace crate builds on it.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the domain errors for recipe data and providers
//! - **constants**: Scoring bonuses, thresholds, heatmap colour stops, and env var names
//! - **models**: Recipe, nutrition, flavour profile, user preference, and region types

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `FlavorProfile`, `UserPreferenceProfile`, regions)
pub mod models;
