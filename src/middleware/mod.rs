// ABOUTME: HTTP middleware for the FlavourFit API
// ABOUTME: CORS policy and request-id propagation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

/// CORS configuration
pub mod cors;
/// Request tracing and request-id layers
pub mod tracing;

pub use cors::setup_cors;
