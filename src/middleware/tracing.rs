// ABOUTME: Request tracing middleware for correlation and structured logging
// ABOUTME: Assigns request IDs and opens one span per HTTP request carrying that ID
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use axum::body::Body;
use http::{HeaderName, Request};
use tracing::Span;

/// Header carrying the request ID in both directions
pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Create a tracing span for an HTTP request
///
/// Runs after the request-id layer, so the header is normally present; an
/// absent or non-UTF-8 value is recorded as `unknown`.
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(&REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
