// ABOUTME: HTTP server assembly: router, middleware stack, and listener lifecycle
// ABOUTME: Merges every route group, adds tracing, request IDs, and CORS, then serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! HTTP server

use crate::middleware::{setup_cors, tracing::request_span};
use crate::resources::ServerResources;
use crate::routes::{
    CommunityRoutes, GroceryRoutes, HealthRoutes, MealPlanRoutes, RecipeRoutes,
    RecommendationRoutes, RegionRoutes, SearchRoutes,
};
use anyhow::{Context, Result};
use axum::Router;
use std::future;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
#[cfg(unix)]
use tokio::signal::unix::{signal as unix_signal, SignalKind};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// The FlavourFit API server
pub struct FlavourFitServer {
    resources: Arc<ServerResources>,
}

impl FlavourFitServer {
    /// Create a server over shared resources
    #[must_use]
    pub fn new(resources: ServerResources) -> Self {
        Self {
            resources: Arc::new(resources),
        }
    }

    /// Shared resources
    #[must_use]
    pub const fn resources(&self) -> &Arc<ServerResources> {
        &self.resources
    }

    /// Full application router with middleware
    pub fn router(&self) -> Router {
        let resources = &self.resources;
        let middleware = ServiceBuilder::new()
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(PropagateRequestIdLayer::x_request_id());

        Router::new()
            .merge(HealthRoutes::routes(Arc::clone(resources)))
            .merge(RecipeRoutes::routes(Arc::clone(resources)))
            .merge(RecommendationRoutes::routes(Arc::clone(resources)))
            .merge(SearchRoutes::routes(Arc::clone(resources)))
            .merge(RegionRoutes::routes(Arc::clone(resources)))
            .merge(GroceryRoutes::routes(Arc::clone(resources)))
            .merge(MealPlanRoutes::routes(Arc::clone(resources)))
            .merge(CommunityRoutes::routes(Arc::clone(resources)))
            .layer(middleware)
            .layer(setup_cors(&resources.config.cors))
    }

    /// Bind the configured address and serve until Ctrl-C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid, cannot be bound, or the server fails
    pub async fn run(self) -> Result<()> {
        let config = &self.resources.config;
        let addr: SocketAddr = format!("{}:{}", config.host, config.http_port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", config.host, config.http_port))?;
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        self.serve(listener).await
    }

    /// Serve on an already bound listener until shutdown
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails
    pub async fn serve(self, listener: TcpListener) -> Result<()> {
        let local = listener.local_addr().context("Listener has no local address")?;
        info!(%local, "FlavourFit API listening");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("FlavourFit API stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match unix_signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    info!("Shutdown signal received");
}
