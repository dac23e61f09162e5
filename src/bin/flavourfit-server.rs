// ABOUTME: FlavourFit API server binary
// ABOUTME: Loads configuration, initializes logging and the shared HTTP client, then serves
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! # `FlavourFit` Server Binary
//!
//! Starts the recipe personalization API over the configured recipe source.

use anyhow::Result;
use clap::Parser;
use flavourfit_intelligence::ScoringConfig;
use flavourfit_providers::initialize_shared_client;
use flavourfit_server::{
    config::{RecipeSourceConfig, ServerConfig},
    logging,
    resources::ServerResources,
    server::FlavourFitServer,
};
use std::path::PathBuf;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "flavourfit-server")]
#[command(about = "FlavourFit - regional recipe personalization API")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Serve recipes from this catalog file instead of the configured source
    #[arg(long)]
    catalog: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // --help and --version also land here
            e.print()?;
            if e.use_stderr() {
                eprintln!("Using default configuration");
                Args {
                    http_port: None,
                    catalog: None,
                }
            } else {
                return Ok(());
            }
        }
    };

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(path) = args.catalog {
        config.source = RecipeSourceConfig::File { path };
    }

    logging::init_from_env()?;

    info!("Starting FlavourFit API");
    info!("{}", config.summary());

    // Loads env overrides now so bad values are reported at startup
    let scoring = ScoringConfig::global();
    info!(
        exact_region = scoring.bonuses.exact_region,
        broad_region = scoring.bonuses.broad_region,
        taste_min_intensity = scoring.thresholds.taste_min_intensity,
        "Scoring configuration ready"
    );

    initialize_shared_client(
        config.http_client.timeout.as_secs(),
        config.http_client.connect_timeout.as_secs(),
    );

    let server = FlavourFitServer::new(ServerResources::from_config(config));
    if let Err(e) = server.run().await {
        error!(error = %e, "Server terminated with error");
        return Err(e);
    }

    Ok(())
}
