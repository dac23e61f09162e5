// ABOUTME: Environment configuration for the FlavourFit HTTP server
// ABOUTME: Parses listen address, recipe source selection, and upstream client settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

//! Environment-based server configuration

use crate::constants::{defaults, env_config, limits, ports};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use tracing::warn;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Where recipes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSourceConfig {
    /// JSON catalog on local disk
    File {
        /// Catalog path
        path: PathBuf,
    },
    /// Upstream recipe API
    Upstream {
        /// Base URL, e.g. `https://recipes.internal/api/`
        base_url: String,
    },
}

impl RecipeSourceConfig {
    /// Short description for logs
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::File { path } => format!("file catalog ({})", path.display()),
            Self::Upstream { base_url } => format!("upstream API ({base_url})"),
        }
    }
}

/// Timeouts for the shared upstream HTTP client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpClientConfig {
    /// Whole-request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(defaults::HTTP_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(defaults::HTTP_CONNECT_TIMEOUT_SECS),
        }
    }
}

/// CORS origins accepted by the API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*` for any
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".into(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub http_port: u16,
    /// Deployment environment
    pub environment: Environment,
    /// Recipe source selection
    pub source: RecipeSourceConfig,
    /// Upstream client timeouts
    pub http_client: HttpClientConfig,
    /// Recommendations returned when a request gives no limit
    pub recommendation_limit: usize,
    /// CORS policy
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.into(),
            http_port: ports::DEFAULT_HTTP_PORT,
            environment: Environment::default(),
            source: RecipeSourceConfig::File {
                path: PathBuf::from(defaults::CATALOG_PATH),
            },
            http_client: HttpClientConfig::default(),
            recommendation_limit: limits::DEFAULT_RECOMMENDATION_LIMIT,
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable does not parse or is out of range
    pub fn from_env() -> Result<Self> {
        let source = match env::var(env_config::UPSTREAM_URL) {
            Ok(url) if !url.trim().is_empty() => RecipeSourceConfig::Upstream {
                base_url: url.trim().to_owned(),
            },
            _ => RecipeSourceConfig::File {
                path: PathBuf::from(env_var_or(
                    env_config::CATALOG_PATH,
                    defaults::CATALOG_PATH,
                )),
            },
        };

        let recommendation_limit = parse_env(
            env_config::RECOMMENDATION_LIMIT,
            limits::DEFAULT_RECOMMENDATION_LIMIT,
        )?;
        if recommendation_limit == 0 || recommendation_limit > limits::MAX_RESULT_LIMIT {
            bail!(
                "{} must be between 1 and {}, got {recommendation_limit}",
                env_config::RECOMMENDATION_LIMIT,
                limits::MAX_RESULT_LIMIT
            );
        }

        let config = Self {
            host: env_var_or(env_config::HOST, defaults::HOST),
            http_port: parse_env(env_config::HTTP_PORT, ports::DEFAULT_HTTP_PORT)?,
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            source,
            http_client: HttpClientConfig {
                timeout: Duration::from_secs(parse_env(
                    env_config::HTTP_TIMEOUT_SECS,
                    defaults::HTTP_TIMEOUT_SECS,
                )?),
                connect_timeout: Duration::from_secs(parse_env(
                    env_config::HTTP_CONNECT_TIMEOUT_SECS,
                    defaults::HTTP_CONNECT_TIMEOUT_SECS,
                )?),
            },
            recommendation_limit,
            cors: CorsConfig {
                allowed_origins: env_var_or(env_config::CORS_ALLOWED_ORIGINS, "*"),
            },
        };

        if config.environment.is_production() && config.cors.allowed_origins.trim() == "*" {
            warn!("CORS allows any origin in production");
        }

        Ok(config)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FlavourFit Server Configuration:\n\
             - Listen: {}:{}\n\
             - Environment: {}\n\
             - Recipe Source: {}\n\
             - Upstream Timeout: {}s (connect {}s)\n\
             - Recommendation Limit: {}\n\
             - CORS Origins: {}",
            self.host,
            self.http_port,
            self.environment,
            self.source.describe(),
            self.http_client.timeout.as_secs(),
            self.http_client.connect_timeout.as_secs(),
            self.recommendation_limit,
            self.cors.allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parsing() {
        assert_eq!(
            Environment::from_str_or_default("PROD"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("staging"),
            Environment::Development
        );
    }

    #[test]
    fn test_summary_mentions_source() {
        let summary = ServerConfig::default().summary();
        assert!(summary.contains("file catalog"));
        assert!(summary.contains("8081"));
    }
}
