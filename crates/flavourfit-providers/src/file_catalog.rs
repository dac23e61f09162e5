// ABOUTME: Recipe source backed by a JSON catalog file on disk
// ABOUTME: Re-reads the file on every call so edits show up without a restart
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FlavourFit

use crate::catalog::{CatalogDocument, RecipeCatalog};
use crate::core::RecipeSource;
use crate::errors::{ProviderError, ProviderResult};
use crate::models::Recipe;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Source name used in logs and errors
pub const FILE_CATALOG_SOURCE: &str = "file-catalog";

/// Reads recipes from a JSON file
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    /// Source reading from `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Catalog file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> ProviderResult<RecipeCatalog> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| ProviderError::Io {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        let document: CatalogDocument =
            serde_json::from_slice(&bytes).map_err(|e| ProviderError::Decode {
                source_name: FILE_CATALOG_SOURCE.to_owned(),
                message: e.to_string(),
            })?;

        let catalog = RecipeCatalog::from_records(document.into_records())?;
        debug!(
            source.name = FILE_CATALOG_SOURCE,
            path = %self.path.display(),
            recipe.count = catalog.len(),
            "Loaded recipe catalog"
        );
        Ok(catalog)
    }
}

#[async_trait]
impl RecipeSource for FileCatalogSource {
    fn name(&self) -> &'static str {
        FILE_CATALOG_SOURCE
    }

    async fn get_all_recipes(&self) -> ProviderResult<Vec<Recipe>> {
        self.load().await.map(RecipeCatalog::into_recipes)
    }

    async fn get_catalog(&self) -> ProviderResult<RecipeCatalog> {
        self.load().await
    }
}
