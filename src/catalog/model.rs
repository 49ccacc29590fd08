//! Serde model for workshop catalog files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Key identifying a workshop inside a catalog.
///
/// Trigger elements on the page carry these keys as plain strings; the
/// newtype keeps them from mixing with catalog keys and titles.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct WorkshopKey(pub String);

impl WorkshopKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Key identifying a catalog instance.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(transparent)]
pub struct CatalogKey(pub String);

#[derive(Clone, Debug, Deserialize, Serialize)]
/// A workshop catalog file: version marker, catalog identity, entries.
pub struct WorkshopCatalog {
    pub schema_version: String,
    pub catalog: CatalogMetadata,
    pub workshops: Vec<Workshop>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
/// Identity of the catalog instance itself.
pub struct CatalogMetadata {
    pub key: CatalogKey,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
/// A single workshop offering: title plus its ordered curriculum modules.
pub struct Workshop {
    pub key: WorkshopKey,
    pub title: String,
    pub modules: Vec<SyllabusModule>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
/// A named curriculum unit. Topic order is display order; topic text is not
/// required to be unique.
pub struct SyllabusModule {
    pub name: String,
    pub topics: Vec<String>,
}

/// Parse a workshop catalog from disk.
///
/// Structural validation (version marker, duplicate keys) lives in
/// [`crate::catalog::WorkshopIndex`]; schema-level validation lives in
/// `catalog-check`.
pub fn load_catalog_from_path(path: &Path) -> Result<WorkshopCatalog> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading workshop catalog {}", path.display()))?;
    let catalog: WorkshopCatalog = serde_json::from_str(&data)
        .with_context(|| format!("parsing workshop catalog {}", path.display()))?;
    Ok(catalog)
}
