//! Indexed view of a workshop catalog instance.
//!
//! The index enforces the expected catalog schema version and provides fast
//! lookup by workshop key. It is intentionally strict about duplicates and
//! unknown schema versions so stale or hand-edited catalogs cannot silently
//! feed the overlay, while the lookup itself stays total: an absent key is
//! `None`, never an error.

use crate::catalog::load_catalog_from_path;
use crate::catalog::model::{CatalogKey, Workshop, WorkshopCatalog, WorkshopKey};
use anyhow::{Context, Result, bail};
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::path::Path;

// The page ships a single catalog; reject unexpected versions rather than
// render a syllabus from mismatched data. Allow callers to widen the accepted
// set via env while keeping a sane default.
const DEFAULT_SCHEMA_VERSION: &str = "workshop_catalog_v1";
const ENV_ALLOWED_SCHEMA_VERSIONS: &str = "MARQUEE_ALLOWED_CATALOG_SCHEMAS";

const BUILTIN_CATALOG_JSON: &str = include_str!("../../catalogs/workshops.json");

#[derive(Debug)]
/// Workshop catalog plus a derived index keyed by workshop key.
pub struct WorkshopIndex {
    catalog_key: CatalogKey,
    catalog: WorkshopCatalog,
    by_key: BTreeMap<WorkshopKey, Workshop>,
}

impl WorkshopIndex {
    /// Load and validate the catalog from disk.
    ///
    /// Validates the schema version, ensures workshop keys are unique, and
    /// builds a deterministic BTreeMap for fast lookups.
    pub fn load(path: &Path) -> Result<Self> {
        let catalog =
            load_catalog_from_path(path).with_context(|| format!("loading {}", path.display()))?;
        Self::from_catalog(catalog)
    }

    /// Build the index from the catalog bundled into the binary at compile
    /// time, so library consumers need no disk access.
    pub fn builtin() -> Result<Self> {
        let catalog: WorkshopCatalog = serde_json::from_str(BUILTIN_CATALOG_JSON)
            .context("parsing bundled workshop catalog")?;
        Self::from_catalog(catalog)
    }

    /// Validate and index an already-parsed catalog.
    pub fn from_catalog(catalog: WorkshopCatalog) -> Result<Self> {
        validate_schema_version(&catalog.schema_version)?;
        validate_catalog_metadata(&catalog)?;
        let by_key = build_index(&catalog)?;
        Ok(Self {
            catalog_key: catalog.catalog.key.clone(),
            catalog,
            by_key,
        })
    }

    /// The catalog key declared in the loaded file.
    pub fn key(&self) -> &CatalogKey {
        &self.catalog_key
    }

    /// Resolve a workshop by key.
    ///
    /// Returns `None` instead of erroring; the overlay treats a miss as a
    /// silent no-op and the CLI surfaces it with its own context.
    pub fn workshop(&self, key: &WorkshopKey) -> Option<&Workshop> {
        self.by_key.get(key)
    }

    /// Iterates workshop keys in stable order.
    pub fn keys(&self) -> impl Iterator<Item = &WorkshopKey> {
        self.by_key.keys()
    }

    /// Number of workshops in the catalog.
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    /// Access the underlying catalog (metadata, definition order).
    pub fn catalog(&self) -> &WorkshopCatalog {
        &self.catalog
    }
}

fn validate_schema_version(schema_version: &str) -> Result<()> {
    if schema_version.is_empty() {
        bail!("schema_version must not be empty");
    }

    if !schema_version
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
    {
        bail!(
            "schema_version must match ^[A-Za-z0-9_.-]+$, got {}",
            schema_version
        );
    }

    let allowed = allowed_schema_versions();
    if !allowed.contains(schema_version) {
        bail!(
            "unsupported catalog schema_version '{}', allowed: {:?}",
            schema_version,
            allowed
        );
    }
    Ok(())
}

fn validate_catalog_metadata(catalog: &WorkshopCatalog) -> Result<()> {
    if catalog.catalog.key.0.is_empty() {
        bail!("catalog key must not be empty");
    }
    if catalog.catalog.title.is_empty() {
        bail!("catalog title must not be empty");
    }
    Ok(())
}

fn build_index(catalog: &WorkshopCatalog) -> Result<BTreeMap<WorkshopKey, Workshop>> {
    let mut by_key = BTreeMap::new();
    for workshop in &catalog.workshops {
        if workshop.key.0.is_empty() {
            bail!("workshop key must not be empty");
        }
        if workshop.title.is_empty() {
            bail!("workshop '{}' is missing a title", workshop.key.0);
        }
        if by_key
            .insert(workshop.key.clone(), workshop.clone())
            .is_some()
        {
            bail!("duplicate workshop key '{}' in catalog", workshop.key.0);
        }
    }
    Ok(by_key)
}

/// Schema versions accepted by [`WorkshopIndex::load`].
pub fn allowed_schema_versions() -> BTreeSet<String> {
    let mut allowed = BTreeSet::new();
    allowed.insert(DEFAULT_SCHEMA_VERSION.to_string());
    if let Ok(extra) = env::var(ENV_ALLOWED_SCHEMA_VERSIONS) {
        for version in extra.split(',') {
            let version = version.trim();
            if !version.is_empty() {
                allowed.insert(version.to_string());
            }
        }
    }
    allowed
}
