//! JSON Schema validation for catalog files.
//!
//! `catalog-check` and the schema tests validate catalog documents against
//! the shipped contract (`schema/workshop_catalog.schema.json`) before the
//! structural checks in [`crate::catalog::WorkshopIndex`] run, so a malformed
//! file fails with schema details rather than a serde parse error.

use anyhow::{Context, Result, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;

/// A compiled catalog schema ready to validate documents.
pub struct CatalogSchema {
    compiled: JSONSchema,
    // Keeps the schema document alive for the compiled validator, which
    // borrows it for 'static.
    _raw: Arc<Value>,
}

impl CatalogSchema {
    /// Load and compile the schema at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw: Arc<Value> = Arc::new(
            serde_json::from_reader(
                File::open(path)
                    .with_context(|| format!("opening catalog schema {}", path.display()))?,
            )
            .with_context(|| format!("parsing catalog schema {}", path.display()))?,
        );
        let raw_static: &'static Value = unsafe { &*(Arc::as_ptr(&raw)) };
        let compiled = JSONSchema::compile(raw_static)
            .with_context(|| format!("compiling catalog schema {}", path.display()))?;
        Ok(Self {
            compiled,
            _raw: raw,
        })
    }

    /// Validate a catalog document, collecting every violation into the
    /// error message.
    pub fn validate(&self, document: &Value) -> Result<()> {
        if let Err(errors) = self.compiled.validate(document) {
            let details = errors
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            bail!("catalog failed schema validation:\n{}", details);
        }
        Ok(())
    }
}

/// Validate a catalog document against the schema at `schema_path`, then
/// check its declared version against the allowed set.
pub fn validate_catalog_document(schema_path: &Path, document: &Value) -> Result<()> {
    let schema = CatalogSchema::load(schema_path)?;
    schema.validate(document)?;

    let version = document
        .get("schema_version")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let allowed = crate::catalog::index::allowed_schema_versions();
    if !allowed.contains(&version) {
        bail!(
            "catalog schema_version '{}' not in allowed set {:?}",
            version,
            allowed
        );
    }
    Ok(())
}
