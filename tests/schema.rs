// JSON Schema contract for catalog files.
#[path = "support/common.rs"]
mod common;

use anyhow::Result;
use marquee::{CatalogSchema, validate_catalog_document};
use serde_json::Value;
use std::fs;

use common::{catalog_path, sample_catalog_value, schema_path};

fn shipped_catalog() -> Result<Value> {
    let data = fs::read_to_string(catalog_path())?;
    Ok(serde_json::from_str(&data)?)
}

#[test]
fn shipped_catalog_passes_the_shipped_schema() -> Result<()> {
    let document = shipped_catalog()?;
    validate_catalog_document(&schema_path(), &document)?;
    Ok(())
}

#[test]
fn sample_fixture_passes_the_shipped_schema() -> Result<()> {
    let schema = CatalogSchema::load(&schema_path())?;
    schema.validate(&sample_catalog_value(&["jetson", "iriv"]))?;
    Ok(())
}

#[test]
fn missing_required_fields_fail_validation() -> Result<()> {
    let schema = CatalogSchema::load(&schema_path())?;

    let mut document = shipped_catalog()?;
    document["workshops"][0]
        .as_object_mut()
        .expect("workshop object")
        .remove("title");
    assert!(schema.validate(&document).is_err());
    Ok(())
}

#[test]
fn wrong_schema_version_fails_the_const() -> Result<()> {
    let schema = CatalogSchema::load(&schema_path())?;
    let mut document = sample_catalog_value(&["jetson"]);
    document["schema_version"] = "workshop_catalog_v9".into();
    assert!(schema.validate(&document).is_err());
    Ok(())
}

#[test]
fn unexpected_top_level_keys_fail_validation() -> Result<()> {
    let schema = CatalogSchema::load(&schema_path())?;
    let mut document = sample_catalog_value(&["jetson"]);
    document["extra"] = "nope".into();
    assert!(schema.validate(&document).is_err());
    Ok(())
}

#[test]
fn module_topics_must_be_strings() -> Result<()> {
    let schema = CatalogSchema::load(&schema_path())?;
    let mut document = sample_catalog_value(&["jetson"]);
    document["workshops"][0]["modules"][0]["topics"][0] = 42.into();
    assert!(schema.validate(&document).is_err());
    Ok(())
}
