#![allow(dead_code)]

use anyhow::{Context, Result};
use marquee::{WorkshopIndex, WorkshopKey, default_catalog_path, default_schema_path};
use serde_json::{Value, json};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn catalog_path() -> PathBuf {
    default_catalog_path(&repo_root())
}

pub fn schema_path() -> PathBuf {
    default_schema_path(&repo_root())
}

/// A minimal, schema-valid catalog document over the given workshop keys.
pub fn sample_catalog_value(keys: &[&str]) -> Value {
    let workshops: Vec<Value> = keys
        .iter()
        .map(|key| {
            json!({
                "key": key,
                "title": format!("{key} workshop"),
                "modules": [
                    {
                        "name": "Module 1: Basics",
                        "topics": ["first topic", "second topic"]
                    },
                    {
                        "name": "Module 2: Practice",
                        "topics": ["third topic"]
                    }
                ]
            })
        })
        .collect();

    json!({
        "schema_version": "workshop_catalog_v1",
        "catalog": {"key": "sample_catalog_v1", "title": "sample catalog"},
        "workshops": workshops
    })
}

/// Write a catalog document to a temp file and load it through the index.
/// The temp file handle must outlive the load, so it is returned too.
pub fn index_from_value(value: &Value) -> Result<(WorkshopIndex, NamedTempFile)> {
    let mut file = NamedTempFile::new().context("allocating temp catalog")?;
    serde_json::to_writer(&mut file, value).context("writing temp catalog")?;
    file.flush().context("flushing temp catalog")?;
    let index = WorkshopIndex::load(file.path()).context("loading temp catalog")?;
    Ok((index, file))
}

pub fn sample_index(keys: &[&str]) -> Result<WorkshopIndex> {
    let (index, _file) = index_from_value(&sample_catalog_value(keys))?;
    Ok(index)
}

pub fn key(value: &str) -> WorkshopKey {
    WorkshopKey::new(value)
}
