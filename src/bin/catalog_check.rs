//! Validate a workshop catalog file.
//!
//! Usage:
//!   catalog-check
//!   catalog-check --file catalogs/workshops.json
//!   catalog-check < catalog.json
//!
//! Runs the JSON Schema contract first, then the index's structural rules
//! (allowed schema versions, duplicate workshop keys).

use anyhow::{Context, Result};
use clap::Parser;
use marquee::{
    WorkshopCatalog, WorkshopIndex, default_catalog_path, default_schema_path, find_repo_root,
    validate_catalog_document,
};
use serde_json::Value;
use std::fs::File;
use std::io::{Read, stdin};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "catalog-check")]
#[command(about = "Validate a workshop catalog against the schema and index rules")]
struct Cli {
    /// Optional input file; reads stdin when omitted and stdin is piped,
    /// otherwise checks the repository catalog.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Optional schema path; defaults to the repository schema.
    #[arg(long)]
    schema: Option<PathBuf>,
    /// Read the catalog from stdin instead of a file.
    #[arg(long)]
    stdin: bool,
}

fn read_input(cli: &Cli, default_path: PathBuf) -> Result<(Value, String)> {
    let mut buf = String::new();
    let label;
    if cli.stdin {
        stdin()
            .read_to_string(&mut buf)
            .context("reading stdin for catalog JSON")?;
        label = "<stdin>".to_string();
    } else {
        let path = cli.file.clone().unwrap_or(default_path);
        File::open(&path)
            .with_context(|| format!("opening catalog {}", path.display()))?
            .read_to_string(&mut buf)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        label = path.display().to_string();
    }
    let value: Value =
        serde_json::from_str(&buf).with_context(|| format!("parsing catalog JSON from {label}"))?;
    Ok((value, label))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let repo_root = find_repo_root().context("locating repo root")?;

    let schema_path = cli
        .schema
        .clone()
        .unwrap_or_else(|| default_schema_path(&repo_root));
    let (document, label) = read_input(&cli, default_catalog_path(&repo_root))?;

    validate_catalog_document(&schema_path, &document)
        .with_context(|| format!("catalog {label} failed schema validation"))?;

    let catalog: WorkshopCatalog = serde_json::from_value(document)
        .with_context(|| format!("deserializing catalog {label}"))?;
    let index = WorkshopIndex::from_catalog(catalog)
        .with_context(|| format!("indexing catalog {label}"))?;

    println!(
        "{}: ok ({} workshops, catalog key '{}')",
        label,
        index.len(),
        index.key().0
    );
    Ok(())
}
