//! Print workshop syllabi from the catalog.
//!
//! Usage:
//!   syllabus --list
//!   syllabus jetson
//!   syllabus --catalog catalogs/workshops.json raspbot

use anyhow::{Context, Result, bail};
use clap::Parser;
use marquee::{WorkshopIndex, WorkshopKey, default_catalog_path, find_repo_root, render};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "syllabus")]
#[command(about = "Print a workshop's syllabus from the catalog")]
struct Cli {
    /// Workshop key to print (for example: jetson).
    key: Option<String>,
    /// List available workshop keys and titles.
    #[arg(long)]
    list: bool,
    /// Optional catalog file; defaults to the repository catalog, falling
    /// back to the bundled copy when no repository root is found.
    #[arg(long)]
    catalog: Option<PathBuf>,
}

fn load_index(catalog: Option<PathBuf>) -> Result<WorkshopIndex> {
    if let Some(path) = catalog {
        return WorkshopIndex::load(&path)
            .with_context(|| format!("loading catalog {}", path.display()));
    }
    if let Ok(repo_root) = find_repo_root() {
        let path = default_catalog_path(&repo_root);
        return WorkshopIndex::load(&path)
            .with_context(|| format!("loading catalog {}", path.display()));
    }
    WorkshopIndex::builtin().context("loading bundled catalog")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let index = load_index(cli.catalog)?;

    if cli.list {
        for key in index.keys() {
            let workshop = index
                .workshop(key)
                .with_context(|| format!("indexed key '{}' missing", key.as_str()))?;
            println!("{}\t{}", key.as_str(), workshop.title);
        }
        return Ok(());
    }

    let Some(key) = cli.key else {
        bail!("pass a workshop key or --list; try 'syllabus --list'");
    };
    let key = WorkshopKey::new(key);
    let Some(workshop) = index.workshop(&key) else {
        bail!(
            "unknown workshop '{}'; known keys: {}",
            key.as_str(),
            index
                .keys()
                .map(WorkshopKey::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        );
    };

    print!("{}", render(workshop));
    Ok(())
}
