//! Workshop catalog wiring.
//!
//! This module wraps the syllabus catalog shipped with the repository
//! (`catalogs/workshops.json`) so the overlay and the CLI can load a
//! validated snapshot and resolve workshops by key. Types in `model` mirror
//! the catalog file fields; callers use `WorkshopIndex` for lookups.

pub mod index;
pub mod model;

pub use index::WorkshopIndex;
pub use model::{
    CatalogKey, CatalogMetadata, SyllabusModule, Workshop, WorkshopCatalog, WorkshopKey,
    load_catalog_from_path,
};

/// Default relative path to the bundled workshop catalog.
pub const DEFAULT_CATALOG_PATH: &str = "catalogs/workshops.json";
