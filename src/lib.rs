//! Headless interaction core for the workshop landing page.
//!
//! The crate owns the data and state behind the page's interactive pieces:
//! the workshop syllabus catalog, the modal overlay that presents a rendered
//! syllabus, and the small page-chrome state machines (FAQ accordion,
//! contact-form submission, scroll effects). Presentation itself (DOM
//! classes, widget drawing) stays with the host; this crate only answers
//! "what is shown" and "what state are we in".

use anyhow::{Result, bail};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub mod catalog;
pub mod overlay;
pub mod page;
pub mod render;
pub mod schema;

pub use catalog::{
    CatalogKey, CatalogMetadata, DEFAULT_CATALOG_PATH, SyllabusModule, Workshop, WorkshopCatalog,
    WorkshopIndex, WorkshopKey, load_catalog_from_path,
};
pub use overlay::{OverlayController, PointerTarget};
pub use render::{SyllabusDocument, SyllabusSection, render};
pub use schema::{CatalogSchema, validate_catalog_document};

const CATALOG_SENTINEL: &str = "catalogs/workshops.json";
const SCHEMA_SENTINEL: &str = "schema/workshop_catalog.schema.json";

fn is_repo_root(candidate: &Path) -> bool {
    candidate.join(CATALOG_SENTINEL).is_file() && candidate.join(SCHEMA_SENTINEL).is_file()
}

fn repo_root_from_hint(hint: &str) -> Option<PathBuf> {
    if hint.is_empty() {
        return None;
    }
    let hint_path = PathBuf::from(hint);
    if !hint_path.exists() || !is_repo_root(&hint_path) {
        return None;
    }
    fs::canonicalize(hint_path).ok()
}

fn search_upwards(start: &Path) -> Option<PathBuf> {
    let mut dir = fs::canonicalize(start).ok()?;
    loop {
        if is_repo_root(&dir) {
            return Some(dir);
        }
        if !dir.pop() {
            break;
        }
    }
    None
}

/// Locate the repository root holding `catalogs/` and `schema/`.
///
/// Checks `MARQUEE_ROOT`, then walks upward from the running executable,
/// then falls back to the compile-time hint baked in by `build.rs`.
pub fn find_repo_root() -> Result<PathBuf> {
    if let Ok(env_root) = env::var("MARQUEE_ROOT") {
        if let Some(root) = repo_root_from_hint(&env_root) {
            return Ok(root);
        }
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            if let Some(root) = search_upwards(exe_dir) {
                return Ok(root);
            }
        }
    }

    if let Some(hint) = option_env!("MARQUEE_ROOT_HINT") {
        if let Some(root) = repo_root_from_hint(hint) {
            return Ok(root);
        }
    }

    bail!("Unable to locate marquee repository root. Set MARQUEE_ROOT to the cloned repository.");
}

pub fn default_catalog_path(repo_root: &Path) -> PathBuf {
    repo_root.join(CATALOG_SENTINEL)
}

pub fn default_schema_path(repo_root: &Path) -> PathBuf {
    repo_root.join(SCHEMA_SENTINEL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn root_detection_requires_both_sentinels() {
        let temp = TempRoot::new();
        assert!(!is_repo_root(&temp.root));

        fs::create_dir_all(temp.root.join("catalogs")).unwrap();
        fs::write(temp.root.join(CATALOG_SENTINEL), "{}").unwrap();
        assert!(!is_repo_root(&temp.root));

        fs::create_dir_all(temp.root.join("schema")).unwrap();
        fs::write(temp.root.join(SCHEMA_SENTINEL), "{}").unwrap();
        assert!(is_repo_root(&temp.root));
    }

    #[test]
    fn hint_rejects_non_root_directories() {
        let temp = TempRoot::new();
        assert!(repo_root_from_hint(temp.root.to_str().unwrap()).is_none());
        assert!(repo_root_from_hint("").is_none());
    }

    struct TempRoot {
        root: PathBuf,
    }

    impl TempRoot {
        fn new() -> Self {
            static COUNTER: AtomicUsize = AtomicUsize::new(0);
            let mut dir = env::temp_dir();
            dir.push(format!(
                "marquee-root-test-{}-{}",
                std::process::id(),
                COUNTER.fetch_add(1, Ordering::SeqCst)
            ));
            fs::create_dir_all(&dir).unwrap();
            Self { root: dir }
        }
    }

    impl Drop for TempRoot {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }
}
