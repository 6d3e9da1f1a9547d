//! CLI command handlers for `coursetracker`.
//!
//! Each subcommand lives in its own submodule; helpers shared by the
//! catalog-based commands live here.

pub mod config;
pub mod eligible;
pub mod graph;
pub mod progress;
pub mod validate;

use crate::args::CompletedArgs;
use course_tracker::config::Config;
use course_tracker::core::loader::{load_catalog, load_completed};
use course_tracker::core::models::Catalog;
use course_tracker::{debug, error};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Resolve a catalog argument to a file path.
///
/// An existing path is used as given. Otherwise the name is looked up in the
/// configured `catalogs_dir`, with a `.toml` extension added when missing.
pub fn resolve_catalog_path(catalog: &Path, config: &Config) -> PathBuf {
    if catalog.exists() || config.paths.catalogs_dir.is_empty() {
        return catalog.to_path_buf();
    }

    let mut candidate = PathBuf::from(&config.paths.catalogs_dir).join(catalog);
    if candidate.extension().is_none() {
        candidate.set_extension("toml");
    }
    if candidate.exists() {
        debug!(
            "Resolved catalog '{}' to {}",
            catalog.display(),
            candidate.display()
        );
        candidate
    } else {
        catalog.to_path_buf()
    }
}

/// Load the catalog named by `catalog`, reporting failures as CLI messages
pub fn load_catalog_arg(catalog: &Path, config: &Config) -> Result<Catalog, String> {
    let path = resolve_catalog_path(catalog, config);
    load_catalog(&path).map_err(|e| {
        error!("Failed to load catalog {}: {e}", path.display());
        format!("✗ Failed to load {}: {e}", path.display())
    })
}

/// Merge `--completed` codes with the contents of `--completed-file`
pub fn collect_completed(args: &CompletedArgs) -> Result<HashSet<String>, String> {
    let mut completed: HashSet<String> = args
        .completed
        .iter()
        .map(|code| code.trim())
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect();

    if let Some(path) = &args.completed_file {
        let from_file = load_completed(path).map_err(|e| {
            error!("Failed to read completed courses {}: {e}", path.display());
            format!("✗ Failed to read {}: {e}", path.display())
        })?;
        completed.extend(from_file);
    }

    Ok(completed)
}
