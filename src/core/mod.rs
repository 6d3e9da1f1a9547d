//! Core module: curriculum models, the prerequisite graph and its queries

pub mod config;
pub mod graph;
pub mod loader;
pub mod models;
pub mod progress;
pub mod validation;

pub use graph::CurriculumGraph;

/// Returns the current version of the `course-tracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
