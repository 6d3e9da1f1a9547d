//! `course-tracker` library
//!
//! Builds a prerequisite graph from a curriculum catalog and answers which
//! courses a student can enroll in next. Shared by the CLI and its tests.

pub mod core;
pub mod logger;

pub use crate::core::{config, get_version};
