//! TOML catalog parser
//!
//! ```toml
//! name = "BS Computer Science"
//!
//! [[course]]
//! year = 1
//! term = 1
//! code = "CS1800"
//! title = "Discrete Structures"
//! credits = 4.0
//! regular_terms = [1, 2]
//!
//! [[course]]
//! year = 1
//! term = 2
//! code = "CS2500"
//! title = "Fundamentals of Computer Science 1"
//! credits = 4.0
//! prerequisites = ["CS1800"]
//!
//! [[elective]]
//! code = "MUSC1001"
//! title = "Music Theory"
//! credits = 4.0
//! ```

use crate::core::models::{Catalog, Course};
use crate::debug;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::path::Path;

/// One `[[course]]` table: a course plus where it sits in the curriculum
#[derive(Debug, Clone, Deserialize)]
struct ScheduledEntry {
    year: u32,
    term: u32,
    code: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    credits: f32,
    #[serde(default)]
    prerequisites: Vec<String>,
    #[serde(default)]
    regular_terms: BTreeSet<u32>,
}

impl ScheduledEntry {
    fn into_course(self) -> (u32, u32, Course) {
        let course = Course {
            code: self.code,
            title: self.title,
            credits: self.credits,
            prerequisites: self.prerequisites,
            regular_terms: self.regular_terms,
        };
        (self.year, self.term, course)
    }
}

/// Top-level layout of a catalog file
#[derive(Debug, Clone, Deserialize)]
struct CatalogFile {
    name: String,
    #[serde(default, rename = "course")]
    courses: Vec<ScheduledEntry>,
    #[serde(default, rename = "elective")]
    electives: Vec<Course>,
}

/// Parse a catalog from TOML text
///
/// # Errors
/// Returns an error if the TOML is malformed, a course has an empty code,
/// or the catalog contains no courses at all
pub fn parse_catalog_toml(content: &str) -> Result<Catalog, Box<dyn Error>> {
    let file: CatalogFile = toml::from_str(content)?;

    if file.name.trim().is_empty() {
        return Err("Missing catalog name".into());
    }

    let mut catalog = Catalog::new(file.name.trim());

    for entry in file.courses {
        if entry.code.trim().is_empty() {
            return Err(format!(
                "Course entry in year {} term {} has an empty code",
                entry.year, entry.term
            )
            .into());
        }
        let (year, term, mut course) = entry.into_course();
        normalize_codes(&mut course);
        catalog.add_course(year, term, course);
    }

    for mut elective in file.electives {
        if elective.code.trim().is_empty() {
            return Err("Elective entry has an empty code".into());
        }
        normalize_codes(&mut elective);
        catalog.add_elective(elective);
    }

    if catalog.is_empty() {
        return Err(format!("Catalog '{}' contains no courses", catalog.name).into());
    }

    debug!(
        "Parsed catalog '{}' with {} courses",
        catalog.name,
        catalog.course_count()
    );
    Ok(catalog)
}

/// Trim the course code and its prerequisite codes, dropping blank and repeated prerequisites
fn normalize_codes(course: &mut Course) {
    course.code = course.code.trim().to_string();
    course.prerequisites = course
        .prerequisites
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();
    course.dedup_prerequisites();
}

/// Load a catalog from a TOML file
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog, Box<dyn Error>> {
    let content = fs::read_to_string(path)?;
    parse_catalog_toml(&content)
}
