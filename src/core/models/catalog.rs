//! Catalog model: the grouped input a curriculum graph is built from

use super::Course;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Courses of one term, in catalog order
pub type TermCourses = Vec<Course>;

/// Terms of one academic year, keyed by term number
pub type YearTerms = BTreeMap<u32, TermCourses>;

/// A curriculum catalog grouped by academic year and term, plus a flat elective list
///
/// Iteration over the grouped courses follows ascending year, then ascending
/// term, then the order courses were added to the term.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Curriculum name (e.g., "BS Computer Science 2024")
    pub name: String,

    /// Year -> term -> courses
    pub years: BTreeMap<u32, YearTerms>,

    /// Electives, outside the year/term grouping
    pub electives: Vec<Course>,
}

impl Catalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            years: BTreeMap::new(),
            electives: Vec::new(),
        }
    }

    /// Schedule a course under `year` / `term`
    pub fn add_course(&mut self, year: u32, term: u32, course: Course) {
        self.years
            .entry(year)
            .or_default()
            .entry(term)
            .or_default()
            .push(course);
    }

    /// Add an elective
    pub fn add_elective(&mut self, course: Course) {
        self.electives.push(course);
    }

    /// Iterate scheduled (non-elective) courses as `(year, term, course)` in natural order
    pub fn iter_scheduled(&self) -> impl Iterator<Item = (u32, u32, &Course)> {
        self.years.iter().flat_map(|(year, terms)| {
            terms
                .iter()
                .flat_map(move |(term, courses)| courses.iter().map(move |c| (*year, *term, c)))
        })
    }

    /// Courses scheduled in a single year/term group
    #[must_use]
    pub fn courses_in(&self, year: u32, term: u32) -> &[Course] {
        self.years
            .get(&year)
            .and_then(|terms| terms.get(&term))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether `code` is listed as an elective.
    ///
    /// Elective status wins over scheduling: a code that is both scheduled and
    /// listed as an elective is an elective everywhere (graph queries, progress
    /// and credit totals).
    #[must_use]
    pub fn is_elective(&self, code: &str) -> bool {
        self.electives.iter().any(|e| e.code == code)
    }

    /// Number of scheduled courses plus electives
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.iter_scheduled().count() + self.electives.len()
    }

    /// Sum of credits across scheduled courses (electives excluded, see [`is_elective`](Self::is_elective))
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.iter_scheduled()
            .filter(|(_, _, c)| !self.is_elective(&c.code))
            .map(|(_, _, c)| c.credits)
            .sum()
    }

    /// Whether the catalog has neither scheduled courses nor electives
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.course_count() == 0
    }
}
