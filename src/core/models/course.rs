//! Course model

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Represents a single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course code (e.g., "CS2510")
    pub code: String,

    /// Display title (e.g., "Fundamentals of Computer Science 2")
    #[serde(default)]
    pub title: String,

    /// Credit value (can be fractional)
    #[serde(default)]
    pub credits: f32,

    /// Codes of courses that must all be completed first
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Term numbers in which the course is normally scheduled
    #[serde(default)]
    pub regular_terms: BTreeSet<u32>,
}

impl Course {
    /// Create a new course with no prerequisites and no regular terms
    ///
    /// # Arguments
    /// * `code` - Unique course code
    /// * `title` - Display title
    /// * `credits` - Credit value (can be fractional)
    #[must_use]
    pub fn new(code: impl Into<String>, title: impl Into<String>, credits: f32) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits,
            prerequisites: Vec::new(),
            regular_terms: BTreeSet::new(),
        }
    }

    /// Builder: add every code in `prereqs` as a prerequisite
    #[must_use]
    pub fn with_prerequisites<I, S>(mut self, prereqs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for prereq in prereqs {
            self.add_prerequisite(prereq.into());
        }
        self
    }

    /// Builder: mark the course as regularly scheduled in `terms`
    #[must_use]
    pub fn with_regular_terms<I>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        self.regular_terms.extend(terms);
        self
    }

    /// Add a prerequisite by course code
    pub fn add_prerequisite(&mut self, prereq_code: String) {
        if !self.prerequisites.contains(&prereq_code) {
            self.prerequisites.push(prereq_code);
        }
    }

    /// Mark the course as regularly scheduled in `term`
    pub fn add_regular_term(&mut self, term: u32) {
        self.regular_terms.insert(term);
    }

    /// Whether the course is normally offered in `term`
    #[must_use]
    pub fn is_offered_in(&self, term: u32) -> bool {
        self.regular_terms.contains(&term)
    }

    /// Whether every prerequisite appears in `completed`
    #[must_use]
    pub fn prerequisites_satisfied_by(&self, completed: &HashSet<String>) -> bool {
        self.prerequisites.iter().all(|p| completed.contains(p))
    }

    /// Collapse duplicate prerequisite codes, keeping first occurrence order.
    ///
    /// Deserialized courses may carry duplicates; the builder methods never do.
    pub fn dedup_prerequisites(&mut self) {
        let mut seen = HashSet::new();
        self.prerequisites.retain(|p| seen.insert(p.clone()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("CS1800", "Discrete Structures", 4.0);

        assert_eq!(course.code, "CS1800");
        assert_eq!(course.title, "Discrete Structures");
        assert!((course.credits - 4.0).abs() < f32::EPSILON);
        assert!(course.prerequisites.is_empty());
        assert!(course.regular_terms.is_empty());
    }

    #[test]
    fn test_fractional_credits() {
        let course = Course::new("PHYS1151", "Lab", 1.5);
        assert!((course.credits - 1.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_add_prerequisite_collapses_duplicates() {
        let mut course = Course::new("CS2510", "Data Structures", 4.0);

        course.add_prerequisite("CS1800".to_string());
        course.add_prerequisite("CS1800".to_string());

        assert_eq!(course.prerequisites, vec!["CS1800".to_string()]);
    }

    #[test]
    fn test_builders() {
        let course = Course::new("CS3500", "Object-Oriented Design", 4.0)
            .with_prerequisites(["CS2510", "CS1800", "CS2510"])
            .with_regular_terms([1, 2, 2]);

        assert_eq!(course.prerequisites.len(), 2);
        assert_eq!(course.regular_terms.len(), 2);
        assert!(course.is_offered_in(1));
        assert!(!course.is_offered_in(3));
    }

    #[test]
    fn test_prerequisites_satisfied_by() {
        let course = Course::new("CS3500", "OOD", 4.0).with_prerequisites(["CS2510", "CS1800"]);

        let mut completed: HashSet<String> = HashSet::new();
        assert!(!course.prerequisites_satisfied_by(&completed));

        completed.insert("CS2510".to_string());
        assert!(!course.prerequisites_satisfied_by(&completed));

        completed.insert("CS1800".to_string());
        assert!(course.prerequisites_satisfied_by(&completed));
    }

    #[test]
    fn test_empty_prerequisites_always_satisfied() {
        let course = Course::new("MATH1341", "Calculus 1", 4.0);
        assert!(course.prerequisites_satisfied_by(&HashSet::new()));
    }

    #[test]
    fn test_dedup_prerequisites() {
        let mut course = Course::new("CS3500", "OOD", 4.0);
        course.prerequisites = vec![
            "CS2510".to_string(),
            "CS1800".to_string(),
            "CS2510".to_string(),
        ];

        course.dedup_prerequisites();
        assert_eq!(course.prerequisites, vec!["CS2510", "CS1800"]);
    }

    #[test]
    fn test_add_regular_term() {
        let mut course = Course::new("CS4500", "Software Development", 4.0);
        course.add_regular_term(2);
        course.add_regular_term(2);

        assert_eq!(course.regular_terms.len(), 1);
        assert!(course.is_offered_in(2));
    }
}
