//! Eligibility query output

use super::Course;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How likely an eligible course is to actually be offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Eligible and regularly scheduled in the enrolled term
    Regular,
    /// Eligible but not typically offered in the enrolled term
    Irregular,
    /// Elective; never gated by prerequisites
    Elective,
}

impl Availability {
    /// Stable lowercase tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Irregular => "irregular",
            Self::Elective => "elective",
        }
    }

    /// Color a front end uses for this classification
    #[must_use]
    pub const fn display_color(self) -> &'static str {
        match self {
            Self::Regular => "green",
            Self::Irregular => "orange",
            Self::Elective => "blue",
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A course paired with its availability classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EligibleCourse {
    /// The eligible course
    pub course: Course,
    /// Its classification for the queried term
    pub availability: Availability,
}

/// Ordered result of an eligibility query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EligibilityResult {
    entries: Vec<EligibleCourse>,
}

impl EligibilityResult {
    /// Create an empty result
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry (no duplicate check; callers own that invariant)
    pub fn push(&mut self, course: Course, availability: Availability) {
        self.entries.push(EligibleCourse {
            course,
            availability,
        });
    }

    /// Entries in result order
    pub fn iter(&self) -> std::slice::Iter<'_, EligibleCourse> {
        self.entries.iter()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the result is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Course codes in result order
    #[must_use]
    pub fn codes(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.course.code.as_str()).collect()
    }

    /// Whether `code` appears in the result
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|e| e.course.code == code)
    }

    /// Classification of `code`, if present
    #[must_use]
    pub fn availability_of(&self, code: &str) -> Option<Availability> {
        self.entries
            .iter()
            .find(|e| e.course.code == code)
            .map(|e| e.availability)
    }

    /// Entries with the given classification, in result order
    pub fn filter_by(&self, availability: Availability) -> impl Iterator<Item = &EligibleCourse> {
        self.entries
            .iter()
            .filter(move |e| e.availability == availability)
    }

    /// Sum of credits over all entries
    #[must_use]
    pub fn total_credits(&self) -> f32 {
        self.entries.iter().map(|e| e.course.credits).sum()
    }

    /// Consume into the underlying entries
    #[must_use]
    pub fn into_vec(self) -> Vec<EligibleCourse> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a EligibilityResult {
    type Item = &'a EligibleCourse;
    type IntoIter = std::slice::Iter<'a, EligibleCourse>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl fmt::Display for EligibilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "  (no eligible courses)");
        }
        for entry in &self.entries {
            writeln!(
                f,
                "  [{:<9}] {:<10} {} ({:.1} cr)",
                entry.availability.as_str(),
                entry.course.code,
                entry.course.title,
                entry.course.credits
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EligibilityResult {
        let mut result = EligibilityResult::new();
        result.push(Course::new("A", "Alpha", 4.0), Availability::Regular);
        result.push(Course::new("B", "Beta", 3.0), Availability::Irregular);
        result.push(Course::new("E", "Elective", 2.0), Availability::Elective);
        result
    }

    #[test]
    fn test_availability_tags() {
        assert_eq!(Availability::Regular.as_str(), "regular");
        assert_eq!(Availability::Irregular.to_string(), "irregular");
        assert_eq!(Availability::Elective.display_color(), "blue");
        assert_eq!(Availability::Regular.display_color(), "green");
        assert_eq!(Availability::Irregular.display_color(), "orange");
    }

    #[test]
    fn test_result_accessors() {
        let result = sample();

        assert_eq!(result.len(), 3);
        assert_eq!(result.codes(), vec!["A", "B", "E"]);
        assert!(result.contains("B"));
        assert!(!result.contains("Z"));
        assert_eq!(result.availability_of("E"), Some(Availability::Elective));
        assert_eq!(result.availability_of("Z"), None);
        assert!((result.total_credits() - 9.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_filter_by() {
        let result = sample();
        let regular: Vec<&str> = result
            .filter_by(Availability::Regular)
            .map(|e| e.course.code.as_str())
            .collect();
        assert_eq!(regular, vec!["A"]);
    }

    #[test]
    fn test_serializes_as_list_with_lowercase_tags() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"availability\":\"irregular\""));
    }

    #[test]
    fn test_display_empty() {
        let result = EligibilityResult::new();
        assert!(result.to_string().contains("no eligible courses"));
    }
}
