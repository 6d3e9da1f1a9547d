//! Eligibility query over a [`CurriculumGraph`]
//!
//! Breadth-first propagation in the style of Kahn's algorithm, adapted to a
//! partially completed curriculum:
//! 1. Seed with every non-elective course that is not completed and whose
//!    prerequisites are satisfied, in insertion order
//! 2. Dequeue, classify by term, then decrement the query-local in-degree of
//!    each dependent; a dependent is queued once its count reaches zero and
//!    its prerequisites pass the explicit check
//! 3. Append every elective that is not completed
//!
//! The explicit prerequisite check decides eligibility. The in-degree count
//! only prunes candidates and may be skewed by dropped or duplicated edges.

use super::{CurriculumGraph, UnknownPrerequisitePolicy};
use crate::core::models::{Availability, Course, EligibilityResult};
use crate::debug;
use std::collections::{HashMap, HashSet, VecDeque};

impl CurriculumGraph {
    /// Courses a student can enroll in next, classified by how likely they are to be offered.
    ///
    /// # Arguments
    /// * `enrolled_term` - Term number the student is enrolling in
    /// * `completed` - Codes of courses the student has completed
    ///
    /// # Returns
    /// Scheduled courses first (regular or irregular, in traversal order),
    /// then electives. No code appears twice and completed courses never appear.
    #[must_use]
    pub fn next_available_courses(
        &self,
        enrolled_term: u32,
        completed: &HashSet<String>,
    ) -> EligibilityResult {
        let mut remaining: HashMap<&str, usize> = self
            .in_degree
            .iter()
            .map(|(code, count)| (code.as_str(), *count))
            .collect();
        let mut queued: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();

        for code in &self.order {
            if self.is_candidate(code, completed) {
                queued.insert(code);
                queue.push_back(code);
            }
        }

        let mut result = EligibilityResult::new();

        while let Some(code) = queue.pop_front() {
            let Some(course) = self.courses.get(code) else {
                debug!("Eligibility: '{code}' has no course record, skipped");
                continue;
            };

            let availability = if course.is_offered_in(enrolled_term) {
                Availability::Regular
            } else {
                Availability::Irregular
            };
            result.push(course.clone(), availability);

            let Some(dependents) = self.adjacency.get(code) else {
                continue;
            };
            for dependent in dependents {
                let Some(count) = remaining.get_mut(dependent.as_str()) else {
                    continue;
                };
                *count = count.saturating_sub(1);
                if *count == 0
                    && !queued.contains(dependent.as_str())
                    && self.is_candidate(dependent, completed)
                {
                    queued.insert(dependent);
                    queue.push_back(dependent);
                }
            }
        }

        for elective in self.electives() {
            if completed.contains(&elective.code) || result.contains(&elective.code) {
                continue;
            }
            result.push(elective.clone(), Availability::Elective);
        }

        debug!(
            "Eligibility for term {enrolled_term} with {} completed: {} courses",
            completed.len(),
            result.len()
        );
        result
    }

    /// Whether every prerequisite of `course` is satisfied under the graph's policy
    #[must_use]
    pub fn prerequisites_satisfied(&self, course: &Course, completed: &HashSet<String>) -> bool {
        match self.options.unknown_prerequisites {
            UnknownPrerequisitePolicy::Block => course.prerequisites_satisfied_by(completed),
            UnknownPrerequisitePolicy::Ignore => course
                .prerequisites
                .iter()
                .all(|p| completed.contains(p) || !self.courses.contains_key(p)),
        }
    }

    /// Non-elective, not completed, known, and with prerequisites satisfied
    fn is_candidate(&self, code: &str, completed: &HashSet<String>) -> bool {
        if self.is_elective(code) || completed.contains(code) {
            return false;
        }
        self.courses
            .get(code)
            .is_some_and(|course| self.prerequisites_satisfied(course, completed))
    }
}
