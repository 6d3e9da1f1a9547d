//! Structural checks on a curriculum graph
//!
//! The graph itself never rejects data; these checks let a caller report
//! problems in a catalog before showing results to a student.

use crate::core::graph::CurriculumGraph;
use std::collections::{HashMap, VecDeque};

/// Validate that every declared prerequisite refers to a registered course
///
/// # Errors
/// Returns `Err` with one message per unresolved reference
pub fn validate_prerequisite_references(graph: &CurriculumGraph) -> Result<(), Vec<String>> {
    let mut invalid = Vec::new();

    for course in graph.courses() {
        for prereq in &course.prerequisites {
            if prereq == &course.code {
                invalid.push(format!("Course '{}': lists itself as a prerequisite", course.code));
            } else if !graph.contains_course(prereq) {
                invalid.push(format!(
                    "Course '{}': prerequisite '{}' not found",
                    course.code, prereq
                ));
            }
        }
    }

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(invalid)
    }
}

/// Electives that declare prerequisites; those prerequisites are never enforced
#[must_use]
pub fn gated_electives(graph: &CurriculumGraph) -> Vec<String> {
    graph
        .electives()
        .filter(|e| !e.prerequisites.is_empty())
        .map(|e| e.code.clone())
        .collect()
}

/// Order courses so that every known prerequisite precedes its dependents (Kahn's algorithm)
///
/// Only declared prerequisites that are registered courses are considered.
/// Ties are broken by insertion order.
///
/// # Errors
/// Returns an error naming the courses left on a cycle
pub fn topological_order(graph: &CurriculumGraph) -> Result<Vec<String>, String> {
    let mut indegree: HashMap<&str, usize> = HashMap::new();
    let mut outgoing: HashMap<&str, Vec<&str>> = HashMap::new();

    for course in graph.courses() {
        indegree.entry(course.code.as_str()).or_insert(0);
        for prereq in &course.prerequisites {
            if graph.contains_course(prereq) {
                outgoing
                    .entry(prereq.as_str())
                    .or_default()
                    .push(course.code.as_str());
                *indegree.entry(course.code.as_str()).or_insert(0) += 1;
            }
        }
    }

    let mut queue: VecDeque<&str> = graph
        .courses()
        .map(|c| c.code.as_str())
        .filter(|code| indegree.get(code).copied().unwrap_or(0) == 0)
        .collect();

    let mut order = Vec::with_capacity(indegree.len());

    while let Some(code) = queue.pop_front() {
        order.push(code.to_string());

        if let Some(children) = outgoing.get(code) {
            for child in children {
                let entry = indegree
                    .get_mut(child)
                    .ok_or_else(|| format!("Course '{child}' missing from indegree map"))?;
                *entry -= 1;
                if *entry == 0 {
                    queue.push_back(child);
                }
            }
        }
    }

    if order.len() == indegree.len() {
        Ok(order)
    } else {
        let mut stuck: Vec<&str> = indegree
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(code, _)| *code)
            .collect();
        stuck.sort_unstable();
        Err(format!(
            "Prerequisite cycle detected involving: {}",
            stuck.join(", ")
        ))
    }
}

/// Run every check and collect all problems
///
/// # Errors
/// Returns `Err` with every reference and cycle problem found
pub fn validate_graph(graph: &CurriculumGraph) -> Result<(), Vec<String>> {
    let mut problems = validate_prerequisite_references(graph)
        .err()
        .unwrap_or_default();

    if let Err(cycle) = topological_order(graph) {
        problems.push(cycle);
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn graph_of(courses: &[(&str, &[&str])]) -> CurriculumGraph {
        let mut graph = CurriculumGraph::default();
        for (code, prereqs) in courses {
            graph.add_course(Course::new(*code, *code, 3.0).with_prerequisites(prereqs.iter().copied()));
        }
        graph
    }

    #[test]
    fn test_valid_graph() {
        let graph = graph_of(&[("A", &[]), ("B", &["A"]), ("C", &["A", "B"])]);
        assert!(validate_graph(&graph).is_ok());
        assert_eq!(topological_order(&graph).unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_topological_order_is_independent_of_insertion() {
        let graph = graph_of(&[("C", &["B"]), ("B", &["A"]), ("A", &[])]);
        assert_eq!(topological_order(&graph).unwrap(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_unknown_reference() {
        let graph = graph_of(&[("C", &["Z"])]);
        let errors = validate_prerequisite_references(&graph).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("'Z' not found"));
    }

    #[test]
    fn test_self_reference() {
        let graph = graph_of(&[("A", &["A"])]);
        let errors = validate_graph(&graph).unwrap_err();
        assert!(errors.iter().any(|e| e.contains("itself")));
        assert!(errors.iter().any(|e| e.contains("cycle")));
    }

    #[test]
    fn test_cycle_detected() {
        let graph = graph_of(&[("A", &["C"]), ("B", &["A"]), ("C", &["B"]), ("D", &[])]);
        let err = topological_order(&graph).unwrap_err();
        assert!(err.contains("A, B, C"));
        assert!(!err.contains('D'));
    }

    #[test]
    fn test_gated_electives() {
        let mut graph = graph_of(&[("A", &[])]);
        graph.add_elective(Course::new("E1", "Free", 3.0));
        graph.add_elective(Course::new("E2", "Gated", 3.0).with_prerequisites(["A"]));

        assert_eq!(gated_electives(&graph), vec!["E2".to_string()]);
    }
}
