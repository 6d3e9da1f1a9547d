//! Integration tests for eligibility queries over a curriculum graph

use course_tracker::core::graph::{
    CurriculumGraph, EdgeResolution, GraphOptions, UnknownPrerequisitePolicy,
};
use course_tracker::core::models::{Availability, Catalog, Course};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

fn completed(codes: &[&str]) -> HashSet<String> {
    codes.iter().map(|c| (*c).to_string()).collect()
}

/// A (term 1) -> B (term 1), plus elective E
fn small_catalog() -> Catalog {
    let mut catalog = Catalog::new("Small");
    catalog.add_course(1, 1, Course::new("A", "Alpha", 4.0).with_regular_terms([1]));
    catalog.add_course(
        1,
        2,
        Course::new("B", "Beta", 4.0)
            .with_prerequisites(["A"])
            .with_regular_terms([1]),
    );
    catalog.add_elective(Course::new("E", "Elective", 3.0));
    catalog
}

/// Year 1: A, B; year 2: C (A, B), D (C); year 3: F (D, A)
fn chain_catalog() -> Catalog {
    let mut catalog = Catalog::new("Chain");
    catalog.add_course(1, 1, Course::new("A", "Alpha", 4.0).with_regular_terms([1, 2]));
    catalog.add_course(1, 1, Course::new("B", "Beta", 4.0).with_regular_terms([2]));
    catalog.add_course(
        2,
        1,
        Course::new("C", "Gamma", 4.0)
            .with_prerequisites(["A", "B"])
            .with_regular_terms([1]),
    );
    catalog.add_course(
        2,
        2,
        Course::new("D", "Delta", 4.0)
            .with_prerequisites(["C"])
            .with_regular_terms([2]),
    );
    catalog.add_course(
        3,
        1,
        Course::new("F", "Phi", 4.0)
            .with_prerequisites(["D", "A"])
            .with_regular_terms([1, 2, 3]),
    );
    catalog.add_elective(Course::new("X", "Pottery", 2.0));
    catalog.add_elective(Course::new("Y", "Chess", 2.0).with_prerequisites(["F"]));
    catalog
}

fn build(catalog: &Catalog) -> CurriculumGraph {
    CurriculumGraph::from_catalog(catalog, GraphOptions::default())
}

#[test]
fn scenario_nothing_completed_only_roots_are_eligible() {
    let graph = build(&small_catalog());
    let result = graph.next_available_courses(1, &completed(&[]));

    assert_eq!(result.codes(), vec!["A", "E"]);
    assert_eq!(result.availability_of("A"), Some(Availability::Regular));
    assert!(!result.contains("B"));
}

#[test]
fn scenario_completed_prerequisite_unlocks_dependent() {
    let graph = build(&small_catalog());
    let result = graph.next_available_courses(1, &completed(&["A"]));

    assert_eq!(result.codes(), vec!["B", "E"]);
    assert_eq!(result.availability_of("B"), Some(Availability::Regular));
}

#[test]
fn scenario_off_term_course_is_irregular() {
    let graph = build(&small_catalog());
    let result = graph.next_available_courses(2, &completed(&["A"]));

    assert_eq!(result.availability_of("B"), Some(Availability::Irregular));
}

#[test]
fn scenario_partial_prerequisites_block() {
    let graph = build(&chain_catalog());
    let result = graph.next_available_courses(1, &completed(&["A"]));

    // C needs A and B
    assert!(!result.contains("C"));
    assert!(result.contains("B"));
}

#[test]
fn scenario_elective_listed_regardless_of_term_and_prerequisites() {
    let graph = build(&chain_catalog());
    for term in 1..=3 {
        let result = graph.next_available_courses(term, &completed(&[]));
        assert_eq!(result.availability_of("X"), Some(Availability::Elective));
        // Y declares F, which is never enforced for electives
        assert_eq!(result.availability_of("Y"), Some(Availability::Elective));
    }

    let result = graph.next_available_courses(1, &completed(&["X"]));
    assert!(!result.contains("X"));
}

#[test]
fn prerequisites_of_every_scheduled_result_are_completed() {
    let graph = build(&chain_catalog());
    let sets = [
        completed(&[]),
        completed(&["A"]),
        completed(&["A", "B"]),
        completed(&["A", "B", "C"]),
        completed(&["A", "B", "C", "D"]),
        completed(&["D"]),
    ];

    for done in &sets {
        let result = graph.next_available_courses(1, done);
        for entry in result.filter_by(Availability::Regular) {
            assert!(entry.course.prerequisites.iter().all(|p| done.contains(p)));
        }
        for entry in result.filter_by(Availability::Irregular) {
            assert!(entry.course.prerequisites.iter().all(|p| done.contains(p)));
        }
    }
}

#[test]
fn completed_courses_never_returned() {
    let graph = build(&chain_catalog());
    let done = completed(&["A", "B", "X"]);
    let result = graph.next_available_courses(1, &done);

    for code in result.codes() {
        assert!(!done.contains(code), "{code} was completed");
    }
}

#[test]
fn completing_more_never_relocks_a_course() {
    let graph = build(&chain_catalog());
    let nested = [
        completed(&[]),
        completed(&["A"]),
        completed(&["A", "B"]),
        completed(&["A", "B", "C"]),
        completed(&["A", "B", "C", "D"]),
        completed(&["A", "B", "C", "D", "F"]),
    ];

    for (i, smaller) in nested.iter().enumerate() {
        for larger in &nested[i..] {
            for term in 1..=3 {
                let before = graph.next_available_courses(term, smaller);
                let after = graph.next_available_courses(term, larger);

                for entry in before.iter() {
                    if entry.availability == Availability::Elective
                        || larger.contains(&entry.course.code)
                    {
                        continue;
                    }
                    assert!(
                        after.contains(&entry.course.code),
                        "{} eligible with {smaller:?} but not with {larger:?}",
                        entry.course.code
                    );
                }
            }
        }
    }
}

#[test]
fn scheduled_elective_is_listed_once_as_elective() {
    let mut catalog = small_catalog();
    catalog.add_course(1, 1, Course::new("E", "Elective (scheduled)", 3.0).with_regular_terms([1]));
    let graph = build(&catalog);

    let result = graph.next_available_courses(1, &completed(&[]));
    assert_eq!(result.codes(), vec!["A", "E"]);
    assert_eq!(result.availability_of("E"), Some(Availability::Elective));
    assert!(catalog.is_elective("E"));
}

#[test]
fn no_duplicates_in_result() {
    let graph = build(&chain_catalog());
    let result = graph.next_available_courses(2, &completed(&["A", "B"]));

    let codes = result.codes();
    let unique: HashSet<&str> = codes.iter().copied().collect();
    assert_eq!(codes.len(), unique.len());
}

#[test]
fn repeated_queries_are_identical() {
    let graph = build(&chain_catalog());
    let done = completed(&["A", "B"]);

    let first = graph.next_available_courses(1, &done);
    let _ = graph.next_available_courses(2, &completed(&[]));
    let _ = graph.next_available_courses(3, &completed(&["A", "B", "C", "D"]));
    let again = graph.next_available_courses(1, &done);

    assert_eq!(first, again);
    assert_eq!(graph.baseline_in_degree("C"), Some(2));
}

#[test]
fn classification_follows_regular_terms() {
    let graph = build(&chain_catalog());
    let done = completed(&["A", "B", "C", "D"]);

    for term in 1..=4 {
        let result = graph.next_available_courses(term, &done);
        for entry in result.iter() {
            if entry.availability == Availability::Elective {
                continue;
            }
            let expected = if entry.course.regular_terms.contains(&term) {
                Availability::Regular
            } else {
                Availability::Irregular
            };
            assert_eq!(entry.availability, expected, "{} in term {term}", entry.course.code);
        }
    }
}

#[test]
fn scheduled_courses_precede_electives_in_insertion_order() {
    let graph = build(&chain_catalog());
    let result = graph.next_available_courses(1, &completed(&[]));

    assert_eq!(result.codes(), vec!["A", "B", "X", "Y"]);
}

#[test]
fn courses_listed_before_their_prerequisites_still_unlock() {
    // Catalog order: D is scheduled before its prerequisite C
    let mut catalog = Catalog::new("Skewed");
    catalog.add_course(1, 1, Course::new("D", "Delta", 4.0).with_prerequisites(["C"]));
    catalog.add_course(2, 1, Course::new("C", "Gamma", 4.0));

    for resolution in [EdgeResolution::OrderIndependent, EdgeResolution::InsertionOrder] {
        let options = GraphOptions::new(UnknownPrerequisitePolicy::Block, resolution);
        let graph = CurriculumGraph::from_catalog(&catalog, options);

        let before = graph.next_available_courses(1, &completed(&[]));
        assert_eq!(before.codes(), vec!["C"], "{resolution}");

        let after = graph.next_available_courses(1, &completed(&["C"]));
        assert_eq!(after.codes(), vec!["D"], "{resolution}");
    }
}

#[test]
fn edge_resolution_controls_late_prerequisite_edges() {
    let mut catalog = Catalog::new("Skewed");
    catalog.add_course(1, 1, Course::new("D", "Delta", 4.0).with_prerequisites(["C"]));
    catalog.add_course(2, 1, Course::new("C", "Gamma", 4.0));

    let independent = CurriculumGraph::from_catalog(&catalog, GraphOptions::default());
    assert_eq!(independent.baseline_in_degree("D"), Some(1));
    assert_eq!(independent.dependents_of("C"), Some(&["D".to_string()][..]));

    let options = GraphOptions::new(
        UnknownPrerequisitePolicy::Block,
        EdgeResolution::InsertionOrder,
    );
    let ordered = CurriculumGraph::from_catalog(&catalog, options);
    assert_eq!(ordered.baseline_in_degree("D"), Some(0));
    assert_eq!(ordered.dependents_of("C").map(<[String]>::len), Some(0));
}

#[test]
fn unknown_prerequisite_policy() {
    let mut catalog = Catalog::new("Dangling");
    catalog.add_course(1, 1, Course::new("A", "Alpha", 4.0).with_prerequisites(["GHOST"]));

    let blocking = CurriculumGraph::from_catalog(&catalog, GraphOptions::default());
    assert!(blocking.next_available_courses(1, &completed(&[])).is_empty());
    assert!(blocking
        .next_available_courses(1, &completed(&["GHOST"]))
        .contains("A"));

    let options = GraphOptions::new(
        UnknownPrerequisitePolicy::Ignore,
        EdgeResolution::OrderIndependent,
    );
    let lenient = CurriculumGraph::from_catalog(&catalog, options);
    assert_eq!(lenient.next_available_courses(1, &completed(&[])).codes(), vec!["A"]);
}

#[test]
fn adding_same_course_twice_keeps_one_edge() {
    let mut graph = CurriculumGraph::default();
    graph.add_course(Course::new("A", "Alpha", 4.0));
    graph.add_course(Course::new("B", "Beta", 4.0).with_prerequisites(["A"]));
    graph.add_course(Course::new("B", "Beta (revised)", 5.0).with_prerequisites(["A"]));

    assert_eq!(graph.course_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.baseline_in_degree("B"), Some(1));
    assert_eq!(graph.course("B").map(|c| c.title.as_str()), Some("Beta (revised)"));

    let result = graph.next_available_courses(1, &completed(&["A"]));
    assert_eq!(result.codes(), vec!["B"]);
}

#[test]
fn empty_graph_returns_empty_result() {
    let graph = CurriculumGraph::default();
    assert!(graph.next_available_courses(1, &completed(&["A"])).is_empty());
}

#[test]
fn graph_is_shareable_across_threads() {
    let graph = Arc::new(build(&chain_catalog()));
    let expected = graph.next_available_courses(1, &completed(&["A", "B"]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let graph = Arc::clone(&graph);
            thread::spawn(move || graph.next_available_courses(1, &completed(&["A", "B"])))
        })
        .collect();

    for handle in handles {
        let result = handle.join().expect("query thread panicked");
        assert_eq!(result, expected);
    }
}
