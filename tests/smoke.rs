//! Integration smoke tests for `course_tracker`

use course_tracker::core::models::{Catalog, Course};
use course_tracker::core::CurriculumGraph;
use course_tracker::get_version;
use std::collections::HashSet;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn build_and_query_end_to_end() {
    let mut catalog = Catalog::new("Smoke");
    catalog.add_course(1, 1, Course::new("A", "Alpha", 4.0).with_regular_terms([1]));
    catalog.add_elective(Course::new("E", "Elective", 2.0));

    let graph = CurriculumGraph::from_catalog(&catalog, Default::default());
    let result = graph.next_available_courses(1, &HashSet::new());

    assert_eq!(result.len(), 2);
    let json = serde_json::to_string(&result).expect("serializable");
    assert!(json.contains("\"availability\":\"regular\""));
    assert!(json.contains("\"availability\":\"elective\""));
}
