//! Prerequisite graph for a curriculum
//!
//! The graph keeps forward edges (`prerequisite -> dependents`) and a
//! construction-time in-degree baseline counting the *known* prerequisites of
//! every course. Eligibility queries (see [`query`]) copy that baseline and
//! never write back to the graph, so a built graph can be queried any number
//! of times, from any number of threads.

pub mod options;
pub mod query;

pub use options::{EdgeResolution, GraphOptions, UnknownPrerequisitePolicy};

use crate::core::models::{Catalog, Course};
use crate::{debug, info};
use std::collections::{HashMap, HashSet};

/// Directed graph of courses and their prerequisite edges
#[derive(Debug, Clone, Default)]
pub struct CurriculumGraph {
    options: GraphOptions,

    /// Course code -> course; every key equals its value's `code`
    courses: HashMap<String, Course>,

    /// Registered course codes in first-insertion order
    order: Vec<String>,

    /// Prerequisite code -> codes of courses that list it
    adjacency: HashMap<String, Vec<String>>,

    /// Course code -> number of wired prerequisite edges
    in_degree: HashMap<String, usize>,

    /// `(prerequisite, course)` -> edges added through `add_prerequisite`
    explicit_edges: HashMap<(String, String), usize>,

    /// Elective codes in the order they were added
    electives: Vec<String>,
    elective_set: HashSet<String>,
}

impl CurriculumGraph {
    /// Create an empty graph using `options`
    #[must_use]
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Build a graph from a grouped catalog.
    ///
    /// Scheduled courses are visited year by year, term by term, followed by
    /// the electives. With [`EdgeResolution::OrderIndependent`] every node is
    /// registered before any edge is wired; with
    /// [`EdgeResolution::InsertionOrder`] courses go through [`add_course`]
    /// one at a time and edges to prerequisites that arrive later are lost.
    ///
    /// [`add_course`]: Self::add_course
    #[must_use]
    pub fn from_catalog(catalog: &Catalog, options: GraphOptions) -> Self {
        let mut graph = Self::new(options);

        match options.edge_resolution {
            EdgeResolution::InsertionOrder => {
                for (_, _, course) in catalog.iter_scheduled() {
                    graph.add_course(course.clone());
                }
                for elective in &catalog.electives {
                    graph.add_elective(elective.clone());
                }
            }
            EdgeResolution::OrderIndependent => {
                for (_, _, course) in catalog.iter_scheduled() {
                    graph.register(course.clone());
                }
                for elective in &catalog.electives {
                    graph.mark_elective(&elective.code);
                    graph.register(elective.clone());
                }
                for code in graph.order.clone() {
                    graph.wire(&code);
                }
            }
        }

        info!(
            "Built curriculum graph '{}': {} courses ({} electives), {} edges",
            catalog.name,
            graph.course_count(),
            graph.electives.len(),
            graph.edge_count()
        );
        graph
    }

    /// Register a course, overwriting any earlier metadata stored under its code.
    ///
    /// The course's in-degree restarts at zero and only its own declared
    /// prerequisites are counted, so adding the same course twice never
    /// double-counts an edge. Prerequisites that are not registered yet are
    /// skipped; under [`EdgeResolution::OrderIndependent`] those edges are
    /// wired later, when the prerequisite itself is added.
    pub fn add_course(&mut self, course: Course) {
        let code = course.code.clone();
        if self.courses.contains_key(&code) {
            self.unwire(&code);
        }
        self.register(course);
        self.wire(&code);
        if self.options.edge_resolution == EdgeResolution::OrderIndependent {
            self.backfill_dependents(&code);
        }
    }

    /// Register an elective.
    ///
    /// Electives are kept in the course map and adjacency for bookkeeping but
    /// are never gated by prerequisites during queries. Elective status sticks
    /// even if the code is later added as a scheduled course, matching
    /// [`Catalog::is_elective`].
    pub fn add_elective(&mut self, course: Course) {
        self.mark_elective(&course.code);
        self.add_course(course);
    }

    /// Add an explicit edge `prerequisite_code -> course_code`.
    ///
    /// Duplicate calls are not collapsed: each call adds one more edge and
    /// one more unit of in-degree. The stored [`Course::prerequisites`] list is
    /// left untouched, so eligibility is unaffected by edges added this way.
    pub fn add_prerequisite(&mut self, course_code: &str, prerequisite_code: &str) {
        self.adjacency.entry(course_code.to_string()).or_default();
        self.adjacency
            .entry(prerequisite_code.to_string())
            .or_default()
            .push(course_code.to_string());
        *self.in_degree.entry(course_code.to_string()).or_insert(0) += 1;
        *self
            .explicit_edges
            .entry((prerequisite_code.to_string(), course_code.to_string()))
            .or_insert(0) += 1;
    }

    /// Insert the node without touching edges
    fn register(&mut self, mut course: Course) {
        course.dedup_prerequisites();
        let code = course.code.clone();
        if !self.courses.contains_key(&code) {
            self.order.push(code.clone());
        }
        self.adjacency.entry(code.clone()).or_default();
        self.in_degree.insert(code.clone(), 0);
        self.courses.insert(code, course);
    }

    fn mark_elective(&mut self, code: &str) {
        if self.elective_set.insert(code.to_string()) {
            self.electives.push(code.to_string());
        }
    }

    /// Wire edges from the course's known prerequisites, resetting its in-degree.
    ///
    /// Explicit edges into the course that are still present keep counting.
    fn wire(&mut self, code: &str) {
        let Some(course) = self.courses.get(code) else {
            return;
        };
        let prerequisites = course.prerequisites.clone();

        let mut count: usize = self
            .explicit_edges
            .iter()
            .filter(|((_, course), _)| course == code)
            .map(|(_, n)| n)
            .sum();
        for prereq in &prerequisites {
            if !self.courses.contains_key(prereq) {
                debug!("{code}: prerequisite '{prereq}' is not registered, edge dropped");
                continue;
            }
            self.adjacency
                .entry(prereq.clone())
                .or_default()
                .push(code.to_string());
            count += 1;
        }
        self.in_degree.insert(code.to_string(), count);
    }

    /// Remove every incoming edge of `code`, explicit ones included
    fn unwire(&mut self, code: &str) {
        for dependents in self.adjacency.values_mut() {
            dependents.retain(|d| d != code);
        }
        self.explicit_edges.retain(|(_, course), _| course != code);
        self.in_degree.insert(code.to_string(), 0);
    }

    /// Wire edges from `code` to registered courses that list it but were added earlier
    fn backfill_dependents(&mut self, code: &str) {
        let outgoing = self.adjacency.get(code).map(Vec::as_slice).unwrap_or_default();
        // A declared edge is already wired when the dependent appears more often than its explicit edges
        let declared_wired = |dependent: &String| {
            let wired = outgoing.iter().filter(|d| *d == dependent).count();
            let explicit = self
                .explicit_edges
                .get(&(code.to_string(), dependent.clone()))
                .copied()
                .unwrap_or(0);
            wired > explicit
        };

        let missing: Vec<String> = self
            .order
            .iter()
            .filter(|dependent| dependent.as_str() != code && !declared_wired(*dependent))
            .filter(|dependent| {
                self.courses
                    .get(*dependent)
                    .is_some_and(|c| c.prerequisites.iter().any(|p| p == code))
            })
            .cloned()
            .collect();

        for dependent in missing {
            debug!("{dependent}: late prerequisite '{code}' wired");
            self.adjacency
                .entry(code.to_string())
                .or_default()
                .push(dependent.clone());
            *self.in_degree.entry(dependent).or_insert(0) += 1;
        }
    }

    /// Options the graph was built with
    #[must_use]
    pub const fn options(&self) -> GraphOptions {
        self.options
    }

    /// Look up a course by code
    #[must_use]
    pub fn course(&self, code: &str) -> Option<&Course> {
        self.courses.get(code)
    }

    /// Whether `code` is a registered course
    #[must_use]
    pub fn contains_course(&self, code: &str) -> bool {
        self.courses.contains_key(code)
    }

    /// Number of registered courses, electives included
    #[must_use]
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    /// Total number of forward edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Registered courses in insertion order
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.order.iter().filter_map(|code| self.courses.get(code))
    }

    /// Electives in the order they were added
    pub fn electives(&self) -> impl Iterator<Item = &Course> {
        self.electives.iter().filter_map(|code| self.courses.get(code))
    }

    /// Whether `code` was registered as an elective
    #[must_use]
    pub fn is_elective(&self, code: &str) -> bool {
        self.elective_set.contains(code)
    }

    /// Declared prerequisites of a course
    #[must_use]
    pub fn prerequisites_of(&self, code: &str) -> Option<&[String]> {
        self.courses.get(code).map(|c| c.prerequisites.as_slice())
    }

    /// Courses wired as dependents of `code`
    #[must_use]
    pub fn dependents_of(&self, code: &str) -> Option<&[String]> {
        self.adjacency.get(code).map(Vec::as_slice)
    }

    /// Construction-time count of wired prerequisite edges into `code`
    #[must_use]
    pub fn baseline_in_degree(&self, code: &str) -> Option<usize> {
        self.in_degree.get(code).copied()
    }
}

impl std::fmt::Display for CurriculumGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Curriculum graph ({} courses):", self.course_count())?;
        writeln!(f)?;

        for course in self.courses() {
            let marker = if self.is_elective(&course.code) {
                " [elective]"
            } else {
                ""
            };
            if course.prerequisites.is_empty() {
                writeln!(f, "  {}{marker} ← (no prerequisites)", course.code)?;
            } else {
                let prereqs = course.prerequisites.join(", ");
                writeln!(f, "  {}{marker} ← {prereqs}", course.code)?;
            }
        }

        Ok(())
    }
}
