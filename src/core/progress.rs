//! Degree progress: how much of a catalog a student has completed

use crate::core::models::Catalog;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Completion totals for one academic year
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YearProgress {
    /// Academic year number
    pub year: u32,
    /// Courses scheduled in the year
    pub total_courses: usize,
    /// Of those, courses completed
    pub completed_courses: usize,
    /// Credits scheduled in the year
    pub total_credits: f32,
    /// Of those, credits completed
    pub completed_credits: f32,
}

/// Completion totals for a whole catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Progress {
    /// Catalog name
    pub catalog: String,
    /// Scheduled (non-elective) courses in the catalog
    pub total_courses: usize,
    /// Scheduled courses completed
    pub completed_courses: usize,
    /// Credits across scheduled courses
    pub total_credits: f32,
    /// Credits of completed scheduled courses
    pub completed_credits: f32,
    /// Credits of completed electives
    pub elective_credits: f32,
    /// Per-year breakdown, ascending
    pub years: Vec<YearProgress>,
    /// Completed codes that match nothing in the catalog
    pub unrecognized: Vec<String>,
}

impl Progress {
    /// Share of scheduled credits completed, in percent (0 for an empty catalog)
    #[must_use]
    pub fn percent_complete(&self) -> f32 {
        if self.total_credits <= 0.0 {
            0.0
        } else {
            (self.completed_credits / self.total_credits * 100.0).min(100.0)
        }
    }

    /// Credits still needed across scheduled courses
    #[must_use]
    pub fn remaining_credits(&self) -> f32 {
        (self.total_credits - self.completed_credits).max(0.0)
    }
}

/// Compute progress of `completed` against `catalog`
///
/// A course scheduled more than once is counted once, under its first year.
/// Codes that are also electives count as electives only
/// ([`Catalog::is_elective`]).
#[must_use]
pub fn compute_progress(catalog: &Catalog, completed: &HashSet<String>) -> Progress {
    let mut progress = Progress {
        catalog: catalog.name.clone(),
        ..Progress::default()
    };
    let mut years: BTreeMap<u32, YearProgress> = BTreeMap::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for (year, _, course) in catalog.iter_scheduled() {
        if catalog.is_elective(&course.code) || !seen.insert(course.code.as_str()) {
            continue;
        }
        let entry = years.entry(year).or_insert_with(|| YearProgress {
            year,
            ..YearProgress::default()
        });
        entry.total_courses += 1;
        entry.total_credits += course.credits;
        progress.total_courses += 1;
        progress.total_credits += course.credits;

        if completed.contains(&course.code) {
            entry.completed_courses += 1;
            entry.completed_credits += course.credits;
            progress.completed_courses += 1;
            progress.completed_credits += course.credits;
        }
    }

    for elective in &catalog.electives {
        if completed.contains(&elective.code) && seen.insert(elective.code.as_str()) {
            progress.elective_credits += elective.credits;
        }
    }

    let mut unrecognized: Vec<String> = completed
        .iter()
        .filter(|code| !seen.contains(code.as_str()))
        .filter(|code| !catalog.is_elective(code))
        .cloned()
        .collect();
    unrecognized.sort();

    progress.years = years.into_values().collect();
    progress.unrecognized = unrecognized;
    progress
}
