//! Validate command handler

use super::load_catalog_arg;
use course_tracker::config::Config;
use course_tracker::core::graph::CurriculumGraph;
use course_tracker::core::validation::{gated_electives, validate_graph};
use course_tracker::{info, warn};
use std::path::PathBuf;

/// Validate each catalog, exiting non-zero if any has problems
pub fn run(catalogs: &[PathBuf], config: &Config) {
    let options = match config.graph_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("✗ Invalid eligibility settings: {e}");
            std::process::exit(1);
        }
    };

    let mut failed = 0usize;
    for catalog_arg in catalogs {
        let catalog = match load_catalog_arg(catalog_arg, config) {
            Ok(catalog) => catalog,
            Err(e) => {
                eprintln!("{e}");
                failed += 1;
                continue;
            }
        };

        let graph = CurriculumGraph::from_catalog(&catalog, options);
        for code in gated_electives(&graph) {
            warn!("Elective {code} in '{}' has prerequisites that are never checked", catalog.name);
            println!("  ! elective {code} lists prerequisites; electives are always offered");
        }

        match validate_graph(&graph) {
            Ok(()) => {
                info!("Catalog '{}' passed validation", catalog.name);
                println!(
                    "✓ {} ({} courses, {} prerequisite links)",
                    catalog.name,
                    graph.course_count(),
                    graph.edge_count()
                );
            }
            Err(problems) => {
                failed += 1;
                println!("✗ {} ({} problems)", catalog.name, problems.len());
                for problem in problems {
                    println!("  - {problem}");
                }
            }
        }
    }

    if failed > 0 {
        std::process::exit(1);
    }
}
