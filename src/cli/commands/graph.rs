//! Graph command handler

use super::load_catalog_arg;
use course_tracker::config::Config;
use course_tracker::core::graph::CurriculumGraph;
use course_tracker::core::validation::topological_order;

/// Print the prerequisite graph and a valid study order, if one exists
pub fn run(catalog: &std::path::Path, config: &Config) {
    let result = config
        .graph_options()
        .map_err(|e| format!("✗ Invalid eligibility settings: {e}"))
        .and_then(|options| {
            load_catalog_arg(catalog, config).map(|c| CurriculumGraph::from_catalog(&c, options))
        });

    let graph = match result {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    println!("{graph}");
    match topological_order(&graph) {
        Ok(order) => println!("Study order: {}", order.join(" → ")),
        Err(e) => println!("✗ {e}"),
    }
}
