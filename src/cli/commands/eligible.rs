//! Eligible command handler

use super::{collect_completed, load_catalog_arg};
use crate::args::{CompletedArgs, OutputFormat};
use course_tracker::config::Config;
use course_tracker::core::graph::CurriculumGraph;
use course_tracker::core::models::{Availability, EligibilityResult};
use course_tracker::{error, info, verbose};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Run the eligible command.
///
/// # Arguments
/// * `catalog` - Catalog path or name
/// * `term` - Enrollment term
/// * `completed` - Completed-course inputs
/// * `format` - Output format
/// * `output` - Optional output file (relative paths go under `out_dir`); stdout when omitted
/// * `config` - Loaded configuration (policies and paths)
pub fn run(
    catalog: &Path,
    term: u32,
    completed: &CompletedArgs,
    format: OutputFormat,
    output: Option<&Path>,
    config: &Config,
) {
    if let Err(err) = eligible(catalog, term, completed, format, output, config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn eligible(
    catalog_arg: &Path,
    term: u32,
    completed_args: &CompletedArgs,
    format: OutputFormat,
    output: Option<&Path>,
    config: &Config,
) -> Result<(), String> {
    let options = config
        .graph_options()
        .map_err(|e| format!("✗ Invalid eligibility settings: {e}"))?;
    let catalog = load_catalog_arg(catalog_arg, config)?;
    let completed = collect_completed(completed_args)?;

    verbose!(
        "✓ Loaded '{}' ({} courses), {} completed, term {term}",
        catalog.name,
        catalog.course_count(),
        completed.len()
    );

    let graph = CurriculumGraph::from_catalog(&catalog, options);
    let result = graph.next_available_courses(term, &completed);

    let rendered = match format {
        OutputFormat::Text => render_text(&catalog.name, term, &result),
        OutputFormat::Json => serde_json::to_string_pretty(&result)
            .map_err(|e| format!("✗ Failed to serialize result: {e}"))?,
    };

    if let Some(output) = output {
        let path = resolve_output_path(output, config);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                format!("✗ Failed to create output directory {}: {e}", parent.display())
            })?;
        }
        fs::write(&path, &rendered).map_err(|e| {
            error!("Failed to write {}: {e}", path.display());
            format!("✗ Failed to write {}: {e}", path.display())
        })?;
        println!("✓ Eligible courses written to: {}", path.display());
        info!("Wrote {} eligible courses to {}", result.len(), path.display());
    } else {
        print!("{rendered}");
    }
    Ok(())
}

/// Relative output paths land in the configured `out_dir`
fn resolve_output_path(output: &Path, config: &Config) -> PathBuf {
    if output.is_relative() && !config.paths.out_dir.is_empty() {
        Path::new(&config.paths.out_dir).join(output)
    } else {
        output.to_path_buf()
    }
}

fn render_text(catalog_name: &str, term: u32, result: &EligibilityResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Eligible courses for {catalog_name}, term {term} ===\n");
    let _ = write!(out, "{result}");

    let regular = result.filter_by(Availability::Regular).count();
    let irregular = result.filter_by(Availability::Irregular).count();
    let electives = result.filter_by(Availability::Elective).count();
    let _ = writeln!(
        out,
        "\n{regular} regular, {irregular} irregular, {electives} elective ({:.1} credits total)",
        result.total_credits()
    );
    out
}
