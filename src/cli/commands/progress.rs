//! Progress command handler

use super::{collect_completed, load_catalog_arg};
use crate::args::{CompletedArgs, OutputFormat};
use course_tracker::config::Config;
use course_tracker::core::progress::{compute_progress, Progress};
use course_tracker::{verbose, warn};
use std::fmt::Write as _;
use std::path::Path;

/// Run the progress command
pub fn run(catalog: &Path, completed: &CompletedArgs, format: OutputFormat, config: &Config) {
    if let Err(err) = progress(catalog, completed, format, config) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn progress(
    catalog_arg: &Path,
    completed_args: &CompletedArgs,
    format: OutputFormat,
    config: &Config,
) -> Result<(), String> {
    let catalog = load_catalog_arg(catalog_arg, config)?;
    let completed = collect_completed(completed_args)?;
    verbose!(
        "✓ Loaded '{}' ({} courses), {} completed",
        catalog.name,
        catalog.course_count(),
        completed.len()
    );

    let progress = compute_progress(&catalog, &completed);
    if !progress.unrecognized.is_empty() {
        warn!(
            "Completed codes not in '{}': {}",
            catalog.name,
            progress.unrecognized.join(", ")
        );
    }

    match format {
        OutputFormat::Text => print!("{}", render_text(&progress)),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&progress)
                .map_err(|e| format!("✗ Failed to serialize progress: {e}"))?;
            println!("{json}");
        }
    }
    Ok(())
}

fn render_text(progress: &Progress) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n=== Progress: {} ===\n", progress.catalog);
    for year in &progress.years {
        let _ = writeln!(
            out,
            "  Year {}: {}/{} courses, {:.1}/{:.1} credits",
            year.year,
            year.completed_courses,
            year.total_courses,
            year.completed_credits,
            year.total_credits
        );
    }
    let _ = writeln!(
        out,
        "\n  Total: {}/{} courses, {:.1}/{:.1} credits ({:.1}%)",
        progress.completed_courses,
        progress.total_courses,
        progress.completed_credits,
        progress.total_credits,
        progress.percent_complete()
    );
    let _ = writeln!(out, "  Remaining: {:.1} credits", progress.remaining_credits());
    if progress.elective_credits > 0.0 {
        let _ = writeln!(out, "  Electives: {:.1} credits", progress.elective_credits);
    }
    if !progress.unrecognized.is_empty() {
        let _ = writeln!(out, "  Unrecognized: {}", progress.unrecognized.join(", "));
    }
    out
}
