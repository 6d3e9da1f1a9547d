//! Command-line interface entry point for `coursetracker`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_tracker::config::Config;
use course_tracker::info;
use course_tracker::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // `stored` is what `config set/unset` persist; `config` carries this run's overrides
    let mut stored = Config::load();
    let defaults = Config::from_defaults();
    let config = stored.with_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse().ok())
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut stored, &defaults);
        }
        Command::Eligible {
            catalog,
            term,
            completed,
            format,
            output,
        } => {
            commands::eligible::run(&catalog, term, &completed, format, output.as_deref(), &config);
        }
        Command::Progress {
            catalog,
            completed,
            format,
        } => {
            commands::progress::run(&catalog, &completed, format, &config);
        }
        Command::Validate { catalogs } => {
            commands::validate::run(&catalogs, &config);
        }
        Command::Graph { catalog } => {
            commands::graph::run(&catalog, &config);
        }
    }
}
