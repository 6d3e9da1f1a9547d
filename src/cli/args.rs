//! CLI argument definitions for `coursetracker`

use clap::{builder::BoolishValueParser, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_tracker::config::ConfigOverrides;
use course_tracker::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Level::from(*self))
    }
}

/// Output format for query results
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Completed-course inputs shared by several subcommands
#[derive(Debug, Clone, Default, Args)]
pub struct CompletedArgs {
    /// Completed course codes (comma separated, repeatable)
    #[arg(short, long, value_name = "CODES", value_delimiter = ',')]
    pub completed: Vec<String>,

    /// File listing completed course codes (one per line or comma separated)
    #[arg(long, value_name = "FILE")]
    pub completed_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `edge_resolution`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// List the courses a student can enroll in next.
    ///
    /// Courses are tagged regular (offered this term), irregular (eligible but
    /// not usually offered this term) or elective.
    Eligible {
        /// Catalog TOML file, or a catalog name inside `catalogs_dir`
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Term number the student is enrolling in
        #[arg(short, long, value_name = "TERM")]
        term: u32,

        #[command(flatten)]
        completed: CompletedArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the result to FILE instead of stdout (relative to `out_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Summarize credits and courses completed against a catalog.
    Progress {
        /// Catalog TOML file, or a catalog name inside `catalogs_dir`
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        #[command(flatten)]
        completed: CompletedArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Check a catalog for unknown prerequisites and cycles.
    Validate {
        /// Catalog TOML files or names
        #[arg(value_name = "CATALOGS", num_args = 1..)]
        catalogs: Vec<PathBuf>,
    },
    /// Print the prerequisite graph of a catalog.
    Graph {
        /// Catalog TOML file, or a catalog name inside `catalogs_dir`
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "coursetracker",
    about = "Track degree progress and find the courses you can take next",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug", global = true)]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalogs directory
    #[arg(long = "catalogs-dir", value_name = "DIR")]
    pub catalogs_dir: Option<PathBuf>,

    /// Override config output directory
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override how unknown prerequisite codes are treated (block|ignore)
    #[arg(long = "unknown-prereqs", value_name = "POLICY")]
    pub unknown_prerequisites: Option<String>,

    /// Override how prerequisite edges are wired (order-independent|insertion-order)
    #[arg(long = "edge-resolution", value_name = "MODE")]
    pub edge_resolution: Option<String>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            catalogs_dir: self
                .catalogs_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            unknown_prerequisites: self.unknown_prerequisites.clone(),
            edge_resolution: self.edge_resolution.clone(),
        }
    }
}
