//! Configuration module for `course-tracker`

use crate::core::graph::{EdgeResolution, GraphOptions, UnknownPrerequisitePolicy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to [`Config::get_app_dir`] inside config values
const DIR_VARIABLE: &str = "$COURSE_TRACKER";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory searched for catalog files given by bare name
    #[serde(default)]
    pub catalogs_dir: String,
    /// Directory for exported results
    #[serde(default)]
    pub out_dir: String,
}

/// Eligibility policy configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EligibilityConfig {
    /// Treatment of unknown prerequisite codes ("block" or "ignore")
    #[serde(default)]
    pub unknown_prerequisites: String,
    /// Edge wiring strategy ("order-independent" or "insertion-order")
    #[serde(default)]
    pub edge_resolution: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Eligibility policies
    #[serde(default)]
    pub eligibility: EligibilityConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalogs directory
    pub catalogs_dir: Option<String>,
    /// Override output directory
    pub out_dir: Option<String>,
    /// Override unknown-prerequisite policy
    pub unknown_prerequisites: Option<String>,
    /// Override edge resolution
    pub edge_resolution: Option<String>,
}

/// Copy `default` into `field` when `field` is empty and `default` is not
fn fill_if_empty(field: &mut String, default: &str) -> bool {
    if field.is_empty() && !default.is_empty() {
        default.clone_into(field);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the application directory (`$COURSE_TRACKER`)
    ///
    /// Returns:
    /// - Linux: `~/.config/coursetracker`
    /// - macOS: `~/Library/Application Support/coursetracker`
    /// - Windows: `%APPDATA%\coursetracker`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("coursetracker")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty here and non-empty in `defaults` are
    /// filled, so upgrading picks up new settings without touching user values.
    ///
    /// # Returns
    ///
    /// `true` if any field was filled
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let filled = [
            fill_if_empty(&mut self.logging.level, &defaults.logging.level),
            fill_if_empty(&mut self.logging.file, &defaults.logging.file),
            fill_if_empty(&mut self.paths.catalogs_dir, &defaults.paths.catalogs_dir),
            fill_if_empty(&mut self.paths.out_dir, &defaults.paths.out_dir),
            fill_if_empty(
                &mut self.eligibility.unknown_prerequisites,
                &defaults.eligibility.unknown_prerequisites,
            ),
            fill_if_empty(
                &mut self.eligibility.edge_resolution,
                &defaults.eligibility.edge_resolution,
            ),
        ];
        filled.contains(&true)
    }

    /// Copy of this config with `overrides` applied, leaving `self` as loaded
    ///
    /// Persist the original, never the returned copy, so run-only flags stay
    /// out of the config file.
    #[must_use]
    pub fn with_overrides(&self, overrides: &ConfigOverrides) -> Self {
        let mut effective = self.clone();
        effective.apply_overrides(overrides);
        effective
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for this run only as long as the overridden config is
    /// not saved; see [`with_overrides`](Self::with_overrides).
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }
        if let Some(dir) = &overrides.catalogs_dir {
            self.paths.catalogs_dir.clone_from(dir);
        }
        if let Some(dir) = &overrides.out_dir {
            self.paths.out_dir.clone_from(dir);
        }
        if let Some(policy) = &overrides.unknown_prerequisites {
            self.eligibility.unknown_prerequisites.clone_from(policy);
        }
        if let Some(resolution) = &overrides.edge_resolution {
            self.eligibility.edge_resolution.clone_from(resolution);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_TRACKER` in a config value
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            value.replace(DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields take their serde defaults (empty strings, `false`).
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalogs_dir = Self::expand_variables(&config.paths.catalogs_dir);
        config.paths.out_dir = Self::expand_variables(&config.paths.out_dir);

        Ok(config)
    }

    /// Load configuration from the compiled-in defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// An existing file is merged with defaults (and re-saved when fields were
    /// added). Any read or parse failure falls back to the defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save();
            return defaults;
        }

        let Ok(content) = fs::read_to_string(&config_file) else {
            return defaults;
        };
        let Ok(mut config) = Self::from_toml(&content) else {
            return defaults;
        };
        if config.merge_defaults(&defaults) {
            let _ = config.save();
        }
        config
    }

    /// Save configuration to the user config file, creating its directory
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, or the file
    /// cannot be serialized or written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `path`, creating its directory
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created, or the file
    /// cannot be serialized or written
    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalogs_dir`, `out_dir`,
    /// `unknown_prerequisites`, `edge_resolution` (dashes accepted in place
    /// of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key.replace('-', "_").as_str() {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalogs_dir" => Some(self.paths.catalogs_dir.clone()),
            "out_dir" => Some(self.paths.out_dir.clone()),
            "unknown_prerequisites" => Some(self.eligibility.unknown_prerequisites.clone()),
            "edge_resolution" => Some(self.eligibility.edge_resolution.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value does not parse
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => {
                value.parse::<crate::logger::Level>()?;
                self.logging.level = value.to_ascii_lowercase();
            }
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalogs_dir" => self.paths.catalogs_dir = value.to_string(),
            "out_dir" => self.paths.out_dir = value.to_string(),
            "unknown_prerequisites" => {
                let policy: UnknownPrerequisitePolicy = value.parse()?;
                self.eligibility.unknown_prerequisites = policy.to_string();
            }
            "edge_resolution" => {
                let resolution: EdgeResolution = value.parse()?;
                self.eligibility.edge_resolution = resolution.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to its default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key.replace('-', "_").as_str() {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalogs_dir" => self
                .paths
                .catalogs_dir
                .clone_from(&defaults.paths.catalogs_dir),
            "out_dir" => self.paths.out_dir.clone_from(&defaults.paths.out_dir),
            "unknown_prerequisites" => self
                .eligibility
                .unknown_prerequisites
                .clone_from(&defaults.eligibility.unknown_prerequisites),
            "edge_resolution" => self
                .eligibility
                .edge_resolution
                .clone_from(&defaults.eligibility.edge_resolution),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Delete the user config file so the next [`load()`](Config::load) recreates it
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Graph policies named by the `[eligibility]` section
    ///
    /// Empty values fall back to the policy defaults.
    ///
    /// # Errors
    /// Returns an error if a value is not a recognized policy name
    pub fn graph_options(&self) -> Result<GraphOptions, String> {
        let unknown_prerequisites = if self.eligibility.unknown_prerequisites.is_empty() {
            UnknownPrerequisitePolicy::default()
        } else {
            self.eligibility.unknown_prerequisites.parse()?
        };
        let edge_resolution = if self.eligibility.edge_resolution.is_empty() {
            EdgeResolution::default()
        } else {
            self.eligibility.edge_resolution.parse()?
        };
        Ok(GraphOptions::new(unknown_prerequisites, edge_resolution))
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalogs_dir = \"{}\"", self.paths.catalogs_dir)?;
        writeln!(f, "  out_dir = \"{}\"", self.paths.out_dir)?;

        writeln!(f, "\n[eligibility]")?;
        writeln!(
            f,
            "  unknown_prerequisites = \"{}\"",
            self.eligibility.unknown_prerequisites
        )?;
        writeln!(
            f,
            "  edge_resolution = \"{}\"",
            self.eligibility.edge_resolution
        )?;

        Ok(())
    }
}
