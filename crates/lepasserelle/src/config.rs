// Run Configuration
//
// *La Configuration* (The Configuration) - Input tables, report output and logging

use crate::errors::{Result, TreeHopperError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "treehopper.toml";

/// Default talents table
pub const DEFAULT_TALENTS_PATH: &str = "data/talents.csv";

/// Default specializations table
pub const DEFAULT_SPECIALIZATIONS_PATH: &str = "data/specializations.csv";

/// Default report location
pub const DEFAULT_REPORT_PATH: &str = "out/report.json";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TreeHopperConfig {
    /// Log level for tracing when `RUST_LOG` is unset
    pub log_level: String,

    /// Input tables
    pub input: InputConfig,

    /// Report output
    pub output: OutputConfig,
}

/// Input table locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Talents CSV
    pub talents: PathBuf,

    /// Specializations CSV
    pub specializations: PathBuf,
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Report JSON file
    pub report: PathBuf,

    /// Indent the JSON document
    pub pretty: bool,
}

impl Default for TreeHopperConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            input: InputConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            talents: PathBuf::from(DEFAULT_TALENTS_PATH),
            specializations: PathBuf::from(DEFAULT_SPECIALIZATIONS_PATH),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report: PathBuf::from(DEFAULT_REPORT_PATH),
            pretty: true,
        }
    }
}

impl TreeHopperConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `treehopper.toml` in
    /// `working_dir` is used when present, otherwise the defaults.
    pub fn load(path: Option<&Path>, working_dir: &Path) -> Result<Self> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let candidate = working_dir.join(DEFAULT_CONFIG_FILE);
                if candidate.exists() {
                    Self::load_file(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse a TOML configuration file
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            TreeHopperError::config_error(
                format!("Failed to read config file {}: {}", path.display(), e),
                Some("Pass an existing file to --config or omit it.".to_string()),
            )
        })?;

        toml::from_str(&content).map_err(|e| {
            TreeHopperError::config_error(
                format!("Failed to parse config file {}: {}", path.display(), e),
                None,
            )
        })
    }

    /// Apply environment overrides from the process environment.
    ///
    /// Environment variables:
    /// - `TREEHOPPER_TALENTS` - Talents CSV
    /// - `TREEHOPPER_SPECIALIZATIONS` - Specializations CSV
    /// - `TREEHOPPER_REPORT` - Report output file
    /// - `TREEHOPPER_LOG_LEVEL` - Log level (trace, debug, info, warn, error)
    #[must_use]
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Apply environment overrides using a custom lookup
    #[must_use]
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(talents) = lookup("TREEHOPPER_TALENTS") {
            self.input.talents = PathBuf::from(talents);
        }

        if let Some(specializations) = lookup("TREEHOPPER_SPECIALIZATIONS") {
            self.input.specializations = PathBuf::from(specializations);
        }

        if let Some(report) = lookup("TREEHOPPER_REPORT") {
            self.output.report = PathBuf::from(report);
        }

        if let Some(log_level) = lookup("TREEHOPPER_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.input.talents.as_os_str().is_empty() {
            return Err(TreeHopperError::config_error(
                "Talents path cannot be empty",
                Some("Set [input].talents or TREEHOPPER_TALENTS.".to_string()),
            ));
        }

        if self.input.specializations.as_os_str().is_empty() {
            return Err(TreeHopperError::config_error(
                "Specializations path cannot be empty",
                Some("Set [input].specializations or TREEHOPPER_SPECIALIZATIONS.".to_string()),
            ));
        }

        if self.output.report.as_os_str().is_empty() {
            return Err(TreeHopperError::config_error(
                "Report path cannot be empty",
                Some("Set [output].report or TREEHOPPER_REPORT.".to_string()),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(TreeHopperError::config_error(
                format!(
                    "Invalid log level: {}. Must be one of: {}",
                    self.log_level,
                    LOG_LEVELS.join(", ")
                ),
                None,
            ));
        }

        Ok(())
    }
}
