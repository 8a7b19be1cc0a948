//! Parsing and validation for descver.toml configuration files
//!
//! Every section is optional; a missing file behaves like an empty one.

use crate::error::ConfigError;
use crate::types::ProjectName;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// File looked up in the repository directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "descver.toml";

/// Main configuration struct for descver.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project metadata
    #[serde(default)]
    pub project: ProjectConfig,

    /// How descriptors are obtained
    #[serde(default)]
    pub describe: DescribeConfig,

    /// Where `update` records the version
    #[serde(default)]
    pub update: UpdateConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Load `descver.toml` from `dir`, or the defaults if there is none
    pub fn load_or_default(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Config::default());
        }
        Self::load(path)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.describe.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "describe.timeout-ms must be greater than zero".to_string(),
            ));
        }

        if self.describe.program.trim().is_empty() {
            return Err(ConfigError::Validation(
                "describe.program must not be empty".to_string(),
            ));
        }

        if self.describe.tag_prefix.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "describe.tag-prefix '{}' must not contain whitespace",
                self.describe.tag_prefix
            )));
        }

        if self.update.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "update.file must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolves the project name, falling back to the repository directory name
    pub fn project_name(&self, repo_dir: Option<&Path>) -> ProjectName {
        self.project
            .name
            .clone()
            .or_else(|| repo_dir.and_then(ProjectName::from_dir))
            .unwrap_or_default()
    }
}

/// Project section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Name printed by the `version` command
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<ProjectName>,
}

/// Describe section: how the git collaborator is invoked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct DescribeConfig {
    /// Executable to run
    #[serde(default = "default_program")]
    pub program: String,

    /// Upper bound for a single collaborator call, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Prefix stripped from described tags and prepended to bumped ones
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl DescribeConfig {
    /// Returns the timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            timeout_ms: default_timeout_ms(),
            tag_prefix: default_tag_prefix(),
        }
    }
}

fn default_program() -> String {
    "git".to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Update section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateConfig {
    /// Version record, relative to the repository directory
    #[serde(default = "default_record_file")]
    pub file: PathBuf,
}

impl Default for UpdateConfig {
    fn default() -> Self {
        Self {
            file: default_record_file(),
        }
    }
}

fn default_record_file() -> PathBuf {
    PathBuf::from("VERSION")
}

/// Output configuration section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Output format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<project> v<version>`
    #[default]
    Human,
    /// One JSON object with project, version and tuple
    Json,
}
