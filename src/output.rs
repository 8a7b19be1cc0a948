#![forbid(unsafe_code)]

//! Output formatters for the `version` command
//!
//! The human form `<project> v<version>` is parsed by release tooling and
//! must stay exactly as it is.

use crate::config::OutputFormat;
use crate::types::ProjectName;
use crate::version::VersionTuple;
use serde::Serialize;

/// Everything the `version` command reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VersionReport {
    /// Project name
    pub project: ProjectName,
    /// Normalized version string
    pub version: String,
    /// Ordering key of `version`
    pub tuple: VersionTuple,
}

impl VersionReport {
    /// Builds a report, deriving the tuple from `version`
    pub fn new(project: ProjectName, version: String) -> Self {
        let tuple = VersionTuple::parse(&version);
        Self {
            project,
            version,
            tuple,
        }
    }

    /// Renders the report in `format`, without a trailing newline
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => format!("{} v{}", self.project, self.version),
            // A struct of strings and integers always serializes.
            OutputFormat::Json => serde_json::to_string(self).unwrap_or_default(),
        }
    }
}
