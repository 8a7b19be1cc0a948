//! Version command implementation
//!
//! Prints `<project> v<version>`. This command always succeeds: the version
//! falls back to `0.0.0` when no descriptor can be obtained.

use crate::config::{Config, OutputFormat};
use crate::error::CommandError;
use crate::output::VersionReport;
use crate::resolver::{DescriptorSource, VersionResolver};
use std::io::Write;

/// Run the version command
///
/// `format` overrides the `[output]` format of the configuration.
pub fn run_version<S: DescriptorSource>(
    config: &Config,
    resolver: &VersionResolver<S>,
    format: Option<OutputFormat>,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let project = config.project_name(resolver.repo().as_path());
    let report = VersionReport::new(project, resolver.resolve());
    let format = format.unwrap_or(config.output.format);

    writeln!(out, "{}", report.render(format))?;
    Ok(())
}
