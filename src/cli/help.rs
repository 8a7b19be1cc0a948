//! Help command implementation

use super::common::PROGRAM_NAME;
use crate::error::CommandError;
use std::io::Write;

/// Usage block, printed after the program name
const USAGE: &str = r#" [OPTIONS] [COMMAND]

Derive a sortable version string from `git describe`.

Commands:
  version  Print "<project> v<version>" (the default)
  help     Show this message
  bump     Tag the current commit with the next release version
  update   Write the current version to the version record file

Options:
  --repo <PATH>      Repository directory (default: current directory)
  --config <PATH>    Configuration file (default: <repo>/descver.toml)
  -f, --format <FMT> Output of the version command: human or json
  -v, --verbose      Log diagnostics to standard error"#;

/// Run the help command
pub fn run_help(out: &mut impl Write) -> Result<(), CommandError> {
    writeln!(out, "{PROGRAM_NAME}{USAGE}")?;
    Ok(())
}
