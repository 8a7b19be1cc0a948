//! CLI argument parsing using clap
//!
//! clap handles the options; the single positional token is mapped onto the
//! closed [`Command`] enum by hand, so an unknown token becomes a regular
//! command outcome instead of a clap usage error. Tokens starting with `-`
//! that are not descver options reach the positional too, and clap's own
//! `-h`/`--help` flag is disabled in favor of the `help` command.

use crate::config::OutputFormat;
use crate::types::RepoLocation;
use clap::Parser;
use std::path::PathBuf;

/// descver main entry point
#[derive(Parser, Debug)]
#[command(name = "descver")]
#[command(about = "Sortable version strings derived from git describe")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// Command to run: version (default), help, bump or update
    #[arg(allow_hyphen_values = true)]
    pub command: Option<String>,

    /// Repository directory (defaults to the current directory)
    #[arg(long, value_name = "PATH")]
    pub repo: Option<PathBuf>,

    /// Configuration file (defaults to descver.toml in the repository)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for the version command
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log diagnostics to standard error
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Returns the command named by the positional token
    pub fn selected_command(&self) -> Command {
        Command::from_token(self.command.as_deref())
    }

    /// Returns where to query source control
    ///
    /// `--repo` wins; otherwise the current directory, or
    /// [`RepoLocation::Unset`] if that cannot be determined.
    pub fn repo_location(&self) -> RepoLocation {
        RepoLocation::from(self.repo.clone().or_else(|| std::env::current_dir().ok()))
    }
}

/// Available descver commands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print `<project> v<version>`
    Version,
    /// Print the usage block
    Help,
    /// Tag the current commit with the next release
    Bump,
    /// Write the current version to the version record file
    Update,
    /// Anything else, kept verbatim for the error message
    Unknown(String),
}

impl Command {
    /// Maps an optional command token to a command
    ///
    /// No token and the empty token both mean [`Command::Version`].
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            None | Some("") | Some("version") => Command::Version,
            Some("help") => Command::Help,
            Some("bump") => Command::Bump,
            Some("update") => Command::Update,
            Some(other) => Command::Unknown(other.to_string()),
        }
    }
}
