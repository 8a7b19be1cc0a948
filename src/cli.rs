//! CLI argument parsing and command dispatch
//!
//! Every defined outcome is reported on the given output stream plus an exit
//! code. Nothing is written to standard error.

pub mod args;
pub mod bump;
pub mod common;
pub mod help;
pub mod update;
pub mod version;

// Re-export types for convenient access
pub use args::{Cli, Command};
pub use common::{EXIT_ERROR, EXIT_SUCCESS, EXIT_UNKNOWN_COMMAND};

use crate::config::{Config, OutputFormat};
use crate::error::{CommandError, ConfigError};
use crate::git::GitCli;
use crate::resolver::{DescriptorSource, TagWriter, VersionResolver};
use std::io::Write;
use tracing::warn;

/// Everything a command needs: configuration, resolver and output options
pub struct Session<S> {
    /// Configuration, or the reason it could not be loaded
    pub config: Result<Config, ConfigError>,
    /// Resolver for the selected repository
    pub resolver: VersionResolver<S>,
    /// `--format` override
    pub format: Option<OutputFormat>,
}

impl Session<GitCli> {
    /// Builds a session backed by git from parsed arguments
    pub fn from_cli(cli: &Cli) -> Self {
        let repo = cli.repo_location();
        let config = common::load_config(cli.config.as_deref(), &repo);
        let git = match &config {
            Ok(config) => GitCli::from_config(&config.describe),
            Err(_) => GitCli::from_config(&Default::default()),
        };

        Session {
            config,
            resolver: VersionResolver::new(repo, git),
            format: cli.format,
        }
    }
}

impl<S> Session<S> {
    /// Returns the configuration, or the defaults if it could not be loaded
    fn config_or_default(&self) -> Config {
        match &self.config {
            Ok(config) => config.clone(),
            Err(e) => {
                warn!("Ignoring configuration: {e}");
                Config::default()
            }
        }
    }
}

/// Run descver with parsed arguments, writing to `out`
///
/// Returns the process exit code.
pub fn run(cli: &Cli, out: &mut impl Write) -> i32 {
    let session = Session::<GitCli>::from_cli(cli);
    dispatch(cli.selected_command(), session, out)
}

/// Run `command` in `session`, writing to `out`
///
/// Returns the process exit code:
/// - 0: Success
/// - 1: Unknown command
/// - 2: `bump` or `update` failed
pub fn dispatch<S: DescriptorSource + TagWriter>(
    command: Command,
    session: Session<S>,
    out: &mut impl Write,
) -> i32 {
    let result = match command {
        Command::Version => version::run_version(
            &session.config_or_default(),
            &session.resolver,
            session.format,
            out,
        ),
        Command::Help => help::run_help(out),
        Command::Bump => session
            .config
            .map_err(CommandError::from)
            .and_then(|config| bump::run_bump(&config, &session.resolver, out).map(drop)),
        Command::Update => session
            .config
            .map_err(CommandError::from)
            .and_then(|config| update::run_update(&config, &session.resolver, out).map(drop)),
        Command::Unknown(token) => Err(CommandError::UnknownCommand(token)),
    };

    match result {
        Ok(()) => EXIT_SUCCESS,
        Err(e @ CommandError::UnknownCommand(_)) => {
            let _ = writeln!(out, "{e}");
            EXIT_UNKNOWN_COMMAND
        }
        Err(e) => {
            let _ = writeln!(out, "Error: {e}");
            EXIT_ERROR
        }
    }
}
