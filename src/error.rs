//! Error types for descver
//!
//! This module defines the error types used throughout descver, following
//! a hierarchical structure with specific error variants for different
//! error categories.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration-related errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML, or has unexpected keys
    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Failures while obtaining a descriptor from the source-control collaborator
///
/// The failsafe resolver never surfaces these; they collapse to the fallback
/// version. Strict callers (`bump`, `update`) report them.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No repository location was configured
    #[error("No repository location is set")]
    MissingRepoLocation,

    /// The repository location does not point at an existing directory
    #[error("Repository location '{}' is not a directory", .0.display())]
    InvalidRepoLocation(PathBuf),

    /// The collaborator could not be run or reported failure
    #[error("Source control is unavailable: {0}")]
    CollaboratorUnavailable(String),

    /// The collaborator did not answer in time
    #[error("Source control did not respond within {} ms", .0.as_millis())]
    TimedOut(Duration),

    /// The collaborator answered with something that is not a descriptor
    #[error("Malformed descriptor: {0}")]
    MalformedDescriptor(String),
}

/// Errors raised while running a CLI command
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The command token is not one of the known commands
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Descriptor resolution failed for a command that needs a real descriptor
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The next release could not be computed or recorded
    #[error("{0}")]
    Bump(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
