#![forbid(unsafe_code)]

//! descver: sortable version strings derived from source control
//!
//! descver turns the output of `git describe` into a version such as
//! `1.2.3.post4+abc1234.dirty`, and parses version strings into tuples that
//! order releases and post-releases correctly.

pub mod cli;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod types;
pub mod version;

// Re-export error types for convenient access
pub use error::{CommandError, ConfigError, ResolveError};

// Re-export core domain types for convenient access
pub use resolver::{DescriptorSource, TagWriter, VersionResolver};
pub use types::{ProjectName, RawDescriptor, RepoLocation};
pub use version::{VersionPart, VersionTuple, extended_version, version_to_tuple};
