//! Update command implementation
//!
//! Writes the current version to the version record file configured in
//! `[update]`, relative to the repository directory. Unlike `version`, this
//! command needs a real descriptor: recording the fallback would overwrite a
//! good record with `0.0.0`.

use crate::config::Config;
use crate::error::CommandError;
use crate::resolver::{DescriptorSource, VersionResolver};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Outcome of a successful update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateResult {
    /// Path of the record file
    pub path: PathBuf,
    /// Version now recorded
    pub version: String,
    /// False if the record already held this version
    pub changed: bool,
}

/// Run the update command
///
/// # Errors
///
/// - `CommandError::Resolve` if the checkout cannot be described
/// - `CommandError::Io` if the record file cannot be written
pub fn run_update<S: DescriptorSource>(
    config: &Config,
    resolver: &VersionResolver<S>,
    out: &mut impl Write,
) -> Result<UpdateResult, CommandError> {
    let version = resolver.try_resolve()?;
    let path = resolver.repo_dir()?.join(&config.update.file);
    let contents = format!("{version}\n");

    let changed = match fs::read_to_string(&path) {
        Ok(existing) => existing != contents,
        Err(_) => true,
    };

    if changed {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &contents)?;
        writeln!(out, "Updated {} to {version}", config.update.file.display())?;
    } else {
        writeln!(out, "{} already at {version}", config.update.file.display())?;
    }

    Ok(UpdateResult {
        path,
        version,
        changed,
    })
}
