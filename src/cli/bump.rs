//! Bump command implementation
//!
//! This module implements the `descver bump` command, which:
//! - Describes the current checkout, failing if that is impossible
//! - Refuses to tag a dirty tree or a commit that is already tagged
//! - Increments the last numeric component of the nearest tag
//! - Creates an annotated tag `<prefix><next>` through the collaborator

use crate::config::Config;
use crate::error::CommandError;
use crate::resolver::{DescriptorSource, TagWriter, VersionResolver};
use crate::version::next_release;
use std::io::Write;

/// Outcome of a successful bump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpResult {
    /// Version before the bump
    pub previous: String,
    /// Version recorded by the new tag
    pub next: String,
    /// Name of the created tag
    pub tag: String,
}

/// Run the bump command
///
/// # Errors
///
/// - `CommandError::Resolve` if the checkout cannot be described or the tag
///   cannot be created
/// - `CommandError::Bump` if the tree is dirty, HEAD is already tagged, or
///   the nearest tag is not a numeric release
pub fn run_bump<S: DescriptorSource + TagWriter>(
    config: &Config,
    resolver: &VersionResolver<S>,
    out: &mut impl Write,
) -> Result<BumpResult, CommandError> {
    let prefix = &config.describe.tag_prefix;
    let descriptor = resolver.descriptor()?;
    let previous = descriptor.to_version_string();

    if descriptor.is_dirty() {
        return Err(CommandError::Bump(format!(
            "Working tree has uncommitted changes ({previous}). Commit or stash them first."
        )));
    }

    if descriptor.is_on_tag() {
        return Err(CommandError::Bump(format!(
            "Current commit is already tagged as {prefix}{}. Nothing to bump.",
            descriptor.base_tag
        )));
    }

    let next = next_release(&descriptor.base_tag).ok_or_else(|| {
        CommandError::Bump(format!(
            "Cannot compute the release after tag '{}': it is not a numeric release.",
            descriptor.base_tag
        ))
    })?;

    let tag = format!("{prefix}{next}");
    let repo = resolver.repo_dir()?;
    resolver
        .source()
        .create_tag(repo, &tag, &format!("Release {next}"))?;

    writeln!(out, "Bumped {previous} to {next} (tag {tag})")?;

    Ok(BumpResult {
        previous,
        next,
        tag,
    })
}
