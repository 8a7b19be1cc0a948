//! Version resolution
//!
//! The [`VersionResolver`] asks a [`DescriptorSource`] about a
//! [`RepoLocation`] and normalizes the answer. Its [`resolve`] method has no
//! failure mode: whatever goes wrong, the fallback version is returned.
//!
//! [`resolve`]: VersionResolver::resolve

use crate::error::ResolveError;
use crate::types::{RawDescriptor, RepoLocation};
use crate::version::FALLBACK_VERSION;
use std::path::Path;
use tracing::debug;

/// Collaborator that describes a checkout
///
/// Implementations report an unreachable tool, a timeout or unparsable output
/// as an error rather than panicking.
pub trait DescriptorSource {
    /// Fetches the raw descriptor of the checkout at `repo`
    fn fetch(&self, repo: &Path) -> Result<RawDescriptor, ResolveError>;
}

/// Collaborator that records a release in source control
pub trait TagWriter {
    /// Creates tag `tag` with `message` at the current commit of `repo`
    fn create_tag(&self, repo: &Path, tag: &str, message: &str) -> Result<(), ResolveError>;
}

impl<S: DescriptorSource + ?Sized> DescriptorSource for &S {
    fn fetch(&self, repo: &Path) -> Result<RawDescriptor, ResolveError> {
        (**self).fetch(repo)
    }
}

impl<T: TagWriter + ?Sized> TagWriter for &T {
    fn create_tag(&self, repo: &Path, tag: &str, message: &str) -> Result<(), ResolveError> {
        (**self).create_tag(repo, tag, message)
    }
}

/// Resolves the version of the checkout at a repository location
#[derive(Debug, Clone)]
pub struct VersionResolver<S> {
    repo: RepoLocation,
    source: S,
}

impl<S: DescriptorSource> VersionResolver<S> {
    /// Creates a resolver querying `source` about `repo`
    pub fn new(repo: RepoLocation, source: S) -> Self {
        Self { repo, source }
    }

    /// Returns the repository location
    pub fn repo(&self) -> &RepoLocation {
        &self.repo
    }

    /// Returns a mutable handle to the repository location
    pub fn repo_mut(&mut self) -> &mut RepoLocation {
        &mut self.repo
    }

    /// Returns the collaborator
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the repository directory, checking that it exists
    pub fn repo_dir(&self) -> Result<&Path, ResolveError> {
        let dir = self
            .repo
            .as_path()
            .ok_or(ResolveError::MissingRepoLocation)?;
        if !dir.is_dir() {
            return Err(ResolveError::InvalidRepoLocation(dir.to_path_buf()));
        }
        Ok(dir)
    }

    /// Fetches the raw descriptor, reporting every failure
    pub fn descriptor(&self) -> Result<RawDescriptor, ResolveError> {
        let dir = self.repo_dir()?;
        self.source.fetch(dir)
    }

    /// Resolves the version string, reporting every failure
    pub fn try_resolve(&self) -> Result<String, ResolveError> {
        Ok(self.descriptor()?.to_version_string())
    }

    /// Resolves the version string, falling back to [`FALLBACK_VERSION`] on
    /// any failure
    pub fn resolve(&self) -> String {
        match self.try_resolve() {
            Ok(version) => version,
            Err(e) => {
                debug!("Falling back to {FALLBACK_VERSION} for {}: {e}", self.repo);
                FALLBACK_VERSION.to_string()
            }
        }
    }
}
