#![forbid(unsafe_code)]

//! Core domain types for descver
//!
//! This module defines the fundamental values passed between the
//! source-control collaborator, the resolver and the version algorithms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Marker a collaborator reports when it cannot name a tag or hash
pub const UNKNOWN_MARKER: &str = "unknown";

/// Marker a collaborator reports for a working tree with local modifications
pub const DIRTY_MARKER: &str = "dirty";

/// The four raw fields describing a checkout relative to its nearest tag
///
/// Every field may be empty. `base_tag` and `short_hash` may also hold
/// [`UNKNOWN_MARKER`], and `dirty_flag` is either empty or [`DIRTY_MARKER`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawDescriptor {
    /// Nearest tag, without any tag prefix
    pub base_tag: String,
    /// Commits since `base_tag` as decimal text; empty when exactly on the tag
    pub distance: String,
    /// Abbreviated commit identifier
    pub short_hash: String,
    /// Dirty marker
    pub dirty_flag: String,
}

impl RawDescriptor {
    /// Creates a descriptor from its four raw fields
    pub fn new(
        base_tag: impl Into<String>,
        distance: impl Into<String>,
        short_hash: impl Into<String>,
        dirty_flag: impl Into<String>,
    ) -> Self {
        RawDescriptor {
            base_tag: base_tag.into(),
            distance: distance.into(),
            short_hash: short_hash.into(),
            dirty_flag: dirty_flag.into(),
        }
    }

    /// Returns true if the working tree carries local modifications
    pub fn is_dirty(&self) -> bool {
        !self.dirty_flag.is_empty()
    }

    /// Returns true if HEAD is exactly on `base_tag`
    pub fn is_on_tag(&self) -> bool {
        self.distance.is_empty() && self.has_tag()
    }

    /// Returns true if a usable base tag was reported
    pub fn has_tag(&self) -> bool {
        !self.base_tag.is_empty() && self.base_tag != UNKNOWN_MARKER
    }
}

/// Where the source-control collaborator should be queried
///
/// The location is an explicit value rather than process-wide state, and
/// defaults to [`RepoLocation::Unset`]. Every consumer must tolerate it being
/// unset or pointing at something that is not a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum RepoLocation {
    /// No location is known
    #[default]
    Unset,
    /// A directory expected to be inside a working tree
    Path(PathBuf),
}

impl RepoLocation {
    /// Creates a location pointing at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        RepoLocation::Path(path.into())
    }

    /// Returns the directory, if one is set
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            RepoLocation::Unset => None,
            RepoLocation::Path(path) => Some(path),
        }
    }

    /// Returns true if no location is set
    pub fn is_unset(&self) -> bool {
        matches!(self, RepoLocation::Unset)
    }

    /// Forgets the location, so later resolutions take the fallback path
    pub fn clear(&mut self) {
        *self = RepoLocation::Unset;
    }
}

impl From<Option<PathBuf>> for RepoLocation {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(RepoLocation::Unset, RepoLocation::Path)
    }
}

impl fmt::Display for RepoLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoLocation::Unset => write!(f, "<unset>"),
            RepoLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A validated project name, as printed by the `version` command
///
/// Project names must be non-empty and must not contain whitespace, so that
/// `<name> v<version>` splits unambiguously.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProjectName(String);

impl ProjectName {
    /// Creates a new ProjectName, validating the input
    ///
    /// Returns None if the input is empty or contains whitespace
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() || name.chars().any(char::is_whitespace) {
            return None;
        }
        Some(ProjectName(name))
    }

    /// Derives a name from the final component of `path`
    pub fn from_dir(path: &Path) -> Option<Self> {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| ProjectName::new(name))
    }

    /// Returns the project name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ProjectName {
    fn default() -> Self {
        ProjectName("unnamed".to_string())
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ProjectName::new(value).ok_or_else(|| "Invalid project name".to_string())
    }
}

impl From<ProjectName> for String {
    fn from(name: ProjectName) -> Self {
        name.0
    }
}
