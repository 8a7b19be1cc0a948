//! Common helpers shared across CLI commands

use crate::config::Config;
use crate::error::ConfigError;
use crate::types::RepoLocation;
use std::path::Path;

/// Exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_UNKNOWN_COMMAND: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Program name shown in the usage block
pub const PROGRAM_NAME: &str = "descver";

/// Load the configuration for a run
///
/// An explicit path must exist. Otherwise `descver.toml` is looked up in the
/// repository directory, and the defaults apply when there is none.
///
/// # Errors
///
/// Returns `ConfigError::Io` if an explicit file cannot be read and
/// `ConfigError::Parse`/`ConfigError::Validation` if a file is invalid.
pub(crate) fn load_config(
    explicit: Option<&Path>,
    repo: &RepoLocation,
) -> Result<Config, ConfigError> {
    match (explicit, repo.as_path()) {
        (Some(path), _) => Config::load(path),
        (None, Some(dir)) => Config::load_or_default(dir),
        (None, None) => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_unset_repo_uses_defaults() {
        let config = load_config(None, &RepoLocation::Unset).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_explicit_path_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let result = load_config(Some(&missing), &RepoLocation::Unset);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_explicit_path_wins_over_repo_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("descver.toml"),
            "[project]\nname = \"repo\"\n",
        )
        .unwrap();
        let explicit = dir.path().join("other.toml");
        fs::write(&explicit, "[project]\nname = \"other\"\n").unwrap();

        let repo = RepoLocation::new(dir.path());
        let config = load_config(Some(&explicit), &repo).unwrap();
        assert_eq!(config.project_name(None).as_str(), "other");

        let config = load_config(None, &repo).unwrap();
        assert_eq!(config.project_name(None).as_str(), "repo");
    }
}
