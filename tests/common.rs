//! Test utilities for descver integration tests

#![allow(dead_code)]

use descver::{DescriptorSource, RawDescriptor, ResolveError, TagWriter};
use std::cell::RefCell;
use std::path::Path;
use std::process::Command;

/// Result type alias for tests
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

/// In-memory collaborator with a scripted answer
///
/// Records every repository it was asked about and every tag it created.
pub struct ScriptedRepo {
    answer: Result<RawDescriptor, fn() -> ResolveError>,
    pub fetched: RefCell<Vec<String>>,
    pub tags: RefCell<Vec<String>>,
}

impl ScriptedRepo {
    /// Answers every fetch with `descriptor`
    pub fn describing(descriptor: RawDescriptor) -> Self {
        Self {
            answer: Ok(descriptor),
            fetched: RefCell::new(Vec::new()),
            tags: RefCell::new(Vec::new()),
        }
    }

    /// Fails every fetch with the error built by `error`
    pub fn failing(error: fn() -> ResolveError) -> Self {
        Self {
            answer: Err(error),
            fetched: RefCell::new(Vec::new()),
            tags: RefCell::new(Vec::new()),
        }
    }
}

impl DescriptorSource for ScriptedRepo {
    fn fetch(&self, repo: &Path) -> Result<RawDescriptor, ResolveError> {
        self.fetched.borrow_mut().push(repo.display().to_string());
        match &self.answer {
            Ok(descriptor) => Ok(descriptor.clone()),
            Err(error) => Err(error()),
        }
    }
}

impl TagWriter for ScriptedRepo {
    fn create_tag(&self, _repo: &Path, tag: &str, _message: &str) -> Result<(), ResolveError> {
        self.tags.borrow_mut().push(tag.to_string());
        Ok(())
    }
}

/// Returns true if a usable `git` is on the PATH
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}

/// Runs git in `dir` with an isolated identity and configuration
pub fn git(dir: &Path, args: &[&str]) -> TestResult<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env("GIT_CONFIG_NOSYSTEM", "1")
        .env("GIT_AUTHOR_NAME", "descver tests")
        .env("GIT_AUTHOR_EMAIL", "tests@example.com")
        .env("GIT_COMMITTER_NAME", "descver tests")
        .env("GIT_COMMITTER_EMAIL", "tests@example.com")
        .output()?;
    if !output.status.success() {
        return Err(format!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        )
        .into());
    }
    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

/// Initializes a repository in `dir` with a local identity and a single commit
pub fn init_repo(dir: &Path) -> TestResult {
    git(dir, &["init", "--quiet"])?;
    git(dir, &["config", "user.name", "descver tests"])?;
    git(dir, &["config", "user.email", "tests@example.com"])?;
    git(dir, &["config", "commit.gpgsign", "false"])?;
    git(dir, &["config", "tag.gpgsign", "false"])?;
    commit(dir, "README", "initial")?;
    Ok(())
}

/// Writes `contents` to `file` and commits it
pub fn commit(dir: &Path, file: &str, contents: &str) -> TestResult {
    std::fs::write(dir.join(file), contents)?;
    git(dir, &["add", file])?;
    git(dir, &["commit", "--quiet", "-m", contents])?;
    Ok(())
}

/// Returns the abbreviated hash of HEAD, as `git describe` prints it
pub fn short_head(dir: &Path) -> TestResult<String> {
    git(dir, &["rev-parse", "--short", "HEAD"])
}
