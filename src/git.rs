//! Git as the source-control collaborator
//!
//! [`GitCli`] shells out to `git describe` to obtain a [`RawDescriptor`] and
//! to `git tag` to record a release. Every invocation is bounded by a timeout
//! and never lets git write to this process's stdout or stderr.

use crate::config::DescribeConfig;
use crate::error::ResolveError;
use crate::resolver::{DescriptorSource, TagWriter};
use crate::types::{DIRTY_MARKER, RawDescriptor};
use regex::Regex;
use std::io::Read;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use std::sync::LazyLock;
use std::thread;
use std::time::{Duration, Instant};
use tracing::debug;

/// Interval between child status checks while waiting on git
const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// `<tag>-<distance>-g<hash>`, as printed by `git describe --long`
static LONG_DESCRIBE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<tag>.+)-(?P<distance>\d+)-g(?P<hash>[0-9a-fA-F]+)$").unwrap()
});

/// A bare abbreviated hash, as printed by `git describe --always` without tags
static BARE_HASH: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-fA-F]{4,}$").unwrap());

/// Runs the git command line
#[derive(Debug, Clone)]
pub struct GitCli {
    program: String,
    timeout: Duration,
    tag_prefix: String,
}

impl GitCli {
    /// Creates a collaborator running `program` with the given timeout
    pub fn new(
        program: impl Into<String>,
        timeout: Duration,
        tag_prefix: impl Into<String>,
    ) -> Self {
        Self {
            program: program.into(),
            timeout,
            tag_prefix: tag_prefix.into(),
        }
    }

    /// Creates a collaborator from the `[describe]` configuration section
    pub fn from_config(config: &DescribeConfig) -> Self {
        Self::new(
            config.program.clone(),
            config.timeout(),
            config.tag_prefix.clone(),
        )
    }

    /// Returns the tag prefix
    pub fn tag_prefix(&self) -> &str {
        &self.tag_prefix
    }

    /// Runs git with `args` in `repo`, returning the captured output of a
    /// successful run
    fn run(&self, repo: &Path, args: &[&str]) -> Result<Output, ResolveError> {
        debug!(
            "Running {} {} in {}",
            self.program,
            args.join(" "),
            repo.display()
        );

        let mut command = Command::new(&self.program);
        command
            .args(args)
            .current_dir(repo)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = run_with_timeout(&mut command, self.timeout)?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ResolveError::CollaboratorUnavailable(format!(
                "{} {} exited with {}: {}",
                self.program,
                args.first().copied().unwrap_or_default(),
                output.status,
                stderr.trim()
            )));
        }

        Ok(output)
    }
}

impl DescriptorSource for GitCli {
    fn fetch(&self, repo: &Path) -> Result<RawDescriptor, ResolveError> {
        let output = self.run(
            repo,
            &["describe", "--tags", "--long", "--dirty", "--always"],
        )?;
        let stdout = String::from_utf8(output.stdout).map_err(|_| {
            ResolveError::MalformedDescriptor("describe output is not UTF-8".to_string())
        })?;
        let descriptor = parse_describe(&stdout, &self.tag_prefix)?;
        debug!("Described {} as {descriptor:?}", repo.display());
        Ok(descriptor)
    }
}

impl TagWriter for GitCli {
    fn create_tag(&self, repo: &Path, tag: &str, message: &str) -> Result<(), ResolveError> {
        self.run(repo, &["tag", "-a", tag, "-m", message])?;
        debug!("Created tag {tag} in {}", repo.display());
        Ok(())
    }
}

/// Spawns `command` and waits at most `timeout` for it to exit
///
/// On timeout the child is killed and reaped. The command's stdout and stderr
/// must be piped; their contents are returned in the [`Output`].
fn run_with_timeout(command: &mut Command, timeout: Duration) -> Result<Output, ResolveError> {
    let mut child = command
        .spawn()
        .map_err(|e| ResolveError::CollaboratorUnavailable(format!("failed to start: {e}")))?;

    // Drain both pipes on helper threads so a chatty child cannot block on a full pipe.
    let stdout = child.stdout.take().map(drain);
    let stderr = child.stderr.take().map(drain);

    let deadline = Instant::now() + timeout;
    let status = loop {
        match child.try_wait() {
            Ok(Some(status)) => break status,
            Ok(None) if Instant::now() >= deadline => {
                let _ = child.kill();
                let _ = child.wait();
                debug!("Killed collaborator after {} ms", timeout.as_millis());
                return Err(ResolveError::TimedOut(timeout));
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                let _ = child.kill();
                return Err(ResolveError::CollaboratorUnavailable(format!(
                    "failed to wait: {e}"
                )));
            }
        }
    };

    Ok(Output {
        status,
        stdout: stdout.map(collect).unwrap_or_default(),
        stderr: stderr.map(collect).unwrap_or_default(),
    })
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn collect(handle: thread::JoinHandle<Vec<u8>>) -> Vec<u8> {
    handle.join().unwrap_or_default()
}

/// Parses the output of `git describe --tags --long --dirty --always`
///
/// Accepted shapes:
/// - `<prefix><tag>-<distance>-g<hash>[-dirty]`
/// - `<hash>[-dirty]` (no reachable tag)
///
/// A zero distance is reported as an empty one. `tag_prefix` is stripped
/// from the tag when present.
pub fn parse_describe(output: &str, tag_prefix: &str) -> Result<RawDescriptor, ResolveError> {
    let line = output.trim();
    if line.is_empty() {
        return Err(ResolveError::MalformedDescriptor(
            "describe printed nothing".to_string(),
        ));
    }

    let suffix = format!("-{DIRTY_MARKER}");
    let (rest, dirty_flag) = match line.strip_suffix(&suffix) {
        Some(rest) => (rest, DIRTY_MARKER),
        None => (line, ""),
    };

    if let Some(caps) = LONG_DESCRIBE.captures(rest) {
        let tag = &caps["tag"];
        let tag = tag.strip_prefix(tag_prefix).unwrap_or(tag);
        let distance = caps["distance"].trim_start_matches('0');
        return Ok(RawDescriptor::new(tag, distance, &caps["hash"], dirty_flag));
    }

    if BARE_HASH.is_match(rest) {
        return Ok(RawDescriptor::new("", "", rest, dirty_flag));
    }

    Err(ResolveError::MalformedDescriptor(format!(
        "unrecognized describe output '{line}'"
    )))
}
