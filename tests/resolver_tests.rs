//! Integration tests for the failsafe version resolver
//!
//! The collaborator is scripted, so these tests never touch a real
//! repository except to give the resolver an existing directory.

mod common;

use common::ScriptedRepo;
use descver::{RawDescriptor, RepoLocation, ResolveError, VersionResolver};
use std::time::Duration;

fn existing_dir() -> RepoLocation {
    RepoLocation::new(env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_resolves_descriptor_from_collaborator() {
    let resolver = VersionResolver::new(
        existing_dir(),
        ScriptedRepo::describing(RawDescriptor::new("1.4.0", "2", "9fceb02", "")),
    );

    assert_eq!(resolver.resolve(), "1.4.0.post2+9fceb02");
    assert_eq!(
        resolver.source().fetched.borrow().as_slice(),
        [env!("CARGO_MANIFEST_DIR").to_string()]
    );
}

#[test]
fn test_unavailable_collaborator_falls_back() {
    let resolver = VersionResolver::new(
        existing_dir(),
        ScriptedRepo::failing(|| ResolveError::CollaboratorUnavailable("no git".to_string())),
    );
    assert_eq!(resolver.resolve(), "0.0.0");
}

#[test]
fn test_malformed_descriptor_falls_back() {
    let resolver = VersionResolver::new(
        existing_dir(),
        ScriptedRepo::failing(|| ResolveError::MalformedDescriptor("???".to_string())),
    );
    assert_eq!(resolver.resolve(), "0.0.0");
}

#[test]
fn test_timeout_falls_back() {
    let resolver = VersionResolver::new(
        existing_dir(),
        ScriptedRepo::failing(|| ResolveError::TimedOut(Duration::from_millis(250))),
    );
    assert_eq!(resolver.resolve(), "0.0.0");
    assert!(matches!(
        resolver.try_resolve(),
        Err(ResolveError::TimedOut(_))
    ));
}

#[test]
fn test_cleared_location_falls_back_without_querying() {
    let mut resolver = VersionResolver::new(
        existing_dir(),
        ScriptedRepo::describing(RawDescriptor::new("3.0", "", "", "")),
    );
    assert_eq!(resolver.resolve(), "3.0");

    resolver.repo_mut().clear();

    assert!(resolver.repo().is_unset());
    assert_eq!(resolver.resolve(), "0.0.0");
    assert_eq!(resolver.source().fetched.borrow().len(), 1);
}

#[test]
fn test_missing_directory_falls_back() {
    let dir = tempfile::tempdir().unwrap();
    let gone = dir.path().join("gone");
    let resolver = VersionResolver::new(
        RepoLocation::new(&gone),
        ScriptedRepo::describing(RawDescriptor::new("3.0", "", "", "")),
    );

    assert_eq!(resolver.resolve(), "0.0.0");
    assert!(matches!(
        resolver.try_resolve(),
        Err(ResolveError::InvalidRepoLocation(path)) if path == gone
    ));
}

#[test]
fn test_resolver_accepts_borrowed_source() {
    let source = ScriptedRepo::describing(RawDescriptor::new("", "", "unknown", "dirty"));
    let resolver = VersionResolver::new(existing_dir(), &source);

    assert_eq!(resolver.resolve(), "0.0.0+unknown.dirty");
    assert_eq!(source.fetched.borrow().len(), 1);
}
