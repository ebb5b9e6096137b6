//! # MkSrc CLI Integration Tests
//!
//! File: cli/tests/assemble.rs
//!
//! ## Overview
//!
//! Verifies the CLI surface of the `mksrc` binary: the usage-error path for
//! a missing version argument, the exit code contract (always 1 on
//! failure), and that failures early in the pipeline leave no output
//! directory behind. The pipeline internals themselves are covered by the
//! unit tests in `src/commands/assemble.rs`.
//!

mod common;

use common::mksrc_cmd;
use predicates::prelude::*;
use tempfile::tempdir;

/// With no positional argument the tool must exit with status 1 (not
/// clap's 2) and print a usage hint, before any side effect.
#[test]
fn test_missing_version_exits_one_with_usage() {
    let cwd = tempdir().unwrap();

    mksrc_cmd()
        .current_dir(cwd.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("usage: mksrc <package-version>"));

    // No side effects: the output directory was never created.
    assert!(!cwd.path().join("dist").exists());
}

/// An empty version string is the same usage error as a missing one.
#[test]
fn test_empty_version_exits_one_with_usage() {
    let cwd = tempdir().unwrap();

    mksrc_cmd()
        .current_dir(cwd.path())
        .arg("")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("package-version"));
}

/// With a version but no packaging script on disk, the first external
/// invocation fails and the run stops there: exit 1, no output directory.
#[test]
fn test_missing_tarball_script_fails_before_output() {
    let cwd = tempdir().unwrap();

    mksrc_cmd()
        .current_dir(cwd.path())
        .arg("1.2.3")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("create_source_tarball.sh"));

    assert!(!cwd.path().join("dist").exists());
}

/// The help text names the one positional argument.
#[test]
fn test_help_mentions_version_argument() {
    mksrc_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("VERSION"));
}
