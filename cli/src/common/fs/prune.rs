//! # MkSrc Path Pruner
//!
//! File: cli/src/common/fs/prune.rs
//!
//! ## Overview
//!
//! This module implements the path pruner: the step that strips the
//! deny-listed parts of vendored dependency trees out of the extracted
//! source before it is repackaged. It is the only non-trivial logic in the
//! tool, and it is deliberately strict.
//!
//! A rule resolves to zero or more filesystem entries. Every matched entry
//! is classified *before* anything is deleted:
//!
//! - a plain file is removed with `fs::remove_file`
//! - a directory is removed recursively with `fs::remove_dir_all`
//! - anything else (symbolic links of any kind, sockets, devices) is a
//!   hard error, aborting the whole run
//!
//! The last case is a deliberate strictness choice: an unexpected entry kind
//! inside a vendored dependency tree usually means a stale or corrupted
//! checkout, and that must not be silently packaged. Classification uses
//! `symlink_metadata` (lstat), so a broken symlink fails as an unexpected
//! entry instead of surfacing as a confusing I/O error mid-deletion.
//!
//! Matching zero entries is *not* an error: several deny-list entries only
//! exist on some checkouts, and re-running the pruner after a successful
//! prune legitimately matches nothing (the pruner is idempotent and keeps no
//! state across calls).
//!
//! ## Architecture
//!
//! - `PruneRule`: one deny-list entry, pairing a human-readable intent with
//!   a `PruneAction`.
//! - `PruneAction::Glob`: delete everything a glob pattern matches
//!   (resolution via the `glob` crate).
//! - `PruneAction::RetainOnly`: delete every direct child of a directory
//!   except a fixed allow-list of names. This exists because "everything in
//!   this directory except X and Y" is not portably expressible as a glob;
//!   negated character-class patterns behave differently across platforms.
//! - `remove_matching` / `remove_entry`: the resolution and
//!   classify-then-delete primitives, also used by the assembler to clean up
//!   the raw archive. Wildcard-free patterns bypass the glob machinery and
//!   are resolved with lstat directly, so a dangling symlink at a literal
//!   deny-list path is still seen (and rejected) rather than skipped.
//!
use crate::core::error::{MksrcError, Result};
use anyhow::Context;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One entry of the fixed deny-list: what to remove, and why.
#[derive(Debug, Clone)]
pub struct PruneRule {
    /// Human-readable description of what this rule strips.
    intent: &'static str,
    /// How the targeted entries are resolved.
    action: PruneAction,
}

/// How a [`PruneRule`] resolves its targets.
#[derive(Debug, Clone)]
enum PruneAction {
    /// Delete every entry the glob pattern matches.
    Glob { pattern: String },
    /// Delete every direct child of `dir` whose file name is not in `keep`.
    RetainOnly {
        dir: PathBuf,
        keep: &'static [&'static str],
    },
}

impl PruneRule {
    /// A rule deleting everything `pattern` matches.
    pub fn glob(intent: &'static str, pattern: String) -> Self {
        Self {
            intent,
            action: PruneAction::Glob { pattern },
        }
    }

    /// A rule deleting every direct child of `dir` except the names in
    /// `keep`. A missing `dir` is a no-op, consistent with a glob matching
    /// zero entries.
    pub fn retain_only(intent: &'static str, dir: PathBuf, keep: &'static [&'static str]) -> Self {
        Self {
            intent,
            action: PruneAction::RetainOnly { dir, keep },
        }
    }

    /// The human-readable intent this rule was declared with.
    pub fn intent(&self) -> &'static str {
        self.intent
    }

    /// The pattern or directory this rule targets, for logs and tests.
    pub fn target_description(&self) -> String {
        match &self.action {
            PruneAction::Glob { pattern } => pattern.clone(),
            PruneAction::RetainOnly { dir, .. } => dir.display().to_string(),
        }
    }

    /// Applies the rule against the current filesystem state.
    ///
    /// Each removed entry is printed. Fails on the first entry that cannot
    /// be classified or deleted; a partially-applied rule leaves whatever
    /// state the failing deletion produced (no rollback, by design).
    pub fn apply(&self) -> Result<()> {
        debug!("Applying prune rule '{}' ({})", self.intent, self.target_description());
        match &self.action {
            PruneAction::Glob { pattern } => remove_matching(pattern),
            PruneAction::RetainOnly { dir, keep } => retain_only(dir, keep),
        }
    }
}

/// Deletes every filesystem entry matching `pattern`.
///
/// Matching zero entries is a no-op. Each match goes through
/// [`remove_entry`], so unexpected entry kinds fail the whole call.
///
/// # Errors
///
/// Returns an `Err` if the pattern itself is malformed, if a match cannot
/// be read while resolving the glob, or if any matched entry fails
/// classification or deletion.
pub fn remove_matching(pattern: &str) -> Result<()> {
    // Wildcard-free patterns are resolved with lstat, not through the glob
    // machinery: glob stats literal paths and would silently skip a
    // dangling symlink, which is exactly the entry kind that must fail the
    // run instead.
    if !has_magic(pattern) {
        let path = Path::new(pattern);
        if fs::symlink_metadata(path).is_ok() {
            remove_entry(path)?;
        }
        return Ok(());
    }

    // Resolve the pattern first; a malformed pattern is a programming error
    // in the deny-list table, reported as such.
    let matches = glob::glob(pattern).map_err(|source| MksrcError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    for entry in matches {
        let path =
            entry.with_context(|| format!("Failed to resolve match for pattern '{pattern}'"))?;
        remove_entry(&path)?;
    }
    Ok(())
}

/// Whether `pattern` contains any glob metacharacter.
fn has_magic(pattern: &str) -> bool {
    pattern.chars().any(|c| matches!(c, '*' | '?' | '['))
}

/// Deletes every direct child of `dir` whose file name is not in `keep`.
///
/// A missing `dir` is a no-op. Children are classified and deleted through
/// [`remove_entry`], with the same strictness as glob matches.
fn retain_only(dir: &Path, keep: &[&str]) -> Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        // Nothing to prune; the tree never had (or no longer has) this dir.
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read directory {:?}", dir));
        }
    };

    for entry in entries {
        let entry = entry.with_context(|| format!("Failed to read entry in {:?}", dir))?;
        let name = entry.file_name();
        if keep.iter().any(|k| name == OsStr::new(k)) {
            debug!("Retaining {:?}", entry.path());
            continue;
        }
        remove_entry(&entry.path())?;
    }
    Ok(())
}

/// Classifies `path` and deletes it: files directly, directories
/// recursively.
///
/// Classification uses `symlink_metadata`, so symbolic links (broken or
/// not) and special files are rejected as [`MksrcError::UnexpectedEntry`]
/// rather than followed or silently skipped.
fn remove_entry(path: &Path) -> Result<()> {
    // Classify before touching anything. lstat, not stat: a symlink must be
    // seen as a symlink, not as whatever it points at.
    let metadata = fs::symlink_metadata(path)
        .with_context(|| format!("Failed to inspect entry {:?}", path))?;
    let kind = metadata.file_type();

    if kind.is_file() {
        println!("Remove {}", path.display());
        fs::remove_file(path).with_context(|| format!("Failed to remove file {:?}", path))?;
    } else if kind.is_dir() {
        println!("Remove {}", path.display());
        fs::remove_dir_all(path)
            .with_context(|| format!("Failed to remove directory {:?}", path))?;
    } else {
        // Symlink, socket, device... a vendored tree should contain none of
        // these; treat it as a corrupted checkout.
        anyhow::bail!(MksrcError::UnexpectedEntry {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    /// A pattern matching nothing must be a successful no-op.
    #[test]
    fn test_zero_matches_is_noop() -> Result<()> {
        let base = tempdir()?;
        let pattern = base.path().join("does-not-exist-*").display().to_string();
        remove_matching(&pattern)?;
        Ok(())
    }

    /// A matched plain file is removed, and nothing else is touched.
    #[test]
    fn test_removes_matched_file() -> Result<()> {
        let base = tempdir()?;
        let doomed = base.path().join("ChangeLog");
        let survivor = base.path().join("README.md");
        fs::write(&doomed, "history")?;
        fs::write(&survivor, "keep me")?;

        remove_matching(&doomed.display().to_string())?;

        assert!(!doomed.exists());
        assert!(survivor.exists());
        Ok(())
    }

    /// A matched directory is removed recursively, leaving no partial tree.
    #[test]
    fn test_removes_directory_recursively() -> Result<()> {
        let base = tempdir()?;
        let docs = base.path().join("docs");
        fs::create_dir_all(docs.join("images/screenshots"))?;
        fs::write(docs.join("manual.md"), "...")?;
        fs::write(docs.join("images/logo.png"), "...")?;

        remove_matching(&docs.display().to_string())?;

        assert!(!docs.exists());
        Ok(())
    }

    /// A wildcard pattern removes every match in one call.
    #[test]
    fn test_wildcard_removes_all_matches() -> Result<()> {
        let base = tempdir()?;
        fs::write(base.path().join("a.bak"), "")?;
        fs::write(base.path().join("b.bak"), "")?;
        fs::write(base.path().join("keep.txt"), "")?;

        let pattern = base.path().join("*.bak").display().to_string();
        remove_matching(&pattern)?;

        assert!(!base.path().join("a.bak").exists());
        assert!(!base.path().join("b.bak").exists());
        assert!(base.path().join("keep.txt").exists());
        Ok(())
    }

    /// Re-running a rule after a successful prune matches zero entries and
    /// succeeds again (idempotence).
    #[test]
    fn test_prune_is_idempotent() -> Result<()> {
        let base = tempdir()?;
        let target = base.path().join("examples");
        fs::create_dir(&target)?;
        let pattern = target.display().to_string();

        remove_matching(&pattern)?;
        assert!(!target.exists());
        // Second application: zero matches, must not fail.
        remove_matching(&pattern)?;
        Ok(())
    }

    /// A malformed glob pattern is reported as a pattern error, not
    /// swallowed.
    #[test]
    fn test_malformed_pattern_is_error() {
        let result = remove_matching("deps/[invalid");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid prune pattern"));
    }

    /// A broken symbolic link is neither a file nor a directory: the prune
    /// must fail fast instead of silently skipping it.
    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_fails_fast() -> Result<()> {
        use std::os::unix::fs::symlink;

        let base = tempdir()?;
        let link = base.path().join("dangling");
        symlink(base.path().join("no-such-target"), &link)?;

        let result = remove_matching(&link.display().to_string());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unexpected filesystem entry"));
        // The link itself must still be there; nothing was deleted.
        assert!(fs::symlink_metadata(&link).is_ok());
        Ok(())
    }

    /// A dangling symlink caught by a wildcard pattern fails the same way
    /// as one at a literal path.
    #[cfg(unix)]
    #[test]
    fn test_broken_symlink_via_wildcard_fails() -> Result<()> {
        use std::os::unix::fs::symlink;

        let base = tempdir()?;
        symlink(base.path().join("gone"), base.path().join("stale.bak"))?;
        fs::write(base.path().join("real.bak"), "")?;

        let pattern = base.path().join("*.bak").display().to_string();
        assert!(remove_matching(&pattern).is_err());
        Ok(())
    }

    /// An intact symlink is still rejected: the pruner only ever deletes
    /// plain files and real directories.
    #[cfg(unix)]
    #[test]
    fn test_intact_symlink_is_rejected() -> Result<()> {
        use std::os::unix::fs::symlink;

        let base = tempdir()?;
        let target = base.path().join("real-dir");
        fs::create_dir(&target)?;
        let link = base.path().join("alias");
        symlink(&target, &link)?;

        let result = remove_matching(&link.display().to_string());
        assert!(result.is_err());
        // The link target must be untouched.
        assert!(target.exists());
        Ok(())
    }

    /// `retain_only` deletes everything except the allow-list, including
    /// nested directories.
    #[test]
    fn test_retain_only_keeps_allow_list() -> Result<()> {
        let base = tempdir()?;
        let extras = base.path().join("extras");
        fs::create_dir_all(extras.join("Build"))?;
        fs::create_dir_all(extras.join("BinaryBuilder/Source"))?;
        fs::create_dir_all(extras.join("Projucer"))?;
        fs::write(extras.join("CMakeLists.txt"), "add_subdirectory(Build)")?;
        fs::write(extras.join("README.md"), "...")?;

        let rule = PruneRule::retain_only("test allow-list", extras.clone(), &["Build", "CMakeLists.txt"]);
        rule.apply()?;

        assert!(extras.join("Build").exists());
        assert!(extras.join("CMakeLists.txt").exists());
        assert!(!extras.join("BinaryBuilder").exists());
        assert!(!extras.join("Projucer").exists());
        assert!(!extras.join("README.md").exists());
        Ok(())
    }

    /// `retain_only` over a directory that does not exist is a no-op, like
    /// a glob matching nothing.
    #[test]
    fn test_retain_only_missing_dir_is_noop() -> Result<()> {
        let base = tempdir()?;
        let rule = PruneRule::retain_only(
            "test missing dir",
            base.path().join("never-extracted"),
            &["Build"],
        );
        rule.apply()?;
        Ok(())
    }
}
