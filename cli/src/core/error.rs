//! # MkSrc Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types used throughout the mksrc application.
//! Every failure class the tool can hit is fatal: the pipeline never retries
//! and never rolls back, so the error system exists to carry a precise,
//! human-readable reason up to `main`, which prints it and exits non-zero.
//!
//! ## Architecture
//!
//! The error system consists of two components:
//! - `MksrcError`: A custom error enum using `thiserror` for the specific
//!   failure classes of the assembly pipeline
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error
//!   propagation and `.context()` enrichment at call sites
//!
//! The variants cover the full failure taxonomy of the tool:
//! - Missing version argument (usage error)
//! - External command spawned but exited non-zero
//! - A prune pattern matched a filesystem entry that is neither a plain
//!   file nor a directory
//! - Malformed glob pattern in the deny-list
//! - General filesystem failures (including a pre-existing output directory)
//!
use thiserror::Error;

/// Custom error type for the mksrc application.
#[derive(Error, Debug)]
pub enum MksrcError {
    #[error("missing required package-version argument (usage: mksrc <package-version>)")]
    Usage,

    #[error("external command failed: {cmd} ({status})")]
    ExternalCommand { cmd: String, status: String },

    #[error("unexpected filesystem entry (not a plain file or directory): {path}")]
    UnexpectedEntry { path: String },

    #[error("invalid prune pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("filesystem error: {0}")]
    FileSystem(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let usage = MksrcError::Usage;
        assert_eq!(
            usage.to_string(),
            "missing required package-version argument (usage: mksrc <package-version>)"
        );

        let external = MksrcError::ExternalCommand {
            cmd: "tar zxf archive.tar.gz".into(),
            status: "exit status: 2".into(),
        };
        assert_eq!(
            external.to_string(),
            "external command failed: tar zxf archive.tar.gz (exit status: 2)"
        );

        let entry = MksrcError::UnexpectedEntry {
            path: "/tmp/foo-1.0-src/src/deps/dangling".into(),
        };
        assert!(entry.to_string().contains("not a plain file or directory"));
        assert!(entry.to_string().contains("dangling"));
    }

    #[test]
    fn test_filesystem_error_display() {
        let fs_err = MksrcError::FileSystem("output directory 'dist' already exists".into());
        assert_eq!(
            fs_err.to_string(),
            "filesystem error: output directory 'dist' already exists"
        );
    }
}
