//! # MkSrc Filesystem Utilities (`common::fs`)
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! Aggregates the filesystem-related utilities of the tool:
//!
//! - **`io`**: output-directory creation (create-or-fail, no merge).
//! - **`prune`**: the path pruner: deny-list rules, glob resolution, and
//!   strict classify-then-delete removal of matched entries.
//!
//! Callers import from the specific submodule, e.g.
//! `crate::common::fs::prune::remove_matching`.
//!

/// Output-directory creation.
pub mod io;
/// Deny-list rules and strict removal of matched filesystem entries.
pub mod prune;
