//! # MkSrc Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! Root of the shared utility modules used by the assembly pipeline. These
//! are cross-cutting concerns kept separate from the command logic
//! (`commands::`) and the core infrastructure (`core::`):
//!
//! - **`fs`**: filesystem operations, covering output-directory creation and the
//!   path pruner with its deny-list rule types.
//! - **`process`**: external process execution with inherited stdio and
//!   fail-fast exit-status handling.
//!

/// Filesystem operations (`io`, `prune`).
pub mod fs;
/// External process execution.
pub mod process;
