//! # MkSrc Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration test files in `cli/tests/`. Each
//! `.rs` file in that directory is compiled as a separate test crate
//! running against the compiled `mksrc` binary.
//!

// Allow potentially unused code in this common module, as different test
// files might use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;

/// Creates an `assert_cmd::Command` pointing at the compiled `mksrc`
/// binary for the current test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn mksrc_cmd() -> Command {
    Command::cargo_bin("mksrc").expect("Failed to find mksrc binary for testing")
}
