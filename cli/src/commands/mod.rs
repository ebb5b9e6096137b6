//! # MkSrc Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! Aggregates the command handlers of the mksrc CLI. The tool is
//! single-purpose, so there is exactly one command module:
//!
//! - `assemble`: the release assembly pipeline (validate, create raw
//!   archive, extract, prune, repack)
//!
//! The module defines its own arguments structure and handler function,
//! which `main.rs` routes into after parsing.
//!

/// The release assembly pipeline.
pub mod assemble;
