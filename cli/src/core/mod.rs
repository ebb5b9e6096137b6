//! # MkSrc Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! Core infrastructure shared across the application:
//! - `config`: the per-run assembly configuration and the fixed deny-list
//!   of prune rules
//! - `error`: error types and the `Result` alias
//!
//! ## Usage
//!
//! ```rust
//! use crate::core::config::AssemblyConfig;
//! use crate::core::error::{MksrcError, Result};
//! ```
//!
pub mod config;
pub mod error;
