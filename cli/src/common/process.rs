//! # MkSrc Process Execution Utilities (`common::process`)
//!
//! File: cli/src/common/process.rs
//!
//! ## Overview
//!
//! This module wraps external process execution for the assembly pipeline.
//! Both archival steps go through here: the project-specific tarball script
//! and the operating system's `tar` for extraction and repackaging.
//!
//! The contract is intentionally blunt. The child inherits the parent's
//! stdout and stderr, so the external tool's own diagnostics land on the
//! operator's terminal unfiltered. The call blocks (awaits) until the child
//! exits; there is no timeout, no retry, and no capture. Any exit status
//! other than zero is mapped into [`MksrcError::ExternalCommand`], which
//! aborts the whole pipeline.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::process;
//!
//! # async fn run_example() -> crate::core::error::Result<()> {
//! process::run_command("tar", &["zxf".into(), "pkg.tar.gz".into()]).await?;
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::{MksrcError, Result};
use anyhow::Context;
use std::ffi::OsStr;
use tokio::process::Command;
use tracing::debug;

/// Runs an external command to completion with inherited stdio.
///
/// # Arguments
///
/// * `program` - The program path or name to execute.
/// * `args` - Arguments passed to the program, one per element.
///
/// # Returns
///
/// * `Result<()>` - `Ok(())` only if the process exited with status zero.
///
/// # Errors
///
/// Returns an `Err` if the process cannot be spawned (e.g., the program
/// does not exist) or if it exits with a non-zero status. Either way the
/// caller is expected to abort; no cleanup of whatever the child left
/// behind is attempted here.
pub async fn run_command<S: AsRef<OsStr>>(program: S, args: &[String]) -> Result<()> {
    // Not named `display`: tracing macros resolve that identifier to
    // `tracing::field::display` inside their expansion.
    let cmd_line = format!(
        "{} {}",
        program.as_ref().to_string_lossy(),
        args.join(" ")
    );
    debug!("Running external command: {}", cmd_line);

    // stdin/stdout/stderr are inherited by default for `status()`; the
    // external tool talks straight to the operator's terminal.
    let status = Command::new(program.as_ref())
        .args(args)
        .status()
        .await
        .with_context(|| format!("Failed to spawn external command: {cmd_line}"))?;

    if !status.success() {
        anyhow::bail!(MksrcError::ExternalCommand {
            cmd: cmd_line,
            status: status.to_string(),
        });
    }
    Ok(())
}
