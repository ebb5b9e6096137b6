//! # MkSrc Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! Small filesystem helpers shared by the pipeline. Currently this is only
//! output-directory creation, which has the opposite policy of the usual
//! `mkdir -p` convenience: the output directory must *not* exist yet. A
//! pre-existing `dist/` almost certainly holds a previous run's artifact,
//! and this tool has no merge or overwrite semantics; the operator is
//! expected to remove it and re-run.
//!
use crate::core::error::{MksrcError, Result};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::info;

/// Creates the output directory, failing if it already exists.
///
/// The parent directory must already exist (`fs::create_dir`, not
/// `create_dir_all`): the output directory is a fixed relative path directly
/// under the working directory.
///
/// # Errors
///
/// Returns an `Err` if the path already exists (whatever its kind) or if
/// creation fails for any other reason (permissions, missing parent).
pub fn create_output_dir(path: &Path) -> Result<()> {
    if path.exists() {
        anyhow::bail!(MksrcError::FileSystem(format!(
            "output directory {:?} already exists; remove it and re-run",
            path
        )));
    }
    fs::create_dir(path)
        .with_context(|| format!("Failed to create output directory {:?}", path))?;
    info!("Created output directory: {:?}", path);
    Ok(())
}
