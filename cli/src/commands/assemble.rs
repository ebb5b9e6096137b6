//! # MkSrc Release Assembly Handler
//!
//! File: cli/src/commands/assemble.rs
//!
//! ## Overview
//!
//! This module implements the one job mksrc has: assembling a clean,
//! redistributable source archive for a release. Given a version
//! identifier, it drives a fixed, strictly sequential pipeline over an
//! externally-produced raw tarball, strips the deny-listed parts of the
//! vendored dependency trees, and repacks the result into `dist/`.
//!
//! ## Architecture
//!
//! The pipeline states, in order, first failure terminal:
//!
//! 1. **Validate**: a version identifier must be present; a missing one is
//!    a usage error reported before any filesystem or process side effect.
//! 2. **CreateRawArchive**: invoke `scripts/create_source_tarball.sh -v
//!    <version>`, which drops `giada-<version>-src.tar.gz` next to itself.
//! 3. **Extract**: `tar zxf <raw> -C <scratch>` into the scratch root.
//! 4. **CleanRawArchive**: remove the raw tarball (through the pruner, so
//!    an unexpected entry kind fails the same way a prune rule would).
//! 5. **Prune**: apply the fixed deny-list table from
//!    [`AssemblyConfig::prune_rules`] in declared order.
//! 6. **CreateOutputDir**: create `dist/`; a pre-existing directory is an
//!    error, there are no merge semantics.
//! 7. **Repack**: `tar -zcvf dist/giada-<version>-src.tar.gz -C <scratch>
//!    giada-<version>-src/`.
//! 8. **Done**: print the completion message.
//!
//! Failure at any state leaves the filesystem in whatever partial state the
//! failing step produced. This is a build-time tool, not a transactional
//! system; the operator remediates (typically by deleting `dist/`) and
//! re-runs. Scratch contents are left behind on success too.
//!
//! ## Usage
//!
//! ```bash
//! mksrc 1.2.3
//! # -> dist/giada-1.2.3-src.tar.gz
//! ```
//!
use crate::{
    common::{
        fs::{io, prune},
        process,
    },
    core::{
        config::AssemblyConfig,
        error::{MksrcError, Result},
    },
};
use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

/// # Assemble Arguments (`AssembleArgs`)
///
/// The command-line arguments of the assembly pipeline.
///
/// The version is declared optional at the clap level on purpose: the tool
/// reports its own usage error and exits with status 1, rather than letting
/// clap's missing-argument handling exit with status 2.
#[derive(Parser, Debug)]
pub struct AssembleArgs {
    /// The release version identifier, e.g. `1.2.3`. Opaque to the tool;
    /// interpolated into archive and directory names.
    // Distinct id: the flattened parent command defines `--version`, and
    // clap requires argument ids to be unique across the whole command.
    #[arg(id = "package-version", value_name = "VERSION")]
    pub version: Option<String>,
}

/// # Handle Assemble Command (`handle_assemble`)
///
/// The main asynchronous handler: validates the version argument, builds
/// the fixed [`AssemblyConfig`] for it, and runs the pipeline.
///
/// ## Arguments
///
/// * `args`: The parsed `AssembleArgs` with the optional version.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` only if every pipeline state succeeded.
/// * `Err`: The first failing state's error: usage, external tool,
///   unexpected filesystem entry, or pre-existing output directory.
pub async fn handle_assemble(args: AssembleArgs) -> Result<()> {
    let version = validate_version(args.version.as_deref())?;
    info!("Assembling source release for version {}", version);

    let config = AssemblyConfig::new(version);
    run_pipeline(&config).await
}

/// Confirms a non-empty version identifier was supplied.
///
/// Runs before any side effect. No format validation beyond non-emptiness:
/// the identifier is an opaque string.
fn validate_version(version: Option<&str>) -> Result<&str> {
    match version {
        Some(v) if !v.is_empty() => Ok(v),
        _ => anyhow::bail!(MksrcError::Usage),
    }
}

/// Runs the assembly pipeline states 2-8 against an explicit configuration.
///
/// Taking the configuration as a parameter (rather than building it
/// internally) keeps the whole pipeline drivable from tests with temporary
/// directories and stub external tools.
pub async fn run_pipeline(config: &AssemblyConfig) -> Result<()> {
    debug!("Pipeline configuration: {:?}", config);

    // --- CreateRawArchive ---
    println!("Invoke tarball script...");
    process::run_command(
        config.tarball_script(),
        &["-v".into(), config.version.clone()],
    )
    .await
    .context("Source tarball creation failed")?;

    // --- Extract ---
    println!("Untar the result to {}...", config.scratch_dir.display());
    process::run_command(
        "tar",
        &[
            "zxf".into(),
            config.raw_archive_path().display().to_string(),
            "-C".into(),
            config.scratch_dir.display().to_string(),
        ],
    )
    .await
    .context("Extraction of the raw archive failed")?;

    // --- CleanRawArchive ---
    println!("Remove the tar file...");
    prune::remove_matching(&config.raw_archive_path().display().to_string())?;

    // --- Prune ---
    println!("Remove useless stuff...");
    for rule in config.prune_rules() {
        rule.apply()
            .with_context(|| format!("Prune rule failed: {}", rule.intent()))?;
    }

    // --- CreateOutputDir ---
    println!("Create output directory...");
    io::create_output_dir(&config.output_dir)?;

    // --- Repack ---
    println!("Re-create tar.gz archive...");
    process::run_command(
        "tar",
        &[
            "-zcvf".into(),
            config.final_archive_path().display().to_string(),
            "-C".into(),
            config.scratch_dir.display().to_string(),
            format!("{}/", config.source_root_name()),
        ],
    )
    .await
    .context("Repackaging the pruned tree failed")?;

    // --- Done ---
    println!("Done.");
    Ok(())
}
