//! # MkSrc Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the mksrc CLI, the tool
//! that assembles a pruned, redistributable source archive for a release.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the assembly pipeline handler
//!
//! ## Architecture
//!
//! mksrc is a single-purpose tool, so there is no subcommand tree: the one
//! positional argument (the version identifier) flows straight into the
//! `commands::assemble` handler. All errors are propagated back to this
//! level, printed once, and turned into exit status 1: the same exit code
//! for a missing argument, a failing external tool, an unexpected
//! filesystem entry during pruning, or a pre-existing output directory.
//!
//! ## Examples
//!
//! ```bash
//! # Assemble the 1.2.3 source release into dist/
//! mksrc 1.2.3
//!
//! # Same, with debug logging on stderr
//! mksrc -vv 1.2.3
//! ```
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // The assembly pipeline handler.
mod common; // Shared utilities (process execution, filesystem).
mod core; // Core infrastructure (errors, assembly configuration).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "mksrc",
    about = "Assembles a pruned, redistributable source release archive",
    long_about = "Creates the raw source tarball via the external packaging script,\n\
                  extracts it to scratch storage, strips deny-listed vendored\n\
                  dependency paths, and repacks the result into dist/.",
    version
)]
struct Cli {
    #[command(flatten)]
    args: commands::assemble::AssembleArgs,
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    if let Err(e) = commands::assemble::handle_assemble(cli.args).await {
        tracing::error!("Assembly failed: {:?}", e);
        // {:#} prints the whole context chain on one line, so the operator
        // sees which pipeline state failed and why.
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
