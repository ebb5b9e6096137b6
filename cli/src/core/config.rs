//! # MkSrc Assembly Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module defines the configuration for one assembly run: where the
//! external tarball script lives, where scratch extraction happens, where the
//! final archive goes, and, most importantly, the fixed, ordered deny-list
//! of prune rules applied to the extracted tree before repackaging.
//!
//! There is deliberately no configuration *file*: this tool encodes one
//! fixed pipeline for one fixed release layout, so the rule table lives in
//! code where it is auditable and covered by unit tests. The struct exists so
//! the whole layout can be swapped out in tests (temp directories, stub
//! scripts) without touching the pipeline logic.
//!
//! ## Architecture
//!
//! - `AssemblyConfig`: plain struct holding the version identifier and the
//!   three directories the pipeline touches, with helpers deriving every
//!   path and file name used by the pipeline states.
//! - `AssemblyConfig::prune_rules()`: the declarative deny-list table. Each
//!   entry pairs a pattern (or an allow-list) with a human-readable intent
//!   string, so the rule set reads as documentation of what gets stripped
//!   from the vendored dependency trees.
//!
//! ## Usage
//!
//! ```rust
//! let cfg = AssemblyConfig::new("1.2.3");
//! assert_eq!(cfg.archive_file_name(), "giada-1.2.3-src.tar.gz");
//! for rule in cfg.prune_rules() {
//!     // applied in declared order by the assembler
//! }
//! ```
//!
use crate::common::fs::prune::PruneRule;
use std::env;
use std::path::{Path, PathBuf};

/// Name stem of the packaged project; fixed for this release layout.
const PACKAGE_SLUG: &str = "giada";

/// Relative directory holding the external tarball-creation script.
const SCRIPTS_DIR: &str = "scripts";

/// File name of the external tarball-creation script.
const TARBALL_SCRIPT: &str = "create_source_tarball.sh";

/// Fixed relative output directory for the final archive.
const OUTPUT_DIR: &str = "dist";

/// Configuration for a single assembly run.
///
/// All fields are public so integration tests can point the pipeline at
/// temporary directories and stub tools; production code builds it once via
/// [`AssemblyConfig::new`] and never mutates it.
#[derive(Debug, Clone)]
pub struct AssemblyConfig {
    /// The version identifier supplied on the command line. Opaque: used
    /// only for interpolation into paths and file names.
    pub version: String,
    /// Directory containing the external tarball-creation script; also where
    /// that script drops the raw archive.
    pub scripts_dir: PathBuf,
    /// Scratch root for intermediate extraction. Resolved once at
    /// construction; intentionally not cleaned up after a run.
    pub scratch_dir: PathBuf,
    /// Output directory for the final archive. Must not exist yet.
    pub output_dir: PathBuf,
}

impl AssemblyConfig {
    /// Builds the configuration for a production run: scripts under
    /// `scripts/`, scratch under the system temp directory, output under
    /// `dist/`.
    pub fn new(version: &str) -> Self {
        Self {
            version: version.to_string(),
            scripts_dir: PathBuf::from(SCRIPTS_DIR),
            scratch_dir: env::temp_dir(),
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }

    /// Full path to the external tarball-creation script.
    pub fn tarball_script(&self) -> PathBuf {
        self.scripts_dir.join(TARBALL_SCRIPT)
    }

    /// File name shared by the raw and the final archive, e.g.
    /// `giada-1.2.3-src.tar.gz`.
    pub fn archive_file_name(&self) -> String {
        format!("{}-{}-src.tar.gz", PACKAGE_SLUG, self.version)
    }

    /// Where the external script leaves the raw archive.
    pub fn raw_archive_path(&self) -> PathBuf {
        self.scripts_dir.join(self.archive_file_name())
    }

    /// Name of the top-level directory inside the archive, e.g.
    /// `giada-1.2.3-src`. Also used as the `tar -C` member name on repack.
    pub fn source_root_name(&self) -> String {
        format!("{}-{}-src", PACKAGE_SLUG, self.version)
    }

    /// The extracted source tree under the scratch root.
    pub fn source_root(&self) -> PathBuf {
        self.scratch_dir.join(self.source_root_name())
    }

    /// Where the final pruned archive is written.
    pub fn final_archive_path(&self) -> PathBuf {
        self.output_dir.join(self.archive_file_name())
    }

    /// The fixed, ordered deny-list applied to the extracted tree.
    ///
    /// Each rule targets one vendored third-party subtree under
    /// `src/deps/`: oversized documentation, example/sample code, build and
    /// CI scaffolding, and GUI toolkit subtrees the build never uses. Rules
    /// target disjoint path sets, so the declared order does not affect the
    /// final tree, but it is preserved for reproducible output.
    ///
    /// A rule matching zero entries is not an error; several of the
    /// `rtaudio` entries below are inherited from the release layout and
    /// only match on checkouts that still carry those files.
    pub fn prune_rules(&self) -> Vec<PruneRule> {
        let deps = self.source_root().join("src").join("deps");

        vec![
            // --- JUCE ---
            PruneRule::glob("JUCE documentation", pattern(&deps, "juce/docs")),
            PruneRule::glob("JUCE example projects", pattern(&deps, "juce/examples")),
            // The build only needs the CMake machinery out of juce/extras;
            // everything else (Projucer, AudioPluginHost, BinaryBuilder, ...)
            // is dropped. Expressed as an allow-list of what survives rather
            // than a negated glob, which is not portable across platforms.
            PruneRule::retain_only(
                "JUCE extra tooling (keep CMake build files only)",
                deps.join("juce").join("extras"),
                &["Build", "CMakeLists.txt"],
            ),
            PruneRule::glob("JUCE CI scaffolding", pattern(&deps, "juce/.github")),
            // --- RtAudio ---
            PruneRule::glob("RtAudio CMake helpers", pattern(&deps, "rtaudio/cmake")),
            PruneRule::glob("RtAudio contrib tree", pattern(&deps, "rtaudio/contrib")),
            PruneRule::glob("RtAudio documentation", pattern(&deps, "rtaudio/doc")),
            PruneRule::glob("RtAudio test programs", pattern(&deps, "rtaudio/tests")),
            PruneRule::glob("RtAudio autotools bootstrap", pattern(&deps, "rtaudio/autogen.sh")),
            PruneRule::glob("RtAudio changelog", pattern(&deps, "rtaudio/autogen.sh/ChangeLog")),
            PruneRule::glob(
                "RtAudio CMake lists",
                pattern(&deps, "rtaudio/autogen.sh/CMakeLists.txt"),
            ),
            PruneRule::glob(
                "RtAudio autoconf input",
                pattern(&deps, "rtaudio/autogen.sh/configure.ac"),
            ),
            PruneRule::glob(
                "RtAudio install notes",
                pattern(&deps, "rtaudio/autogen.sh/install.txt"),
            ),
            PruneRule::glob("RtAudio license copy", pattern(&deps, "rtaudio/autogen.sh/LICENSE")),
            PruneRule::glob(
                "RtAudio automake input",
                pattern(&deps, "rtaudio/autogen.sh/Makefile.am"),
            ),
            PruneRule::glob("RtAudio readme", pattern(&deps, "rtaudio/autogen.sh/README.md")),
            PruneRule::glob(
                "RtAudio pkg-config template",
                pattern(&deps, "rtaudio/autogen.sh/rtaudio.pc.in"),
            ),
            PruneRule::glob(
                "RtAudio C wrapper source",
                pattern(&deps, "rtaudio/autogen.sh/rtaudio_c.cpp"),
            ),
            PruneRule::glob(
                "RtAudio C wrapper header",
                pattern(&deps, "rtaudio/autogen.sh/rtaudio_c.h"),
            ),
            // --- VST3 SDK ---
            PruneRule::glob("VST3 SDK documentation", pattern(&deps, "vst3sdk/doc")),
            PruneRule::glob(
                "VST3 SDK sample plug-ins",
                pattern(&deps, "vst3sdk/public.sdk/samples"),
            ),
            PruneRule::glob("VST3 SDK GUI toolkit (unused)", pattern(&deps, "vst3sdk/vstgui4")),
        ]
    }
}

/// Joins a relative deny-list entry onto the deps root and renders it as a
/// glob pattern string.
fn pattern(deps: &Path, rel: &str) -> String {
    deps.join(rel).display().to_string()
}
