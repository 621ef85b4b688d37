// src/lib.rs
// =============================================================================
// manifest-guardian checks that every URL listed in a tree of YAML resource
// manifests is still alive.
//
// Pipeline:
// 1. discover: walk the root directory, collect manifest paths
// 2. fanout: one task per manifest, one task per URL inside it
// 3. checker: each URL task makes one GET and keeps only failures
// 4. report: a single loop prints failures as they come in
//
// The binary (src/main.rs) is a thin clap wrapper around `check`.
// =============================================================================

pub mod checker;
pub mod config;
pub mod discover;
pub mod error;
pub mod fanout;
pub mod manifest;
pub mod report;

use std::io::Write;
use std::path::PathBuf;

pub use config::{CheckSettings, DiscoverySettings};
pub use error::{CheckError, ManifestError};
pub use report::{Finding, OutputFormat, Summary};

// Checks every manifest in `manifests` and writes the findings to `out`
//
// Returns once the last probe has finished and its finding (if any) has been
// written.
pub async fn check<W: Write>(
    manifests: Vec<PathBuf>,
    settings: &CheckSettings,
    out: &mut W,
    format: OutputFormat,
) -> Result<Summary, CheckError> {
    let findings = fanout::start(manifests, settings)?;
    report::drain(findings, out, format).await
}
