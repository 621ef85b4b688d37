// src/error.rs
// =============================================================================
// Error types for the library.
//
// Two kinds of failure exist:
// - ManifestError: one manifest could not be read or parsed. This never stops
//   a run; it becomes a finding for that file and the other files carry on.
// - CheckError: the run itself can't proceed (bad root, HTTP client setup,
//   output stream gone).
//
// The binary wraps these in anyhow::Error; the library keeps them typed so
// callers and tests can match on them.
// =============================================================================

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("cannot read manifest: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot parse manifest: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl ManifestError {
    pub fn path(&self) -> &Path {
        match self {
            ManifestError::Read { path, .. } | ManifestError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("directory does not exist: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    RootNotDirectory(PathBuf),

    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode finding: {0}")]
    Encode(#[from] serde_json::Error),
}
