// src/report/finding.rs
// =============================================================================
// A Finding is one problem worth printing. It's the message type that flows
// through the aggregation channel.
//
// Two kinds exist:
// - Link: a probe failed (non-200 status or no response)
// - Manifest: a manifest file couldn't be read or parsed, so none of its
//   links were checked
// =============================================================================

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::checker::Outcome;
use crate::error::ManifestError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "finding", rename_all = "snake_case")]
pub enum Finding {
    Link(Outcome),
    Manifest { path: PathBuf, reason: String },
}

impl Finding {
    pub fn is_link(&self) -> bool {
        matches!(self, Finding::Link(_))
    }
}

impl From<ManifestError> for Finding {
    fn from(error: ManifestError) -> Self {
        Finding::Manifest {
            path: error.path().to_path_buf(),
            reason: error.to_string(),
        }
    }
}

// The report line: "<url>: <reason>" or "<path>: <reason>"
impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::Link(outcome) => fmt::Display::fmt(outcome, f),
            Finding::Manifest { path, reason } => write!(f, "{}: {}", path.display(), reason),
        }
    }
}
