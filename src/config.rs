// src/config.rs
// =============================================================================
// Knobs for a checking run.
//
// Both knobs are off by default, which means: no request timeout and no cap on
// how many requests are in flight at once. That matches how the checker has
// always behaved; they're there for large manifest trees or hostile networks.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use crate::discover::DEFAULT_EXTENSIONS;

// Where the manifests live when no root is given on the command line
pub const DEFAULT_ROOT: &str = "./parcours-hybridation";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoverySettings {
    pub root: PathBuf,
    /// Accepted manifest extensions, without the dot
    pub extensions: Vec<String>,
}

impl Default for DiscoverySettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckSettings {
    /// Upper bound for a whole request, connect to last header. None = wait forever.
    pub request_timeout: Option<Duration>,
    /// Max HTTP requests in flight. None = one per URL, all at once.
    pub max_concurrency: Option<usize>,
}
