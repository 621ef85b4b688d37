// src/report/drain.rs
// =============================================================================
// The consumer end of the aggregation channel.
//
// drain() sits in a recv() loop and writes each finding the moment it
// arrives. It stops only when recv() returns None, which happens once the
// supervisor has closed the channel and every message sent before that has
// been received. Output order is arrival order, which varies between runs.
// =============================================================================

use std::io::Write;

use tokio::sync::mpsc::Receiver;
use tracing::debug;

use super::Finding;
use crate::error::CheckError;

// How findings are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// "<url>: <reason>" lines
    #[default]
    Text,
    /// One JSON object per line
    JsonLines,
}

// Counts of what was reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub broken_links: usize,
    pub bad_manifests: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.broken_links + self.bad_manifests
    }

    pub fn is_clean(&self) -> bool {
        self.total() == 0
    }

    fn record(&mut self, finding: &Finding) {
        if finding.is_link() {
            self.broken_links += 1;
        } else {
            self.bad_manifests += 1;
        }
    }
}

// Writes every finding from `rx` to `out` until the channel closes
pub async fn drain<W: Write>(
    mut rx: Receiver<Finding>,
    out: &mut W,
    format: OutputFormat,
) -> Result<Summary, CheckError> {
    let mut summary = Summary::default();

    while let Some(finding) = rx.recv().await {
        summary.record(&finding);
        match format {
            OutputFormat::Text => writeln!(out, "{}", finding)?,
            OutputFormat::JsonLines => {
                serde_json::to_writer(&mut *out, &finding)?;
                writeln!(out)?;
            }
        }
        // Lines show up as they arrive, not when the run ends
        out.flush()?;
    }

    debug!(total = summary.total(), "aggregation channel closed");
    Ok(summary)
}
