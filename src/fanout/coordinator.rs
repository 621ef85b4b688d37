// src/fanout/coordinator.rs
// =============================================================================
// Turns a list of manifest paths into a stream of findings.
//
// Task layout for one run:
//
//   start()
//     ├── manifest task (one per path)        reads + parses one file
//     │     └── probe task (one per URL)      one GET, emits on failure
//     └── supervisor                          waits for drain, closes channel
//
// Every task owns a WorkGuard (see counter.rs) registered by whoever spawned
// it. The aggregation channel has exactly one strong Sender, owned by the
// supervisor; tasks only hold WeakSenders and upgrade them for the duration of
// a send. So the channel closes at one well-defined point: when the
// supervisor drops its Sender after the counter hits zero.
//
// A manifest that can't be read or parsed doesn't stop anything. It turns into
// a Finding::Manifest and the other manifests keep going.
// =============================================================================

use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;
use tokio::sync::mpsc::{self, Receiver, Sender, WeakSender};
use tokio::sync::Semaphore;
use tracing::{debug, info, warn};

use super::counter::{WorkCounter, WorkGuard};
use crate::checker::{is_valid_url, probe};
use crate::config::CheckSettings;
use crate::error::CheckError;
use crate::manifest::Manifest;
use crate::report::Finding;

// One slot: a producer waits until the aggregator has taken the previous
// finding, which is as close to an unbuffered channel as tokio's mpsc gets.
const CHANNEL_CAPACITY: usize = 1;

// Everything a task needs, cloned into each one
#[derive(Debug, Clone)]
struct Coordinator {
    client: Client,
    counter: WorkCounter,
    results: WeakSender<Finding>,
    limiter: Option<Arc<Semaphore>>,
}

// Starts checking `manifests` and returns the receiving end of the findings
//
// Must be called from inside a tokio runtime. The returned channel closes once
// every manifest and every URL found in them has been dealt with.
pub fn start(
    manifests: Vec<PathBuf>,
    settings: &CheckSettings,
) -> Result<Receiver<Finding>, CheckError> {
    let client = build_client(settings)?;
    let (tx, rx) = mpsc::channel(CHANNEL_CAPACITY);

    let coordinator = Coordinator {
        client,
        counter: WorkCounter::new(),
        results: tx.downgrade(),
        limiter: settings
            .max_concurrency
            .map(|permits| Arc::new(Semaphore::new(permits.clamp(1, Semaphore::MAX_PERMITS)))),
    };

    // Register the whole first wave before anything runs or waits
    let jobs: Vec<(PathBuf, WorkGuard)> = manifests
        .into_iter()
        .map(|path| (path, coordinator.counter.register()))
        .collect();

    info!(manifests = jobs.len(), "starting link check");

    spawn_supervisor(coordinator.counter.clone(), tx);

    for (path, guard) in jobs {
        let worker = coordinator.clone();
        tokio::spawn(async move {
            let _guard = guard;
            worker.check_manifest(path).await;
        });
    }

    Ok(rx)
}

fn build_client(settings: &CheckSettings) -> Result<Client, CheckError> {
    let mut builder = Client::builder();
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    Ok(builder.build()?)
}

// The only place the channel gets closed
fn spawn_supervisor(counter: WorkCounter, tx: Sender<Finding>) {
    tokio::spawn(async move {
        counter.wait_drained().await;
        debug!("all tasks finished, closing aggregation channel");
        drop(tx);
    });
}

impl Coordinator {
    async fn check_manifest(&self, path: PathBuf) {
        let manifest = match Manifest::load(&path).await {
            Ok(manifest) => manifest,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping manifest");
                self.emit(e.into()).await;
                return;
            }
        };

        let mut scheduled = 0usize;
        for url in manifest.urls() {
            if !is_valid_url(url) {
                debug!(path = %path.display(), %url, "ignoring malformed url");
                continue;
            }
            self.spawn_probe(url.to_string());
            scheduled += 1;
        }

        debug!(path = %path.display(), scheduled, "manifest processed");
    }

    // Registers the probe from the calling (manifest) task, then spawns it
    fn spawn_probe(&self, url: String) {
        let guard = self.counter.register();
        let worker = self.clone();
        tokio::spawn(async move {
            let _guard = guard;
            worker.check_link(url).await;
        });
    }

    async fn check_link(&self, url: String) {
        // Held until the request is done; the task itself is already counted
        let _permit = match &self.limiter {
            Some(limiter) => limiter.acquire().await.ok(),
            None => None,
        };

        let outcome = probe(&self.client, url).await;
        if !outcome.is_ok() {
            self.emit(Finding::Link(outcome)).await;
        }
    }

    async fn emit(&self, finding: Finding) {
        // Upgrading can't fail while this task's guard is alive: the
        // supervisor keeps the strong Sender until the count reaches zero.
        let Some(tx) = self.results.upgrade() else {
            warn!(%finding, "aggregation channel already closed");
            return;
        };

        if tx.send(finding).await.is_err() {
            // Receiver dropped, e.g. stdout went away. Nothing left to report to.
            debug!("aggregator stopped listening, finding dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_out_of_range_concurrency_is_clamped() {
        for permits in [0, usize::MAX] {
            let settings = CheckSettings {
                max_concurrency: Some(permits),
                ..CheckSettings::default()
            };
            let mut rx = start(Vec::new(), &settings).unwrap();
            assert!(rx.recv().await.is_none());
        }
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why not tokio's JoinSet or a Vec of JoinHandles?
//    - Probe tasks are created by manifest tasks, not by start(), so there's
//      no single place that could own all the handles
//    - A counter only needs to be shared, not owned
//
// 2. Why register in the parent and not at the top of the child?
//    - A spawned task may not run for a while. If it registered itself, the
//      parent could finish first and the count could read zero while the
//      child is still queued
//
// 3. What is a WeakSender?
//    - A handle that doesn't keep the channel open on its own
//    - upgrade() turns it back into a Sender, or None if the channel is closed
// -----------------------------------------------------------------------------
