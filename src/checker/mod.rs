// src/checker/mod.rs
// =============================================================================
// This module contains the per-URL logic.
//
// Submodules:
// - url: decides which manifest strings are real, absolute URLs
// - http: probes one URL with a GET and classifies the answer
//
// Everything here works on a single URL at a time. Running many probes at
// once is the job of the fanout module.
// =============================================================================

mod http;
mod url;

pub use http::{probe, FailureReason, LinkStatus, Outcome};
pub use url::is_valid_url;
