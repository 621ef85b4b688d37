// src/discover/mod.rs
// =============================================================================
// This module finds the manifest files to check.
//
// Discovery runs once, up front, and hands back a list of paths. Nothing is
// accumulated in global state: the caller owns the list and passes it on to
// the fanout coordinator.
// =============================================================================

mod walk;

pub use walk::{find_manifests, DEFAULT_EXTENSIONS};
