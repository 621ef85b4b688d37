// src/manifest/mod.rs
// =============================================================================
// This module knows what a resource manifest looks like.
//
// The checker treats a manifest as a bag of candidate URLs; the year / unit /
// resource nesting only matters for how we walk it.
// =============================================================================

mod schema;

pub use schema::{Manifest, Resource, Unit, Year};
