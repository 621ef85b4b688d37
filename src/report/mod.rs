// src/report/mod.rs
// =============================================================================
// This module is the fan-in side of a run: the message type carried by the
// aggregation channel, and the loop that drains it.
// =============================================================================

mod drain;
mod finding;

pub use drain::{drain, OutputFormat, Summary};
pub use finding::Finding;
