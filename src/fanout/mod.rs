// src/fanout/mod.rs
// =============================================================================
// This module runs the checks concurrently.
//
// Submodules:
// - counter: shared count of outstanding tasks, used to detect the end
// - coordinator: spawns manifest and probe tasks, closes the channel at the end
//
// Rust concepts:
// - tokio::spawn: many small tasks, each one mostly waiting on I/O
// - Arc + atomics: state shared safely between all those tasks
// - RAII guards: "this task is done" is signalled by Drop, so it can't be
//   forgotten on an early return or a panic
// =============================================================================

mod coordinator;
mod counter;

pub use coordinator::start;
