// src/summary/mod.rs
// =============================================================================
// This module turns decoded GitHub events into a human-readable digest.
//
// Submodules:
// - activity: classifies one event by type tag and formats its line
// - render: joins the lines under the "Output:" header
// =============================================================================

mod activity;
mod render;

pub use render::{MalformedPolicy, Renderer};
