// src/github/mod.rs
// =============================================================================
// This module talks to the GitHub REST API.
//
// Currently implements:
// - The EventRecord wire shape for /users/{username}/events
// - A single-request fetcher with a configurable base URL and timeout
//
// Deliberately missing: authentication, pagination and rate-limit handling.
// Each invocation makes one unauthenticated request for the first page.
// =============================================================================

mod event;
mod fetch;

pub use event::EventRecord;
pub use fetch::{EventFetcher, FetcherConfig, DEFAULT_BASE_URL};

// Only tests build EventRecord values by hand
#[cfg(test)]
pub use event::EventRepo;
