// src/github/event.rs
// =============================================================================
// The wire shape of one item returned by GET /users/{username}/events.
//
// Only the fields we need are declared. serde ignores everything else GitHub
// sends (id, actor, org, public, ...), so new upstream fields never break us.
//
// The payload is kept as an open JSON object on purpose: its schema depends
// on the event type, and turning it into something typed is the job of
// summary::Activity, not of the decoder.
// =============================================================================

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One activity item as returned by the GitHub events API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The event kind, e.g. "PushEvent"
    #[serde(rename = "type")]
    pub event_type: String,

    /// The repository the event concerns
    pub repo: EventRepo,

    /// Type-dependent payload; a missing payload decodes as an empty object
    #[serde(default)]
    pub payload: Map<String, Value>,

    /// ISO-8601 timestamp, carried through but unused by the digest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRepo {
    /// Fully-qualified "owner/repo" name
    pub name: String,
}

impl EventRecord {
    pub fn repo_name(&self) -> &str {
        &self.repo.name
    }
}
