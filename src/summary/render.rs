// src/summary/render.rs
// =============================================================================
// Turns a list of events into the text digest:
//
//   Output:
//   - Pushed 2 commits to u/r
//   - Created branch u/r
//
// One "- " line per event, in the order the events were given. What happens
// to an event whose payload does not match its type is decided once, by the
// Renderer's MalformedPolicy, and applies to every event kind the same way.
// =============================================================================

use std::fmt::Write as _;

use thiserror::Error;
use tracing::warn;

use super::activity::Activity;
use crate::github::EventRecord;

pub const HEADER: &str = "Output:";

/// What to do with an event whose payload is missing a field its type needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MalformedPolicy {
    /// Fail the whole render on the first malformed event
    #[default]
    Abort,
    /// Leave the event out of the digest and keep going
    Skip,
}

#[derive(Debug, Error)]
#[error("malformed {event_type} payload (event #{index} in {repo})")]
pub struct RenderError {
    /// Zero-based position of the event in the input
    pub index: usize,
    pub event_type: String,
    pub repo: String,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    policy: MalformedPolicy,
}

impl Renderer {
    pub fn new(policy: MalformedPolicy) -> Self {
        Self { policy }
    }

    pub fn render(&self, events: &[EventRecord]) -> Result<String, RenderError> {
        // The header is always printed, even when there are no events
        let mut out = String::new();
        out.push_str(HEADER);
        out.push('\n');

        // enumerate() gives us the position for error messages and logs
        for (index, event) in events.iter().enumerate() {
            let activity = match Activity::classify(event) {
                Ok(activity) => activity,
                // A match guard: this arm only runs when the policy says skip
                Err(source) if self.policy == MalformedPolicy::Skip => {
                    warn!(
                        index,
                        event_type = %event.event_type,
                        repo = %event.repo_name(),
                        error = %source,
                        "skipping event with malformed payload"
                    );
                    continue;
                }
                // Abort: nothing rendered so far is returned
                Err(source) => {
                    return Err(RenderError {
                        index,
                        event_type: event.event_type.clone(),
                        repo: event.repo_name().to_string(),
                        source,
                    })
                }
            };

            // Writing to a String cannot fail
            let _ = writeln!(out, "- {}", activity);
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn events(value: serde_json::Value) -> Vec<EventRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_input_is_header_only() {
        let out = Renderer::default().render(&[]).unwrap();
        assert_eq!(out, "Output:\n");
    }

    #[test]
    fn test_one_line_per_event_in_order() {
        let input = events(json!([
            { "type": "PushEvent", "repo": { "name": "u/r" }, "payload": { "commits": ["a", "b"] } },
            { "type": "CreateEvent", "repo": { "name": "u/r" }, "payload": { "ref_type": "branch" } },
            { "type": "XYZEvent", "repo": { "name": "u/r" }, "payload": {} },
            { "type": "PullRequestEvent", "repo": { "name": "u/r" }, "payload": { "action": "review_request_removed" } },
            { "type": "DeleteEvent", "repo": { "name": "u/r" }, "payload": { "ref_type": "tag", "ref": "v1.0" } },
            { "type": "ForkEvent", "repo": { "name": "u/fork" }, "payload": { "forkee": { "full_name": "o/r" } } },
            { "type": "IssueCommentEvent", "repo": { "name": "u/r" }, "payload": { "action": "created" } },
            { "type": "CommitCommentEvent", "repo": { "name": "u/r" }, "payload": {} }
        ]));

        let out = Renderer::default().render(&input).unwrap();

        assert_eq!(
            out,
            "Output:\n\
             - Pushed 2 commits to u/r\n\
             - Created branch u/r\n\
             - \"XYZEvent\" is not implemented\n\
             - Pull request review request removed u/r\n\
             - Deleted tag v1.0 from u/r\n\
             - Forked o/r to u/fork\n\
             - Comment created on issue in u/r\n\
             - Commented on commit in u/r\n"
        );
        assert_eq!(out.lines().filter(|l| l.starts_with("- ")).count(), input.len());
        assert_eq!(out.lines().next(), Some(HEADER));
    }

    #[test]
    fn test_render_is_deterministic() {
        let input = events(json!([
            { "type": "PushEvent", "repo": { "name": "u/r" }, "payload": { "commits": ["a"] } },
            { "type": "GollumEvent", "repo": { "name": "u/wiki" }, "payload": {} }
        ]));
        let renderer = Renderer::default();

        assert_eq!(renderer.render(&input).unwrap(), renderer.render(&input).unwrap());
    }

    #[test]
    fn test_abort_on_malformed_payload() {
        let input = events(json!([
            { "type": "CreateEvent", "repo": { "name": "u/r" }, "payload": { "ref_type": "branch" } },
            { "type": "ForkEvent", "repo": { "name": "u/r" }, "payload": {} }
        ]));

        let err = Renderer::new(MalformedPolicy::Abort).render(&input).unwrap_err();

        assert_eq!(err.index, 1);
        assert_eq!(err.event_type, "ForkEvent");
        assert_eq!(err.repo, "u/r");
        assert_eq!(err.to_string(), "malformed ForkEvent payload (event #1 in u/r)");
    }

    #[test]
    fn test_skip_malformed_payload() {
        let input = events(json!([
            { "type": "PushEvent", "repo": { "name": "u/r" }, "payload": { "commits": "oops" } },
            { "type": "CreateEvent", "repo": { "name": "u/r" }, "payload": { "ref_type": "branch" } },
            { "type": "ForkEvent", "repo": { "name": "u/r" }, "payload": {} }
        ]));

        let out = Renderer::new(MalformedPolicy::Skip).render(&input).unwrap();

        assert_eq!(out, "Output:\n- Created branch u/r\n");
    }

    #[test]
    fn test_unknown_types_are_never_malformed() {
        let input = events(json!([
            { "type": "MemberEvent", "repo": { "name": "u/r" } }
        ]));

        let out = Renderer::new(MalformedPolicy::Abort).render(&input).unwrap();
        assert_eq!(out, "Output:\n- \"MemberEvent\" is not implemented\n");
    }
}
