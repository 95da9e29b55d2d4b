// src/summary/activity.rs
// =============================================================================
// Classifies an EventRecord by its type tag into a typed Activity.
//
// Each known event kind gets one variant that carries only the fields its
// summary line needs. Those fields are decoded with serde at classification
// time, so a PushEvent whose "commits" is not an array fails here with a
// serde error instead of producing a wrong line later.
//
// Unknown type tags are not errors: they become Activity::NotImplemented.
// =============================================================================

use std::fmt;

use serde::de::{self, IgnoredAny};
use serde::Deserialize;

use crate::github::EventRecord;

pub const COMMIT_COMMENT_EVENT: &str = "CommitCommentEvent";
pub const CREATE_EVENT: &str = "CreateEvent";
pub const DELETE_EVENT: &str = "DeleteEvent";
pub const FORK_EVENT: &str = "ForkEvent";
pub const ISSUE_COMMENT_EVENT: &str = "IssueCommentEvent";
pub const PUSH_EVENT: &str = "PushEvent";
pub const PULL_REQUEST_EVENT: &str = "PullRequestEvent";

/// One event, reduced to what its summary line needs.
///
/// Everything is borrowed from the record it came from; classifying an
/// event never copies its payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activity<'a> {
    CommitComment { repo: &'a str },
    Create { repo: &'a str, ref_type: &'a str },
    Delete { repo: &'a str, ref_type: &'a str, git_ref: &'a str },
    Fork { repo: &'a str, forkee: &'a str },
    IssueComment { repo: &'a str, action: &'a str },
    Push { repo: &'a str, commits: usize },
    PullRequest { repo: &'a str, action: &'a str },
    NotImplemented { event_type: &'a str },
}

// payload.forkee of a ForkEvent; every other field GitHub sends is skipped
#[derive(Deserialize)]
struct Forkee<'a> {
    full_name: &'a str,
}

impl<'a> Activity<'a> {
    /// Picks the rule for `event.event_type` and decodes the payload fields it needs.
    pub fn classify(event: &'a EventRecord) -> Result<Self, serde_json::Error> {
        let repo = event.repo_name();

        let activity = match event.event_type.as_str() {
            COMMIT_COMMENT_EVENT => Activity::CommitComment { repo },
            CREATE_EVENT => Activity::Create {
                repo,
                ref_type: field(event, "ref_type")?,
            },
            DELETE_EVENT => Activity::Delete {
                repo,
                ref_type: field(event, "ref_type")?,
                git_ref: field(event, "ref")?,
            },
            FORK_EVENT => {
                let forkee: Forkee = field(event, "forkee")?;
                Activity::Fork {
                    repo,
                    forkee: forkee.full_name,
                }
            }
            ISSUE_COMMENT_EVENT => Activity::IssueComment {
                repo,
                action: field(event, "action")?,
            },
            PUSH_EVENT => {
                // Only the length matters; IgnoredAny is zero-sized so this
                // walks the array without allocating per commit
                let commits: Vec<IgnoredAny> = field(event, "commits")?;
                Activity::Push {
                    repo,
                    commits: commits.len(),
                }
            }
            PULL_REQUEST_EVENT => Activity::PullRequest {
                repo,
                action: field(event, "action")?,
            },
            other => Activity::NotImplemented { event_type: other },
        };

        Ok(activity)
    }
}

// Decodes payload[key] in place. &serde_json::Value is itself a Deserializer,
// so strings come out borrowed from the record.
fn field<'a, T: Deserialize<'a>>(
    event: &'a EventRecord,
    key: &'static str,
) -> Result<T, serde_json::Error> {
    match event.payload.get(key) {
        Some(value) => T::deserialize(value),
        None => Err(de::Error::missing_field(key)),
    }
}

impl fmt::Display for Activity<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::CommitComment { repo } => write!(f, "Commented on commit in {}", repo),
            Activity::Create { repo, ref_type } => write!(f, "Created {} {}", ref_type, repo),
            Activity::Delete {
                repo,
                ref_type,
                git_ref,
            } => write!(f, "Deleted {} {} from {}", ref_type, git_ref, repo),
            Activity::Fork { repo, forkee } => write!(f, "Forked {} to {}", forkee, repo),
            Activity::IssueComment { repo, action } => {
                write!(f, "Comment {} on issue in {}", action, repo)
            }
            Activity::Push { repo, commits } => write!(f, "Pushed {} commits to {}", commits, repo),
            Activity::PullRequest { repo, action } => {
                write!(f, "Pull request {} {}", action.replace('_', " "), repo)
            }
            Activity::NotImplemented { event_type } => write!(f, "{:?} is not implemented", event_type),
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is the 'a on Activity<'a>?
//    - A lifetime: Activity holds &str slices that point into an EventRecord
//    - The compiler makes sure the Activity never outlives that record
//    - In exchange, classifying an event allocates nothing
//
// 2. Why an enum with one variant per event kind?
//    - match on it must cover every variant, so adding a kind without a
//      summary line is a compile error
//    - Each variant only has the fields its line uses
//
// 3. What is IgnoredAny?
//    - A serde type that accepts any JSON value and throws it away
//    - Vec<IgnoredAny> means "must be an array, contents don't matter"
//
// 4. Why {:?} in the NotImplemented line?
//    - Debug formatting of a string wraps it in quotes: "XYZEvent"
// -----------------------------------------------------------------------------
