// src/github/fetch.rs
// =============================================================================
// This module fetches a user's public activity from the GitHub REST API.
//
// Strategy:
// - Build the endpoint {base_url}/users/{username}/events
// - Issue exactly one GET with a bounded timeout (no retries, no paging)
// - Anything other than 200 OK is a failure that carries the status line
// - Decode the body as a JSON array of EventRecord, keeping server order
//
// Every failure maps to one FetchError variant so callers can tell a
// network problem from a bad status from a body we could not understand.
// =============================================================================

use std::time::Duration;

use anyhow::Context;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};
use url::Url;

use super::event::EventRecord;
use crate::summary::Renderer;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything that can go wrong between a username and a decoded event list.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("username must not be empty")]
    EmptyUsername,

    /// "." and ".." would be collapsed out of the URL path instead of being sent
    #[error("username {0:?} cannot be used as a URL path segment")]
    InvalidUsername(String),

    #[error("base URL {0} cannot be used as an API root")]
    InvalidBaseUrl(Url),

    /// The request could not be sent, timed out, or the body could not be read
    #[error("request failed")]
    Transport(#[from] reqwest::Error),

    #[error("error non ok status code: {status}")]
    HttpStatus { status: StatusCode },

    #[error("error decoding response")]
    Decode(#[source] serde_json::Error),
}

/// Settings for an [`EventFetcher`].
#[derive(Debug, Clone)]
pub struct FetcherConfig {
    /// API root, `https://api.github.com` unless overridden
    pub base_url: Url,
    /// Upper bound for the whole request, 10 seconds by default
    pub timeout: Duration,
    /// GitHub rejects requests that do not send a User-Agent
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EventFetcher {
    base_url: Url,
    client: Client,
}

impl EventFetcher {
    pub fn new(config: FetcherConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            client,
        })
    }

    // Builds {base_url}/users/{username}/events
    //
    // The username goes in as a single path segment. We don't check it against
    // GitHub's username rules; the url crate only percent-encodes what it must.
    //
    // Dot segments are the exception: the url crate drops them (and treats
    // "%2e" as a dot), so /users/../events would silently become /users/events.
    pub fn endpoint(&self, username: &str) -> Result<Url, FetchError> {
        if username.is_empty() {
            return Err(FetchError::EmptyUsername);
        }
        if is_dot_segment(username) {
            return Err(FetchError::InvalidUsername(username.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["users", username, "events"]);

        Ok(url)
    }

    /// Fetches the most recent public events of `username`, newest first.
    #[tracing::instrument(skip(self))]
    pub async fn user_events(&self, username: &str) -> Result<Vec<EventRecord>, FetchError> {
        let url = self.endpoint(username)?;
        debug!(%url, "requesting user events");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus { status });
        }

        let body = response.bytes().await?;
        let events: Vec<EventRecord> = serde_json::from_slice(&body).map_err(FetchError::Decode)?;

        info!(count = events.len(), "fetched user events");
        Ok(events)
    }

    /// Fetches the events of `username` and renders them as a digest.
    pub async fn user_events_summary(
        &self,
        username: &str,
        renderer: &Renderer,
    ) -> anyhow::Result<String> {
        let events = self
            .user_events(username)
            .await
            .with_context(|| format!("error getting user events for {:?}", username))?;

        let summary = renderer.render(&events)?;
        Ok(summary)
    }
}

// True for ".", "..", and their percent-encoded spellings like "%2E" or ".%2e"
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a FetchError enum instead of anyhow here?
//    - Callers (and tests) can match on the variant: a 404 is not a timeout
//    - thiserror's #[error("...")] writes the Display impl for us
//    - #[from] lets `?` turn a reqwest::Error into FetchError::Transport
//
// 2. Why is the client built once in EventFetcher::new?
//    - The timeout and User-Agent live on the client
//    - Building can fail (e.g. TLS backend setup), so new() returns a Result
//
// 3. Why bytes() and serde_json::from_slice instead of response.json()?
//    - response.json() reports decode failures as reqwest::Error
//    - Decoding ourselves keeps "bad body" (Decode) apart from "bad network" (Transport)
//
// 4. What does #[tracing::instrument] do?
//    - Opens a span named after the function, recording its arguments
//    - Every debug!/info! inside is tagged with the username
// -----------------------------------------------------------------------------
