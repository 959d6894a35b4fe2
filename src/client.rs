use std::time::Duration;

use serde::Deserialize;

use crate::error::{BoardError, BoardResult};

pub const API_URL: &str = "https://icanhazdadjoke.com/";

/// Shown (and cached) when the API cannot be reached and nothing is cached.
pub const FALLBACK_JOKE: &str =
    "Why don't scientists trust atoms? Because they make up everything!";

// icanhazdadjoke asks for a descriptive User-Agent.
const USER_AGENT: &str = concat!(
    "dadjokes-board/",
    env!("CARGO_PKG_VERSION"),
    " (LED scoreboard plugin)"
);

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct JokeResponse {
    joke: String,
}

pub struct JokeClient {
    agent: ureq::Agent,
    url: String,
}

impl JokeClient {
    pub fn new() -> Self {
        Self::with_url(API_URL)
    }

    /// Point the client somewhere else; tests run a local server.
    pub fn with_url(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(HTTP_TIMEOUT)
            .timeout_read(HTTP_TIMEOUT)
            .build();
        Self {
            agent,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET, one joke. Non-2xx and transport failures come back as
    /// `Network`, an unusable body as `Parse`.
    pub fn fetch(&self) -> BoardResult<String> {
        let response = self
            .agent
            .get(&self.url)
            .set("Accept", "application/json")
            .set("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => BoardError::network(format!("http status {}", code)),
                ureq::Error::Transport(t) => BoardError::network(t.to_string()),
            })?;

        let body = response
            .into_string()
            .map_err(|e| BoardError::network(format!("read body: {}", e)))?;
        let parsed: JokeResponse = serde_json::from_str(&body)
            .map_err(|e| BoardError::parse(format!("bad joke payload: {}", e)))?;

        Ok(parsed.joke)
    }
}

impl Default for JokeClient {
    fn default() -> Self {
        Self::new()
    }
}
