//! HTTP client wrapper - fetches page info from the backend

use thiserror::Error;

use crate::config::Config;
use crate::constants::{INFO_PATH, URL_PARAM};
use crate::models::{FailureKind, FetchFailure};

/// Why a page info fetch failed
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body is not JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Transport(_) => FailureKind::Transport,
            FetchError::Parse(_) => FailureKind::Parse,
        }
    }
}

impl From<&FetchError> for FetchFailure {
    fn from(err: &FetchError) -> Self {
        let message = match err {
            FetchError::Transport(e) if e.is_connect() => format!("Connection failed: {}", e),
            FetchError::Transport(e) if e.is_builder() => format!("Invalid request URL: {}", e),
            FetchError::Transport(e) => format!("Request failed: {}", e),
            FetchError::Parse(e) => format!("Invalid JSON body: {}", e),
        };
        FetchFailure {
            kind: err.kind(),
            message,
        }
    }
}

/// Client for the `GET {host}/info?url={target}` endpoint
#[derive(Clone, Debug)]
pub struct PageInfoClient {
    http: reqwest::Client,
    host: String,
}

impl PageInfoClient {
    /// No timeout is configured; a request lives until the transport gives up.
    pub fn new(config: &Config) -> Self {
        PageInfoClient {
            http: reqwest::Client::new(),
            host: config.api_host.clone(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Build the endpoint address. `target` goes in as-is, unescaped.
    pub fn info_url(&self, target: &str) -> String {
        format!("{}{}?{}={}", self.host, INFO_PATH, URL_PARAM, target)
    }

    /// Issue a single GET and parse whatever comes back as JSON.
    ///
    /// The HTTP status is not inspected: a 500 with a JSON error body is
    /// returned as `Ok`.
    pub async fn fetch_page_info(&self, target: &str) -> Result<serde_json::Value, FetchError> {
        let url = self.info_url(target);
        let resp = self.http.get(&url).send().await?;
        tracing::debug!(%url, status = resp.status().as_u16(), "Page info response headers received");
        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
