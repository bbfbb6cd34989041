//! Page retrieval
//!
//! A [`PageSource`] hands back the status code and body of a single GET.
//! Deciding what counts as a failed status is left to the caller.

use std::time::Duration;

use tracing::debug;
use ureq::Agent;
use url::Url;

use crate::error::ScrapeError;

/// Status and body of one response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

impl FetchedPage {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

pub trait PageSource {
    fn fetch(&self, url: &Url) -> Result<FetchedPage, ScrapeError>;
}

/// Blocking HTTP fetcher backed by `ureq`
pub struct HttpFetcher {
    agent: Agent,
    user_agent: String,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: impl Into<String>) -> Self {
        // 4xx/5xx come back as responses so the status can be reported
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            user_agent: user_agent.into(),
        }
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<FetchedPage, ScrapeError> {
        let transport = |source: ureq::Error| ScrapeError::Transport {
            url: url.to_string(),
            source: Box::new(source),
        };

        let response = self
            .agent
            .get(url.as_str())
            .header("User-Agent", self.user_agent.as_str())
            .call()
            .map_err(transport)?;

        let status = response.status().as_u16();
        let body = response
            .into_body()
            .read_to_string()
            .map_err(transport)?;

        debug!(%url, status, bytes = body.len(), "fetched page");
        Ok(FetchedPage { status, body })
    }
}
