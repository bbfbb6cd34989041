//! Scraper configuration

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::error::ScrapeError;
use crate::extractors::{DamageTakenSource, ExtractorConfig};

pub const DEFAULT_URL: &str = "https://aramnerfs.com/";
pub const DEFAULT_OUTPUT: &str = "champions.json";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for one scrape run, loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    /// Page listing the balance adjustments
    pub url: Url,
    /// Where the JSON document is written
    pub output_path: PathBuf,
    /// Global request timeout
    pub timeout: Duration,
    pub user_agent: String,
    pub extractor: ExtractorConfig,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            url: Url::parse(DEFAULT_URL).expect("default URL is valid"),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: default_user_agent(),
            extractor: ExtractorConfig::default(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ScrapeError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults for unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScrapeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("ARAM_NERFS_URL") {
            config.url = Url::parse(raw.trim())
                .map_err(|e| invalid("ARAM_NERFS_URL", e.to_string()))?;
        }

        if let Some(raw) = lookup("ARAM_NERFS_OUTPUT") {
            if raw.trim().is_empty() {
                return Err(invalid("ARAM_NERFS_OUTPUT", "must not be empty"));
            }
            config.output_path = PathBuf::from(raw.trim());
        }

        if let Some(raw) = lookup("ARAM_NERFS_TIMEOUT_SECS") {
            let secs: u64 = raw
                .trim()
                .parse()
                .map_err(|e| invalid("ARAM_NERFS_TIMEOUT_SECS", format!("{e}")))?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(raw) = lookup("ARAM_NERFS_USER_AGENT") {
            config.user_agent = raw;
        }

        if let Some(raw) = lookup("ARAM_NERFS_DAMAGE_TAKEN") {
            config.extractor.damage_taken = raw
                .parse::<DamageTakenSource>()
                .map_err(|reason| invalid("ARAM_NERFS_DAMAGE_TAKEN", reason))?;
        }

        Ok(config)
    }
}

fn default_user_agent() -> String {
    format!("aram-nerfs/{}", env!("CARGO_PKG_VERSION"))
}

fn invalid(key: &str, reason: impl Into<String>) -> ScrapeError {
    ScrapeError::Config {
        key: key.to_string(),
        reason: reason.into(),
    }
}
