//! One fetch → parse → extract → save cycle

use std::path::PathBuf;

use scraper::Html;
use tracing::{info, warn};

use crate::config::ScraperConfig;
use crate::error::ScrapeError;
use crate::extractors::ChampionExtractor;
use crate::fetch::{HttpFetcher, PageSource};
use crate::store;

/// Summary of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub url: String,
    pub output_path: PathBuf,
    pub champions: usize,
}

/// Fetch the configured page over HTTP and write its champion table
pub fn run(config: &ScraperConfig) -> Result<RunReport, ScrapeError> {
    let fetcher = HttpFetcher::new(config.timeout, config.user_agent.clone());
    run_with(&fetcher, config)
}

/// Same as [`run`] with an explicit page source
///
/// A non-200 response ends the run before anything is written.
pub fn run_with<S: PageSource>(
    source: &S,
    config: &ScraperConfig,
) -> Result<RunReport, ScrapeError> {
    let extractor = ChampionExtractor::new(&config.extractor)?;

    info!(url = %config.url, "fetching champion adjustments");
    let page = source.fetch(&config.url)?;
    if !page.is_ok() {
        warn!(url = %config.url, status = page.status, "unexpected status code");
        return Err(ScrapeError::Status {
            url: config.url.to_string(),
            status: page.status,
        });
    }

    let document = Html::parse_document(&page.body);
    let results = extractor.extract(&document.root_element());
    info!(champions = results.len(), "extracted champion rows");

    store::save_results(&results, &config.output_path)?;
    info!(path = %config.output_path.display(), "saved champion data");

    Ok(RunReport {
        url: config.url.to_string(),
        output_path: config.output_path.clone(),
        champions: results.len(),
    })
}
