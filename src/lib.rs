//! ARAM balance scraper
//!
//! Fetches the ARAM buffs/nerfs table and stores one entry per champion:
//! - damage dealt (first positive / none / negative cell)
//! - damage taken (third cell of the row)
//! - other changes
//!
//! The result is written as a pretty-printed JSON object keyed by champion name.

pub mod config;
pub mod error;
pub mod extractors;
pub mod fetch;
pub mod runner;
pub mod store;

pub use config::ScraperConfig;
pub use error::ScrapeError;
pub use extractors::*;
pub use fetch::{FetchedPage, HttpFetcher, PageSource};
pub use runner::{run, run_with, RunReport};
