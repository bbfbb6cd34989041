//! Champion card extraction
//!
//! Walks the `tr.champion-card` rows of the balance table and reads the
//! name, damage dealt, damage taken and "other" cells of each one.

use std::fmt;
use std::str::FromStr;

use scraper::{Html, Selector};
use tracing::debug;

use super::dom::{parse_selector, trimmed_text, DomNode};
use super::{CharacterAdjustment, ResultSet, SENTINEL};
use crate::error::ScrapeError;

/// Where the damage-taken value is read from
///
/// The page does not mark that cell with a class, so by default it is the
/// third `td` of the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DamageTakenSource {
    /// Zero-based index among the row's cells
    Position(usize),
    /// First descendant matching a CSS selector
    Selector(String),
}

impl Default for DamageTakenSource {
    fn default() -> Self {
        DamageTakenSource::Position(2)
    }
}

impl fmt::Display for DamageTakenSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DamageTakenSource::Position(index) => write!(f, "position:{index}"),
            DamageTakenSource::Selector(selector) => write!(f, "selector:{selector}"),
        }
    }
}

/// Accepts `position:<n>` or `selector:<css>`
impl FromStr for DamageTakenSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, value) = s
            .split_once(':')
            .ok_or_else(|| format!("expected `position:<n>` or `selector:<css>`, got `{s}`"))?;

        match kind.trim() {
            "position" => value
                .trim()
                .parse()
                .map(DamageTakenSource::Position)
                .map_err(|e| format!("bad position `{}`: {e}", value.trim())),
            "selector" if !value.trim().is_empty() => {
                Ok(DamageTakenSource::Selector(value.trim().to_string()))
            }
            "selector" => Err("empty selector".to_string()),
            other => Err(format!("unknown damage-taken source `{other}`")),
        }
    }
}

/// Selectors describing the balance table layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    pub row: String,
    pub name_cell: String,
    /// Cells carrying a positive / none / negative marker
    pub damage_dealt_cell: String,
    /// Any cell, used for positional lookups
    pub cell: String,
    pub other_cell: String,
    pub damage_taken: DamageTakenSource,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            row: "tr.champion-card".to_string(),
            name_cell: "td.image-container".to_string(),
            damage_dealt_cell: "td.positive, td.none, td.negative".to_string(),
            cell: "td".to_string(),
            other_cell: "td.otherCell".to_string(),
            damage_taken: DamageTakenSource::default(),
        }
    }
}

enum DamageTakenLookup {
    Position(usize),
    Marked(Selector),
}

/// Compiled selector set; build once, extract from as many documents as needed
pub struct ChampionExtractor {
    row: Selector,
    name_cell: Selector,
    damage_dealt_cell: Selector,
    cell: Selector,
    other_cell: Selector,
    damage_taken: DamageTakenLookup,
}

impl ChampionExtractor {
    pub fn new(config: &ExtractorConfig) -> Result<Self, ScrapeError> {
        let damage_taken = match &config.damage_taken {
            DamageTakenSource::Position(index) => DamageTakenLookup::Position(*index),
            DamageTakenSource::Selector(selector) => {
                DamageTakenLookup::Marked(parse_selector(selector)?)
            }
        };

        Ok(Self {
            row: parse_selector(&config.row)?,
            name_cell: parse_selector(&config.name_cell)?,
            damage_dealt_cell: parse_selector(&config.damage_dealt_cell)?,
            cell: parse_selector(&config.cell)?,
            other_cell: parse_selector(&config.other_cell)?,
            damage_taken,
        })
    }

    /// Extract every champion row below `root`
    ///
    /// Rows without a usable name are skipped; every other missing cell
    /// falls back to [`SENTINEL`].
    pub fn extract<N: DomNode>(&self, root: &N) -> ResultSet {
        let mut results = ResultSet::new();

        for (index, row) in root.select_all(&self.row).iter().enumerate() {
            match self.extract_row(row) {
                Some(adjustment) => {
                    if let Some(previous) = results.insert(adjustment) {
                        debug!(row = index, name = %previous.name, "duplicate champion, keeping later row");
                    }
                }
                None => debug!(row = index, "skipping row without a champion name"),
            }
        }

        results
    }

    fn extract_row<N: DomNode>(&self, row: &N) -> Option<CharacterAdjustment> {
        let name = row_name(row.select_one(&self.name_cell)?)?;

        let damage_taken = match &self.damage_taken {
            DamageTakenLookup::Position(index) => row.select_nth(&self.cell, *index),
            DamageTakenLookup::Marked(selector) => row.select_one(selector),
        };

        Some(CharacterAdjustment {
            name,
            damage_dealt: or_sentinel(trimmed_text(row.select_one(&self.damage_dealt_cell))),
            damage_taken: or_sentinel(trimmed_text(damage_taken)),
            other: or_sentinel(trimmed_text(row.select_one(&self.other_cell))),
        })
    }
}

/// First line of the name cell; the rest is role tags and icon captions
fn row_name<N: DomNode>(cell: N) -> Option<String> {
    let text = cell.text_content();
    let name = text.trim().lines().next()?.trim();

    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

fn or_sentinel(value: Option<String>) -> String {
    value.unwrap_or_else(|| SENTINEL.to_string())
}

/// Parse `html` and extract its champion table
pub fn extract_champions(html: &str, config: &ExtractorConfig) -> Result<ResultSet, ScrapeError> {
    let extractor = ChampionExtractor::new(config)?;
    let document = Html::parse_document(html);
    Ok(extractor.extract(&document.root_element()))
}
