//! CSS selector-based DOM queries
//!
//! The extractor only needs four operations on a node. Keeping them behind
//! a trait lets it run over `scraper` elements or any other tree.

use scraper::{ElementRef, Selector};

use crate::error::ScrapeError;

/// Minimal query surface over an element tree
pub trait DomNode: Sized {
    /// All descendants matching `selector`, in document order
    fn select_all(&self, selector: &Selector) -> Vec<Self>;

    /// First descendant matching `selector`
    fn select_one(&self, selector: &Selector) -> Option<Self> {
        self.select_all(selector).into_iter().next()
    }

    /// The `index`-th descendant matching `selector` (zero-based)
    fn select_nth(&self, selector: &Selector, index: usize) -> Option<Self> {
        self.select_all(selector).into_iter().nth(index)
    }

    /// Concatenated text of every descendant text node
    fn text_content(&self) -> String;
}

impl<'a> DomNode for ElementRef<'a> {
    fn select_all(&self, selector: &Selector) -> Vec<Self> {
        self.select(selector).collect()
    }

    fn select_one(&self, selector: &Selector) -> Option<Self> {
        self.select(selector).next()
    }

    fn select_nth(&self, selector: &Selector, index: usize) -> Option<Self> {
        self.select(selector).nth(index)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }
}

/// Parse a selector, keeping the offending text in the error
pub fn parse_selector(selector_str: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(selector_str).map_err(|e| ScrapeError::Selector {
        selector: selector_str.to_string(),
        reason: e.to_string(),
    })
}

/// Trimmed text of an optional node
pub fn trimmed_text<N: DomNode>(node: Option<N>) -> Option<String> {
    node.map(|n| n.text_content().trim().to_string())
}
