//! Selector-queryable document snapshots
//!
//! The rule evaluator only ever needs "first element matching this selector"
//! plus attribute and text access on that element, so that is all the
//! [`Document`] capability exposes. [`HtmlDocument`] backs it with a parsed
//! `scraper` tree; live pages are captured to HTML first and parsed the same way.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::utils::{CiteError, CiteResult};

/// Read access to one element returned by a selector query
pub trait DocumentNode {
    /// Attribute value, or `None` when the attribute is missing
    fn attribute(&self, name: &str) -> Option<String>;

    /// Concatenated text content of the element and its descendants
    fn text(&self) -> String;
}

/// A document that answers CSS selector queries
pub trait Document {
    type Node<'a>: DocumentNode
    where
        Self: 'a;

    /// Return the first element (in document order) matching `selector`
    ///
    /// # Errors
    /// Returns [`CiteError::InvalidSelector`] if `selector` does not parse.
    fn query_first(&self, selector: &str) -> CiteResult<Option<Self::Node<'_>>>;
}

/// Parsed HTML snapshot of a page
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document. Parsing is lenient and never fails.
    pub fn parse(source: &str) -> Self {
        let html = Html::parse_document(source);
        if !html.errors.is_empty() {
            debug!(count = html.errors.len(), "HTML parsed with recoverable errors");
        }
        Self { html }
    }
}

impl Document for HtmlDocument {
    type Node<'a> = ElementRef<'a>;

    fn query_first(&self, selector: &str) -> CiteResult<Option<ElementRef<'_>>> {
        let parsed =
            Selector::parse(selector).map_err(|_| CiteError::InvalidSelector(selector.to_string()))?;
        Ok(self.html.select(&parsed).next())
    }
}

impl DocumentNode for ElementRef<'_> {
    fn attribute(&self, name: &str) -> Option<String> {
        self.value().attr(name).map(str::to_string)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}
