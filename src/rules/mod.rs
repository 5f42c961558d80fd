//! Declarative extraction rules
//!
//! A [`RuleSet`] is plain data: an ordered fallback chain of
//! `(selector, extractor)` pairs plus an optional default producer and
//! post-processing steps. One generic [`evaluate`] function interprets it, so
//! field definitions in [`crate::metadata`] carry no control flow of their own.

mod evaluator;

pub use evaluator::evaluate;

use tracing::warn;
use url::Url;

use crate::document::DocumentNode;
use crate::metadata::provider_from_host;
use crate::utils::{CiteError, CiteResult};

/// Shared read-only inputs for one extraction run
///
/// Carries the page's own URL and the text the user had selected, so no rule
/// reaches for global state while it is evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    url: Url,
    selection: Option<String>,
}

impl Context {
    /// Build a context for the page located at `url`
    ///
    /// # Errors
    /// Returns [`CiteError::InvalidUrl`] if `url` is not an absolute URL.
    pub fn new(url: &str) -> CiteResult<Self> {
        let url = Url::parse(url).map_err(|e| CiteError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { url, selection: None })
    }

    /// Attach the current user selection
    #[must_use]
    pub fn with_selection(mut self, selection: impl Into<String>) -> Self {
        self.selection = Some(selection.into());
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }
}

/// How a rule turns its matched element (or the context) into a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extractor<'a> {
    /// Value of the named attribute on the first matching element
    Attribute(&'a str),
    /// Text content of the first matching element
    Text,
    /// The selection carried in [`Context`]; used by selector-less rules
    Selection,
}

impl Extractor<'_> {
    pub(crate) fn extract(&self, node: Option<&dyn DocumentNode>, ctx: &Context) -> Option<String> {
        match (self, node) {
            (Extractor::Attribute(name), Some(node)) => node.attribute(name),
            (Extractor::Text, Some(node)) => Some(node.text()),
            (Extractor::Selection, _) => ctx.selection().map(str::to_string),
            _ => None,
        }
    }
}

/// One step in a fallback chain
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule<'a> {
    /// CSS selector to query; `None` means the extractor needs no element
    pub selector: Option<&'a str>,
    pub extractor: Extractor<'a>,
}

impl<'a> Rule<'a> {
    pub const fn attribute(selector: &'a str, name: &'a str) -> Self {
        Self {
            selector: Some(selector),
            extractor: Extractor::Attribute(name),
        }
    }

    pub const fn text(selector: &'a str) -> Self {
        Self {
            selector: Some(selector),
            extractor: Extractor::Text,
        }
    }

    pub const fn selection() -> Self {
        Self {
            selector: None,
            extractor: Extractor::Selection,
        }
    }
}

/// Produces a value from the context when no rule matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultValue {
    /// The page's own URL
    ContextUrl,
    /// A site name derived from the page's host, e.g. `www.nytimes.com` -> `nytimes`
    ProviderFromHost,
}

impl DefaultValue {
    pub(crate) fn produce(&self, ctx: &Context) -> Option<String> {
        match self {
            DefaultValue::ContextUrl => Some(ctx.url().to_string()),
            DefaultValue::ProviderFromHost => ctx.url().host_str().map(provider_from_host),
        }
    }
}

/// Transforms the chosen value before it is returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Processor {
    /// Resolve a possibly relative URL against the page URL
    AbsoluteUrl,
}

impl Processor {
    pub(crate) fn apply(&self, value: String, ctx: &Context) -> String {
        match self {
            Processor::AbsoluteUrl => match ctx.url().join(value.trim()) {
                Ok(absolute) => absolute.to_string(),
                Err(e) => {
                    warn!(value = %value, base = %ctx.url(), "Could not resolve URL, keeping it as-is: {}", e);
                    value
                }
            },
        }
    }
}

/// Ordered fallback chain for one metadata field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet<'a> {
    /// Field name, used in log output
    pub name: &'a str,
    /// Earlier rules have priority over later ones
    pub rules: &'a [Rule<'a>],
    pub default: Option<DefaultValue>,
    pub processors: &'a [Processor],
}
