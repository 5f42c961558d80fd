//! Citation metadata extraction
//!
//! Evaluates the four field rule sets in [`fields`] against one document and
//! collects the results into a [`Metadata`] record.

pub mod fields;
mod provider;

pub use provider::provider_from_host;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::document::Document;
use crate::rules::{Context, evaluate};
use crate::utils::CiteResult;

/// Resolved citation fields; `None` means no rule or default produced a value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: Option<String>,
    pub url: Option<String>,
    pub provider: Option<String>,
    pub description: Option<String>,
}

/// Run every field rule set against `doc`
///
/// # Errors
/// Propagates document query failures; absent fields are not errors.
pub fn extract_metadata<D: Document>(doc: &D, ctx: &Context) -> CiteResult<Metadata> {
    let metadata = Metadata {
        description: evaluate(&fields::DESCRIPTION, doc, ctx)?,
        title: evaluate(&fields::TITLE, doc, ctx)?,
        url: evaluate(&fields::URL, doc, ctx)?,
        provider: evaluate(&fields::PROVIDER, doc, ctx)?,
    };

    debug!(?metadata, page = %ctx.url(), "Extracted page metadata");
    Ok(metadata)
}
