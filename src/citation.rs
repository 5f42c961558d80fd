//! Citation rendering
//!
//! The HTML template is consumed by rich-text paste targets, so its structure
//! is fixed. Field values are substituted verbatim and absent fields become
//! empty strings.

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::metadata::{Metadata, extract_metadata};
use crate::rules::Context;
use crate::utils::CiteResult;

/// Output representation of the extracted metadata
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CitationFormat {
    /// `<a href="..."><strong>provider</strong> title</a><blockquote>"..."</blockquote>`
    #[default]
    Html,
    /// Pretty-printed JSON of every field
    Json,
}

/// Render the citation anchor and quoted excerpt
pub fn format_citation(metadata: &Metadata) -> String {
    let field = |value: &Option<String>| value.as_deref().unwrap_or_default().to_string();

    format!(
        "<a href=\"{}\"><strong>{}</strong> {}</a><blockquote>\"{}\"</blockquote>",
        field(&metadata.url),
        field(&metadata.provider),
        field(&metadata.title),
        field(&metadata.description),
    )
}

pub fn render(metadata: &Metadata, format: CitationFormat) -> String {
    match format {
        CitationFormat::Html => format_citation(metadata),
        CitationFormat::Json => serde_json::to_string_pretty(metadata).unwrap_or_else(|_| "{}".to_string()),
    }
}

/// Extract metadata from `doc` and render it in one step
///
/// The whole string is built before anything is written anywhere, so a
/// failure here never leaves a partial citation on the clipboard.
pub fn cite<D: Document>(doc: &D, ctx: &Context, format: CitationFormat) -> CiteResult<String> {
    let metadata = extract_metadata(doc, ctx)?;
    Ok(render(&metadata, format))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_fields_into_template() {
        let metadata = Metadata {
            title: Some("Headline".into()),
            url: Some("https://site.example/x".into()),
            provider: Some("Site".into()),
            description: Some("quoted text".into()),
        };
        assert_eq!(
            format_citation(&metadata),
            r#"<a href="https://site.example/x"><strong>Site</strong> Headline</a><blockquote>"quoted text"</blockquote>"#
        );
    }

    #[test]
    fn absent_fields_render_empty() {
        assert_eq!(
            format_citation(&Metadata::default()),
            r#"<a href=""><strong></strong> </a><blockquote>""</blockquote>"#
        );
    }

    #[test]
    fn json_format_names_every_field() {
        let metadata = Metadata {
            title: Some("T".into()),
            ..Metadata::default()
        };
        let value: serde_json::Value = serde_json::from_str(&render(&metadata, CitationFormat::Json)).unwrap();
        assert_eq!(value["title"], "T");
        assert!(value["url"].is_null());
        assert!(value.get("description").is_some());
    }
}
