mod fixtures;

use std::sync::Mutex;

use async_trait::async_trait;
use page_cite::{CitationFormat, CiteResult, ClipboardWriter, Context, HtmlDocument, Metadata, cite, extract_metadata};

fn cite_snapshot(html: &str, url: &str, selection: Option<&str>) -> String {
    let snap = fixtures::snapshot(html, url, selection);
    cite(&snap.document(), &snap.context().unwrap(), CitationFormat::Html).unwrap()
}

// ============================================================================
// End-to-end citations
// ============================================================================

#[test]
fn article_with_selection() {
    let citation = cite_snapshot(fixtures::ARTICLE, "https://site.example/x?ref=1", Some("quoted text"));
    assert_eq!(
        citation,
        r#"<a href="https://site.example/x"><strong>Site</strong> Headline</a><blockquote>"quoted text"</blockquote>"#
    );
}

#[test]
fn article_without_selection_quotes_og_description() {
    let citation = cite_snapshot(fixtures::ARTICLE, "https://site.example/x?ref=1", None);
    assert_eq!(
        citation,
        r#"<a href="https://site.example/x"><strong>Site</strong> Headline</a><blockquote>"Summary from Open Graph"</blockquote>"#
    );
}

#[test]
fn bare_page_uses_fallbacks() {
    let doc = HtmlDocument::parse(fixtures::BARE);
    let ctx = Context::new("https://www.theguardian.com/world/story").unwrap();
    let metadata = extract_metadata(&doc, &ctx).unwrap();

    assert_eq!(
        metadata,
        Metadata {
            title: Some("Just a title".to_string()),
            url: Some("https://www.theguardian.com/world/story".to_string()),
            provider: Some("theguardian".to_string()),
            description: None,
        }
    );

    let citation = cite(&doc, &ctx, CitationFormat::Html).unwrap();
    assert_eq!(
        citation,
        r#"<a href="https://www.theguardian.com/world/story"><strong>theguardian</strong> Just a title</a><blockquote>""</blockquote>"#
    );
}

#[test]
fn page_without_title_element_has_empty_title() {
    let citation = cite_snapshot("<html><head></head><body></body></html>", "https://bbc.co.uk/news", None);
    assert_eq!(
        citation,
        r#"<a href="https://bbc.co.uk/news"><strong>bbc</strong> </a><blockquote>""</blockquote>"#
    );
}

#[test]
fn relative_canonical_link_is_made_absolute() {
    let html = r#"<html><head><link rel="canonical" href="/article/42"></head></html>"#;
    let citation = cite_snapshot(html, "https://example.com/home", None);
    assert!(citation.starts_with(r#"<a href="https://example.com/article/42">"#));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = cite_snapshot(fixtures::ARTICLE, "https://site.example/x", Some("same words"));
    let second = cite_snapshot(fixtures::ARTICLE, "https://site.example/x", Some("same words"));
    assert_eq!(first, second);
}

#[test]
fn json_format_carries_resolved_fields() {
    let snap = fixtures::snapshot(fixtures::ARTICLE, "https://site.example/x?ref=1", None);
    let json = cite(&snap.document(), &snap.context().unwrap(), CitationFormat::Json).unwrap();
    let metadata: Metadata = serde_json::from_str(&json).unwrap();
    assert_eq!(metadata.url.as_deref(), Some("https://site.example/x"));
    assert_eq!(metadata.provider.as_deref(), Some("Site"));
}

// ============================================================================
// Clipboard capability
// ============================================================================

#[derive(Default)]
struct RecordingClipboard {
    writes: Mutex<Vec<String>>,
}

#[async_trait]
impl ClipboardWriter for RecordingClipboard {
    async fn write_text(&self, text: &str) -> CiteResult<()> {
        self.writes.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[tokio::test]
async fn citation_is_written_once_and_whole() {
    let clipboard = RecordingClipboard::default();
    let citation = cite_snapshot(fixtures::ARTICLE, "https://site.example/x", Some("quoted text"));

    let writer: &dyn ClipboardWriter = &clipboard;
    writer.write_text(&citation).await.unwrap();

    let writes = clipboard.writes.lock().unwrap();
    assert_eq!(writes.len(), 1);
    assert_eq!(writes[0], citation);
}
