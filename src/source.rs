//! Page sources
//!
//! Every source produces the same [`PageSnapshot`]: the HTML and the URL the
//! document lives at. No source captures a selection; the quoted text is
//! supplied by the caller with [`PageSnapshot::with_selection`]. Extraction
//! then runs synchronously on the snapshot.

use std::path::Path;
use std::time::Duration;

use tokio::io::AsyncReadExt;
use tracing::{debug, info};

use crate::document::HtmlDocument;
use crate::rules::Context;
use crate::utils::constants::CHROME_USER_AGENT;
use crate::utils::{CiteError, CiteResult};

/// Everything extraction needs from one loaded page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSnapshot {
    pub html: String,
    /// URL the document was loaded from (after redirects)
    pub url: String,
    pub selection: Option<String>,
}

impl PageSnapshot {
    /// Snapshot of `html` loaded from `url`, with no selection
    pub fn new(html: String, url: impl Into<String>) -> Self {
        Self {
            html,
            url: url.into(),
            selection: None,
        }
    }

    /// Attach the text to quote; `None` keeps the current selection
    #[must_use]
    pub fn with_selection(mut self, selection: Option<String>) -> Self {
        if selection.is_some() {
            self.selection = selection;
        }
        self
    }

    /// Build the extraction context for this page
    pub fn context(&self) -> CiteResult<Context> {
        let ctx = Context::new(&self.url)?;
        Ok(match &self.selection {
            Some(selection) => ctx.with_selection(selection.clone()),
            None => ctx,
        })
    }

    pub fn document(&self) -> HtmlDocument {
        HtmlDocument::parse(&self.html)
    }
}

/// Read a saved page from disk
pub async fn read_file(path: &Path, url: &str) -> CiteResult<PageSnapshot> {
    let html = tokio::fs::read_to_string(path).await?;
    debug!(path = %path.display(), bytes = html.len(), "Read HTML file");

    Ok(PageSnapshot::new(html, url))
}

/// Read a page piped on stdin
pub async fn read_stdin(url: &str) -> CiteResult<PageSnapshot> {
    let mut html = String::new();
    tokio::io::stdin().read_to_string(&mut html).await?;
    debug!(bytes = html.len(), "Read HTML from stdin");

    Ok(PageSnapshot::new(html, url))
}

/// Fetch the raw HTML of `url`, following redirects
///
/// The snapshot URL is the final URL after redirects, which is what a browser
/// would report as the document location.
pub async fn fetch(url: &str, timeout: Duration) -> CiteResult<PageSnapshot> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(CiteError::InvalidUrl {
            url: url.to_string(),
            reason: "URL must start with http:// or https://".to_string(),
        });
    }

    let client = reqwest::Client::builder()
        .user_agent(CHROME_USER_AGENT)
        .timeout(timeout)
        .build()?;

    let response = client.get(url).send().await?.error_for_status()?;
    let final_url = response.url().to_string();
    let html = response.text().await?;

    info!(url = %final_url, bytes = html.len(), "Fetched page");

    Ok(PageSnapshot::new(html, final_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn snapshot(selection: Option<&str>) -> PageSnapshot {
        PageSnapshot {
            html: "<title>t</title>".to_string(),
            url: "https://example.com/a".to_string(),
            selection: selection.map(str::to_string),
        }
    }

    #[test]
    fn explicit_selection_overrides_captured() {
        let snap = snapshot(Some("captured")).with_selection(Some("explicit".to_string()));
        assert_eq!(snap.selection.as_deref(), Some("explicit"));

        let snap = snapshot(Some("captured")).with_selection(None);
        assert_eq!(snap.selection.as_deref(), Some("captured"));
    }

    #[test]
    fn sources_start_without_selection() {
        let snap = PageSnapshot::new("<title>t</title>".to_string(), "https://example.com/a");
        assert_eq!(snap.selection, None);
        assert_eq!(snap.context().unwrap().selection(), None);

        let ctx = snap.with_selection(Some("quoted".to_string())).context().unwrap();
        assert_eq!(ctx.selection(), Some("quoted"));
    }

    #[test]
    fn context_carries_url_and_selection() {
        let ctx = snapshot(Some("words")).context().unwrap();
        assert_eq!(ctx.url().as_str(), "https://example.com/a");
        assert_eq!(ctx.selection(), Some("words"));
    }

    #[test]
    fn relative_page_url_is_rejected() {
        let snap = PageSnapshot {
            url: "/not/absolute".to_string(),
            ..snapshot(None)
        };
        assert!(matches!(snap.context(), Err(CiteError::InvalidUrl { .. })));
    }

    #[tokio::test]
    async fn reads_html_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<html><head><title>Saved</title></head></html>").unwrap();

        let snap = read_file(file.path(), "https://example.com/saved").await.unwrap();
        assert!(snap.html.contains("Saved"));
        assert_eq!(snap.url, "https://example.com/saved");
        assert_eq!(snap.selection, None);
    }

    #[tokio::test]
    async fn fetch_rejects_non_http_urls() {
        let err = fetch("ftp://example.com/", Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, CiteError::InvalidUrl { .. }));
    }
}
