//! Snapshot a live page: rendered DOM and final URL
//!
//! The tab is opened by the tool itself, so it never holds a user selection;
//! quoted text for live pages comes from `--selection`.

use std::time::Duration;

use chromiumoxide::Page;
use tracing::info;

use super::{BrowserError, BrowserResult, BrowserWrapper};
use crate::source::PageSnapshot;

/// Open `url` in a new tab and capture it once navigation has settled
pub async fn capture_url(wrapper: &BrowserWrapper, url: &str, timeout: Duration) -> BrowserResult<(Page, PageSnapshot)> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(BrowserError::NavigationFailed(format!(
            "URL must start with http:// or https://: {url}"
        )));
    }

    let page = wrapper.new_page().await?;

    tokio::time::timeout(timeout, page.goto(url))
        .await
        .map_err(|_| BrowserError::Timeout {
            url: url.to_string(),
            timeout_ms: timeout.as_millis() as u64,
        })?
        .map_err(|e| BrowserError::NavigationFailed(format!("{url}: {e}")))?;

    page.wait_for_navigation()
        .await
        .map_err(|e| BrowserError::NavigationFailed(format!("Failed to wait for page load completion: {e}")))?;

    let snapshot = capture_page(&page, url).await?;
    Ok((page, snapshot))
}

/// Capture the DOM and URL of an already loaded page
///
/// `fallback_url` is used when the page cannot report its own URL.
pub async fn capture_page(page: &Page, fallback_url: &str) -> BrowserResult<PageSnapshot> {
    let url = page
        .url()
        .await
        .map_err(|e| BrowserError::EvaluationFailed(format!("Failed to get URL: {e}")))?
        .unwrap_or_else(|| fallback_url.to_string());

    let html = page
        .content()
        .await
        .map_err(|e| BrowserError::EvaluationFailed(format!("Failed to read page content: {e}")))?;

    info!(url = %url, bytes = html.len(), "Captured live page");
    Ok(PageSnapshot::new(html, url))
}
