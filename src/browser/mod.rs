//! Live page access through a launched Chromium
//!
//! Used when the citation should reflect the rendered DOM (client-side
//! rendered meta tags) rather than the raw HTML response.

mod capture;
mod wrapper;

pub use capture::{capture_page, capture_url};
pub use wrapper::BrowserWrapper;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrowserError {
    #[error("Failed to launch browser: {0}")]
    LaunchFailed(String),

    #[error("Failed to create page: {0}")]
    PageCreationFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Navigation timeout after {timeout_ms}ms for URL: {url}")]
    Timeout { url: String, timeout_ms: u64 },

    #[error("Script evaluation failed: {0}")]
    EvaluationFailed(String),
}

pub type BrowserResult<T> = Result<T, BrowserError>;
