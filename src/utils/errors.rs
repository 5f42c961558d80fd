use thiserror::Error;

use crate::browser::BrowserError;

/// Errors that can occur while capturing a page or delivering its citation
#[derive(Error, Debug)]
pub enum CiteError {
    #[error("Invalid page URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Invalid CSS selector '{0}'")]
    InvalidSelector(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Browser error: {0}")]
    BrowserError(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Timeout cannot exceed {max_ms}ms. Received: {requested_ms}ms")]
    TimeoutTooLong { max_ms: u64, requested_ms: u64 },
}

pub type CiteResult<T> = Result<T, CiteError>;

/// Implement From<BrowserError> for CiteError
impl From<BrowserError> for CiteError {
    fn from(err: BrowserError) -> Self {
        CiteError::BrowserError(err.to_string())
    }
}

/// Implement From<std::io::Error> for CiteError
impl From<std::io::Error> for CiteError {
    fn from(err: std::io::Error) -> Self {
        CiteError::IoError(err.to_string())
    }
}

/// Implement From<reqwest::Error> for CiteError
impl From<reqwest::Error> for CiteError {
    fn from(err: reqwest::Error) -> Self {
        CiteError::FetchError(err.to_string())
    }
}

/// Implement From<serde_yaml::Error> for CiteError
impl From<serde_yaml::Error> for CiteError {
    fn from(err: serde_yaml::Error) -> Self {
        CiteError::ConfigError(err.to_string())
    }
}

/// Implement From<arboard::Error> for CiteError
impl From<arboard::Error> for CiteError {
    fn from(err: arboard::Error) -> Self {
        CiteError::ClipboardError(err.to_string())
    }
}
