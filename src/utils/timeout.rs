//! Timeout validation for page loading

use std::time::Duration;

use super::errors::{CiteError, CiteResult};

/// Maximum timeout for page navigation and HTTP fetches (5 minutes)
/// Covers slow-loading sites, heavy SPAs, and network delays
pub const MAX_NAVIGATION_TIMEOUT_MS: u64 = 300_000; // 5 minutes

/// Default timeout used when neither the CLI nor the config sets one
pub const DEFAULT_NAVIGATION_TIMEOUT_MS: u64 = 30_000;

/// Validate timeout for navigation operations (live capture, HTTP fetch)
///
/// # Arguments
/// * `timeout_ms` - Optional timeout in milliseconds
/// * `default_ms` - Default timeout if None provided
///
/// # Returns
/// * `Ok(Duration)` - Validated Duration object
/// * `Err(CiteError)` - If timeout exceeds MAX_NAVIGATION_TIMEOUT_MS
///
/// # Example
/// ```rust
/// # use page_cite::validate_navigation_timeout;
/// let timeout = validate_navigation_timeout(Some(45000), 30000).unwrap();
/// assert_eq!(timeout.as_millis(), 45000);
/// ```
pub fn validate_navigation_timeout(timeout_ms: Option<u64>, default_ms: u64) -> CiteResult<Duration> {
    let ms = timeout_ms.unwrap_or(default_ms);

    if ms > MAX_NAVIGATION_TIMEOUT_MS {
        return Err(CiteError::TimeoutTooLong {
            max_ms: MAX_NAVIGATION_TIMEOUT_MS,
            requested_ms: ms,
        });
    }

    Ok(Duration::from_millis(ms))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_applies_when_unset() {
        let timeout = validate_navigation_timeout(None, DEFAULT_NAVIGATION_TIMEOUT_MS).unwrap();
        assert_eq!(timeout, Duration::from_secs(30));
    }

    #[test]
    fn rejects_timeouts_over_five_minutes() {
        let err = validate_navigation_timeout(Some(MAX_NAVIGATION_TIMEOUT_MS + 1), 1000).unwrap_err();
        assert!(matches!(err, CiteError::TimeoutTooLong { requested_ms: 300_001, .. }));
    }
}
