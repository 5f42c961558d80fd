//! Shared configuration constants
//!
//! Default values used by both the HTTP fetcher and the Chromium launcher
//! so the two page sources identify themselves the same way.

/// Chrome user agent string sent by the fetcher and the launched browser
///
/// Kept in step with current Chrome stable so sites serve their normal
/// markup (including Open Graph tags) instead of a bot fallback.
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";

/// Directory name under the platform config dir holding `config.yaml`
pub const CONFIG_DIR_NAME: &str = "page-cite";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.yaml";
