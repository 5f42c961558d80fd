//! Page citation tools
//!
//! Extracts title, canonical URL, provider and an excerpt from a web page and
//! formats them as an HTML citation snippet for the clipboard. Pages come from
//! saved files, HTTP fetches, or a live Chromium tab via chromiumoxide.

mod browser;
pub mod browser_setup;
pub mod citation;
pub mod clipboard;
pub mod document;
pub mod metadata;
pub mod rules;
pub mod source;
mod utils;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::utils::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputTarget,

    #[serde(default)]
    pub format: CitationFormat,

    #[serde(default = "default_navigation_timeout_ms")]
    pub navigation_timeout_ms: u64,

    #[serde(default)]
    pub browser: BrowserConfig,
}

/// Browser security and launch configuration for `--live` captures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Run browser in headless mode
    #[serde(default = "default_headless")]
    pub headless: bool,

    /// Disable web security features (Same-Origin Policy, etc.)
    /// WARNING: Only enable for trusted content
    #[serde(default = "default_disable_security")]
    pub disable_security: bool,

    /// Window dimensions
    #[serde(default)]
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_window_width")]
    pub width: u32,

    #[serde(default = "default_window_height")]
    pub height: u32,
}

fn default_navigation_timeout_ms() -> u64 {
    DEFAULT_NAVIGATION_TIMEOUT_MS
}

fn default_headless() -> bool {
    true
}

fn default_disable_security() -> bool {
    false // SECURE BY DEFAULT
}

fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    720
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputTarget::default(),
            format: CitationFormat::default(),
            navigation_timeout_ms: default_navigation_timeout_ms(),
            browser: BrowserConfig::default(),
        }
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            disable_security: default_disable_security(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

/// Default config location: `<config_dir>/page-cite/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Load the YAML config
///
/// An explicit `path` must exist. Without one, the default location is used
/// when present, otherwise built-in defaults apply.
pub fn load_yaml_config(path: Option<&Path>) -> CiteResult<Config> {
    let config_path = match path {
        Some(path) => path.to_path_buf(),
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(Config::default()),
        },
    };

    let contents = fs::read_to_string(&config_path)
        .map_err(|e| CiteError::ConfigError(format!("{}: {}", config_path.display(), e)))?;
    let config: Config = serde_yaml::from_str(&contents)?;
    tracing::debug!(path = %config_path.display(), ?config, "Loaded config");
    Ok(config)
}

pub use browser::{BrowserError, BrowserResult, BrowserWrapper, capture_page, capture_url};
pub use citation::{CitationFormat, cite, format_citation, render};
pub use clipboard::{ClipboardWriter, OutputTarget, PageClipboard, StdoutWriter, SystemClipboard};
pub use document::{Document, DocumentNode, HtmlDocument};
pub use metadata::{Metadata, extract_metadata, provider_from_host};
pub use rules::{Context, DefaultValue, Extractor, Processor, Rule, RuleSet, evaluate};
pub use source::PageSnapshot;
pub use utils::{
    CiteError, CiteResult, DEFAULT_NAVIGATION_TIMEOUT_MS, MAX_NAVIGATION_TIMEOUT_MS, validate_navigation_timeout,
};
