//! Browser lifecycle for live page capture
//!
//! Owns the chromiumoxide browser, its CDP handler task and the temporary
//! profile directory for the duration of one capture.

use chromiumoxide::browser::Browser;
use chromiumoxide::page::Page;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use tracing::info;

use super::{BrowserError, BrowserResult};
use crate::BrowserConfig;

/// Wrapper for Browser and its event handler task
///
/// The handler is aborted on drop. Call [`BrowserWrapper::shutdown`] first to
/// close Chrome cleanly and remove the profile directory.
pub struct BrowserWrapper {
    browser: Browser,
    handler: JoinHandle<()>,
    user_data_dir: Option<PathBuf>,
}

impl BrowserWrapper {
    /// Launch a browser with a profile directory unique to this process
    pub async fn launch(config: &BrowserConfig) -> BrowserResult<Self> {
        info!("Launching browser for page capture");

        let user_data_dir = std::env::temp_dir().join(format!("page_cite_chrome_{}", std::process::id()));
        let (browser, handler) = crate::browser_setup::launch_browser(config, user_data_dir.clone())
            .await
            .map_err(|e| BrowserError::LaunchFailed(format!("{e:#}")))?;

        Ok(Self {
            browser,
            handler,
            user_data_dir: Some(user_data_dir),
        })
    }

    pub(crate) fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Open a new blank tab
    pub async fn new_page(&self) -> BrowserResult<Page> {
        self.browser()
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::PageCreationFailed(e.to_string()))
    }

    /// Close Chrome, wait for the process to exit, then remove the profile
    ///
    /// Both `close()` and `wait()` are needed; dropping alone leaves a zombie.
    pub async fn shutdown(mut self) {
        info!("Shutting down browser");

        if let Err(e) = self.browser.close().await {
            tracing::warn!("Failed to close browser cleanly: {}", e);
        }
        if let Err(e) = self.browser.wait().await {
            tracing::warn!("Failed to wait for browser exit: {}", e);
        }

        self.cleanup_temp_dir();
    }

    /// Must run after `browser.wait()` so Chrome has released its file handles
    fn cleanup_temp_dir(&mut self) {
        if let Some(path) = self.user_data_dir.take() {
            info!("Cleaning up temp directory: {}", path.display());
            if let Err(e) = std::fs::remove_dir_all(&path) {
                tracing::warn!(
                    "Failed to clean up temp directory {}: {}. Manual cleanup may be required.",
                    path.display(),
                    e
                );
            }
        }
    }
}

impl Drop for BrowserWrapper {
    fn drop(&mut self) {
        self.handler.abort();

        if let Some(path) = &self.user_data_dir {
            tracing::warn!(
                "BrowserWrapper dropped without shutdown(). Temp directory will be orphaned: {}",
                path.display()
            );
        }
    }
}
