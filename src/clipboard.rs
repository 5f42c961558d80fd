//! "Write text to the clipboard" capability and its backends
//!
//! Citation building never touches a clipboard directly; the caller picks a
//! [`ClipboardWriter`] and hands it the finished string.

use async_trait::async_trait;
use chromiumoxide::Page;
use chromiumoxide_cdp::cdp::js_protocol::runtime::EvaluateParams;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

use crate::utils::{CiteError, CiteResult};

/// Where the finished citation goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    /// System clipboard of the machine running the tool
    #[default]
    Clipboard,
    /// Print to stdout
    Stdout,
    /// Copy from inside the captured live page (requires `--live` and a headed browser)
    Page,
}

impl OutputTarget {
    /// Check that this target can deliver text for the chosen source
    ///
    /// The page target copies through the browser's own clipboard. Headless
    /// Chromium keeps that clipboard in-process, so the copy would be lost.
    ///
    /// # Errors
    /// Returns [`CiteError::ClipboardError`] when the page target is used
    /// without a live page or with a headless browser.
    pub fn ensure_usable(self, live: bool, headless: bool) -> CiteResult<()> {
        if self != OutputTarget::Page {
            return Ok(());
        }
        if !live {
            return Err(CiteError::ClipboardError(
                "--output page copies from inside a live page and requires --live <URL>".to_string(),
            ));
        }
        if headless {
            return Err(CiteError::ClipboardError(
                "--output page needs a visible browser; set `browser.headless: false` in the config".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Place `text` on the clipboard, replacing its contents
    async fn write_text(&self, text: &str) -> CiteResult<()>;
}

/// OS clipboard via `arboard`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: &str) -> CiteResult<()> {
        let text = text.to_string();
        tokio::task::spawn_blocking(move || -> CiteResult<()> {
            let mut clipboard = arboard::Clipboard::new()?;
            clipboard.set_text(text)?;
            Ok(())
        })
        .await
        .map_err(|e| CiteError::ClipboardError(format!("clipboard task failed: {e}")))??;

        info!("Citation copied to system clipboard");
        Ok(())
    }
}

/// Writes the text to stdout followed by a newline
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriter;

#[async_trait]
impl ClipboardWriter for StdoutWriter {
    async fn write_text(&self, text: &str) -> CiteResult<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(text.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        Ok(())
    }
}

/// Copies from inside a live page with a temporary off-screen `<textarea>`
///
/// The node is inserted, selected and copied with `execCommand('copy')`; the
/// node is removed and the user's previous selection restored in a `finally`
/// block, whatever happens in between. The script runs as a user gesture,
/// otherwise Chromium refuses the copy command.
///
/// The copied text lives on the clipboard of the browser process, so the
/// browser has to stay open until it has been pasted or picked up by a
/// clipboard manager.
#[derive(Clone)]
pub struct PageClipboard {
    page: Page,
}

impl PageClipboard {
    pub fn new(page: Page) -> Self {
        Self { page }
    }
}

const COPY_FUNCTION: &str = r#"(text) => {
  const node = document.createElement('textarea');
  node.textContent = text;
  node.setAttribute('readonly', '');
  node.style.position = 'fixed';
  node.style.left = '-9999px';
  const selection = document.getSelection ? document.getSelection() : null;
  const saved = [];
  if (selection) {
    for (let i = 0; i < selection.rangeCount; i++) saved.push(selection.getRangeAt(i));
  }
  (document.body || document.documentElement).appendChild(node);
  try {
    if (selection) selection.removeAllRanges();
    node.select();
    return document.execCommand('copy');
  } finally {
    node.remove();
    if (selection) {
      selection.removeAllRanges();
      saved.forEach((range) => selection.addRange(range));
    }
  }
}"#;

/// Build the expression that copies `text` inside the page
pub(crate) fn copy_script(text: &str) -> String {
    // JSON string literals are valid JavaScript string literals
    let literal = serde_json::Value::String(text.to_string()).to_string();
    format!("({COPY_FUNCTION})({literal})")
}

/// `Runtime.evaluate` parameters for the copy, flagged as a user gesture
pub(crate) fn copy_params(text: &str) -> CiteResult<EvaluateParams> {
    EvaluateParams::builder()
        .expression(copy_script(text))
        .user_gesture(true)
        .return_by_value(true)
        .build()
        .map_err(|e| CiteError::ClipboardError(format!("Failed to build copy params: {e}")))
}

#[async_trait]
impl ClipboardWriter for PageClipboard {
    async fn write_text(&self, text: &str) -> CiteResult<()> {
        let copied: serde_json::Value = self
            .page
            .evaluate_expression(copy_params(text)?)
            .await
            .map_err(|e| CiteError::ClipboardError(format!("copy script failed: {e}")))?
            .into_value()
            .map_err(|e| CiteError::ClipboardError(format!("copy script returned no result: {e}")))?;

        debug!(?copied, "Page copy command finished");
        match copied {
            serde_json::Value::Bool(true) => {
                info!("Citation copied from live page");
                Ok(())
            }
            _ => Err(CiteError::ClipboardError("page rejected the copy command".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_script_embeds_escaped_text() {
        let script = copy_script(r#"<a href="x">"quoted"</a>"#);
        assert!(script.ends_with(r#"("<a href=\"x\">\"quoted\"</a>")"#));
    }

    #[test]
    fn copy_script_always_cleans_up() {
        let script = copy_script("text");
        let finally = script.find("finally").unwrap();
        assert!(script[finally..].contains("node.remove()"));
        assert!(script[finally..].contains("removeAllRanges"));
    }

    #[test]
    fn copy_runs_as_user_gesture() {
        let params = copy_params("text").unwrap();
        assert_eq!(params.user_gesture, Some(true));
        assert_eq!(params.return_by_value, Some(true));
        assert_eq!(params.expression, copy_script("text"));
    }

    #[test]
    fn page_target_needs_live_headed_browser() {
        assert!(OutputTarget::Page.ensure_usable(true, false).is_ok());
        assert!(matches!(
            OutputTarget::Page.ensure_usable(true, true),
            Err(CiteError::ClipboardError(msg)) if msg.contains("headless")
        ));
        assert!(matches!(
            OutputTarget::Page.ensure_usable(false, false),
            Err(CiteError::ClipboardError(msg)) if msg.contains("--live")
        ));
    }

    #[test]
    fn other_targets_work_with_any_source() {
        for target in [OutputTarget::Clipboard, OutputTarget::Stdout] {
            assert!(target.ensure_usable(false, true).is_ok());
            assert!(target.ensure_usable(true, true).is_ok());
        }
    }

    #[test]
    fn output_target_parses_from_config() {
        let target: OutputTarget = serde_yaml::from_str("stdout").unwrap();
        assert_eq!(target, OutputTarget::Stdout);
    }
}
