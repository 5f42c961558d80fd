// page-cite: copy an HTML citation for a web page
//
// Reads a page from a file, stdin, an HTTP fetch or a live Chromium tab,
// extracts its citation metadata and writes the snippet to the clipboard.

use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use page_cite::source::{self, PageSnapshot};
use page_cite::{
    BrowserWrapper, CitationFormat, ClipboardWriter, Config, OutputTarget, PageClipboard, StdoutWriter,
    SystemClipboard, capture_url, cite, load_yaml_config, validate_navigation_timeout,
};

#[derive(Parser, Debug)]
#[command(name = "page-cite", version)]
#[command(about = "Copy an HTML citation (title, canonical URL, provider, excerpt) for a web page")]
struct Args {
    /// Saved HTML file to cite; `-` or omitted reads stdin
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// URL the file or stdin document was loaded from
    #[arg(short, long, value_name = "URL")]
    url: Option<String>,

    /// Fetch the page over HTTP instead of reading a file
    #[arg(long, value_name = "URL", conflicts_with_all = ["input", "url", "live"])]
    fetch: Option<String>,

    /// Open the page in Chromium and cite the rendered DOM
    #[arg(long, value_name = "URL", conflicts_with_all = ["input", "url"])]
    live: Option<String>,

    /// Text to quote in the citation; the only source of an excerpt selection
    #[arg(short, long)]
    selection: Option<String>,

    /// Where to send the citation
    #[arg(short, long, value_enum)]
    output: Option<OutputTarget>,

    /// Citation representation
    #[arg(short, long, value_enum)]
    format: Option<CitationFormat>,

    /// Navigation/fetch timeout in milliseconds (max 300000)
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Config file (defaults to <config dir>/page-cite/config.yaml)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "page_cite=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = load_yaml_config(args.config.as_deref()).context("Failed to load config")?;

    let output = args.output.unwrap_or(config.output);
    let format = args.format.unwrap_or(config.format);
    let timeout = validate_navigation_timeout(args.timeout_ms, config.navigation_timeout_ms)?;

    output.ensure_usable(args.live.is_some(), config.browser.headless)?;

    if let Some(url) = &args.live {
        return cite_live(url, &config, args.selection, output, format, timeout).await;
    }

    let snapshot = if let Some(url) = &args.fetch {
        source::fetch(url, timeout).await?
    } else {
        let url = args
            .url
            .as_deref()
            .context("--url is required when reading a page from a file or stdin")?;
        match args.input.as_deref() {
            Some(path) if path != Path::new("-") => source::read_file(path, url).await?,
            _ => source::read_stdin(url).await?,
        }
    };

    let citation = build_citation(&snapshot.with_selection(args.selection), format)?;
    let writer: Box<dyn ClipboardWriter> = match output {
        OutputTarget::Stdout => Box::new(StdoutWriter),
        _ => Box::new(SystemClipboard),
    };
    writer.write_text(&citation).await?;
    Ok(())
}

/// Capture a live page, cite it and deliver the result, always shutting the browser down
///
/// With the page target the browser stays open until Ctrl-C so the copied
/// text remains on its clipboard.
async fn cite_live(
    url: &str,
    config: &Config,
    selection: Option<String>,
    output: OutputTarget,
    format: CitationFormat,
    timeout: std::time::Duration,
) -> Result<()> {
    let wrapper = BrowserWrapper::launch(&config.browser)
        .await
        .context("Failed to launch browser")?;

    let result = async {
        let (page, snapshot) = capture_url(&wrapper, url, timeout).await?;
        let citation = build_citation(&snapshot.with_selection(selection), format)?;

        let writer: Box<dyn ClipboardWriter> = match output {
            OutputTarget::Page => Box::new(PageClipboard::new(page)),
            OutputTarget::Stdout => Box::new(StdoutWriter),
            OutputTarget::Clipboard => Box::new(SystemClipboard),
        };
        writer.write_text(&citation).await?;

        if output == OutputTarget::Page {
            // The browser owns the copied text; closing it would drop the clipboard
            info!("Citation copied in the browser window; press Ctrl-C once it has been pasted");
            tokio::signal::ctrl_c().await.context("Failed to wait for Ctrl-C")?;
        }
        anyhow::Ok(())
    }
    .await;

    wrapper.shutdown().await;
    result
}

/// Parse and extract synchronously; the parsed tree never crosses an await
fn build_citation(snapshot: &PageSnapshot, format: CitationFormat) -> Result<String> {
    let ctx = snapshot.context()?;
    let document = snapshot.document();
    let citation = cite(&document, &ctx, format)?;
    info!(page = %ctx.url(), "Citation built");
    Ok(citation)
}
