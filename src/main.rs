//! playlist2xspf - Convert a playlist to a XSPF file via yt-dlp

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use playlist2xspf::cli::{self, Cli};
use playlist2xspf::provider::YtDlp;
use playlist2xspf::utils::OutputSink;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        "playlist2xspf=debug"
    } else {
        "playlist2xspf=warn"
    };

    // stdout may carry the document, so logs always go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(shell) = cli.completions {
        cli::commands::completion(shell);
        return Ok(());
    }

    let playlist_url = cli.playlist_url.context("No playlist URL given")?;
    let sink = OutputSink::from_arg(cli.output);
    let provider = YtDlp::new(cli.yt_dlp);

    cli::commands::convert(&provider, &playlist_url, &sink, cli.indent).await
}
