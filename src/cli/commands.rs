//! CLI command handlers

use anyhow::Result;
use clap_complete::generate;
use colored::Colorize;
use std::io;
use tracing::info;

use crate::error;
use crate::provider::PlaylistProvider;
use crate::utils::OutputSink;
use crate::xspf;

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub title: String,
    pub track_count: usize,
}

/// Fetch a playlist, build its XSPF document and write it to `sink`.
///
/// The document is rendered completely before the sink is touched, so a fetch
/// or build failure leaves the destination as it was.
pub async fn convert_playlist<P>(
    provider: &P,
    playlist_url: &str,
    sink: &OutputSink,
    indent: usize,
) -> error::Result<ConvertSummary>
where
    P: PlaylistProvider + ?Sized,
{
    info!("Fetching playlist {}", playlist_url);
    let playlist = provider.fetch(playlist_url, sink.quiet()).await?;

    let document = xspf::build(&playlist)?;
    let xml = document.to_xml(indent)?;
    sink.write(&xml)?;

    Ok(ConvertSummary {
        title: document.title,
        track_count: document.tracks.len(),
    })
}

/// Handle the default conversion command
pub async fn convert<P>(provider: &P, playlist_url: &str, sink: &OutputSink, indent: usize) -> Result<()>
where
    P: PlaylistProvider + ?Sized,
{
    let summary = convert_playlist(provider, playlist_url, sink, indent).await?;

    // Nothing but the document goes to stdout
    if !sink.is_stdout() {
        eprintln!(
            "{} '{}' ({} tracks) to {}",
            "Wrote".green().bold(),
            summary.title,
            summary.track_count,
            sink.to_string().cyan()
        );
    }

    Ok(())
}

/// Handle `--completions`
pub fn completion(shell: clap_complete::Shell) {
    let mut cmd = <super::Cli as clap::CommandFactory>::command();
    generate(shell, &mut cmd, "playlist2xspf", &mut io::stdout());
}
