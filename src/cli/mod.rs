//! CLI module for playlist2xspf

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

use crate::provider::ytdlp::DEFAULT_PROGRAM;

#[derive(Parser, Debug)]
#[command(name = "playlist2xspf", about = "Convert a playlist to a XSPF file via yt-dlp")]
#[command(version)]
pub struct Cli {
    /// URL of the playlist
    #[arg(value_name = "PLAYLIST_URL", required_unless_present = "completions")]
    pub playlist_url: Option<String>,

    /// Write the playlist to this file instead of stdout ("-" for stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Spaces per nesting level, 0 writes the document on one line
    #[arg(long, default_value_t = 2, value_name = "N")]
    pub indent: usize,

    /// yt-dlp executable used to fetch the playlist
    #[arg(long = "yt-dlp", env = "YT_DLP_PATH", default_value = DEFAULT_PROGRAM, value_name = "PATH")]
    pub yt_dlp: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Generate shell completions and exit
    #[arg(long, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}
