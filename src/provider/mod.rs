//! Playlist metadata providers

use async_trait::async_trait;

pub mod models;
pub mod ytdlp;

pub use models::{PlaylistInfo, TrackInfo};
pub use ytdlp::YtDlp;

use crate::error::Result;

/// Source of flat playlist listings
#[async_trait]
pub trait PlaylistProvider {
    /// Extract the listing for `playlist_url` without resolving each entry.
    ///
    /// When `quiet` is set the provider must not write diagnostics to the
    /// process's own stdout or stderr.
    async fn fetch(&self, playlist_url: &str, quiet: bool) -> Result<PlaylistInfo>;
}
