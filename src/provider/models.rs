//! Playlist records as returned by the metadata provider

use serde::Deserialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Playlist listing produced by a flat extraction
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaylistInfo {
    pub title: String,
    /// Channel that owns the playlist (absent for some sites)
    #[serde(default)]
    pub channel: Option<String>,
    pub description: String,
    /// Canonical URL of the playlist page
    pub webpage_url: String,
    /// Entries in playlist order
    pub entries: Vec<TrackInfo>,
}

/// Lightweight listing of a single playlist entry
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrackInfo {
    /// Playable location of the track
    pub url: String,
    pub title: String,
    pub uploader: String,
    /// Length in seconds
    pub duration: f64,
}

impl PlaylistInfo {
    /// Parse a provider JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::MalformedInput(e.to_string()))
    }

    /// Convert an already-parsed provider JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|e| Error::MalformedInput(e.to_string()))
    }

    /// Channel name, if one is set and non-empty
    pub fn channel(&self) -> Option<&str> {
        self.channel.as_deref().filter(|c| !c.is_empty())
    }

    pub fn track_count(&self) -> usize {
        self.entries.len()
    }
}
