//! Error types shared by the fetch, build and write stages

use std::io;
use thiserror::Error;

/// Any failure that aborts a playlist conversion
#[derive(Debug, Error)]
pub enum Error {
    /// The provider could not produce a playlist for the URL
    #[error("failed to fetch playlist {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The playlist record is missing a required field or holds an unusable value
    #[error("malformed playlist info: {0}")]
    MalformedInput(String),

    /// The destination could not be written
    #[error("failed to write output to {target}: {source}")]
    Output {
        target: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to serialize XSPF document: {0}")]
    Serialize(String),
}

impl Error {
    pub fn fetch(url: &str, reason: impl Into<String>) -> Self {
        Self::Fetch {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
