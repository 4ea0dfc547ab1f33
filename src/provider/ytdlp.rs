//! yt-dlp backed playlist provider

use async_trait::async_trait;
use serde_json::Value;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, warn};

use super::{PlaylistInfo, PlaylistProvider};
use crate::error::{Error, Result};

pub const DEFAULT_PROGRAM: &str = "yt-dlp";

/// Runs the yt-dlp executable in flat-playlist mode
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
}

impl YtDlp {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command line arguments for a single flat extraction
    fn args(playlist_url: &str, quiet: bool) -> Vec<&str> {
        let mut args = vec!["--flat-playlist", "--dump-single-json"];
        if quiet {
            args.extend(["--quiet", "--no-warnings"]);
        }
        // Keep URLs starting with '-' from being read as options
        args.extend(["--", playlist_url]);
        args
    }
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

#[async_trait]
impl PlaylistProvider for YtDlp {
    async fn fetch(&self, playlist_url: &str, quiet: bool) -> Result<PlaylistInfo> {
        let args = Self::args(playlist_url, quiet);
        debug!("Running {} {}", self.program.display(), args.join(" "));

        // stdout carries the JSON record; stderr only reaches the terminal when not quiet
        let output = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(if quiet { Stdio::piped() } else { Stdio::inherit() })
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                Error::fetch(
                    playlist_url,
                    format!("could not launch {}: {}", self.program.display(), e),
                )
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            debug!("{} stderr: {}", self.program.display(), stderr.trim());
        }

        if !output.status.success() {
            let reason = last_error_line(&stderr).map(str::to_string).unwrap_or_else(|| {
                format!("{} exited with {}", self.program.display(), output.status)
            });
            return Err(Error::fetch(playlist_url, reason));
        }

        parse_dump(playlist_url, &output.stdout)
    }
}

/// Most specific error line yt-dlp printed, if any
fn last_error_line(stderr: &str) -> Option<&str> {
    let lines = stderr.lines().map(str::trim).filter(|l| !l.is_empty());
    lines
        .clone()
        .filter(|l| l.starts_with("ERROR:"))
        .last()
        .or_else(|| lines.last())
}

/// Interpret the output of `--dump-single-json`
fn parse_dump(playlist_url: &str, stdout: &[u8]) -> Result<PlaylistInfo> {
    let value: Value = serde_json::from_slice(stdout)
        .map_err(|e| Error::fetch(playlist_url, format!("provider returned invalid JSON: {}", e)))?;

    let is_playlist = value.get("_type").and_then(Value::as_str) == Some("playlist")
        || value.get("entries").is_some_and(Value::is_array);
    if !is_playlist {
        warn!("{} did not resolve to a playlist", playlist_url);
        return Err(Error::fetch(playlist_url, "URL does not point to a playlist"));
    }

    let info = PlaylistInfo::from_value(value)?;
    debug!("Fetched '{}' with {} entries", info.title, info.track_count());
    Ok(info)
}
