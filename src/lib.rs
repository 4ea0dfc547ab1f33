//! playlist2xspf - Convert an online playlist to a XSPF file via yt-dlp
//!
//! The conversion runs in three steps: a [`provider::PlaylistProvider`] fetches a
//! flat listing of the playlist, [`xspf::build`] maps it onto an XSPF document and
//! a [`utils::OutputSink`] writes the serialized document once.

pub mod cli;
pub mod error;
pub mod provider;
pub mod utils;
pub mod xspf;

pub use error::{Error, Result};
