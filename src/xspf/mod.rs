//! XSPF document model and builder
//!
//! Maps a fetched [`PlaylistInfo`] onto the XSPF 1.0 element layout:
//! playlist metadata first, then one `track` per entry in playlist order.

mod writer;

use tracing::debug;

use crate::error::{Error, Result};
use crate::provider::{PlaylistInfo, TrackInfo};

pub const XSPF_NAMESPACE: &str = "http://xspf.org/ns/0/";
pub const XSPF_VERSION: &str = "1";

/// An XSPF playlist ready to be serialized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XspfDocument {
    pub title: String,
    /// Only emitted when the playlist has a channel
    pub creator: Option<String>,
    pub annotation: String,
    pub info: String,
    pub location: String,
    pub tracks: Vec<XspfTrack>,
}

/// A single `track` element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XspfTrack {
    pub location: String,
    pub title: String,
    pub creator: String,
    pub duration_ms: u64,
}

/// Build the XSPF document for a playlist
pub fn build(playlist: &PlaylistInfo) -> Result<XspfDocument> {
    let tracks = playlist
        .entries
        .iter()
        .enumerate()
        .map(|(index, entry)| build_track(index, entry))
        .collect::<Result<Vec<_>>>()?;

    debug!("Built XSPF document with {} tracks", tracks.len());

    Ok(XspfDocument {
        title: playlist.title.clone(),
        creator: playlist.channel().map(str::to_string),
        annotation: playlist.description.clone(),
        info: playlist.webpage_url.clone(),
        location: playlist.webpage_url.clone(),
        tracks,
    })
}

fn build_track(index: usize, entry: &TrackInfo) -> Result<XspfTrack> {
    let duration_ms = duration_millis(entry.duration).ok_or_else(|| {
        Error::MalformedInput(format!(
            "entry {} ('{}') has invalid duration {}",
            index, entry.title, entry.duration
        ))
    })?;

    Ok(XspfTrack {
        location: entry.url.clone(),
        title: entry.title.clone(),
        creator: entry.uploader.clone(),
        duration_ms,
    })
}

/// Convert seconds to whole milliseconds, truncating any fraction
fn duration_millis(seconds: f64) -> Option<u64> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    Some((seconds * 1000.0).trunc() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(url: &str, title: &str, uploader: &str, duration: f64) -> TrackInfo {
        TrackInfo {
            url: url.to_string(),
            title: title.to_string(),
            uploader: uploader.to_string(),
            duration,
        }
    }

    fn mix(channel: Option<&str>, entries: Vec<TrackInfo>) -> PlaylistInfo {
        PlaylistInfo {
            title: "Mix".to_string(),
            channel: channel.map(str::to_string),
            description: "desc".to_string(),
            webpage_url: "https://example/pl".to_string(),
            entries,
        }
    }

    fn song_a() -> TrackInfo {
        track("https://example/v1", "Song A", "UserA", 125.5)
    }

    #[test]
    fn test_compact_output() {
        let doc = build(&mix(Some("ChannelX"), vec![song_a()])).unwrap();
        assert_eq!(
            doc.to_xml_string(0).unwrap(),
            "<playlist xmlns=\"http://xspf.org/ns/0/\" version=\"1\">\
             <title>Mix</title><creator>ChannelX</creator><annotation>desc</annotation>\
             <info>https://example/pl</info><location>https://example/pl</location>\
             <trackList><track><location>https://example/v1</location><title>Song A</title>\
             <creator>UserA</creator><duration>125500</duration></track></trackList></playlist>"
        );
    }

    #[test]
    fn test_creator_omitted_without_channel() {
        for channel in [None, Some("")] {
            let doc = build(&mix(channel, vec![song_a()])).unwrap();
            assert_eq!(doc.creator, None);

            let xml = doc.to_xml_string(0).unwrap();
            assert!(xml.contains("<title>Mix</title><annotation>desc</annotation>"));
            assert!(xml.contains("<creator>UserA</creator>"));
        }
    }

    #[test]
    fn test_empty_playlist() {
        let doc = build(&mix(Some("ChannelX"), vec![])).unwrap();
        assert!(doc.tracks.is_empty());
        assert!(doc.to_xml_string(0).unwrap().contains("<trackList></trackList>"));
    }

    #[test]
    fn test_empty_fields_still_emitted() {
        let mut playlist = mix(None, vec![track("https://example/v1", "", "", 0.0)]);
        playlist.description = String::new();

        let xml = build(&playlist).unwrap().to_xml_string(0).unwrap();
        assert!(xml.contains("<annotation></annotation>"));
        assert!(xml.contains("<title></title><creator></creator><duration>0</duration>"));
    }

    #[test]
    fn test_duration_truncates() {
        assert_eq!(duration_millis(2.3456), Some(2345));
        assert_eq!(duration_millis(3.9997), Some(3999));
        assert_eq!(duration_millis(125.5), Some(125500));
        assert_eq!(duration_millis(0.0), Some(0));
    }

    #[test]
    fn test_invalid_duration() {
        assert_eq!(duration_millis(-1.0), None);
        assert_eq!(duration_millis(f64::NAN), None);
        assert_eq!(duration_millis(f64::INFINITY), None);

        let err = build(&mix(None, vec![song_a(), track("u", "Bad", "x", -3.0)])).unwrap_err();
        assert!(matches!(err, Error::MalformedInput(ref msg) if msg.contains("entry 1")));
    }

    #[test]
    fn test_tracks_keep_order() {
        let entries: Vec<_> = (0..5)
            .map(|i| track(&format!("https://example/v{i}"), &format!("Song {i}"), "u", i as f64))
            .collect();
        let doc = build(&mix(None, entries.clone())).unwrap();

        assert_eq!(doc.tracks.len(), entries.len());
        for (track, entry) in doc.tracks.iter().zip(&entries) {
            assert_eq!(track.location, entry.url);
            assert_eq!(track.title, entry.title);
        }

        let xml = doc.to_xml_string(0).unwrap();
        assert_eq!(xml.matches("<track>").count(), 5);
        let first = xml.find("Song 0").unwrap();
        let last = xml.find("Song 4").unwrap();
        assert!(first < last);
    }

    #[test]
    fn test_duplicate_entries_kept() {
        let doc = build(&mix(None, vec![song_a(), song_a()])).unwrap();
        assert_eq!(doc.tracks.len(), 2);
        assert_eq!(doc.tracks[0], doc.tracks[1]);
    }

    #[test]
    fn test_build_is_deterministic() {
        let playlist = mix(Some("ChannelX"), vec![song_a(), track("https://example/v2", "B", "", 1.25)]);
        let first = build(&playlist).unwrap().to_xml(2).unwrap();
        let second = build(&playlist).unwrap().to_xml(2).unwrap();
        assert_eq!(first, second);
    }
}
