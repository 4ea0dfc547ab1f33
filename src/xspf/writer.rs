//! XSPF serialization

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use super::{XSPF_NAMESPACE, XSPF_VERSION, XspfDocument, XspfTrack};
use crate::error::{Error, Result};

impl XspfDocument {
    /// Serialize the document as UTF-8 XML without a declaration.
    ///
    /// `indent` is the number of spaces per nesting level. Zero produces the
    /// whole document on a single line; anything else also ends it with a newline.
    pub fn to_xml(&self, indent: usize) -> Result<Vec<u8>> {
        let mut writer = if indent > 0 {
            Writer::new_with_indent(Vec::new(), b' ', indent)
        } else {
            Writer::new(Vec::new())
        };

        let root = BytesStart::new("playlist")
            .with_attributes([("xmlns", XSPF_NAMESPACE), ("version", XSPF_VERSION)]);
        emit(&mut writer, Event::Start(root))?;

        text_element(&mut writer, "title", &self.title)?;
        if let Some(creator) = &self.creator {
            text_element(&mut writer, "creator", creator)?;
        }
        text_element(&mut writer, "annotation", &self.annotation)?;
        text_element(&mut writer, "info", &self.info)?;
        text_element(&mut writer, "location", &self.location)?;

        emit(&mut writer, Event::Start(BytesStart::new("trackList")))?;
        for track in &self.tracks {
            write_track(&mut writer, track)?;
        }
        emit(&mut writer, Event::End(BytesEnd::new("trackList")))?;

        emit(&mut writer, Event::End(BytesEnd::new("playlist")))?;

        let mut xml = writer.into_inner();
        if indent > 0 {
            xml.push(b'\n');
        }
        Ok(xml)
    }

    pub fn to_xml_string(&self, indent: usize) -> Result<String> {
        String::from_utf8(self.to_xml(indent)?).map_err(|e| Error::Serialize(e.to_string()))
    }
}

fn write_track(writer: &mut Writer<Vec<u8>>, track: &XspfTrack) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new("track")))?;
    text_element(writer, "location", &track.location)?;
    text_element(writer, "title", &track.title)?;
    text_element(writer, "creator", &track.creator)?;
    text_element(writer, "duration", &track.duration_ms.to_string())?;
    emit(writer, Event::End(BytesEnd::new("track")))
}

/// Write `<name>text</name>`, keeping the element even when `text` is empty
fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    emit(writer, Event::Start(BytesStart::new(name)))?;
    emit(writer, Event::Text(BytesText::new(text)))?;
    emit(writer, Event::End(BytesEnd::new(name)))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Serialize(e.to_string()))
}
