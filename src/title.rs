//! Page title extraction.
//!
//! Titles come from the first `<title>` element of a rendered page. The
//! markup is tokenized with `quick-xml`'s pull reader, configured leniently
//! enough for generated HTML: void elements such as `<meta>` and `<link>` are
//! never closed, end tags need not match their openers, and a bare `&` is
//! plain text.
//!
//! [`TitleParser`] is the event sink. It only tracks two things: whether the
//! cursor is inside a title region, and whether a title has been captured.
//! Text is accumulated while inside the region; at the closing tag the
//! trimmed text is captured if it is non-empty and the scan stops.
//!
//! ## Fallback
//!
//! Extraction never fails. An unreadable file, a non-UTF-8 file, a tokenizer
//! error, a missing title or a whitespace-only title all resolve to the
//! caller's fallback (the file stem, when called from
//! [`crate::generate`]).

use quick_xml::Reader;
use quick_xml::escape::{resolve_html5_entity, unescape};
use quick_xml::events::Event;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
enum TitleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("markup error: {0}")]
    Markup(#[from] quick_xml::Error),
    #[error("invalid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

/// Tracks title state across tokenizer events.
#[derive(Debug, Default)]
struct TitleParser {
    in_title: bool,
    buffer: String,
    title: Option<String>,
}

impl TitleParser {
    fn start_element(&mut self, name: &[u8]) {
        if is_title(name) {
            self.in_title = true;
            self.buffer.clear();
        }
    }

    fn end_element(&mut self, name: &[u8]) {
        if is_title(name) && self.in_title {
            self.in_title = false;
            self.capture();
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_title && self.title.is_none() {
            self.buffer.push_str(text);
        }
    }

    /// Store the buffered text if it carries anything besides whitespace.
    fn capture(&mut self) {
        let trimmed = self.buffer.trim();
        if self.title.is_none() && !trimmed.is_empty() {
            self.title = Some(trimmed.to_string());
        }
        self.buffer.clear();
    }

    fn is_done(&self) -> bool {
        self.title.is_some()
    }

    fn finish(mut self) -> Option<String> {
        // An unterminated <title> at end of input still counts.
        if self.in_title {
            self.capture();
        }
        self.title
    }
}

fn is_title(name: &[u8]) -> bool {
    name.eq_ignore_ascii_case(b"title")
}

/// Resolve an entity or character reference (`amp`, `mdash`, `#8212`).
///
/// Unknown names are kept verbatim, the way browsers render them.
fn resolve_reference(name: &str) -> String {
    if let Some(resolved) = resolve_html5_entity(name) {
        return resolved.to_string();
    }
    let raw = format!("&{name};");
    match unescape(&raw) {
        Ok(resolved) => resolved.into_owned(),
        Err(_) => raw,
    }
}

/// Drive the tokenizer over `html`, feeding events into a [`TitleParser`].
fn parse_title(html: &str) -> Result<Option<String>, TitleError> {
    let mut reader = Reader::from_str(html);
    let config = reader.config_mut();
    config.trim_text(false);
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    // HTML allows a bare `&` in text and inline scripts
    config.allow_dangling_amp = true;

    let mut parser = TitleParser::default();
    loop {
        match reader.read_event()? {
            Event::Start(e) => parser.start_element(e.name().as_ref()),
            Event::End(e) => parser.end_element(e.name().as_ref()),
            Event::Text(e) => parser.text(std::str::from_utf8(&e)?),
            Event::CData(e) => parser.text(std::str::from_utf8(&e)?),
            Event::GeneralRef(e) => parser.text(&resolve_reference(std::str::from_utf8(&e)?)),
            Event::Eof => break,
            _ => {}
        }
        if parser.is_done() {
            break;
        }
    }
    Ok(parser.finish())
}

/// Return the first non-empty `<title>` of `html`, or `fallback`.
pub fn extract_title(html: &str, fallback: &str) -> String {
    parse_title(html)
        .ok()
        .flatten()
        .unwrap_or_else(|| fallback.to_string())
}

/// Read `path` and return its title, or `fallback` if the file cannot be
/// read, is not UTF-8, or has no usable title.
pub fn title_from_file(path: &Path, fallback: &str) -> String {
    read_title(path)
        .ok()
        .flatten()
        .unwrap_or_else(|| fallback.to_string())
}

fn read_title(path: &Path) -> Result<Option<String>, TitleError> {
    let bytes = std::fs::read(path)?;
    let html = std::str::from_utf8(&bytes)?;
    parse_title(html)
}
