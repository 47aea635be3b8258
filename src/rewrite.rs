//! Polygon element rewriting
//!
//! Streams a document through quick-xml, replacing every `<polygon>`
//! element with an equivalent `<path>` as it passes. Markup the rewriter
//! does not own is written back exactly as it was read, so untouched
//! elements, text, comments and doctypes round-trip byte-for-byte.

use std::borrow::Cow;
use std::sync::OnceLock;

use log::{debug, trace};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use regex::Regex;

use crate::error::ConvertError;
use crate::path::{encode_points, Point};

const POLYGON_TAG: &[u8] = b"polygon";
const POINTS_ATTR: &[u8] = b"points";

/// Rewrite every polygon element in an SVG document.
///
/// The document is walked in a single forward pass, so each polygon is
/// visited exactly once in document order. A polygon without a usable
/// `points` attribute is left untouched.
pub fn convert(svg: &str) -> Result<String, ConvertError> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Vec::new());
    let mut converted = 0usize;

    loop {
        match reader.read_event()? {
            Event::Eof => break,
            Event::Empty(elem) if elem.name().as_ref() == POLYGON_TAG => {
                match convert_polygon(&elem)? {
                    Some(path) => {
                        writer.write_event(Event::Empty(path))?;
                        converted += 1;
                    }
                    None => writer.write_event(Event::Empty(elem))?,
                }
            }
            Event::Start(elem) if elem.name().as_ref() == POLYGON_TAG => {
                match convert_polygon(&elem)? {
                    Some(path) => {
                        // The replacement path carries no children; the
                        // polygon's subtree is removed along with it.
                        writer.write_event(Event::Empty(path))?;
                        reader.read_to_end(elem.name())?;
                        converted += 1;
                    }
                    None => writer.write_event(Event::Start(elem))?,
                }
            }
            event => writer.write_event(event)?,
        }
    }

    debug!("converted {} polygon element(s)", converted);
    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

/// Build the replacement `<path>` tag for one polygon element.
///
/// Returns `None` when the polygon has no usable `points` attribute
/// (absent, blank, or nothing in it parses as a number pair); the caller
/// must then leave the element as it stands.
fn convert_polygon(elem: &BytesStart<'_>) -> Result<Option<BytesStart<'static>>, ConvertError> {
    let points_text = match points_attribute(elem)? {
        Some(text) => text,
        None => return Ok(None),
    };
    let points = parse_points(&points_text);
    if points.is_empty() {
        trace!("skipping polygon without a usable points attribute");
        return Ok(None);
    }

    let mut path = BytesStart::new("path");
    path.push_attribute(("d", encode_points(&points).as_str()));

    // Carry every other attribute across in source order. The `points`
    // name is excluded case-insensitively.
    for attr in elem.attributes() {
        let attr = attr?;
        if attr.key.as_ref().eq_ignore_ascii_case(POINTS_ATTR) {
            continue;
        }
        let key = String::from_utf8_lossy(attr.key.as_ref());
        let value = attr.unescape_value()?;
        path.push_attribute((key.as_ref(), value.as_ref()));
    }

    trace!("converted polygon with {} vertices", points.len());
    Ok(Some(path))
}

/// Fetch the unescaped `points` attribute value, if present.
fn points_attribute<'a>(elem: &'a BytesStart<'_>) -> Result<Option<Cow<'a, str>>, ConvertError> {
    for attr in elem.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == POINTS_ATTR {
            return Ok(Some(attr.unescape_value()?));
        }
    }
    Ok(None)
}

/// Number pair pattern for the `points` attribute: two optionally negative
/// numeric tokens separated by a single comma or whitespace character.
fn point_pair_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(-?[0-9.]+)(?:,|\s)(-?[0-9.]+)").expect("point pair regex must compile")
    })
}

/// Tokenize a `points` attribute into vertex pairs.
///
/// Scans left to right for non-overlapping number pairs; anything between
/// pairs (extra separators, stray text) is stepped over. Blank or unusable
/// text yields an empty sequence.
fn parse_points(text: &str) -> Vec<Point<'_>> {
    point_pair_re()
        .captures_iter(text)
        .map(|caps| {
            let (_, [x, y]) = caps.extract();
            Point::new(x, y)
        })
        .collect()
}
