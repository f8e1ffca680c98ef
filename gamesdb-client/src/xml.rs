//! Minimal XML element tree over quick-xml, and the per-type decode hook.
//!
//! TheGamesDB responses are small, so each body is read into an [`Element`]
//! tree first. Record types then pull what they need out of their own
//! subtree through [`FromXml`], which lets two variants with very different
//! XML shapes decode into the same flat record layout.

use std::str::FromStr;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::date::DatePolicy;
use crate::error::DecodeError;

/// A parsed XML element: name, attributes, concatenated text and children.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<Element>,
}

impl Element {
    fn from_start(start: &BytesStart<'_>) -> Result<Self, DecodeError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.unescape_value()?.to_string();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            ..Default::default()
        })
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Text of the first child with the given name, or `""` if there is none.
    pub fn child_text(&self, name: &str) -> &str {
        self.child(name).map_or("", |c| c.text.as_str())
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Options threaded through every decode hook.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct DecodeOptions {
    pub dates: DatePolicy,
}

/// A record that can be built from its own XML subtree.
pub(crate) trait FromXml: Sized {
    /// Element name this record is stored under.
    const TAG: &'static str;

    fn from_xml(element: &Element, options: &DecodeOptions) -> Result<Self, DecodeError>;
}

/// Decode every direct child of `parent` named `T::TAG`.
pub(crate) fn decode_children<T: FromXml>(
    parent: &Element,
    options: &DecodeOptions,
) -> Result<Vec<T>, DecodeError> {
    parent
        .children_named(T::TAG)
        .map(|el| T::from_xml(el, options))
        .collect()
}

/// Parse a numeric field. Absent or blank values decode to zero.
pub(crate) fn parse_number<T>(
    raw: Option<&str>,
    element: &'static str,
    field: &'static str,
) -> Result<T, DecodeError>
where
    T: FromStr + Default,
{
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse()
        .map_err(|_| DecodeError::invalid_field(element, field, raw))
}

/// Read a full response body into an element tree and return its root.
pub(crate) fn parse_document(body: &[u8]) -> Result<Element, DecodeError> {
    let mut xml = Reader::from_reader(body);
    xml.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match xml.read_event_into(&mut buf)? {
            Event::Start(ref e) => stack.push(Element::from_start(e)?),
            Event::Empty(ref e) => {
                let element = Element::from_start(e)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(ref e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(current) = stack.last_mut() {
                    current.text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| DecodeError::malformed("unexpected closing tag"))?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(DecodeError::malformed(format!(
            "unclosed <{}> element",
            open.name
        )));
    }
    root.ok_or_else(|| DecodeError::malformed("document has no root element"))
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), DecodeError> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => return Err(DecodeError::malformed("more than one root element")),
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/xml_tests.rs"]
mod tests;
