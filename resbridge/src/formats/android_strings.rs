//! Support for Android `res/values*/*.xml` resource files.
//!
//! Extracts `<string>`, `<string-array>` and `<plurals>` children of the
//! top-level `<resources>` element. Entries marked `translatable="false"` are
//! dropped while parsing.

use std::io::BufRead;

use quick_xml::{
    Reader,
    events::{BytesStart, Event},
};
use serde::Serialize;
use tracing::debug;

use crate::{
    error::Error,
    traits::Parser,
    types::{PluralItem, ValueBucket},
};

/// The translatable content of one resource file, in document order.
#[derive(Debug, Default, Serialize)]
pub struct Format {
    pub strings: Vec<StringResource>,
    pub arrays: Vec<ArrayResource>,
    pub plurals: Vec<PluralsResource>,
}

impl Format {
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.arrays.is_empty() && self.plurals.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringResource {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayResource {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PluralsResource {
    pub name: String,
    pub items: Vec<PluralItem>,
}

impl Parser for Format {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error> {
        let Some(root) = read_tree(reader)? else {
            return Ok(Format::default());
        };
        if root.name != "resources" {
            return Ok(Format::default());
        }

        let mut format = Format::default();
        for element in &root.children {
            match element.name.as_str() {
                "string" => {
                    if let Some(sr) = parse_string_resource(element)? {
                        format.strings.push(sr);
                    }
                }
                "string-array" => {
                    if let Some(ar) = parse_array_resource(element)? {
                        format.arrays.push(ar);
                    }
                }
                "plurals" => {
                    if let Some(pr) = parse_plurals_resource(element)? {
                        format.plurals.push(pr);
                    }
                }
                _ => {}
            }
        }
        Ok(format)
    }
}

impl From<Format> for ValueBucket {
    fn from(value: Format) -> Self {
        let mut bucket = ValueBucket::default();
        for sr in value.strings {
            bucket.strings.insert(sr.name, sr.value);
        }
        for ar in value.arrays {
            bucket.arrays.insert(ar.name, ar.items);
        }
        for pr in value.plurals {
            bucket.plurals.insert(pr.name, pr.items);
        }
        bucket
    }
}

/// Minimal element tree: just enough structure to walk nested markup.
#[derive(Debug, Default)]
struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    /// First text (or CDATA) node directly inside this element.
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    fn from_start(e: &BytesStart) -> Result<Self, Error> {
        let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in e.attributes().with_checks(false) {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Element {
            name,
            attributes,
            text: None,
            children: Vec::new(),
        })
    }

    fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn is_translatable(&self) -> bool {
        self.attribute("translatable") != Some("false")
    }

    fn name_attribute(&self) -> Result<&str, Error> {
        self.attribute("name").ok_or_else(|| {
            Error::invalid_resource(format!("{} tag missing 'name'", self.name))
        })
    }

    /// Follows the last child element down until reaching a leaf, the way
    /// markup-wrapped text (`<b>`, `<xliff:g>`) is flattened.
    fn innermost(&self) -> &Element {
        let mut current = self;
        while let Some(last) = current.children.last() {
            current = last;
        }
        current
    }

    fn items(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter(|child| child.name == "item")
    }
}

fn read_tree<R: BufRead>(reader: R) -> Result<Option<Element>, Error> {
    let mut xml_reader = Reader::from_reader(reader);
    xml_reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();
    let mut root = None;

    loop {
        match xml_reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => stack.push(Element::from_start(e)?),
            Event::Empty(ref e) => {
                let element = Element::from_start(e)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(_) => {
                if let Some(element) = stack.pop() {
                    attach(&mut stack, &mut root, element);
                }
            }
            Event::Text(ref e) => {
                if let Some(current) = stack.last_mut() {
                    if current.text.is_none() {
                        current.text = Some(e.unescape()?.into_owned());
                    }
                }
            }
            Event::CData(ref e) => {
                if let Some(current) = stack.last_mut() {
                    if current.text.is_none() {
                        current.text = Some(String::from_utf8_lossy(e).into_owned());
                    }
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(Error::invalid_resource(format!(
            "unexpected EOF inside <{}>",
            open.name
        )));
    }
    Ok(root)
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None if root.is_none() => *root = Some(element),
        None => {}
    }
}

fn parse_string_resource(element: &Element) -> Result<Option<StringResource>, Error> {
    if !element.is_translatable() {
        return Ok(None);
    }
    let name = element.name_attribute()?;
    debug!(key = name, "string");

    let Some(value) = element.innermost().text.clone() else {
        return Ok(None);
    };
    Ok(Some(StringResource {
        name: name.to_string(),
        value,
    }))
}

fn parse_array_resource(element: &Element) -> Result<Option<ArrayResource>, Error> {
    if !element.is_translatable() {
        return Ok(None);
    }
    let name = element.name_attribute()?;
    debug!(key = name, "string-array");

    // Empty items still hold their position in the array.
    let items: Vec<String> = element
        .items()
        .map(|item| item.text.clone().unwrap_or_default())
        .collect();
    if items.is_empty() {
        return Ok(None);
    }
    Ok(Some(ArrayResource {
        name: name.to_string(),
        items,
    }))
}

fn parse_plurals_resource(element: &Element) -> Result<Option<PluralsResource>, Error> {
    if !element.is_translatable() {
        return Ok(None);
    }
    let name = element.name_attribute()?;
    debug!(key = name, "plurals");

    let items = element
        .items()
        .map(|item| {
            let quantity = item.attribute("quantity").ok_or_else(|| {
                Error::invalid_resource(format!("plurals '{}' item missing 'quantity'", name))
            })?;
            Ok(PluralItem::new(
                quantity,
                item.text.clone().unwrap_or_default(),
            ))
        })
        .collect::<Result<Vec<_>, Error>>()?;
    if items.is_empty() {
        return Ok(None);
    }
    Ok(Some(PluralsResource {
        name: name.to_string(),
        items,
    }))
}
