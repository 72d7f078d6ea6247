//! Strict XML parsing into a [`serde_json::Value`] tree.
//!
//! The shape mirrors what loose XML-to-map converters produce: each
//! element becomes a key named after its tag, repeated siblings collapse
//! into an array, attributes appear as `"@name"` keys, and text mixed
//! with children lands under `"#text"`. An element with neither children,
//! attributes, nor text becomes null; a text-only element becomes a
//! string.
//!
//! "Strict" matters for the autodetect chain: input without a well-formed
//! root element (plain text, trailing garbage, mismatched tags) must fail
//! so the caller can fall through to raw passthrough.

use quick_xml::events::{BytesStart, BytesText, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::{Error, Result};

pub fn parse(raw: &str) -> Result<Value> {
    let mut reader = Reader::from_str(raw);

    // find the single root element
    let (name, root) = loop {
        match read_event(&mut reader)? {
            Event::Decl(_) | Event::DocType(_) | Event::Comment(_) | Event::PI(_) => continue,
            Event::Text(t) if is_blank(&t)? => continue,
            Event::Start(start) => {
                let name = element_name(&start);
                break (name, read_element(&mut reader, &start)?);
            }
            Event::Empty(start) => {
                let name = element_name(&start);
                break (name, empty_element(&start)?);
            }
            _ => return Err(parse_error("document has no root element")),
        }
    };

    // nothing but trivia may follow the root
    loop {
        match read_event(&mut reader)? {
            Event::Eof => break,
            Event::Comment(_) | Event::PI(_) => continue,
            Event::Text(t) if is_blank(&t)? => continue,
            _ => return Err(parse_error("content after the root element")),
        }
    }

    let mut document = Map::new();
    document.insert(name, root);
    Ok(Value::Object(document))
}

fn read_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Value> {
    let mut children = Map::new();
    let mut text = String::new();
    insert_attributes(&mut children, start)?;

    loop {
        match read_event(reader)? {
            Event::Start(child) => {
                let name = element_name(&child);
                let value = read_element(reader, &child)?;
                insert_child(&mut children, name, value);
            }
            Event::Empty(child) => {
                let name = element_name(&child);
                let value = empty_element(&child)?;
                insert_child(&mut children, name, value);
            }
            Event::Text(t) => {
                let t = t.decode().map_err(|e| parse_error(&e.to_string()))?;
                text.push_str(&t);
            }
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::GeneralRef(r) => {
                let name = String::from_utf8_lossy(&r).into_owned();
                text.push(resolve_reference(&name)?);
            }
            Event::End(_) => break,
            Event::Eof => return Err(parse_error("unexpected end of document")),
            _ => continue,
        }
    }

    Ok(assemble(children, text))
}

fn empty_element(start: &BytesStart) -> Result<Value> {
    let mut children = Map::new();
    insert_attributes(&mut children, start)?;
    Ok(assemble(children, String::new()))
}

fn assemble(mut children: Map<String, Value>, text: String) -> Value {
    // trim once here: the reader splits text at entity references, so
    // trimming individual fragments would eat interior whitespace
    let text = text.trim();
    if children.is_empty() {
        if text.is_empty() {
            Value::Null
        } else {
            Value::String(text.to_string())
        }
    } else {
        if !text.is_empty() {
            children.insert("#text".to_string(), Value::String(text.to_string()));
        }
        Value::Object(children)
    }
}

/// Repeated sibling names collapse into an array, in document order.
fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(values)) => values.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

fn insert_attributes(children: &mut Map<String, Value>, start: &BytesStart) -> Result<()> {
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| parse_error(&e.to_string()))?;
        let key = format!("@{}", String::from_utf8_lossy(attribute.key.as_ref()));
        let value = attribute
            .unescape_value()
            .map_err(|e| parse_error(&e.to_string()))?;
        children.insert(key, Value::String(value.into_owned()));
    }
    Ok(())
}

/// Resolves `&name;` and `&#N;` references found in element text.
fn resolve_reference(name: &str) -> Result<char> {
    let resolved = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "apos" => '\'',
        "quot" => '"',
        _ => {
            let code = match name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                Some(hex) => u32::from_str_radix(hex, 16).ok(),
                None => name.strip_prefix('#').and_then(|dec| dec.parse().ok()),
            };
            code.and_then(char::from_u32)
                .ok_or_else(|| parse_error(&format!("unresolvable reference &{};", name)))?
        }
    };
    Ok(resolved)
}

fn element_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}

fn is_blank(text: &BytesText) -> Result<bool> {
    let text = text.decode().map_err(|e| parse_error(&e.to_string()))?;
    Ok(text.trim().is_empty())
}

fn read_event<'a>(reader: &mut Reader<&'a [u8]>) -> Result<Event<'a>> {
    reader.read_event().map_err(|e| parse_error(&e.to_string()))
}

fn parse_error(message: &str) -> Error {
    Error::Parse {
        kind: "xml",
        message: message.to_string(),
    }
}
