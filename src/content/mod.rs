//! Response body parsing. The resolution chain is ordered: an explicit
//! preference parses strictly, while autodetection tries JSON, then XML,
//! then falls back to the raw body without ever failing.

use std::fmt;

use serde_json::Value;

use crate::{Error, Result};

#[cfg(test)]
mod tests;

pub mod xml;

/// How the response body should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContentType {
    Json,
    Xml,
    #[default]
    Autodetect,
    Raw,
}

impl From<&str> for ContentType {
    /// Unrecognized names mean raw passthrough, they are not an error.
    fn from(content_type: &str) -> ContentType {
        match content_type.to_ascii_lowercase().as_str() {
            "json" => ContentType::Json,
            "xml" => ContentType::Xml,
            "autodetect" => ContentType::Autodetect,
            _ => ContentType::Raw,
        }
    }
}

/// A parsed response body, tagged with the parser that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Json(Value),
    Xml(Value),
    Raw(String),
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Json(value) | Content::Xml(value) => {
                let pretty = serde_json::to_string_pretty(value).map_err(|_| fmt::Error)?;
                f.write_str(&pretty)
            }
            Content::Raw(raw) => f.write_str(raw),
        }
    }
}

pub fn parse_content(content_type: ContentType, raw: &str) -> Result<Content> {
    match content_type {
        ContentType::Json => json_parser(raw).map(Content::Json),
        ContentType::Xml => xml::parse(raw).map(Content::Xml),
        ContentType::Autodetect => Ok(match json_parser(raw) {
            Ok(value) => Content::Json(value),
            Err(_) => match xml::parse(raw) {
                Ok(value) => Content::Xml(value),
                Err(_) => Content::Raw(raw.to_string()),
            },
        }),
        ContentType::Raw => Ok(Content::Raw(raw.to_string())),
    }
}

fn json_parser(raw: &str) -> Result<Value> {
    serde_json::from_str(raw).map_err(|e| Error::Parse {
        kind: "json",
        message: e.to_string(),
    })
}
