//! Response format resolution from the `Accept` header
//!
//! Classification runs an ordered rule table against the raw header text.
//! The first rule whose predicate matches wins. Quality values and wildcards
//! inside `Accept` are deliberately not parsed, so a media type mentioned
//! anywhere in the header counts, even at `q=0`.

use crate::header::header_str;
use http::header::{HeaderMap, ACCEPT};
use serde::Serialize;
use std::fmt;

/// Response serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// HTML (default)
    #[default]
    Html,
    /// XML
    Xml,
    /// Plain text
    Txt,
    /// JSON
    Json,
}

impl Format {
    /// All formats, in rule priority order
    pub const ALL: [Format; 4] = [Format::Html, Format::Xml, Format::Txt, Format::Json];

    /// The format literal (`"html"`, `"xml"`, `"txt"` or `"json"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Xml => "xml",
            Format::Txt => "txt",
            Format::Json => "json",
        }
    }

    /// The response content type a serializer for this format emits
    pub fn content_type(&self) -> &'static str {
        match self {
            Format::Html => "text/html",
            Format::Xml => "application/xml",
            Format::Txt => "text/plain",
            Format::Json => "application/json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Rule = (fn(&str) -> bool, Format);

const RULES: &[Rule] = &[
    (wants_html, Format::Html),
    (wants_xml, Format::Xml),
    (wants_txt, Format::Txt),
    (wants_json, Format::Json),
];

fn wants_html(accept: &str) -> bool {
    accept.is_empty()
        || accept.starts_with("*/*")
        || accept.contains("application/xhtml")
        || accept.contains("text/html")
}

fn wants_xml(accept: &str) -> bool {
    accept.contains("application/xml") || accept.contains("text/xml")
}

fn wants_txt(accept: &str) -> bool {
    accept.contains("text/plain")
}

fn wants_json(accept: &str) -> bool {
    accept.contains("application/json") || accept.contains("text/javascript")
}

/// Classify a raw `Accept` value into a [`Format`].
///
/// Falls back to [`Format::Html`] when no rule matches.
///
/// # Example
///
/// ```rust
/// use conneg_core::{classify_accept, Format};
///
/// assert_eq!(classify_accept("application/json"), Format::Json);
/// assert_eq!(classify_accept("*/*"), Format::Html);
/// ```
pub fn classify_accept(accept: &str) -> Format {
    RULES
        .iter()
        .find(|(matches, _)| matches(accept))
        .map(|(_, format)| *format)
        .unwrap_or_default()
}

/// Resolve the response format from the request headers
pub fn resolve_format(headers: &HeaderMap) -> Format {
    classify_accept(&header_str(headers, ACCEPT))
}
