//! `Accept-Language` resolution
//!
//! The header is split on `,` into language ranges. A range carrying a
//! `;q=` suffix takes its quality from it; anything else is worth 1.0.
//! The resulting list is ordered by quality, highest first.
//!
//! See the HTTP header fields specification
//! (<http://www.w3.org/Protocols/rfc2616/rfc2616-sec14.html#sec14.4>) for details.

use crate::config::NegotiationConfig;
use crate::header::header_str;
use crate::warn::WarnSink;
use http::header::{HeaderMap, ACCEPT_LANGUAGE};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Deref;

const QUALITY_SEPARATOR: &str = ";q=";

/// A single language range from the `Accept-Language` header
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AcceptLanguage {
    /// Language tag exactly as sent (e.g. `"en-US"`)
    pub language: String,
    /// Quality value (0.0 - 1.0)
    pub quality: f32,
}

impl AcceptLanguage {
    /// Create a language entry
    pub fn new(language: impl Into<String>, quality: f32) -> Self {
        Self {
            language: language.into(),
            quality,
        }
    }
}

/// Language ranges sorted by quality, most preferred first
///
/// Entries with equal quality keep the order they had in the header.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AcceptLanguages(Vec<AcceptLanguage>);

impl AcceptLanguages {
    /// Create an empty list
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// The most preferred language, if any
    pub fn preferred(&self) -> Option<&AcceptLanguage> {
        self.0.first()
    }

    /// Language tags in preference order
    pub fn languages(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|entry| entry.language.as_str())
    }

    /// Consume the list, returning the sorted entries
    pub fn into_vec(self) -> Vec<AcceptLanguage> {
        self.0
    }

    fn sort(&mut self) {
        // Vec::sort_by is stable
        self.0.sort_by(|a, b| {
            b.quality
                .partial_cmp(&a.quality)
                .unwrap_or(Ordering::Equal)
        });
    }
}

impl Deref for AcceptLanguages {
    type Target = [AcceptLanguage];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromIterator<AcceptLanguage> for AcceptLanguages {
    fn from_iter<I: IntoIterator<Item = AcceptLanguage>>(iter: I) -> Self {
        let mut languages = Self(iter.into_iter().collect());
        languages.sort();
        languages
    }
}

impl From<Vec<AcceptLanguage>> for AcceptLanguages {
    fn from(entries: Vec<AcceptLanguage>) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for AcceptLanguages {
    type Item = AcceptLanguage;
    type IntoIter = std::vec::IntoIter<AcceptLanguage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AcceptLanguages {
    type Item = &'a AcceptLanguage;
    type IntoIter = std::slice::Iter<'a, AcceptLanguage>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Renders as `"de (1.0), fr (0.9), en-US (0.8)"`
impl fmt::Display for AcceptLanguages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} ({:.1})", entry.language, entry.quality)?;
        }
        Ok(())
    }
}

/// Parse a raw `Accept-Language` value with the default configuration.
///
/// Numeric qualities are clamped to `[0, 1]`. A quality that is not a
/// number is reported to `sink` and replaced by 1.0. An empty header yields
/// an empty list.
///
/// # Example
///
/// ```rust
/// use conneg_core::{parse_accept_language, TracingWarnSink};
///
/// let languages = parse_accept_language("en-US;q=0.8,fr;q=0.9,de", &TracingWarnSink);
/// let tags: Vec<_> = languages.languages().collect();
/// assert_eq!(tags, ["de", "fr", "en-US"]);
/// ```
pub fn parse_accept_language(header: &str, sink: &dyn WarnSink) -> AcceptLanguages {
    parse_with_config(header, sink, &NegotiationConfig::default())
}

/// Resolve the accepted languages from the request headers
pub fn resolve_accept_language(headers: &HeaderMap, sink: &dyn WarnSink) -> AcceptLanguages {
    parse_accept_language(&header_str(headers, ACCEPT_LANGUAGE), sink)
}

pub(crate) fn parse_with_config(
    header: &str,
    sink: &dyn WarnSink,
    config: &NegotiationConfig,
) -> AcceptLanguages {
    if header.is_empty() {
        return AcceptLanguages::new();
    }

    header
        .split(',')
        .map(|range| {
            let range = if config.trim_language_tags {
                range.trim()
            } else {
                range
            };
            parse_range(range, sink, config)
        })
        .collect()
}

fn parse_range(range: &str, sink: &dyn WarnSink, config: &NegotiationConfig) -> AcceptLanguage {
    let parts: Vec<&str> = range.split(QUALITY_SEPARATOR).collect();
    let [language, quality] = parts[..] else {
        return AcceptLanguage::new(range, 1.0);
    };

    match parse_quality(quality) {
        Some(quality) => AcceptLanguage::new(language, quality),
        None => {
            if config.warn_on_malformed_quality {
                sink.warn(&format!(
                    "Detected malformed Accept-Language header quality in '{}', assuming quality is 1",
                    range
                ));
            }
            AcceptLanguage::new(language, 1.0)
        }
    }
}

fn parse_quality(raw: &str) -> Option<f32> {
    raw.parse::<f32>()
        .ok()
        .filter(|q| !q.is_nan())
        .map(|q| q.clamp(0.0, 1.0))
}
