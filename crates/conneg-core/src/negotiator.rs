//! Configured entry point for all three resolvers

use crate::config::NegotiationConfig;
use crate::content_type::resolve_content_type;
use crate::context::RequestContext;
use crate::format::{resolve_format, Format};
use crate::header::header_str;
use crate::language::{parse_with_config, AcceptLanguages};
use crate::warn::{TracingWarnSink, WarnSink};
use http::header::{HeaderMap, ACCEPT_LANGUAGE};
use std::fmt;
use std::sync::Arc;

/// Resolves negotiation results with a fixed configuration and warning sink
///
/// Cheap to clone; clones share the sink.
///
/// # Example
///
/// ```rust
/// use conneg_core::{NegotiationConfig, Negotiator};
/// use http::{header::ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
///
/// let negotiator = Negotiator::new(NegotiationConfig::default().trim_language_tags(true));
///
/// let mut headers = HeaderMap::new();
/// headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en;q=0.5, fr"));
/// let tags: Vec<_> = negotiator.accept_languages(&headers).languages().map(String::from).collect();
/// assert_eq!(tags, ["fr", "en"]);
/// ```
#[derive(Clone)]
pub struct Negotiator {
    config: NegotiationConfig,
    sink: Arc<dyn WarnSink>,
}

impl Negotiator {
    /// Create a negotiator that reports warnings through `tracing`
    pub fn new(config: NegotiationConfig) -> Self {
        Self::with_sink(config, TracingWarnSink)
    }

    /// Create a negotiator with a custom warning sink
    pub fn with_sink(config: NegotiationConfig, sink: impl WarnSink + 'static) -> Self {
        Self {
            config,
            sink: Arc::new(sink),
        }
    }

    /// Create a negotiator sharing an existing sink
    pub fn with_shared_sink(config: NegotiationConfig, sink: Arc<dyn WarnSink>) -> Self {
        Self { config, sink }
    }

    /// The active configuration
    pub fn config(&self) -> &NegotiationConfig {
        &self.config
    }

    /// Normalized request content type
    pub fn content_type(&self, headers: &HeaderMap) -> String {
        resolve_content_type(headers)
    }

    /// Preferred response format
    pub fn format(&self, headers: &HeaderMap) -> Format {
        resolve_format(headers)
    }

    /// Accepted languages, most preferred first
    pub fn accept_languages(&self, headers: &HeaderMap) -> AcceptLanguages {
        parse_with_config(
            &header_str(headers, ACCEPT_LANGUAGE),
            self.sink.as_ref(),
            &self.config,
        )
    }

    /// Run all three resolvers and snapshot the results
    pub fn context(&self, headers: &HeaderMap) -> RequestContext {
        RequestContext::new(
            self.content_type(headers),
            self.format(headers),
            self.accept_languages(headers),
        )
    }
}

impl Default for Negotiator {
    fn default() -> Self {
        Self::new(NegotiationConfig::default())
    }
}

impl fmt::Debug for Negotiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Negotiator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
