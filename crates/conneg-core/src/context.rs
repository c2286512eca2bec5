//! Per-request negotiation snapshot and the matching response settings

use crate::format::Format;
use crate::language::AcceptLanguages;
use crate::negotiator::Negotiator;
use http::request::Parts;
use http::{HeaderMap, Request, StatusCode};
use serde::Serialize;

/// Negotiation results for one request
///
/// Built once from the request headers and never changed afterwards. The
/// locale is chosen by a localization layer and attached with
/// [`with_locale`](Self::with_locale), which produces a new snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestContext {
    content_type: String,
    format: Format,
    accept_languages: AcceptLanguages,
    locale: Option<String>,
}

impl RequestContext {
    pub(crate) fn new(
        content_type: String,
        format: Format,
        accept_languages: AcceptLanguages,
    ) -> Self {
        Self {
            content_type,
            format,
            accept_languages,
            locale: None,
        }
    }

    /// Resolve from a header map with the default [`Negotiator`]
    pub fn from_headers(headers: &HeaderMap) -> Self {
        Negotiator::default().context(headers)
    }

    /// Resolve from a full request with the default [`Negotiator`]
    pub fn from_request<B>(req: &Request<B>) -> Self {
        Self::from_headers(req.headers())
    }

    /// Resolve from request parts with the default [`Negotiator`]
    pub fn from_parts(parts: &Parts) -> Self {
        Self::from_headers(&parts.headers)
    }

    /// Normalized request content type (e.g. `"multipart/form-data"`)
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Preferred response format
    pub fn format(&self) -> Format {
        self.format
    }

    /// Accepted languages, most preferred first
    pub fn accept_languages(&self) -> &AcceptLanguages {
        &self.accept_languages
    }

    /// Locale picked by the localization layer, if any
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Snapshot with the given locale attached
    pub fn with_locale(self, locale: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            ..self
        }
    }

    /// Response settings following the negotiated format
    pub fn response(&self) -> ResponseContext {
        ResponseContext::for_format(self.format)
    }
}

/// Status and content type a response will be written with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseContext {
    /// HTTP status code
    pub status: StatusCode,
    /// Response `Content-Type`
    pub content_type: String,
}

impl ResponseContext {
    /// `200 OK` with the content type serializers for `format` emit
    pub fn for_format(format: Format) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: format.content_type().to_string(),
        }
    }

    /// Builder: set the status code
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Builder: set the content type
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }
}

impl Default for ResponseContext {
    fn default() -> Self {
        Self::for_format(Format::default())
    }
}
