//! Request `Content-Type` resolution

use crate::header::header_str;
use http::header::{HeaderMap, CONTENT_TYPE};

/// Content type assumed when the request does not declare one
pub const DEFAULT_CONTENT_TYPE: &str = "text/html";

/// Normalize a raw `Content-Type` value to a bare MIME type.
///
/// Parameters after the first `;` are dropped and the rest is trimmed and
/// lower-cased. An empty value resolves to [`DEFAULT_CONTENT_TYPE`].
///
/// # Example
///
/// ```rust
/// use conneg_core::normalize_content_type;
///
/// assert_eq!(normalize_content_type("Multipart/Form-Data; boundary=--"), "multipart/form-data");
/// assert_eq!(normalize_content_type(""), "text/html");
/// ```
pub fn normalize_content_type(raw: &str) -> String {
    if raw.is_empty() {
        return DEFAULT_CONTENT_TYPE.to_string();
    }
    let mime = raw.split(';').next().unwrap_or_default();
    mime.trim().to_lowercase()
}

/// Resolve the request content type from its headers
pub fn resolve_content_type(headers: &HeaderMap) -> String {
    normalize_content_type(&header_str(headers, CONTENT_TYPE))
}
