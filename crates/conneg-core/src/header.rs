//! Header lookup shared by the resolvers

use http::header::{AsHeaderName, HeaderMap};
use std::borrow::Cow;

/// Returns the first value of `name`, or `""` when the header is absent.
///
/// Bytes outside visible ASCII are decoded lossily instead of being dropped.
pub(crate) fn header_str<K: AsHeaderName>(headers: &HeaderMap, name: K) -> Cow<'_, str> {
    match headers.get(name) {
        Some(value) => match value.to_str() {
            Ok(s) => Cow::Borrowed(s),
            Err(_) => String::from_utf8_lossy(value.as_bytes()),
        },
        None => Cow::Borrowed(""),
    }
}
