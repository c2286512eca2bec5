//! # conneg-core
//!
//! HTTP content negotiation for request wrappers.
//!
//! Three stateless resolvers read an inbound request's headers:
//!
//! - [`resolve_content_type`] normalizes `Content-Type` (`text/html` when absent)
//! - [`resolve_format`] classifies `Accept` into a [`Format`]
//! - [`resolve_accept_language`] ranks `Accept-Language` by quality
//!
//! [`RequestContext`] runs all three once per request and keeps the results.
//!
//! # Example
//!
//! ```rust
//! use conneg_core::{Format, RequestContext};
//! use http::Request;
//!
//! let req = Request::builder()
//!     .header("Content-Type", "Application/JSON; charset=utf-8")
//!     .header("Accept", "application/json")
//!     .header("Accept-Language", "en-US;q=0.8,fr;q=0.9,de")
//!     .body(())
//!     .unwrap();
//!
//! let ctx = RequestContext::from_request(&req);
//! assert_eq!(ctx.content_type(), "application/json");
//! assert_eq!(ctx.format(), Format::Json);
//! assert_eq!(ctx.accept_languages().to_string(), "de (1.0), fr (0.9), en-US (0.8)");
//! ```

mod config;
mod content_type;
mod context;
mod error;
mod format;
mod header;
mod language;
pub mod middleware;
mod negotiator;
mod warn;

// Public API
pub use config::{load_dotenv, load_dotenv_from, NegotiationConfig, ENV_PREFIX};
pub use content_type::{normalize_content_type, resolve_content_type, DEFAULT_CONTENT_TYPE};
pub use context::{RequestContext, ResponseContext};
pub use error::{ConfigError, Result};
pub use format::{classify_accept, resolve_format, Format};
pub use language::{parse_accept_language, resolve_accept_language, AcceptLanguage, AcceptLanguages};
pub use middleware::{NegotiationLayer, NegotiationService};
pub use negotiator::Negotiator;
pub use warn::{TracingWarnSink, WarnSink};
