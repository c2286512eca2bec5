//! Tower middleware that negotiates once per request
//!
//! [`NegotiationLayer`] resolves a [`RequestContext`](crate::RequestContext) from each request's
//! headers before the inner service runs and stores it in the request
//! extensions.
//!
//! # Example
//!
//! ```rust,ignore
//! use conneg_core::{NegotiationLayer, RequestContext};
//! use tower::ServiceBuilder;
//!
//! let service = ServiceBuilder::new()
//!     .layer(NegotiationLayer::new())
//!     .service_fn(|req: http::Request<Body>| async move {
//!         let ctx = req.extensions().get::<RequestContext>().unwrap();
//!         render(ctx.format(), ctx.accept_languages())
//!     });
//! ```

use crate::negotiator::Negotiator;
use http::Request;
use std::task::{Context, Poll};
use tower::Layer;
use tower_service::Service;

/// Layer producing [`NegotiationService`]
#[derive(Debug, Clone, Default)]
pub struct NegotiationLayer {
    negotiator: Negotiator,
}

impl NegotiationLayer {
    /// Negotiate with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Negotiate with a configured [`Negotiator`]
    pub fn with_negotiator(negotiator: Negotiator) -> Self {
        Self { negotiator }
    }
}

impl<S> Layer<S> for NegotiationLayer {
    type Service = NegotiationService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        NegotiationService {
            inner,
            negotiator: self.negotiator.clone(),
        }
    }
}

/// Service inserting a [`RequestContext`](crate::RequestContext) into every request
#[derive(Debug, Clone)]
pub struct NegotiationService<S> {
    inner: S,
    negotiator: Negotiator,
}

impl<S, B> Service<Request<B>> for NegotiationService<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: Request<B>) -> Self::Future {
        let ctx = self.negotiator.context(req.headers());

        tracing::debug!(
            method = %req.method(),
            uri = %req.uri(),
            content_type = %ctx.content_type(),
            format = %ctx.format(),
            accept_languages = %ctx.accept_languages(),
            "Negotiated request"
        );

        req.extensions_mut().insert(ctx);
        self.inner.call(req)
    }
}
