//! Warning sink used for recoverable negotiation problems
//!
//! Resolvers never fail. When they have to substitute a default for
//! something the client sent, they report it through a [`WarnSink`].

use std::sync::Arc;

/// Receiver for negotiation warnings
///
/// Implementations must be safe to call from many requests at once.
pub trait WarnSink: Send + Sync {
    /// Record a warning message
    fn warn(&self, message: &str);
}

/// Default sink: forwards every warning to `tracing` at WARN level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingWarnSink;

impl WarnSink for TracingWarnSink {
    fn warn(&self, message: &str) {
        tracing::warn!(target: "conneg", "{}", message);
    }
}

impl<T: WarnSink + ?Sized> WarnSink for Arc<T> {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

impl<T: WarnSink + ?Sized> WarnSink for &T {
    fn warn(&self, message: &str) {
        (**self).warn(message)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::WarnSink;
    use std::sync::Mutex;

    /// Sink that keeps every warning for later assertions
    #[derive(Debug, Default)]
    pub(crate) struct RecordingSink {
        messages: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        pub(crate) fn messages(&self) -> Vec<String> {
            self.messages.lock().unwrap().clone()
        }
    }

    impl WarnSink for RecordingSink {
        fn warn(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;
    use std::sync::Mutex;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_arc_sink_forwards() {
        let sink = Arc::new(RecordingSink::default());
        let shared: Arc<dyn WarnSink> = sink.clone();
        shared.warn("first");
        (&*shared).warn("second");
        assert_eq!(sink.messages(), ["first", "second"]);
    }

    #[derive(Clone, Default)]
    struct EventCapture {
        events: Arc<Mutex<Vec<(tracing::Level, String)>>>,
    }

    struct MessageVisitor<'a>(&'a mut String);

    impl tracing::field::Visit for MessageVisitor<'_> {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                *self.0 = format!("{:?}", value);
            }
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
        fn on_event(
            &self,
            event: &tracing::Event<'_>,
            _ctx: tracing_subscriber::layer::Context<'_, S>,
        ) {
            let mut message = String::new();
            event.record(&mut MessageVisitor(&mut message));
            self.events
                .lock()
                .unwrap()
                .push((*event.metadata().level(), message));
        }
    }

    #[test]
    fn test_tracing_sink_emits_warn_event() {
        let capture = EventCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            TracingWarnSink.warn("quality is bogus");
        });

        let events = capture.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].0, tracing::Level::WARN);
        assert_eq!(events[0].1, "quality is bogus");
    }
}
