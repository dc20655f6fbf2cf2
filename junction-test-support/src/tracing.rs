//! Recording layer for asserting spans and events in tests.

use std::{
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
    span::{Attributes, Id, Record},
};
use tracing_subscriber::{Layer, layer::Context, registry::LookupSpan};

/// Field values keyed by field name, rendered as strings.
pub type Fields = HashMap<String, String>;

/// Captures closed spans and emitted events for later assertions.
///
/// Clones share storage, so a test keeps one handle and installs another in
/// the subscriber.
///
/// # Examples
/// ```
/// use junction_test_support::tracing::RecordingLayer;
/// use tracing_subscriber::layer::SubscriberExt;
///
/// let layer = RecordingLayer::default();
/// let subscriber = tracing_subscriber::registry().with(layer.clone());
/// tracing::subscriber::with_default(subscriber, || {
///     let _span = tracing::info_span!("demo.work", items = 3).entered();
///     tracing::info!(outcome = "ok", "finished");
/// });
///
/// let span = layer.span("demo.work").expect("span recorded");
/// assert_eq!(span.field("items"), Some("3"));
/// assert_eq!(layer.events().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingLayer {
    recorded: Arc<Mutex<Recorded>>,
}

#[derive(Default)]
struct Recorded {
    spans: Vec<SpanRecord>,
    events: Vec<EventRecord>,
}

impl RecordingLayer {
    /// Returns the closed spans in completion order.
    #[must_use]
    pub fn spans(&self) -> Vec<SpanRecord> {
        self.lock().spans.clone()
    }

    /// Returns the first closed span called `name`.
    #[must_use]
    pub fn span(&self, name: &str) -> Option<SpanRecord> {
        self.lock()
            .spans
            .iter()
            .find(|span| span.name == name)
            .cloned()
    }

    /// Returns the emitted events in emission order.
    #[must_use]
    pub fn events(&self) -> Vec<EventRecord> {
        self.lock().events.clone()
    }

    /// Returns the events emitted at `level`.
    #[must_use]
    pub fn events_at(&self, level: Level) -> Vec<EventRecord> {
        self.lock()
            .events
            .iter()
            .filter(|event| event.level == level)
            .cloned()
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        // A panicking test thread must not hide what it recorded.
        self.recorded.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A closed span with its name and recorded fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanRecord {
    /// Span name from the metadata.
    pub name: String,
    /// Fields recorded at creation or later via `Span::record`.
    pub fields: Fields,
}

impl SpanRecord {
    /// Returns the rendered value of `name`, if recorded.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// An emitted event with its level, target, and fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    /// Event level.
    pub level: Level,
    /// Event target, usually the emitting module path.
    pub target: String,
    /// Structured fields, including `message`.
    pub fields: Fields,
}

impl EventRecord {
    /// Returns the rendered value of `name`, if recorded.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// Returns the event message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.field("message")
    }
}

struct PendingSpan {
    name: &'static str,
    fields: Fields,
}

impl<S> Layer<S> for RecordingLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        let mut pending = PendingSpan {
            name: attrs.metadata().name(),
            fields: Fields::new(),
        };
        attrs.record(&mut FieldRecorder(&mut pending.fields));
        span.extensions_mut().insert(pending);
    }

    fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
        let Some(span) = ctx.span(id) else {
            return;
        };
        if let Some(pending) = span.extensions_mut().get_mut::<PendingSpan>() {
            values.record(&mut FieldRecorder(&mut pending.fields));
        }
    }

    fn on_close(&self, id: Id, ctx: Context<'_, S>) {
        let Some(pending) = ctx
            .span(&id)
            .and_then(|span| span.extensions_mut().remove::<PendingSpan>())
        else {
            return;
        };
        self.lock().spans.push(SpanRecord {
            name: pending.name.to_owned(),
            fields: pending.fields,
        });
    }

    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = Fields::new();
        event.record(&mut FieldRecorder(&mut fields));
        let metadata = event.metadata();
        self.lock().events.push(EventRecord {
            level: *metadata.level(),
            target: metadata.target().to_owned(),
            fields,
        });
    }
}

struct FieldRecorder<'a>(&'a mut Fields);

impl FieldRecorder<'_> {
    fn put(&mut self, field: &Field, value: String) {
        self.0.insert(field.name().to_owned(), value);
    }
}

impl Visit for FieldRecorder<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.put(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.put(field, value.to_owned());
    }

    fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
        self.put(field, value.to_string());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.put(field, value.to_string());
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.put(field, value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.put(field, value.to_string());
    }
}
