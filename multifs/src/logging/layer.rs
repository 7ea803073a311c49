//! Bridge from `tracing` events to the [`Logger`].

use std::fmt::{self, Write as _};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::level::LogLevel;
use super::logger::Logger;

/// A `tracing_subscriber` layer that writes events through a [`Logger`].
///
/// Events are mapped onto log levels (`TRACE`/`DEBUG` → Debug, `INFO` → Info,
/// `WARN`/`ERROR` → Msg) and gated by the logger's minimum level. The event's
/// message comes first, followed by its other fields as `key=value`.
#[derive(Debug, Clone)]
pub struct LogLayer {
    logger: Arc<Logger>,
}

impl LogLayer {
    pub fn new(logger: Arc<Logger>) -> Self {
        Self { logger }
    }
}

impl<S: Subscriber> Layer<S> for LogLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let level = LogLevel::from(event.metadata().level());
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);
        self.logger
            .log(level, format_args!("{}{}", visitor.message, visitor.fields));
    }
}

#[derive(Default)]
struct EventVisitor {
    message: String,
    fields: String,
}

impl Visit for EventVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            let _ = write!(self.fields, " {}={}", field.name(), value);
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}
