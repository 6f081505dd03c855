//! Captures tracing events so tests can assert on what was logged

use std::fmt::Write as _;
use std::sync::{Arc, Mutex};
use tracing::field::{Field, Visit};
use tracing::Level;

/// One captured event, fields flattened as `message key=value ...`
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    pub text: String,
}

/// Layer recording every event it sees
#[derive(Clone, Default)]
pub struct LogCapture {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl LogCapture {
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().unwrap().clone()
    }

    /// Assert some event at `level` contains `pattern`
    pub fn assert_logged(&self, level: Level, pattern: &str) {
        let records = self.records();
        assert!(
            records
                .iter()
                .any(|r| r.level == level && r.text.contains(pattern)),
            "Expected {} log containing '{}'. All logs:\n{}",
            level,
            pattern,
            records
                .iter()
                .map(|r| format!("{} {}", r.level, r.text))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}

struct FieldVisitor {
    message: String,
    fields: String,
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            let _ = write!(self.fields, " {}={:?}", field.name(), value);
        }
    }
}

impl<S> tracing_subscriber::Layer<S> for LogCapture
where
    S: tracing::Subscriber,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor {
            message: String::new(),
            fields: String::new(),
        };
        event.record(&mut visitor);

        self.records.lock().unwrap().push(LogRecord {
            level: *event.metadata().level(),
            text: format!("{}{}", visitor.message, visitor.fields),
        });
    }
}
