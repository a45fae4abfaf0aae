//! In-memory log collector.
//!
//! [`LogCollector`] is a `tracing` layer that keeps the most recent events,
//! structured fields included, in a bounded ring. [`LogReader`] hands out
//! snapshots, which is how the terminal keypad shows evaluation logs next to
//! the display without writing to the terminal it is drawing on.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;

/// A single captured log entry.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Seconds since the collector was created.
    pub elapsed_secs: f64,
    pub level: Level,
    /// Target module path.
    pub target: String,
    pub message: String,
    /// Structured fields other than `message`, in recording order.
    pub fields: Vec<(String, String)>,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)?;
        for (name, value) in &self.fields {
            write!(f, " {name}={value}")?;
        }
        Ok(())
    }
}

#[derive(Debug)]
struct Ring {
    entries: VecDeque<LogEntry>,
    capacity: usize,
    started: Instant,
}

impl Ring {
    fn push(&mut self, entry: LogEntry) {
        while self.entries.len() >= self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }
}

/// A `tracing` layer that captures events into a shared ring buffer.
#[derive(Debug, Clone)]
pub struct LogCollector {
    ring: Arc<Mutex<Ring>>,
}

impl LogCollector {
    /// Create a collector keeping at most `capacity` entries (minimum one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            ring: Arc::new(Mutex::new(Ring {
                entries: VecDeque::with_capacity(capacity),
                capacity,
                started: Instant::now(),
            })),
        }
    }

    /// Get a reader handle for the captured entries.
    pub fn reader(&self) -> LogReader {
        LogReader {
            ring: Arc::clone(&self.ring),
        }
    }
}

impl<S: Subscriber> Layer<S> for LogCollector {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        if let Ok(mut ring) = self.ring.lock() {
            let entry = LogEntry {
                elapsed_secs: ring.started.elapsed().as_secs_f64(),
                level: *metadata.level(),
                target: metadata.target().to_string(),
                message: visitor.message,
                fields: visitor.fields,
            };
            ring.push(entry);
        }
    }
}

/// A read handle for the collector's ring buffer.
#[derive(Debug, Clone)]
pub struct LogReader {
    ring: Arc<Mutex<Ring>>,
}

impl LogReader {
    /// Snapshot of all captured entries, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.ring
            .lock()
            .map(|ring| ring.entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.ring.lock().map(|ring| ring.entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: String,
    fields: Vec<(String, String)>,
}

impl FieldVisitor {
    fn record(&mut self, field: &Field, value: String) {
        if field.name() == "message" {
            self.message = value;
        } else {
            self.fields.push((field.name().to_string(), value));
        }
    }
}

impl Visit for FieldVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record(field, format!("{value:?}"));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.record(field, value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    #[test]
    fn test_captures_level_and_message() {
        let collector = LogCollector::new(100);
        let reader = collector.reader();
        let _guard = tracing_subscriber::registry().with(collector).set_default();

        tracing::info!("hello from test");
        tracing::warn!("a warning");

        let entries = reader.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::INFO);
        assert_eq!(entries[0].message, "hello from test");
        assert_eq!(entries[1].level, Level::WARN);
    }

    #[test]
    fn test_captures_structured_fields() {
        let collector = LogCollector::new(10);
        let reader = collector.reader();
        let _guard = tracing_subscriber::registry().with(collector).set_default();

        tracing::debug!(operator = %'+', count = 2, "reduced");

        let entry = &reader.entries()[0];
        assert_eq!(
            entry.fields,
            vec![
                ("operator".to_string(), "+".to_string()),
                ("count".to_string(), "2".to_string()),
            ]
        );
        assert_eq!(entry.to_string(), "reduced operator=+ count=2");
    }

    #[test]
    fn test_ring_evicts_oldest() {
        let collector = LogCollector::new(3);
        let reader = collector.reader();
        let _guard = tracing_subscriber::registry().with(collector).set_default();

        for word in ["one", "two", "three", "four"] {
            tracing::info!("{word}");
        }

        let entries = reader.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "two");
        assert_eq!(entries[2].message, "four");
    }

    #[test]
    fn test_zero_capacity_keeps_one() {
        let collector = LogCollector::new(0);
        let reader = collector.reader();
        let _guard = tracing_subscriber::registry().with(collector).set_default();

        tracing::info!("first");
        tracing::info!("second");

        assert_eq!(reader.len(), 1);
        assert_eq!(reader.entries()[0].message, "second");
    }

    #[test]
    fn test_reader_starts_empty() {
        let reader = LogCollector::new(10).reader();
        assert!(reader.is_empty());
        assert_eq!(reader.len(), 0);
    }
}
