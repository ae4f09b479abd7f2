//! Instrumentation for collecting model events into row-oriented storage.
//!
//! Uses the `tracing` crate with a custom subscriber that builds rows from
//! event fields. Schema emerges from recorded events.
//!
//! # Usage
//!
//! ```ignore
//! // In model code:
//! tracing::info!(target: "placement", op = "insert", placement_id, object_id);
//!
//! // In test:
//! let journal = instrument::capture(|| {
//!     // ... mutate the world ...
//! });
//! let inserts = journal.rows("placement");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use tracing::field::{Field, Visit};
use tracing::span::{Attributes, Record};
use tracing::{Event, Id, Metadata, Subscriber};

/// A single typed field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    U64(u64),
    I64(i64),
    F64(f64),
    Bool(bool),
    Str(String),
}

/// One recorded event: field names paired with values, in record order.
#[derive(Debug, Clone, Default)]
pub struct Row {
    pub fields: Vec<(String, Value)>,
}

impl Row {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn u64(&self, name: &str) -> Option<u64> {
        match self.get(name)? {
            Value::U64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn i64(&self, name: &str) -> Option<i64> {
        match self.get(name)? {
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        match self.get(name)? {
            Value::Str(v) => Some(v.as_str()),
            _ => None,
        }
    }
}

/// Collection of recorded rows, keyed by tracing target.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    pub tables: HashMap<String, Vec<Row>>,
}

impl Journal {
    /// Rows recorded under `target`, in emission order.
    pub fn rows(&self, target: &str) -> &[Row] {
        self.tables.get(target).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.tables.values().all(Vec::is_empty)
    }
}

thread_local! {
    static JOURNAL: RefCell<Journal> = RefCell::default();
}

/// Visitor that extracts event fields into a row.
struct RowVisitor {
    row: Row,
}

impl Visit for RowVisitor {
    fn record_u64(&mut self, field: &Field, value: u64) {
        self.row
            .fields
            .push((field.name().to_string(), Value::U64(value)));
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.row
            .fields
            .push((field.name().to_string(), Value::I64(value)));
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        self.row
            .fields
            .push((field.name().to_string(), Value::F64(value)));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.row
            .fields
            .push((field.name().to_string(), Value::Bool(value)));
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.row
            .fields
            .push((field.name().to_string(), Value::Str(value.to_string())));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        // Convert debug values to strings
        self.record_str(field, &format!("{:?}", value));
    }
}

/// Tracing subscriber that collects events into the thread-local journal.
pub struct JournalSubscriber;

impl Subscriber for JournalSubscriber {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        // Only collect info-level events (not spans, not debug/trace)
        metadata.is_event() && *metadata.level() <= tracing::Level::INFO
    }

    fn new_span(&self, _span: &Attributes<'_>) -> Id {
        // We don't track spans, just return a dummy ID
        Id::from_u64(1)
    }

    fn record(&self, _span: &Id, _values: &Record<'_>) {
        // No-op for spans
    }

    fn record_follows_from(&self, _span: &Id, _follows: &Id) {
        // No-op
    }

    fn event(&self, event: &Event<'_>) {
        let target = event.metadata().target().to_string();

        // Build the row before borrowing the journal so a re-entrant event
        // cannot hit an outstanding borrow
        let mut visitor = RowVisitor { row: Row::default() };
        event.record(&mut visitor);

        JOURNAL.with(|j| {
            j.borrow_mut()
                .tables
                .entry(target)
                .or_default()
                .push(visitor.row);
        });
    }

    fn enter(&self, _span: &Id) {
        // No-op
    }

    fn exit(&self, _span: &Id) {
        // No-op
    }
}

/// Install the JournalSubscriber as the global default.
/// Call this once at the start of a test.
pub fn install_subscriber() {
    let _ = tracing::subscriber::set_global_default(JournalSubscriber);
}

/// Drain all recorded rows from the thread-local journal.
pub fn drain() -> Journal {
    JOURNAL.with(|j| std::mem::take(&mut *j.borrow_mut()))
}

/// Clear all recorded rows without returning them.
pub fn clear() {
    JOURNAL.with(|j| *j.borrow_mut() = Journal::default());
}

/// Run `f` with the journal subscriber scoped to the current thread and
/// return everything it recorded.
pub fn capture<F: FnOnce()>(f: F) -> Journal {
    clear();
    tracing::subscriber::with_default(JournalSubscriber, f);
    drain()
}
