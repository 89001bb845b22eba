//! The log record passed through processors, formatting and buffering.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde_json::Value;

use crate::level::Level;

/// Insertion-ordered context attached to a record.
pub type Context = IndexMap<String, Value>;

/// A single structured log event.
///
/// Records are created by a [`Logger`](crate::logger::Logger) (or directly in
/// tests), enriched by the processor chain, formatted exactly once by the
/// handler's formatter, and then buffered. `formatted` is `Some` if and only
/// if the record passed the severity gate and was processed.
#[derive(Debug, Clone)]
pub struct Record {
    /// Severity tier.
    pub level: Level,
    /// Name of the logger that produced the record.
    pub channel: String,
    /// Log message text.
    pub message: String,
    /// Additional key/value context, in insertion order.
    pub context: Context,
    /// Instant the record was created.
    pub timestamp: DateTime<Utc>,
    /// Formatted representation, populated by the handler's formatter.
    pub formatted: Option<String>,
}

impl Record {
    /// Create a new record stamped with the current time.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            channel: String::new(),
            message: message.into(),
            context: Context::new(),
            timestamp: Utc::now(),
            formatted: None,
        }
    }

    /// Set the originating channel name.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Add a context entry.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// The human-readable tier label for this record's level.
    pub fn level_name(&self) -> &'static str {
        self.level.name()
    }
}
