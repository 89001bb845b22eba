//! Record dispatch: the handler contract and a named logger.

use std::sync::Arc;

use chrono::Utc;

use crate::level::Level;
use crate::record::{Context, Record};

/// A component that receives records meeting a severity threshold and
/// performs a side effect.
pub trait Handler: Send + Sync {
    /// Whether this handler wants the record at all.
    fn is_handling(&self, record: &Record) -> bool;

    /// Process a single record.
    ///
    /// Returns `true` when this handler is terminal for the record, i.e.
    /// lower-priority handlers in the stack should not see it.
    fn handle(&self, record: Record) -> bool;

    /// Process a sequence of records in order.
    fn handle_batch(&self, records: Vec<Record>) {
        for record in records {
            self.handle(record);
        }
    }
}

/// A named logger dispatching records through an ordered handler stack.
///
/// Handlers are consulted in push order; a handler whose `handle` returns
/// `true` stops the dispatch (its bubble flag is off).
#[derive(Clone)]
pub struct Logger {
    name: String,
    handlers: Vec<Arc<dyn Handler>>,
}

impl Logger {
    /// Create a logger with the given channel name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: Vec::new(),
        }
    }

    /// The channel name stamped onto dispatched records.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add a handler to the end of the stack.
    pub fn push_handler(&mut self, handler: Arc<dyn Handler>) {
        self.handlers.push(handler);
    }

    /// Dispatch a record at the given level with context.
    pub fn log(&self, level: Level, message: impl Into<String>, context: Context) {
        let record = Record {
            level,
            channel: self.name.clone(),
            message: message.into(),
            context,
            timestamp: Utc::now(),
            formatted: None,
        };

        for handler in &self.handlers {
            if !handler.is_handling(&record) {
                continue;
            }
            if handler.handle(record.clone()) {
                break;
            }
        }
    }

    /// Log a DEBUG message.
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message, Context::new());
    }

    /// Log an INFO message.
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message, Context::new());
    }

    /// Log a WARNING message.
    pub fn warning(&self, message: impl Into<String>) {
        self.log(Level::Warning, message, Context::new());
    }

    /// Log an ERROR message.
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message, Context::new());
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
