//! Record formatting.

use crate::record::Record;

/// Formats a record into its text representation.
///
/// The handler runs the active formatter exactly once per record, after the
/// processor chain and before buffering.
pub trait Formatter: Send + Sync {
    /// Produce the text representation of a record.
    fn format(&self, record: &Record) -> String;
}

/// Single-line formatter: `[timestamp] channel.LEVEL: message {context}`.
///
/// The context is appended as compact JSON and omitted entirely when empty.
#[derive(Debug, Clone, Default)]
pub struct LineFormatter;

impl LineFormatter {
    /// Create a new line formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for LineFormatter {
    fn format(&self, record: &Record) -> String {
        let mut line = format!(
            "[{}] {}.{}: {}",
            record.timestamp.format("%Y-%m-%d %H:%M:%S%.6f"),
            record.channel,
            record.level_name(),
            record.message,
        );

        if !record.context.is_empty() {
            match serde_json::to_string(&record.context) {
                Ok(context) => {
                    line.push(' ');
                    line.push_str(&context);
                }
                Err(err) => {
                    tracing::debug!(error = %err, "failed to serialize record context");
                }
            }
        }

        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn test_format_without_context() {
        let record = Record::new(Level::Info, "started").with_channel("app");
        let line = LineFormatter::new().format(&record);

        assert!(line.contains("app.INFO: started"), "line: {line}");
        assert!(!line.contains('{'), "line: {line}");
    }

    #[test]
    fn test_format_with_context() {
        let record = Record::new(Level::Warning, "retrying")
            .with_channel("worker")
            .with_context("retries", 2)
            .with_context("target", "upstream");

        let line = LineFormatter::new().format(&record);
        assert!(line.contains("worker.WARNING: retrying"), "line: {line}");
        assert!(
            line.contains(r#"{"retries":2,"target":"upstream"}"#),
            "line: {line}"
        );
    }

    #[test]
    fn test_format_includes_timestamp() {
        let record = Record::new(Level::Debug, "tick");
        let line = LineFormatter::new().format(&record);
        assert!(line.starts_with('['), "line: {line}");
    }
}
