//! Log severity tiers.
//!
//! Levels follow the classic syslog-derived table: higher values are more
//! severe. The numeric values leave gaps so custom tiers can be compared
//! against the standard ones.

use std::fmt;

/// Severity of a log record.
///
/// Ordering is by numeric value, so `Level::Error > Level::Warning` holds
/// and threshold checks can use plain comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i32)]
pub enum Level {
    /// Detailed debug information.
    Debug = 100,
    /// Interesting events.
    Info = 200,
    /// Normal but significant events.
    Notice = 250,
    /// Exceptional occurrences that are not errors.
    Warning = 300,
    /// Runtime errors that do not require immediate action.
    Error = 400,
    /// Critical conditions.
    Critical = 500,
    /// Action must be taken immediately.
    Alert = 550,
    /// System is unusable.
    Emergency = 600,
}

impl Level {
    /// The numeric severity value.
    pub fn value(self) -> i32 {
        self as i32
    }

    /// The human-readable tier label.
    pub fn name(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Alert => "ALERT",
            Level::Emergency => "EMERGENCY",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_order_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Notice);
        assert!(Level::Notice < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
        assert!(Level::Critical < Level::Alert);
        assert!(Level::Alert < Level::Emergency);
    }

    #[test]
    fn test_level_values() {
        assert_eq!(Level::Debug.value(), 100);
        assert_eq!(Level::Info.value(), 200);
        assert_eq!(Level::Warning.value(), 300);
        assert_eq!(Level::Error.value(), 400);
        assert_eq!(Level::Emergency.value(), 600);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(Level::Warning.name(), "WARNING");
        assert_eq!(Level::Error.to_string(), "ERROR");
    }
}
