//! Request-start clock resolution.

use chrono::{DateTime, Utc};

/// Server metadata key carrying the high-resolution request-received time,
/// as a fractional unix timestamp.
pub const REQUEST_TIME_FLOAT: &str = "REQUEST_TIME_FLOAT";

/// Resolves the authoritative "request start" instant.
///
/// The clock starts from wall-clock time at construction. The "before handle"
/// hook may overwrite it exactly once with a more precise value taken from
/// request metadata; after that first resolution the instant is fixed for the
/// remainder of the request, whether or not the candidate parsed.
#[derive(Debug, Clone)]
pub struct RequestClock {
    start: DateTime<Utc>,
    resolved: bool,
}

impl RequestClock {
    /// Create a clock holding the current wall-clock time.
    pub fn new() -> Self {
        Self::starting_at(Utc::now())
    }

    /// Create a clock holding an explicit start instant.
    pub fn starting_at(start: DateTime<Utc>) -> Self {
        Self {
            start,
            resolved: false,
        }
    }

    /// The request-start instant.
    pub fn request_start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Resolve the clock against a candidate fractional-seconds timestamp.
    ///
    /// A valid candidate replaces the construction-time instant; a malformed
    /// or absent one leaves it standing. Only the first call has any effect.
    pub fn resolve(&mut self, candidate: Option<&str>) {
        if self.resolved {
            return;
        }
        self.resolved = true;

        let Some(raw) = candidate else {
            return;
        };

        match parse_unix_timestamp(raw) {
            Some(instant) => self.start = instant,
            None => {
                tracing::debug!(raw, "ignoring malformed request-start timestamp");
            }
        }
    }
}

impl Default for RequestClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a fractional unix timestamp such as `1722772800.125000`.
fn parse_unix_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    let secs = value.trunc() as i64;
    let nanos = (value.fract() * 1_000_000_000.0).round() as u32;
    DateTime::from_timestamp(secs, nanos)
}
