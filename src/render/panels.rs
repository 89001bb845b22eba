//! Built-in panel builders.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::buffer::RecordBuffer;
use crate::escape;
use crate::http::{Params, Request};
use crate::level::Level;

use super::options::Panel;

/// Format the elapsed time between two instants as seconds with exactly
/// three decimal places.
pub(crate) fn elapsed_seconds(from: DateTime<Utc>, to: DateTime<Utc>) -> String {
    let duration = to - from;
    let micros = duration
        .num_microseconds()
        .unwrap_or_else(|| duration.num_milliseconds().saturating_mul(1_000));
    format!("{:.3}", micros as f64 / 1_000_000.0)
}

/// Display class for a record's severity, by descending threshold.
fn level_class(level: Level) -> &'static str {
    if level >= Level::Error {
        "glimpse-text-error"
    } else if level >= Level::Warning {
        "glimpse-text-warning"
    } else {
        "glimpse-text-info"
    }
}

/// Render a context value for display.
fn context_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Build the `log` panel: one row per buffered record with its elapsed
/// offset, level name and message.
pub(crate) fn log_panel(records: &RecordBuffer, request_start: DateTime<Utc>) -> Panel {
    let mut content = String::from("<table class=\"glimpse-log\">");

    for record in records {
        let offset = elapsed_seconds(request_start, record.timestamp);
        let mut message = escape::text(&record.message);

        if !record.context.is_empty() {
            let pairs: Vec<String> = record
                .context
                .iter()
                .map(|(key, value)| escape::text(&format!("{}: {}", key, context_value(value))))
                .collect();
            message.push_str("<br><small>");
            message.push_str(&pairs.join("<br>"));
            message.push_str("</small>");
        }

        content.push_str(&format!(
            "<tr class=\"{}\"><td>{}s</td><td>{}</td><td width=\"100%\">{}</td></tr>",
            escape::attr(level_class(record.level)),
            escape::text(&offset),
            escape::text(record.level_name()),
            message,
        ));
    }

    content.push_str("</table>");

    Panel::new("Log", records.count(), content)
}

/// Build the `request` panel: the four parameter sources with per-source
/// header rows (label plus item count) and a running total counter.
pub(crate) fn request_panel(request: &Request) -> Panel {
    let sources: [(&str, &Params); 4] = [
        ("Query", request.query_params()),
        ("Data", request.data_params()),
        ("Cookies", request.cookies()),
        ("Server", request.server_params()),
    ];

    let mut counter = 0;
    let mut content = String::from("<table class=\"glimpse-request\">");

    for (label, params) in sources {
        counter += params.len();

        content.push_str(&format!(
            "<tr><th colspan=\"2\">{} ({})</th></tr>",
            escape::text(label),
            params.len(),
        ));

        if params.is_empty() {
            content.push_str(
                "<tr><td></td><td class=\"glimpse-text-muted\">No parameters provided</td></tr>",
            );
        } else {
            for (key, value) in params {
                content.push_str(&format!(
                    "<tr><td class=\"glimpse-text-right\">{}</td>\
                     <td class=\"glimpse-text-info\" width=\"100%\">{}</td></tr>",
                    escape::text(key),
                    escape::text(value),
                ));
            }
        }
    }

    content.push_str("</table>");

    Panel::new("Request", counter, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use chrono::Duration;

    fn t0() -> DateTime<Utc> {
        DateTime::from_timestamp(1_722_772_800, 0).unwrap()
    }

    #[test]
    fn test_elapsed_seconds_three_decimals() {
        let start = t0();
        assert_eq!(elapsed_seconds(start, start + Duration::milliseconds(125)), "0.125");
        assert_eq!(elapsed_seconds(start, start + Duration::seconds(2)), "2.000");
        assert_eq!(elapsed_seconds(start, start + Duration::microseconds(1_500)), "0.002");
    }

    #[test]
    fn test_level_classes_by_descending_threshold() {
        assert_eq!(level_class(Level::Emergency), "glimpse-text-error");
        assert_eq!(level_class(Level::Critical), "glimpse-text-error");
        assert_eq!(level_class(Level::Error), "glimpse-text-error");
        assert_eq!(level_class(Level::Warning), "glimpse-text-warning");
        assert_eq!(level_class(Level::Notice), "glimpse-text-info");
        assert_eq!(level_class(Level::Info), "glimpse-text-info");
        assert_eq!(level_class(Level::Debug), "glimpse-text-info");
    }

    #[test]
    fn test_log_panel_row_shape() {
        let mut records = RecordBuffer::new();
        let mut record = Record::new(Level::Warning, "upstream flaky").with_context("retries", 2);
        record.timestamp = t0() + Duration::milliseconds(125);
        records.append(record);

        let panel = log_panel(&records, t0());
        assert_eq!(panel.label, "Log");
        assert_eq!(panel.counter, 1);
        assert!(panel.content.contains("glimpse-text-warning"), "{}", panel.content);
        assert!(panel.content.contains("<td>0.125s</td>"), "{}", panel.content);
        assert!(panel.content.contains("<td>WARNING</td>"), "{}", panel.content);
        assert!(panel.content.contains("upstream flaky"), "{}", panel.content);
        assert!(panel.content.contains("<small>retries: 2</small>"), "{}", panel.content);
    }

    #[test]
    fn test_log_panel_escapes_message_and_context() {
        let mut records = RecordBuffer::new();
        let record = Record::new(Level::Info, "<script>alert(1)</script>")
            .with_context("tag", "<b>");
        records.append(record);

        let panel = log_panel(&records, t0());
        assert!(!panel.content.contains("<script>"), "{}", panel.content);
        assert!(panel.content.contains("&lt;script&gt;"), "{}", panel.content);
        assert!(panel.content.contains("tag: &lt;b&gt;"), "{}", panel.content);
    }

    #[test]
    fn test_log_panel_without_context_has_no_subline() {
        let mut records = RecordBuffer::new();
        records.append(Record::new(Level::Info, "bare"));

        let panel = log_panel(&records, t0());
        assert!(!panel.content.contains("<small>"), "{}", panel.content);
    }

    #[test]
    fn test_log_panel_multiple_context_pairs_join_with_breaks() {
        let mut records = RecordBuffer::new();
        records.append(
            Record::new(Level::Info, "multi")
                .with_context("a", 1)
                .with_context("b", "two"),
        );

        let panel = log_panel(&records, t0());
        assert!(panel.content.contains("a: 1<br>b: two"), "{}", panel.content);
    }

    #[test]
    fn test_request_panel_counts_across_sources() {
        let request = Request::new()
            .query_param("a", "1")
            .cookie("c", "1")
            .cookie("d", "2");

        let panel = request_panel(&request);
        assert_eq!(panel.label, "Request");
        assert_eq!(panel.counter, 3);
    }

    #[test]
    fn test_request_panel_sources_in_order_with_placeholders() {
        let request = Request::new().data_param("field", "value");
        let panel = request_panel(&request);

        let query_at = panel.content.find("Query (0)").unwrap();
        let data_at = panel.content.find("Data (1)").unwrap();
        let cookies_at = panel.content.find("Cookies (0)").unwrap();
        let server_at = panel.content.find("Server (0)").unwrap();
        assert!(query_at < data_at && data_at < cookies_at && cookies_at < server_at);

        // Three empty sources, one placeholder row each.
        assert_eq!(panel.content.matches("No parameters provided").count(), 3);
        assert!(panel.content.contains("field"), "{}", panel.content);
    }

    #[test]
    fn test_request_panel_escapes_params() {
        let request = Request::new().query_param("q", "<img src=x>");
        let panel = request_panel(&request);
        assert!(!panel.content.contains("<img"), "{}", panel.content);
        assert!(panel.content.contains("&lt;img src=x&gt;"), "{}", panel.content);
    }
}
