//! Log line formatting
//!
//! Line shape: `<timestamp> <code>/<tag>: <payload>`, where the payload is each
//! value rendered on its own and joined by a single space.

use chrono::{DateTime, SecondsFormat, Utc};

use super::level::Severity;
use super::value::LogValue;

/// RFC 3339 UTC timestamp with milliseconds, e.g. `2024-01-02T03:04:05.678Z`
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Render values space-joined, in order
pub fn format_payload(values: &[LogValue]) -> String {
    values
        .iter()
        .map(LogValue::render)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a full line (without the trailing newline) at a fixed time
pub fn format_line_at(
    at: &DateTime<Utc>,
    level: Severity,
    tag: &str,
    values: &[LogValue],
) -> String {
    format!(
        "{} {}/{}: {}",
        format_timestamp(at),
        level.code(),
        tag,
        format_payload(values)
    )
}

/// Format a full line (without the trailing newline) stamped with the current time
pub fn format_line(level: Severity, tag: &str, values: &[LogValue]) -> String {
    format_line_at(&Utc::now(), level, tag, values)
}
