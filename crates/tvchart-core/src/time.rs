// File: crates/tvchart-core/src/time.rs
// Summary: Date-string to epoch-seconds conversion (UTC) for candle and event times.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{PlotError, Result};
use crate::types::Value;

/// Parse `input` with a strftime-style `format` into UTC epoch seconds.
/// Date-only formats resolve to midnight; formats carrying an offset honour it.
pub fn parse_epoch_seconds(input: &str, format: &str) -> Result<i64> {
    let input = input.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, format) {
        return Ok(dt.and_utc().timestamp());
    }
    if let Some(dt) = NaiveDate::parse_from_str(input, format).ok().and_then(|d| d.and_hms_opt(0, 0, 0)) {
        return Ok(dt.and_utc().timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_str(input, format) {
        return Ok(dt.timestamp());
    }
    Err(PlotError::DateParse { input: input.to_string(), format: format.to_string() })
}

/// Resolve a time cell: parsed from text when a format is given, otherwise
/// taken as-is and required to be numeric epoch seconds.
pub fn resolve_time(value: Value, format: Option<&str>) -> Result<Value> {
    match (format, value) {
        (Some(fmt), Value::Str(s)) => parse_epoch_seconds(&s, fmt).map(Value::Int),
        (Some(fmt), other) => Err(PlotError::DateParse { input: other.to_string(), format: fmt.to_string() }),
        (None, Value::Str(_)) => Err(PlotError::NonNumeric { field: "time" }),
        (None, numeric) => Ok(numeric),
    }
}
