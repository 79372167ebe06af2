//! Command handlers for the huelog CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod auto;
pub mod config;
pub mod highlight;
pub mod table;
pub mod token;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use huelog::{Config, Value};

/// Turn a command-line word into the most specific [`Value`] it spells.
///
/// Tried in order: `nil`, booleans, integers, floats, RFC 3339 timestamps,
/// the configured date-time format, the configured date format. Anything
/// else stays a string.
pub fn parse_value(raw: &str, config: &Config) -> Value {
    let trimmed = raw.trim();
    if trimmed.eq_ignore_ascii_case("nil") {
        return Value::Nil;
    }
    if let Ok(b) = trimmed.parse::<bool>() {
        return Value::Bool(b);
    }
    if let Ok(n) = trimmed.parse::<i64>() {
        return Value::Int(n);
    }
    if let Ok(n) = trimmed.parse::<u64>() {
        return Value::Uint(n);
    }
    if let Ok(n) = trimmed.parse::<f64>() {
        if n.is_finite() {
            return Value::Float(n);
        }
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(trimmed) {
        return Value::from(t);
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(trimmed, &config.format.date_time_format) {
        return Value::Time(t);
    }
    if let Ok(d) = NaiveDate::parse_from_str(trimmed, &config.format.date_format) {
        return Value::from(d);
    }
    Value::Str(raw.to_string())
}
