//! Semantic classification of a single word

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::colorize::by_sign;
use crate::config::{Config, FormatConfig};
use crate::palette::ColorIndex;

/// Characters peeled off the end of a word, in the order they are checked.
pub(crate) const CLOSING: [char; 11] = [',', '.', ';', ':', '?', '!', ')', '}', ']', '\'', '"'];
/// Characters peeled off the start of a word.
pub(crate) const OPENING: [char; 5] = ['(', '{', '[', '\'', '"'];

/// Fixed color for `text`, or `None` when it is an opaque string.
///
/// Checked in order: booleans and `nil` (any case), integers, floats,
/// percentages, then the configured date/time formats.
pub(crate) fn classify(text: &str, config: &Config) -> Option<ColorIndex> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let colors = &config.colors;

    if text.eq_ignore_ascii_case("false") {
        return Some(colors.bool_false);
    }
    if text.eq_ignore_ascii_case("true") {
        return Some(colors.bool_true);
    }
    if text.eq_ignore_ascii_case("nil") {
        return Some(colors.nil);
    }

    if let Ok(n) = text.parse::<i64>() {
        return Some(by_sign(
            n as f64,
            colors.int_negative,
            colors.int_zero,
            colors.int_positive,
        ));
    }
    if let Ok(n) = text.parse::<f64>() {
        return Some(by_sign(
            n,
            colors.float_negative,
            colors.float_zero,
            colors.float_positive,
        ));
    }
    if let Some(n) = text.strip_suffix('%').and_then(|p| p.parse::<f64>().ok()) {
        return Some(by_sign(
            n,
            colors.percentage_negative,
            colors.percentage_zero,
            colors.percentage_positive,
        ));
    }

    if is_time(text, &config.format) {
        return Some(colors.time);
    }
    None
}

fn is_time(text: &str, format: &FormatConfig) -> bool {
    NaiveDate::parse_from_str(text, &format.date_format).is_ok()
        || NaiveDateTime::parse_from_str(text, &format.date_time_format).is_ok()
        || NaiveDateTime::parse_from_str(text, &format.date_time_format_12hr).is_ok()
        || NaiveTime::parse_from_str(text, &format.time_format).is_ok()
        || NaiveTime::parse_from_str(text, &format.time_format_12hr).is_ok()
}
