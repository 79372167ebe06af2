//! Dates, times and durations

use std::fmt::Write;
use std::time::Duration;

use chrono::NaiveDateTime;

use super::Colorizers;
use crate::value::{format_duration, PLAIN_DATE_TIME_FORMAT};

/// Format `t` with a user supplied chrono format string.
///
/// chrono reports bad specifiers as a `fmt::Error` at display time; those
/// fall back to the plain date-time layout instead of panicking.
pub(crate) fn format_time(t: &NaiveDateTime, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", t.format(format)).is_err() {
        tracing::debug!(format, "invalid time format, using default");
        out.clear();
        let _ = write!(out, "{}", t.format(PLAIN_DATE_TIME_FORMAT));
    }
    out
}

/// Seconds as a duration; negative or non-finite input becomes zero.
fn duration_from_secs(seconds: f64) -> Duration {
    Duration::try_from_secs_f64(seconds).unwrap_or(Duration::ZERO)
}

impl Colorizers {
    pub fn time_custom(&self, t: &NaiveDateTime, format: &str) -> String {
        self.wrap(&format_time(t, format), self.config.colors.time)
    }

    pub fn time(&self, t: &NaiveDateTime) -> String {
        self.time_custom(t, &self.config.format.time_format)
    }

    pub fn time_12hr(&self, t: &NaiveDateTime) -> String {
        self.time_custom(t, &self.config.format.time_format_12hr)
    }

    pub fn date(&self, t: &NaiveDateTime) -> String {
        self.time_custom(t, &self.config.format.date_format)
    }

    pub fn date_time(&self, t: &NaiveDateTime) -> String {
        self.time_custom(t, &self.config.format.date_time_format)
    }

    pub fn date_time_12hr(&self, t: &NaiveDateTime) -> String {
        self.time_custom(t, &self.config.format.date_time_format_12hr)
    }

    /// Segmented duration such as `1h 2m 3.5s`.
    pub fn duration(&self, d: Duration) -> String {
        self.wrap(&format_duration(d), self.config.colors.duration)
    }

    pub fn duration_secs(&self, seconds: f64) -> String {
        self.duration(duration_from_secs(seconds))
    }

    pub fn duration_millis(&self, milliseconds: f64) -> String {
        self.duration(duration_from_secs(milliseconds / 1000.0))
    }
}
