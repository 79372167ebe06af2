//! Booleans, numbers and plain labels

use std::error::Error as StdError;

use super::{join, Colorizers};
use crate::palette::ColorIndex;

/// Pick one of three colors by the sign of `n`. NaN counts as zero.
pub(crate) fn by_sign(n: f64, negative: ColorIndex, zero: ColorIndex, positive: ColorIndex) -> ColorIndex {
    if n < 0.0 {
        negative
    } else if n > 0.0 {
        positive
    } else {
        zero
    }
}

impl Colorizers {
    pub fn bool(&self, b: bool) -> String {
        let colors = &self.config.colors;
        if b {
            self.wrap("true", colors.bool_true)
        } else {
            self.wrap("false", colors.bool_false)
        }
    }

    pub fn bools(&self, values: &[bool]) -> String {
        join(values.iter().map(|&b| self.bool(b)))
    }

    pub(crate) fn int_color(&self, n: i64) -> ColorIndex {
        let colors = &self.config.colors;
        by_sign(n as f64, colors.int_negative, colors.int_zero, colors.int_positive)
    }

    /// Signed integer, colored by sign.
    pub fn int(&self, n: i64) -> String {
        self.wrap(&n.to_string(), self.int_color(n))
    }

    pub fn ints(&self, values: &[i64]) -> String {
        join(values.iter().map(|&n| self.int(n)))
    }

    /// Unsigned integer: zero and non-zero colors only.
    pub fn uint(&self, n: u64) -> String {
        let colors = &self.config.colors;
        let color = if n == 0 {
            colors.uint_zero
        } else {
            colors.uint_positive
        };
        self.wrap(&n.to_string(), color)
    }

    pub fn uints(&self, values: &[u64]) -> String {
        join(values.iter().map(|&n| self.uint(n)))
    }

    /// `n` with `precision` decimals, colored by sign.
    pub fn float(&self, n: f64, precision: usize) -> String {
        let colors = &self.config.colors;
        let color = by_sign(n, colors.float_negative, colors.float_zero, colors.float_positive);
        self.wrap(&format!("{:.*}", precision, n), color)
    }

    /// Treat `n` as a fraction: `0.25` renders as `25.00%`.
    pub fn percentage(&self, n: f64, precision: usize) -> String {
        let colors = &self.config.colors;
        let color = by_sign(
            n,
            colors.percentage_negative,
            colors.percentage_zero,
            colors.percentage_positive,
        );
        self.wrap(&format!("{:.*}%", precision, n * 100.0), color)
    }

    /// `n` followed by `singular` when `n == 1`, `plural` otherwise.
    pub fn int_amount(&self, n: i64, singular: &str, plural: &str) -> String {
        let unit = if n == 1 { singular } else { plural };
        format!("{} {}", self.int(n), unit)
    }

    /// Colors the password; it is not redacted.
    pub fn password(&self, password: &str) -> String {
        self.wrap(password, self.config.colors.password)
    }

    pub fn reason(&self, reason: &str) -> String {
        self.wrap(reason, self.config.colors.reason)
    }

    /// Error message, or `nil` when there is no error.
    pub fn error(&self, err: Option<&dyn StdError>) -> String {
        match err {
            Some(err) => self.wrap(&err.to_string(), self.config.colors.error),
            None => self.nil(),
        }
    }

    pub fn nil(&self) -> String {
        self.wrap("nil", self.config.colors.nil)
    }

    pub fn highlight_info(&self, message: &str) -> String {
        self.wrap(message, self.config.colors.indicator_info)
    }

    pub fn highlight_ok(&self, message: &str) -> String {
        self.wrap(message, self.config.colors.indicator_ok)
    }

    pub fn highlight_success(&self, message: &str) -> String {
        self.wrap(message, self.config.colors.indicator_success)
    }

    pub fn highlight_not_ok(&self, message: &str) -> String {
        self.wrap(message, self.config.colors.indicator_not_ok)
    }

    pub fn highlight_error(&self, message: &str) -> String {
        self.wrap(message, self.config.colors.indicator_error)
    }

    pub fn highlight_warning(&self, message: &str) -> String {
        self.wrap(message, self.config.colors.indicator_warning)
    }

    pub fn highlight_debug(&self, message: &str) -> String {
        self.wrap(message, self.config.colors.indicator_debug)
    }

    pub fn highlight_question(&self, message: &str) -> String {
        self.wrap(message, self.config.colors.indicator_question)
    }

    pub fn highlight_trace(&self, message: &str) -> String {
        self.wrap(message, self.config.colors.indicator_trace)
    }
}
