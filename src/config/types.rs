//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

use crate::palette::{logical_for, named, ColorIndex};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub colors: ColorConfig,
}

/// Number and date/time formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Digits after the decimal point for floats and percentages
    #[serde(default = "default_float_precision")]
    pub float_precision: usize,
    /// Character used to pad table cells
    #[serde(default = "default_table_pad_char")]
    pub table_pad_char: char,
    /// chrono format strings, also used to recognize date/time tokens
    #[serde(default = "default_time_format")]
    pub time_format: String,
    #[serde(default = "default_time_format_12hr")]
    pub time_format_12hr: String,
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default = "default_date_time_format")]
    pub date_time_format: String,
    #[serde(default = "default_date_time_format_12hr")]
    pub date_time_format_12hr: String,
}

pub fn default_float_precision() -> usize {
    2
}

pub fn default_table_pad_char() -> char {
    ' '
}

pub fn default_time_format() -> String {
    "%H:%M:%S".to_string()
}

pub fn default_time_format_12hr() -> String {
    "%I:%M:%S%P".to_string()
}

pub fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

pub fn default_date_time_format() -> String {
    "%Y-%m-%d %H:%M:%S".to_string()
}

pub fn default_date_time_format_12hr() -> String {
    "%Y-%m-%d %I:%M:%S%P".to_string()
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            float_precision: default_float_precision(),
            table_pad_char: default_table_pad_char(),
            time_format: default_time_format(),
            time_format_12hr: default_time_format_12hr(),
            date_format: default_date_format(),
            date_time_format: default_date_time_format(),
            date_time_format_12hr: default_date_time_format_12hr(),
        }
    }
}

/// Logical color indices used by the colorizers.
///
/// Missing keys fall back to [`ColorConfig::default`] field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    /// Emit plain text everywhere
    pub disabled: bool,

    pub nil: ColorIndex,
    pub int_negative: ColorIndex,
    pub int_zero: ColorIndex,
    pub int_positive: ColorIndex,
    pub uint_zero: ColorIndex,
    pub uint_positive: ColorIndex,
    pub float_negative: ColorIndex,
    pub float_zero: ColorIndex,
    pub float_positive: ColorIndex,
    pub percentage_negative: ColorIndex,
    pub percentage_zero: ColorIndex,
    pub percentage_positive: ColorIndex,
    pub bool_false: ColorIndex,
    pub bool_true: ColorIndex,
    pub time: ColorIndex,
    pub duration: ColorIndex,

    pub path: ColorIndex,
    pub path_separator: ColorIndex,
    pub url_separators: ColorIndex,
    pub scheme: ColorIndex,
    pub user: ColorIndex,
    pub password: ColorIndex,
    pub url_path: ColorIndex,
    pub query_key: ColorIndex,
    pub query_value: ColorIndex,
    pub fragment: ColorIndex,

    pub reason: ColorIndex,
    pub file: ColorIndex,
    pub error: ColorIndex,
    /// Base color of unit suffixes, shifted by the prefix exponent
    pub unit_human_readable: ColorIndex,

    pub indicator: ColorIndex,
    pub indicator_info: ColorIndex,
    pub indicator_ok: ColorIndex,
    pub indicator_success: ColorIndex,
    pub indicator_not_ok: ColorIndex,
    pub indicator_error: ColorIndex,
    pub indicator_warning: ColorIndex,
    pub indicator_debug: ColorIndex,
    pub indicator_trace: ColorIndex,
    pub indicator_question: ColorIndex,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            disabled: false,

            nil: named::DARK_RED,
            int_negative: named::RED,
            int_zero: named::BLUE,
            int_positive: named::CYAN,
            uint_zero: named::BLUE,
            uint_positive: named::CYAN,
            float_negative: named::RED,
            float_zero: named::BLUE,
            float_positive: named::CYAN,
            percentage_negative: named::RED,
            percentage_zero: named::BLUE - 2,
            percentage_positive: named::CYAN - 2,
            bool_false: named::RED,
            bool_true: named::GREEN,
            time: logical_for(26),
            duration: named::ORANGE,

            path: logical_for(148),
            path_separator: logical_for(207),
            url_separators: named::BRIGHT_YELLOW,
            scheme: named::DARK_YELLOW,
            user: named::DARK_GREEN,
            password: named::DARK_RED,
            url_path: logical_for(128),
            query_key: named::ORANGE,
            query_value: named::DARK_ORANGE,
            fragment: named::LIGHT_BLUE,

            reason: named::ORANGE,
            file: named::LIGHT_BLUE,
            error: named::RED,
            unit_human_readable: logical_for(160),

            indicator: named::GRAY,
            indicator_info: named::LIGHT_BLUE,
            indicator_ok: named::OLIVE_GREEN,
            indicator_success: named::GREEN,
            indicator_not_ok: named::DARK_RED,
            indicator_error: named::RED,
            indicator_warning: named::YELLOW,
            indicator_debug: named::ORANGE,
            indicator_trace: named::ORANGE,
            indicator_question: named::LIME,
        }
    }
}
