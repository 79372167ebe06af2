//! huelog - terminal colorization for log output
//!
//! Values, words and whole tables get stable 256-color ANSI styling:
//! equal text always gets the same color, numbers are colored by sign,
//! and columns line up no matter how many escapes a cell carries.
//!
//! The free functions here go through [`Colorizers::global`]. Build a
//! [`Colorizers`] of your own for a separate configuration, or hand one
//! to [`install`] before first use to replace the global defaults.

pub mod ansi;
pub mod cache;
pub mod colorize;
pub mod config;
pub mod error;
pub mod pad;
pub mod palette;
pub mod table;
pub mod token;
pub mod value;
pub mod width;

pub use colorize::{identify_path, install, Colorizers, PathKind};
pub use config::Config;
pub use error::Error;
pub use pad::Alignment;
pub use palette::ColorIndex;
pub use table::{Table, TableColumn};
pub use token::{Highlighter, Style};
pub use value::{Kind, Seq, Value};

/// Colorize each value by its kind; results are joined with `", "`.
///
/// Usually called through [`auto!`], which converts its arguments.
pub fn auto(values: &[Value]) -> String {
    Colorizers::global().auto(values)
}

/// Color each string by a hash of its content.
pub fn highlight<S: AsRef<str>>(strings: &[S]) -> String {
    Colorizers::global().highlight(strings)
}

/// Token-highlight `chunks`, splitting unrecognized text on `glue`.
pub fn token<S: AsRef<str>>(glue: &str, chunks: &[S]) -> String {
    Colorizers::global().token(glue, chunks)
}

pub fn color_for_string(s: &str) -> ColorIndex {
    Colorizers::global().color_for_string(s)
}

pub fn color_for_ipv4(ip: &str) -> ColorIndex {
    Colorizers::global().color_for_ipv4(ip)
}
