//! ANSI escape sequence emitters
//!
//! Plain constant sequences plus the 256-color wrappers every colorizer
//! ends up calling. Colors passed in are logical indices, see
//! [`crate::palette`].

use crate::palette::{to_physical, ColorIndex};

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const STRIKETHROUGH: &str = "\x1b[9m";

/// Save cursor position
pub const STORE_CURSOR: &str = "\x1b[s";
/// Restore the position saved by [`STORE_CURSOR`]
pub const RESTORE_CURSOR: &str = "\x1b[u";
/// Clear from the cursor to the end of the line
pub const CLEAR_TO_EOL: &str = "\x1b[K";

/// Foreground color sequence for a logical color.
pub fn color(color: ColorIndex) -> String {
    format!("\x1b[38;5;{}m", to_physical(color))
}

/// Background color sequence for a logical color.
pub fn background(color: ColorIndex) -> String {
    format!("\x1b[48;5;{}m", to_physical(color))
}

/// Wrap `text` in a foreground color and a trailing reset.
pub fn wrap(text: &str, color: ColorIndex) -> String {
    format!("\x1b[38;5;{}m{}{}", to_physical(color), text, RESET)
}

/// Wrap `text` in a background color and a trailing reset.
pub fn wrap_background(text: &str, color: ColorIndex) -> String {
    format!("{}{}{}", background(color), text, RESET)
}
