//! ANSI-aware padding
//!
//! The pad amount is `width - visible_width(s)`, so already colorized
//! strings line up with plain ones. `pad_char` is expected to occupy a
//! single column.

use crate::width::visible_width;

/// Where a cell's content sits inside its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    /// Content on the left, padding on the right.
    #[default]
    Left,
    Center,
    /// Content on the right, padding on the left.
    Right,
}

impl Alignment {
    /// Pad `s` to `width` according to this alignment.
    pub fn pad(self, s: &str, width: usize, pad_char: char) -> String {
        match self {
            Alignment::Left => pad_right(s, width, pad_char),
            Alignment::Center => pad_center(s, width, pad_char),
            Alignment::Right => pad_left(s, width, pad_char),
        }
    }
}

fn pad_len(s: &str, width: usize) -> usize {
    width.saturating_sub(visible_width(s))
}

fn repeat(pad_char: char, n: usize) -> String {
    std::iter::repeat(pad_char).take(n).collect()
}

/// Prepend `pad_char` until `s` is `width` columns wide.
pub fn pad_left(s: &str, width: usize, pad_char: char) -> String {
    let mut out = repeat(pad_char, pad_len(s, width));
    out.push_str(s);
    out
}

/// Append `pad_char` until `s` is `width` columns wide.
pub fn pad_right(s: &str, width: usize, pad_char: char) -> String {
    let mut out = s.to_string();
    out.push_str(&repeat(pad_char, pad_len(s, width)));
    out
}

/// Pad both sides; an odd remainder goes to the right.
pub fn pad_center(s: &str, width: usize, pad_char: char) -> String {
    let total = pad_len(s, width);
    let left = total / 2;
    let right = total - left;
    let mut out = repeat(pad_char, left);
    out.push_str(s);
    out.push_str(&repeat(pad_char, right));
    out
}
