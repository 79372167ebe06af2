//! Visible width measurement for colorized text
//!
//! Terminal columns are counted after removing CSI escape sequences,
//! per grapheme cluster so combining marks collapse onto their base and
//! wide glyphs (CJK, emoji) take two columns.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

const ESC: char = '\x1b';

/// Emoji blocks kept by [`remove_non_printable`].
const EMOJI_RANGES: [(char, char); 6] = [
    ('\u{1F600}', '\u{1F64F}'), // emoticons
    ('\u{1F300}', '\u{1F5FF}'), // symbols & pictographs
    ('\u{1F680}', '\u{1F6FF}'), // transport & map
    ('\u{2600}', '\u{26FF}'),   // misc symbols
    ('\u{2700}', '\u{27BF}'),   // dingbats
    ('\u{1F900}', '\u{1F9FF}'), // supplemental symbols
];

/// Scanner states for CSI recognition.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum CsiState {
    #[default]
    Normal,
    Escape, // Saw \x1b
    Csi,    // Saw \x1b[, inside parameters/intermediates
}

/// Remove ANSI CSI sequences (`ESC [ params intermediates final`).
///
/// Everything else is left alone, control bytes included. An escape that
/// does not complete a CSI sequence is copied through verbatim.
pub fn strip_escapes(s: &str) -> String {
    if !s.contains(ESC) {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len());
    let mut pending = String::new();
    let mut state = CsiState::Normal;

    for c in s.chars() {
        // A rejected sequence re-examines the current char from Normal.
        loop {
            match state {
                CsiState::Normal => {
                    if c == ESC {
                        pending.push(c);
                        state = CsiState::Escape;
                    } else {
                        out.push(c);
                    }
                    break;
                }
                CsiState::Escape => {
                    if c == '[' {
                        pending.push(c);
                        state = CsiState::Csi;
                        break;
                    }
                    out.push_str(&pending);
                    pending.clear();
                    state = CsiState::Normal;
                }
                CsiState::Csi => match c {
                    '\x30'..='\x3f' | '\x20'..='\x2f' => {
                        pending.push(c);
                        break;
                    }
                    '\x40'..='\x7e' => {
                        pending.clear();
                        state = CsiState::Normal;
                        break;
                    }
                    _ => {
                        out.push_str(&pending);
                        pending.clear();
                        state = CsiState::Normal;
                    }
                },
            }
        }
    }
    out.push_str(&pending);
    out
}

fn is_whitelisted_emoji(c: char) -> bool {
    EMOJI_RANGES
        .iter()
        .any(|&(start, end)| (start..=end).contains(&c))
}

/// Drop escape sequences, NUL and every code point outside printable ASCII,
/// whitespace and the whitelisted emoji blocks.
pub fn remove_non_printable(s: &str) -> String {
    strip_escapes(s)
        .chars()
        .filter(|&c| {
            c != '\0' && (matches!(c, ' '..='~') || c.is_whitespace() || is_whitelisted_emoji(c))
        })
        .collect()
}

/// Number of terminal columns `s` occupies once printed.
pub fn visible_width(s: &str) -> usize {
    let plain = strip_escapes(s);
    if plain.is_ascii() {
        return plain.bytes().filter(|b| (0x20..=0x7e).contains(b)).count();
    }
    plain.graphemes(true).map(grapheme_width).sum()
}

fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().all(char::is_control) {
        return 0;
    }
    let width = grapheme.width();
    if width == 0 {
        return 0;
    }
    // Emoji presentation selector forces the wide form.
    if grapheme.contains('\u{FE0F}') {
        return 2;
    }
    width.min(2)
}
