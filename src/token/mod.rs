//! Token highlighting for free-form text
//!
//! Text is cut into words on a glue string, punctuation at word edges is
//! split off, and each word is classified (bool, nil, number, percentage,
//! date/time). Words that match nothing are "opaque": they all share one
//! color, hashed from their concatenation, so a sentence keeps a single
//! hue while the values inside it stand out.

mod classify;

use tracing::trace;

use crate::ansi;
use crate::colorize::Colorizers;
use crate::palette::ColorIndex;

use classify::{classify, CLOSING, OPENING};

/// Text attributes applied to every token of a highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl Style {
    fn prefix(&self) -> String {
        let mut out = String::new();
        if self.bold {
            out.push_str(ansi::BOLD);
        }
        if self.italic {
            out.push_str(ansi::ITALIC);
        }
        if self.underline {
            out.push_str(ansi::UNDERLINE);
        }
        if self.strikethrough {
            out.push_str(ansi::STRIKETHROUGH);
        }
        out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Paint {
    Fixed(ColorIndex),
    /// Colored with the shared hash of all opaque text
    Opaque,
    /// Punctuation, emitted uncolored
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Token {
    value: String,
    paint: Paint,
    style: Style,
    /// Starts with closing punctuation: no glue before it
    closes: bool,
    /// Ends with opening punctuation: no glue after it
    opens: bool,
}

impl Token {
    fn word(value: &str, paint: Paint, style: Style) -> Self {
        Self {
            value: value.to_string(),
            paint,
            style,
            closes: false,
            opens: false,
        }
    }

    /// Punctuation always binds: no glue before a closing character or
    /// after an opening one, even across chunk boundaries.
    fn punct(c: char, style: Style, closes: bool, opens: bool) -> Self {
        Self {
            value: c.to_string(),
            paint: Paint::Plain,
            style,
            closes,
            opens,
        }
    }
}

/// Splits off one leading opening and one trailing closing character.
/// A lone closing character is treated as closing only.
fn peel(chunk: &str) -> (Option<char>, &str, Option<char>) {
    let mut core = chunk;
    let mut close = None;
    if let Some(c) = core.chars().last().filter(|c| CLOSING.contains(c)) {
        close = Some(c);
        core = &core[..core.len() - c.len_utf8()];
    }
    let mut open = None;
    if let Some(c) = core.chars().next().filter(|c| OPENING.contains(c)) {
        open = Some(c);
        core = &core[c.len_utf8()..];
    }
    (open, core, close)
}

/// Highlights text with one [`Colorizers`] and glue string.
#[derive(Debug)]
pub struct Highlighter<'a> {
    colorizers: &'a Colorizers,
    glue: &'a str,
    style: Style,
}

impl<'a> Highlighter<'a> {
    pub fn new(colorizers: &'a Colorizers, glue: &'a str) -> Self {
        Self {
            colorizers,
            glue,
            style: Style::default(),
        }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Highlight `chunks`; chunk boundaries count as glue.
    pub fn render<S: AsRef<str>>(&self, chunks: &[S]) -> String {
        let tokens = self.tokenize(chunks);
        let shared = self.shared_color(&tokens);
        let merged = self.merge(tokens);
        self.serialize(&merged, shared)
    }

    fn tokenize<S: AsRef<str>>(&self, chunks: &[S]) -> Vec<Token> {
        let mut tokens = Vec::new();
        for chunk in chunks {
            self.push_chunk(chunk.as_ref(), &mut tokens);
        }
        trace!(chunks = chunks.len(), tokens = tokens.len(), "tokenized");
        tokens
    }

    fn push_chunk(&self, chunk: &str, tokens: &mut Vec<Token>) {
        if chunk.is_empty() {
            // Keeps runs of glue intact when rejoining.
            tokens.push(Token::word("", Paint::Opaque, self.style));
            return;
        }

        let (open, core, close) = peel(chunk);
        if let Some(c) = open {
            tokens.push(Token::punct(c, self.style, false, true));
        }
        if !core.is_empty() {
            match classify(core, self.colorizers.config()) {
                Some(color) => tokens.push(Token::word(core, Paint::Fixed(color), self.style)),
                None => self.push_opaque(core, tokens),
            }
        }
        if let Some(c) = close {
            tokens.push(Token::punct(c, self.style, true, false));
        }
    }

    fn push_opaque(&self, core: &str, tokens: &mut Vec<Token>) {
        if self.glue.is_empty() {
            tokens.push(Token::word(core, Paint::Opaque, self.style));
            return;
        }
        // Footnote references such as "end.[7]" become "end. [7]".
        let fixed = core.replace(".[", &format!(".{}[", self.glue));
        if fixed.contains(self.glue) {
            for piece in fixed.split(self.glue) {
                self.push_chunk(piece, tokens);
            }
        } else {
            tokens.push(Token::word(core, Paint::Opaque, self.style));
        }
    }

    /// One color for all opaque text, hashed from the words concatenated
    /// without separators.
    fn shared_color(&self, tokens: &[Token]) -> ColorIndex {
        let content: String = tokens
            .iter()
            .filter(|t| t.paint == Paint::Opaque)
            .map(|t| t.value.as_str())
            .collect();
        self.colorizers.color_for_string(&content)
    }

    fn glue_between(&self, left: &Token, right: &Token) -> &str {
        if right.closes || left.opens {
            ""
        } else {
            self.glue
        }
    }

    /// Merge neighbours that would be painted identically.
    fn merge(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut merged: Vec<Token> = Vec::with_capacity(tokens.len());
        for token in tokens {
            if let Some(last) = merged.last_mut() {
                if last.paint == token.paint && last.style == token.style {
                    let glue = self.glue_between(last, &token).to_string();
                    last.value.push_str(&glue);
                    last.value.push_str(&token.value);
                    last.opens = token.opens;
                    continue;
                }
            }
            merged.push(token);
        }
        merged
    }

    fn serialize(&self, tokens: &[Token], shared: ColorIndex) -> String {
        let styled = !self.colorizers.disabled();
        let mut out = String::new();
        for (i, token) in tokens.iter().enumerate() {
            let prefix = if styled { token.style.prefix() } else { String::new() };
            out.push_str(&prefix);
            match token.paint {
                _ if token.value.is_empty() => {}
                Paint::Fixed(color) => out.push_str(&self.colorizers.wrap(&token.value, color)),
                Paint::Opaque => out.push_str(&self.colorizers.wrap(&token.value, shared)),
                Paint::Plain => {
                    out.push_str(&token.value);
                    if !prefix.is_empty() {
                        out.push_str(ansi::RESET);
                    }
                }
            }
            if let Some(next) = tokens.get(i + 1) {
                out.push_str(self.glue_between(token, next));
            }
        }
        out
    }
}
