//! Unit tests for the token highlighter

use huelog::ansi;
use huelog::width::strip_escapes;
use huelog::{Colorizers, Config, Highlighter, Style};

#[test]
fn values_stand_out_from_opaque_text() {
    let c = Colorizers::default();
    let colors = &c.config().colors;
    let out = c.token(" ", &["value is 42"]);
    let expected = format!(
        "{} {}",
        ansi::wrap("value is", c.color_for_string("valueis")),
        ansi::wrap("42", colors.int_positive)
    );
    assert_eq!(out, expected);
}

#[test]
fn punctuation_is_uncolored() {
    let c = Colorizers::default();
    let colors = &c.config().colors;
    let out = c.token(" ", &["(true)"]);
    assert_eq!(out, format!("({})", ansi::wrap("true", colors.bool_true)));
}

#[test]
fn numbers_are_colored_by_sign() {
    let c = Colorizers::default();
    let colors = &c.config().colors;
    let out = c.token(" ", &["-3 0 2.5 -0.5%"]);
    assert!(out.contains(&ansi::wrap("-3", colors.int_negative)));
    assert!(out.contains(&ansi::wrap("0", colors.int_zero)));
    assert!(out.contains(&ansi::wrap("2.5", colors.float_positive)));
    assert!(out.contains(&ansi::wrap("-0.5%", colors.percentage_negative)));
    assert_eq!(strip_escapes(&out), "-3 0 2.5 -0.5%");
}

#[test]
fn dates_and_times_use_time_color() {
    let c = Colorizers::default();
    let time = c.config().colors.time;
    let out = c.token(" ", &["started 2024-01-02 at 10:11:12."]);
    assert!(out.contains(&ansi::wrap("2024-01-02", time)));
    assert!(out.contains(&ansi::wrap("10:11:12", time)));
    assert_eq!(strip_escapes(&out), "started 2024-01-02 at 10:11:12.");
}

#[test]
fn chunks_are_joined_with_glue() {
    let c = Colorizers::new(Config::default().without_colors());
    assert_eq!(c.token(",", &["a", "b", "3"]), "a,b,3");
    assert_eq!(c.token(" ", &["one two", "three"]), "one two three");
}

#[test]
fn separate_punctuation_chunks_take_no_glue() {
    let c = Colorizers::new(Config::default().without_colors());
    assert_eq!(c.token(" ", &["Hello", "world", "!"]), "Hello world!");
    assert_eq!(c.token(" ", &["see", "(", "note", ")", "."]), "see (note).");
}

#[test]
fn same_text_same_output() {
    let c = Colorizers::default();
    let text = "Need 14.23% or '424.14%' or something else?";
    assert_eq!(c.token(" ", &[text]), c.token(" ", &[text]));
}

#[test]
fn quoted_words_keep_their_quotes_tight() {
    let c = Colorizers::default();
    let out = c.token(" ", &["say \"hello there\" twice"]);
    assert_eq!(strip_escapes(&out), "say \"hello there\" twice");
}

#[test]
fn every_style_attribute_is_emitted() {
    let c = Colorizers::default();
    let style = Style {
        bold: true,
        italic: true,
        underline: true,
        strikethrough: true,
    };
    let out = Highlighter::new(&c, " ").with_style(style).render(&["x"]);
    let prefix = format!(
        "{}{}{}{}",
        ansi::BOLD,
        ansi::ITALIC,
        ansi::UNDERLINE,
        ansi::STRIKETHROUGH
    );
    assert!(out.starts_with(&prefix));
    assert_eq!(strip_escapes(&out), "x");
}
