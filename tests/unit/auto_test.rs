//! Unit tests for kind-driven colorization

use std::time::Duration;

use chrono::NaiveDate;
use huelog::ansi;
use huelog::width::strip_escapes;
use huelog::{Colorizers, Config, Seq, Value};

fn plain() -> Colorizers {
    Colorizers::new(Config::default().without_colors())
}

#[test]
fn scalars_render_by_kind() {
    let c = plain();
    let t = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    let values = [
        Value::from(-23),
        Value::from(7u8),
        Value::from(true),
        Value::from(12.5),
        Value::from(t),
        Value::from(Duration::from_millis(1500)),
        Value::Nil,
    ];
    assert_eq!(
        c.auto(&values),
        "-23, 7, true, 12.50, 2024-01-02 03:04:05, 1.5s, nil"
    );
}

#[test]
fn fractions_become_percentages() {
    let c = plain();
    assert_eq!(c.auto(&[Value::from(0.25)]), "25.00%");
    assert_eq!(c.auto(&[Value::from(-1.0)]), "-100.00%");
    assert_eq!(c.auto(&[Value::from(1.5)]), "1.50");
}

#[test]
fn precision_comes_from_config() {
    let mut config = Config::default().without_colors();
    config.format.float_precision = 0;
    let c = Colorizers::new(config);
    assert_eq!(c.auto(&[Value::from(0.5), Value::from(3.7)]), "50%, 4");
}

#[test]
fn sequences_are_flattened() {
    let c = plain();
    let values = [
        Value::from(vec![1, -2]),
        Value::from(vec![0.5, 2.0]),
        Value::Seq(Seq::Mixed(vec![Value::from("x"), Value::Nil])),
    ];
    assert_eq!(c.auto(&values), "1, -2, 50.00%, 2.00, x, nil");
}

#[test]
fn strings_pick_path_colorizers() {
    let c = Colorizers::default();
    let colors = &c.config().colors;

    let file = c.auto(&[Value::from("/var/log")]);
    let expected = format!(
        "{}{}{}{}",
        ansi::wrap("/", colors.path_separator),
        ansi::wrap("var", colors.path),
        ansi::wrap("/", colors.path_separator),
        ansi::wrap("log", colors.path)
    );
    assert_eq!(file, expected);

    let url = c.auto(&[Value::from("https://example.com/a?b=c#d")]);
    assert_eq!(strip_escapes(&url), "https://example.com/a?b=c#d");
    assert!(url.contains(&ansi::wrap("example.com", c.color_for_string("example.com"))));

    let word = c.auto(&[Value::from("hello")]);
    assert_eq!(word, ansi::wrap("hello", c.color_for_string("hello")));
}

#[test]
fn other_values_are_hashed() {
    let c = Colorizers::default();
    let out = c.auto(&[Value::other('x')]);
    assert_eq!(out, ansi::wrap("x", c.color_for_string("x")));
}

#[test]
fn auto_macro_converts_arguments() {
    let out = huelog::auto!(1, "two", None::<i32>);
    assert_eq!(strip_escapes(&out), "1, two, nil");
}

#[test]
fn scalar_colorizers_pick_sign_colors() {
    let c = Colorizers::default();
    let colors = &c.config().colors;
    assert_eq!(c.int(-1), ansi::wrap("-1", colors.int_negative));
    assert_eq!(c.uint(0), ansi::wrap("0", colors.uint_zero));
    assert_eq!(c.float(0.0, 1), ansi::wrap("0.0", colors.float_zero));
    assert_eq!(
        c.percentage(0.123, 1),
        ansi::wrap("12.3%", colors.percentage_positive)
    );
}

#[test]
fn amounts_and_units() {
    let c = plain();
    assert_eq!(c.int_amount(1, "file", "files"), "1 file");
    assert_eq!(c.int_amount(3, "file", "files"), "3 files");
    assert_eq!(c.bytes_iec(2048.0), "2.00 KiB");
    assert_eq!(c.rate_si(2_500_000.0, "B", "s"), "2.50 MB/s");
    assert_eq!(c.human_readable_short(1500.0), "1.50K");
    assert_eq!(c.addr("10.0.0.1", 8080), "10.0.0.1:8080");
    assert_eq!(c.duration_millis(250.0), "250ms");
}
