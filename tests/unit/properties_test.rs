//! Property-based invariant tests.
//!
//! Verifies:
//! 1. Hash colors are deterministic and stay in the hash range
//! 2. Palette remapping is total
//! 3. Padding reaches the requested width exactly, or leaves wider input alone
//! 4. Plain printable ASCII measures as its length and strips to itself
//! 5. Wrapping then stripping gives back the input
//! 6. Token highlighting keeps every visible character in order, and keeps
//!    the text unchanged when there is no punctuation
//! 7. Every rendered table row has the same visible width

use huelog::ansi;
use huelog::cache::{HASH_MAX, HASH_MIN};
use huelog::pad::{pad_center, pad_left, pad_right};
use huelog::palette::{to_physical, PASSTHROUGH_MAX};
use huelog::width::{strip_escapes, visible_width};
use huelog::{Alignment, Colorizers, Table, TableColumn};
use proptest::prelude::*;

use crate::helpers::plain_formatter;

fn arb_alignment() -> impl Strategy<Value = Alignment> {
    prop_oneof![
        Just(Alignment::Left),
        Just(Alignment::Right),
        Just(Alignment::Center),
    ]
}

proptest! {
    #[test]
    fn hash_color_is_deterministic_and_in_range(s in any::<String>()) {
        let a = Colorizers::default().color_for_string(&s);
        let b = Colorizers::default().color_for_string(&s);
        prop_assert_eq!(a, b);
        prop_assert!((HASH_MIN..=HASH_MAX).contains(&a));
    }

    #[test]
    fn ipv4_color_is_in_range(octets in prop::array::uniform4(any::<u8>())) {
        let ip = format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3]);
        let color = Colorizers::default().color_for_ipv4(&ip);
        prop_assert!((HASH_MIN..=HASH_MAX).contains(&color));
    }

    #[test]
    fn palette_is_total(logical in any::<i32>()) {
        let physical = to_physical(logical);
        if (0..=PASSTHROUGH_MAX).contains(&logical) {
            prop_assert_eq!(i32::from(physical), logical);
        }
    }

    #[test]
    fn padding_reaches_width(s in "[ -~]{0,20}", width in 0usize..30) {
        let expected = width.max(s.len());
        prop_assert_eq!(visible_width(&pad_left(&s, width, ' ')), expected);
        prop_assert_eq!(visible_width(&pad_right(&s, width, ' ')), expected);
        prop_assert_eq!(visible_width(&pad_center(&s, width, ' ')), expected);
    }

    #[test]
    fn plain_ascii_width_is_length(s in "[ -~]{0,40}") {
        prop_assert_eq!(visible_width(&s), s.len());
        prop_assert_eq!(strip_escapes(&s), s);
    }

    #[test]
    fn wrap_strips_back(s in "[ -~]{0,40}", color in 0i32..256) {
        prop_assert_eq!(strip_escapes(&ansi::wrap(&s, color)), s);
    }

    #[test]
    fn token_keeps_words(s in "[a-z0-9 ]{0,40}") {
        let out = Colorizers::default().token(" ", &[s.as_str()]);
        prop_assert_eq!(strip_escapes(&out), s);
    }

    #[test]
    fn token_keeps_visible_characters(s in "[a-z0-9 ,.()':]{0,40}") {
        let out = Colorizers::default().token(" ", &[s.as_str()]);
        prop_assert_eq!(strip_escapes(&out).replace(' ', ""), s.replace(' ', ""));
    }

    #[test]
    fn table_rows_line_up(
        columns in prop::collection::vec(
            ("[a-z]{1,6}", arb_alignment(), prop::collection::vec("[a-z0-9]{0,8}", 0..5)),
            1..4,
        )
    ) {
        let columns: Vec<TableColumn> = columns
            .into_iter()
            .map(|(name, alignment, values)| {
                let mut column = TableColumn::custom(&name, alignment, ' ', plain_formatter());
                column.push_all(values);
                column
            })
            .collect();
        let rows = Table::new(columns).rows();
        let width = visible_width(&rows[0]);
        for row in &rows {
            prop_assert_eq!(visible_width(row), width);
        }
    }
}
