//! Box-drawing layout

use super::column::TableColumn;
use super::Table;
use crate::width::strip_escapes;

const H: &str = "\u{2500}"; // ─
const V: &str = "\u{2502}"; // │
const TOP_LEFT: &str = "\u{250c}"; // ┌
const TOP_RIGHT: &str = "\u{2510}"; // ┐
const BOTTOM_LEFT: &str = "\u{2514}"; // └
const BOTTOM_RIGHT: &str = "\u{2518}"; // ┘
const T_DOWN: &str = "\u{252c}"; // ┬
const T_UP: &str = "\u{2534}"; // ┴
const T_RIGHT: &str = "\u{251c}"; // ├
const T_LEFT: &str = "\u{2524}"; // ┤
const CROSS: &str = "\u{253c}"; // ┼

/// Cell content that turns a cell into a horizontal rule.
pub const SEPARATOR: &str = "---";

/// `true` when `rendered` is the separator marker once escapes and padding
/// are removed.
pub(crate) fn is_separator(rendered: &str, pad_char: char) -> bool {
    strip_escapes(rendered).trim_matches(pad_char).trim() == SEPARATOR
}

/// One laid-out cell: padded content, or a rule of the column width.
struct Slot {
    text: String,
    rule: bool,
}

impl Slot {
    fn framed(&self) -> String {
        if self.rule {
            format!("{H}{}{H}", self.text)
        } else {
            format!(" {} ", self.text)
        }
    }
}

fn horizontal(widths: &[usize], left: &str, join: &str, right: &str) -> String {
    let segments: Vec<String> = widths.iter().map(|&w| H.repeat(w)).collect();
    format!(
        "{left}{H}{}{H}{right}",
        segments.join(&format!("{H}{join}{H}"))
    )
}

/// Junction between two neighbouring cells of a data row.
fn junction(prev_rule: bool, rule: bool) -> &'static str {
    match (prev_rule, rule) {
        (true, true) => CROSS,
        (true, false) => T_LEFT,
        (false, true) => T_RIGHT,
        (false, false) => V,
    }
}

fn slot(column: &TableColumn, row: usize, width: usize) -> Slot {
    match column.cells().get(row) {
        Some(cell) if is_separator(&cell.rendered, column.pad_char()) => Slot {
            text: H.repeat(width),
            rule: true,
        },
        Some(cell) => Slot {
            text: column.pad(&cell.rendered, width),
            rule: false,
        },
        None => Slot {
            text: column.pad(&column.placeholder(), width),
            rule: false,
        },
    }
}

fn data_row(slots: &[Slot]) -> String {
    let mut out = String::new();
    let mut prev_rule = None;
    for slot in slots {
        out.push_str(match prev_rule {
            None if slot.rule => T_RIGHT,
            None => V,
            Some(prev) => junction(prev, slot.rule),
        });
        out.push_str(&slot.framed());
        prev_rule = Some(slot.rule);
    }
    out.push_str(match prev_rule {
        Some(true) => T_LEFT,
        _ => V,
    });
    out
}

impl Table {
    /// Render the table: top border, header, header separator, one line
    /// per data row and the bottom border.
    ///
    /// Columns shorter than the longest one show a placeholder. Cells
    /// holding `---` become a horizontal rule joined to their neighbours.
    pub fn rows(&self) -> Vec<String> {
        let height = self.height();
        let widths: Vec<usize> = self.columns.iter().map(|c| c.width_for(height)).collect();

        let headers: Vec<String> = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(c, &w)| c.pad(c.header(), w))
            .collect();

        let mut out = Vec::with_capacity(height + 4);
        out.push(horizontal(&widths, TOP_LEFT, T_DOWN, TOP_RIGHT));
        out.push(format!("{V} {} {V}", headers.join(&format!(" {V} "))));
        out.push(horizontal(&widths, T_RIGHT, CROSS, T_LEFT));
        for row in 0..height {
            let slots: Vec<Slot> = self
                .columns
                .iter()
                .zip(&widths)
                .map(|(c, &w)| slot(c, row, w))
                .collect();
            out.push(data_row(&slots));
        }
        out.push(horizontal(&widths, BOTTOM_LEFT, T_UP, BOTTOM_RIGHT));
        out
    }

    /// [`rows`](Self::rows) without the header line and the rule under it.
    pub fn rows_without_header(&self) -> Vec<String> {
        let mut rows = self.rows();
        rows.drain(1..3);
        rows
    }
}
