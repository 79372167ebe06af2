//! Unit tests for table layout and export

use std::sync::Arc;

use huelog::table::{auto_formatter, SEPARATOR};
use huelog::width::{strip_escapes, visible_width};
use huelog::{Alignment, Colorizers, Config, Table, TableColumn, Value};

fn column(name: &str, alignment: Alignment, colors: bool) -> TableColumn {
    let config = if colors {
        Config::default()
    } else {
        Config::default().without_colors()
    };
    let formatter = auto_formatter(Arc::new(Colorizers::new(config)));
    TableColumn::custom(name, alignment, ' ', formatter)
}

fn sample(colors: bool) -> Table {
    let mut name = column("name", Alignment::Left, colors);
    name.push_all(["alpha", SEPARATOR, "gamma"]);
    let mut size = column("size", Alignment::Right, colors);
    size.push(10).push(SEPARATOR).push(-3);
    let mut ok = column("ok", Alignment::Center, colors);
    ok.push(true);
    Table::new(vec![name, size, ok])
}

#[test]
fn renders_box_layout() {
    insta::assert_snapshot!(sample(false).to_string(), @r"
    ┌───────┬──────┬──────┐
    │ name  │ size │  ok  │
    ├───────┼──────┼──────┤
    │ alpha │   10 │ true │
    ├───────┼──────┤ N/A  │
    │ gamma │   -3 │ N/A  │
    └───────┴──────┴──────┘
    ");
}

#[test]
fn colors_do_not_change_layout() {
    let plain = sample(false).rows();
    let colored = sample(true).rows();
    assert_eq!(plain.len(), colored.len());
    for (p, c) in plain.iter().zip(&colored) {
        assert_eq!(&strip_escapes(c), p);
    }
}

#[test]
fn every_row_has_the_same_width() {
    let rows = sample(true).rows();
    let width = visible_width(&rows[0]);
    assert!(rows.iter().all(|row| visible_width(row) == width));
}

#[test]
fn rows_without_header_drop_two_lines() {
    let table = sample(false);
    let rows = table.rows();
    let bare = table.rows_without_header();
    assert_eq!(bare.len(), rows.len() - 2);
    assert_eq!(bare[0], rows[0]);
    assert_eq!(bare[1], rows[3]);
}

#[test]
fn raw_data_blanks_separator_cells() {
    let raw = sample(true).raw_data();
    assert_eq!(
        raw,
        vec![
            vec![Value::from("name"), Value::from("size"), Value::from("ok")],
            vec![Value::from("alpha"), Value::Int(10), Value::Bool(true)],
            // The missing "ok" cell is not a separator, so the row stays.
            vec![Value::from(""), Value::from(""), Value::Nil],
            vec![Value::from("gamma"), Value::Int(-3), Value::Nil],
        ]
    );
}

#[test]
fn single_column_table_is_closed() {
    let mut only = column("x", Alignment::Left, false);
    only.push("abc");
    let rows = Table::new(vec![only]).rows();
    assert_eq!(
        rows,
        ["┌─────┐", "│ x   │", "├─────┤", "│ abc │", "└─────┘"]
    );
}

#[test]
fn custom_pad_char() {
    let formatter = auto_formatter(Arc::new(Colorizers::new(
        Config::default().without_colors(),
    )));
    let mut col = TableColumn::custom("id", Alignment::Right, '.', formatter);
    col.push(5);
    let rows = Table::new(vec![col]).rows();
    assert_eq!(rows[3], "│ .5 │");
}

#[test]
fn exports_share_raw_data() {
    let table = sample(false);
    assert_eq!(
        table.to_csv(b',').unwrap(),
        "name,size,ok\nalpha,10,true\n,,\ngamma,-3,\n"
    );
    assert_eq!(
        table.to_json().unwrap(),
        r#"[["name","size","ok"],["alpha",10,true],["","",null],["gamma",-3,null]]"#
    );
}
