//! CLI tests
//!
//! Runs the actual binary against a temporary HOME.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{huelog, huelog_plain, stdout_of};

// ============================================================================
// token / highlight / auto
// ============================================================================

#[test]
fn token_arguments_keep_their_text() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .args(["token", "value is 42, (ok)"])
        .assert()
        .success()
        .stdout("value is 42, (ok)\n");
}

#[test]
fn token_reads_stdin_line_by_line() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .arg("token")
        .write_stdin("a 1\nb 2\n")
        .assert()
        .success()
        .stdout("a 1\nb 2\n");
}

#[test]
fn token_custom_glue() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .args(["token", "--glue", ",", "x", "7"])
        .assert()
        .success()
        .stdout("x,7\n");
}

#[test]
fn color_always_emits_escapes() {
    let home = TempDir::new().unwrap();
    huelog(&home)
        .args(["--color", "always", "highlight", "x"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;5;"));
}

#[test]
fn color_auto_is_plain_when_piped() {
    let home = TempDir::new().unwrap();
    huelog(&home)
        .args(["highlight", "a", "b"])
        .assert()
        .success()
        .stdout("a, b\n");
}

#[test]
fn config_can_disable_colors() {
    let home = TempDir::new().unwrap();
    let dir = home.path().join(".config").join("huelog");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[colors]\ndisabled = true\n").unwrap();
    huelog(&home)
        .args(["--color", "always", "highlight", "x"])
        .assert()
        .success()
        .stdout("x\n");
}

#[test]
fn auto_parses_arguments() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .args([
            "auto",
            "42",
            "-0.5",
            "true",
            "nil",
            "2024-01-02T10:11:12Z",
            "/tmp/x",
        ])
        .assert()
        .success()
        .stdout("42, -50.00%, true, nil, 2024-01-02 10:11:12, /tmp/x\n");
}

#[test]
fn highlight_requires_text() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home).arg("highlight").assert().failure();
}

// ============================================================================
// table
// ============================================================================

#[test]
fn table_renders_stdin() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(
        huelog_plain(&home)
            .arg("table")
            .write_stdin("name,size\na,10\nb,-3\n"),
    );
    insta::assert_snapshot!(out.trim_end(), @r"
    ┌──────┬──────┐
    │ name │ size │
    ├──────┼──────┤
    │ a    │ 10   │
    │ b    │ -3   │
    └──────┴──────┘
    ");
}

#[test]
fn table_alignment_and_short_rows() {
    let home = TempDir::new().unwrap();
    let out = stdout_of(
        huelog_plain(&home)
            .args(["table", "--align", "right"])
            .write_stdin("key,value\nalpha,1\nb\n"),
    );
    insta::assert_snapshot!(out.trim_end(), @r"
    ┌───────┬───────┐
    │   key │ value │
    ├───────┼───────┤
    │ alpha │     1 │
    │     b │   N/A │
    └───────┴───────┘
    ");
}

#[test]
fn table_exports_json() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .args(["table", "--export", "json"])
        .write_stdin("name,size\na,10\nb,-3\n")
        .assert()
        .success()
        .stdout("[[\"name\",\"size\"],[\"a\",10],[\"b\",-3]]\n");
}

#[test]
fn table_exports_csv_with_delimiter() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .args(["table", "-d", ";", "--export", "csv"])
        .write_stdin("a;b\n1;x\n")
        .assert()
        .success()
        .stdout("a;b\n1;x\n");
}

#[test]
fn table_rejects_non_ascii_delimiter() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .args(["table", "-d", "\u{e9}"])
        .write_stdin("a\n1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("ASCII"));
}

#[test]
fn table_needs_input() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .arg("table")
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn config_path_lives_under_home() {
    let home = TempDir::new().unwrap();
    let expected = home
        .path()
        .join(".config")
        .join("huelog")
        .join("config.toml");
    huelog_plain(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .args(["config", "init"])
        .assert()
        .success();
    assert!(home.path().join(".config/huelog/config.toml").exists());

    huelog_plain(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    huelog_plain(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    huelog_plain(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[format]"))
        .stdout(predicate::str::contains("float_precision = 2"))
        .stdout(predicate::str::contains("[colors]"));
}
