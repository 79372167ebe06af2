//! Test helper utilities

#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

/// `huelog` with HOME pointed at `home`, so no user config leaks in.
pub fn huelog(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("huelog").expect("huelog binary should be built");
    cmd.env("HOME", home.path())
        .env_remove("NO_COLOR")
        .env_remove("RUST_LOG");
    cmd
}

/// `huelog --color never`, for output compared as plain text.
pub fn huelog_plain(home: &TempDir) -> Command {
    let mut cmd = huelog(home);
    cmd.args(["--color", "never"]);
    cmd
}

pub fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.assert().success().get_output().stdout.clone();
    String::from_utf8(output).expect("stdout should be UTF-8")
}
