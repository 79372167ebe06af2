//! Token command handler

use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Token-highlight the arguments, or every stdin line when there are none.
#[cfg(not(tarpaulin_include))]
pub fn handle(glue: &str, text: &[String]) -> Result<()> {
    if !text.is_empty() {
        println!("{}", huelog::token(glue, text));
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        writeln!(out, "{}", huelog::token(glue, &[line]))?;
    }
    Ok(())
}
