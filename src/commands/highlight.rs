//! Highlight command handler

use anyhow::Result;

#[cfg(not(tarpaulin_include))]
pub fn handle(text: &[String]) -> Result<()> {
    println!("{}", huelog::highlight(text));
    Ok(())
}
