//! Auto command handler

use anyhow::Result;

use huelog::{Colorizers, Value};

use super::parse_value;

/// Parse each argument into a value and print them colorized by kind.
#[cfg(not(tarpaulin_include))]
pub fn handle(values: &[String]) -> Result<()> {
    let colorizers = Colorizers::global();
    let parsed: Vec<Value> = values
        .iter()
        .map(|raw| parse_value(raw, colorizers.config()))
        .collect();
    tracing::debug!(values = ?parsed, "parsed arguments");
    println!("{}", huelog::auto(&parsed));
    Ok(())
}
