//! Config subcommands handler

use anyhow::{bail, Context, Result};

use huelog::Config;

/// Show the effective configuration as TOML.
#[cfg(not(tarpaulin_include))]
pub fn handle_show() -> Result<()> {
    let config = Config::load()?;
    let toml_str = toml::to_string_pretty(&config).context("Failed to serialize config")?;
    print!("{}", toml_str);
    Ok(())
}

#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the default configuration, refusing to overwrite unless `force`.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let config_path = Config::config_path()?;
    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            config_path.display()
        );
    }
    Config::default().save()?;
    println!("Wrote default configuration to {}", config_path.display());
    Ok(())
}
