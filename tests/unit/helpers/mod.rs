//! Test helper utilities

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use huelog::table::{auto_formatter, Formatter};
use huelog::{Colorizers, Config};
use tempfile::TempDir;

/// Temporary directory plus the config file path inside it (not created).
pub fn temp_config_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(".config").join("huelog").join("config.toml");
    (temp_dir, path)
}

/// Colorizers that emit no escapes.
pub fn plain_colorizers() -> Colorizers {
    Colorizers::new(Config::default().without_colors())
}

/// Column formatter that emits no escapes.
pub fn plain_formatter() -> Formatter {
    auto_formatter(Arc::new(plain_colorizers()))
}
