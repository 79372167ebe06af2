//! Unit tests for config module

use std::fs;

use huelog::palette::{named, to_physical};
use huelog::{Colorizers, Config};

use crate::helpers::temp_config_path;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.format.float_precision, 2);
    assert_eq!(config.format.table_pad_char, ' ');
    assert_eq!(config.format.time_format, "%H:%M:%S");
    assert_eq!(config.format.date_time_format, "%Y-%m-%d %H:%M:%S");
    assert!(!config.colors.disabled);
    assert_eq!(to_physical(config.colors.int_negative), 196);
    assert_eq!(config.colors.bool_true, named::GREEN);
}

#[test]
fn config_serialization_roundtrip() {
    let config = Config::default();
    let toml_str = toml::to_string(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_file_falls_back_per_field() {
    let toml_str = r#"
[format]
float_precision = 4

[colors]
disabled = true
nil = 3
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.format.float_precision, 4);
    assert_eq!(config.format.date_format, "%Y-%m-%d");
    assert!(config.colors.disabled);
    assert_eq!(config.colors.nil, 3);
    assert_eq!(config.colors.int_zero, Config::default().colors.int_zero);
}

#[test]
fn missing_file_yields_defaults() {
    let (_dir, path) = temp_config_path();
    assert_eq!(Config::load_from(&path).unwrap(), Config::default());
}

#[test]
fn save_then_load() {
    let (_dir, path) = temp_config_path();
    let mut config = Config::default();
    config.format.table_pad_char = '.';
    config.colors.time = 100;
    config.save_to(&path).unwrap();

    assert!(path.exists());
    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn invalid_file_is_an_error() {
    let (_dir, path) = temp_config_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[format\nfloat_precision = ").unwrap();
    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
}

#[test]
fn loaded_config_drives_colorizers() {
    let (_dir, path) = temp_config_path();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[colors]\ndisabled = true\n").unwrap();
    let c = Colorizers::new(Config::load_from(&path).unwrap());
    assert_eq!(c.int(-5), "-5");
    assert_eq!(c.highlight(&["a"]), "a");
}
