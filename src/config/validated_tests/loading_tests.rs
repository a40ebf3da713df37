//! Tests for configuration file resolution.

use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, tempdir};

use super::*;

#[test]
fn explicit_config_file_is_loaded() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[hosted]\nminiport_service = \"custom\"").unwrap();
    let path = file.path().to_str().unwrap();

    let config = ValidatedConfig::load_with_default(&cli(&["-c", path]), None).unwrap();

    assert_eq!(config.miniport_service, "custom");
    assert_eq!(config.config_file.as_deref(), Some(file.path()));
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let result =
        ValidatedConfig::load_with_default(&cli(&["--config", path.to_str().unwrap()]), None);

    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}

#[test]
fn existing_default_file_is_loaded() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[uplink]\ninclude = [\"^Ethernet\"]\n").unwrap();

    let config = ValidatedConfig::load_with_default(&cli(&[]), Some(&path)).unwrap();

    assert_eq!(config.candidate_filter.include_count(), 1);
    assert_eq!(config.config_file.as_deref(), Some(path.as_path()));
}

#[test]
fn absent_default_file_is_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let config = ValidatedConfig::load_with_default(&cli(&[]), Some(&path)).unwrap();

    assert!(config.config_file.is_none());
    assert_eq!(config.miniport_service, "vwifimp");
}

#[test]
fn explicit_file_wins_over_default() {
    let dir = tempdir().unwrap();
    let default_path = dir.path().join("default.toml");
    fs::write(&default_path, "[hosted]\nminiport_service = \"from-default\"\n").unwrap();
    let explicit_path = dir.path().join("explicit.toml");
    fs::write(&explicit_path, "[hosted]\nminiport_service = \"from-explicit\"\n").unwrap();

    let config = ValidatedConfig::load_with_default(
        &cli(&["-c", explicit_path.to_str().unwrap()]),
        Some(&default_path),
    )
    .unwrap();

    assert_eq!(config.miniport_service, "from-explicit");
}

#[test]
fn malformed_default_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[hosted\n").unwrap();

    let result = ValidatedConfig::load_with_default(&cli(&[]), Some(&path));

    assert!(matches!(result, Err(ConfigError::TomlParse(_))));
}
