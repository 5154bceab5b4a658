//! Tests for configuration system

use temp_dir::TempDir;
use whattoeat::{Config, LogFormat};

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.selector.separator, "、");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, LogFormat::Pretty);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_missing_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("absent.toml");

    let config = Config::load(Some(path.to_string_lossy().into_owned()))
        .expect("Failed to load config");

    assert_eq!(config.selector.separator, "、");
    assert_eq!(config.selector.seed, None);
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("whattoeat.toml");
    std::fs::write(
        &path,
        r#"
[selector]
separator = ", "
seed = 42

[logging]
level = "debug"
format = "json"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.to_string_lossy().into_owned()))
        .expect("Failed to load config");

    assert_eq!(config.selector.separator, ", ");
    assert_eq!(config.selector.seed, Some(42));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, LogFormat::Json);
}

#[test]
fn test_config_rejects_unknown_log_format() {
    let dir = TempDir::new().unwrap();
    let path = dir.child("bad.toml");
    std::fs::write(&path, "[logging]\nformat = \"xml\"\n").unwrap();

    assert!(Config::load(Some(path.to_string_lossy().into_owned())).is_err());
}
