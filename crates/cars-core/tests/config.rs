use std::fs;
use std::path::PathBuf;

use cars_core::{TransformConfig, TransformError};

#[test]
fn defaults_match_fixed_layout() {
    let config = TransformConfig::default();

    assert_eq!(config.input_dir, PathBuf::from("raw"));
    assert_eq!(config.output_path, PathBuf::from("cars.json"));
    assert_eq!(config.extension, "csv");
    assert_eq!(config.make_overrides.get("merc").map(String::as_str), Some("mercedes"));
    assert_eq!(config.integer_fields, ["tax", "price", "mileage", "year"]);
    assert!(!config.pretty);
}

#[test]
fn partial_toml_keeps_remaining_defaults() {
    let config = TransformConfig::from_toml_str(
        r#"
input_dir = "data/listings"
integer_fields = ["price"]

[make_overrides]
vw = "volkswagen"
"#,
    )
    .expect("valid config");

    assert_eq!(config.input_dir, PathBuf::from("data/listings"));
    assert_eq!(config.output_path, PathBuf::from("cars.json"));
    assert_eq!(config.integer_fields, ["price"]);
    assert_eq!(config.make_overrides.len(), 1);
    assert_eq!(config.parse_options().make_overrides["vw"], "volkswagen");
}

#[test]
fn unknown_keys_are_rejected() {
    assert!(TransformConfig::from_toml_str("input_directory = \"raw\"").is_err());
}

#[test]
fn config_file_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cars.toml");
    fs::write(&path, "pretty = \"yes\"").unwrap();

    let err = TransformConfig::from_toml_file(&path).expect_err("pretty must be a bool");

    match err {
        TransformError::Config { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_config_file_is_io_error() {
    let err = TransformConfig::from_toml_file(&PathBuf::from("/nonexistent/cars.toml"))
        .expect_err("file does not exist");
    assert!(matches!(err, TransformError::Io { .. }));
}
