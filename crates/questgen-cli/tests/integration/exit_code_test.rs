//! Exit code tests.

use std::fs;

use tempfile::TempDir;

use questgen_models::ModelSpec;

use super::helpers::{checkpoint_dir, run_cli, write_mirror, EXIT_CONFIG_INVALID, EXIT_LOAD_FAILED};

#[test]
fn test_malformed_config_file_exits_2() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("questgen.toml");
    fs::write(&config, "download_only = \"sometimes\"\n").unwrap();

    let result = run_cli(&["--config", config.to_str().unwrap(), "load"]);

    assert_eq!(result.exit_code, EXIT_CONFIG_INVALID, "stderr: {}", result.stderr);
}

#[test]
fn test_invalid_language_exits_2() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("questgen.toml");
    fs::write(&config, "[linguistic]\nlanguage = \"EN!\"\n").unwrap();

    let result = run_cli(&["--config", config.to_str().unwrap(), "download"]);

    assert_eq!(result.exit_code, EXIT_CONFIG_INVALID, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("language"));
}

#[test]
fn test_missing_local_dir_exits_2() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nowhere");

    let result = run_cli(&["--local-dir", missing.to_str().unwrap(), "load"]);

    assert_eq!(result.exit_code, EXIT_CONFIG_INVALID, "stderr: {}", result.stderr);
}

#[test]
fn test_missing_weights_exits_1() {
    let mirror = TempDir::new().unwrap();
    write_mirror(mirror.path());
    let spec = ModelSpec::by_name("en_dg_pm").unwrap();
    fs::remove_file(checkpoint_dir(mirror.path(), spec).join("model.safetensors")).unwrap();

    let result = run_cli(&["--local-dir", mirror.path().to_str().unwrap(), "load"]);

    assert_eq!(result.exit_code, EXIT_LOAD_FAILED, "stderr: {}", result.stderr);
    assert!(result.stderr.contains("[English DG model]"));
    assert!(result.stderr.contains("voidful/bart-distractor-generation-pm"));
}
