//! Tests for configuration loading

use std::fs;

use libcat::config::{CONFIG_ENV, Config};
use serial_test::serial;
use tempfile::TempDir;

// =============================================================================
// FILE LOADING TESTS
// =============================================================================

#[test]
fn test_load_missing_file_gives_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load(Some(&temp.path().join("absent.toml"))).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_full_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        r#"[menu]
seed_sample_data = false
prompt = "libcat> "

[fees]
currency = "¥"

[output]
json = true
"#,
    )
    .unwrap();

    let config = Config::load(Some(&path)).unwrap();
    assert!(!config.menu.seed_sample_data);
    assert_eq!(config.menu.prompt, "libcat> ");
    assert_eq!(config.fees.currency, "¥");
    assert!(config.output.json);
}

#[test]
fn test_load_malformed_file_is_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[menu\nseed_sample_data = ").unwrap();

    let err = Config::load(Some(&path)).unwrap_err();
    assert!(format!("{err:#}").contains("failed to parse config"));
}

// =============================================================================
// PATH RESOLUTION TESTS
// =============================================================================

#[test]
#[serial]
fn test_env_var_overrides_default_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("from-env.toml");
    fs::write(&path, "[fees]\ncurrency = \"£\"\n").unwrap();

    // SAFETY: serialized with other env-mutating tests
    unsafe { std::env::set_var(CONFIG_ENV, &path) };
    let resolved = Config::resolve_path(None);
    let config = Config::load(None).unwrap();
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(resolved, path);
    assert_eq!(config.fees.currency, "£");
}

#[test]
#[serial]
fn test_explicit_path_beats_env_var() {
    let temp = TempDir::new().unwrap();
    let explicit = temp.path().join("explicit.toml");

    // SAFETY: serialized with other env-mutating tests
    unsafe { std::env::set_var(CONFIG_ENV, temp.path().join("env.toml")) };
    let resolved = Config::resolve_path(Some(&explicit));
    unsafe { std::env::remove_var(CONFIG_ENV) };

    assert_eq!(resolved, explicit);
}

#[test]
#[serial]
fn test_default_path_without_env() {
    // SAFETY: serialized with other env-mutating tests
    unsafe { std::env::remove_var(CONFIG_ENV) };
    let resolved = Config::resolve_path(None);
    assert!(resolved.ends_with("libcat/config.toml"));
}
