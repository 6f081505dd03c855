//! Unit tests for bootstrap configuration
//!
//! Tests cover:
//! - Compiled defaults when no config file is present
//! - Missing config files are not fatal
//! - Malformed config files are fatal
//! - Config path resolution priority (CLI > environment > default location)
//!
//! Tests that manipulate GROUPIE_CONFIG are marked with #[serial] so they do
//! not race each other.

use groupie_common::config::{resolve_config_path, LoadProfile, TomlConfig, CONFIG_ENV_VAR};
use groupie_common::{Error, ResourceKind};
use serial_test::serial;
use std::env;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write config");
    file
}

#[test]
fn test_compiled_defaults() {
    let config = TomlConfig::default();

    assert_eq!(config.bind_addr, "0.0.0.0:8443");
    assert_eq!(config.api.profile, LoadProfile::Full);
    assert!(config.api.artists_url.ends_with("/api/artists"));
    assert!(config.api.relations_url.ends_with("/api/relation"));
    assert_eq!(config.server.request_timeout_secs, 10);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_load_without_path_uses_defaults() {
    let config = TomlConfig::load(None).expect("Defaults should load");
    assert_eq!(config.bind_addr, "0.0.0.0:8443");
}

#[test]
fn test_missing_file_is_not_fatal() {
    let config = TomlConfig::load(Some(Path::new("/nonexistent/groupie/config.toml")))
        .expect("Missing config file should fall back to defaults");
    assert_eq!(config.api.profile, LoadProfile::Full);
}

#[test]
fn test_partial_file_keeps_defaults_for_other_fields() {
    let file = write_config(
        r#"
bind_addr = "127.0.0.1:9000"

[api]
artists_url = "http://localhost:1234/artists"
profile = "artists-only"
"#,
    );

    let config = TomlConfig::load(Some(file.path())).expect("Config should parse");
    assert_eq!(config.bind_addr, "127.0.0.1:9000");
    assert_eq!(config.api.artists_url, "http://localhost:1234/artists");
    assert_eq!(config.api.profile, LoadProfile::ArtistsOnly);
    assert!(config.api.locations_url.ends_with("/api/locations"));
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_malformed_file_is_fatal() {
    let file = write_config("bind_addr = [not toml");
    let result = TomlConfig::load(Some(file.path()));
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_unknown_profile_is_rejected() {
    let result = TomlConfig::parse("[api]\nprofile = \"everything\"\n");
    assert!(result.is_err());
}

#[test]
fn test_empty_url_is_rejected() {
    let result = TomlConfig::parse("[api]\ndates_url = \"\"\n");
    assert!(matches!(result, Err(Error::Config(msg)) if msg.contains("dates")));
}

#[test]
fn test_empty_url_ignored_when_not_fetched() {
    let config = TomlConfig::parse("[api]\nprofile = \"artists-only\"\ndates_url = \"\"\n")
        .expect("Unused URLs are not validated");
    assert_eq!(config.api.profile.kinds(), &[ResourceKind::Artists]);
}

#[test]
fn test_zero_request_timeout_is_rejected() {
    let result = TomlConfig::parse("[server]\nrequest_timeout_secs = 0\n");
    assert!(result.is_err());
}

#[test]
fn test_urls_follow_resource_kind() {
    let config = TomlConfig::default();
    let urls = config.api.urls();
    assert_eq!(urls.get(ResourceKind::Artists), config.api.artists_url);
    assert_eq!(urls.get(ResourceKind::Relations), config.api.relations_url);
}

#[test]
#[serial]
fn test_resolve_prefers_cli_argument() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/groupie-env.toml");

    let resolved = resolve_config_path(Some(Path::new("/tmp/groupie-cli.toml")));
    assert_eq!(resolved, Some(PathBuf::from("/tmp/groupie-cli.toml")));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_resolve_uses_environment_variable() {
    env::set_var(CONFIG_ENV_VAR, "/tmp/groupie-env.toml");

    let resolved = resolve_config_path(None);
    assert_eq!(resolved, Some(PathBuf::from("/tmp/groupie-env.toml")));

    env::remove_var(CONFIG_ENV_VAR);
}

#[test]
#[serial]
fn test_resolve_ignores_empty_environment_variable() {
    env::set_var(CONFIG_ENV_VAR, "  ");

    let resolved = resolve_config_path(None);
    assert_ne!(resolved, Some(PathBuf::from("  ")));

    env::remove_var(CONFIG_ENV_VAR);
}
