// Tests for configuration loading

use std::fs;

use dbpilot::config::Config;
use tempfile::TempDir;

#[test]
fn missing_file_creates_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    let path = path.to_string_lossy();

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(config.server_url, "http://localhost:8000");
    assert_eq!(config.database_uri, None);
    assert!(temp_dir.path().join("config.yml").exists());
}

#[test]
fn config_round_trips_through_yaml() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    let path = path.to_string_lossy();

    let config = Config {
        server_url: "http://10.0.0.5:8000".to_string(),
        database_uri: Some("sqlite:///demo/Chinook.db".to_string()),
    };
    config.save(Some(&path)).unwrap();

    let loaded = Config::load(Some(&path)).unwrap();
    assert_eq!(loaded.server_url, "http://10.0.0.5:8000");
    assert_eq!(
        loaded.database_uri.as_deref(),
        Some("sqlite:///demo/Chinook.db")
    );
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.yml");
    fs::write(&path, "database_uri: sqlite:///demo/Chinook.db\n").unwrap();
    let path = path.to_string_lossy();

    let config = Config::load(Some(&path)).unwrap();

    assert_eq!(config.server_url, "http://localhost:8000");
    assert_eq!(config.database_uri.as_deref(), Some("sqlite:///demo/Chinook.db"));
}
