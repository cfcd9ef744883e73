// Integration tests for the shipped project files.

use std::path::Path;

use cricket_dashboard::config;

/// Verify that defaults/dashboard.toml is valid TOML.
#[test]
fn default_config_is_valid_toml() {
    let content = std::fs::read_to_string("defaults/dashboard.toml")
        .expect("defaults/dashboard.toml should exist");
    let parsed: Result<toml::Value, _> = toml::from_str(&content);
    assert!(
        parsed.is_ok(),
        "defaults/dashboard.toml is not valid TOML: {:?}",
        parsed.err()
    );
}

/// Verify that the shipped defaults pass validation and point at the local API.
#[test]
fn default_config_has_expected_settings() {
    let content = std::fs::read_to_string("defaults/dashboard.toml")
        .expect("defaults/dashboard.toml should exist");
    let config = config::parse_config(&content).expect("defaults should parse");
    config::validate(&config).expect("defaults should validate");

    assert_eq!(config.api.base_url, "http://localhost:8000/api");
    assert_eq!(config.search.min_query_len, 3);
    assert_eq!(config.search.limit, None);
    assert_eq!(config.prediction.season, 2024);
    assert_eq!(config.prediction.toss_choice, "bat");
    assert_eq!(config.prediction.toss_winner, None);
}

/// Verify that all expected source files exist.
#[test]
fn source_files_exist() {
    let expected_files = [
        "src/main.rs",
        "src/lib.rs",
        "src/app.rs",
        "src/config.rs",
        "src/dashboard.rs",
        "src/model.rs",
        "src/protocol.rs",
        "src/api/mod.rs",
        "src/api/client.rs",
        "src/api/wire.rs",
        "src/tui/mod.rs",
        "src/tui/input.rs",
        "src/tui/layout.rs",
    ];

    for file in &expected_files {
        assert!(Path::new(file).is_file(), "File {} should exist", file);
    }
}
