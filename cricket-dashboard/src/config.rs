// Configuration loading and parsing (dashboard.toml).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

const CONFIG_FILE: &str = "dashboard.toml";

/// Accepted values for a toss choice, from config or the prediction form.
pub const TOSS_CHOICES: [&str; 2] = ["bat", "field"];

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("failed to parse config file {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("validation error for field `{field}`: {message}")]
    ValidationError { field: String, message: String },

    #[error("failed to initialize config from defaults: {message}")]
    DefaultsCopyError { message: String },
}

// ---------------------------------------------------------------------------
// dashboard.toml structs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub prediction: PredictionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, e.g. `http://localhost:8000/api`.
    pub base_url: String,
    #[serde(default = "default_health_check_secs")]
    pub health_check_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    /// Sent as `limit` on the search request when set.
    #[serde(default)]
    pub limit: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            min_query_len: default_min_query_len(),
            limit: None,
        }
    }
}

/// Defaults for the prediction payload fields the form does not require.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    #[serde(default = "default_season")]
    pub season: u16,
    #[serde(default = "default_toss_choice")]
    pub toss_choice: String,
    /// `None` means the batting team is sent as the toss winner.
    #[serde(default)]
    pub toss_winner: Option<String>,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        PredictionConfig {
            season: default_season(),
            toss_choice: default_toss_choice(),
            toss_winner: None,
        }
    }
}

fn default_health_check_secs() -> u64 {
    15
}

fn default_min_query_len() -> usize {
    3
}

fn default_season() -> u16 {
    2024
}

fn default_toss_choice() -> String {
    "bat".to_string()
}

// ---------------------------------------------------------------------------
// Loading logic
// ---------------------------------------------------------------------------

/// Load and validate `config/dashboard.toml` relative to `base_dir`.
///
/// This does not copy defaults; prefer `load_config()` for normal startup.
pub fn load_config_from(base_dir: &Path) -> Result<Config, ConfigError> {
    let path = base_dir.join("config").join(CONFIG_FILE);
    let text = read_file(&path)?;
    let config = parse_config(&text).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        source: e,
    })?;

    validate(&config)?;

    Ok(config)
}

/// Parse a config document without touching the filesystem or validating it.
pub fn parse_config(text: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(text)
}

/// Seed `config/dashboard.toml` from `defaults/dashboard.toml` when it is
/// missing. Returns the path written, or `None` if a config file was already
/// in place. An existing file is never overwritten.
pub fn seed_config(base_dir: &Path) -> Result<Option<PathBuf>, ConfigError> {
    let target = base_dir.join("config").join(CONFIG_FILE);
    if target.exists() {
        return Ok(None);
    }

    let source = base_dir.join("defaults").join(CONFIG_FILE);
    if !source.is_file() {
        return Err(ConfigError::DefaultsCopyError {
            message: format!(
                "no config/{CONFIG_FILE} or defaults/{CONFIG_FILE} in {}; \
                 run from the crate root",
                base_dir.display()
            ),
        });
    }

    if let Some(config_dir) = target.parent() {
        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::DefaultsCopyError {
            message: format!("failed to create {}: {e}", config_dir.display()),
        })?;
    }
    std::fs::copy(&source, &target).map_err(|e| ConfigError::DefaultsCopyError {
        message: format!(
            "failed to copy {} to {}: {e}",
            source.display(),
            target.display()
        ),
    })?;

    Ok(Some(target))
}

/// Convenience wrapper: loads config relative to the current working directory.
/// Seeds the config file from `defaults/` before loading.
pub fn load_config() -> Result<Config, ConfigError> {
    let cwd = std::env::current_dir().map_err(|_| ConfigError::FileNotFound {
        path: PathBuf::from("."),
    })?;
    seed_config(&cwd)?;
    load_config_from(&cwd)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn read_file(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let base_url = config.api.base_url.trim();
    if base_url.is_empty() {
        return Err(ConfigError::ValidationError {
            field: "api.base_url".into(),
            message: "must not be empty".into(),
        });
    }
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::ValidationError {
            field: "api.base_url".into(),
            message: format!("must start with http:// or https://, got {base_url}"),
        });
    }

    if config.api.health_check_secs == 0 {
        return Err(ConfigError::ValidationError {
            field: "api.health_check_secs".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.search.min_query_len == 0 {
        return Err(ConfigError::ValidationError {
            field: "search.min_query_len".into(),
            message: "must be greater than 0".into(),
        });
    }

    if config.search.limit == Some(0) {
        return Err(ConfigError::ValidationError {
            field: "search.limit".into(),
            message: "must be greater than 0 when set".into(),
        });
    }

    if config.prediction.season == 0 {
        return Err(ConfigError::ValidationError {
            field: "prediction.season".into(),
            message: "must be greater than 0".into(),
        });
    }

    let choice = config.prediction.toss_choice.as_str();
    if !TOSS_CHOICES.contains(&choice) {
        return Err(ConfigError::ValidationError {
            field: "prediction.toss_choice".into(),
            message: format!("must be \"bat\" or \"field\", got {choice:?}"),
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
