//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. If no file is found, falls back to built-in defaults
//!
//! ## Environment Variables
//! - `TIMESLICE_DB_PATH`: Database file path
//! - `TIMESLICE_DB_POOL_SIZE`: Connection pool size (optional, default 4)
//!
//! ## File Locations
//! The loader probes the current working directory for `config.json`,
//! `config.toml`, `timeslice.json` and `timeslice.toml`, in that order.
//! Both JSON and TOML formats are supported (detected by extension).

use std::path::{Path, PathBuf};

use timeslice_domain::{Config, DatabaseConfig, Result, TimesliceError};
use tracing::{debug, info};

const CONFIG_FILE_NAMES: [&str; 4] = [
    "config.json",
    "config.toml",
    "timeslice.json",
    "timeslice.toml",
];

/// Load configuration with automatic fallback strategy.
///
/// Environment variables win, then a probed config file, then defaults
/// (a `timeslice.db` under the user's home directory).
pub fn load() -> Config {
    match load_from_env() {
        Ok(config) => {
            info!("configuration loaded from environment variables");
            return config;
        }
        Err(err) => debug!(error = ?err, "no environment configuration"),
    }

    if let Some(path) = probe_config_paths() {
        match load_from_file(&path) {
            Ok(config) => {
                info!(path = %path.display(), "configuration loaded from file");
                return config;
            }
            Err(err) => debug!(error = ?err, path = %path.display(), "config file rejected"),
        }
    }

    info!("using default configuration");
    default_config()
}

/// Load configuration from environment variables.
///
/// # Errors
/// Returns `TimesliceError::Config` if `TIMESLICE_DB_PATH` is missing or
/// `TIMESLICE_DB_POOL_SIZE` has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let path = std::env::var("TIMESLICE_DB_PATH")
        .map_err(|_| TimesliceError::Config("TIMESLICE_DB_PATH not set".into()))?;

    let pool_size = match std::env::var("TIMESLICE_DB_POOL_SIZE") {
        Ok(raw) => raw
            .parse::<u32>()
            .map_err(|err| TimesliceError::Config(format!("invalid pool size: {err}")))?,
        Err(_) => 4,
    };

    Ok(Config {
        database: DatabaseConfig { path, pool_size },
    })
}

/// Load configuration from a JSON or TOML file.
///
/// # Errors
/// Returns `TimesliceError::Config` if the file cannot be read or parsed.
pub fn load_from_file(path: &Path) -> Result<Config> {
    let contents = std::fs::read_to_string(path)
        .map_err(|err| TimesliceError::Config(format!("failed to read config file: {err}")))?;

    parse_config(&contents, path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(contents)
            .map_err(|err| TimesliceError::Config(format!("invalid JSON config: {err}"))),
        Some("toml") => toml::from_str(contents)
            .map_err(|err| TimesliceError::Config(format!("invalid TOML config: {err}"))),
        other => Err(TimesliceError::Config(format!(
            "unsupported config format: {other:?}"
        ))),
    }
}

fn probe_config_paths() -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
}

/// Built-in defaults: `$HOME/.timeslice/timeslice.db`, falling back to the
/// working directory when no home is available.
fn default_config() -> Config {
    let path = std::env::var("HOME")
        .map(|home| {
            PathBuf::from(home)
                .join(".timeslice")
                .join("timeslice.db")
        })
        .unwrap_or_else(|_| PathBuf::from("timeslice.db"));

    Config {
        database: DatabaseConfig {
            path: path.to_string_lossy().into_owned(),
            pool_size: 4,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_json_config() {
        let contents = r#"{"database": {"path": "/tmp/test.db", "pool_size": 8}}"#;
        let config = parse_config(contents, Path::new("config.json")).expect("parse json");
        assert_eq!(config.database.path, "/tmp/test.db");
        assert_eq!(config.database.pool_size, 8);
    }

    #[test]
    fn parses_toml_config_with_default_pool_size() {
        let contents = "[database]\npath = \"/tmp/test.db\"\n";
        let config = parse_config(contents, Path::new("config.toml")).expect("parse toml");
        assert_eq!(config.database.path, "/tmp/test.db");
        assert_eq!(config.database.pool_size, 4);
    }

    #[test]
    fn rejects_unknown_extensions() {
        let result = parse_config("{}", Path::new("config.yaml"));
        assert!(matches!(result, Err(TimesliceError::Config(_))));
    }
}
