use anyhow::{Context, Result};
use clap::Args;
use lib_hnsearch::SearchOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Settings shared by CLI flags, environment variables and the JSON config file.
///
/// Precedence, highest first: CLI flag / env var, config file, built-in default.
#[derive(Args, Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[arg(long, env = "HN_SEARCH_BASE_URL", help = "Base URL of the Hacker News search API.")]
    pub base_url: Option<String>,

    #[arg(long, env = "HN_SEARCH_TIMEOUT_MS", help = "Request timeout in milliseconds.")]
    pub timeout_ms: Option<u64>,

    #[arg(long, env = "HN_SEARCH_USER_AGENT", help = "User-Agent header sent with the request.")]
    pub user_agent: Option<String>,

    #[arg(long, env = "HN_SEARCH_CONFIG_PATH", help = "Path to the JSON configuration file.")]
    pub config_path: Option<PathBuf>,

    #[arg(long, env = "HN_SEARCH_LOG_DIR", help = "Directory for log files. Logs go to stderr only when unset.")]
    pub log_dir: Option<PathBuf>,

    #[arg(long, env = "HN_SEARCH_LOG_LEVEL", help = "Logging level (trace, debug, info, warn, error, off).")]
    pub log_level: Option<String>,
}

impl Config {
    // Merge two Config structs, where 'other' overrides 'self' for Some values
    pub fn merge(self, other: Config) -> Config {
        Config {
            base_url: other.base_url.or(self.base_url),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
            user_agent: other.user_agent.or(self.user_agent),
            config_path: other.config_path.or(self.config_path),
            log_dir: other.log_dir.or(self.log_dir),
            log_level: other.log_level.or(self.log_level),
        }
    }

    /// Library options; unset fields take the library defaults.
    pub fn search_options(&self) -> SearchOptions {
        let defaults = SearchOptions::default();
        SearchOptions {
            base_url: self.base_url.clone().unwrap_or(defaults.base_url),
            timeout_ms: self.timeout_ms.unwrap_or(defaults.timeout_ms),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or("info")
    }
}

/// Built-in defaults, the bottom layer of the merge.
pub fn default_config() -> Config {
    let search = SearchOptions::default();
    Config {
        base_url: Some(search.base_url),
        timeout_ms: Some(search.timeout_ms),
        user_agent: Some(search.user_agent),
        log_level: Some("info".to_string()),
        ..Default::default()
    }
}

/// `<config dir>/hn-search/config.json`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("hn-search").join("config.json"))
}

/// Reads a config file. A missing file is `Ok(None)`.
pub fn read_config_file(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }
    let config_str = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let file_config = serde_json::from_str::<Config>(&config_str)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    Ok(Some(file_config))
}

/// Layers defaults, the config file and CLI/env values.
///
/// The file comes from `cli.config_path` or [`default_config_path`]. A file
/// that exists but cannot be read or parsed is an error; the caller decides
/// whether to fall back.
pub fn load_config(cli: Config) -> Result<Config> {
    let config_file_path = cli.config_path.clone().or_else(default_config_path);

    let mut current_config = default_config();
    if let Some(path) = config_file_path.as_deref() {
        if let Some(file_config) = read_config_file(path)? {
            current_config = current_config.merge(file_config);
        }
    }

    Ok(current_config.merge(cli))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib_hnsearch::news::hackernews::apicallhn::HN_SEARCH_BASE_URL;

    #[test]
    fn later_layers_override_earlier_ones() {
        let base = Config {
            base_url: Some("http://a/".into()),
            timeout_ms: Some(1),
            ..Default::default()
        };
        let top = Config {
            timeout_ms: Some(2),
            log_level: Some("debug".into()),
            ..Default::default()
        };
        let merged = base.merge(top);
        assert_eq!(merged.base_url.as_deref(), Some("http://a/"));
        assert_eq!(merged.timeout_ms, Some(2));
        assert_eq!(merged.log_level(), "debug");
    }

    #[test]
    fn empty_config_maps_to_library_defaults() {
        let options = Config::default().search_options();
        assert_eq!(options, SearchOptions::default());
        assert_eq!(options.base_url, HN_SEARCH_BASE_URL);
    }

    #[test]
    fn file_values_sit_between_defaults_and_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"baseUrl": "http://localhost:9000/api/v1/", "timeoutMs": 500, "logLevel": "warn"}"#,
        )
        .unwrap();

        let cli = Config {
            config_path: Some(path.clone()),
            timeout_ms: Some(750),
            ..Default::default()
        };
        let config = load_config(cli).unwrap();

        assert_eq!(config.base_url.as_deref(), Some("http://localhost:9000/api/v1/"));
        assert_eq!(config.timeout_ms, Some(750));
        assert_eq!(config.log_level(), "warn");
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Config {
            config_path: Some(dir.path().join("absent.json")),
            ..Default::default()
        };
        let config = load_config(cli).unwrap();
        assert_eq!(config.timeout_ms, Some(10_000));
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = read_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
