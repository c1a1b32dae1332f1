// Configuration loader
// Loads the API base URL from ~/.charpick/config.toml or environment variable

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;

/// Environment variable overriding the configured API base URL.
pub const API_BASE_ENV: &str = "CHARPICK_API_BASE";

/// Directory holding the config file and the diagnostic log.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".charpick"))
}

/// Load configuration from ~/.charpick/config.toml, falling back to the
/// compiled-in defaults. The environment variable takes precedence over
/// the file for the base URL.
pub fn load_config() -> Result<Config> {
    let mut config = match config_dir() {
        Some(dir) => load_from_path(&dir.join("config.toml"))?.unwrap_or_default(),
        None => Config::default(),
    };

    if let Ok(base) = std::env::var(API_BASE_ENV) {
        if !base.is_empty() {
            config.api_base_url = base;
        }
    }

    Ok(config)
}

/// Load configuration from a specific file. A missing file is not an error.
pub fn load_from_path(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;

    parse_config(&contents).map(Some)
}

fn parse_config(contents: &str) -> Result<Config> {
    // Every field is optional; absent fields keep their defaults.
    #[derive(serde::Deserialize)]
    struct TomlConfig {
        #[serde(default)]
        api_base_url: Option<String>,
        #[serde(default)]
        request_timeout_secs: Option<u64>,
    }

    let toml_config: TomlConfig =
        toml::from_str(contents).context("Failed to parse config file")?;

    let mut config = Config::default();
    if let Some(base) = toml_config.api_base_url {
        config.api_base_url = base;
    }
    if let Some(secs) = toml_config.request_timeout_secs {
        config.request_timeout_secs = secs;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            "api_base_url = \"http://localhost:9000/api\"\nrequest_timeout_secs = 3\n",
        )
        .unwrap();
        assert_eq!(config.api_base_url, "http://localhost:9000/api");
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = parse_config("request_timeout_secs = 30\n").unwrap();
        assert_eq!(config.api_base_url, crate::config::DEFAULT_API_BASE);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(parse_config("api_base_url = [broken").is_err());
    }

    #[test]
    fn test_missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_from_path(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_from_file_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "api_base_url = \"http://127.0.0.1:8080\"").unwrap();

        let config = load_from_path(&path).unwrap().expect("file exists");
        assert_eq!(config.api_base_url, "http://127.0.0.1:8080");
    }
}
