pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

/// Environment variable that overrides the backend base URL.
pub const BACKEND_URL_ENV: &str = "AGORA_BACKEND_URL";

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("agora")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;
    Ok(config)
}

/// Pick the backend base URL once at startup: environment override first,
/// then the config file (which itself defaults to the local dev server).
pub fn resolve_base_url(config: &AppConfig) -> String {
    pick_base_url(std::env::var(BACKEND_URL_ENV).ok(), config)
}

fn pick_base_url(env_override: Option<String>, config: &AppConfig) -> String {
    env_override
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| config.backend.base_url.clone())
}

/// Expand a leading `~/` to the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_override_wins() {
        let cfg = AppConfig::default();
        assert_eq!(
            pick_base_url(Some("https://api.example".into()), &cfg),
            "https://api.example"
        );
    }

    #[test]
    fn test_blank_override_falls_back_to_config() {
        let mut cfg = AppConfig::default();
        cfg.backend.base_url = "http://10.0.0.5:8000".into();
        assert_eq!(pick_base_url(Some("  ".into()), &cfg), "http://10.0.0.5:8000");
        assert_eq!(pick_base_url(None, &cfg), "http://10.0.0.5:8000");
    }

    #[test]
    fn test_default_is_local_dev_server() {
        assert_eq!(pick_base_url(None, &AppConfig::default()), "http://localhost:8000");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("agora-no-such-dir").join("config.toml");
        assert_eq!(load_config_from(&path).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join(format!("agora-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[backend\nbase_url = ").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/var/log/agora.log"), PathBuf::from("/var/log/agora.log"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/agora.log"), home.join("agora.log"));
        }
    }
}
