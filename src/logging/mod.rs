//! Developer-facing diagnostics.
//!
//! Installs a `tracing` subscriber that writes plain-text lines to the file
//! named in the `[logging]` config section. Stdout belongs to the terminal UI,
//! so nothing is ever logged there. `RUST_LOG` overrides the configured
//! filter.

use crate::config::{self, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Set up file logging. Returns the log path, or `None` when disabled.
pub fn init(cfg: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !cfg.enabled {
        return Ok(None);
    }

    let path = config::expand_home(&cfg.file);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cfg.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();

    Ok(Some(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let cfg = LoggingConfig {
            enabled: false,
            ..Default::default()
        };
        assert_eq!(init(&cfg).unwrap(), None);
    }

    #[test]
    fn test_creates_log_file() {
        let dir = std::env::temp_dir().join(format!("agora-log-{}", std::process::id()));
        let file = dir.join("nested").join("agora.log");
        let cfg = LoggingConfig {
            enabled: true,
            file: file.display().to_string(),
            filter: "debug".into(),
        };
        assert_eq!(init(&cfg).unwrap(), Some(file.clone()));
        assert!(file.exists());
        let _ = fs::remove_dir_all(&dir);
    }
}
