//! Config file parsing for `~/.config/interview-citation/config.toml`.
//! Set `INTERVIEW_CITATION_CONFIG` to point at a different file.
//!
//! Use `dialog_options_from_config` to build dialog options and `apply_defaults` to fill
//! blank record fields from the `[defaults]` table.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::dialog::{DialogOptions, DEFAULT_PLACEHOLDER};
use crate::error::ConfigError;
use crate::params::CitationParams;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_copied_indicator_ms")]
    pub copied_indicator_ms: u64,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}
fn default_copied_indicator_ms() -> u64 {
    2000
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            copied_indicator_ms: default_copied_indicator_ms(),
        }
    }
}

/// Values used when a record leaves the matching field blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_name: Option<String>,
    #[serde(default)]
    pub is_audio: bool,
}

/// Load config from the default path. Missing or malformed files yield defaults.
pub fn load_config() -> AppConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => AppConfig::default(),
    }
}

pub fn load_config_from(path: &Path) -> AppConfig {
    match read_config(path) {
        Ok(cfg) => cfg,
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            tracing::warn!("Ignoring config {}: {}", path.display(), e);
            AppConfig::default()
        }
    }
}

/// Strict variant of `load_config_from`: IO and parse failures are returned.
pub fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Return the config file path (for init and show).
/// `INTERVIEW_CITATION_CONFIG` overrides the platform config directory.
pub fn config_path() -> Option<PathBuf> {
    if let Ok(p) = std::env::var("INTERVIEW_CITATION_CONFIG") {
        return Some(PathBuf::from(p));
    }
    dirs::config_dir().map(|mut p| {
        p.push("interview-citation");
        p.push("config.toml");
        p
    })
}

pub fn save_config(cfg: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(cfg)?)?;
    Ok(())
}

/// Set a dot-separated key such as `display.placeholder`.
pub fn set_config_key(cfg: &mut AppConfig, key: &str, value: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    };
    match key.split_once('.') {
        Some(("display", "placeholder")) => cfg.display.placeholder = value.to_string(),
        Some(("display", "copied_indicator_ms")) => {
            cfg.display.copied_indicator_ms = value.parse().map_err(|_| invalid())?
        }
        Some(("defaults", "archive_name")) => {
            cfg.defaults.archive_name = if value.is_empty() {
                None
            } else {
                Some(value.to_string())
            }
        }
        Some(("defaults", "is_audio")) => cfg.defaults.is_audio = value.parse().map_err(|_| invalid())?,
        _ => return Err(ConfigError::UnknownKey(key.to_string())),
    }
    Ok(())
}

pub fn dialog_options_from_config(cfg: &AppConfig) -> DialogOptions {
    DialogOptions {
        placeholder: cfg.display.placeholder.clone(),
        copied_indicator: Duration::from_millis(cfg.display.copied_indicator_ms),
    }
}

/// Fill a blank archive name from config.
pub fn apply_defaults(params: &mut CitationParams, defaults: &DefaultsConfig) {
    if params.archive_name.is_empty() {
        if let Some(archive) = &defaults.archive_name {
            params.archive_name = archive.clone();
        }
    }
}
