//! Shared configuration for the Leadwire CLI.
//!
//! TOML profiles with environment overrides, translated to
//! `leadwire_core::ConsoleConfig`. The core never reads config files --
//! this crate is the only place that touches disk, and the CLI layers
//! flag overrides on top.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use leadwire_core::ConsoleConfig;
use leadwire_core::config::DEFAULT_BULK_LIMIT;

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named gateway profiles.
    #[serde(default)]
    pub profiles: HashMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: HashMap::new(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named gateway profile.
#[derive(Debug, Deserialize, Serialize)]
pub struct Profile {
    /// Backend API root (e.g., "http://127.0.0.1:5000/api").
    pub gateway: String,

    /// Override request timeout (seconds).
    pub timeout: Option<u64>,

    /// Background refresh interval for long-lived consumers (seconds).
    pub refresh_interval: Option<u64>,

    /// Safety ceiling on bulk-campaign recipients per call.
    pub bulk_limit: Option<u32>,
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("io", "leadwire", "leadwire").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("leadwire");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit path (exposed for tests).
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("LEADWIRE_").split("_"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    save_config_to(cfg, &config_path())
}

/// Save to an explicit path (exposed for tests).
pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation to ConsoleConfig ────────────────────────────────────

/// Build a `ConsoleConfig` from a profile -- no CLI flag overrides.
pub fn profile_to_console_config(profile: &Profile) -> Result<ConsoleConfig, ConfigError> {
    let base_url: url::Url = profile
        .gateway
        .parse()
        .map_err(|_| ConfigError::Validation {
            field: "gateway".into(),
            reason: format!("invalid URL: {}", profile.gateway),
        })?;

    Ok(ConsoleConfig {
        base_url,
        timeout: Duration::from_secs(profile.timeout.unwrap_or(30)),
        refresh_interval_secs: profile.refresh_interval.unwrap_or(0),
        bulk_recipient_limit: profile.bulk_limit.unwrap_or(DEFAULT_BULK_LIMIT),
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn profile_translates_to_console_config() {
        let profile = Profile {
            gateway: "http://10.0.0.5:5000/api".into(),
            timeout: Some(10),
            refresh_interval: Some(60),
            bulk_limit: None,
        };

        let cfg = profile_to_console_config(&profile).unwrap();
        assert_eq!(cfg.base_url.as_str(), "http://10.0.0.5:5000/api");
        assert_eq!(cfg.timeout, Duration::from_secs(10));
        assert_eq!(cfg.refresh_interval_secs, 60);
        assert_eq!(cfg.bulk_recipient_limit, DEFAULT_BULK_LIMIT);
    }

    #[test]
    fn invalid_gateway_url_is_a_validation_error() {
        let profile = Profile {
            gateway: "not a url".into(),
            timeout: None,
            refresh_interval: None,
            bulk_limit: None,
        };
        assert!(matches!(
            profile_to_console_config(&profile),
            Err(ConfigError::Validation { .. })
        ));
    }

    #[test]
    fn round_trips_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = Config::default();
        cfg.profiles.insert(
            "staging".into(),
            Profile {
                gateway: "http://staging:5000/api".into(),
                timeout: Some(5),
                refresh_interval: None,
                bulk_limit: Some(10),
            },
        );
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        let staging = &loaded.profiles["staging"];
        assert_eq!(staging.gateway, "http://staging:5000/api");
        assert_eq!(staging.bulk_limit, Some(10));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let loaded = load_config_from(Path::new("/nonexistent/leadwire.toml")).unwrap();
        assert_eq!(loaded.default_profile.as_deref(), Some("default"));
        assert!(loaded.profiles.is_empty());
    }
}
