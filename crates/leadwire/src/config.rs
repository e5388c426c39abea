//! Resolution from config file + env + CLI flags to a `ConsoleConfig`.

use std::time::Duration;

use leadwire_core::ConsoleConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Build a `ConsoleConfig` from the config file, profile, and CLI
/// overrides. Flags win over the profile; the profile wins over
/// defaults.
pub fn build_console_config(global: &GlobalOpts) -> Result<ConsoleConfig, CliError> {
    let cfg = leadwire_config::load_config_or_default();
    let profile_name = global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| "default".into());

    let mut console = if let Some(profile) = cfg.profiles.get(&profile_name) {
        leadwire_config::profile_to_console_config(profile)?
    } else {
        // No profile on disk -- the gateway must come from flags/env.
        let url_str = global.gateway.as_deref().ok_or_else(|| CliError::NoConfig {
            path: leadwire_config::config_path().display().to_string(),
        })?;
        let base_url = parse_gateway(url_str)?;
        ConsoleConfig {
            base_url,
            ..ConsoleConfig::default()
        }
    };

    if let Some(ref url_str) = global.gateway {
        console.base_url = parse_gateway(url_str)?;
    }
    console.timeout = Duration::from_secs(global.timeout);

    Ok(console)
}

fn parse_gateway(raw: &str) -> Result<url::Url, CliError> {
    raw.parse().map_err(|_| CliError::Validation {
        field: "gateway".into(),
        reason: format!("invalid URL: {raw}"),
    })
}
