//! Configuration command handlers. These never touch the network.

use leadwire_config::{Config, Profile};

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub fn handle(args: &ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match &args.command {
        ConfigCommand::Init {
            gateway,
            name,
            timeout,
            bulk_limit,
        } => {
            // Reject bad URLs before persisting anything.
            gateway
                .parse::<url::Url>()
                .map_err(|_| CliError::Validation {
                    field: "gateway".into(),
                    reason: format!("invalid URL: {gateway}"),
                })?;

            let mut cfg = leadwire_config::load_config_or_default();
            cfg.profiles.insert(
                name.clone(),
                Profile {
                    gateway: gateway.clone(),
                    timeout: *timeout,
                    refresh_interval: None,
                    bulk_limit: *bulk_limit,
                },
            );
            if cfg.default_profile.is_none() {
                cfg.default_profile = Some(name.clone());
            }
            leadwire_config::save_config(&cfg)?;

            if !global.quiet {
                eprintln!(
                    "Profile '{name}' saved to {}",
                    leadwire_config::config_path().display()
                );
            }
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg: Config = leadwire_config::load_config_or_default();
            let toml_str = toml::to_string_pretty(&cfg)
                .map_err(leadwire_config::ConfigError::Serialization)?;
            output::print_output(toml_str.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(
                &leadwire_config::config_path().display().to_string(),
                global.quiet,
            );
            Ok(())
        }
    }
}
