//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command against the file at `path`.
pub fn execute_config(args: ConfigArgs, config: &mut Config, path: &Path, formatter: &Formatter) -> Result<()> {
    match args.action {
        ConfigAction::Show => {
            let contents = toml::to_string_pretty(&*config)
                .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
            println!("{}", formatter.info(&format!("Config file: {}", path.display())));
            println!("{}", contents);
        }
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(CliError::Config(format!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                )));
            }
            *config = Config::default();
            config.save_to(path)?;
            println!("{}", formatter.success(&format!("Wrote {}", path.display())));
        }
        ConfigAction::SetUrl { url } => {
            update_service(config, path, |c| c.service.base_url = url.clone())?;
            println!("{}", formatter.success(&format!("Service URL set to {}", url)));
        }
        ConfigAction::SetTimeout { secs } => {
            update_service(config, path, |c| c.service.timeout_secs = secs)?;
            println!("{}", formatter.success(&format!("Timeout set to {}s", secs)));
        }
    }

    Ok(())
}

/// Apply a change, validate it, and persist on success.
fn update_service(config: &mut Config, path: &Path, change: impl FnOnce(&mut Config)) -> Result<()> {
    let mut updated = config.clone();
    change(&mut updated);
    updated.service.validate().map_err(CliError::InvalidInput)?;
    updated.save_to(path)?;
    *config = updated;
    Ok(())
}
