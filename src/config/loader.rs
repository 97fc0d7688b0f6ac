// Configuration loader
// Loads settings from ~/.solace/config.toml, falling back to defaults

use anyhow::{Context, Result};
use std::fs;

use super::settings::Config;

/// Load configuration from the Solace config file, or defaults when absent
pub fn load_config() -> Result<Config> {
    let Some(home) = dirs::home_dir() else {
        return Ok(Config::default());
    };

    let config_path = home.join(".solace/config.toml");
    if !config_path.exists() {
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;

    let config: Config = toml::from_str(&contents).context("Failed to parse config.toml")?;

    Ok(config)
}
