use std::path::Path;

use recipebook::{Config, Tier};
use tracing::instrument;

use super::terminal::Colorize;

/// Show or modify the presentation settings
///
/// Settings are stored in the file given by `--config` (default
/// `recipes.toml`). Missing files read as the defaults and are created on the
/// first `set`.
///
/// Available keys:
///   `default_min_tier`  Tier threshold for `list` (default: basic)
///   `show_ingredients`  Print ingredient lines in listings (default: true)
#[derive(Debug, clap::Parser)]
pub struct Command {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, clap::Parser)]
enum ConfigCommand {
    /// Show all configuration values
    Show,

    /// Get a specific configuration value
    Get {
        /// Configuration key to retrieve
        key: String,
    },

    /// Set a configuration value
    ///
    /// Examples:
    ///   recipes config set `default_min_tier` advanced
    ///   recipes config set `show_ingredients` false
    Set {
        /// Configuration key to set
        key: String,

        /// Value to set
        value: String,
    },
}

const KEYS: &str = "default_min_tier, show_ingredients";

impl Command {
    #[instrument(level = "debug", skip(self))]
    pub fn run(self, config_path: &Path) -> anyhow::Result<()> {
        let mut config = load_or_default(config_path)?;

        match self.command {
            ConfigCommand::Show => {
                println!("Configuration:");
                println!("  default_min_tier: {}", config.default_min_tier());
                println!("  show_ingredients: {}", config.show_ingredients);
            }
            ConfigCommand::Get { key } => println!("{}", get(&config, &key)?),
            ConfigCommand::Set { key, value } => {
                set(&mut config, &key, &value)?;
                config
                    .save(config_path)
                    .map_err(|e| anyhow::anyhow!("{e}"))?;
                tracing::debug!(path = %config_path.display(), "configuration saved");
                println!("{}", format!("{key} = {}", get(&config, &key)?).success());
            }
        }
        Ok(())
    }
}

fn load_or_default(config_path: &Path) -> anyhow::Result<Config> {
    if config_path.exists() {
        Config::load(config_path).map_err(|e| anyhow::anyhow!("{e}"))
    } else {
        Ok(Config::default())
    }
}

fn get(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "default_min_tier" => Ok(config.default_min_tier().to_string()),
        "show_ingredients" => Ok(config.show_ingredients.to_string()),
        _ => anyhow::bail!("Unknown configuration key: '{key}'\nSupported keys: {KEYS}"),
    }
}

fn set(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    match key {
        "default_min_tier" => config.set_default_min_tier(value.parse::<Tier>()?),
        "show_ingredients" => {
            config.show_ingredients = value
                .parse::<bool>()
                .map_err(|_| anyhow::anyhow!("Value must be 'true' or 'false'"))?;
        }
        _ => anyhow::bail!("Unknown configuration key: '{key}'\nSupported keys: {KEYS}"),
    }
    Ok(())
}
