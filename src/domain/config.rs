use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::Tier;

/// Configuration for presenting a recipe catalog.
///
/// This struct holds settings that control how the `recipes` tool lists
/// recipes. It has no effect on the behaviour of the [`Catalog`] itself.
///
/// [`Catalog`]: crate::Catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The tier threshold used when listing recipes without an explicit
    /// `--min-tier`.
    default_min_tier: Tier,

    /// Whether listings include each recipe's ingredients.
    pub show_ingredients: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_min_tier: Tier::default(),
            show_ingredients: default_show_ingredients(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {e}"))?;
        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {e}"))
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), String> {
        let content =
            toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {e}"))?;
        std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {e}"))
    }

    /// Returns the default tier threshold for listings.
    #[must_use]
    pub const fn default_min_tier(&self) -> Tier {
        self.default_min_tier
    }

    /// Sets the default tier threshold for listings.
    pub const fn set_default_min_tier(&mut self, tier: Tier) {
        self.default_min_tier = tier;
    }
}

const fn default_show_ingredients() -> bool {
    true
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default)]
        default_min_tier: Tier,

        #[serde(default = "default_show_ingredients")]
        show_ingredients: bool,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                default_min_tier,
                show_ingredients,
            } => Self {
                default_min_tier,
                show_ingredients,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            default_min_tier: config.default_min_tier,
            show_ingredients: config.show_ingredients,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(
            b"_version = \"1\"\ndefault_min_tier = \"expert\"\nshow_ingredients = false\n",
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.default_min_tier(), Tier::Expert);
        assert!(!config.show_ingredients);
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(error.starts_with("Failed to read config file:"));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\ndefault_min_tier = \"legendary\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(error.starts_with("Failed to parse config file:"));
    }

    #[test]
    fn empty_file_returns_default() {
        // Tests that deserialising an empty file returns the default configuration.
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("recipes.toml");

        let mut config = Config::default();
        config.set_default_min_tier(Tier::Master);
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
