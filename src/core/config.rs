use crate::core::reference::ReferenceSeries;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tracing::debug;

/// Example configuration shipped with the binary, also used when no
/// configuration file exists yet.
pub const EXAMPLE_CONFIG: &str = include_str!("../../docs/example_config.yaml");

fn default_currency_symbol() -> String {
    "$".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default)]
    pub reference: Option<ReferenceSeries>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            currency_symbol: default_currency_symbol(),
            reference: None,
        }
    }
}

impl AppConfig {
    /// Loads the configuration from the default location, falling back to
    /// the bundled example when the file does not exist.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(
                "No config at {}, using bundled example",
                config_path.display()
            );
            return Self::from_yaml(EXAMPLE_CONFIG).context("Failed to parse bundled config");
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("ar", "sde", "ipc")
            .context("Could not determine project directories")?;
        Ok(proj_dirs.config_dir().join("config.yaml"))
    }

    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config = Self::from_yaml(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }

    fn from_yaml(config_str: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(config_str)?;
        if let Some(reference) = &config.reference {
            reference.validate()?;
        }
        Ok(config)
    }
}
