//! Application configuration.
//!
//! Values come from `<config_dir>/tfmtui/config.toml` and may be overridden
//! through `TFMTUI_*` environment variables.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

/// Directory under the user's config dir holding `config.toml`.
pub const CONFIG_DIR: &str = "tfmtui";
/// Name of the configuration file.
pub const CONFIG_FILE: &str = "config.toml";
/// Prefix for environment overrides (`TFMTUI_QUANTITY_STEP=5`).
pub const ENV_PREFIX: &str = "TFMTUI";

const DEFAULT_CONFIG: &str = r#"# tfmtui configuration

# Directory for log files, relative paths resolve against the working directory.
log_dir = "logs"

# Amount added or removed by the quantity keys.
quantity_step = 1

# Values offered by the terraform picker.
terraform_min = 0
terraform_max = 100
"#;

/// Problems found while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file or environment could not be read or deserialized.
    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
    /// `terraform_min` is greater than `terraform_max`.
    #[error("terraform range is inverted ({min} > {max})")]
    InvertedTerraformRange {
        /// Configured lower bound.
        min: i32,
        /// Configured upper bound.
        max: i32,
    },
    /// `quantity_step` is zero or negative.
    #[error("quantity step must be positive, got {0}")]
    NonPositiveQuantityStep(i32),
}

/// Runtime settings for the terminal front-end.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory receiving `tfmtui.log`.
    pub log_dir: PathBuf,
    /// Amount added or removed by one quantity key press.
    pub quantity_step: i32,
    /// Lowest value offered by the terraform picker.
    pub terraform_min: i32,
    /// Highest value offered by the terraform picker.
    pub terraform_max: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            quantity_step: 1,
            terraform_min: 0,
            terraform_max: 100,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(default_config_path())
    }

    /// Load configuration from `path`, which may be missing.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Check the cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terraform_min > self.terraform_max {
            return Err(ConfigError::InvertedTerraformRange {
                min: self.terraform_min,
                max: self.terraform_max,
            });
        }
        if self.quantity_step <= 0 {
            return Err(ConfigError::NonPositiveQuantityStep(self.quantity_step));
        }
        Ok(())
    }
}

/// `<config_dir>/tfmtui/config.toml`, falling back to the working directory.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILE)
}

/// Write the default configuration file if none exists yet.
pub fn ensure_default_config() -> Result<()> {
    ensure_default_config_at(default_config_path())
}

/// Write the default configuration to `path` unless it already exists.
pub fn ensure_default_config_at(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create config directory {}", parent.display()))?;
    }
    fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write default config {}", path.display()))?;
    info!(path = %path.display(), "wrote default configuration");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_file_round_trips_to_defaults() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join(CONFIG_FILE);

        ensure_default_config_at(&path)?;
        assert!(path.exists());

        let config = AppConfig::load_from(&path)?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    }

    #[test]
    fn existing_file_is_left_untouched() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "quantity_step = 5\n")?;

        ensure_default_config_at(&path)?;

        assert_eq!(fs::read_to_string(&path)?, "quantity_step = 5\n");
        let config = AppConfig::load_from(&path)?;
        assert_eq!(config.quantity_step, 5);
        assert_eq!(config.terraform_max, 100);
        Ok(())
    }

    #[test]
    fn missing_file_yields_defaults() -> Result<()> {
        let dir = tempdir()?;
        let config = AppConfig::load_from(dir.path().join("absent.toml"))?;
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.quantity_step, 1);
        Ok(())
    }

    #[test]
    fn rejects_inverted_terraform_range() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "terraform_min = 50\nterraform_max = 10\n")?;

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvertedTerraformRange { min: 50, max: 10 }
        ));
        Ok(())
    }

    #[test]
    fn rejects_non_positive_step() {
        let config = AppConfig {
            quantity_step: 0,
            ..AppConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositiveQuantityStep(0))
        ));
    }

    #[test]
    fn malformed_file_is_a_load_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "quantity_step = \"lots\"\n")?;

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
        Ok(())
    }
}
