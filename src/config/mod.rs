pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::config::toml_config::CatalogConfig;
use crate::utils::error::Result;

#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "snow-catalog"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Interactive manager for a catalog of snow activities")
)]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub config: Option<String>,

    /// Directory export files are written to (overrides the config file)
    #[cfg_attr(feature = "cli", arg(long))]
    pub export_dir: Option<String>,

    /// Skip the "return to the main menu?" question after each action
    #[cfg_attr(feature = "cli", arg(long))]
    pub no_return_prompt: bool,

    /// Enable verbose output
    #[cfg_attr(feature = "cli", arg(short, long))]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the config file if one was given, then applies command-line overrides.
    pub fn resolve(&self) -> Result<CatalogConfig> {
        let mut config = match &self.config {
            Some(path) => CatalogConfig::from_file(path)?,
            None => CatalogConfig::default(),
        };

        if let Some(dir) = &self.export_dir {
            tracing::debug!("Export directory overridden to: {}", dir);
            config.export.output_dir = dir.clone();
        }
        if self.no_return_prompt {
            config.menu.confirm_return = false;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::ConfigProvider;

    #[test]
    fn test_resolve_without_file_uses_defaults() {
        let config = CliConfig::default().resolve().unwrap();
        assert_eq!(config.output_dir(), ".");
        assert!(config.confirm_return());
    }

    #[test]
    fn test_resolve_applies_overrides() {
        let cli = CliConfig {
            export_dir: Some("/tmp/exports".to_string()),
            no_return_prompt: true,
            ..CliConfig::default()
        };
        let config = cli.resolve().unwrap();
        assert_eq!(config.output_dir(), "/tmp/exports");
        assert!(!config.confirm_return());
    }

    #[test]
    fn test_resolve_missing_file_fails() {
        let cli = CliConfig {
            config: Some("/definitely/not/here/snow.toml".to_string()),
            ..CliConfig::default()
        };
        assert!(cli.resolve().is_err());
    }
}
