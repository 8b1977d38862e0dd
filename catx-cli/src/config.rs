//! Configuration handling for CatX CLI
//!
//! Supports loading configuration from catx.toml files with CLI argument overrides.

use catx_core::{AxisConfig, Factor, FactorRange, RangePadding};
use catx_render::ExportConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CliError, CliResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub range: RangeConfig,

    #[serde(default)]
    pub axis: AxisConfig,

    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RangeConfig {
    /// Factors in display order
    pub factors: Vec<Factor>,

    #[serde(flatten)]
    pub padding: RangePadding,
}

fn example_factors() -> Vec<Factor> {
    let quarters = [("Q1", ["jan", "feb", "mar"]), ("Q2", ["apr", "may", "jun"])];
    let mut factors = Vec::new();
    for year in ["2023", "2024"] {
        for (quarter, months) in quarters {
            for month in months {
                factors.push(Factor::from((year, quarter, month)));
            }
        }
    }
    factors
}

impl Default for Config {
    fn default() -> Self {
        Self {
            range: RangeConfig {
                factors: example_factors(),
                padding: RangePadding::default(),
            },
            axis: AxisConfig::default(),
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(config_path: Option<&Path>) -> CliResult<Self> {
        let config = match config_path {
            Some(path) => {
                log::info!("Loading configuration from: {}", path.display());
                Self::load_from_file(path)?
            }
            None => {
                // Try to find catx.toml in current directory
                let default_path = PathBuf::from("catx.toml");
                if default_path.exists() {
                    log::info!("Loading configuration from: catx.toml");
                    Self::load_from_file(&default_path)?
                } else {
                    log::info!("Using default configuration");
                    Self::default()
                }
            }
        };

        Ok(config)
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_file(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Err(CliError::file_not_found(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::parse(path.display().to_string(), e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn save_to_file(&self, path: &Path) -> CliResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Generate example configuration file content
    pub fn example_toml() -> CliResult<String> {
        Ok(toml::to_string_pretty(&Self::default())?)
    }

    /// Build and validate the factor range
    pub fn build_range(&self) -> CliResult<FactorRange> {
        Ok(FactorRange::with_padding(self.range.factors.clone(), self.range.padding)?)
    }
}
