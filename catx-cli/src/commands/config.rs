//! Config command implementation - show or write configuration

use anyhow::Result;
use std::path::PathBuf;

use crate::config::Config;

pub fn execute(config: &Config, example: bool, output: Option<PathBuf>) -> Result<()> {
    let source = if example { Config::default() } else { config.clone() };

    match output {
        Some(path) => {
            source.save_to_file(&path)?;
            log::info!("Wrote configuration to {}", path.display());
        }
        None => {
            let content = if example {
                Config::example_toml()?
            } else {
                toml::to_string_pretty(&source).map_err(crate::error::CliError::from)?
            };
            print!("{}", content);
        }
    }

    Ok(())
}
